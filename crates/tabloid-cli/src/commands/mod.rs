pub mod create;
pub mod delete;
pub mod dispatch;
pub mod get;
pub mod list;
pub mod search;
pub mod shell;
pub mod update;
