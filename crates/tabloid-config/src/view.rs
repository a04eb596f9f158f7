//! Article view behaviour.

use serde::{Deserialize, Serialize};
use tabloid_core::RefreshPolicy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ViewConfig {
    /// What to do with the article list after a create, update or delete.
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,
}
