//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
mod common;

use common::isolate_user_config;
use pretty_assertions::assert_eq;
use tabloid_config::{ConfigError, TabloidConfig};
use tabloid_core::RefreshPolicy;

#[test]
fn loads_api_and_view_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://news.example.com/api"
timeout_secs = 5
user_agent = "tabloid-test"

[view]
refresh_policy = "reapply_search"
"#,
        )?;

        let config: TabloidConfig = Figment::from(Serialized::defaults(TabloidConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://news.example.com/api");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.user_agent, "tabloid-test");
        assert_eq!(config.view.refresh_policy, RefreshPolicy::ReapplySearch);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_dir(".tabloid")?;
        jail.create_file(
            ".tabloid/config.toml",
            r#"
[view]
refresh_policy = "patch_in_place"
"#,
        )?;

        let config = TabloidConfig::load().expect("config loads");
        assert_eq!(config.view.refresh_policy, RefreshPolicy::PatchInPlace);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
timeout_secs = 12
"#,
        )?;

        let config: TabloidConfig = Figment::from(Serialized::defaults(TabloidConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.timeout_secs, 12);
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.view.refresh_policy, RefreshPolicy::RefetchAll);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "not a url"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(TabloidConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = TabloidConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn unknown_refresh_policy_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[view]
refresh_policy = "whenever"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(TabloidConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = TabloidConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_is_read_from_config_home_and_project_wins() {
    Jail::expect_with(|jail| {
        let config_home = isolate_user_config(jail);
        let user_dir = config_home.join("tabloid");
        jail.create_dir(&user_dir)?;
        jail.create_file(
            user_dir.join("config.toml"),
            r#"
[api]
base_url = "https://user.example.com/api"
timeout_secs = 7
"#,
        )?;
        jail.create_dir(".tabloid")?;
        jail.create_file(
            ".tabloid/config.toml",
            r#"
[api]
timeout_secs = 9
"#,
        )?;

        let config = TabloidConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://user.example.com/api");
        assert_eq!(config.api.timeout_secs, 9);
        Ok(())
    });
}

#[test]
fn no_user_config_in_sandbox_means_defaults() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);

        let config = TabloidConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.view.refresh_policy, RefreshPolicy::RefetchAll);
        Ok(())
    });
}
