use std::path::PathBuf;

use figment::Jail;

/// Point `HOME` and `XDG_CONFIG_HOME` inside the jail so the user-global
/// config layer never reads the real `~/.config/tabloid/config.toml`.
///
/// Returns the jail-relative directory that stands in for `~/.config`.
pub fn isolate_user_config(jail: &mut Jail) -> PathBuf {
    let home = jail.directory().join("home");
    jail.set_env("HOME", home.display());
    jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
    PathBuf::from("home").join(".config")
}
