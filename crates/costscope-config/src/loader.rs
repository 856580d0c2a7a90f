// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./costscope.toml` > `~/.config/costscope/costscope.toml` >
//! `/etc/costscope/costscope.toml` with environment variable overrides via `COSTSCOPE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CostscopeConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/costscope/costscope.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "costscope.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/costscope/costscope.toml` (system-wide)
/// 3. `~/.config/costscope/costscope.toml` (user XDG config)
/// 4. `./costscope.toml` (local directory)
/// 5. `COSTSCOPE_*` environment variables
pub fn load_config() -> Result<CostscopeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<CostscopeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CostscopeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CostscopeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CostscopeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(CostscopeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/costscope/costscope.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("costscope").join(LOCAL_CONFIG_FILE))
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")`: nearly every key contains
/// underscores. `COSTSCOPE_CONVERSION_WORDS_PER_PAGE` must map to
/// `conversion.words_per_page`, not `conversion.words.per.page`.
fn env_provider() -> Env {
    Env::prefixed("COSTSCOPE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to its dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    const SECTIONS: [&str; 4] = ["logging", "sources", "selection", "conversion"];

    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section)
            && let Some(field) = rest.strip_prefix('_')
        {
            return format!("{section}.{field}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(
            map_env_key("conversion_words_per_page"),
            "conversion.words_per_page"
        );
        assert_eq!(
            map_env_key("selection_image_captioning"),
            "selection.image_captioning"
        );
        assert_eq!(map_env_key("logging_level"), "logging.level");
        assert_eq!(map_env_key("sources_catalog_path"), "sources.catalog_path");
    }

    #[test]
    fn unmapped_env_key_passes_through() {
        assert_eq!(map_env_key("something_else"), "something_else");
    }
}
