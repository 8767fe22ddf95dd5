// Copyright 2025 the Bidisync Authors
// SPDX-License-Identifier: Apache-2.0

//! Shaping configuration.
//!
//! Settings that change how text is shaped, not how the reconciliation
//! behaves; the reconciler itself has no knobs. Host applications either
//! build a [`SyncConfig`] in code or load one from a TOML file:
//!
//! ```toml
//! ligatures = false
//! base-direction = "right-to-left"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::shaping::BaseDirection;

/// Configuration for building a [`crate::TextShaper`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct SyncConfig {
    /// Substitute lam-alef pairs with their ligature forms.
    pub ligatures: bool,
    /// Paragraph base direction for bidi reordering.
    pub base_direction: BaseDirection,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            ligatures: true,
            base_direction: BaseDirection::Auto,
        }
    }
}

impl SyncConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SyncConfig::default();
        assert!(config.ligatures);
        assert_eq!(config.base_direction, BaseDirection::Auto);
    }

    #[test]
    fn test_parse_toml() {
        let config: SyncConfig =
            toml::from_str("ligatures = false\nbase-direction = \"right-to-left\"").unwrap();
        assert!(!config.ligatures);
        assert_eq!(config.base_direction, BaseDirection::RightToLeft);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SyncConfig = toml::from_str("ligatures = false").unwrap();
        assert!(!config.ligatures);
        assert_eq!(config.base_direction, BaseDirection::Auto);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<SyncConfig, _> = toml::from_str("ligaturs = false");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = SyncConfig::load(Path::new("/nonexistent/bidisync.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
