//! Everything a build can be tuned with, bundled.
//!
//! Each part has a stated default, so `ThemeConfig::default()` reproduces
//! the stock behavior. Shades, roles and the fallback group can be
//! overridden from a JSON document:
//!
//! ```json
//! {
//!   "shades": { "p10": 0.1, "p50": 0.5, "p125": 1.25 },
//!   "roles": { "metric": "lch_weighted" },
//!   "fallback": null
//! }
//! ```
//!
//! Missing keys keep their defaults; `"fallback": null` drops the `todo`
//! group. The semantic document is separate (see [`SemanticConfig`]).

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fallback::FallbackConfig;
use crate::role::RoleConfig;
use crate::semantic::SemanticConfig;
use crate::shade::ShadeRatios;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub shades: ShadeRatios,
    pub roles: RoleConfig,
    /// `None` leaves the `todo` group out.
    pub fallback: Option<FallbackConfig>,
    #[serde(skip, default = "SemanticConfig::builtin")]
    pub semantic: SemanticConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            shades: ShadeRatios::default(),
            roles: RoleConfig::default(),
            fallback: Some(FallbackConfig::default()),
            semantic: SemanticConfig::builtin(),
        }
    }
}

impl ThemeConfig {
    /// Parse overrides from JSON; the semantic document stays built-in.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the semantic document.
    #[must_use]
    pub fn with_semantic(mut self, semantic: SemanticConfig) -> Self {
        self.semantic = semantic;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use crate::role::DistanceMetric;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = ThemeConfig::from_json(
            r#"{"shades": {"p50": 0.5}, "roles": {"metric": "lch_weighted"}, "fallback": null}"#,
        )
        .unwrap();
        assert_eq!(config.shades.len(), 1);
        assert_eq!(config.roles.metric, DistanceMetric::LchWeighted);
        assert_eq!(config.roles.targets, RoleConfig::default().targets);
        assert_eq!(config.fallback, None);
        assert_eq!(config.semantic, SemanticConfig::builtin());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ThemeConfig::from_json(r#"{"shade": {}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        let err = ThemeConfig::from_json(r#"{"roles": {"metrik": "rgb_absolute"}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
    }

    #[test]
    fn bad_target_color_is_rejected() {
        let err = ThemeConfig::from_json(r#"{"roles": {"targets": ["red"]}}"#).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse configuration JSON"));
    }

    #[test]
    fn with_semantic_replaces_document() {
        let config = ThemeConfig::default().with_semantic(SemanticConfig::default());
        assert!(config.semantic.is_empty());
    }
}
