//! Layout options: layout-wide defaults plus optional per-section overrides.
//!
//! Every per-section value is resolved the same way: if the host installed an
//! override function for that option it is called with the section index,
//! otherwise the layout-wide default from [`LayoutConfig`] is used.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::geometry::EdgeInsets;

// ────────────────────────────────────────────────────────────────────────────
// Layout-wide defaults
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of equal-width columns. Must be greater than zero.
    pub column_count: usize,
    /// Horizontal gap between adjacent columns.
    pub minimum_column_spacing: f32,
    /// Vertical gap between consecutive items of the same column.
    pub minimum_interitem_spacing: f32,
    pub header_height: f32,
    pub footer_height: f32,
    pub header_inset: EdgeInsets,
    pub footer_inset: EdgeInsets,
    pub section_inset: EdgeInsets,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_count: 2,
            minimum_column_spacing: 10.0,
            minimum_interitem_spacing: 10.0,
            header_height: 0.0,
            footer_height: 0.0,
            header_inset: EdgeInsets::ZERO,
            footer_inset: EdgeInsets::ZERO,
            section_inset: EdgeInsets::ZERO,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section overrides
// ────────────────────────────────────────────────────────────────────────────

/// Per-section override: receives the section index, returns the value to use.
pub type SectionFn<T> = Box<dyn Fn(usize) -> T>;

/// Optional per-section override functions. Any option left as `None` falls
/// back to the matching [`LayoutConfig`] default.
#[derive(Default)]
pub struct SectionOverrides {
    pub header_height: Option<SectionFn<f32>>,
    pub footer_height: Option<SectionFn<f32>>,
    pub section_inset: Option<SectionFn<EdgeInsets>>,
    pub header_inset: Option<SectionFn<EdgeInsets>>,
    pub footer_inset: Option<SectionFn<EdgeInsets>>,
    pub minimum_interitem_spacing: Option<SectionFn<f32>>,
}

impl SectionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_height(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.header_height = Some(Box::new(f));
        self
    }

    pub fn with_footer_height(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.footer_height = Some(Box::new(f));
        self
    }

    pub fn with_section_inset(mut self, f: impl Fn(usize) -> EdgeInsets + 'static) -> Self {
        self.section_inset = Some(Box::new(f));
        self
    }

    pub fn with_header_inset(mut self, f: impl Fn(usize) -> EdgeInsets + 'static) -> Self {
        self.header_inset = Some(Box::new(f));
        self
    }

    pub fn with_footer_inset(mut self, f: impl Fn(usize) -> EdgeInsets + 'static) -> Self {
        self.footer_inset = Some(Box::new(f));
        self
    }

    pub fn with_minimum_interitem_spacing(mut self, f: impl Fn(usize) -> f32 + 'static) -> Self {
        self.minimum_interitem_spacing = Some(Box::new(f));
        self
    }

    /// Resolves every per-section option for `section`.
    pub fn resolve(&self, config: &LayoutConfig, section: usize) -> SectionMetrics {
        SectionMetrics {
            minimum_interitem_spacing: resolve_one(
                &self.minimum_interitem_spacing,
                config.minimum_interitem_spacing,
                section,
            ),
            section_inset: resolve_one(&self.section_inset, config.section_inset, section),
            header_height: resolve_one(&self.header_height, config.header_height, section),
            header_inset: resolve_one(&self.header_inset, config.header_inset, section),
            footer_height: resolve_one(&self.footer_height, config.footer_height, section),
            footer_inset: resolve_one(&self.footer_inset, config.footer_inset, section),
        }
    }
}

fn resolve_one<T: Copy>(over: &Option<SectionFn<T>>, default: T, section: usize) -> T {
    over.as_ref().map_or(default, |f| f(section))
}

impl fmt::Debug for SectionOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionOverrides")
            .field("header_height", &self.header_height.is_some())
            .field("footer_height", &self.footer_height.is_some())
            .field("section_inset", &self.section_inset.is_some())
            .field("header_inset", &self.header_inset.is_some())
            .field("footer_inset", &self.footer_inset.is_some())
            .field(
                "minimum_interitem_spacing",
                &self.minimum_interitem_spacing.is_some(),
            )
            .finish()
    }
}

/// Effective options for one section after override resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMetrics {
    pub minimum_interitem_spacing: f32,
    pub section_inset: EdgeInsets,
    pub header_height: f32,
    pub header_inset: EdgeInsets,
    pub footer_height: f32,
    pub footer_inset: EdgeInsets,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> LayoutConfig {
        LayoutConfig {
            header_height: 40.0,
            footer_height: 20.0,
            section_inset: EdgeInsets::uniform(8.0),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.column_count, 2);
        assert_eq!(config.minimum_column_spacing, 10.0);
        assert_eq!(config.minimum_interitem_spacing, 10.0);
        assert_eq!(config.header_height, 0.0);
        assert_eq!(config.footer_height, 0.0);
        assert_eq!(config.section_inset, EdgeInsets::ZERO);
    }

    #[test]
    fn test_resolve_without_overrides_uses_defaults() {
        let config = make_config();
        let metrics = SectionOverrides::new().resolve(&config, 5);
        assert_eq!(metrics.header_height, 40.0);
        assert_eq!(metrics.footer_height, 20.0);
        assert_eq!(metrics.section_inset, EdgeInsets::uniform(8.0));
        assert_eq!(metrics.minimum_interitem_spacing, 10.0);
    }

    #[test]
    fn test_resolve_calls_override_with_section_index() {
        let config = make_config();
        let overrides = SectionOverrides::new()
            .with_header_height(|section| section as f32 * 100.0)
            .with_minimum_interitem_spacing(|_| 3.0);

        let metrics = overrides.resolve(&config, 2);
        assert_eq!(metrics.header_height, 200.0);
        assert_eq!(metrics.minimum_interitem_spacing, 3.0);
        // Untouched options still fall back.
        assert_eq!(metrics.footer_height, 20.0);
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: LayoutConfig = serde_json::from_str(r#"{"column_count": 3}"#).unwrap();
        assert_eq!(config.column_count, 3);
        assert_eq!(config.minimum_column_spacing, 10.0);
    }

    #[test]
    fn test_debug_reports_installed_overrides() {
        let overrides = SectionOverrides::new().with_footer_height(|_| 1.0);
        let debug = format!("{overrides:?}");
        assert!(debug.contains("footer_height: true"));
        assert!(debug.contains("header_height: false"));
    }
}
