//! Item sources: where the engine gets section/item counts and intrinsic sizes.
//!
//! [`ItemSource`] is the host contract. [`Scene`] is a serde-backed in-memory
//! source used by the demo binary and by tests; it can also describe per-section
//! header/footer/inset overrides that are turned into a [`SectionOverrides`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::LayoutError;
use crate::layout::attributes::IndexPath;
use crate::layout::geometry::{EdgeInsets, Size};
use crate::layout::options::{LayoutConfig, SectionFn, SectionOverrides};

// ────────────────────────────────────────────────────────────────────────────
// Host contract
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the data the engine lays out.
///
/// `size_for_item` is called exactly once per item per layout pass, and only for
/// index paths below `item_count(section)`. Sizes are not validated: a zero or
/// negative dimension yields a zero-height frame, and non-finite values give
/// undefined geometry.
pub trait ItemSource {
    fn section_count(&self) -> usize;
    fn item_count(&self, section: usize) -> usize;
    fn size_for_item(&self, index_path: IndexPath) -> Size;
}

/// One `Vec<Size>` per section.
impl ItemSource for [Vec<Size>] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.get(section).map_or(0, Vec::len)
    }

    fn size_for_item(&self, index_path: IndexPath) -> Size {
        self.get(index_path.section)
            .and_then(|items| items.get(index_path.item))
            .copied()
            .unwrap_or_default()
    }
}

impl ItemSource for Vec<Vec<Size>> {
    fn section_count(&self) -> usize {
        self.as_slice().section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }

    fn size_for_item(&self, index_path: IndexPath) -> Size {
        self.as_slice().size_for_item(index_path)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scene
// ────────────────────────────────────────────────────────────────────────────

/// A section as described in a scene file. Unset options use the layout default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSection {
    pub items: Vec<Size>,
    pub header_height: Option<f32>,
    pub footer_height: Option<f32>,
    pub section_inset: Option<EdgeInsets>,
    pub header_inset: Option<EdgeInsets>,
    pub footer_inset: Option<EdgeInsets>,
    pub minimum_interitem_spacing: Option<f32>,
}

impl SceneSection {
    pub fn with_items(items: Vec<Size>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }
}

/// Layout options plus the sections to lay out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub layout: LayoutConfig,
    pub sections: Vec<SceneSection>,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let scene = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            sections = scene.sections.len(),
            items = scene.total_items(),
            "Loaded scene"
        );
        Ok(scene)
    }

    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Builds override functions for every option that at least one section
    /// sets. Sections that leave an option unset get `self.layout`'s default,
    /// captured at call time.
    pub fn overrides(&self) -> SectionOverrides {
        let defaults = &self.layout;
        SectionOverrides {
            header_height: per_section(&self.sections, |s| s.header_height, defaults.header_height),
            footer_height: per_section(&self.sections, |s| s.footer_height, defaults.footer_height),
            section_inset: per_section(&self.sections, |s| s.section_inset, defaults.section_inset),
            header_inset: per_section(&self.sections, |s| s.header_inset, defaults.header_inset),
            footer_inset: per_section(&self.sections, |s| s.footer_inset, defaults.footer_inset),
            minimum_interitem_spacing: per_section(
                &self.sections,
                |s| s.minimum_interitem_spacing,
                defaults.minimum_interitem_spacing,
            ),
        }
    }
}

fn per_section<T: Copy + 'static>(
    sections: &[SceneSection],
    pick: impl Fn(&SceneSection) -> Option<T>,
    default: T,
) -> Option<SectionFn<T>> {
    let values: Vec<Option<T>> = sections.iter().map(pick).collect();
    if values.iter().all(Option::is_none) {
        return None;
    }
    Some(Box::new(move |section| {
        values.get(section).copied().flatten().unwrap_or(default)
    }))
}

impl ItemSource for Scene {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, |s| s.items.len())
    }

    fn size_for_item(&self, index_path: IndexPath) -> Size {
        self.sections
            .get(index_path.section)
            .and_then(|s| s.items.get(index_path.item))
            .copied()
            .unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SCENE_JSON: &str = r#"{
        "layout": { "column_count": 3, "footer_height": 12.0 },
        "sections": [
            { "items": [ { "width": 100.0, "height": 50.0 } ], "header_height": 30.0 },
            { "items": [], "section_inset": { "top": 1.0, "left": 2.0, "bottom": 3.0, "right": 4.0 } }
        ]
    }"#;

    #[test]
    fn test_from_json_reads_layout_and_sections() {
        let scene = Scene::from_json(SCENE_JSON).unwrap();
        assert_eq!(scene.layout.column_count, 3);
        assert_eq!(scene.layout.footer_height, 12.0);
        assert_eq!(scene.section_count(), 2);
        assert_eq!(scene.item_count(0), 1);
        assert_eq!(scene.item_count(1), 0);
        assert_eq!(scene.total_items(), 1);
    }

    #[test]
    fn test_item_source_out_of_range_is_zero() {
        let scene = Scene::from_json(SCENE_JSON).unwrap();
        assert_eq!(scene.item_count(7), 0);
        assert_eq!(scene.size_for_item(IndexPath::new(0, 9)), Size::ZERO);
    }

    #[test]
    fn test_overrides_fall_back_to_scene_defaults() {
        let scene = Scene::from_json(SCENE_JSON).unwrap();
        let overrides = scene.overrides();

        assert!(overrides.footer_height.is_none(), "no section sets a footer height");
        let header = overrides.header_height.as_ref().unwrap();
        assert_eq!(header(0), 30.0);
        assert_eq!(header(1), 0.0);

        let metrics = overrides.resolve(&scene.layout, 1);
        assert_eq!(metrics.section_inset, EdgeInsets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(metrics.footer_height, 12.0);
    }

    #[test]
    fn test_load_reads_scene_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SCENE_JSON.as_bytes()).unwrap();

        let scene = Scene::load(file.path()).unwrap();
        assert_eq!(scene.sections[0].header_height, Some(30.0));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Scene::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file_is_format_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = Scene::load(file.path()).unwrap_err();
        assert!(matches!(err, LayoutError::SceneFormat(_)));
    }

    #[test]
    fn test_nested_vec_is_an_item_source() {
        let sections = vec![vec![Size::new(1.0, 2.0)], vec![]];
        assert_eq!(sections.section_count(), 2);
        assert_eq!(sections.item_count(0), 1);
        assert_eq!(sections.size_for_item(IndexPath::new(0, 0)), Size::new(1.0, 2.0));
    }
}
