//! Element handles produced by a layout pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::geometry::Rect;

/// Tag the host uses to dispatch section header views.
pub const ELEMENT_KIND_SECTION_HEADER: &str = "WaterfallElementKindSectionHeader";
/// Tag the host uses to dispatch section footer views.
pub const ELEMENT_KIND_SECTION_FOOTER: &str = "WaterfallElementKindSectionFooter";

/// `(section, item)` address of an element. Headers and footers use item 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Cell,
    SectionHeader,
    SectionFooter,
}

impl ElementKind {
    /// Stable tag for supplementary kinds. Cells have no supplementary tag.
    pub fn supplementary_tag(&self) -> Option<&'static str> {
        match self {
            ElementKind::Cell => None,
            ElementKind::SectionHeader => Some(ELEMENT_KIND_SECTION_HEADER),
            ElementKind::SectionFooter => Some(ELEMENT_KIND_SECTION_FOOTER),
        }
    }
}

/// Returned when a host passes a supplementary tag this layout does not emit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown supplementary element kind '{0}'")]
pub struct UnknownElementKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    /// Parses a supplementary tag. Only header and footer tags are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ELEMENT_KIND_SECTION_HEADER => Ok(ElementKind::SectionHeader),
            ELEMENT_KIND_SECTION_FOOTER => Ok(ElementKind::SectionFooter),
            other => Err(UnknownElementKind(other.to_string())),
        }
    }
}

/// One placed element: what it is, where it belongs, and its frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutAttributes {
    pub kind: ElementKind,
    pub index_path: IndexPath,
    pub frame: Rect,
}

impl LayoutAttributes {
    pub const fn cell(index_path: IndexPath, frame: Rect) -> Self {
        Self {
            kind: ElementKind::Cell,
            index_path,
            frame,
        }
    }

    pub const fn header(section: usize, frame: Rect) -> Self {
        Self {
            kind: ElementKind::SectionHeader,
            index_path: IndexPath::new(section, 0),
            frame,
        }
    }

    pub const fn footer(section: usize, frame: Rect) -> Self {
        Self {
            kind: ElementKind::SectionFooter,
            index_path: IndexPath::new(section, 0),
            frame,
        }
    }
}
