//! Waterfall layout pass. Places every header, item and footer.
//!
//! # Algorithm (per section, in index order)
//! 1. Resolve section options (overrides, else layout defaults).
//! 2. `item_width = floor((usable_width - (columns - 1) * column_spacing) / columns)`.
//!    Remainder pixels are dropped, never distributed.
//! 3. Header: cursor += header_inset.top; emit a full-width header if its height > 0.
//! 4. cursor += section_inset.top; every column cursor starts there.
//! 5. Each item goes into the shortest column (strict `<`, lowest index wins),
//!    scaled to `item_width` keeping its aspect ratio.
//! 6. Footer: starts after the longest column (strict `>` from 0, so the first
//!    maximal column wins) minus the trailing interitem spacing, plus
//!    section_inset.bottom and footer_inset.top. All column cursors are then
//!    equalized so the next section starts flat.
//!
//! Content height is column 0's final cursor, which equals every other column's
//! cursor after step 6.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::LayoutError;
use crate::layout::attributes::{IndexPath, LayoutAttributes};
use crate::layout::geometry::{Rect, Size};
use crate::layout::options::{LayoutConfig, SectionOverrides};
use crate::layout::source::ItemSource;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Geometry produced by one layout pass. Rebuilt from scratch on every pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Item attributes grouped by section, in item order.
    pub section_items: Vec<Vec<LayoutAttributes>>,
    /// Header attributes keyed by section. Absent when the header height was 0.
    pub headers: BTreeMap<usize, LayoutAttributes>,
    /// Footer attributes keyed by section. Absent when the footer height was 0.
    pub footers: BTreeMap<usize, LayoutAttributes>,
    /// Every emitted element in placement order (header, items, footer per section).
    pub elements: Vec<LayoutAttributes>,
    /// Final cursor of column 0. Not clamped: empty trailing sections can leave
    /// it negative.
    pub content_height: f32,
    /// Viewport width the pass was computed for.
    pub viewport_width: f32,
}

impl LayoutResult {
    pub fn section_count(&self) -> usize {
        self.section_items.len()
    }

    pub fn attributes_for_item(&self, index_path: IndexPath) -> Option<&LayoutAttributes> {
        self.section_items
            .get(index_path.section)?
            .get(index_path.item)
    }

    pub fn frame_for_item(&self, index_path: IndexPath) -> Option<Rect> {
        self.attributes_for_item(index_path).map(|a| a.frame)
    }

    pub fn frame_for_header(&self, section: usize) -> Option<Rect> {
        self.headers.get(&section).map(|a| a.frame)
    }

    pub fn frame_for_footer(&self, section: usize) -> Option<Rect> {
        self.footers.get(&section).map(|a| a.frame)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Runs one full layout pass.
///
/// Returns `LayoutError::InvalidColumnCount` when `config.column_count` is 0.
/// Zero sections yields an empty result with zero content height.
pub fn compute_layout<S>(
    source: &S,
    config: &LayoutConfig,
    overrides: &SectionOverrides,
    viewport_width: f32,
) -> Result<LayoutResult, LayoutError>
where
    S: ItemSource + ?Sized,
{
    let column_count = config.column_count;
    if column_count == 0 {
        warn!("Refusing to lay out with zero columns");
        return Err(LayoutError::InvalidColumnCount { column_count });
    }

    let mut result = LayoutResult {
        viewport_width,
        ..LayoutResult::default()
    };

    let section_count = source.section_count();
    if section_count == 0 {
        debug!(viewport_width, "Layout pass skipped: no sections");
        return Ok(result);
    }

    // Column cursors live only for this pass.
    let mut column_heights = vec![0.0_f32; column_count];
    let mut top = 0.0_f32;

    for section in 0..section_count {
        let metrics = overrides.resolve(config, section);
        let inset = metrics.section_inset;
        let interitem_spacing = metrics.minimum_interitem_spacing;

        let usable_width = viewport_width - inset.left - inset.right;
        let item_width = column_width(usable_width, column_count, config.minimum_column_spacing);

        // Header
        let header_inset = metrics.header_inset;
        top += header_inset.top;

        if metrics.header_height > 0.0 {
            let frame = Rect::new(
                header_inset.left,
                top,
                viewport_width - header_inset.horizontal(),
                metrics.header_height,
            );
            let attributes = LayoutAttributes::header(section, frame);
            result.headers.insert(section, attributes);
            result.elements.push(attributes);
            top = frame.max_y() + header_inset.bottom;
        }

        top += inset.top;
        column_heights.fill(top);

        // Items
        let item_count = source.item_count(section);
        let mut items = Vec::with_capacity(item_count);

        for item in 0..item_count {
            let index_path = IndexPath::new(section, item);
            let column = shortest_column_index(&column_heights);

            let x = inset.left + (item_width + config.minimum_column_spacing) * column as f32;
            let y = column_heights[column];
            let height = scaled_height(source.size_for_item(index_path), item_width);

            let attributes = LayoutAttributes::cell(index_path, Rect::new(x, y, item_width, height));
            items.push(attributes);
            result.elements.push(attributes);
            column_heights[column] = attributes.frame.max_y() + interitem_spacing;
        }

        result.section_items.push(items);

        // Footer
        let column = longest_column_index(&column_heights);
        top = column_heights[column] - interitem_spacing + inset.bottom;

        let footer_inset = metrics.footer_inset;
        top += footer_inset.top;

        if metrics.footer_height > 0.0 {
            let frame = Rect::new(
                footer_inset.left,
                top,
                viewport_width - footer_inset.horizontal(),
                metrics.footer_height,
            );
            let attributes = LayoutAttributes::footer(section, frame);
            result.footers.insert(section, attributes);
            result.elements.push(attributes);
            top = frame.max_y() + footer_inset.bottom;
        }

        column_heights.fill(top);

        trace!(
            section,
            items = item_count,
            item_width,
            section_bottom = top,
            "Section laid out"
        );
    }

    result.content_height = column_heights[0];

    debug!(
        sections = section_count,
        elements = result.elements.len(),
        columns = column_count,
        viewport_width,
        content_height = result.content_height,
        "Layout pass complete"
    );

    Ok(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Column helpers
// ────────────────────────────────────────────────────────────────────────────

/// Uniform column width, floored to a whole point.
pub(crate) fn column_width(usable_width: f32, column_count: usize, column_spacing: f32) -> f32 {
    let gaps = column_count.saturating_sub(1) as f32 * column_spacing;
    ((usable_width - gaps) / column_count as f32).floor()
}

/// Height of an item scaled to `item_width`, preserving its aspect ratio.
/// Items without a positive width and height collapse to 0.
pub fn scaled_height(size: Size, item_width: f32) -> f32 {
    if size.height > 0.0 && size.width > 0.0 {
        size.height * item_width / size.width
    } else {
        0.0
    }
}

/// Index of the column with the smallest cursor. Ties go to the lowest index.
pub fn shortest_column_index(column_heights: &[f32]) -> usize {
    let mut index = 0;
    let mut shortest = f32::MAX;
    for (i, &height) in column_heights.iter().enumerate() {
        if height < shortest {
            shortest = height;
            index = i;
        }
    }
    index
}

/// Index of the column with the largest cursor.
///
/// The scan starts from a running maximum of 0 at index 0 and only moves on a
/// strictly greater value, so all-non-positive cursors pick column 0.
pub fn longest_column_index(column_heights: &[f32]) -> usize {
    let mut index = 0;
    let mut longest = 0.0_f32;
    for (i, &height) in column_heights.iter().enumerate() {
        if height > longest {
            longest = height;
            index = i;
        }
    }
    index
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
