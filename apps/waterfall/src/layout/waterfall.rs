//! `WaterfallLayout`, the host-facing layout object.
//!
//! Owns the options, the current viewport, and the geometry of the last pass.
//! Option setters only invalidate when the value actually changes; a viewport
//! change only invalidates when its width changes. The host drives passes with
//! [`WaterfallLayout::prepare`] (always recomputes) or
//! [`WaterfallLayout::prepare_if_needed`].
//!
//! Queries read the last prepared pass. Nothing is synchronized: the host must
//! not hold query results across a call to `prepare`.

use tracing::{debug, trace};

use crate::errors::LayoutError;
use crate::layout::attributes::{ElementKind, IndexPath, LayoutAttributes};
use crate::layout::engine::{compute_layout, LayoutResult};
use crate::layout::geometry::{EdgeInsets, Rect, Size};
use crate::layout::options::{LayoutConfig, SectionOverrides};
use crate::layout::source::ItemSource;
use crate::layout::spatial_index::SpatialIndex;

#[derive(Debug, Default)]
pub struct WaterfallLayout {
    config: LayoutConfig,
    overrides: SectionOverrides,
    viewport: Size,
    prepared: Option<Prepared>,
    invalidated: bool,
}

#[derive(Debug)]
struct Prepared {
    result: LayoutResult,
    index: SpatialIndex,
}

impl WaterfallLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            invalidated: true,
            ..Self::default()
        }
    }

    pub fn with_overrides(mut self, overrides: SectionOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// True when the next `prepare_if_needed` will run a pass.
    pub fn is_invalidated(&self) -> bool {
        self.invalidated || self.prepared.is_none()
    }

    pub fn invalidate(&mut self) {
        if !self.invalidated {
            trace!("Waterfall layout invalidated");
        }
        self.invalidated = true;
    }

    // ── option setters ──────────────────────────────────────────────────────

    pub fn set_column_count(&mut self, column_count: usize) {
        let changed = self.config.column_count != column_count;
        self.config.column_count = column_count;
        self.invalidate_if_changed("column_count", changed);
    }

    pub fn set_minimum_column_spacing(&mut self, spacing: f32) {
        let changed = self.config.minimum_column_spacing != spacing;
        self.config.minimum_column_spacing = spacing;
        self.invalidate_if_changed("minimum_column_spacing", changed);
    }

    pub fn set_minimum_interitem_spacing(&mut self, spacing: f32) {
        let changed = self.config.minimum_interitem_spacing != spacing;
        self.config.minimum_interitem_spacing = spacing;
        self.invalidate_if_changed("minimum_interitem_spacing", changed);
    }

    pub fn set_header_height(&mut self, height: f32) {
        let changed = self.config.header_height != height;
        self.config.header_height = height;
        self.invalidate_if_changed("header_height", changed);
    }

    pub fn set_footer_height(&mut self, height: f32) {
        let changed = self.config.footer_height != height;
        self.config.footer_height = height;
        self.invalidate_if_changed("footer_height", changed);
    }

    pub fn set_header_inset(&mut self, inset: EdgeInsets) {
        let changed = self.config.header_inset != inset;
        self.config.header_inset = inset;
        self.invalidate_if_changed("header_inset", changed);
    }

    pub fn set_footer_inset(&mut self, inset: EdgeInsets) {
        let changed = self.config.footer_inset != inset;
        self.config.footer_inset = inset;
        self.invalidate_if_changed("footer_inset", changed);
    }

    pub fn set_section_inset(&mut self, inset: EdgeInsets) {
        let changed = self.config.section_inset != inset;
        self.config.section_inset = inset;
        self.invalidate_if_changed("section_inset", changed);
    }

    /// Replaces every per-section override. Always invalidates.
    pub fn set_overrides(&mut self, overrides: SectionOverrides) {
        self.overrides = overrides;
        self.invalidate_if_changed("overrides", true);
    }

    fn invalidate_if_changed(&mut self, option: &'static str, changed: bool) {
        if changed {
            debug!(option, "Layout option changed");
            self.invalidate();
        }
    }

    // ── viewport ────────────────────────────────────────────────────────────

    /// Column geometry depends only on width, so a height-only change keeps the layout.
    pub fn should_invalidate_for_bounds_change(&self, new_viewport: Size) -> bool {
        new_viewport.width != self.viewport.width
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        if self.should_invalidate_for_bounds_change(viewport) {
            debug!(
                old_width = self.viewport.width,
                new_width = viewport.width,
                "Viewport width changed"
            );
            self.invalidate();
        }
        self.viewport = viewport;
    }

    // ── layout passes ───────────────────────────────────────────────────────

    /// Runs a full pass against `source` and rebuilds the spatial index.
    ///
    /// On error the previous geometry is dropped and the layout stays invalidated.
    pub fn prepare<S>(&mut self, source: &S) -> Result<(), LayoutError>
    where
        S: ItemSource + ?Sized,
    {
        self.prepared = None;
        self.invalidated = true;

        let result = compute_layout(source, &self.config, &self.overrides, self.viewport.width)?;
        let index = SpatialIndex::build(&result.elements);
        self.prepared = Some(Prepared { result, index });
        self.invalidated = false;
        Ok(())
    }

    /// Runs [`prepare`](Self::prepare) only if the layout is invalidated.
    /// Returns whether a pass ran.
    pub fn prepare_if_needed<S>(&mut self, source: &S) -> Result<bool, LayoutError>
    where
        S: ItemSource + ?Sized,
    {
        if !self.is_invalidated() {
            return Ok(false);
        }
        self.prepare(source)?;
        Ok(true)
    }

    // ── queries ─────────────────────────────────────────────────────────────

    pub fn result(&self) -> Option<&LayoutResult> {
        self.prepared.as_ref().map(|p| &p.result)
    }

    /// Raw content height of the last pass: column 0's final cursor.
    ///
    /// Unlike [`content_size`](Self::content_size) this is not clamped. A layout
    /// whose trailing sections are empty ends its cursor above where it started,
    /// so the value can be negative (-10 for one empty section with the default
    /// spacing). 0 when nothing is prepared.
    pub fn content_height(&self) -> f32 {
        self.result().map_or(0.0, |r| r.content_height)
    }

    /// Scrollable content size: the viewport width by the content height.
    ///
    /// Zero when nothing is prepared or the last pass had no sections. A negative
    /// content height (possible when trailing sections are empty) reports as 0.
    pub fn content_size(&self) -> Size {
        match self.result() {
            Some(result) if result.section_count() > 0 => {
                Size::new(self.viewport.width, result.content_height.max(0.0))
            }
            _ => Size::ZERO,
        }
    }

    pub fn attributes_for_item(&self, index_path: IndexPath) -> Option<&LayoutAttributes> {
        self.result()?.attributes_for_item(index_path)
    }

    /// Looks up a header or footer by its string tag. Unknown tags give `None`.
    pub fn attributes_for_supplementary(
        &self,
        kind: &str,
        section: usize,
    ) -> Option<&LayoutAttributes> {
        let result = self.result()?;
        match kind.parse::<ElementKind>().ok()? {
            ElementKind::SectionHeader => result.headers.get(&section),
            ElementKind::SectionFooter => result.footers.get(&section),
            ElementKind::Cell => None,
        }
    }

    pub fn frame_for_item(&self, index_path: IndexPath) -> Option<Rect> {
        self.result()?.frame_for_item(index_path)
    }

    pub fn frame_for_header(&self, section: usize) -> Option<Rect> {
        self.result()?.frame_for_header(section)
    }

    pub fn frame_for_footer(&self, section: usize) -> Option<Rect> {
        self.result()?.frame_for_footer(section)
    }

    /// Elements intersecting `rect`, in placement order.
    pub fn elements_in_rect(&self, rect: &Rect) -> Vec<&LayoutAttributes> {
        self.prepared
            .as_ref()
            .map(|p| p.index.elements_intersecting(&p.result.elements, rect))
            .unwrap_or_default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
