//! Coarse visibility index over a finished layout pass.
//!
//! Elements are grouped in placement order into runs of [`UNION_SIZE`]. Each run
//! is summarized by the union of its first and last frames only. Within a run,
//! placement order follows y closely enough that this bounds the run in practice,
//! but it is an approximation: a middle element sticking out past both ends is
//! not covered.
//!
//! A query finds the first and last runs whose union rect hits the query, then
//! filters the elements of that span one by one.
//!
//! The index holds only the run summaries. Queries borrow the same element
//! slice the index was built from, which stays owned by the layout result.

use tracing::trace;

use crate::layout::attributes::LayoutAttributes;
use crate::layout::geometry::Rect;

/// Number of consecutive elements summarized by one union rect.
pub const UNION_SIZE: usize = 20;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpatialIndex {
    element_count: usize,
    union_rects: Vec<Rect>,
    union_size: usize,
}

impl SpatialIndex {
    /// Builds the index with the default run length.
    pub fn build(elements: &[LayoutAttributes]) -> Self {
        Self::with_union_size(elements, UNION_SIZE)
    }

    /// Builds the index with an explicit run length. A length of 0 is treated as 1.
    pub fn with_union_size(elements: &[LayoutAttributes], union_size: usize) -> Self {
        let union_size = union_size.max(1);
        let union_rects = elements
            .chunks(union_size)
            .filter_map(|run| {
                let first = run.first()?.frame;
                let last = run.last()?.frame;
                Some(first.union(&last))
            })
            .collect();

        Self {
            element_count: elements.len(),
            union_rects,
            union_size,
        }
    }

    /// Number of elements the index was built over.
    pub fn len(&self) -> usize {
        self.element_count
    }

    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    pub fn union_rects(&self) -> &[Rect] {
        &self.union_rects
    }

    /// Elements of `elements` whose frame intersects `rect`, in placement order.
    ///
    /// `elements` must be the slice the index was built from. A shorter slice is
    /// tolerated: the scan stops at its end.
    pub fn elements_intersecting<'a>(
        &self,
        elements: &'a [LayoutAttributes],
        rect: &Rect,
    ) -> Vec<&'a LayoutAttributes> {
        let Some(first_run) = self.union_rects.iter().position(|u| u.intersects(rect)) else {
            return Vec::new();
        };
        // A forward hit guarantees a backward hit.
        let last_run = self
            .union_rects
            .iter()
            .rposition(|u| u.intersects(rect))
            .unwrap_or(first_run);

        let begin = first_run * self.union_size;
        let end = ((last_run + 1) * self.union_size).min(elements.len());
        let Some(span) = elements.get(begin..end) else {
            return Vec::new();
        };

        let hits: Vec<&LayoutAttributes> = span
            .iter()
            .filter(|a| a.frame.intersects(rect))
            .collect();

        trace!(
            first_run,
            last_run,
            scanned = end - begin,
            hits = hits.len(),
            "Spatial query"
        );
        hits
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
