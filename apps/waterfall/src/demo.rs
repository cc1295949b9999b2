//! Demo scene: one section of fixed-width cards with random heights, framed by
//! a header and a footer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use waterfall::{EdgeInsets, LayoutAttributes, LayoutConfig, Scene, SceneSection, Size};

const CARD_WIDTH: f32 = 140.0;
const MIN_CARD_HEIGHT: u32 = 50;
const CARD_HEIGHT_SPREAD: u32 = 100;

/// Layout options used by the demo: 10pt gutters everywhere, a 50pt header
/// pushed down by 20pt, and a 20pt footer.
pub fn demo_layout_config(column_count: usize) -> LayoutConfig {
    LayoutConfig {
        column_count,
        minimum_column_spacing: 10.0,
        minimum_interitem_spacing: 10.0,
        header_height: 50.0,
        footer_height: 20.0,
        header_inset: EdgeInsets::new(20.0, 0.0, 0.0, 0.0),
        footer_inset: EdgeInsets::ZERO,
        section_inset: EdgeInsets::uniform(10.0),
    }
}

/// `count` cards of width 140 and height `50 + uniform[0, 100)`, reproducible per seed.
pub fn demo_card_sizes(count: usize, seed: u64) -> Vec<Size> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let extra = rng.gen_range(0..CARD_HEIGHT_SPREAD);
            Size::new(CARD_WIDTH, (MIN_CARD_HEIGHT + extra) as f32)
        })
        .collect()
}

pub fn demo_scene(column_count: usize, items: usize, seed: u64) -> Scene {
    Scene {
        layout: demo_layout_config(column_count),
        sections: vec![SceneSection::with_items(demo_card_sizes(items, seed))],
    }
}

/// What the demo prints to stdout.
#[derive(Debug, Serialize)]
pub struct DemoReport<'a> {
    pub content_size: Size,
    pub total_elements: usize,
    pub visible: Vec<&'a LayoutAttributes>,
    pub elements: &'a [LayoutAttributes],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_card_sizes_are_in_range() {
        let sizes = demo_card_sizes(101, 42);
        assert_eq!(sizes.len(), 101);
        for size in &sizes {
            assert_eq!(size.width, 140.0);
            assert!(size.height >= 50.0 && size.height < 150.0, "{size:?}");
        }
    }

    #[test]
    fn test_demo_card_sizes_are_reproducible() {
        assert_eq!(demo_card_sizes(20, 7), demo_card_sizes(20, 7));
    }

    #[test]
    fn test_demo_scene_has_one_section() {
        let scene = demo_scene(3, 12, 1);
        assert_eq!(scene.sections.len(), 1);
        assert_eq!(scene.total_items(), 12);
        assert_eq!(scene.layout.column_count, 3);
        assert_eq!(scene.layout.header_height, 50.0);
    }

    #[test]
    fn test_demo_scene_lays_out_with_header_and_footer() {
        let scene = demo_scene(2, 101, 42);
        let mut layout = waterfall::WaterfallLayout::new(scene.layout.clone());
        layout.set_viewport(Size::new(375.0, 667.0));
        layout.prepare(&scene).unwrap();

        let header = layout.frame_for_header(0).unwrap();
        assert_eq!(header.y, 20.0);
        let footer = layout.frame_for_footer(0).unwrap();
        assert_eq!(layout.content_height(), footer.max_y());
        assert_eq!(layout.result().unwrap().elements.len(), 103);
    }
}
