// Host-side tests for the shared card coordinate space.

use glam::Vec2;
use liquid_core::{
    screen_uv, CardLayout, FrameInputs, SceneParams, SplitLayout, SurfaceProgram, SurfaceRenderer,
};

#[test]
fn standalone_card_matches_unshifted_uv() {
    let size = Vec2::new(360.0, 200.0);
    let layout = CardLayout::resolve(None, size);
    for y in [0.5, 99.5, 199.5] {
        for x in [0.5, 180.5, 359.5] {
            let frag = Vec2::new(x, y);
            assert_eq!(layout.scene_uv(frag), screen_uv(frag, size), "at {frag:?}");
        }
    }
}

// Colour of the unsplit card at a point of the shared box.
fn unsplit_color(global: Vec2, total: Vec2, time: f32) -> glam::Vec3 {
    let renderer = SurfaceRenderer::ShaderBacked(SurfaceProgram::Card);
    let inputs = FrameInputs::standalone(SceneParams::new(time, total, 32.0))
        .with_layout(CardLayout::standalone(total));
    renderer.evaluate(global, &inputs, None).color
}

// Compare the seam columns of a split pair against one unsplit card.
fn assert_seam_matches_unsplit(left: CardLayout, right: CardLayout, card: Vec2, total: Vec2) {
    let renderer = SurfaceRenderer::ShaderBacked(SurfaceProgram::Card);
    let time = 0.7;
    let scene = SceneParams::new(time, card, 32.0);
    for row in 0..20 {
        let y = 5.5 + row as f32 * 10.0;
        for (layout, x) in [(left, card.x - 0.5), (right, 0.5)] {
            let local = Vec2::new(x, y);
            let inputs = FrameInputs::standalone(scene).with_layout(layout);
            let split = renderer.evaluate(local, &inputs, None).color;
            let global = layout.card_offset + local;
            assert_eq!(
                split,
                unsplit_color(global, total, time),
                "seam colour differs at local {local:?} (global {global:?})"
            );
        }
    }
}

#[test]
fn split_seam_matches_unsplit_card() {
    let split = SplitLayout::new(800.0, 200.0, 16.0);
    let cards = split.placements(1.0);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].size, Vec2::new(392.0, 200.0));
    assert_seam_matches_unsplit(
        cards[0].layout,
        cards[1].layout,
        cards[0].size,
        split.total_size(),
    );
}

#[test]
fn center_offsets_line_up_with_unsplit_card() {
    let total = Vec2::new(800.0, 200.0);
    let left = CardLayout::from_center_offset(Vec2::new(-400.0, 0.0), total);
    let right = CardLayout::from_center_offset(Vec2::new(8.0, 0.0), total);
    assert_eq!(left.card_offset, Vec2::new(0.0, 0.0));
    assert_eq!(right.card_offset, Vec2::new(408.0, 0.0));
    assert_seam_matches_unsplit(left, right, Vec2::new(392.0, 200.0), total);
}

#[test]
fn vertical_shift_breaks_the_seam() {
    // A layout offset by half the height samples a different scene band.
    let total = Vec2::new(800.0, 200.0);
    let card = Vec2::new(392.0, 200.0);
    let shifted = CardLayout::new(Vec2::new(0.0, 100.0), total);
    let renderer = SurfaceRenderer::ShaderBacked(SurfaceProgram::Card);
    let inputs = FrameInputs::standalone(SceneParams::new(0.7, card, 32.0)).with_layout(shifted);
    let mismatches = (0..20)
        .map(|row| Vec2::new(card.x - 0.5, 5.5 + row as f32 * 10.0))
        .filter(|&local| {
            renderer.evaluate(local, &inputs, None).color != unsplit_color(local, total, 0.7)
        })
        .count();
    assert!(mismatches > 0, "shifted layout should not match the unsplit card");
}

#[test]
fn split_layout_places_cards_in_one_box() {
    let split = SplitLayout::new(800.0, 200.0, 16.0);
    let cards = split.placements(1.0);
    for card in &cards {
        let local = Vec2::new(10.5, 50.5);
        let global = card.origin + local;
        assert_eq!(card.layout.scene_uv(local), screen_uv(global, split.total_size()));
    }
}

#[test]
fn partial_split_shrinks_cards_and_gap_together() {
    let split = SplitLayout::new(800.0, 200.0, 16.0);
    let half = split.placements(0.5);
    assert_eq!(half.len(), 2);
    assert_eq!(split.gap(0.5), 8.0);
    let left_edge = half[0].origin.x + half[0].size.x;
    assert!((half[1].origin.x - left_edge - 8.0).abs() < 1e-3);
}
