//! Shared coordinate space for surfaces that show one scene together.
//!
//! Each card is a window into one larger virtual surface: its local fragment
//! coordinate is shifted by the card's offset and normalised by the combined
//! size, so the blob and its highlights line up across the gap between cards.

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::SPLIT_PROGRESS_EPSILON;
use crate::raymarch::screen_uv;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    /// Position of this card's top-left corner inside the combined box, in
    /// the box's pixel frame.
    pub card_offset: Vec2,
    /// Pixel size of the combined box (all cards plus gaps).
    pub total_size: Vec2,
}

impl CardLayout {
    pub fn new(card_offset: Vec2, total_size: Vec2) -> Self {
        Self {
            card_offset,
            total_size,
        }
    }

    /// Identity layout: the raymarch space is the card's own space.
    pub fn standalone(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    /// Build from a horizontal offset measured from the centre of the
    /// combined box. Cards stay top-aligned, so `y` is taken as is.
    pub fn from_center_offset(offset_from_center: Vec2, total_size: Vec2) -> Self {
        let card_offset = Vec2::new(
            offset_from_center.x + 0.5 * total_size.x,
            offset_from_center.y,
        );
        Self::new(card_offset, total_size)
    }

    /// Fill in the standalone defaults when the host supplied no combined size.
    pub fn resolve(layout: Option<CardLayout>, own_size: Vec2) -> Self {
        layout.unwrap_or_else(|| Self::standalone(own_size))
    }

    #[inline]
    pub fn global_coord(&self, frag_coord: Vec2) -> Vec2 {
        frag_coord + self.card_offset
    }

    /// Camera-space uv of a local fragment, using the combined size.
    #[inline]
    pub fn scene_uv(&self, frag_coord: Vec2) -> Vec2 {
        screen_uv(self.global_coord(frag_coord), self.total_size)
    }
}

/// Where a card sits and how it samples the shared scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPlacement {
    /// Top-left corner inside the combined box.
    pub origin: Vec2,
    pub size: Vec2,
    pub layout: CardLayout,
}

/// Geometry of a card that splits into two abutting halves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitLayout {
    pub base_width: f32,
    pub height: f32,
    pub max_gap: f32,
}

impl SplitLayout {
    pub fn new(base_width: f32, height: f32, max_gap: f32) -> Self {
        Self {
            base_width,
            height,
            max_gap,
        }
    }

    pub fn total_size(&self) -> Vec2 {
        Vec2::new(self.base_width, self.height)
    }

    pub fn gap(&self, progress: f32) -> f32 {
        self.max_gap * progress.clamp(0.0, 1.0)
    }

    /// Width of each visible card at `progress` (0 = one card, 1 = split).
    pub fn card_width(&self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        let split_width = (self.base_width - self.max_gap * p) / 2.0;
        self.base_width + (split_width - self.base_width) * p
    }

    /// Cards to draw at `progress`. Below a small threshold the pair collapses
    /// into one standalone card; otherwise both halves share the full box.
    pub fn placements(&self, progress: f32) -> SmallVec<[CardPlacement; 2]> {
        let mut out = SmallVec::new();
        let width = self.card_width(progress);
        if progress < SPLIT_PROGRESS_EPSILON {
            let size = Vec2::new(width, self.height);
            out.push(CardPlacement {
                origin: Vec2::new((self.base_width - width) / 2.0, 0.0),
                size,
                layout: CardLayout::standalone(size),
            });
            return out;
        }
        let total = self.total_size();
        let gap = self.gap(progress);
        let size = Vec2::new(width, self.height);
        let left = Vec2::new(total.x / 2.0 - width - gap / 2.0, 0.0);
        let right = Vec2::new(total.x / 2.0 + gap / 2.0, 0.0);
        for origin in [left, right] {
            out.push(CardPlacement {
                origin,
                size,
                layout: CardLayout::new(origin, total),
            });
        }
        out
    }
}
