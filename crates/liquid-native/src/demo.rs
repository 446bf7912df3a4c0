//! Split-card demo choreography: the card's corners tighten as it appears,
//! and Space splits it into two halves that keep one shared blob.

use glam::Vec2;
use liquid_core::constants::{
    DEMO_CARD_HEIGHT_PX, DEMO_WIDTH_FRACTION, EXPAND_DURATION_SEC, EXPAND_RADIUS_FROM,
    EXPAND_RADIUS_TO, SPLIT_DURATION_SEC, SPLIT_GAP_MAX_PX,
};
use liquid_core::{CardPlacement, SplitLayout};

/// Material "fast out, slow in" curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
pub fn fast_out_slow_in(x: f32) -> f32 {
    const X1: f32 = 0.4;
    const X2: f32 = 0.2;
    const Y1: f32 = 0.0;
    const Y2: f32 = 1.0;
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let bezier = |a: f32, b: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };
    // x(t) is monotonic on [0, 1], so bisection converges.
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    for _ in 0..24 {
        let mid = 0.5 * (lo + hi);
        if bezier(X1, X2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier(Y1, Y2, 0.5 * (lo + hi))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: f32,
    duration: f32,
}

impl Tween {
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn new(from: f32, to: f32, start: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn value(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * fast_out_slow_in(t)
    }
}

#[derive(Debug)]
pub struct SplitDemo {
    expand: Tween,
    split: Tween,
    is_split: bool,
}

impl SplitDemo {
    pub fn new(now: f32) -> Self {
        Self {
            expand: Tween::new(0.0, 1.0, now, EXPAND_DURATION_SEC),
            split: Tween::settled(0.0),
            is_split: false,
        }
    }

    pub fn is_split(&self) -> bool {
        self.is_split
    }

    /// Flip between one card and two. Starts from wherever the previous
    /// animation currently is.
    pub fn toggle(&mut self, now: f32) {
        self.is_split = !self.is_split;
        let target = if self.is_split { 1.0 } else { 0.0 };
        self.split = Tween::new(self.split.value(now), target, now, SPLIT_DURATION_SEC);
    }

    pub fn corner_radius(&self, now: f32) -> f32 {
        let p = self.expand.value(now);
        EXPAND_RADIUS_FROM + (EXPAND_RADIUS_TO - EXPAND_RADIUS_FROM) * p
    }

    pub fn split_progress(&self, now: f32) -> f32 {
        self.split.value(now)
    }

    pub fn layout(area: Vec2) -> SplitLayout {
        let height = DEMO_CARD_HEIGHT_PX.min(area.y).max(1.0);
        SplitLayout::new(area.x * DEMO_WIDTH_FRACTION, height, SPLIT_GAP_MAX_PX)
    }

    /// Cards for an `area` whose top-left sits at `area_origin`, with
    /// origins translated into window pixels.
    pub fn placements(
        &self,
        now: f32,
        area_origin: Vec2,
        area: Vec2,
    ) -> impl Iterator<Item = CardPlacement> {
        let split = Self::layout(area);
        let box_origin = area_origin + (area - split.total_size()) * 0.5;
        split
            .placements(self.split_progress(now))
            .into_iter()
            .map(move |mut card| {
                card.origin += box_origin;
                card
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert!(fast_out_slow_in(0.0).abs() < 1e-4);
        assert!((fast_out_slow_in(1.0) - 1.0).abs() < 1e-4);
        assert!(fast_out_slow_in(0.5) > 0.5, "curve should lead at midpoint");
    }

    #[test]
    fn radius_tightens_as_card_expands() {
        let demo = SplitDemo::new(0.0);
        assert_eq!(demo.corner_radius(0.0), EXPAND_RADIUS_FROM);
        assert!((demo.corner_radius(EXPAND_DURATION_SEC) - EXPAND_RADIUS_TO).abs() < 1e-3);
    }

    #[test]
    fn toggle_runs_split_forward_and_back() {
        let mut demo = SplitDemo::new(0.0);
        demo.toggle(1.0);
        assert!(demo.is_split());
        assert_eq!(demo.split_progress(1.0), 0.0);
        assert!((demo.split_progress(1.0 + SPLIT_DURATION_SEC) - 1.0).abs() < 1e-3);
        demo.toggle(5.0);
        assert!((demo.split_progress(5.0 + SPLIT_DURATION_SEC)).abs() < 1e-3);
    }

    #[test]
    fn split_cards_are_centred_in_the_area() {
        let mut demo = SplitDemo::new(0.0);
        demo.toggle(0.0);
        let area = Vec2::new(1000.0, 400.0);
        let cards: Vec<_> = demo.placements(10.0, Vec2::ZERO, area).collect();
        assert_eq!(cards.len(), 2);
        let left = cards[0].origin.x;
        let right = cards[1].origin.x + cards[1].size.x;
        assert!((left - (area.x - right)).abs() < 1e-3, "{left} vs {right}");
        assert_eq!(cards[0].origin.y, 100.0);
    }
}
