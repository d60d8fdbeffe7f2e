//! Carousel geometry and drag/snap state machine.
//!
//! The carousel centers one "active" card and lets the user change it by
//! dragging the track, clicking prev/next, or picking an indicator dot.
//! All of that decision-making lives here as plain math over measured
//! layout; the component layer only forwards pointer events and paints
//! the translate this module reports.

use tracing::debug;

/// Fraction of a card's width a drag must cross before a release changes
/// the active card. Empirical feel constant, kept as-is rather than
/// derived from anything.
pub const DRAG_THRESHOLD_DIVISOR: f64 = 3.5;

/// Measured carousel layout, in CSS pixels.
///
/// These come from the rendered DOM (container and first card bounding
/// rects) and are re-derived whenever the viewport changes. The layout is
/// responsive, so nothing here is a fixed constant.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CarouselMetrics {
    /// Inner width of the carousel viewport.
    pub container_width: f64,
    /// Width of a single card.
    pub card_width: f64,
    /// Horizontal gap between adjacent cards.
    pub card_gap: f64,
}

impl CarouselMetrics {
    /// Distance between the left edges of two adjacent cards.
    pub fn step(&self) -> f64 {
        self.card_width + self.card_gap
    }

    /// Track translate that horizontally centers card `index` in the
    /// container.
    pub fn translate_for(&self, index: usize) -> f64 {
        self.container_width / 2.0 - self.card_width / 2.0 - index as f64 * self.step()
    }

    /// Drag distance a release must exceed (strictly) to advance to a
    /// neighboring card.
    pub fn drag_threshold(&self) -> f64 {
        self.card_width / DRAG_THRESHOLD_DIVISOR
    }
}

/// Transient pointer-drag tracking.
///
/// Exists only between pointer-down and release; dropped as soon as the
/// gesture is classified.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragGesture {
    /// Pointer x at pointer-down.
    start_x: f64,
    /// Track translate when the gesture started.
    origin_translate: f64,
    /// Live translate, following the pointer 1:1.
    translate: f64,
}

impl DragGesture {
    fn moved_by(&self) -> f64 {
        self.translate - self.origin_translate
    }
}

/// Carousel interaction state.
///
/// `current_index` is the single source of truth for which card is
/// active; the settled translate is always derived from it, so a new
/// navigation authoritatively overwrites any in-flight one.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    item_count: usize,
    current_index: usize,
    metrics: CarouselMetrics,
    drag: Option<DragGesture>,
}

impl CarouselState {
    /// Creates the state for `item_count` cards, starting at
    /// `initial_index` (clamped into range).
    pub fn new(item_count: usize, initial_index: usize) -> Self {
        let mut state = Self {
            item_count,
            current_index: 0,
            metrics: CarouselMetrics::default(),
            drag: None,
        };
        state.current_index = state.clamp_index(initial_index as isize);
        state
    }

    /// Number of cards.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index of the active card.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current measured layout.
    pub fn metrics(&self) -> CarouselMetrics {
        self.metrics
    }

    /// Track translate to paint right now: the live drag translate while
    /// a gesture is in progress, otherwise the settled translate of the
    /// active card.
    pub fn translate(&self) -> f64 {
        match self.drag {
            Some(gesture) => gesture.translate,
            None => self.settled_translate(),
        }
    }

    /// Translate that centers the active card.
    pub fn settled_translate(&self) -> f64 {
        self.metrics.translate_for(self.current_index)
    }

    fn clamp_index(&self, index: isize) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        index.clamp(0, self.item_count as isize - 1) as usize
    }

    /// Navigates to `index`, clamped into range. Ends any in-flight drag.
    /// Returns the resolved index.
    pub fn move_to(&mut self, index: isize) -> usize {
        self.drag = None;
        self.current_index = self.clamp_index(index);
        self.current_index
    }

    /// Steps to the next card (clamped at the end).
    pub fn move_next(&mut self) -> usize {
        self.move_to(self.current_index as isize + 1)
    }

    /// Steps to the previous card (clamped at the start).
    pub fn move_prev(&mut self) -> usize {
        self.move_to(self.current_index as isize - 1)
    }

    /// Installs fresh layout measurements.
    ///
    /// The active card never changes here; only its translate is
    /// re-derived. A drag that spans a resize is dropped and the track
    /// settles back onto the active card.
    pub fn set_metrics(&mut self, metrics: CarouselMetrics) {
        self.metrics = metrics;
        self.drag = None;
    }

    /// Starts a drag gesture at pointer x `client_x`.
    pub fn begin_drag(&mut self, client_x: f64) {
        let origin = self.settled_translate();
        self.drag = Some(DragGesture {
            start_x: client_x,
            origin_translate: origin,
            translate: origin,
        });
    }

    /// Follows the pointer while dragging: the track tracks the pointer
    /// 1:1 with no damping and no clamping, so cards can be pulled past
    /// either end. No-op unless a drag is in progress.
    pub fn drag_to(&mut self, client_x: f64) {
        if let Some(gesture) = self.drag.as_mut() {
            gesture.translate = gesture.origin_translate + (client_x - gesture.start_x);
        }
    }

    /// Ends the drag gesture and classifies it.
    ///
    /// A release that moved the track strictly further than the threshold
    /// advances one card in that direction; anything else (including a
    /// move of exactly the threshold) settles back. The resulting index is
    /// clamped, so over-dragging past an end snaps to the boundary card.
    /// Returns the resolved index. No-op if no drag is in progress.
    pub fn release_drag(&mut self) -> usize {
        let Some(gesture) = self.drag.take() else {
            return self.current_index;
        };
        let moved_by = gesture.moved_by();
        let threshold = self.metrics.drag_threshold();
        let target = if moved_by < -threshold {
            self.current_index as isize + 1
        } else if moved_by > threshold {
            self.current_index as isize - 1
        } else {
            self.current_index as isize
        };
        let resolved = self.move_to(target);
        debug!(moved_by, threshold, resolved, "drag released");
        resolved
    }
}

/// A card's position relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardRelation {
    /// The centered, active card.
    Active,
    /// Immediately left of the active card.
    Prev,
    /// Immediately right of the active card.
    Next,
    /// More than one card to the left.
    FarPrev,
    /// More than one card to the right.
    FarNext,
}

impl CardRelation {
    /// Classifies card `index` against the active index.
    pub fn classify(index: usize, active: usize) -> Self {
        if index == active {
            Self::Active
        } else if index + 1 == active {
            Self::Prev
        } else if index == active + 1 {
            Self::Next
        } else if index < active {
            Self::FarPrev
        } else {
            Self::FarNext
        }
    }
}

/// Visual pose of a card in the pseudo-3D stack.
///
/// A pure function of [`CardRelation`]; the numbers are empirical feel
/// constants and are kept verbatim rather than generalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation around the vertical axis, degrees.
    pub rotate_y_deg: f64,
    /// Extra horizontal shift, px.
    pub shift_x: f64,
    /// Depth offset, px (negative recedes).
    pub depth_z: f64,
    /// Card opacity.
    pub opacity: f64,
    /// Stacking order.
    pub z_index: i32,
    /// Color saturation multiplier.
    pub saturate: f64,
    /// Brightness multiplier.
    pub brightness: f64,
}

impl CardPose {
    /// The pose for a card in `relation` to the active one.
    pub fn of(relation: CardRelation) -> Self {
        match relation {
            CardRelation::Active => Self {
                scale: 1.0,
                rotate_y_deg: 0.0,
                shift_x: 0.0,
                depth_z: 0.0,
                opacity: 1.0,
                z_index: 20,
                saturate: 1.2,
                brightness: 1.1,
            },
            CardRelation::Prev => Self {
                scale: 0.75,
                rotate_y_deg: 45.0,
                shift_x: -80.0,
                depth_z: -150.0,
                opacity: 0.45,
                z_index: 10,
                saturate: 0.6,
                brightness: 0.7,
            },
            CardRelation::Next => Self {
                scale: 0.75,
                rotate_y_deg: -45.0,
                shift_x: 80.0,
                depth_z: -150.0,
                opacity: 0.45,
                z_index: 10,
                saturate: 0.6,
                brightness: 0.7,
            },
            CardRelation::FarPrev => Self {
                scale: 0.8,
                rotate_y_deg: 35.0,
                shift_x: 0.0,
                depth_z: -100.0,
                opacity: 0.45,
                z_index: 10,
                saturate: 0.6,
                brightness: 0.7,
            },
            CardRelation::FarNext => Self {
                scale: 0.8,
                rotate_y_deg: -45.0,
                shift_x: 0.0,
                depth_z: -100.0,
                opacity: 0.45,
                z_index: 10,
                saturate: 0.6,
                brightness: 0.7,
            },
        }
    }

    /// CSS `transform` value for this pose.
    pub fn transform_css(&self) -> String {
        format!(
            "scale({}) rotateY({}deg) translateX({}px) translateZ({}px)",
            self.scale, self.rotate_y_deg, self.shift_x, self.depth_z
        )
    }

    /// CSS `filter` value for this pose.
    pub fn filter_css(&self) -> String {
        format!("saturate({}) brightness({})", self.saturate, self.brightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> CarouselMetrics {
        CarouselMetrics {
            container_width: 1100.0,
            card_width: 320.0,
            card_gap: 50.0,
        }
    }

    fn state(count: usize, initial: usize) -> CarouselState {
        let mut s = CarouselState::new(count, initial);
        s.set_metrics(metrics());
        s
    }

    #[test]
    fn translate_centers_each_card() {
        let m = metrics();
        // container center minus half a card, minus one step per index
        assert_eq!(m.translate_for(0), 550.0 - 160.0);
        assert_eq!(m.translate_for(1), 550.0 - 160.0 - 370.0);
        assert_eq!(m.translate_for(2), 550.0 - 160.0 - 740.0);
    }

    #[test]
    fn move_to_clamps_into_range() {
        let mut s = state(3, 0);
        assert_eq!(s.move_to(5), 2);
        assert_eq!(s.translate(), metrics().translate_for(2));
        assert_eq!(s.move_to(-4), 0);
        assert_eq!(s.translate(), metrics().translate_for(0));
    }

    #[test]
    fn move_to_current_is_idempotent() {
        let mut s = state(3, 1);
        let before = s.translate();
        assert_eq!(s.move_to(1), 1);
        assert_eq!(s.translate(), before);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn initial_index_is_clamped() {
        let s = state(3, 99);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn single_item_navigation_is_noop() {
        let mut s = state(1, 0);
        assert_eq!(s.move_next(), 0);
        assert_eq!(s.move_prev(), 0);
        assert_eq!(s.translate(), metrics().translate_for(0));
    }

    #[test]
    fn drag_follows_pointer_one_to_one() {
        let mut s = state(3, 1);
        let origin = s.translate();
        s.begin_drag(400.0);
        s.drag_to(350.0);
        assert_eq!(s.translate(), origin - 50.0);
        // no clamping while dragging, even past the ends
        s.drag_to(4000.0);
        assert_eq!(s.translate(), origin + 3600.0);
    }

    #[test]
    fn release_at_exact_threshold_holds_position() {
        let threshold = metrics().drag_threshold();
        let mut s = state(3, 1);
        s.begin_drag(0.0);
        s.drag_to(-threshold);
        assert_eq!(s.release_drag(), 1);
    }

    #[test]
    fn release_just_under_threshold_holds_position() {
        let threshold = metrics().drag_threshold();
        let mut s = state(3, 1);
        s.begin_drag(0.0);
        s.drag_to(-(threshold - 0.01));
        assert_eq!(s.release_drag(), 1);
    }

    #[test]
    fn release_just_over_threshold_advances() {
        let threshold = metrics().drag_threshold();

        let mut s = state(3, 1);
        s.begin_drag(0.0);
        s.drag_to(-(threshold + 0.01));
        assert_eq!(s.release_drag(), 2);

        let mut s = state(3, 1);
        s.begin_drag(0.0);
        s.drag_to(threshold + 0.01);
        assert_eq!(s.release_drag(), 0);
    }

    #[test]
    fn release_settles_translate_onto_resolved_index() {
        let mut s = state(3, 0);
        s.begin_drag(500.0);
        s.drag_to(100.0);
        let resolved = s.release_drag();
        assert_eq!(resolved, 1);
        assert!(!s.is_dragging());
        assert_eq!(s.translate(), metrics().translate_for(1));
    }

    #[test]
    fn drag_past_end_snaps_back_to_boundary_card() {
        let mut s = state(3, 2);
        s.begin_drag(0.0);
        s.drag_to(-800.0);
        assert_eq!(s.release_drag(), 2);
        assert_eq!(s.translate(), metrics().translate_for(2));
    }

    #[test]
    fn full_card_drag_scenario() {
        // three items: drag a full card left, then a full card right
        let card = metrics().card_width;
        let mut s = state(3, 0);
        s.begin_drag(0.0);
        s.drag_to(-card);
        assert_eq!(s.release_drag(), 1);

        s.begin_drag(0.0);
        s.drag_to(card);
        assert_eq!(s.release_drag(), 0);

        // with a single item the same gesture is clamped to index 0
        let mut s = state(1, 0);
        s.begin_drag(0.0);
        s.drag_to(-card);
        assert_eq!(s.release_drag(), 0);
    }

    #[test]
    fn resize_keeps_index_and_recenters() {
        let mut s = state(3, 2);
        s.set_metrics(CarouselMetrics {
            container_width: 640.0,
            card_width: 240.0,
            card_gap: 30.0,
        });
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.translate(), 320.0 - 120.0 - 2.0 * 270.0);
    }

    #[test]
    fn resize_during_drag_drops_the_gesture() {
        let mut s = state(3, 1);
        s.begin_drag(0.0);
        s.drag_to(-500.0);
        s.set_metrics(metrics());
        assert!(!s.is_dragging());
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.translate(), metrics().translate_for(1));
    }

    #[test]
    fn release_without_drag_is_noop() {
        let mut s = state(3, 1);
        assert_eq!(s.release_drag(), 1);
    }

    #[test]
    fn relation_classification() {
        assert_eq!(CardRelation::classify(2, 2), CardRelation::Active);
        assert_eq!(CardRelation::classify(1, 2), CardRelation::Prev);
        assert_eq!(CardRelation::classify(3, 2), CardRelation::Next);
        assert_eq!(CardRelation::classify(0, 2), CardRelation::FarPrev);
        assert_eq!(CardRelation::classify(4, 2), CardRelation::FarNext);
    }

    #[test]
    fn active_pose_is_flat_and_on_top() {
        let pose = CardPose::of(CardRelation::Active);
        assert_eq!(pose.scale, 1.0);
        assert_eq!(pose.rotate_y_deg, 0.0);
        assert_eq!(pose.opacity, 1.0);
        assert!(pose.z_index > CardPose::of(CardRelation::Next).z_index);
    }

    #[test]
    fn side_poses_mirror_rotation_sign() {
        let prev = CardPose::of(CardRelation::Prev);
        let next = CardPose::of(CardRelation::Next);
        assert_eq!(prev.rotate_y_deg, -next.rotate_y_deg);
        assert_eq!(prev.shift_x, -next.shift_x);
    }

    #[test]
    fn transform_css_orders_operations() {
        let css = CardPose::of(CardRelation::Prev).transform_css();
        assert_eq!(
            css,
            "scale(0.75) rotateY(45deg) translateX(-80px) translateZ(-150px)"
        );
    }
}
