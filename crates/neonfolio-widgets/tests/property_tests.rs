//! Property-based tests for the widget state machines
//!
//! Uses proptest to verify the carousel and proximity invariants across
//! arbitrary layouts, gesture sequences, and presets.

use proptest::prelude::*;

use neonfolio_widgets::{CarouselMetrics, CarouselState, Falloff, VariationAxes};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Plausible measured layouts: positive card widths, non-negative gaps.
fn metrics_strategy() -> impl Strategy<Value = CarouselMetrics> {
    (200.0..2000.0f64, 80.0..600.0f64, 0.0..120.0f64).prop_map(
        |(container_width, card_width, card_gap)| CarouselMetrics {
            container_width,
            card_width,
            card_gap,
        },
    )
}

/// Gestures and navigations a user can throw at the carousel.
#[derive(Debug, Clone)]
enum CarouselOp {
    MoveTo(isize),
    Next,
    Prev,
    Drag { start_x: f64, end_x: f64 },
    Resize(CarouselMetrics),
}

fn ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CarouselOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (-5isize..15).prop_map(CarouselOp::MoveTo),
            2 => Just(CarouselOp::Next),
            2 => Just(CarouselOp::Prev),
            3 => (-1000.0..1000.0f64, -1000.0..1000.0f64)
                .prop_map(|(start_x, end_x)| CarouselOp::Drag { start_x, end_x }),
            1 => metrics_strategy().prop_map(CarouselOp::Resize),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Carousel Properties
// ============================================================================

proptest! {
    /// move_to always resolves to clamp(k, 0, n-1) and the settled
    /// translate matches the centering formula for that index.
    #[test]
    fn move_to_clamps_and_centers(
        metrics in metrics_strategy(),
        count in 1usize..10,
        requested in -20isize..40,
    ) {
        let mut state = CarouselState::new(count, 0);
        state.set_metrics(metrics);
        let resolved = state.move_to(requested);
        let expected = requested.clamp(0, count as isize - 1) as usize;
        prop_assert_eq!(resolved, expected);
        prop_assert_eq!(state.translate(), metrics.translate_for(expected));
    }

    /// Re-selecting the current card changes nothing.
    #[test]
    fn move_to_is_idempotent(
        metrics in metrics_strategy(),
        count in 1usize..10,
        initial in 0usize..10,
    ) {
        let mut state = CarouselState::new(count, initial);
        state.set_metrics(metrics);
        let index = state.current_index();
        let translate = state.translate();
        prop_assert_eq!(state.move_to(index as isize), index);
        prop_assert_eq!(state.translate(), translate);
    }

    /// No sequence of gestures can desynchronize the index from the
    /// settled translate or push it out of range.
    #[test]
    fn gesture_sequences_preserve_invariants(
        metrics in metrics_strategy(),
        count in 1usize..8,
        ops in ops_strategy(24),
    ) {
        let mut state = CarouselState::new(count, 0);
        state.set_metrics(metrics);
        for op in ops {
            match op {
                CarouselOp::MoveTo(k) => { state.move_to(k); }
                CarouselOp::Next => { state.move_next(); }
                CarouselOp::Prev => { state.move_prev(); }
                CarouselOp::Drag { start_x, end_x } => {
                    state.begin_drag(start_x);
                    state.drag_to(end_x);
                    state.release_drag();
                }
                CarouselOp::Resize(m) => { state.set_metrics(m); }
            }
            prop_assert!(state.current_index() < count);
            if !state.is_dragging() {
                prop_assert_eq!(
                    state.translate(),
                    state.metrics().translate_for(state.current_index())
                );
            }
        }
    }

    /// A release moves the index by at most one card.
    #[test]
    fn release_steps_at_most_one(
        metrics in metrics_strategy(),
        count in 1usize..8,
        initial in 0usize..8,
        start_x in -500.0..500.0f64,
        end_x in -2000.0..2000.0f64,
    ) {
        let mut state = CarouselState::new(count, initial);
        state.set_metrics(metrics);
        let before = state.current_index() as isize;
        state.begin_drag(start_x);
        state.drag_to(end_x);
        let after = state.release_drag() as isize;
        prop_assert!((after - before).abs() <= 1);
    }

    /// Resizing a settled carousel never changes the active card.
    #[test]
    fn resize_preserves_index(
        before in metrics_strategy(),
        after in metrics_strategy(),
        count in 1usize..10,
        initial in 0usize..10,
    ) {
        let mut state = CarouselState::new(count, initial);
        state.set_metrics(before);
        let index = state.current_index();
        state.set_metrics(after);
        prop_assert_eq!(state.current_index(), index);
        prop_assert_eq!(state.translate(), after.translate_for(index));
    }
}

// ============================================================================
// Proximity Properties
// ============================================================================

proptest! {
    /// The weight is always within [0, 1] and excludes the boundary.
    #[test]
    fn weight_stays_normalized(
        distance in 0.0..1000.0f64,
        radius in 1.0..500.0f64,
    ) {
        for falloff in [Falloff::Linear, Falloff::Quadratic] {
            let w = falloff.weight(distance, radius);
            prop_assert!((0.0..=1.0).contains(&w));
            if distance >= radius {
                prop_assert_eq!(w, 0.0);
            }
        }
    }

    /// Inside the radius, quadratic falloff never exceeds linear.
    #[test]
    fn quadratic_bounded_by_linear(
        distance in 0.0..500.0f64,
        radius in 1.0..500.0f64,
    ) {
        let linear = Falloff::Linear.weight(distance, radius);
        let quadratic = Falloff::Quadratic.weight(distance, radius);
        prop_assert!(quadratic <= linear);
    }

    /// Interpolated axis values always lie between their endpoints, and an
    /// axis absent from the target preset stays constant.
    #[test]
    fn lerp_is_bounded_by_presets(
        from_wght in 100.0..900.0f64,
        to_wght in 100.0..900.0f64,
        opsz in 6.0..40.0f64,
        weight in 0.0..=1.0f64,
    ) {
        let from = VariationAxes::parse(&format!("'wght' {from_wght}, 'opsz' {opsz}"));
        let to = VariationAxes::parse(&format!("'wght' {to_wght}"));
        let out = VariationAxes::lerp(&from, &to, weight);

        let wght = out.get("wght").unwrap();
        let (lo, hi) = if from_wght <= to_wght {
            (from_wght, to_wght)
        } else {
            (to_wght, from_wght)
        };
        prop_assert!(wght >= lo - 1e-9 && wght <= hi + 1e-9);
        prop_assert_eq!(out.get("opsz"), Some(opsz));
    }
}
