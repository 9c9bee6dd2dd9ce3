//! Property tests for the overflow physics and value clamping.

use elastic_core::{decay, quantize_value, BoundingBox, ElasticSlider, OverflowTracker, Region};
use elastic_core::{SliderConfig, SpringParams};
use proptest::prelude::*;

fn arb_cap() -> impl Strategy<Value = f64> {
    1.0..100.0_f64
}

fn arb_track() -> impl Strategy<Value = BoundingBox> {
    (-500.0..500.0_f64, 1.0..800.0_f64).prop_map(|(left, width)| BoundingBox::new(left, left + width))
}

proptest! {
    #[test]
    fn decay_is_bounded(cap in arb_cap(), ratio in 0.0..1000.0_f64) {
        let d = decay(ratio * cap, cap);
        prop_assert!(d >= 0.0);
        prop_assert!(d < cap);
    }

    #[test]
    fn decay_is_strictly_increasing(cap in arb_cap(), r in 0.0..5.0_f64, dr in 0.001..1.0_f64) {
        let lo = decay(r * cap, cap);
        let hi = decay((r + dr) * cap, cap);
        prop_assert!(hi > lo, "decay({}) = {} !> {}", (r + dr) * cap, hi, lo);
    }

    #[test]
    fn zero_cap_always_yields_zero(d in 0.0..1e6_f64) {
        prop_assert_eq!(decay(d, 0.0), 0.0);
    }

    #[test]
    fn region_matches_strict_comparisons(track in arb_track(), x in -2000.0..2000.0_f64) {
        let region = Region::classify(x, &track);
        if x < track.left {
            prop_assert_eq!(region, Region::Left);
        } else if x > track.right {
            prop_assert_eq!(region, Region::Right);
        } else {
            prop_assert_eq!(region, Region::Middle);
        }
    }

    #[test]
    fn tracker_overflow_is_non_negative_and_capped(
        track in arb_track(),
        cap in arb_cap(),
        xs in proptest::collection::vec(-3000.0..3000.0_f64, 1..40),
    ) {
        let mut t = OverflowTracker::new(cap, SpringParams::from_bounce(0.5, 0.8));
        for x in xs {
            t.on_pointer_move(x, &track);
            prop_assert!(t.overflow() >= 0.0);
            prop_assert!(t.overflow() < cap);
        }
    }

    #[test]
    fn value_stays_integral_and_in_range(raws in proptest::collection::vec(-1e4..1e4_f64, 1..50)) {
        let mut s = ElasticSlider::new(SliderConfig::default());
        for raw in raws {
            let v = s.on_value_change(raw);
            prop_assert!(v <= 100);
            prop_assert_eq!(Some(v), quantize_value(raw));
        }
    }

    #[test]
    fn release_always_settles_to_zero(
        track in arb_track(),
        past in 0.0..2000.0_f64,
        frame_ms in 4.0..50.0_f64,
    ) {
        let mut t = OverflowTracker::new(50.0, SpringParams::from_bounce(0.5, 0.8));
        t.on_pointer_move(track.right + past, &track);
        t.on_pointer_release();
        let mut frames = 0;
        while t.tick(frame_ms / 1000.0) {
            prop_assert!(t.overflow() >= 0.0);
            frames += 1;
            prop_assert!(frames < 5000);
        }
        prop_assert_eq!(t.overflow(), 0.0);
    }
}
