use barline::ValueScale;
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn fitted_values_always_project_inside_the_plot(
        values in vec(-1_000_000.0f64..1_000_000.0, 1..50),
        height in 10i32..2000
    ) {
        let scale = ValueScale::fit(values.iter().copied(), height);

        for &v in &values {
            let row = scale.project(v);
            prop_assert!(
                (0..=height).contains(&row),
                "value {v} projected to row {row} outside 0..={height}"
            );
        }
    }

    #[test]
    fn projection_is_monotone_non_increasing(
        mut values in vec(-1_000_000.0f64..1_000_000.0, 2..50),
        height in 10i32..2000
    ) {
        let scale = ValueScale::fit(values.iter().copied(), height);
        values.sort_by(f64::total_cmp);

        for pair in values.windows(2) {
            prop_assert!(
                scale.project(pair[0]) >= scale.project(pair[1]),
                "larger value {} landed below smaller value {}",
                pair[1],
                pair[0]
            );
        }
    }

    #[test]
    fn refitting_the_same_values_is_deterministic(
        values in vec(-1_000_000.0f64..1_000_000.0, 1..50),
        height in 10i32..2000
    ) {
        let first = ValueScale::fit(values.iter().copied(), height);
        let second = ValueScale::fit(values.iter().copied(), height);
        prop_assert_eq!(first, second);
    }
}
