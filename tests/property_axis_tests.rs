use barline::core::axis;
use barline::core::AxisStyle;
use barline::RecordingSurface;
use proptest::collection::vec;
use proptest::prelude::*;

/// Asserts that consecutive drawn captions never overlap: each caption's
/// leading edge must be at or past the previous caption's trailing edge.
fn assert_no_overlap(labels: &[(i32, i32, &str)]) -> Result<(), TestCaseError> {
    for pair in labels.windows(2) {
        let (prev_x, prev_w, prev) = pair[0];
        let (next_x, _, next) = pair[1];
        prop_assert!(
            next_x >= prev_x + prev_w,
            "caption {next:?} at {next_x} overlaps {prev:?} ending at {}",
            prev_x + prev_w
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn horizontal_axis_captions_never_overlap(
        x_end in 100i32..2000,
        char_width in 2i32..40
    ) {
        let style = AxisStyle::default();
        let mut surface = RecordingSurface::with_char_width(char_width);
        axis::draw_horizontal(&mut surface, &style, 0, x_end, 50, 0).expect("axis draws");

        let mut labels = surface.drawn_labels();
        // The left walk re-draws the zero caption at the shared zero mark.
        labels.pop();
        assert_no_overlap(&labels)?;
    }

    #[test]
    fn tick_centered_category_captions_never_overlap(
        x_end in 100i32..2000,
        char_width in 2i32..60,
        captions in vec("[a-z]{1,8}", 1..15)
    ) {
        let style = AxisStyle::default();
        let mut surface = RecordingSurface::with_char_width(char_width);
        axis::draw_horizontal_text_labels(&mut surface, &style, 0, x_end, 50, &captions, false)
            .expect("labels draw");

        assert_no_overlap(&surface.drawn_labels())?;
    }
}
