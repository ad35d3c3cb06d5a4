use serde::{Deserialize, Serialize};
use tracing::debug;

/// Linear value-to-pixel-row scale shared by every Y series of a chart.
///
/// The scale is sign-aware: an all-positive value set hangs from the bottom of
/// the plot, an all-negative set from the top, and a mixed set places the zero
/// row between them in proportion to the magnitudes. When the value range
/// exceeds the available pixel height, values are compressed by an integer
/// `units_per_step` divisor before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    zero_row: i32,
    px_per_unit: i32,
    units_per_step: i64,
    value_span: f64,
}

impl Default for ValueScale {
    fn default() -> Self {
        Self {
            zero_row: 0,
            px_per_unit: 0,
            units_per_step: 1,
            value_span: 0.0,
        }
    }
}

impl ValueScale {
    /// Fits a scale to every value of every series at once.
    ///
    /// Never fails: an empty value set, a zero-height plot, or an all-zero
    /// value set yields `px_per_unit = 0`, so every projection lands on the
    /// zero row.
    #[must_use]
    pub fn fit<I>(values: I, plot_height: i32) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        let mut min_val = first;
        let mut max_val = first;
        for v in iter {
            if v > max_val {
                max_val = v;
            }
            if v < min_val {
                min_val = v;
            }
        }

        if plot_height <= 0 {
            return Self::default();
        }
        let height = f64::from(plot_height);

        let scale = if min_val >= 0.0 || max_val < 0.0 {
            // All values on one side of zero (zero itself counts as positive).
            let (magnitude, zero_row) = if min_val < 0.0 {
                (-min_val, 0)
            } else {
                (max_val, plot_height)
            };

            if magnitude > 0.0 {
                let units_per_step = compression(magnitude, height);
                Self {
                    zero_row,
                    px_per_unit: (height / (magnitude / units_per_step as f64)) as i32,
                    units_per_step,
                    value_span: magnitude,
                }
            } else {
                Self {
                    zero_row,
                    ..Self::default()
                }
            }
        } else {
            // Values straddle zero.
            let min_mag = -min_val;
            let max_mag = max_val;
            let span = min_mag + max_mag;

            let units_per_step = compression(span, height);
            let px_per_unit = (height / (span / units_per_step as f64)) as i32;
            Self {
                zero_row: (max_mag / units_per_step as f64 * f64::from(px_per_unit)) as i32,
                px_per_unit,
                units_per_step,
                value_span: span,
            }
        };

        debug!(
            min_val,
            max_val,
            zero_row = scale.zero_row,
            px_per_unit = scale.px_per_unit,
            units_per_step = scale.units_per_step,
            "fitted value scale"
        );
        scale
    }

    /// Projects a data value to a pixel row (top-left origin: higher value,
    /// smaller row). Idempotent for unchanged inputs.
    #[must_use]
    pub fn project(&self, value: f64) -> i32 {
        self.zero_row - (value / self.units_per_step as f64 * f64::from(self.px_per_unit)) as i32
    }

    /// Pixel row representing data value zero.
    #[must_use]
    pub const fn zero_row(&self) -> i32 {
        self.zero_row
    }

    #[must_use]
    pub const fn px_per_unit(&self) -> i32 {
        self.px_per_unit
    }

    /// Integer compression divisor; 1 when the range fits the plot height.
    #[must_use]
    pub const fn units_per_step(&self) -> i64 {
        self.units_per_step
    }

    /// Total data-unit length represented by the plot height.
    #[must_use]
    pub const fn value_span(&self) -> f64 {
        self.value_span
    }
}

fn compression(span: f64, height: f64) -> i64 {
    if span > height {
        (span / height).ceil() as i64
    } else {
        1
    }
}
