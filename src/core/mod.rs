pub mod axis;
pub mod layout;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{AxisStyle, TICK_SPACING_PX, draw_horizontal, draw_horizontal_text_labels, draw_vertical};
pub use layout::Layout;
pub use scale::ValueScale;
pub use series::Series;
pub use types::{CanvasSize, Category, ChartKind, PointPx, RectPx, Rgb};
