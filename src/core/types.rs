use serde::{Deserialize, Serialize};

/// Requested output canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// 8-bit RGB color. Channel range is enforced by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Darker shade used for bar and legend swatch outlines.
    /// Each channel saturates at zero.
    #[must_use]
    pub const fn darken(self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_sub(delta),
            g: self.g.saturating_sub(delta),
            b: self.b.saturating_sub(delta),
        }
    }
}

/// One X-axis category: a numeric position or an opaque label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Category {
    Number(f64),
    Text(String),
}

impl Category {
    /// Caption text used on the discrete-category axis.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Self::Number(n) => format!("{n}"),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Category {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Category {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Chart kinds sharing the layout/scale/axis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    StackedBar,
}

impl ChartKind {
    /// Share of the canvas height reserved for X-axis captions.
    #[must_use]
    pub const fn x_label_band_pct(self) -> i32 {
        match self {
            Self::Line => 20,
            Self::StackedBar => 15,
        }
    }
}

/// Pixel-space point, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPx {
    pub x: i32,
    pub y: i32,
}

impl PointPx {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectPx {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectPx {
    #[must_use]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    #[must_use]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    #[must_use]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Corner-order-independent form expected by the rect draw calls.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }
}
