mod utils;

use smart_leds::{RGB8, RGBW, White};

pub use utils::{color_blend, color_wheel};

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;

/// Packed 32-bit color in `0xWWRRGGBB` layout
///
/// The white byte is only transmitted on RGBW strips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0x00_00_00_00);
    pub const RED: Self = Self(0x00_FF_00_00);
    pub const GREEN: Self = Self(0x00_00_FF_00);
    pub const BLUE: Self = Self(0x00_00_00_FF);
    pub const WHITE: Self = Self(0x00_FF_FF_FF);
    pub const YELLOW: Self = Self(0x00_FF_FF_00);
    pub const CYAN: Self = Self(0x00_00_FF_FF);
    pub const MAGENTA: Self = Self(0x00_FF_00_FF);
    pub const PURPLE: Self = Self(0x00_40_00_80);
    pub const ORANGE: Self = Self(0x00_FF_30_00);
    pub const PINK: Self = Self(0x00_FF_14_93);
    pub const GRAY: Self = Self(0x00_10_10_10);
    pub const ULTRAWHITE: Self = Self(0xFF_FF_FF_FF);

    /// Create a color from its packed `0xWWRRGGBB` value
    pub const fn from_wrgb(value: u32) -> Self {
        Self(value)
    }

    /// Create a color without a white component
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self::with_white(r, g, b, 0)
    }

    #[allow(clippy::cast_lossless)]
    pub const fn with_white(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self((w as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Packed `0xWWRRGGBB` value
    pub const fn wrgb(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn w(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_black(self) -> bool {
        self.0 == 0
    }

    /// Color at 25% intensity
    pub const fn dim(self) -> Self {
        Self((self.0 >> 2) & 0x3f3f_3f3f)
    }

    /// Color at 6% intensity
    pub const fn dark(self) -> Self {
        Self((self.0 >> 4) & 0x0f0f_0f0f)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        Rgb {
            r: color.r(),
            g: color.g(),
            b: color.b(),
        }
    }
}

impl From<Color> for Rgbw {
    fn from(color: Color) -> Self {
        Rgbw {
            r: color.r(),
            g: color.g(),
            b: color.b(),
            a: White(color.w()),
        }
    }
}
