//! Channel-aware accessors over the raw pixel bytes.
//!
//! Pixel `i` occupies bytes `i * channels .. (i + 1) * channels` in
//! R, G, B, [W] order. Out-of-range writes are dropped and out-of-range reads
//! return black, so effect arithmetic never has to pre-validate indexes.

use crate::color::Color;

/// Number of bytes per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Channels {
    #[default]
    Rgb = 3,
    Rgbw = 4,
}

impl Channels {
    pub const fn count(self) -> usize {
        self as usize
    }

    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw)
    }
}

impl TryFrom<u8> for Channels {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgbw),
            other => Err(other),
        }
    }
}

// Fade rate tables: delta' = (delta >> HIGH) + (delta >> LOW)
const FADE_RATE_HIGH: [u32; 8] = [0, 1, 1, 1, 2, 3, 4, 6];
const FADE_RATE_LOW: [u32; 8] = [0, 2, 3, 8, 8, 8, 8, 8];

/// Deltas below this jump straight to the target
const FADE_SNAP_DELTA: i32 = 3;

/// Mutable view over a strip's pixel bytes
pub struct Pixels<'a> {
    bytes: &'a mut [u8],
    channels: Channels,
}

impl<'a> Pixels<'a> {
    /// Wrap a byte buffer; trailing bytes that do not form a full pixel are
    /// never touched.
    pub fn new(bytes: &'a mut [u8], channels: Channels) -> Self {
        Self { bytes, channels }
    }

    /// Number of LEDs
    pub fn len(&self) -> usize {
        self.bytes.len() / self.channels.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn channels(&self) -> Channels {
        self.channels
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Write raw channel values; `w` is ignored on RGB strips
    pub fn set_rgbw(&mut self, index: usize, r: u8, g: u8, b: u8, w: u8) {
        let channels = self.channels.count();
        if index >= self.len() {
            return;
        }
        let base = index * channels;
        let components = [r, g, b, w];
        self.bytes[base..base + channels].copy_from_slice(&components[..channels]);
    }

    pub fn set(&mut self, index: usize, color: Color) {
        self.set_rgbw(index, color.r(), color.g(), color.b(), color.w());
    }

    /// Packed color of a pixel; white is zero on RGB strips
    pub fn get(&self, index: usize) -> Color {
        if index >= self.len() {
            return Color::BLACK;
        }
        let base = index * self.channels.count();
        let w = if self.channels.has_white() {
            self.bytes[base + 3]
        } else {
            0
        };
        Color::with_white(self.bytes[base], self.bytes[base + 1], self.bytes[base + 2], w)
    }

    /// Fill `count` pixels starting at `first`
    ///
    /// `count == 0` fills to the end of the strip. The range is clamped to
    /// the strip and a `first` past the end is a no-op.
    pub fn fill(&mut self, color: Color, first: usize, count: usize) {
        let len = self.len();
        if first >= len {
            return;
        }
        let end = if count == 0 {
            len
        } else {
            first.saturating_add(count).min(len)
        };
        for index in first..end {
            self.set(index, color);
        }
    }

    /// Fill the whole strip
    pub fn fill_all(&mut self, color: Color) {
        self.fill(color, 0, 0);
    }

    /// Move `count` pixels from `src` to `dest`, overlap-safe
    ///
    /// The move is clamped so neither range leaves the strip.
    pub fn copy_within(&mut self, dest: usize, src: usize, count: usize) {
        let len = self.len();
        if dest >= len || src >= len {
            return;
        }
        let count = count.min(len - dest).min(len - src);
        let channels = self.channels.count();
        let src = src * channels;
        self.bytes
            .copy_within(src..src + count * channels, dest * channels);
    }

    /// Move every pixel toward `target` by one fade step
    ///
    /// Rate 0 halves each channel (fade to black, `target` ignored). Rates
    /// 1..=7 close the gap by `(delta >> high) + (delta >> low)`; deltas
    /// below 3 snap to the target, and a gap that would not shrink moves by
    /// one so every pixel settles on `target`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fade_toward(&mut self, target: Color, rate: u8) {
        let rate = usize::from(rate & 7);
        if rate == 0 {
            for index in 0..self.len() {
                let color = self.get(index).wrgb();
                self.set(index, Color::from_wrgb((color >> 1) & 0x7F7F_7F7F));
            }
            return;
        }

        let high = FADE_RATE_HIGH[rate];
        let low = FADE_RATE_LOW[rate];
        let step = |from: u8, to: u8| -> u8 {
            let delta = i32::from(to) - i32::from(from);
            let delta = if delta.abs() < FADE_SNAP_DELTA {
                delta
            } else {
                match (delta >> high) + (delta >> low) {
                    0 => delta.signum(),
                    moved => moved,
                }
            };
            (i32::from(from) + delta) as u8
        };

        for index in 0..self.len() {
            let color = self.get(index);
            self.set_rgbw(
                index,
                step(color.r(), target.r()),
                step(color.g(), target.g()),
                step(color.b(), target.b()),
                step(color.w(), target.w()),
            );
        }
    }

    /// One heat-diffusion pass over the raw bytes
    ///
    /// Every byte except the first and last pixel becomes
    /// `prev / 4 + self + next / 4`, saturated at 255. The pass runs in
    /// place from low to high addresses.
    #[allow(clippy::cast_possible_truncation)]
    pub fn diffuse(&mut self) {
        let stride = self.channels.count();
        let stop = self.len().saturating_sub(1) * stride;
        for i in stride..stop {
            let heat = u16::from(self.bytes[i - stride] >> 2)
                + u16::from(self.bytes[i])
                + u16::from(self.bytes[i + stride] >> 2);
            self.bytes[i] = heat.min(255) as u8;
        }
    }
}
