//! Bounded random draws on top of the platform entropy source.
//!
//! Every draw maps a raw `next_u32()` onto an inclusive range with a plain
//! modulo, so a given entropy stream always produces the same frames.

use rand_core::RngCore;

/// Minimum circular distance between two consecutive random wheel indexes
pub const MIN_WHEEL_DISTANCE: u8 = 42;

/// Random draws used by the effects
pub struct FxRandom<'a> {
    source: &'a mut dyn RngCore,
}

impl<'a> FxRandom<'a> {
    pub fn new(source: &'a mut dyn RngCore) -> Self {
        Self { source }
    }

    /// Uniform value in `min..=max`
    ///
    /// Returns `min` when the range is a single value and `0` when it is
    /// inverted.
    pub fn uniform(&mut self, min: u32, max: u32) -> u32 {
        match min.cmp(&max) {
            core::cmp::Ordering::Less => {
                let span = (max - min).wrapping_add(1);
                if span == 0 {
                    return self.source.next_u32();
                }
                self.source.next_u32() % span + min
            }
            core::cmp::Ordering::Equal => min,
            core::cmp::Ordering::Greater => 0,
        }
    }

    /// Uniform byte in `0..=255`
    #[allow(clippy::cast_possible_truncation)]
    pub fn random8(&mut self) -> u8 {
        self.uniform(0, 255) as u8
    }

    /// Byte in `0..=lim + 1`, truncated to 8 bits
    #[allow(clippy::cast_possible_truncation)]
    pub fn random8_lim(&mut self, lim: u8) -> u8 {
        self.uniform(0, u32::from(lim) + 1) as u8
    }

    /// Value in `0..=lim + 1`, truncated to 16 bits
    #[allow(clippy::cast_possible_truncation)]
    pub fn random16_lim(&mut self, lim: u16) -> u16 {
        self.uniform(0, u32::from(lim) + 1) as u16
    }

    /// Pick a wheel index perceptually distinct from `pos`
    ///
    /// Redraws until the circular distance to `pos` is at least
    /// [`MIN_WHEEL_DISTANCE`].
    pub fn wheel_index(&mut self, pos: u8) -> u8 {
        loop {
            let candidate = self.random8();
            if wheel_distance(pos, candidate) >= MIN_WHEEL_DISTANCE {
                return candidate;
            }
        }
    }
}

/// Circular distance between two wheel indexes
pub const fn wheel_distance(a: u8, b: u8) -> u8 {
    let x = a.abs_diff(b);
    let y = 255 - x;
    if x < y { x } else { y }
}
