//! Hue wheel effects
//!
//! Provides the wheel based effects:
//! - `rainbow`: the whole strip cycles through the wheel
//! - `rainbow_cycle`: the wheel scrolls along the strip
//! - `twinkle_fox`: every LED group breathes between palette colors at its
//!   own pace (adapted from Mark Kriegsman's `FastLED` TwinkleFOX)

use super::Fx;
use crate::{
    color::{color_blend, color_wheel},
    math8::fast_sine8,
};

/// Linear congruential generator used to derive per-group phases
const FOX_SEED_MUL: u16 = 2053;
const FOX_SEED_ADD: u16 = 13849;

/// Hue threshold above which TwinkleFOX blends the secondary color pair
const FOX_PAIR_THRESHOLD: u16 = 128;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow(fx: &mut Fx<'_>) -> u32 {
    let color = color_wheel(fx.counters.step as u8);
    fx.fill_all(color);

    fx.counters.step = (fx.counters.step + 1) & 0xFF;
    if fx.counters.step == 0 {
        fx.set_cycle();
    }
    fx.speed() / 256
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn rainbow_cycle(fx: &mut Fx<'_>) -> u32 {
    let len = fx.len();
    let color = color_wheel(fx.counters.step as u8);

    fx.shift(1, usize::from(fx.settings.led_count) - 1);
    if fx.is_reverse() {
        fx.set(len - 1, color);
    } else {
        fx.set(0, color);
    }

    let increment = match (256 / len) as u8 {
        0 => 1,
        increment => u32::from(increment),
    };
    fx.counters.step += increment;
    if fx.counters.step > 255 {
        fx.counters.step &= 0xFF;
        fx.set_cycle();
    }
    fx.speed() / 64
}

#[inline]
const fn next_seed(seed: u16) -> u16 {
    seed.wrapping_mul(FOX_SEED_MUL).wrapping_add(FOX_SEED_ADD)
}

#[inline]
const fn fold_seed(seed: u16) -> u16 {
    seed.wrapping_add(seed >> 8)
}

/// Groups of `1 << size` LEDs blend between palette colors along a sine
///
/// The generator is re-seeded with 0 every frame, so every group keeps the
/// same start phase and speed for the lifetime of the effect; only the
/// frame counter moves it forward. With a black primary color each group
/// blends from its own wheel hue instead. With a non-black third color,
/// groups whose start phase is at least 128 blend the third color instead
/// of the primary one.
#[allow(clippy::cast_possible_truncation)]
pub(super) fn twinkle_fox(fx: &mut Fx<'_>) -> u32 {
    let len = fx.len();
    let size = u32::from(fx.settings.options.block_size());
    let (primary, background, secondary) = (fx.color(0), fx.color(1), fx.color(2));
    let call = fx.counters.call;

    let mut seed: u16 = 0;
    let mut first = 0;
    while first < len {
        seed = next_seed(seed);
        let start = fold_seed(seed) & 0xFF;
        seed = next_seed(seed);
        let increment = ((fold_seed(seed) & 0x07) + 1) * 2;

        let phase = u32::from(start).wrapping_add(call.wrapping_mul(u32::from(increment))) & 0xFF;
        let amount = fast_sine8(phase as u8);

        let color = if primary.is_black() {
            color_blend(color_wheel(start as u8), background, amount)
        } else if !secondary.is_black() && start >= FOX_PAIR_THRESHOLD {
            color_blend(secondary, background, amount)
        } else {
            color_blend(primary, background, amount)
        };

        for address in first..(first + size).min(len) {
            fx.set(address, color);
        }
        first += size;
    }

    fx.set_cycle();
    fx.speed() / 32
}
