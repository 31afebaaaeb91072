//! Whole-strip effects: blink, strobe, breath and fade

use super::Fx;
use crate::{
    color::{Color, color_blend, color_wheel},
    math8::triangle8,
};

/// On-time of a strobe flash (ms)
const STROBE_ON_MS: u32 = 20;
const MULTI_STROBE_OFF_MS: u32 = 50;

/// Breath counter rests at this luminance between breaths
const BREATH_FLOOR: u32 = 15;
const BREATH_PAUSE_MS: u32 = 970;

/// Toggle the strip between `on` and `off`
///
/// Odd frames show `off` and close the cycle. Reverse swaps the colors.
fn blink_colors(fx: &mut Fx<'_>, on: Color, off: Color, strobe: bool) -> u32 {
    let (on, off) = if fx.is_reverse() { (off, on) } else { (on, off) };
    let speed = fx.speed();

    if fx.counters.call & 1 == 1 {
        fx.fill_all(off);
        fx.set_cycle();
        if strobe {
            speed.saturating_sub(STROBE_ON_MS)
        } else {
            speed / 2
        }
    } else {
        fx.fill_all(on);
        if strobe { STROBE_ON_MS } else { speed / 2 }
    }
}

/// Wheel color that advances every frame
#[allow(clippy::cast_possible_truncation)]
fn rainbow_on_color(fx: &Fx<'_>) -> Color {
    color_wheel((fx.counters.call << 2) as u8)
}

pub(super) fn blink(fx: &mut Fx<'_>) -> u32 {
    let (on, off) = (fx.color(0), fx.color(1));
    blink_colors(fx, on, off, false)
}

pub(super) fn blink_rainbow(fx: &mut Fx<'_>) -> u32 {
    let (on, off) = (rainbow_on_color(fx), fx.color(1));
    blink_colors(fx, on, off, false)
}

pub(super) fn strobe(fx: &mut Fx<'_>) -> u32 {
    let (on, off) = (fx.color(0), fx.color(1));
    blink_colors(fx, on, off, true)
}

pub(super) fn strobe_rainbow(fx: &mut Fx<'_>) -> u32 {
    let (on, off) = (rainbow_on_color(fx), fx.color(1));
    blink_colors(fx, on, off, true)
}

/// Bursts of strobe flashes separated by a pause
///
/// The flash count grows with the delay base, the pause shrinks with its
/// last digit.
pub(super) fn multi_strobe(fx: &mut Fx<'_>) -> u32 {
    fx.fill_all(fx.color(1));

    let speed = fx.speed();
    let mut delay = 200 + (9 - speed % 10) * 100;
    let count = 2 * (speed / 100 + 1);
    if fx.counters.step < count {
        if fx.counters.step & 1 == 0 {
            fx.fill_all(fx.color(0));
            delay = STROBE_ON_MS;
        } else {
            delay = MULTI_STROBE_OFF_MS;
        }
    }

    fx.counters.step = (fx.counters.step + 1) % (count + 1);
    if fx.counters.step == 0 {
        fx.set_cycle();
    }
    delay
}

pub(super) fn breath(fx: &mut Fx<'_>) -> u32 {
    let lum = u32::from(triangle8(fx.counters.step));
    let delay = match lum {
        BREATH_FLOOR => BREATH_PAUSE_MS,
        0..=25 => 38,
        26..=50 => 36,
        51..=75 => 28,
        76..=100 => 20,
        101..=125 => 14,
        126..=150 => 11,
        _ => 10,
    };

    #[allow(clippy::cast_possible_truncation)]
    let color = color_blend(fx.color(1), fx.color(0), lum as u8);
    fx.fill_all(color);

    fx.counters.step += 2;
    if fx.counters.step > 512 - BREATH_FLOOR {
        fx.counters.step = BREATH_FLOOR;
        fx.set_cycle();
    }
    delay
}

pub(super) fn fade(fx: &mut Fx<'_>) -> u32 {
    let lum = triangle8(fx.counters.step);
    let color = color_blend(fx.color(1), fx.color(0), lum);
    fx.fill_all(color);

    fx.counters.step += 4;
    if fx.counters.step > 511 {
        fx.counters.step = 0;
        fx.set_cycle();
    }
    fx.speed() / 128
}
