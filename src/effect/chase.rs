//! Chase effects: repeating color blocks crawling along the strip

use super::Fx;
use crate::color::{Color, color_wheel};

/// Delay of a single flash in the flash chases (ms)
const FLASH_MS: u32 = 30;

/// Three repeating blocks of `1 << size` pixels, shifted one pixel per frame
fn tricolor(fx: &mut Fx<'_>, first: Color, second: Color, third: Color) -> u32 {
    let len = fx.len();
    let size = u32::from(fx.settings.options.block_size());
    let period = size * 3;
    let reverse = fx.is_reverse();

    let mut index = fx.counters.step % period;
    for i in 0..len {
        index %= period;
        let color = if index < size {
            first
        } else if index < size * 2 {
            second
        } else {
            third
        };
        if reverse {
            fx.set(i, color);
        } else {
            fx.set(len - i - 1, color);
        }
        index += 1;
    }

    fx.counters.step = fx.counters.step.wrapping_add(1);
    if fx.counters.step % len == 0 {
        fx.set_cycle();
    }
    fx.speed() / 16
}

pub(super) fn tricolor_chase(fx: &mut Fx<'_>) -> u32 {
    let (first, second, third) = (fx.color(0), fx.color(1), fx.color(2));
    tricolor(fx, first, second, third)
}

/// Red, white and black pixels running
pub(super) fn circus_combustus(fx: &mut Fx<'_>) -> u32 {
    tricolor(fx, Color::RED, Color::WHITE, Color::BLACK)
}

/// Theatre-style crawling lights
pub(super) fn theater_chase(fx: &mut Fx<'_>) -> u32 {
    let (first, background) = (fx.color(0), fx.color(1));
    tricolor(fx, first, background, background)
}

pub(super) fn theater_chase_rainbow(fx: &mut Fx<'_>) -> u32 {
    fx.counters.aux_byte = fx.counters.aux_byte.wrapping_add(1);
    let (first, background) = (color_wheel(fx.counters.aux_byte), fx.color(1));
    tricolor(fx, first, background, background)
}

/// A block of `first` followed by blocks of `second` and `third`,
/// advancing one pixel per frame
fn chase(fx: &mut Fx<'_>, first: Color, second: Color, third: Color) -> u32 {
    let len = fx.len();
    let size = u32::from(fx.settings.options.block_size());
    let step = fx.counters.step;

    for i in 0..size {
        let a = (step + i) % len;
        let b = (a + size) % len;
        let c = (b + size) % len;
        if fx.is_reverse() {
            fx.set(len - 1 - a, first);
            fx.set(len - 1 - b, second);
            fx.set(len - 1 - c, third);
        } else {
            fx.set(a, first);
            fx.set(b, second);
            fx.set(c, third);
        }
    }

    if step + size * 3 == len {
        fx.set_cycle();
    }
    fx.counters.step = (step + 1) % len;
    fx.speed() / len
}

pub(super) fn bicolor_chase(fx: &mut Fx<'_>) -> u32 {
    let (first, second, third) = (fx.color(0), fx.color(1), fx.color(2));
    chase(fx, first, second, third)
}

/// White running on the primary color
pub(super) fn chase_color(fx: &mut Fx<'_>) -> u32 {
    let first = fx.color(0);
    chase(fx, first, Color::WHITE, Color::WHITE)
}

/// Black running on the primary color
pub(super) fn chase_blackout(fx: &mut Fx<'_>) -> u32 {
    let first = fx.color(0);
    chase(fx, first, Color::BLACK, Color::BLACK)
}

/// Primary color running on white
pub(super) fn chase_white(fx: &mut Fx<'_>) -> u32 {
    let color = fx.color(0);
    chase(fx, Color::WHITE, color, color)
}

/// White running, followed by a new random color every lap
pub(super) fn chase_random(fx: &mut Fx<'_>) -> u32 {
    if fx.counters.step == 0 {
        fx.counters.aux_byte = fx.random.wheel_index(fx.counters.aux_byte);
    }
    let first = color_wheel(fx.counters.aux_byte);
    chase(fx, first, Color::WHITE, Color::WHITE)
}

/// Rainbow running on white
#[allow(clippy::cast_possible_truncation)]
pub(super) fn chase_rainbow_white(fx: &mut Fx<'_>) -> u32 {
    let len = fx.len();
    let n = u32::from(fx.counters.step as u16);
    let m = (fx.counters.step + 1) % len;
    let phase = fx.counters.call & 0xFF;
    let second = color_wheel(((n * 256 / len + phase) & 0xFF) as u8);
    let third = color_wheel(((m * 256 / len + phase) & 0xFF) as u8);
    chase(fx, Color::WHITE, second, third)
}

/// Wheel color for the rainbow chases, one hue step per pixel and frame
#[allow(clippy::cast_possible_truncation)]
fn rainbow_position_color(fx: &Fx<'_>) -> Color {
    let separation = u32::from((256 / fx.len()) as u8);
    let phase = fx.counters.call & 0xFF;
    color_wheel((fx.counters.step.wrapping_mul(separation).wrapping_add(phase) & 0xFF) as u8)
}

/// White running on rainbow
pub(super) fn chase_rainbow(fx: &mut Fx<'_>) -> u32 {
    let first = rainbow_position_color(fx);
    chase(fx, first, Color::WHITE, Color::WHITE)
}

/// Black running on rainbow
pub(super) fn chase_blackout_rainbow(fx: &mut Fx<'_>) -> u32 {
    let first = rainbow_position_color(fx);
    chase(fx, first, Color::BLACK, Color::BLACK)
}

/// Flash a pixel pair `2 << size` times, then move it one pixel on
///
/// Every completed lap picks a new random wheel index into `aux_byte`.
fn flash_chase(fx: &mut Fx<'_>, base: Color, flash: Color) -> u32 {
    let len = fx.len();
    let flash_count = u32::from(fx.settings.options.block_size());
    let flash_step = fx.counters.call % (flash_count * 2 + 1);

    if flash_step < flash_count * 2 {
        let color = if flash_step % 2 == 0 { flash } else { base };
        let n = fx.counters.step;
        let m = (fx.counters.step + 1) % len;
        if fx.is_reverse() {
            fx.set((len - 1).wrapping_sub(n), color);
            fx.set(len - 1 - m, color);
        } else {
            fx.set(n, color);
            fx.set(m, color);
        }
        FLASH_MS
    } else {
        fx.counters.step = (fx.counters.step + 1) % len;
        if fx.counters.step == 0 {
            fx.counters.aux_byte = fx.random.wheel_index(fx.counters.aux_byte);
            fx.set_cycle();
        }
        fx.speed() / len
    }
}

/// White flashes running on the primary color
pub(super) fn chase_flash(fx: &mut Fx<'_>) -> u32 {
    let base = fx.color(0);
    flash_chase(fx, base, Color::WHITE)
}

/// White flashes running, followed by a random color
pub(super) fn chase_flash_random(fx: &mut Fx<'_>) -> u32 {
    let base = color_wheel(fx.counters.aux_byte);
    flash_chase(fx, base, Color::WHITE)
}
