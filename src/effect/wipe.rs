//! Cursor effects: wipes, scanners and the comet
//!
//! A cursor walks the strip one pixel per frame. Wipes run there and back
//! over `2 * len` steps, scanners bounce a block between both ends.

use super::Fx;
use crate::color::{Color, color_wheel};

/// Light the strip one pixel at a time with `first`, then with `second`
///
/// `mirrored` runs the second pass from the opposite end.
fn wipe(fx: &mut Fx<'_>, first: Color, second: Color, mirrored: bool) -> u32 {
    let len = fx.len();
    let step = fx.counters.step;

    if step < len {
        if fx.is_reverse() {
            fx.set(len - 1 - step, first);
        } else {
            fx.set(step, first);
        }
    } else {
        let offset = step - len;
        if fx.is_reverse() != mirrored {
            fx.set((len - 1).wrapping_sub(offset), second);
        } else {
            fx.set(offset, second);
        }
    }

    fx.counters.step = (step + 1) % (len * 2);
    if fx.counters.step == 0 {
        fx.set_cycle();
    }
    fx.speed() / (len * 2)
}

pub(super) fn color_wipe(fx: &mut Fx<'_>) -> u32 {
    let (first, second) = (fx.color(0), fx.color(1));
    wipe(fx, first, second, false)
}

pub(super) fn color_wipe_inverse(fx: &mut Fx<'_>) -> u32 {
    let (first, second) = (fx.color(1), fx.color(0));
    wipe(fx, first, second, false)
}

pub(super) fn color_wipe_reverse(fx: &mut Fx<'_>) -> u32 {
    let (first, second) = (fx.color(0), fx.color(1));
    wipe(fx, first, second, true)
}

pub(super) fn color_wipe_reverse_inverse(fx: &mut Fx<'_>) -> u32 {
    let (first, second) = (fx.color(1), fx.color(0));
    wipe(fx, first, second, true)
}

/// Wheel color that changes at the start of every pass
fn next_pass_color(fx: &mut Fx<'_>) -> Color {
    if fx.counters.step % fx.len() == 0 {
        fx.counters.aux_byte = fx.random.wheel_index(fx.counters.aux_byte);
    }
    color_wheel(fx.counters.aux_byte)
}

pub(super) fn color_wipe_random(fx: &mut Fx<'_>) -> u32 {
    let color = next_pass_color(fx);
    wipe(fx, color, color, false) * 2
}

/// Random colors introduced alternately from both ends
pub(super) fn color_sweep_random(fx: &mut Fx<'_>) -> u32 {
    let color = next_pass_color(fx);
    wipe(fx, color, color, true) * 2
}

/// Bounce a block of `1 << size` pixels between both ends
///
/// `aux_byte` holds the direction (0 = outward). Blocks as large as the
/// strip have nowhere to move and render nothing.
fn bounce(fx: &mut Fx<'_>, dual: bool) -> u32 {
    let len = fx.len();
    let delay = fx.speed() / (len * 2);
    let size = u32::from(fx.settings.options.block_size());
    if size >= len {
        return delay;
    }

    let (foreground, background) = (fx.color(0), fx.color(1));
    fx.fill_all(background);

    let step = fx.counters.step;
    let reverse = fx.is_reverse();
    for i in 0..size {
        if reverse || dual {
            fx.set((len - 1).wrapping_sub(step).wrapping_sub(i), foreground);
        }
        if !reverse || dual {
            fx.set(step.wrapping_add(i), foreground);
        }
    }

    fx.counters.step = if fx.counters.aux_byte == 0 {
        step.wrapping_add(1)
    } else {
        step.wrapping_sub(1)
    };
    if fx.counters.step == 0 {
        fx.counters.aux_byte = 0;
        fx.set_cycle();
    }
    if fx.counters.step >= len - size {
        fx.counters.aux_byte = 1;
    }
    delay
}

pub(super) fn scan(fx: &mut Fx<'_>) -> u32 {
    bounce(fx, false)
}

pub(super) fn dual_scan(fx: &mut Fx<'_>) -> u32 {
    bounce(fx, true)
}

/// K.I.T.T. scanner with a fading tail
pub(super) fn larson_scanner(fx: &mut Fx<'_>) -> u32 {
    fx.fade_out();

    let len = fx.len();
    let step = fx.counters.step;
    let color = fx.color(0);
    let index = if step < len {
        step
    } else {
        (len * 2).wrapping_sub(step).wrapping_sub(2)
    };
    if fx.is_reverse() {
        fx.set((len - 1).wrapping_sub(index), color);
    } else {
        fx.set(index, color);
    }

    fx.counters.step = step + 1;
    if fx.counters.step >= len * 2 - 2 {
        fx.counters.step = 0;
        fx.set_cycle();
    }
    fx.speed() / (len * 2)
}

/// Comet fired from one end, tail fades toward the background
pub(super) fn comet(fx: &mut Fx<'_>) -> u32 {
    fx.fade_out();

    let len = fx.len();
    let step = fx.counters.step;
    let color = fx.color(0);
    if fx.is_reverse() {
        fx.set((len - 1).wrapping_sub(step), color);
    } else {
        fx.set(step, color);
    }

    fx.counters.step = (step + 1) % len;
    if fx.counters.step == 0 {
        fx.set_cycle();
    }
    fx.speed() / len
}
