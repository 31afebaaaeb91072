//! Running effects: the strip scrolls one pixel per frame and a new color
//! is injected at the start (or at the end when reversed).

use super::Fx;
use crate::{
    color::{Color, color_blend, color_wheel},
    math8::fast_sine8,
};

/// Alternate blocks of `2 << size` pixels of `first` and `second`
fn running(fx: &mut Fx<'_>, first: Color, second: Color) -> u32 {
    let len = fx.len();
    let size = 2u32 << fx.size_option();
    let color = if fx.counters.step & size != 0 {
        first
    } else {
        second
    };

    fx.shift(1, usize::from(fx.settings.led_count) - 1);
    if fx.is_reverse() {
        fx.set(len - 1, color);
    } else {
        fx.set(0, color);
    }

    fx.counters.step = fx.counters.step.wrapping_add(1);
    if fx.counters.step % len == 0 {
        fx.set_cycle();
    }
    fx.speed() / 16
}

pub(super) fn running_color(fx: &mut Fx<'_>) -> u32 {
    let (first, second) = (fx.color(0), fx.color(1));
    running(fx, first, second)
}

pub(super) fn running_red_blue(fx: &mut Fx<'_>) -> u32 {
    running(fx, Color::RED, Color::BLUE)
}

pub(super) fn merry_christmas(fx: &mut Fx<'_>) -> u32 {
    running(fx, Color::RED, Color::GREEN)
}

pub(super) fn halloween(fx: &mut Fx<'_>) -> u32 {
    running(fx, Color::PURPLE, Color::ORANGE)
}

/// Blocks of random wheel colors running
pub(super) fn running_random(fx: &mut Fx<'_>) -> u32 {
    let size = 2u32 << fx.size_option();
    if fx.counters.step % size == 0 {
        fx.counters.aux_byte = fx.random.wheel_index(fx.counters.aux_byte);
    }
    let color = color_wheel(fx.counters.aux_byte);
    running(fx, color, color)
}

/// Sine-shaped waves of the primary color over the background
#[allow(clippy::cast_possible_truncation)]
pub(super) fn running_lights(fx: &mut Fx<'_>) -> u32 {
    let len = fx.len();
    let size = u32::from(fx.settings.options.block_size());
    let sine_step = u32::from(((256 / len) * size) as u8).max(1);
    let (foreground, background) = (fx.color(0), fx.color(1));
    let reverse = fx.is_reverse();

    for i in 0..len {
        let theta = (i.wrapping_add(fx.counters.step).wrapping_mul(sine_step)) as u8;
        let color = color_blend(foreground, background, fast_sine8(theta));
        if reverse {
            fx.set(i, color);
        } else {
            fx.set(len - i - 1, color);
        }
    }

    fx.counters.step = (fx.counters.step + 1) % 256;
    if fx.counters.step == 0 {
        fx.set_cycle();
    }
    fx.speed() / len
}
