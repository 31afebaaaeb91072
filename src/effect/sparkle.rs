//! Randomized effects: dynamic colors, twinkles and sparkles

use super::Fx;
use crate::color::{Color, color_wheel};

/// Number of white flashes per hyper sparkle frame
const HYPER_SPARKLE_FLASHES: usize = 8;

/// Random start index for a block of `size` pixels
#[allow(clippy::cast_possible_truncation)]
fn random_block_start(fx: &mut Fx<'_>, size: u32) -> u32 {
    let limit = fx.len().wrapping_sub(size) as u16;
    u32::from(fx.random.random16_lim(limit))
}

/// Random wheel color
fn random_wheel_color(fx: &mut Fx<'_>) -> Color {
    color_wheel(fx.random.random8())
}

/// Whole strip in one random color, a new distinct one every frame
pub(super) fn random_color(fx: &mut Fx<'_>) -> u32 {
    fx.counters.aux_byte = fx.random.wheel_index(fx.counters.aux_byte);
    fx.fill_all(color_wheel(fx.counters.aux_byte));
    fx.set_cycle();
    fx.speed()
}

/// Paint every block with a random wheel color
fn randomize_blocks(fx: &mut Fx<'_>, size: u32) {
    let mut first = 0;
    while first < fx.len() {
        let color = random_wheel_color(fx);
        fx.fill(color, first, size);
        first += size;
    }
}

/// Random colored blocks, one random block repainted per frame
#[allow(clippy::cast_possible_truncation)]
pub(super) fn single_dynamic(fx: &mut Fx<'_>) -> u32 {
    let size = u32::from(fx.settings.options.block_size());
    if fx.counters.call == 0 {
        randomize_blocks(fx, size);
    }

    let first = u32::from(fx.random.random16_lim((fx.len() / size) as u16)) * size;
    let color = random_wheel_color(fx);
    fx.fill(color, first, size);

    fx.set_cycle();
    fx.speed() / 16
}

/// Random colored blocks, all repainted every frame
pub(super) fn multi_dynamic(fx: &mut Fx<'_>) -> u32 {
    let size = u32::from(fx.settings.options.block_size());
    randomize_blocks(fx, size);
    fx.set_cycle();
    fx.speed() / 4
}

/// Light random pixels over the background, then start over
///
/// `step` counts down the pixels left in the current round; a new round
/// repaints the background and lights `len / 4 + 1 ..= 2 * (len / 4 + 1)`
/// pixels.
fn twinkle_with(fx: &mut Fx<'_>, color: Color, background: Color) -> u32 {
    let len = fx.len();
    if fx.counters.step == 0 {
        fx.fill_all(background);
        let min_leds = len / 4 + 1;
        fx.counters.step = fx.random.uniform(min_leds, min_leds * 2);
        fx.set_cycle();
    }

    let index = fx.random.random16_lim(fx.settings.led_count - 1);
    fx.set(u32::from(index), color);

    fx.counters.step = fx.counters.step.wrapping_sub(1);
    fx.speed() / len
}

pub(super) fn twinkle(fx: &mut Fx<'_>) -> u32 {
    let (color, background) = (fx.color(0), fx.color(1));
    twinkle_with(fx, color, background)
}

pub(super) fn twinkle_random(fx: &mut Fx<'_>) -> u32 {
    let color = random_wheel_color(fx);
    let background = fx.color(1);
    twinkle_with(fx, color, background)
}

/// Random blocks light up and fade toward the background
fn twinkle_fade_with(fx: &mut Fx<'_>, color: Color) -> u32 {
    fx.fade_out();

    if fx.random.random8_lim(3) == 0 {
        let size = u32::from(fx.settings.options.block_size());
        let first = random_block_start(fx, size);
        fx.fill(color, first, size);
        fx.set_cycle();
    }
    fx.speed() / 16
}

pub(super) fn twinkle_fade(fx: &mut Fx<'_>) -> u32 {
    let color = fx.color(0);
    twinkle_fade_with(fx, color)
}

pub(super) fn twinkle_fade_random(fx: &mut Fx<'_>) -> u32 {
    let color = random_wheel_color(fx);
    twinkle_fade_with(fx, color)
}

/// One block of `spark` jumping over a `base` strip
///
/// `aux_word` remembers the last spark position so it can be cleared.
#[allow(clippy::cast_possible_truncation)]
fn sparkle_with(fx: &mut Fx<'_>, base: Color, spark: Color) -> u32 {
    if fx.counters.step == 0 {
        fx.fill_all(base);
    }

    let size = u32::from(fx.settings.options.block_size());
    fx.fill(base, u32::from(fx.counters.aux_word), size);

    let first = random_block_start(fx, size);
    fx.counters.aux_word = first as u16;
    fx.fill(spark, first, size);

    fx.set_cycle();
    fx.speed() / 32
}

pub(super) fn sparkle(fx: &mut Fx<'_>) -> u32 {
    let (base, spark) = (fx.color(1), fx.color(0));
    sparkle_with(fx, base, spark)
}

/// Primary color with random white flashes
pub(super) fn flash_sparkle(fx: &mut Fx<'_>) -> u32 {
    let base = fx.color(0);
    sparkle_with(fx, base, Color::WHITE)
}

/// Like flash sparkle, with more flashes
pub(super) fn hyper_sparkle(fx: &mut Fx<'_>) -> u32 {
    fx.fill_all(fx.color(0));

    let size = u32::from(fx.settings.options.block_size());
    for _ in 0..HYPER_SPARKLE_FLASHES {
        let first = random_block_start(fx, size);
        fx.fill(Color::WHITE, first, size);
    }

    fx.set_cycle();
    fx.speed() / 32
}
