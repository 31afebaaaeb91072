//! Heat effects: fireworks, flickering fire and rain

use super::Fx;
use crate::color::{Color, color_wheel};

/// Palette slots fireworks draw their burst color from
const FIREWORKS_SLOTS: usize = 2;

/// Strip length per simultaneous burst
const LEDS_PER_BURST: u32 = 10;

/// Sparks of `color` spreading and fading out
///
/// Every frame fades the strip, diffuses the heat to the neighbours and
/// lights `len / 10` (at least one) random blocks of `2 << size` pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fireworks_with(fx: &mut Fx<'_>, color: Color) -> u32 {
    fx.fade_out();
    fx.pixels.diffuse();

    let len = fx.len();
    let size = 2u32 << fx.size_option();
    let bursts = (len / LEDS_PER_BURST).max(1);
    let limit = (i64::from(len) - i64::from(size) + 1) as u16;
    for _ in 0..bursts {
        let first = u32::from(fx.random.random16_lim(limit));
        fx.fill(color, first, size);
        fx.set_cycle();
    }
    fx.speed() / 16
}

/// Random non-black color from the first `slots` palette entries, black when
/// they are all black
fn random_palette_color(
    fx: &mut Fx<'_>,
    draw: impl Fn(&mut Fx<'_>) -> usize,
    slots: usize,
) -> Color {
    if fx.settings.palette[..slots].iter().all(|color| color.is_black()) {
        return Color::BLACK;
    }
    loop {
        let slot = draw(fx);
        let color = fx.settings.palette.get(slot).copied().unwrap_or(Color::BLACK);
        if !color.is_black() {
            return color;
        }
    }
}

pub(super) fn fireworks(fx: &mut Fx<'_>) -> u32 {
    let color =
        random_palette_color(fx, |fx| usize::from(fx.random.random8() & 1), FIREWORKS_SLOTS);
    fireworks_with(fx, color)
}

pub(super) fn fireworks_random(fx: &mut Fx<'_>) -> u32 {
    let color = color_wheel(fx.random.random8());
    fireworks_with(fx, color)
}

/// Every pixel flickers below the primary color
///
/// The flicker is bounded by the brightest channel of the primary color
/// divided by `divisor`; a smaller divisor burns more intensely.
fn fire_flicker_with(fx: &mut Fx<'_>, divisor: u8) -> u32 {
    let color = fx.color(0);
    let (r, g, b, w) = (color.r(), color.g(), color.b(), color.w());
    let lum = r.max(g).max(b).max(w) / divisor;

    for index in 0..fx.pixels.len() {
        let flicker = fx.random.random8_lim(lum);
        fx.pixels.set_rgbw(
            index,
            r.saturating_sub(flicker),
            g.saturating_sub(flicker),
            b.saturating_sub(flicker),
            w.saturating_sub(flicker),
        );
    }

    fx.set_cycle();
    fx.speed() / fx.len()
}

pub(super) fn fire_flicker(fx: &mut Fx<'_>) -> u32 {
    fire_flicker_with(fx, 3)
}

pub(super) fn fire_flicker_soft(fx: &mut Fx<'_>) -> u32 {
    fire_flicker_with(fx, 6)
}

pub(super) fn fire_flicker_intense(fx: &mut Fx<'_>) -> u32 {
    fire_flicker_with(fx, 1)
}

/// Fireworks drops running two pixels per frame
///
/// The drop color is drawn from the whole palette; draws past its end count
/// as black and are repeated.
pub(super) fn rain(fx: &mut Fx<'_>) -> u32 {
    let slots = fx.settings.palette.len();
    let color = random_palette_color(fx, |fx| usize::from(fx.random.random8_lim(2)), slots);
    let delay = fireworks_with(fx, color);
    fx.shift(2, usize::from(fx.settings.led_count).saturating_sub(3));
    delay
}
