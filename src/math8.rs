/// 8-bit sine approximation
///
/// One full period spans the whole `u8` range: `fast_sine8(0) == 128`,
/// peaks at 64, crosses 128 again at 128 and bottoms out at 192.
/// Uses a parabola with a second-order correction instead of a lookup
/// table, accurate to about one step.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn fast_sine8(theta: u8) -> u8 {
    // Half-turn offset keeps the parabola in -128..=127
    let s = theta as i32 - 128;
    // Q12, +-4096 at quarter turns
    let y = s * (128 - s.abs());
    let y = y + 225 * (y * y.abs() / 4096 - y) / 1000;
    let value = 128 - y * 127 / 4096;

    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

/// Triangle wave over a 0..=511 counter, mirrored at 255
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn triangle8(counter: u32) -> u8 {
    let counter = counter & 0x1FF;
    if counter > 255 {
        (511 - counter) as u8
    } else {
        counter as u8
    }
}
