use super::Color;

/// Map a wheel index onto the synthetic hue circle
///
/// The circle is made of three linear 85-step segments
/// (red -> blue -> green -> red), so every position is a fully
/// saturated color with at most two active channels.
pub const fn color_wheel(pos: u8) -> Color {
    let pos = 255 - pos;
    if pos < 85 {
        Color::new(255 - pos * 3, 0, pos * 3)
    } else if pos < 170 {
        let pos = pos - 85;
        Color::new(0, pos * 3, 255 - pos * 3)
    } else {
        let pos = pos - 170;
        Color::new(pos * 3, 255 - pos * 3, 0)
    }
}

/// Blend two packed colors channel by channel
///
/// Every channel (white included) becomes `a + amount * (b - a) / 256`
/// with the division truncating toward zero. `amount == 0` yields `a` and
/// `amount == 255` yields `b` exactly.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn color_blend(a: Color, b: Color, amount: u8) -> Color {
    match amount {
        0 => a,
        255 => b,
        _ => {
            let src1 = a.wrgb().to_le_bytes();
            let src2 = b.wrgb().to_le_bytes();
            let mut blended = [0u8; 4];
            for ((dest, &x), &y) in blended.iter_mut().zip(&src1).zip(&src2) {
                let delta = i32::from(y) - i32::from(x);
                *dest = (i32::from(amount) * delta / 256 + i32::from(x)) as u8;
            }
            Color::from_wrgb(u32::from_le_bytes(blended))
        }
    }
}
