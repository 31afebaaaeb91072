mod tests {
    use lightbulb_fx::color::{Color, Rgb, Rgbw, color_blend, color_wheel};
    use smart_leds::White;

    #[test]
    fn test_color_wheel_primaries() {
        assert_eq!(color_wheel(0), Color::RED);
        assert_eq!(color_wheel(85), Color::GREEN);
        assert_eq!(color_wheel(170), Color::BLUE);
        assert_eq!(color_wheel(255), Color::RED);
    }

    #[test]
    fn test_color_wheel_segments() {
        assert_eq!(color_wheel(128), Color::new(0, 126, 129));
        assert_eq!(color_wheel(42), Color::new(129, 126, 0));
        assert_eq!(color_wheel(200), Color::new(90, 0, 165));
    }

    #[test]
    fn test_color_wheel_two_channels_at_most() {
        for pos in 0..=255u8 {
            let color = color_wheel(pos);
            let active = [color.r(), color.g(), color.b()]
                .iter()
                .filter(|&&c| c != 0)
                .count();
            assert!(active <= 2, "pos {pos}: {color:?}");
            assert_eq!(color.w(), 0);
            assert_eq!(
                u16::from(color.r()) + u16::from(color.g()) + u16::from(color.b()),
                255
            );
        }
    }

    #[test]
    fn test_color_blend() {
        assert_eq!(color_blend(Color::RED, Color::BLUE, 0), Color::RED);
        assert_eq!(color_blend(Color::RED, Color::BLUE, 255), Color::BLUE);
        assert_eq!(
            color_blend(Color::RED, Color::BLUE, 128),
            Color::new(128, 0, 127)
        );
        assert_eq!(
            color_blend(Color::BLACK, Color::WHITE, 128),
            Color::new(127, 127, 127)
        );
        assert_eq!(color_blend(Color::WHITE, Color::BLACK, 255), Color::BLACK);
        assert_eq!(color_blend(Color::WHITE, Color::BLACK, 0), Color::WHITE);
    }

    #[test]
    fn test_color_blend_white_channel() {
        let from = Color::with_white(0, 0, 0, 0);
        let to = Color::with_white(0, 0, 0, 200);
        assert_eq!(color_blend(from, to, 64), Color::with_white(0, 0, 0, 50));
    }

    #[test]
    fn test_color_channels() {
        let color = Color::from_wrgb(0x11_22_33_44);
        assert_eq!(color.w(), 0x11);
        assert_eq!(color.r(), 0x22);
        assert_eq!(color.g(), 0x33);
        assert_eq!(color.b(), 0x44);
        assert_eq!(Color::with_white(0x22, 0x33, 0x44, 0x11), color);
        assert_eq!(u32::from(color), 0x11_22_33_44);
    }

    #[test]
    fn test_dim_and_dark() {
        assert_eq!(Color::WHITE.dim(), Color::new(63, 63, 63));
        assert_eq!(Color::ULTRAWHITE.dark(), Color::with_white(15, 15, 15, 15));
        assert!(Color::BLACK.dim().is_black());
    }

    #[test]
    fn test_smart_leds_conversions() {
        let rgb = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(Color::from(rgb), Color::from_wrgb(0x00_01_02_03));
        assert_eq!(Rgb::from(Color::ULTRAWHITE), Rgb { r: 255, g: 255, b: 255 });

        let rgbw = Rgbw::from(Color::with_white(1, 2, 3, 4));
        assert_eq!(
            rgbw,
            Rgbw {
                r: 1,
                g: 2,
                b: 3,
                a: White(4)
            }
        );
    }
}
