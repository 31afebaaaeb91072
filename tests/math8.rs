mod tests {
    use lightbulb_fx::math8::{fast_sine8, triangle8};

    #[test]
    fn test_fast_sine8_quarter_turns() {
        assert_eq!(fast_sine8(0), 128);
        assert_eq!(fast_sine8(64), 255);
        assert_eq!(fast_sine8(128), 128);
        assert_eq!(fast_sine8(192), 1);
    }

    #[test]
    fn test_fast_sine8_shape() {
        assert_eq!(fast_sine8(16), 176);
        assert_eq!(fast_sine8(32), 217);
        assert_eq!(fast_sine8(96), 217);
        assert_eq!(fast_sine8(160), 39);
        assert_eq!(fast_sine8(224), 39);
        assert_eq!(fast_sine8(255), 125);
    }

    #[test]
    fn test_fast_sine8_rises_to_peak() {
        let mut previous = fast_sine8(0);
        for theta in 1..=64u8 {
            let value = fast_sine8(theta);
            assert!(value >= previous, "theta {theta}");
            previous = value;
        }
    }

    #[test]
    fn test_triangle8() {
        assert_eq!(triangle8(0), 0);
        assert_eq!(triangle8(15), 15);
        assert_eq!(triangle8(255), 255);
        assert_eq!(triangle8(256), 255);
        assert_eq!(triangle8(300), 211);
        assert_eq!(triangle8(511), 0);
        assert_eq!(triangle8(512), 0);
    }
}
