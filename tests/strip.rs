mod tests {
    use embassy_time::Instant;
    use lightbulb_fx::strip::{DEFAULT_SPEED_PERCENT, speed_from_percent};
    use lightbulb_fx::{Channels, Color, EffectId, FxOptions, StripConfig, StripError, StripState};
    use rand::rngs::mock::StepRng;

    type Strip = StripState<64>;

    fn strip_with_effect(led_count: u16, effect: EffectId) -> Strip {
        let config = StripConfig {
            led_count,
            effect: effect.into(),
            palette: [Color::RED, Color::BLUE, Color::GREEN],
            ..StripConfig::default()
        };
        Strip::with_config(&config).expect("valid strip")
    }

    #[test]
    fn test_new_strip() {
        let strip = Strip::new(10, 4).expect("valid strip");
        assert_eq!(strip.led_count(), 10);
        assert_eq!(strip.channels(), Channels::Rgbw);
        assert_eq!(strip.buffer().len(), 40);
        assert!(strip.buffer().iter().all(|&byte| byte == 0));
        assert_eq!(strip.effect(), 0);
        assert_eq!(strip.effect_id(), None);
        assert_eq!(strip.speed(), speed_from_percent(DEFAULT_SPEED_PERCENT));
        assert_eq!(strip.palette(), [Color::BLACK; 3]);
    }

    #[test]
    fn test_new_strip_errors() {
        assert_eq!(Strip::new(0, 3).unwrap_err(), StripError::NoLeds);
        assert_eq!(
            Strip::new(5, 5).unwrap_err(),
            StripError::UnsupportedChannels(5)
        );
        assert_eq!(
            Strip::new(30, 3).unwrap_err(),
            StripError::CapacityExceeded {
                required: 90,
                capacity: 64
            }
        );
    }

    #[test]
    fn test_speed_from_percent() {
        assert_eq!(speed_from_percent(0), 3010);
        assert_eq!(speed_from_percent(70), 910);
        assert_eq!(speed_from_percent(100), 10);
        assert_eq!(speed_from_percent(150), 10);
    }

    #[test]
    fn test_options_bits() {
        let options = FxOptions::from_bits(0b1011_1010);
        assert_eq!(
            options,
            FxOptions {
                reverse: true,
                fade_rate: 3,
                gamma: true,
                size: 1,
            }
        );
        assert_eq!(options.bits(), 0b1011_1010);
        assert_eq!(options.block_size(), 2);
        assert_eq!(FxOptions::from_bits(0b0000_0001).bits(), 0);
        assert_eq!(FxOptions::from_bits(0b0000_0110).block_size(), 8);
    }

    #[test]
    fn test_setters_clamp_ranges() {
        let mut strip = Strip::new(4, 3).expect("valid strip");
        strip.set_size(7);
        strip.set_fade_rate(9);
        strip.set_reverse(true);
        strip.set_gamma(true);
        assert_eq!(
            strip.options(),
            FxOptions {
                reverse: true,
                fade_rate: 1,
                gamma: true,
                size: 3,
            }
        );

        strip.set_options(FxOptions {
            reverse: false,
            fade_rate: 12,
            gamma: false,
            size: 6,
        });
        assert_eq!(strip.options().fade_rate, 4);
        assert_eq!(strip.options().size, 2);
    }

    #[test]
    fn test_set_speed_reschedules() {
        let mut strip = Strip::new(4, 3).expect("valid strip");
        strip.set_speed(50, Instant::from_millis(1000));
        assert_eq!(strip.speed(), 1510);
        assert_eq!(strip.due_time(), 1100);
    }

    #[test]
    fn test_set_colors_replaces_leading_slots() {
        let mut strip = Strip::new(4, 3).expect("valid strip");
        strip.set_colors(&[Color::WHITE, Color::GREEN, Color::BLUE]);
        strip.set_colors(&[Color::RED]);
        assert_eq!(strip.palette(), [Color::RED, Color::GREEN, Color::BLUE]);
    }

    #[test]
    fn test_set_effect_resets_counters() {
        let mut strip = strip_with_effect(5, EffectId::ColorWipe);
        let mut rng = StepRng::new(0, 1);
        for ms in 0..3 {
            assert!(strip.tick(Instant::from_millis(ms * 1000), &mut rng));
        }
        assert_eq!(strip.counters().step, 3);
        assert_eq!(strip.counters().call, 3);
        let frame: Vec<u8> = strip.buffer().to_vec();

        // Same id keeps the animation running
        strip.set_effect(EffectId::ColorWipe.into());
        assert_eq!(strip.counters().step, 3);

        strip.set_effect(EffectId::Comet.into());
        assert_eq!(strip.effect_id(), Some(EffectId::Comet));
        assert_eq!(strip.last_effect(), u8::from(EffectId::ColorWipe));
        assert_eq!(strip.counters(), Default::default());
        assert_eq!(strip.buffer(), frame.as_slice());
    }

    #[test]
    fn test_pixels_iterator() {
        let mut strip = strip_with_effect(3, EffectId::Blink);
        let mut rng = StepRng::new(0, 1);
        assert!(strip.tick(Instant::from_millis(0), &mut rng));
        let pixels: Vec<Color> = strip.pixels().collect();
        assert_eq!(pixels, vec![Color::RED; 3]);
    }
}
