mod tests {
    use embassy_time::{Duration, Instant};
    use lightbulb_fx::{
        Channels, Color, EffectId, FrameScheduler, IntentChannel, IntentProcessor,
        OutputDriver, StripConfig, StripIntent, StripState,
    };
    use rand::{SeedableRng, rngs::SmallRng, rngs::mock::StepRng};

    type Strip = StripState<128>;

    fn strip(led_count: u16, effect: EffectId, palette: [Color; 3]) -> Strip {
        let config = StripConfig {
            led_count,
            effect: effect.into(),
            palette,
            ..StripConfig::default()
        };
        Strip::with_config(&config).expect("valid strip")
    }

    fn at(ms: u32) -> Instant {
        Instant::from_millis(u64::from(ms))
    }

    #[test]
    fn test_blink_alternates() {
        let mut strip = strip(10, EffectId::Blink, [Color::RED, Color::BLACK, Color::BLACK]);
        let mut rng = StepRng::new(0, 1);

        assert!(strip.tick(at(0), &mut rng));
        assert!(strip.is_frame());
        assert!(!strip.is_cycle());
        assert!(strip.pixels().all(|color| color == Color::RED));
        assert_eq!(strip.due_time(), 910 / 2);

        // Not due yet: nothing changes
        let frame = strip.buffer().to_vec();
        assert!(!strip.tick(at(100), &mut rng));
        assert!(!strip.is_frame());
        assert_eq!(strip.buffer(), frame.as_slice());
        assert_eq!(strip.counters().call, 1);

        assert!(strip.tick(at(455), &mut rng));
        assert!(strip.is_cycle());
        assert!(strip.pixels().all(|color| color == Color::BLACK));
        assert_eq!(strip.due_time(), 910);

        // Flags are cleared by every tick
        assert!(!strip.tick(at(456), &mut rng));
        assert!(!strip.is_cycle());
    }

    #[test]
    fn test_wipe_cycles_once_per_round_trip() {
        let mut strip = strip(5, EffectId::ColorWipe, [Color::RED, Color::BLUE, Color::BLACK]);
        let mut rng = StepRng::new(0, 1);

        let mut cycles = 0;
        for tick in 1..=10 {
            let now = strip.due_time();
            assert!(strip.tick(at(now), &mut rng));
            if strip.is_cycle() {
                cycles += 1;
                assert_eq!(tick, 10);
            }
            if tick == 5 {
                assert!(strip.pixels().all(|color| color == Color::RED));
            }
        }
        assert_eq!(cycles, 1);
        assert_eq!(strip.counters().step, 0);
        assert!(strip.pixels().all(|color| color == Color::BLUE));
    }

    #[test]
    fn test_wipe_reverse_starts_at_far_end() {
        let mut strip = strip(4, EffectId::ColorWipe, [Color::RED, Color::BLUE, Color::BLACK]);
        strip.set_reverse(true);
        let mut rng = StepRng::new(0, 1);

        assert!(strip.tick(at(0), &mut rng));
        let pixels: Vec<Color> = strip.pixels().collect();
        assert_eq!(
            pixels,
            vec![Color::BLACK, Color::BLACK, Color::BLACK, Color::RED]
        );
    }

    #[test]
    fn test_running_shifts_and_injects() {
        let (red, blue) = (Color::RED, Color::BLUE);
        let mut strip = strip(4, EffectId::RunningRedBlue, [Color::BLACK; 3]);
        let mut rng = StepRng::new(0, 1);

        assert!(strip.tick(at(0), &mut rng));
        let pixels: Vec<Color> = strip.pixels().collect();
        assert_eq!(pixels, vec![blue, Color::BLACK, Color::BLACK, Color::BLACK]);

        for _ in 1..4 {
            let now = strip.due_time();
            assert!(strip.tick(at(now), &mut rng));
        }
        // Injected blue, blue, red, red; the newest sits at pixel 0
        let pixels: Vec<Color> = strip.pixels().collect();
        assert_eq!(pixels, vec![red, red, blue, blue]);
        assert!(strip.is_cycle());
    }

    #[test]
    fn test_running_reverse_injects_at_end() {
        let mut strip = strip(4, EffectId::RunningRedBlue, [Color::BLACK; 3]);
        strip.set_reverse(true);
        let mut rng = StepRng::new(0, 1);

        for _ in 0..3 {
            let now = strip.due_time();
            assert!(strip.tick(at(now), &mut rng));
        }
        let pixels: Vec<Color> = strip.pixels().collect();
        assert_eq!(
            pixels,
            vec![Color::BLACK, Color::BLUE, Color::BLUE, Color::RED]
        );
    }

    #[test]
    fn test_disabled_strip_never_renders() {
        let mut strip = Strip::new(4, 3).expect("valid strip");
        let mut rng = StepRng::new(0, 1);
        assert!(!strip.tick(at(0), &mut rng));
        assert!(!strip.tick(at(1_000_000), &mut rng));
        assert_eq!(strip.counters().call, 0);
    }

    #[test]
    fn test_unknown_effect_disables() {
        let mut strip = strip(4, EffectId::Blink, [Color::RED; 3]);
        let mut rng = StepRng::new(0, 1);
        strip.set_effect(200);
        assert_eq!(strip.effect(), 200);

        assert!(!strip.tick(at(0), &mut rng));
        assert_eq!(strip.effect(), 0);
        assert!(strip.buffer().iter().all(|&byte| byte == 0));
        assert_eq!(strip.counters().call, 0);
    }

    #[test]
    fn test_stale_due_time_renders() {
        let mut strip = strip(4, EffectId::Blink, [Color::RED; 3]);
        let mut rng = StepRng::new(0, 1);
        strip.set_speed(70, at(20_000_000));
        assert_eq!(strip.due_time(), 20_000_100);

        assert!(!strip.tick(at(19_999_950), &mut rng));
        assert_eq!(strip.time_until_due(at(19_999_950)), Duration::from_millis(150));
        // Further than the stale limit ahead: treated as overdue
        assert!(strip.tick(at(5_000_000), &mut rng));
    }

    #[test]
    fn test_due_time_wraps() {
        let mut strip = strip(4, EffectId::Blink, [Color::RED; 3]);
        let mut rng = StepRng::new(0, 1);
        let now = u32::MAX - 100;

        assert!(strip.tick(at(now), &mut rng));
        assert_eq!(strip.due_time(), now.wrapping_add(455));
        assert_eq!(strip.due_time(), 354);

        // After the clock wrapped as well
        assert!(!strip.tick(Instant::from_millis(1 << 32), &mut rng));
        assert!(strip.tick(Instant::from_millis((1 << 32) + 354), &mut rng));
    }

    #[test]
    fn test_every_effect_keeps_buffer_length() {
        for &effect in EffectId::ALL {
            for channels in [3, 4] {
                for size in 0..4 {
                    let config = StripConfig {
                        led_count: 7,
                        channels,
                        effect: effect.into(),
                        speed: 90,
                        palette: [Color::RED, Color::ULTRAWHITE, Color::BLUE],
                        ..StripConfig::default()
                    };
                    let mut strip = Strip::with_config(&config).expect("valid strip");
                    strip.set_size(size);
                    strip.set_fade_rate(size * 2);
                    strip.set_reverse(size % 2 == 1);
                    let mut rng = SmallRng::seed_from_u64(u64::from(size));

                    let mut now = 0;
                    for _ in 0..300 {
                        assert!(strip.tick(at(now), &mut rng), "{}", effect.as_str());
                        assert_eq!(strip.buffer().len(), 7 * usize::from(channels));
                        now = strip.due_time();
                    }
                    assert_eq!(strip.counters().call, 300);
                }
            }
        }
    }

    #[test]
    fn test_black_palette_does_not_hang() {
        for effect in [EffectId::Fireworks, EffectId::Rain] {
            let mut strip = strip(8, effect, [Color::BLACK; 3]);
            let mut rng = StepRng::new(0, 1);
            for _ in 0..10 {
                let now = strip.due_time();
                assert!(strip.tick(at(now), &mut rng));
            }
            assert!(strip.pixels().all(|color| color == Color::BLACK));
        }
    }

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        last: Vec<u8>,
        channels: Option<Channels>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, buffer: &[u8], channels: Channels) {
            self.writes += 1;
            self.last = buffer.to_vec();
            self.channels = Some(channels);
        }
    }

    #[test]
    fn test_frame_scheduler_applies_intents_and_writes() {
        let channel: IntentChannel<4> = IntentChannel::new();
        let sender = channel.sender();
        let strip = Strip::new(3, 3).expect("valid strip");
        let mut scheduler = FrameScheduler::new(
            strip,
            RecordingDriver::default(),
            StepRng::new(0, 1),
            IntentProcessor::new(channel.receiver()),
        );

        let result = scheduler.tick(at(0));
        assert!(!result.rendered);
        assert_eq!(result.sleep_duration, Duration::from_millis(100));
        assert_eq!(scheduler.output_mut().writes, 0);

        sender
            .try_send(StripIntent::Colors([Color::RED, Color::BLACK, Color::BLACK], 2))
            .expect("queue has room");
        sender
            .try_send(StripIntent::Effect(EffectId::Blink.into()))
            .expect("queue has room");

        let result = scheduler.tick(at(1000));
        assert!(result.rendered);
        assert_eq!(result.sleep_duration, Duration::from_millis(455));
        assert_eq!(result.next_deadline, at(1455));
        let driver = scheduler.output_mut();
        assert_eq!(driver.writes, 1);
        assert_eq!(driver.last, vec![255, 0, 0, 255, 0, 0, 255, 0, 0]);
        assert_eq!(driver.channels, Some(Channels::Rgb));

        let result = scheduler.tick(at(1100));
        assert!(!result.rendered);
        assert_eq!(result.sleep_duration, Duration::from_millis(355));
        assert_eq!(scheduler.output_mut().writes, 1);
        assert!(channel.is_empty());
    }
}
