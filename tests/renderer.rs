mod tests {
    use myrtio_segment_composer::color::WHITE;
    use myrtio_segment_composer::cycler::MIN_CYCLE_INTERVAL;
    use myrtio_segment_composer::frame_scheduler::frame_duration;
    use myrtio_segment_composer::preset::{BREATHING, RAINBOW_FLOW};
    use myrtio_segment_composer::{
        Action, Command, CommandQueue, DEFAULT_PALETTE, DefaultPalette, Duration, EffectConfig,
        FrameScheduler, Instant, OutputDriver, PresetCycler, PresetId, Renderer, RendererConfig,
        Rgb,
    };

    type TestRenderer<'a> = Renderer<'a, DefaultPalette, 100, 4, 8>;

    const T0: Instant = Instant::from_millis(0);

    fn renderer<'a>(queue: &'a CommandQueue<8>, config: &RendererConfig) -> TestRenderer<'a> {
        Renderer::new(queue.receiver(), DEFAULT_PALETTE, config, T0)
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: usize,
        last_len: usize,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames += 1;
            self.last_len = colors.len();
        }
    }

    #[test]
    fn test_starts_with_default_segment() {
        let queue = CommandQueue::new();
        let mut renderer = renderer(&queue, &RendererConfig::default());

        let effect = renderer.effect();
        assert_eq!(effect.len(), 1);
        assert_eq!(effect.segments()[0].id(), 1);

        let frame = renderer.render(T0);
        assert_eq!(frame.len(), 100);
        assert_eq!(frame[0], Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_led_count_limited_to_buffer() {
        let queue = CommandQueue::new();
        let config = RendererConfig {
            effect: EffectConfig {
                led_count: 500,
                ..EffectConfig::default()
            },
            ..RendererConfig::default()
        };
        let mut renderer = renderer(&queue, &config);
        assert_eq!(renderer.render(T0).len(), 100);
    }

    #[test]
    fn test_start_preset() {
        let queue = CommandQueue::new();
        let config = RendererConfig {
            start_preset: Some(PresetId::Breathing),
            start_position: 40,
            ..RendererConfig::default()
        };
        let renderer = renderer(&queue, &config);
        let segment = &renderer.effect().segments()[0];
        assert_eq!(segment.colors(), BREATHING.colors);
        assert_eq!(segment.initial_position(), 40);
    }

    #[test]
    fn test_commands_apply_before_frame() {
        let queue = CommandQueue::new();
        let mut renderer = renderer(&queue, &RendererConfig::default());

        let sender = queue.sender();
        sender
            .submit(Command::new(
                1,
                Action::Create {
                    segment: 2,
                    position: 10,
                    range: None,
                },
            ))
            .unwrap();
        sender
            .submit(Command::new(
                1,
                Action::Settings {
                    led_count: 50,
                    fps: 60,
                },
            ))
            .unwrap();

        let frame_len = renderer.render(T0).len();
        assert_eq!(frame_len, 50);
        assert_eq!(renderer.effect().len(), 2);
        assert_eq!(renderer.effect().fps(), 60);
        assert_eq!(renderer.last_report().applied, 2);
        assert_eq!(renderer.frame().len(), 50);
    }

    #[test]
    fn test_cycler_rotates_presets() {
        let queue = CommandQueue::new();
        let mut renderer = renderer(&queue, &RendererConfig::default());
        renderer
            .effect_mut()
            .find_segment_mut(1)
            .unwrap()
            .set_colors([i32::from(WHITE); 4], 10);

        renderer.start_cycling(PresetCycler::all(Duration::from_secs(1)), T0);
        renderer.render(T0);
        assert_eq!(renderer.effect().segments()[0].colors(), RAINBOW_FLOW.colors);

        renderer.render(Instant::from_millis(500));
        assert_eq!(renderer.effect().segments()[0].colors(), RAINBOW_FLOW.colors);

        renderer.render(Instant::from_millis(1_000));
        assert_eq!(renderer.effect().segments()[0].colors(), BREATHING.colors);
        assert_eq!(
            renderer.cycler().and_then(PresetCycler::current),
            Some(PresetId::Breathing)
        );

        renderer.stop_cycling();
        assert!(renderer.cycler().is_none());
    }

    #[test]
    fn test_cycler_controlled_through_renderer() {
        let queue = CommandQueue::new();
        let mut renderer = renderer(&queue, &RendererConfig::default());
        assert!(renderer.cycler_mut().is_none());

        renderer.start_cycling(PresetCycler::all(Duration::from_secs(10)), T0);
        renderer.render(T0);
        assert_eq!(
            renderer.cycler().and_then(PresetCycler::current),
            Some(PresetId::RainbowFlow)
        );

        let cycler = renderer.cycler_mut().unwrap();
        cycler.set_interval(Duration::from_secs(2));
        assert_eq!(cycler.interval(), Duration::from_secs(2));
        assert_eq!(
            cycler.skip_to_next(Instant::from_millis(100)),
            Some(PresetId::Breathing)
        );

        // The skip restarted the interval with the new length
        renderer.render(Instant::from_millis(2_000));
        assert_eq!(
            renderer.cycler().and_then(PresetCycler::current),
            Some(PresetId::Breathing)
        );
        renderer.render(Instant::from_millis(2_100));
        assert_eq!(
            renderer.effect().segments()[0].colors(),
            PresetId::PoliceLights.preset().colors
        );

        renderer.cycler_mut().unwrap().stop();
        renderer.render(Instant::from_millis(60_000));
        assert_eq!(
            renderer.cycler().and_then(PresetCycler::current),
            Some(PresetId::PoliceLights)
        );
        assert!(!renderer.cycler().unwrap().is_running());
    }

    #[test]
    fn test_zero_capacity_renders_black() {
        let queue = CommandQueue::new();
        let mut renderer: Renderer<'_, DefaultPalette, 10, 0, 8> =
            Renderer::new(queue.receiver(), DEFAULT_PALETTE, &RendererConfig::default(), T0);
        assert!(renderer.effect().is_empty());
        assert!(renderer.render(T0).iter().all(|led| *led == Rgb::default()));
    }

    #[test]
    fn test_cycler_interval_and_order() {
        let mut cycler = PresetCycler::new(
            &[PresetId::Fire, PresetId::Cylon],
            Duration::from_millis(100),
        );
        assert_eq!(cycler.interval(), MIN_CYCLE_INTERVAL);
        assert_eq!(cycler.poll(T0), None);
        assert!(!cycler.is_running());

        cycler.start(T0);
        assert_eq!(cycler.poll(T0), Some(PresetId::Fire));
        assert_eq!(cycler.poll(Instant::from_millis(499)), None);
        assert_eq!(cycler.poll(Instant::from_millis(500)), Some(PresetId::Cylon));
        assert_eq!(cycler.poll(Instant::from_millis(1_000)), Some(PresetId::Fire));

        assert_eq!(
            cycler.skip_to_next(Instant::from_millis(1_100)),
            Some(PresetId::Cylon)
        );
        assert_eq!(cycler.poll(Instant::from_millis(1_500)), None);
        assert_eq!(cycler.poll(Instant::from_millis(1_600)), Some(PresetId::Fire));

        cycler.stop();
        assert_eq!(cycler.poll(Instant::from_millis(10_000)), None);
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let queue = CommandQueue::new();
        let renderer = renderer(&queue, &RendererConfig::default());
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default());

        let frame = frame_duration(30);
        assert_eq!(frame, Duration::from_micros(33_333));
        assert_eq!(scheduler.frame_duration(), frame);

        let result = scheduler.tick(Instant::from_micros(0));
        assert_eq!(result.next_deadline, Instant::from_micros(33_333));
        assert_eq!(result.sleep_duration, frame);

        let result = scheduler.tick(Instant::from_micros(33_333));
        assert_eq!(result.next_deadline, Instant::from_micros(66_666));

        // Slightly late frames keep the planned schedule
        let result = scheduler.tick(Instant::from_micros(70_000));
        assert_eq!(result.next_deadline, Instant::from_micros(99_999));
        assert_eq!(result.sleep_duration, Duration::from_micros(29_999));

        let output = scheduler.output();
        assert_eq!(output.frames, 3);
        assert_eq!(output.last_len, 100);
    }

    #[test]
    fn test_scheduler_skips_backlog_after_stall() {
        let queue = CommandQueue::new();
        let renderer = renderer(&queue, &RendererConfig::default());
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default());

        scheduler.tick(Instant::from_micros(0));
        let result = scheduler.tick(Instant::from_micros(1_000_000));
        assert_eq!(result.next_deadline, Instant::from_micros(1_033_333));
        assert_eq!(result.sleep_duration, frame_duration(30));
    }

    #[test]
    fn test_scheduler_follows_frame_rate_changes() {
        let queue = CommandQueue::new();
        let renderer = renderer(&queue, &RendererConfig::default());
        let mut scheduler = FrameScheduler::new(renderer, RecordingDriver::default());

        scheduler
            .renderer_mut()
            .effect_mut()
            .apply_settings(100, 100, 100);
        assert_eq!(scheduler.frame_duration(), Duration::from_micros(10_000));
        assert_eq!(scheduler.renderer().effect().fps(), 100);
    }
}
