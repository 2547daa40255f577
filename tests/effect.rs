mod tests {
    use myrtio_segment_composer::{
        DEFAULT_PALETTE, Effect, EffectConfig, EffectError, Instant, MoveRange, Rgb, Segment,
    };

    const T0: Instant = Instant::from_millis(0);

    fn effect<const N: usize>() -> Effect<N> {
        Effect::new(&EffectConfig::default())
    }

    fn segment(id: u16) -> Segment {
        Segment::new(id, 0, MoveRange::new(0, 99), T0)
    }

    fn ids<const N: usize>(effect: &Effect<N>) -> Vec<u16> {
        effect.segments().iter().map(Segment::id).collect()
    }

    #[test]
    fn test_add_beyond_capacity() {
        let mut effect = effect::<3>();
        for id in 1..=3 {
            effect.add_segment(segment(id)).unwrap();
        }
        assert_eq!(
            effect.add_segment(segment(4)),
            Err(EffectError::CapacityExceeded)
        );
        assert_eq!(ids(&effect), vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut effect = effect::<4>();
        effect.add_segment(segment(7)).unwrap();
        assert_eq!(
            effect.add_segment(segment(7)),
            Err(EffectError::DuplicateId(7))
        );
        assert_eq!(effect.len(), 1);
    }

    #[test]
    fn test_remove_missing_segment() {
        let mut effect = effect::<4>();
        effect.add_segment(segment(1)).unwrap();
        effect.add_segment(segment(2)).unwrap();
        assert_eq!(effect.remove_segment(9), Err(EffectError::NotFound(9)));
        assert_eq!(ids(&effect), vec![1, 2]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut effect = effect::<4>();
        for id in [1, 2, 3, 4] {
            effect.add_segment(segment(id)).unwrap();
        }
        let removed = effect.remove_segment(2).unwrap();
        assert_eq!(removed.id(), 2);
        assert_eq!(ids(&effect), vec![1, 3, 4]);

        // Freed slot is usable again
        effect.add_segment(segment(5)).unwrap();
        assert_eq!(ids(&effect), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_find_segment() {
        let mut effect = effect::<4>();
        effect.add_segment(segment(1)).unwrap();
        effect.add_segment(segment(2)).unwrap();

        assert_eq!(effect.find_segment(2).map(Segment::id), Some(2));
        assert!(effect.find_segment(3).is_none());

        effect.find_segment_mut(1).unwrap().set_position(42);
        assert_eq!(effect.find_segment(1).unwrap().initial_position(), 42);
    }

    #[test]
    fn test_create_segment_ranges() {
        let mut effect = effect::<4>();

        let full = effect.create_segment(1, 10, None, T0).unwrap();
        assert_eq!(full.range(), MoveRange::new(0, 99));

        let clamped = effect.create_segment(2, 10, Some((-5, 500)), T0).unwrap();
        assert_eq!(clamped.range(), MoveRange::new(0, 99));

        let swapped = effect.create_segment(3, 30, Some((80, 20)), T0).unwrap();
        assert_eq!(swapped.range(), MoveRange::new(20, 80));

        assert_eq!(
            effect.create_segment(3, 0, None, T0).map(|s| s.id()),
            Err(EffectError::DuplicateId(3))
        );
    }

    #[test]
    fn test_tick_moves_every_segment() {
        let mut effect = effect::<4>();
        effect.add_segment(segment(1).with_speed(10.0)).unwrap();
        effect.add_segment(segment(2).with_speed(-10.0)).unwrap();
        effect.tick(0.5);

        let positions: Vec<f32> = effect.segments().iter().map(Segment::position).collect();
        assert!((positions[0] - 5.0).abs() < 1e-3);
        assert!((positions[1] - 94.0).abs() < 1e-3);
    }

    #[test]
    fn test_tick_frame_uses_frame_rate() {
        let mut effect = effect::<2>();
        effect.add_segment(segment(1).with_speed(30.0)).unwrap();
        assert_eq!(effect.fps(), 30);
        effect.tick_frame();
        assert!((effect.segments()[0].position() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_apply_settings_clamps() {
        let mut effect = effect::<2>();
        effect.apply_settings(0, 500, 60);
        assert_eq!(effect.led_count(), 1);
        assert_eq!(effect.fps(), 120);

        effect.apply_settings(1_000, 0, 60);
        assert_eq!(effect.led_count(), 60);
        assert_eq!(effect.fps(), 1);
    }

    #[test]
    fn test_empty_effect_renders_black() {
        let effect = effect::<2>();
        let white = Rgb::new(255, 255, 255);
        let mut frame = [white; 120];
        effect.render(&DEFAULT_PALETTE, T0, &mut frame);
        assert!(frame[..100].iter().all(|led| *led == Rgb::default()));
        assert!(frame[100..].iter().all(|led| *led == white));
    }

    #[test]
    fn test_clear_segments() {
        let mut effect = effect::<2>();
        effect.add_segment(segment(1)).unwrap();
        effect.clear_segments();
        assert!(effect.is_empty());
        assert_eq!(effect.capacity(), 2);
    }
}
