mod tests {
    use myrtio_segment_composer::{
        Action, Command, CommandProcessor, CommandQueue, DEFAULT_PALETTE, Effect, EffectConfig,
        EffectError, Instant, Param, QueueFull,
    };

    fn position(segment: u16, position: i32) -> Command {
        Command::update(1, segment, Param::Position(position))
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let sender = queue.sender();
        sender.submit(position(1, 1)).unwrap();
        sender.submit(position(1, 2)).unwrap();
        assert_eq!(queue.len(), 2);

        let receiver = queue.receiver();
        assert_eq!(receiver.take(), Some(position(1, 1)));
        assert_eq!(receiver.take(), Some(position(1, 2)));
        assert_eq!(receiver.take(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_returns_command() {
        let queue: CommandQueue<2> = CommandQueue::new();
        queue.submit(position(1, 1)).unwrap();
        queue.submit(position(1, 2)).unwrap();
        assert_eq!(queue.submit(position(1, 3)), Err(QueueFull(position(1, 3))));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_processor_reports_outcome() {
        let queue: CommandQueue<8> = CommandQueue::new();
        let now = Instant::from_millis(0);
        let mut effect: Effect<4> = Effect::new(&EffectConfig::default());
        effect.create_segment(1, 0, None, now).unwrap();

        queue.submit(position(1, 10)).unwrap();
        queue.submit(position(9, 10)).unwrap();
        queue
            .submit(Command::new(1, Action::Delete(1)))
            .unwrap();

        let mut processor = CommandProcessor::new(queue.receiver());
        let report = processor.process_pending(&mut effect, &DEFAULT_PALETTE, 100, now);

        assert_eq!(report.applied, 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.last_error, Some(EffectError::NotFound(9)));
        assert!(report.has_changes());
        assert!(effect.is_empty());
        assert!(queue.is_empty());

        let report = processor.process_pending(&mut effect, &DEFAULT_PALETTE, 100, now);
        assert!(!report.has_changes());
        assert_eq!(report.rejected, 0);
    }
}
