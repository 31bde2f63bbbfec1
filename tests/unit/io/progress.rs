//! Tests for the progress emitter and observer fan-out

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tesserae::io::progress::{MosaicObserver, ProgressEmitter};

    #[derive(Clone, Default)]
    struct Tally {
        processing: Arc<AtomicUsize>,
        completes: Arc<AtomicUsize>,
        last_buffer_len: Arc<AtomicUsize>,
    }

    impl MosaicObserver for Tally {
        fn processing(&self, _iteration: usize) {
            self.processing.fetch_add(1, Ordering::SeqCst);
        }

        fn complete(&self, buffer: &[u8]) {
            self.completes.fetch_add(1, Ordering::SeqCst);
            self.last_buffer_len.store(buffer.len(), Ordering::SeqCst);
        }
    }

    // Tests every registered observer receives every notification
    #[test]
    fn test_emitter_fans_out_to_all_observers() {
        let first = Tally::default();
        let second = Tally::default();

        let mut emitter = ProgressEmitter::new();
        emitter.register(Box::new(first.clone()));
        emitter.register(Box::new(second.clone()));

        emitter.processing(1);
        emitter.processing(2);
        emitter.complete(&[9, 9, 9]);

        assert_eq!(first.processing.load(Ordering::SeqCst), 2);
        assert_eq!(second.processing.load(Ordering::SeqCst), 2);
        assert_eq!(first.completes.load(Ordering::SeqCst), 1);
        assert_eq!(second.last_buffer_len.load(Ordering::SeqCst), 3);
    }

    // Tests late subscribers see no replay of missed events
    #[test]
    fn test_no_replay_for_late_subscribers() {
        let mut emitter = ProgressEmitter::new();
        emitter.processing(1);

        let late = Tally::default();
        emitter.register(Box::new(late.clone()));
        emitter.processing(2);

        assert_eq!(late.processing.load(Ordering::SeqCst), 1);
    }

    // Tests an emitter with no observers swallows events quietly
    #[test]
    fn test_empty_emitter_is_inert() {
        let emitter = ProgressEmitter::new();
        emitter.processing(1);
        emitter.complete(&[]);
    }
}
