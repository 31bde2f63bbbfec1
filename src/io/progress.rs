//! Progress observation interface and terminal progress rendering
//!
//! The build session reports per-cell progress and final completion through
//! a typed observer interface, decoupling consumers from internal iteration
//! counting. Late subscribers receive no replay of missed events.

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Receives build progress notifications
///
/// `processing` fires after every cell placement decision (including
/// skipped transparent cells) and after every canvas flush; `complete`
/// fires exactly once with the final encoded bytes.
pub trait MosaicObserver {
    /// A unit of build work finished; `iteration` is monotonically increasing
    fn processing(&self, iteration: usize);

    /// The build finished; `buffer` holds the encoded output image
    fn complete(&self, buffer: &[u8]);
}

/// Fans build notifications out to registered observers in order
#[derive(Default)]
pub struct ProgressEmitter {
    observers: Vec<Box<dyn MosaicObserver>>,
}

impl ProgressEmitter {
    /// Create an emitter with no observers
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer for all subsequent notifications
    pub fn register(&mut self, observer: Box<dyn MosaicObserver>) {
        self.observers.push(observer);
    }

    /// Notify all observers of a completed unit of work
    pub fn processing(&self, iteration: usize) {
        for observer in &self.observers {
            observer.processing(iteration);
        }
    }

    /// Notify all observers of build completion
    pub fn complete(&self, buffer: &[u8]) {
        for observer in &self.observers {
            observer.complete(buffer);
        }
    }
}

static BUILD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} [{{elapsed_precise}}]"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress bar tracking a single build session
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a progress bar sized to the expected iteration count
    pub fn new(expected_iterations: usize) -> Self {
        let bar = ProgressBar::new(expected_iterations as u64);
        bar.set_style(BUILD_STYLE.clone());
        bar.set_message("building");
        Self { bar }
    }
}

impl MosaicObserver for RenderProgress {
    fn processing(&self, iteration: usize) {
        self.bar.set_position(iteration as u64);
    }

    fn complete(&self, buffer: &[u8]) {
        self.bar
            .finish_with_message(format!("done ({} bytes)", buffer.len()));
    }
}
