//! Progress bar for runs over several inputs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const TEMPLATE: &str = "{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} inputs, {msg}";

/// Reports finished inputs and a running element count.
///
/// Hidden for single inputs and with `--quiet`; every method is then a no-op.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    elements: AtomicUsize,
}

impl ProgressReporter {
    /// Reporter for `inputs` sources
    pub fn new(inputs: usize, quiet: bool) -> Self {
        let bar = (!quiet && inputs > 1).then(|| {
            let bar = ProgressBar::new(inputs as u64);
            if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
                bar.set_style(style);
            }
            bar.set_message("0 elements");
            bar.enable_steady_tick(Duration::from_millis(120));
            bar
        });

        Self {
            bar,
            elements: AtomicUsize::new(0),
        }
    }

    /// Record one finished input and the elements it produced
    pub fn input_done(&self, elements: usize) {
        if let Some(bar) = &self.bar {
            let total = self.elements.fetch_add(elements, Ordering::Relaxed) + elements;
            bar.set_message(format!("{total} elements"));
            bar.inc(1);
        }
    }

    /// Clear the bar once every input is done
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_quiet_or_single() {
        assert!(ProgressReporter::new(10, true).bar.is_none());
        assert!(ProgressReporter::new(1, false).bar.is_none());

        let hidden = ProgressReporter::new(0, false);
        hidden.input_done(4);
        hidden.finish();
    }

    #[test]
    fn test_counts_inputs_and_elements() {
        let reporter = ProgressReporter::new(3, false);
        reporter.input_done(2);
        reporter.input_done(5);

        let bar = reporter.bar.as_ref().unwrap();
        assert_eq!(bar.position(), 2);
        assert_eq!(bar.message(), "7 elements");
        reporter.finish();
    }
}
