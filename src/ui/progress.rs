use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Progress bar on stderr tracking how many targets have been checked.
///
/// Only counts are shown while the run is in progress; outcomes are printed
/// once, after the bar is cleared.
pub struct ProgressReporter {
    check_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            check_progress: None,
            enabled,
        }
    }

    pub fn start_checks(&mut self, total_targets: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::with_draw_target(
            Some(total_targets as u64),
            ProgressDrawTarget::stderr(),
        );
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} URLs checked ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb.set_message("Checking URLs");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.check_progress = Some(pb);
    }

    pub fn update_check_progress(&self, current: usize) {
        if let Some(ref pb) = self.check_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finish_checks(&self, ok_count: usize, total_count: usize) {
        if let Some(ref pb) = self.check_progress {
            let message = if ok_count == total_count {
                "✓ All URLs OK".to_string()
            } else {
                format!("✓ Checks complete ({ok_count}/{total_count} OK)")
            };
            pb.finish_with_message(message);
        }
    }

    /// Remove the bar so the report starts on a clean terminal.
    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.check_progress {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = ProgressReporter::new(true);
        assert!(reporter.enabled);
        assert!(reporter.check_progress.is_none());
    }

    #[test]
    fn test_progress_reporter_disabled() {
        let mut reporter = ProgressReporter::new(false);
        assert!(!reporter.enabled);

        // These should not panic even when disabled
        reporter.start_checks(20);
        assert!(reporter.check_progress.is_none());
        reporter.update_check_progress(10);
        reporter.finish_checks(18, 20);
        reporter.finish_and_clear();
    }

    #[test]
    fn test_enabled_progress_reporter() {
        let mut reporter = ProgressReporter::new(true);

        reporter.start_checks(10);
        assert!(reporter.check_progress.is_some());

        reporter.update_check_progress(7);
        reporter.finish_checks(7, 10);
        reporter.finish_and_clear();
    }

    #[test]
    fn test_progress_zero_values() {
        let mut reporter = ProgressReporter::new(true);

        reporter.start_checks(0);
        reporter.update_check_progress(0);
        reporter.finish_checks(0, 0);
    }

    #[test]
    fn test_progress_reporter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProgressReporter>();
    }
}
