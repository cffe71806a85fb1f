//! Console notifier: progress bar and terminal summary.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::notify::event::SyncEvent;
use crate::notify::notifier::Notifier;
use crate::sync::{SyncOutcome, SyncReport};

/// Terminal-facing notifier driving an item progress bar.
pub struct ConsoleNotifier {
    bar: Option<ProgressBar>,
    show_progress: bool,
    show_skipped: bool,
}

impl ConsoleNotifier {
    pub fn new(show_progress: bool, show_skipped: bool) -> Self {
        Self {
            bar: None,
            show_progress,
            show_skipped,
        }
    }

    fn create_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        bar
    }

    fn clear_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    fn print_summary(&self, outcome: SyncOutcome, report: &SyncReport) {
        println!();
        match outcome {
            SyncOutcome::Success => {
                println!("{} Sync complete", style("OK").green().bold());
            }
            SyncOutcome::Failure => {
                println!("{} Sync finished with errors", style("ERROR").red().bold());
            }
        }
        println!("  Downloaded: {}", style(report.downloaded).green());
        if report.failed > 0 {
            println!("  Failed:     {}", style(report.failed).red());
        }
        if self.show_skipped && report.skipped > 0 {
            println!("  Skipped:    {}", style(report.skipped).yellow());
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::Started { total } => {
                if self.show_progress {
                    self.bar = Some(Self::create_bar(total as u64));
                }
            }
            SyncEvent::Progress { current, name, .. } => {
                if let Some(bar) = &self.bar {
                    bar.set_position(current as u64);
                    bar.set_message(name);
                }
            }
            SyncEvent::Finished { outcome, report } => {
                self.clear_bar();
                self.print_summary(outcome, &report);
            }
            SyncEvent::Dismissed => {
                self.clear_bar();
            }
        }
    }
}
