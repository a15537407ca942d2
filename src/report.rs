use crate::executor::DownloadOutcome;
use std::fmt;

/// Totals for one mirror run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub folders: usize,
    pub folders_failed: usize,
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
    pub unexportable: usize,
    pub failures: Vec<String>,
}

impl RunReport {
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Success(_) => self.created += 1,
            DownloadOutcome::Skipped(_) => self.skipped += 1,
            DownloadOutcome::Failed { path, reason } => {
                self.failed += 1;
                self.failures
                    .push(format!("{}: {}", path.display(), reason));
            }
        }
    }

    pub fn folder_failed(&mut self, title: &str, reason: &str) {
        self.folders_failed += 1;
        self.failures.push(format!("folder {}: {}", title, reason));
    }

    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.folders_failed == 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} folders mirrored, {} files created, {} skipped, {} unexportable, {} failed",
            self.folders, self.created, self.skipped, self.unexportable, self.failed
        )?;
        if self.folders_failed > 0 {
            writeln!(f, "{} folders could not be listed", self.folders_failed)?;
        }
        for line in self.failures.iter() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}
