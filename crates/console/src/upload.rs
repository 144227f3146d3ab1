//! CSV upload flow
//!
//! `Idle → Uploading → Succeeded | Failed → (dwell) → Idle`. While the flow
//! is not idle the drop zone is hidden and the progress panel is shown.
//! [`crate::session::Session::upload`] drives the transitions.

use crate::notify::NotificationQueue;
use catalog_core::{ConsoleError, ConsoleResult, UploadReceipt};
use std::time::Duration;

/// Accepted file suffix (case-sensitive)
pub const CSV_EXTENSION: &str = ".csv";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading { file_name: String },
    Succeeded { file_name: String, task_id: String },
    Failed { message: String },
}

/// Progress panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub show_drop_zone: bool,
    pub fill_percent: u8,
    pub title: String,
    pub details: String,
}

/// Result of a finished upload and how long to keep showing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOutcome {
    pub succeeded: bool,
    pub dwell: Duration,
}

impl UploadOutcome {
    /// A successful import changes the product list
    pub fn reload_products(&self) -> bool {
        self.succeeded
    }
}

#[derive(Debug, Clone)]
pub struct UploadFlow {
    phase: UploadPhase,
    success_dwell: Duration,
    failure_dwell: Duration,
}

impl UploadFlow {
    pub fn new(success_dwell: Duration, failure_dwell: Duration) -> Self {
        Self {
            phase: UploadPhase::Idle,
            success_dwell,
            failure_dwell,
        }
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != UploadPhase::Idle
    }

    /// Reject anything whose name does not end in `.csv`
    pub fn check_file(file_name: &str) -> ConsoleResult<()> {
        if file_name.ends_with(CSV_EXTENSION) {
            Ok(())
        } else {
            Err(ConsoleError::InvalidFileType(file_name.to_string()))
        }
    }

    /// Validate the file and enter `Uploading`. A rejected file leaves the
    /// flow idle and sends nothing.
    pub fn begin(&mut self, file_name: &str, notes: &mut NotificationQueue) -> ConsoleResult<()> {
        if self.is_busy() {
            tracing::warn!("Upload of {} ignored; another upload is in progress", file_name);
            return Err(ConsoleError::validation("An upload is already in progress"));
        }
        if let Err(e) = Self::check_file(file_name) {
            notes.error(e.to_string());
            return Err(e);
        }

        tracing::info!("Uploading {}", file_name);
        self.phase = UploadPhase::Uploading {
            file_name: file_name.to_string(),
        };
        Ok(())
    }

    pub fn finish(
        &mut self,
        result: ConsoleResult<UploadReceipt>,
        notes: &mut NotificationQueue,
    ) -> UploadOutcome {
        match result {
            Ok(receipt) => {
                tracing::info!("Upload accepted as task {}", receipt.task_id);
                notes.success("CSV imported successfully!");
                self.phase = UploadPhase::Succeeded {
                    file_name: receipt.filename,
                    task_id: receipt.task_id,
                };
                UploadOutcome {
                    succeeded: true,
                    dwell: self.success_dwell,
                }
            }
            Err(e) => {
                let message = e.user_message("Upload failed");
                notes.error(message.clone());
                self.phase = UploadPhase::Failed { message };
                UploadOutcome {
                    succeeded: false,
                    dwell: self.failure_dwell,
                }
            }
        }
    }

    /// Dwell elapsed: show the drop zone again
    pub fn reset(&mut self) {
        self.phase = UploadPhase::Idle;
    }

    pub fn view(&self) -> UploadView {
        let (show_drop_zone, fill_percent, title, details) = match &self.phase {
            UploadPhase::Idle => (true, 0, "", String::new()),
            UploadPhase::Uploading { .. } => (
                false,
                50,
                "Uploading...",
                "Please wait while we process your file".to_string(),
            ),
            UploadPhase::Succeeded { .. } => (
                false,
                100,
                "✓ Upload Complete!",
                "Your file has been imported successfully".to_string(),
            ),
            UploadPhase::Failed { message } => (false, 50, "✗ Upload Failed", message.clone()),
        };
        UploadView {
            show_drop_zone,
            fill_percent,
            title: title.to_string(),
            details,
        }
    }
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000), Duration::from_millis(3000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::testing::{Endpoint, FakeApi, Failure};
    use catalog_core::CatalogApi;
    use pretty_assertions::assert_eq;

    const CSV: &[u8] = b"sku,name,description,price,active\nA1,Widget,,9.99,true\n";

    #[test]
    fn test_check_file() {
        assert!(UploadFlow::check_file("products.csv").is_ok());
        assert!(UploadFlow::check_file("products.txt").is_err());
        assert!(UploadFlow::check_file("products.CSV").is_err());
        assert!(UploadFlow::check_file("csv").is_err());
    }

    #[test]
    fn test_wrong_extension_stays_idle() {
        let mut notes = NotificationQueue::default();
        let mut flow = UploadFlow::default();

        let err = flow.begin("data.txt", &mut notes).unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidFileType(_)));
        assert!(!flow.is_busy());

        let last = notes.latest().unwrap();
        assert_eq!(last.message, "Please select a CSV file");
        assert_eq!(last.severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_progress_views() {
        let mut notes = NotificationQueue::default();
        let mut flow = UploadFlow::default();
        assert!(flow.view().show_drop_zone);

        flow.begin("products.csv", &mut notes).unwrap();
        let view = flow.view();
        assert!(!view.show_drop_zone);
        assert_eq!(view.fill_percent, 50);
        assert_eq!(view.title, "Uploading...");

        let outcome = flow.finish(
            Ok(UploadReceipt {
                task_id: "t1".into(),
                filename: "products.csv".into(),
                message: None,
            }),
            &mut notes,
        );
        assert!(outcome.reload_products());
        assert_eq!(outcome.dwell, Duration::from_millis(2000));
        let view = flow.view();
        assert_eq!(view.fill_percent, 100);
        assert_eq!(view.title, "✓ Upload Complete!");
        assert_eq!(view.details, "Your file has been imported successfully");

        flow.reset();
        assert!(flow.view().show_drop_zone);
    }

    #[tokio::test]
    async fn test_busy_flow_rejects_second_file() {
        let mut notes = NotificationQueue::default();
        let mut flow = UploadFlow::default();
        flow.begin("a.csv", &mut notes).unwrap();
        assert!(flow.begin("b.csv", &mut notes).is_err());
        assert_eq!(
            flow.phase(),
            &UploadPhase::Uploading {
                file_name: "a.csv".into()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_shows_detail() {
        let api = FakeApi::new();
        api.fail(Endpoint::Upload, Failure::detail(400, "Only CSV files are allowed"));
        let mut notes = NotificationQueue::default();
        let mut flow = UploadFlow::default();

        flow.begin("products.csv", &mut notes).unwrap();
        let result = api.upload_csv("products.csv", CSV.to_vec()).await;
        let outcome = flow.finish(result, &mut notes);

        assert!(!outcome.reload_products());
        assert_eq!(outcome.dwell, Duration::from_millis(3000));
        let view = flow.view();
        assert_eq!(view.title, "✗ Upload Failed");
        assert_eq!(view.details, "Only CSV files are allowed");
        assert_eq!(notes.latest().unwrap().message, "Only CSV files are allowed");
    }

    #[tokio::test]
    async fn test_failure_without_detail() {
        let mut notes = NotificationQueue::default();
        let mut flow = UploadFlow::default();
        flow.begin("products.csv", &mut notes).unwrap();
        flow.finish(Err(ConsoleError::transport("reset")), &mut notes);
        assert_eq!(flow.view().details, "Upload failed");
    }
}
