//! File operations for Catalog Admin
//!
//! Native file picking via `rfd` for the CSV import, plus reading the chosen
//! file off disk.

use catalog_core::{ConsoleError, ConsoleResult};
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

/// Extension offered by the picker filter
pub const FILE_EXTENSION: &str = "csv";

/// Display name for the picker filter
pub const FILE_TYPE_NAME: &str = "CSV Files";

/// Open a file dialog to choose a CSV to import.
///
/// Returns `None` if the dialog was cancelled.
pub async fn show_import_dialog() -> Option<PathBuf> {
    let file = AsyncFileDialog::new()
        .set_title("Import Products")
        .add_filter(FILE_TYPE_NAME, &[FILE_EXTENSION])
        .add_filter("All Files", &["*"])
        .pick_file()
        .await?;

    Some(file.path().to_path_buf())
}

/// File name component used for the upload and the extension check
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read a whole file into memory
pub async fn read_file(path: &Path) -> ConsoleResult<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        tracing::error!("Failed to read {}: {}", path.display(), e);
        ConsoleError::Io(e)
    })
}
