//! Export service domain logic for the dog QR form.
//!
//! Writes the rendered QR code either verbatim as a PNG or composed onto a
//! single letter-size PDF page. Every write is staged in a temporary file next
//! to the destination and renamed over it, so a failed export never leaves a
//! half-written file at the chosen path. The UI only handles the save dialog
//! and the resulting message.

use log::{error, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile, TempPath};

use shared::{ExportKind, ExportRequest, ExportResponse};

use crate::backend::domain::errors::ExportError;
use crate::backend::domain::pdf_page::{self, PageLayout};

/// PNG copy of the QR code on disk, removed when dropped.
///
/// A failed removal is logged and otherwise ignored.
#[derive(Debug)]
struct ScratchImage {
    path: Option<TempPath>,
}

impl ScratchImage {
    fn create(png: &[u8], scratch_dir: Option<&Path>) -> Result<Self, ExportError> {
        let mut builder = Builder::new();
        builder.prefix("dogtag-qr-").suffix(".png");

        let file = match scratch_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| ExportError::io(scratch_dir.unwrap_or_else(|| Path::new("<temp dir>")), e))?;

        let path = write_and_close(file, png)?;
        Ok(Self { path: Some(path) })
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Drop for ScratchImage {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            let shown = path.to_path_buf();
            if let Err(e) = path.close() {
                warn!("⚠️ EXPORT: Failed to delete temporary file {:?}: {}", shown, e);
            }
        }
    }
}

fn write_and_close(mut file: NamedTempFile, bytes: &[u8]) -> Result<TempPath, ExportError> {
    let staged_path = file.path().to_path_buf();
    file.write_all(bytes)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| ExportError::io(&staged_path, e))?;
    Ok(file.into_temp_path())
}

/// Mode of a newly saved file before the umask is applied
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// A symlink at `destination` is saved through, not replaced
fn resolve_target(destination: &Path) -> PathBuf {
    match fs::symlink_metadata(destination) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(destination).unwrap_or_else(|_| destination.to_path_buf())
        }
        _ => destination.to_path_buf(),
    }
}

/// Write `bytes` to `destination` completely or not at all.
///
/// The result has the permissions of the file it replaces, or those of a
/// plain new file when there was none.
fn write_atomically(destination: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let target = resolve_target(destination);
    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let existing = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    builder.prefix(".dogtag-").suffix(".part");
    if existing.is_none() {
        if let Some(permissions) = new_file_permissions() {
            builder.permissions(permissions);
        }
    }

    let staged = builder
        .tempfile_in(&directory)
        .map_err(|e| ExportError::io(destination, e))?;

    let staged = write_and_close(staged, bytes)?;
    if let Some(permissions) = existing {
        fs::set_permissions(&staged, permissions).map_err(|e| ExportError::io(destination, e))?;
    }
    staged
        .persist(&target)
        .map_err(|e| ExportError::io(destination, e.error))?;
    Ok(())
}

/// Export service that handles all export-related business logic
#[derive(Debug, Clone, Default)]
pub struct ExportService {
    scratch_dir: Option<PathBuf>,
}

impl ExportService {
    /// Create a new ExportService using the system temp dir for scratch files
    pub fn new() -> Self {
        Self { scratch_dir: None }
    }

    /// Keep scratch files of document exports in `dir` instead of the system temp dir
    pub fn with_scratch_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: Some(dir.into()),
        }
    }

    /// Run the export described by `request` and report what was written
    pub fn export(&self, request: &ExportRequest, png: &[u8]) -> Result<ExportResponse, ExportError> {
        info!("📁 EXPORT: Exporting {:?} to {:?}", request.kind, request.destination);

        let result = match request.kind {
            ExportKind::Image => self.export_image(png, &request.destination),
            ExportKind::Document => self.export_document(png, &request.destination),
        };

        match result {
            Ok(bytes_written) => {
                let file_path = request.destination.to_string_lossy().to_string();
                let message = match request.kind {
                    ExportKind::Image => "The image has been saved successfully.".to_string(),
                    ExportKind::Document => "The PDF file has been saved successfully.".to_string(),
                };
                info!("✅ EXPORT: Wrote {} bytes to {}", bytes_written, file_path);
                Ok(ExportResponse {
                    message,
                    file_path,
                    bytes_written,
                })
            }
            Err(e) => {
                error!("❌ EXPORT: {:?} export to {:?} failed: {}", request.kind, request.destination, e);
                Err(e)
            }
        }
    }

    /// Write the PNG bytes verbatim to `destination`
    pub fn export_image(&self, png: &[u8], destination: &Path) -> Result<usize, ExportError> {
        write_atomically(destination, png)?;
        Ok(png.len())
    }

    /// Place the QR code centered on a letter page and write the PDF to `destination`
    pub fn export_document(&self, png: &[u8], destination: &Path) -> Result<usize, ExportError> {
        let scratch = ScratchImage::create(png, self.scratch_dir.as_deref())?;
        let scratch_path = scratch
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let image = image::ImageReader::open(&scratch_path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ExportError::io(&scratch_path, e))?
            .decode()?
            .to_luma8();

        let pdf = pdf_page::compose_single_page(&image, PageLayout::letter())?;
        write_atomically(destination, &pdf)?;
        Ok(pdf.len())
    }
}
