//! Unpacking of original-upload archives
//!
//! Original uploads normally arrive as a zip holding a single `.fit` file, but
//! some devices upload bare FIT data, and the service then returns the file
//! as-is. Both cases end with one file at the canonical path.

use crate::domain::{ExporterError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// How an original upload was turned into the final artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unpacked {
    /// First archive entry extracted, archive removed
    Extracted {
        /// Name of the entry inside the archive
        entry_name: String,
    },
    /// Download was not an archive and was renamed in place
    Renamed,
}

/// Turn the downloaded `archive_path` into `final_path`
///
/// If the download opens as a zip, its first entry is extracted next to the
/// archive, renamed to `final_path`, and the archive is deleted. If it does
/// not open as a zip, or the entry cannot be extracted (bad checksum,
/// truncated data, unsafe name), the download itself is renamed to
/// `final_path`.
///
/// # Errors
///
/// Fails on I/O errors outside extraction and on an archive with no entries.
pub fn unpack_original(archive_path: &Path, final_path: &Path) -> Result<Unpacked> {
    let file = File::open(archive_path)?;

    let mut archive = match ZipArchive::new(file) {
        Ok(archive) => archive,
        Err(e) => {
            tracing::debug!(
                path = %archive_path.display(),
                reason = %e,
                "Download is not a zip archive, keeping raw bytes"
            );
            fs::rename(archive_path, final_path)?;
            return Ok(Unpacked::Renamed);
        }
    };

    if archive.is_empty() {
        drop(archive);
        fs::remove_file(archive_path)?;
        return Err(ExporterError::Archive(format!(
            "archive {} contains no files",
            archive_path.display()
        )));
    }

    let output_dir = archive_path.parent().unwrap_or_else(|| Path::new("."));
    let mut created = None;
    let extracted = extract_first(&mut archive, output_dir, &mut created);
    drop(archive);

    match extracted {
        Ok((entry_name, extracted_path)) => {
            fs::rename(&extracted_path, final_path)?;
            fs::remove_file(archive_path)?;
            Ok(Unpacked::Extracted { entry_name })
        }
        Err(e) => {
            tracing::warn!(
                path = %archive_path.display(),
                reason = %e,
                "Archive entry could not be extracted, keeping raw download"
            );
            if let Some(partial) = created {
                if partial.exists() {
                    fs::remove_file(&partial)?;
                }
            }
            fs::rename(archive_path, final_path)?;
            Ok(Unpacked::Renamed)
        }
    }
}

/// Write the first entry into `output_dir`
///
/// `created` is set as soon as the output file exists so a failed copy can
/// be cleaned up.
fn extract_first(
    archive: &mut ZipArchive<File>,
    output_dir: &Path,
    created: &mut Option<PathBuf>,
) -> Result<(String, PathBuf)> {
    let mut entry = archive.by_index(0)?;
    let entry_name = entry.name().to_string();
    let extracted_path = extraction_target(output_dir, entry.enclosed_name(), &entry_name)?;

    let mut out = File::create(&extracted_path)?;
    *created = Some(extracted_path.clone());
    io::copy(&mut entry, &mut out)?;
    Ok((entry_name, extracted_path))
}

/// Where the first entry is written before being renamed
///
/// Only the entry's file name is used so nothing lands outside `output_dir`.
fn extraction_target(
    output_dir: &Path,
    enclosed: Option<PathBuf>,
    raw_name: &str,
) -> Result<PathBuf> {
    let file_name = enclosed
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_os_string())
        .ok_or_else(|| ExporterError::Archive(format!("unsafe archive entry name: {raw_name}")))?;
    Ok(output_dir.join(file_name))
}
