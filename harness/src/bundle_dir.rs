//! Report directory persistence: write and verify a solved run on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   search_report.json   canonical JSON report bytes
//!   report_digest.txt    ASCII digest string ("sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing file → error
//! - Report bytes not in canonical form → error
//! - Stored digest differs from the recomputed one → error

use std::path::{Path, PathBuf};

use tilepath_kernel::proof::canon::{canonical_json_bytes, CanonError};
use tilepath_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};

use crate::runner::SolveRun;

/// Canonical report filename.
pub const REPORT_FILENAME: &str = "search_report.json";

/// Digest filename.
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// Error writing or verifying a report directory.
#[derive(Debug, thiserror::Error)]
pub enum ReportDirError {
    /// I/O failure on `path`.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A required file is absent.
    #[error("missing file: {filename}")]
    MissingFile { filename: &'static str },
    /// The report is not valid JSON.
    #[error("report parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The report could not be re-canonicalized.
    #[error(transparent)]
    Canon(#[from] CanonError),
    /// The report bytes differ from their canonical form.
    #[error("report bytes are not canonical")]
    NonCanonical,
    /// The stored digest does not match the report bytes.
    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },
}

/// Write `run`'s report and digest into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns [`ReportDirError::Io`] on any filesystem failure.
pub fn write_report_dir(run: &SolveRun, dir: &Path) -> Result<(), ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportDirError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    write_file(&dir.join(REPORT_FILENAME), &run.report_bytes)?;
    write_file(&dir.join(DIGEST_FILENAME), run.report_digest.as_str().as_bytes())?;
    log::debug!("wrote report {} to {}", run.report_digest, dir.display());
    Ok(())
}

/// Read `dir` back and verify canonical form and digest.
///
/// Returns the verified digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on the first failed check.
pub fn verify_report_dir(dir: &Path) -> Result<ContentHash, ReportDirError> {
    let report_bytes = read_file(dir, REPORT_FILENAME)?;
    let stored = read_file(dir, DIGEST_FILENAME)?;

    let value: serde_json::Value = serde_json::from_slice(&report_bytes)?;
    if canonical_json_bytes(&value)? != report_bytes {
        return Err(ReportDirError::NonCanonical);
    }

    let recomputed = canonical_hash(DOMAIN_SEARCH_REPORT, &report_bytes);
    let stored = String::from_utf8_lossy(&stored).trim().to_string();
    if stored != recomputed.as_str() {
        return Err(ReportDirError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok(recomputed)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ReportDirError> {
    std::fs::write(path, bytes).map_err(|source| ReportDirError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(dir: &Path, filename: &'static str) -> Result<Vec<u8>, ReportDirError> {
    let path = dir.join(filename);
    match std::fs::read(&path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ReportDirError::MissingFile { filename })
        }
        Err(source) => Err(ReportDirError::Io { path, source }),
    }
}
