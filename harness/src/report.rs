//! JSON reports for batches of solved hands, and their on-disk form.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json        : compact JSON, keys sorted
//!   report_digest.txt  : ASCII digest string (e.g. "sha256:...")
//! ```
//!
//! The digest is `canonical_hash(DOMAIN_SEARCH_REPORT, report.json bytes)`.
//! Reading is fail-closed: a missing file or a digest mismatch is an error.

use std::path::Path;

use thought_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};
use thought_search::search::SearchResult;

use crate::solver::{solution_from, Point24Solver};
use crate::worlds::point24::PuzzleState;

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

/// Build the report entry for one hand.
#[must_use]
pub fn hand_report(numbers: &[i64], result: &SearchResult<PuzzleState>) -> serde_json::Value {
    let solution = solution_from(result);
    serde_json::json!({
        "depth": solution.as_ref().map(|s| s.depth),
        "numbers": numbers,
        "search": result.to_json_value(),
        "solution": solution.as_ref().map(ToString::to_string),
        "steps": solution.map(|s| s.steps),
    })
}

/// Solve every hand and build a batch report.
#[must_use]
pub fn batch_report<'a>(
    solver: &Point24Solver,
    hands: impl IntoIterator<Item = &'a [i64]>,
) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = hands
        .into_iter()
        .map(|hand| hand_report(hand, &solver.search(hand)))
        .collect();
    let solved = entries.iter().filter(|e| !e["solution"].is_null()).count();
    serde_json::json!({
        "hands": entries,
        "policy": {
            "max_depth": solver.policy().max_depth,
            "max_expansions": solver.policy().max_expansions,
            "strategy": solver.strategy().as_str(),
        },
        "solved": solved,
    })
}

/// Serialize a report to its canonical bytes (compact, keys sorted).
///
/// # Errors
///
/// Returns [`ReportWriteError::Serialize`] if serialization fails.
pub fn report_bytes(report: &serde_json::Value) -> Result<Vec<u8>, ReportWriteError> {
    serde_json::to_vec(report).map_err(|e| ReportWriteError::Serialize {
        detail: e.to_string(),
    })
}

/// Digest of canonical report bytes.
#[must_use]
pub fn report_digest(bytes: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_SEARCH_REPORT, bytes)
}

/// Error writing a report directory.
#[derive(Debug)]
pub enum ReportWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// JSON serialization failed.
    Serialize { detail: String },
}

impl std::fmt::Display for ReportWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Serialize { detail } => write!(f, "report serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ReportWriteError {}

/// Error reading a report directory.
#[derive(Debug)]
pub enum ReportReadError {
    /// I/O error during read.
    Io { detail: String },
    /// A required file is missing.
    MissingFile { filename: String },
    /// `report.json` is not valid JSON.
    ParseError { detail: String },
    /// `report_digest.txt` does not match the recomputed digest.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing report file: {filename}"),
            Self::ParseError { detail } => write!(f, "report.json parse error: {detail}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "report digest mismatch: stored={stored}, recomputed={recomputed}")
            }
        }
    }
}

impl std::error::Error for ReportReadError {}

/// Write `report.json` and `report_digest.txt` into `dir`, creating it if
/// needed. Returns the digest.
///
/// # Errors
///
/// Returns [`ReportWriteError`] on serialization or I/O failure.
pub fn write_report_dir(
    dir: &Path,
    report: &serde_json::Value,
) -> Result<ContentHash, ReportWriteError> {
    let bytes = report_bytes(report)?;
    let digest = report_digest(&bytes);

    std::fs::create_dir_all(dir).map_err(|e| ReportWriteError::Io {
        detail: format!("create {}: {e}", dir.display()),
    })?;
    std::fs::write(dir.join(REPORT_FILENAME), &bytes).map_err(|e| ReportWriteError::Io {
        detail: format!("write {REPORT_FILENAME}: {e}"),
    })?;
    std::fs::write(dir.join(DIGEST_FILENAME), digest.as_str()).map_err(|e| {
        ReportWriteError::Io {
            detail: format!("write {DIGEST_FILENAME}: {e}"),
        }
    })?;

    Ok(digest)
}

/// Read a report directory and verify its digest.
///
/// # Errors
///
/// Returns [`ReportReadError`] if a file is missing, unreadable, not JSON,
/// or the stored digest does not match the report bytes.
pub fn read_report_dir(dir: &Path) -> Result<(serde_json::Value, ContentHash), ReportReadError> {
    let bytes = read_file(dir, REPORT_FILENAME)?;
    let stored = read_file(dir, DIGEST_FILENAME)?;
    let stored = String::from_utf8_lossy(&stored).trim().to_string();

    let recomputed = report_digest(&bytes);
    if stored != recomputed.as_str() {
        return Err(ReportReadError::DigestMismatch {
            stored,
            recomputed: recomputed.as_str().to_string(),
        });
    }

    let value = serde_json::from_slice(&bytes).map_err(|e| ReportReadError::ParseError {
        detail: e.to_string(),
    })?;
    Ok((value, recomputed))
}

fn read_file(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportReadError> {
    let path = dir.join(filename);
    if !path.is_file() {
        return Err(ReportReadError::MissingFile {
            filename: filename.to_string(),
        });
    }
    std::fs::read(&path).map_err(|e| ReportReadError::Io {
        detail: format!("read {filename}: {e}"),
    })
}
