// src/store.rs
//
// Staleness gate: timestamp-order comparison between the source snapshot and
// the last produced output. Purely mtime based — no content hashing — so
// clock skew and timestamp-preserving copies can fool it. Known limitation.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{Result, ScrapeError};

/// Decide whether extraction should run at all.
///
/// Proceed iff the output is absent, `force` was requested, or the source is
/// strictly newer than the output.
pub fn needs_update(src: &Path, out: &Path, force: bool) -> Result<bool> {
    if !src.exists() {
        return Err(ScrapeError::NotFound(src.to_path_buf()));
    }
    if force || !out.exists() {
        return Ok(true);
    }
    let src_m = fs::metadata(src)?.modified()?;
    let out_m = fs::metadata(out)?.modified()?;
    Ok(src_m > out_m)
}

/// After a successful write, pin the output's mtime to the source's so the
/// comparison stays valid even though the write happened later.
pub fn align_mtime(out: &Path, src: &Path) -> Result<()> {
    let src_m = fs::metadata(src)?.modified()?;
    let f = fs::OpenOptions::new().write(true).open(out)?;
    f.set_modified(src_m)?;
    Ok(())
}

/// Human-readable mtime for status lines; "missing" when the file is absent.
pub fn mtime_display(path: &Path) -> String {
    match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(t) => DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => s!("missing"),
    }
}
