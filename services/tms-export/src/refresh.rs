//! Catalog refresh: fetch the remote catalog and replace the local copy
//! with failure-safe backup semantics.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::info;

/// Browser-like user agent; some catalog hosts reject default client UAs.
const USER_AGENT: &str = "Mozilla/5.0";

/// Fetch the remote catalog body. Single blocking request, client default
/// timeout policy, no retries.
pub fn fetch_catalog(url: &str) -> Result<Vec<u8>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Fetch failed: {}", url))?
        .error_for_status()
        .with_context(|| format!("Fetch failed: {}", url))?;

    let body = response.bytes().context("Failed to read response body")?;
    Ok(body.to_vec())
}

/// Replace the catalog file at `path` with `data`, keeping the previous
/// content at `<path>.BAK`.
///
/// The order is rename-then-write, never write-then-delete: if anything
/// fails before the new content lands, the last good catalog copy still
/// exists (at `path` or at the backup path), it is never destroyed.
pub fn replace_catalog_file(path: &Path, data: &[u8]) -> io::Result<()> {
    if path.is_file() {
        let backup = backup_path(path);
        if backup.exists() {
            fs::remove_file(&backup)?;
        }
        fs::rename(path, &backup)?;
    }
    fs::write(path, data)
}

/// `<path>.BAK`, with the extension appended rather than replaced.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".BAK");
    PathBuf::from(name)
}

/// Fetch `url` and replace the local catalog at `path`. A fetch failure
/// leaves the local file untouched.
pub fn refresh_catalog(url: &str, path: &Path) -> Result<()> {
    let data = fetch_catalog(url)?;
    replace_catalog_file(path, &data)
        .with_context(|| format!("Failed to replace catalog at {}", path.display()))?;
    info!(url, path = %path.display(), bytes = data.len(), "catalog refreshed");
    Ok(())
}
