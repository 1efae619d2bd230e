//! Provides the registry text on disk, downloading it from the IEEE when no cached
//! copy exists.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, ensure};
use reqwest::Client;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use vendor6_common::config::Config;

use crate::registry::OuiRegistry;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Receives the number of bytes downloaded so far.
pub type ProgressCallback = Box<dyn Fn(u64) + Send + Sync>;

/// Returns the path of the registry file, downloading it first when it is missing
/// or a refresh was requested.
pub async fn ensure_registry(
    cfg: &Config,
    on_progress: Option<ProgressCallback>,
) -> anyhow::Result<PathBuf> {
    let path: PathBuf = cfg.oui_file.clone();
    let cached: bool = fs::try_exists(&path)
        .await
        .with_context(|| format!("checking {}", path.display()))?;

    if cached && !cfg.refresh {
        debug!(path = %path.display(), "using cached OUI registry");
        return Ok(path);
    }

    let client: Client = Client::builder()
        .user_agent(concat!("vendor6/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .context("building HTTP client")?;

    fetch_registry(&client, &cfg.source_url, &path, on_progress).await?;
    Ok(path)
}

/// Makes sure the registry file exists and parses it.
pub async fn open_registry(
    cfg: &Config,
    on_progress: Option<ProgressCallback>,
) -> anyhow::Result<OuiRegistry> {
    let path = ensure_registry(cfg, on_progress).await?;
    let registry = OuiRegistry::load(&path)?;
    if registry.is_empty() {
        warn!(path = %path.display(), "OUI registry contains no assignments");
    }
    Ok(registry)
}

/// Downloads `url` into `dest`.
///
/// The body is streamed into a `.part` sibling that replaces `dest` only once the
/// transfer completed, so an interrupted download never leaves a truncated registry.
pub async fn fetch_registry(
    client: &Client,
    url: &str,
    dest: &Path,
    on_progress: Option<ProgressCallback>,
) -> anyhow::Result<u64> {
    info!(url, path = %dest.display(), "downloading OUI registry");

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let partial: PathBuf = partial_path(dest);
    let result = download(client, url, &partial, on_progress.as_deref()).await;

    let downloaded: u64 = match result {
        Ok(downloaded) => downloaded,
        Err(e) => {
            let _ = fs::remove_file(&partial).await;
            return Err(e);
        }
    };

    fs::rename(&partial, dest)
        .await
        .with_context(|| format!("moving download into {}", dest.display()))?;

    info!(bytes = downloaded, "OUI registry saved");
    Ok(downloaded)
}

async fn download(
    client: &Client,
    url: &str,
    partial: &Path,
    on_progress: Option<&(dyn Fn(u64) + Send + Sync)>,
) -> anyhow::Result<u64> {
    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;

    let status = response.status();
    ensure!(status.is_success(), "HTTP {status} while downloading {url}");

    let mut file = File::create(partial)
        .await
        .with_context(|| format!("creating {}", partial.display()))?;

    let mut downloaded: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("reading response from {url}"))?
    {
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        if let Some(report) = on_progress {
            report(downloaded);
        }
    }
    file.flush().await?;

    Ok(downloaded)
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name: OsString = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}
