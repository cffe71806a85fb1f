//! Storage server HTTP client.

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::catalog::FileRecord;
use crate::error::{Error, Result};
use crate::sync::Transfer;

/// Authenticated client for downloading files from the storage server.
pub struct StorageClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl StorageClient {
    /// Create a new client for a server base URL.
    pub fn new(base_url: Url, token: String, user_agent: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&user_agent)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Build the download URL for a remote path.
    fn file_url(&self, remote_path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::Config(format!("Server URL cannot be a base: {}", self.base_url))
            })?;
            segments.pop_if_empty();
            for segment in remote_path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }

        Ok(url)
    }

    /// Download a remote path, streaming the body to a local file.
    pub async fn download_to(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        let url = self.file_url(remote_path)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authentication(format!(
                "HTTP {} for {}",
                status, remote_path
            )));
        }

        if !status.is_success() {
            return Err(Error::transfer(remote_path, format!("HTTP {}", status)));
        }

        if let Some(parent) = local_path.parent() {
            crate::fs::ensure_dir(parent).await?;
        }

        // Stream into a sibling .part file and rename once complete, so a
        // mid-stream error never truncates a previously synced copy.
        let part_path = part_path_for(local_path);
        let mut file = File::create(&part_path).await?;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    drop(file);
                    let _ = tokio::fs::remove_file(&part_path).await;
                    return Err(Error::transfer(remote_path, e));
                }
            };
            if let Err(e) = file.write_all(&chunk).await {
                drop(file);
                let _ = tokio::fs::remove_file(&part_path).await;
                return Err(Error::Io(e));
            }
        }

        file.flush().await?;
        drop(file);
        tokio::fs::rename(&part_path, local_path).await?;

        Ok(())
    }
}

/// Sibling path the download is staged at until it completes.
fn part_path_for(local_path: &Path) -> std::path::PathBuf {
    let mut name = local_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    local_path.with_file_name(name)
}

#[async_trait]
impl Transfer for StorageClient {
    async fn download(&self, record: &FileRecord) -> Result<()> {
        self.download_to(&record.remote_path, &record.local_path)
            .await
    }
}
