//! Word list origins
//!
//! The word list is read once at startup, either from the copy bundled into
//! the binary, from a local file, or from a public object storage bucket.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{Error, Result};

/// Object name used when none is configured
pub const DEFAULT_OBJECT_NAME: &str = "words.csv";

/// Object storage endpoint used when none is configured
pub const DEFAULT_STORAGE_URL: &str = "https://storage.googleapis.com";

/// Word list compiled into the binary
pub static EMBEDDED_WORDS: &[u8] = include_bytes!("../data/words.csv");

/// Where the raw word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Bundled copy of `data/words.csv`
    Embedded,
    /// CSV file on the local filesystem
    File(PathBuf),
    /// Object in a storage bucket, fetched over HTTP(S)
    Bucket {
        base_url: String,
        bucket: String,
        object: String,
    },
}

impl WordSource {
    /// Bucket source with the default endpoint and object name
    pub fn bucket(bucket: impl Into<String>) -> Self {
        WordSource::Bucket {
            base_url: DEFAULT_STORAGE_URL.to_string(),
            bucket: bucket.into(),
            object: DEFAULT_OBJECT_NAME.to_string(),
        }
    }

    /// Read the raw CSV bytes
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            WordSource::Embedded => Ok(EMBEDDED_WORDS.to_vec()),
            WordSource::File(path) => {
                let bytes = tokio::fs::read(path).await?;
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            WordSource::Bucket {
                base_url,
                bucket,
                object,
            } => fetch_object(&object_url(base_url, bucket, object)).await,
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Embedded => write!(f, "embedded word list"),
            WordSource::File(path) => write!(f, "file {}", path.display()),
            WordSource::Bucket {
                base_url,
                bucket,
                object,
            } => write!(f, "{}", object_url(base_url, bucket, object)),
        }
    }
}

fn object_url(base_url: &str, bucket: &str, object: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), bucket, object)
}

async fn fetch_object(url: &str) -> Result<Vec<u8>> {
    info!("Fetching word list from {}", url);

    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Fetch(format!("GET {} returned {}", url, status)));
    }

    let bytes = response.bytes().await?;
    debug!("Fetched {} bytes", bytes.len());
    Ok(bytes.to_vec())
}
