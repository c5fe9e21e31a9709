//! Course catalog fetching over HTTP or from a local directory.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::Result;
use super::cache::{RequestCache, SharedError};
use crate::state::Lecture;
use crate::theme::Settings;

/// Cache key of the majors catalog.
pub const MAJORS_KEY: &str = "majors";
/// Cache key of the liberal-arts catalog.
pub const LIBERAL_ARTS_KEY: &str = "liberalArts";

/// Where catalog documents are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogLocation {
    /// Base URL; documents are fetched as `<base>/<file>`.
    Http(String),
    /// Directory holding the documents.
    Dir(PathBuf),
}

impl CatalogLocation {
    /// What: Interpret a configured catalog base.
    ///
    /// Inputs:
    /// - `base`: `http(s)://` URL or filesystem path
    ///
    /// Output:
    /// - `Http` for URLs (trailing slashes trimmed), `Dir` otherwise.
    #[must_use]
    pub fn parse(base: &str) -> Self {
        let trimmed = base.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.trim_end_matches('/').to_string())
        } else {
            Self::Dir(PathBuf::from(trimmed))
        }
    }

    /// What: Render the full location of one document, for logs and errors.
    #[must_use]
    pub fn describe(&self, file: &str) -> String {
        match self {
            Self::Http(base) => format!("{base}/{file}"),
            Self::Dir(dir) => dir.join(file).display().to_string(),
        }
    }
}

/// Fetches the majors and liberal-arts catalogs through a shared request cache.
///
/// Clones share the HTTP connection pool, the cache, and the request counter.
#[derive(Clone)]
pub struct CatalogClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Catalog origin.
    location: CatalogLocation,
    /// File name of the majors catalog.
    majors_file: String,
    /// File name of the liberal-arts catalog.
    liberal_arts_file: String,
    /// De-duplicates catalog loads by key.
    cache: RequestCache<Arc<Vec<Lecture>>>,
    /// Number of loads that actually reached the network or disk.
    requests_issued: Arc<AtomicUsize>,
}

impl CatalogClient {
    /// What: Build a client for the given location and document names.
    ///
    /// Inputs:
    /// - `location`: Catalog origin
    /// - `majors_file` / `liberal_arts_file`: Document names under the origin
    /// - `timeout`: Per-request HTTP timeout
    ///
    /// Output:
    /// - Ready client with an empty cache.
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be constructed.
    pub fn new(
        location: CatalogLocation,
        majors_file: impl Into<String>,
        liberal_arts_file: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .user_agent(format!("Lectern/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            http,
            location,
            majors_file: majors_file.into(),
            liberal_arts_file: liberal_arts_file.into(),
            cache: RequestCache::new(),
            requests_issued: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// What: Build a client from user settings.
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be constructed.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            CatalogLocation::parse(&settings.catalog_base),
            settings.majors_catalog.clone(),
            settings.liberal_arts_catalog.clone(),
            Duration::from_secs(settings.request_timeout_secs.max(1)),
        )
    }

    /// Catalog origin this client reads from.
    #[must_use]
    pub const fn location(&self) -> &CatalogLocation {
        &self.location
    }

    /// Request cache shared by every clone of this client.
    #[must_use]
    pub const fn cache(&self) -> &RequestCache<Arc<Vec<Lecture>>> {
        &self.cache
    }

    /// Number of catalog loads that missed the cache so far.
    #[must_use]
    pub fn requests_issued(&self) -> usize {
        self.requests_issued.load(Ordering::Relaxed)
    }

    /// What: Fetch both catalogs and concatenate them, majors first.
    ///
    /// Output:
    /// - Combined lecture list.
    ///
    /// # Errors
    /// - Returns the first failure of either catalog; the failed key is evicted
    ///   from the cache so a later call retries it.
    ///
    /// Details:
    /// - Both loads run concurrently; repeated or concurrent calls reuse the cache
    ///   and issue no further requests once both catalogs resolved.
    pub async fn fetch_all_lectures(&self) -> Result<Vec<Lecture>> {
        let start = Instant::now();
        debug!(location = ?self.location, "[Catalog] Fetching all lectures");
        let (majors, liberal_arts) = futures::future::try_join(
            self.fetch_catalog(MAJORS_KEY, &self.majors_file),
            self.fetch_catalog(LIBERAL_ARTS_KEY, &self.liberal_arts_file),
        )
        .await?;
        let mut lectures = Vec::with_capacity(majors.len() + liberal_arts.len());
        lectures.extend(majors.iter().cloned());
        lectures.extend(liberal_arts.iter().cloned());
        info!(
            majors = majors.len(),
            liberal_arts = liberal_arts.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "[Catalog] All lectures available"
        );
        Ok(lectures)
    }

    /// What: Load one catalog through the cache.
    async fn fetch_catalog(
        &self,
        key: &'static str,
        file: &str,
    ) -> std::result::Result<Arc<Vec<Lecture>>, SharedError> {
        let http = self.http.clone();
        let location = self.location.clone();
        let file = file.to_string();
        let requests_issued = Arc::clone(&self.requests_issued);
        self.cache
            .get(key, move || async move {
                let n = requests_issued.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(key, request = n, target = %location.describe(&file), "[Catalog] Request issued");
                load_catalog(&http, &location, &file)
                    .await
                    .map(Arc::new)
                    .map_err(SharedError::from)
            })
            .await
    }
}

/// What: Read one catalog document and decode it as a lecture array.
///
/// # Errors
/// - Network, non-success status, filesystem, or JSON decoding failures.
async fn load_catalog(
    http: &reqwest::Client,
    location: &CatalogLocation,
    file: &str,
) -> Result<Vec<Lecture>> {
    let target = location.describe(file);
    match location {
        CatalogLocation::Http(_) => {
            let resp = http
                .get(&target)
                .send()
                .await
                .map_err(|e| format!("Network error fetching {target}: {e}"))?;
            let status = resp.status();
            if !status.is_success() {
                warn!(
                    url = %target,
                    status = status.as_u16(),
                    "[Catalog] Non-success status"
                );
                return Err(format!("catalog {target} returned status {status}").into());
            }
            let lectures: Vec<Lecture> = resp
                .json()
                .await
                .map_err(|e| format!("Invalid catalog JSON from {target}: {e}"))?;
            info!(url = %target, count = lectures.len(), "[Catalog] Fetched catalog");
            Ok(lectures)
        }
        CatalogLocation::Dir(dir) => {
            let path = dir.join(file);
            let body = tokio::task::spawn_blocking(move || std::fs::read_to_string(path))
                .await?
                .map_err(|e| format!("Failed to read {target}: {e}"))?;
            let lectures: Vec<Lecture> = serde_json::from_str(&body)
                .map_err(|e| format!("Invalid catalog JSON in {target}: {e}"))?;
            info!(path = %target, count = lectures.len(), "[Catalog] Loaded catalog");
            Ok(lectures)
        }
    }
}
