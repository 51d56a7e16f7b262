//! Buildbot query API client and status resolution.

use serde::Deserialize;

use crate::models::status::BuildStatus;

/// Errors from the fetch/resolve pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Network failure, non-2xx upstream status, or a response body that
    /// does not match the expected shape. Deliberately a single variant:
    /// this layer does not discriminate transport sub-cases.
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The query succeeded but the builder has no builds.
    #[error("no such builder")]
    NotFound,

    /// The most recent build carries a result code outside the documented
    /// 0-6 range.
    #[error("unexpected result code: {0}")]
    InvalidResultCode(i64),
}

/// Response shape of the builds query. Extra fields are ignored; a missing
/// or non-numeric `results` is a schema violation and fails deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildsPage {
    pub builds: Vec<BuildRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BuildRecord {
    pub results: i64,
}

/// Fetch the most recent build for `builder` from the Buildbot instance at
/// `origin` (e.g. `https://buildbot.mariadb.org`).
///
/// One outbound GET per call; no retries, no caching. The query asks for
/// exactly one build, ordered descending by build number.
pub async fn fetch_latest_build(
    client: &reqwest::Client,
    origin: &str,
    builder: &str,
) -> Result<BuildsPage, ServiceError> {
    let url = format!("{origin}/api/v2/builders/{builder}/builds?limit=1&order=-number");
    let resp = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .await?
        .error_for_status()?;

    Ok(resp.json().await?)
}

/// Resolve a fetched page to a status. An empty page means the builder does
/// not exist; otherwise the first (most recent) record's result code is
/// mapped through the fixed result-code table.
pub fn resolve_status(page: &BuildsPage) -> Result<BuildStatus, ServiceError> {
    let build = page.builds.get(0).ok_or(ServiceError::NotFound)?;
    BuildStatus::from_result_code(build.results)
        .ok_or(ServiceError::InvalidResultCode(build.results))
}

/// Fetch and resolve in one step — the handler's entry point. `origin` is
/// the full Buildbot base URL, so callers (and tests) choose the scheme.
pub async fn builder_status(
    client: &reqwest::Client,
    origin: &str,
    builder: &str,
) -> Result<BuildStatus, ServiceError> {
    let page = fetch_latest_build(client, origin, builder).await?;
    resolve_status(&page)
}
