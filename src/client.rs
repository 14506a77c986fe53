use bytes::Bytes;
use log::{debug, error};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{GitLabError, Result};
use crate::filters::{JobFilter, PipelineFilter};
use crate::types::{Job, Paginated, Pipeline};
use crate::urls::{api_url, trim_leading_slashes};

const USER_AGENT: &str = "gitlab-ci-client/0.1.0";

/// Client for the GitLab CI/CD REST API (v4).
///
/// Holds the access token and the instance base URL; every operation is a
/// single authenticated GET round trip. The client carries no mutable
/// state after construction, so one instance can serve concurrent calls.
#[derive(Clone)]
pub struct GitLabClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitLabClient {
    /// Create a new client for a GitLab instance.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Instance base URL (e.g., <https://gitlab.com>).
    ///   Surrounding slashes are trimmed; nothing else is validated, a
    ///   malformed URL surfaces when a request is attempted.
    /// * `token` - Personal or project access token, sent as a bearer
    ///   token on every request.
    ///
    /// No network activity happens here.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitLabError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into();
        let base_url = base_url
            .trim_start_matches('/')
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Fetch one page of pipelines for a project.
    ///
    /// # Arguments
    ///
    /// * `project_id` - Numeric project ID
    /// * `filter` - Optional query parameters; `None` fields are omitted
    ///   from the request
    ///
    /// # Returns
    ///
    /// The requested page together with the pagination counters GitLab
    /// reports in response headers.
    pub async fn fetch_pipelines(
        &self,
        project_id: u64,
        filter: Option<&PipelineFilter>,
    ) -> Result<Paginated<Pipeline>> {
        self.fetch_page(&format!("projects/{project_id}/pipelines"), filter)
            .await
    }

    /// Fetch one page of jobs for a project, or for a single pipeline when
    /// `pipeline_id` is given.
    pub async fn fetch_jobs(
        &self,
        project_id: u64,
        pipeline_id: Option<u64>,
        filter: Option<&JobFilter>,
    ) -> Result<Paginated<Job>> {
        let path = match pipeline_id {
            Some(pipeline_id) => format!("projects/{project_id}/pipelines/{pipeline_id}/jobs"),
            None => format!("projects/{project_id}/jobs"),
        };

        self.fetch_page(&path, filter).await
    }

    /// Fetch one page of pipelines attached to a merge request.
    ///
    /// `merge_request_iid` is the per-project internal ID, not the
    /// instance-wide merge request ID.
    pub async fn fetch_merge_request_pipelines(
        &self,
        project_id: u64,
        merge_request_iid: u64,
        filter: Option<&PipelineFilter>,
    ) -> Result<Paginated<Pipeline>> {
        self.fetch_page(
            &format!("projects/{project_id}/merge_requests/{merge_request_iid}/pipelines"),
            filter,
        )
        .await
    }

    /// Download a single artifact file from a job's archive.
    ///
    /// `path` is the file's location inside the archive; leading slashes
    /// are stripped. The body is returned as-is with no decoding. A job
    /// without that artifact yields an `Api` error for which
    /// [`GitLabError::is_not_found`] holds.
    pub async fn fetch_artifact(
        &self,
        project_id: u64,
        job_id: u64,
        path: &str,
    ) -> Result<Bytes> {
        let path = format!(
            "projects/{project_id}/jobs/{job_id}/artifacts/{}",
            trim_leading_slashes(path)
        );

        let response = self.get(&path, None::<&()>).await?;

        Ok(response.bytes().await?)
    }

    /// Fetch a JSON collection page and lift the pagination headers into
    /// the envelope.
    async fn fetch_page<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<Paginated<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.get(path, query).await?;

        let per_page = header_count(response.headers(), "x-per-page");
        let total_pages = header_count(response.headers(), "x-total-pages");
        let total_items = header_count(response.headers(), "x-total");

        let body = response.bytes().await?;
        let items = serde_json::from_slice(&body)?;

        Ok(Paginated {
            items,
            per_page,
            total_pages,
            total_items,
        })
    }

    /// Issue a single authenticated GET request. One attempt, no retry.
    async fn get<Q>(&self, path: &str, query: Option<&Q>) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        let url = api_url(&self.base_url, path);
        debug!("GET {url}");

        let mut request = self.client.get(&url).bearer_auth(&self.token);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("GET {url} failed: {e}");
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("GET {url} returned {status}: {message}");
            return Err(GitLabError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

fn header_count(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}
