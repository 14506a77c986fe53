//! Minimal typed client for the GitLab CI/CD REST API.
//!
//! Covers project pipelines, jobs, merge-request pipelines, and artifact
//! downloads. Every operation is a single authenticated request-response
//! round trip; pagination metadata from the response headers is returned
//! alongside each page. There is no retry, caching, or state beyond the
//! token and base URL held by [`GitLabClient`].
//!
//! ```no_run
//! use gitlab_ci_client::{GitLabClient, PipelineFilter, SortOrder};
//!
//! # async fn example() -> gitlab_ci_client::Result<()> {
//! let client = GitLabClient::new("https://gitlab.com", "glpat-...")?;
//!
//! let filter = PipelineFilter {
//!     per_page: Some(5),
//!     sort: Some(SortOrder::Asc),
//!     ..Default::default()
//! };
//! let page = client.fetch_pipelines(42, Some(&filter)).await?;
//! println!("{} of {:?} pipelines", page.len(), page.total_items);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod filters;
mod types;
mod urls;

pub use client::GitLabClient;
pub use error::{GitLabError, Result};
pub use filters::{JobFilter, OrderBy, PipelineFilter, PipelineScope, SortOrder};
pub use types::{
    ArtifactFile, Job, JobPipeline, JobStatus, MergeRequest, MergeRequestState, Paginated,
    Pipeline, PipelineSource, PipelineStatus,
};
