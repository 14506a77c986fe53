use serde::{Deserialize, Serialize};

/// A GitLab CI/CD pipeline execution.
///
/// One pipeline run tied to a commit and git reference, as returned by the
/// pipeline list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Pipeline ID, unique across the GitLab instance
    pub id: u64,
    /// Final or current pipeline status
    pub status: PipelineStatus,
    /// What triggered the pipeline (e.g., "push", "schedule", "web")
    pub source: PipelineSource,
    /// Commit SHA the pipeline ran against
    pub sha: String,
    /// Git reference that triggered the pipeline (e.g., "main")
    #[serde(rename = "ref")]
    pub ref_: String,
    /// ID of the project the pipeline belongs to
    pub project_id: u64,
}

/// Status of a pipeline, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Created,
    WaitingForResource,
    Preparing,
    Pending,
    Running,
    Success,
    Failed,
    Canceled,
    Skipped,
    Manual,
    Scheduled,
}

/// Trigger source of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineSource {
    Web,
    MergeRequestEvent,
    Api,
    Chat,
    External,
    ExternalPullRequestEvent,
    OndemandDastScan,
    OndemandDastValidation,
    ParentPipeline,
    Pipeline,
    Push,
    Schedule,
    SecurityOrchestrationPolicy,
    Trigger,
    Webide,
}

/// A job within a GitLab CI/CD pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job ID, unique across the GitLab instance
    pub id: u64,
    /// Final or current job status
    pub status: JobStatus,
    /// Job name as defined in .gitlab-ci.yml
    pub name: String,
    /// Summary of the pipeline the job ran in
    pub pipeline: JobPipeline,
    /// Archive produced by the job, absent when it produced none
    #[serde(default)]
    pub artifacts_file: Option<ArtifactFile>,
}

/// Status of a job, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Success,
    Failed,
    Canceled,
    Skipped,
    Pending,
    Running,
}

/// The pipeline summary embedded in a [`Job`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPipeline {
    pub id: u64,
    pub project_id: u64,
    pub status: PipelineStatus,
    pub sha: String,
}

/// Descriptor of the artifacts archive attached to a [`Job`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactFile {
    /// Archive file name (e.g., "artifacts.zip")
    pub filename: String,
    /// Archive size in bytes
    pub size: u64,
    /// Archive format (e.g., "zip", "raw")
    pub file_format: Option<String>,
    /// Artifact kind (e.g., "archive", "trace")
    pub file_type: Option<String>,
}

/// A GitLab merge request.
///
/// Part of the public vocabulary of the API subset; no exposed operation
/// returns it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeRequest {
    /// Merge request ID, unique across the GitLab instance
    pub id: u64,
    /// Internal ID, unique within the project
    pub iid: u64,
    /// Merge request name
    pub name: String,
    /// ID of the project the merge request belongs to
    pub project_id: u64,
    /// Current state of the merge request
    pub state: MergeRequestState,
    /// Whether the merge request is marked as a draft
    pub draft: bool,
    /// Head commit SHA of the source branch
    pub sha: String,
}

/// State of a merge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeRequestState {
    Opened,
    Closed,
    Locked,
    Merged,
}

/// One page of a listed collection together with the pagination metadata
/// GitLab reports in response headers.
///
/// `items` holds the current page only; `total_items` counts the whole
/// remote collection across pages, so the two do not have to agree. A
/// counter is `None` when the server omitted the corresponding header.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Page size, from `x-per-page`
    pub per_page: Option<u64>,
    /// Number of pages in the collection, from `x-total-pages`
    pub total_pages: Option<u64>,
    /// Number of items in the collection, from `x-total`
    pub total_items: Option<u64>,
}

impl<T> Paginated<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_deserializes_from_api_shape() {
        let json = r#"{
            "id": 47,
            "status": "success",
            "source": "push",
            "sha": "a91957a858320c0e17f3a0eca7cfacbff50ea29a",
            "ref": "main",
            "project_id": 42,
            "web_url": "https://gitlab.example.com/group/project/-/pipelines/47"
        }"#;

        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert_eq!(pipeline.id, 47);
        assert_eq!(pipeline.status, PipelineStatus::Success);
        assert_eq!(pipeline.source, PipelineSource::Push);
        assert_eq!(pipeline.ref_, "main");
        assert_eq!(pipeline.project_id, 42);
    }

    #[test]
    fn test_pipeline_status_covers_wire_literals() {
        for literal in [
            "created",
            "waiting_for_resource",
            "preparing",
            "pending",
            "running",
            "success",
            "failed",
            "canceled",
            "skipped",
            "manual",
            "scheduled",
        ] {
            let status: PipelineStatus =
                serde_json::from_str(&format!("\"{literal}\"")).unwrap();
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{literal}\""));
        }
    }

    #[test]
    fn test_unknown_status_literal_is_rejected() {
        let result = serde_json::from_str::<PipelineStatus>("\"exploded\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_pipeline_source_merge_request_event() {
        let source: PipelineSource =
            serde_json::from_str("\"merge_request_event\"").unwrap();
        assert_eq!(source, PipelineSource::MergeRequestEvent);
    }

    #[test]
    fn test_job_deserializes_with_artifacts() {
        let json = r#"{
            "id": 7,
            "status": "failed",
            "name": "rspec:other",
            "pipeline": {
                "id": 6,
                "project_id": 1,
                "status": "running",
                "sha": "0ff3ae198f8601a285adcf5c0fff204ee6fba5fd"
            },
            "artifacts_file": {
                "filename": "artifacts.zip",
                "size": 1000,
                "file_format": "zip",
                "file_type": "archive"
            }
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.pipeline.status, PipelineStatus::Running);
        let artifacts = job.artifacts_file.unwrap();
        assert_eq!(artifacts.filename, "artifacts.zip");
        assert_eq!(artifacts.size, 1000);
    }

    #[test]
    fn test_job_without_artifacts() {
        let json = r#"{
            "id": 8,
            "status": "success",
            "name": "lint",
            "pipeline": {
                "id": 6,
                "project_id": 1,
                "status": "success",
                "sha": "0ff3ae198f8601a285adcf5c0fff204ee6fba5fd"
            },
            "artifacts_file": null
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.name, "lint");
        assert!(job.artifacts_file.is_none());

        // The API omits the key entirely for most artifact-less jobs.
        let json = r#"{
            "id": 9,
            "status": "pending",
            "name": "deploy",
            "pipeline": {
                "id": 6,
                "project_id": 1,
                "status": "running",
                "sha": "0ff3ae198f8601a285adcf5c0fff204ee6fba5fd"
            }
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.artifacts_file.is_none());
    }

    #[test]
    fn test_merge_request_deserializes() {
        let json = r#"{
            "id": 1,
            "iid": 1,
            "name": "Add new feature",
            "project_id": 3,
            "state": "opened",
            "draft": false,
            "sha": "8888888888888888888888888888888888888888"
        }"#;

        let mr: MergeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(mr.iid, 1);
        assert_eq!(mr.state, MergeRequestState::Opened);
        assert!(!mr.draft);
    }

    #[test]
    fn test_paginated_len() {
        let page = Paginated {
            items: vec![1, 2, 3],
            per_page: Some(20),
            total_pages: Some(5),
            total_items: Some(93),
        };
        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());

        let empty: Paginated<u64> = Paginated {
            items: vec![],
            per_page: None,
            total_pages: None,
            total_items: None,
        };
        assert!(empty.is_empty());
    }
}
