/// Strips every leading `/` from a path segment.
///
/// Callers hand in paths like `/projects/1/pipelines` or `///binaries/app`;
/// the REST prefix is joined with exactly one separator, so the segment
/// itself must carry none.
pub(crate) fn trim_leading_slashes(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Builds the full request URL for a v4 REST path.
///
/// `base_url` is already normalized by the client constructor, so plain
/// formatting is enough here.
pub(crate) fn api_url(base_url: &str, path: &str) -> String {
    format!("{}/api/v4/{}", base_url, trim_leading_slashes(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_leading_slashes() {
        assert_eq!(trim_leading_slashes("projects/1"), "projects/1");
        assert_eq!(trim_leading_slashes("/projects/1"), "projects/1");
        assert_eq!(trim_leading_slashes("///projects/1"), "projects/1");
    }

    #[test]
    fn test_trim_leaves_inner_slashes_alone() {
        assert_eq!(
            trim_leading_slashes("/projects/1/jobs/2/artifacts/bin/app"),
            "projects/1/jobs/2/artifacts/bin/app"
        );
    }

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("https://gitlab.example.com", "/projects/42/pipelines"),
            "https://gitlab.example.com/api/v4/projects/42/pipelines"
        );
    }
}
