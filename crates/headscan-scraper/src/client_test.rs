use super::*;

fn test_client() -> PageClient {
    PageClient::new(5, "headscan-test/0.1").expect("failed to build test PageClient")
}

#[tokio::test]
async fn fetch_html_rejects_relative_address() {
    let err = test_client().fetch_html("httpbin.org").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidUrl { ref url, .. } if url == "httpbin.org"),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_html_rejects_scheme_without_host() {
    let err = test_client().fetch_html("https://").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidUrl { .. }),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[tokio::test]
async fn extract_turns_invalid_url_into_fetch_failure() {
    let result = test_client()
        .extract("  httpbin.org  ", ExtractionMode::H1Only)
        .await;
    assert_eq!(result.source_url, "httpbin.org");
    assert_eq!(result.error.as_deref(), Some(headscan_core::FETCH_FAILED_MESSAGE));
    assert_eq!(result.headings, Headings::empty(ExtractionMode::H1Only));
}

#[test]
fn invalid_url_error_names_the_url() {
    let err = ScraperError::InvalidUrl {
        url: "nope".to_owned(),
        reason: "relative URL without a base".to_owned(),
    };
    assert_eq!(
        err.to_string(),
        "invalid URL \"nope\": relative URL without a base"
    );
}
