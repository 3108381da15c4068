//! `extract` command: read addresses, run one batch, render the results.

use std::path::Path;

use anyhow::Context;
use headscan_core::ExtractionMode;
use headscan_scraper::{BatchError, PageClient};
use tokio::io::AsyncReadExt;

use crate::render::render;
use crate::OutputFormat;

#[derive(Debug, Clone)]
pub(crate) struct ExtractOptions {
    pub mode: ExtractionMode,
    pub format: OutputFormat,
    pub max_concurrent: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Reads newline-separated addresses from `input` (stdin when `None`),
/// extracts their headings, and writes the rendered output to `output`
/// (stdout when `None`).
///
/// # Errors
///
/// Returns an error if the input cannot be read, no address is left after
/// dropping blank lines, or the output cannot be written. Individual page
/// failures are part of the rendered output, not errors.
pub(crate) async fn run_extract(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &ExtractOptions,
) -> anyhow::Result<()> {
    let text = read_input(input).await?;
    let rendered = extract_text(&text, options).await?;

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("failed to write results to {}", path.display()))?;
            tracing::info!(path = %path.display(), "results written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Runs a batch over the addresses in `text` and renders it per `options.format`.
pub(crate) async fn extract_text(text: &str, options: &ExtractOptions) -> anyhow::Result<String> {
    let addresses = headscan_scraper::split_lines(text);

    let client = PageClient::new(options.timeout_secs, &options.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build page client: {e}"))?;

    let results = headscan_scraper::run_batch(
        &client,
        &addresses,
        options.mode,
        options.max_concurrent,
    )
    .await
    .map_err(|e| match e {
        BatchError::EmptyBatch => anyhow::anyhow!("please enter at least one URL"),
    })?;

    render(&results, options.mode, options.format)
}

async fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read addresses from {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read addresses from stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn options(mode: ExtractionMode, format: OutputFormat) -> ExtractOptions {
        ExtractOptions {
            mode,
            format,
            max_concurrent: 4,
            timeout_secs: 5,
            user_agent: "headscan-test/0.1".to_owned(),
        }
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        let err = extract_text("\n   \n", &options(ExtractionMode::H1Only, OutputFormat::Json))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "please enter at least one URL");
    }

    #[tokio::test]
    async fn tsv_listing_for_mixed_batch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<h1>One</h1><h1>Two</h1>", "text/html"),
            )
            .mount(&server)
            .await;

        let text = format!("{}\n\nno-such-host.invalid\n", server.uri());
        let rendered = extract_text(&text, &options(ExtractionMode::H1Only, OutputFormat::Tsv))
            .await
            .expect("extract");

        assert_eq!(
            rendered,
            format!(
                "{}\tOne | Two\nno-such-host.invalid\tFailed to fetch URL\n",
                server.uri()
            )
        );
    }

    #[tokio::test]
    async fn input_file_is_read() {
        let dir = std::env::temp_dir().join(format!("headscan-cli-test-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.expect("mkdir");
        let file = dir.join("urls.txt");
        tokio::fs::write(&file, "a.com\nb.com\n").await.expect("write");

        let text = read_input(Some(&file)).await.expect("read");
        assert_eq!(headscan_scraper::split_lines(&text), vec!["a.com", "b.com"]);

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn missing_input_file_is_an_error() {
        let err = read_input(Some(Path::new("/definitely/not/here/urls.txt")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read addresses"));
    }
}
