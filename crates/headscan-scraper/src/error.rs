use thiserror::Error;

/// Failure while fetching a single page. Never crosses the batch boundary:
/// the extractor folds it into the page's [`headscan_core::HeadingResult`].
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Rejection of a batch as a whole. No per-item records are produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("no URLs provided: every address was blank")]
    EmptyBatch,
}
