pub mod batch;
pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;

pub use batch::{prepare_addresses, run_batch, split_lines};
pub use client::PageClient;
pub use error::{BatchError, ScraperError};
pub use normalize::normalize_url;
pub use parse::extract_headings;
