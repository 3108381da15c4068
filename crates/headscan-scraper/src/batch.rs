//! Batch coordinator: fans one extraction task out per address and
//! reassembles the outcomes in input order.
//!
//! Each address runs in its own spawned task, so a panic while fetching or
//! parsing one page is contained to that page's record. Completion order is
//! irrelevant: every task carries its input index and writes into its own slot.

use std::future::Future;

use futures::stream::{self, StreamExt};
use headscan_core::{ExtractionMode, HeadingResult};

use crate::client::PageClient;
use crate::error::BatchError;

/// Trims every line and drops the blank ones, preserving order.
#[must_use]
pub fn prepare_addresses<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits newline-separated text (`\n` or `\r\n`) into prepared addresses.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    prepare_addresses(text.lines())
}

/// Extracts headings from every address in `raw_addresses`.
///
/// Blank entries are dropped first; the returned vector has one record per
/// remaining address, in the same order. At most `max_concurrent` fetches are
/// in flight at once (values below 1 are treated as 1). The call returns only
/// after every address has produced a record.
///
/// # Errors
///
/// Returns [`BatchError::EmptyBatch`] when no address remains after blank
/// filtering. Per-address failures are never errors; they are recorded in the
/// corresponding [`HeadingResult`].
pub async fn run_batch(
    client: &PageClient,
    raw_addresses: &[String],
    mode: ExtractionMode,
    max_concurrent: usize,
) -> Result<Vec<HeadingResult>, BatchError> {
    let addresses = prepare_addresses(raw_addresses);
    if addresses.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    let results = fan_out(addresses, mode, max_concurrent, |address| {
        let client = client.clone();
        async move { client.extract(&address, mode).await }
    })
    .await;

    let failed = results.iter().filter(|r| r.is_failure()).count();
    tracing::info!(
        total = results.len(),
        failed,
        mode = ?mode,
        "batch extraction finished"
    );

    Ok(results)
}

/// Runs `extract` once per address on its own task and returns the results
/// positionally aligned with `addresses`.
///
/// A task that panics or is cancelled becomes a fetch-failure record for its
/// address; every other task still runs to completion.
async fn fan_out<F, Fut>(
    addresses: Vec<String>,
    mode: ExtractionMode,
    max_concurrent: usize,
    extract: F,
) -> Vec<HeadingResult>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = HeadingResult> + Send + 'static,
{
    let mut slots: Vec<Option<HeadingResult>> = vec![None; addresses.len()];

    let outcomes: Vec<(usize, HeadingResult)> = stream::iter(addresses.clone().into_iter().enumerate())
        .map(|(index, address): (usize, String)| {
            let task = tokio::spawn(extract(address.clone()));
            async move {
                let result = match task.await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!(
                            index,
                            address = %address,
                            error = %e,
                            "extraction task did not complete"
                        );
                        HeadingResult::fetch_failed(address.as_str(), mode)
                    }
                };
                (index, result)
            }
        })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    for (index, result) in outcomes {
        slots[index] = Some(result);
    }

    slots
        .into_iter()
        .zip(addresses)
        .map(|(slot, address)| slot.unwrap_or_else(|| HeadingResult::fetch_failed(address, mode)))
        .collect()
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
