use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use headscan_core::{Headings, FETCH_FAILED_MESSAGE};

use super::*;

fn found(address: &str) -> HeadingResult {
    HeadingResult::from_page(address, Headings::H1Only(vec![format!("title of {address}")]))
}

fn addresses(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// -----------------------------------------------------------------------
// prepare_addresses / split_lines
// -----------------------------------------------------------------------

#[test]
fn prepare_addresses_trims_and_drops_blank_lines() {
    let prepared = prepare_addresses(["  a.com ", "", "   ", "\tb.com"]);
    assert_eq!(prepared, vec!["a.com".to_owned(), "b.com".to_owned()]);
}

#[test]
fn split_lines_handles_crlf() {
    let prepared = split_lines("a.com\r\n\r\nb.com\nc.com\n");
    assert_eq!(prepared, addresses(&["a.com", "b.com", "c.com"]));
}

#[test]
fn split_lines_of_whitespace_is_empty() {
    assert!(split_lines(" \n\t\n ").is_empty());
}

// -----------------------------------------------------------------------
// run_batch validation
// -----------------------------------------------------------------------

#[tokio::test]
async fn run_batch_rejects_all_blank_input() {
    let client = PageClient::new(5, "headscan-test/0.1").expect("client");
    let raw = addresses(&["", "   ", "\t"]);
    let result = run_batch(&client, &raw, ExtractionMode::H1Only, 4).await;
    assert_eq!(result.unwrap_err(), BatchError::EmptyBatch);
}

#[tokio::test]
async fn run_batch_rejects_empty_input() {
    let client = PageClient::new(5, "headscan-test/0.1").expect("client");
    let result = run_batch(&client, &[], ExtractionMode::H1H2H3, 4).await;
    assert_eq!(result.unwrap_err(), BatchError::EmptyBatch);
}

// -----------------------------------------------------------------------
// fan_out ordering and isolation
// -----------------------------------------------------------------------

#[tokio::test]
async fn results_follow_input_order_not_completion_order() {
    let input = addresses(&["slow", "medium", "fast"]);
    let results = fan_out(input, ExtractionMode::H1Only, 8, |address| async move {
        let delay = match address.as_str() {
            "slow" => 60,
            "medium" => 30,
            _ => 0,
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        found(&address)
    })
    .await;

    let urls: Vec<&str> = results.iter().map(|r| r.source_url.as_str()).collect();
    assert_eq!(urls, vec!["slow", "medium", "fast"]);
}

#[tokio::test]
async fn panicking_item_does_not_affect_the_others() {
    let input = addresses(&["ok-1", "boom", "ok-2"]);
    let results = fan_out(input, ExtractionMode::H1Only, 8, |address| async move {
        assert!(address != "boom", "parser exploded");
        found(&address)
    })
    .await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0], found("ok-1"));
    assert_eq!(results[2], found("ok-2"));
    assert_eq!(results[1].source_url, "boom");
    assert_eq!(results[1].error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    assert_eq!(results[1].headings, Headings::empty(ExtractionMode::H1Only));
}

#[tokio::test]
async fn fan_out_never_exceeds_max_concurrent() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let input: Vec<String> = (0..8).map(|i| format!("site-{i}.com")).collect();

    let results = fan_out(input, ExtractionMode::H1Only, 2, |address| {
        let in_flight = Arc::clone(&in_flight);
        let peak = Arc::clone(&peak);
        async move {
            let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
            found(&address)
        }
    })
    .await;

    assert_eq!(results.len(), 8);
    assert!(peak.load(Ordering::SeqCst) <= 2, "peak was {peak:?}");
    assert_eq!(results[7].source_url, "site-7.com");
}

#[tokio::test]
async fn zero_concurrency_is_treated_as_one() {
    let input = addresses(&["a", "b"]);
    let results = fan_out(input, ExtractionMode::H1Only, 0, |address| async move {
        found(&address)
    })
    .await;
    assert_eq!(results, vec![found("a"), found("b")]);
}

#[tokio::test]
async fn duplicate_addresses_each_get_a_record() {
    let input = addresses(&["same.com", "same.com"]);
    let calls = Arc::new(AtomicUsize::new(0));
    let results = fan_out(input, ExtractionMode::H1Only, 4, |address| {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            found(&address)
        }
    })
    .await;
    assert_eq!(results.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
