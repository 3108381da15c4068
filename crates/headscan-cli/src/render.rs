//! Output renderers: JSON records, clipboard-style listing, and CSV export.

use headscan_core::{ExtractionMode, HeadingLevel, HeadingRecord, HeadingResult};

use crate::OutputFormat;

const HEADING_SEPARATOR: &str = " | ";

/// Renders `results` in the requested format. Output always ends in a newline.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn render(
    results: &[HeadingResult],
    mode: ExtractionMode,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => render_json(results),
        OutputFormat::Tsv => Ok(render_listing(results, mode)),
        OutputFormat::Csv => Ok(render_csv(results, mode)),
    }
}

fn render_json(results: &[HeadingResult]) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(&HeadingRecord::from_batch(results))?;
    json.push('\n');
    Ok(json)
}

/// H1 mode: one `url<TAB>h1 | h1` line per page, the error in place of the
/// headings when there are none. Multi-level mode: one block per page with a
/// line per level, blocks separated by a blank line.
fn render_listing(results: &[HeadingResult], mode: ExtractionMode) -> String {
    let mut out = match mode {
        ExtractionMode::H1Only => results
            .iter()
            .map(|result| {
                let h1 = result.headings.level(HeadingLevel::H1);
                let text = if h1.is_empty() {
                    result.error.clone().unwrap_or_default()
                } else {
                    h1.join(HEADING_SEPARATOR)
                };
                format!("{}\t{text}", result.source_url)
            })
            .collect::<Vec<_>>()
            .join("\n"),
        ExtractionMode::H1H2H3 => results
            .iter()
            .map(|result| {
                let mut block = result.source_url.clone();
                for level in mode.levels() {
                    let texts = result.headings.level(*level);
                    let line = if texts.is_empty() {
                        format!("No {level} tags")
                    } else {
                        texts.join(HEADING_SEPARATOR)
                    };
                    block.push_str(&format!("\n{level}: {line}"));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    };
    out.push('\n');
    out
}

/// Spreadsheet export: `URL`, then `H1 Tag 1..n` (and `H2`/`H3` columns in
/// multi-level mode) sized to the page with the most headings, then `Error`.
fn render_csv(results: &[HeadingResult], mode: ExtractionMode) -> String {
    let widths: Vec<(HeadingLevel, usize)> = mode
        .levels()
        .iter()
        .map(|level| {
            let width = results
                .iter()
                .map(|r| r.headings.level(*level).len())
                .max()
                .unwrap_or(0);
            (*level, width)
        })
        .collect();

    let mut header = vec!["URL".to_owned()];
    for (level, width) in &widths {
        header.extend((1..=*width).map(|n| format!("{level} Tag {n}")));
    }
    header.push("Error".to_owned());

    let mut out = csv_row(&header);
    for result in results {
        let mut row = vec![result.source_url.clone()];
        for (level, width) in &widths {
            let texts = result.headings.level(*level);
            row.extend((0..*width).map(|i| texts.get(i).cloned().unwrap_or_default()));
        }
        row.push(result.error.clone().unwrap_or_default());
        out.push_str(&csv_row(&row));
    }
    out
}

fn csv_row(fields: &[String]) -> String {
    let mut row = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push_str("\r\n");
    row
}

/// Quotes a field when it contains a delimiter, quote, or line break,
/// doubling embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
