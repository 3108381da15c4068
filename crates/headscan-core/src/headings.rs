//! Heading levels, extraction modes, and the per-address result record.

use serde::{Deserialize, Serialize};

/// Message recorded when a page could not be fetched or processed.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Lowercase HTML tag name, usable directly as a CSS type selector.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// Which heading levels a batch extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    H1Only,
    H1H2H3,
}

impl ExtractionMode {
    #[must_use]
    pub fn levels(self) -> &'static [HeadingLevel] {
        match self {
            ExtractionMode::H1Only => &[HeadingLevel::H1],
            ExtractionMode::H1H2H3 => &[HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3],
        }
    }

    /// Message recorded when the page was fetched but none of the requested
    /// levels matched.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            ExtractionMode::H1Only => "No H1 tags found",
            ExtractionMode::H1H2H3 => "No heading tags found",
        }
    }
}

/// Heading texts per requested level, each in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headings {
    H1Only(Vec<String>),
    H1H2H3 {
        h1: Vec<String>,
        h2: Vec<String>,
        h3: Vec<String>,
    },
}

impl Headings {
    /// Present-but-empty headings shaped for `mode`.
    #[must_use]
    pub fn empty(mode: ExtractionMode) -> Self {
        match mode {
            ExtractionMode::H1Only => Headings::H1Only(Vec::new()),
            ExtractionMode::H1H2H3 => Headings::H1H2H3 {
                h1: Vec::new(),
                h2: Vec::new(),
                h3: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn mode(&self) -> ExtractionMode {
        match self {
            Headings::H1Only(_) => ExtractionMode::H1Only,
            Headings::H1H2H3 { .. } => ExtractionMode::H1H2H3,
        }
    }

    /// Texts for `level`. Levels outside the mode return an empty slice.
    #[must_use]
    pub fn level(&self, level: HeadingLevel) -> &[String] {
        match (self, level) {
            (Headings::H1Only(h1) | Headings::H1H2H3 { h1, .. }, HeadingLevel::H1) => h1.as_slice(),
            (Headings::H1H2H3 { h2, .. }, HeadingLevel::H2) => h2.as_slice(),
            (Headings::H1H2H3 { h3, .. }, HeadingLevel::H3) => h3.as_slice(),
            (Headings::H1Only(_), _) => &[],
        }
    }

    /// `true` when every requested level is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mode()
            .levels()
            .iter()
            .all(|level| self.level(*level).is_empty())
    }
}

/// Outcome for one input address. Exactly one per address per batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingResult {
    /// Normalized URL that was fetched, or the raw address when the fetch failed.
    pub source_url: String,
    pub headings: Headings,
    pub error: Option<String>,
}

impl HeadingResult {
    /// Builds the record for a successfully fetched page.
    ///
    /// When no requested level matched, `error` carries the mode's
    /// "none found" message and the headings stay present-but-empty.
    #[must_use]
    pub fn from_page(source_url: impl Into<String>, headings: Headings) -> Self {
        let error = headings
            .is_empty()
            .then(|| headings.mode().empty_message().to_owned());
        Self {
            source_url: source_url.into(),
            headings,
            error,
        }
    }

    /// Builds the record for a page that could not be fetched or processed.
    #[must_use]
    pub fn fetch_failed(raw_address: impl Into<String>, mode: ExtractionMode) -> Self {
        Self {
            source_url: raw_address.into(),
            headings: Headings::empty(mode),
            error: Some(FETCH_FAILED_MESSAGE.to_owned()),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Wire shape of one result, shared by the HTTP API and the CLI's JSON output.
///
/// `id` is the 1-based position in the batch and is assigned here, at the
/// presentation boundary, never inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingRecord {
    pub id: usize,
    pub url: String,
    pub h1_texts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2_texts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3_texts: Option<Vec<String>>,
    pub error: Option<String>,
}

impl HeadingRecord {
    #[must_use]
    pub fn new(id: usize, result: &HeadingResult) -> Self {
        let (h1_texts, h2_texts, h3_texts) = match &result.headings {
            Headings::H1Only(h1) => (Some(h1.clone()), None, None),
            Headings::H1H2H3 { h1, h2, h3 } => {
                (Some(h1.clone()), Some(h2.clone()), Some(h3.clone()))
            }
        };
        Self {
            id,
            url: result.source_url.clone(),
            h1_texts,
            h2_texts,
            h3_texts,
            error: result.error.clone(),
        }
    }

    /// Numbers `results` from 1 in batch order.
    #[must_use]
    pub fn from_batch(results: &[HeadingResult]) -> Vec<Self> {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| Self::new(index + 1, result))
            .collect()
    }
}
