// File: crates/cascade-core/src/series.rs
// Summary: Waterfall data model: raw records, cumulative interval segments, total row.
// Notes:
// - Segments are rebuilt from scratch on every pass; nothing here mutates a
//   segment after construction.
// - The builder never fails. Strict callers can run `validate_records` ahead
//   of it; the default path lets NaN flow into degenerate geometry instead
//   of aborting the render.

use thiserror::Error;

/// One input record: a category label and a signed amount.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub category: String,
    pub amount: f64,
}

impl RawRecord {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self { category: category.into(), amount }
    }
}

/// Vertical range a segment's bar spans, as running cumulative values.
/// The first bar starts at 0; the synthetic total row is stored
/// `[grand_total, 0]` and draws descending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    /// Signed per-bar change; what the tooltip reports.
    pub fn delta(&self) -> f64 {
        self.end - self.start
    }
}

/// One bar's derived cumulative record.
/// Invariant: for non-total segments past the first, `interval.start` equals
/// the previous segment's `interval.end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub category: String,
    /// 0-based position in the output sequence; the total row gets the next
    /// index after the last input record.
    pub index: usize,
    pub interval: Interval,
    /// True only for the synthetic grand-total row.
    pub is_total: bool,
}

/// Sum of raw amounts (not of segment intervals). NaN propagates.
pub fn grand_total(records: &[RawRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

/// Build the ordered segment list from raw records.
///
/// Each segment chains off the previous one's end value; passing a label
/// appends the synthetic total row `[grand_total, 0]` at index
/// `records.len()`. Zero and non-finite amounts flow through unchanged, and
/// accumulated floating-point drift is not corrected.
pub fn build_segments(records: &[RawRecord], total_label: Option<&str>) -> Vec<Segment> {
    let mut out = Vec::with_capacity(records.len() + usize::from(total_label.is_some()));
    let mut cursor = 0.0f64;
    for (index, record) in records.iter().enumerate() {
        let interval = Interval::new(cursor, cursor + record.amount);
        cursor = interval.end;
        out.push(Segment {
            category: record.category.clone(),
            index,
            interval,
            is_total: false,
        });
    }
    if let Some(label) = total_label {
        out.push(Segment {
            category: label.to_string(),
            index: records.len(),
            interval: Interval::new(grand_total(records), 0.0),
            is_total: true,
        });
    }
    out
}

/// Rejected input for callers that opt into strict validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("record {index} ({category:?}) has a non-finite amount")]
    NonFiniteAmount { index: usize, category: String },
    #[error("record {index} has an empty category label")]
    EmptyCategory { index: usize },
}

/// Optional strict layer ahead of [`build_segments`] for callers that prefer
/// hard failures. The builder itself never runs this.
pub fn validate_records(records: &[RawRecord]) -> Result<(), DataError> {
    for (index, record) in records.iter().enumerate() {
        if record.category.is_empty() {
            return Err(DataError::EmptyCategory { index });
        }
        if !record.amount.is_finite() {
            return Err(DataError::NonFiniteAmount {
                index,
                category: record.category.clone(),
            });
        }
    }
    Ok(())
}
