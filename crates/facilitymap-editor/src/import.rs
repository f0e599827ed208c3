//! Bulk pin import from `asset_id,x,y` CSV text.
//!
//! Parsing never fails as a whole. Every non-blank line becomes an
//! [`ImportRow`], valid or not, so the caller can show exactly which lines
//! were rejected and why. Only valid rows are merged.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{AssetPin, Floor, Point};

/// Why a CSV line was rejected. The display strings are user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Expected 3 columns")]
    ColumnCount,
    #[error("Missing asset_id")]
    MissingAssetId,
    #[error("x/y must be numbers")]
    InvalidCoordinates,
}

/// A validated pin row.
#[derive(Debug, Clone, PartialEq)]
pub struct PinRow {
    pub asset_id: String,
    pub position: Point,
}

/// One non-blank input line, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportRow {
    Valid { line: usize, row: PinRow },
    Invalid { line: usize, raw: String, reason: RowError },
}

impl ImportRow {
    pub fn line(&self) -> usize {
        match self {
            ImportRow::Valid { line, .. } | ImportRow::Invalid { line, .. } => *line,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ImportRow::Valid { .. })
    }
}

/// Parsed CSV, rows in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinImport {
    rows: Vec<ImportRow>,
}

impl PinImport {
    pub fn rows(&self) -> &[ImportRow] {
        &self.rows
    }

    pub fn valid_rows(&self) -> impl Iterator<Item = &PinRow> {
        self.rows.iter().filter_map(|r| match r {
            ImportRow::Valid { row, .. } => Some(row),
            ImportRow::Invalid { .. } => None,
        })
    }

    pub fn invalid_rows(&self) -> impl Iterator<Item = &ImportRow> {
        self.rows.iter().filter(|r| !r.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.valid_rows().count()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_rows().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `floor` with the valid rows merged into its pins.
    pub fn apply(&self, floor: &Floor) -> Floor {
        let rows: Vec<PinRow> = self.valid_rows().cloned().collect();
        let mut next = floor.clone();
        next.pins = merge_pins(&floor.pins, &rows);
        tracing::debug!(
            floor = %floor.name,
            merged = rows.len(),
            rejected = self.invalid_count(),
            "Applied pin import"
        );
        next
    }
}

/// Parses CSV text. A first line mentioning `asset_id` is treated as a header.
pub fn parse_pin_csv(text: &str) -> PinImport {
    let mut rows = Vec::new();
    let mut first = true;

    for (index, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        if std::mem::take(&mut first) && raw.to_ascii_lowercase().contains("asset_id") {
            continue;
        }

        let line = index + 1;
        let row = match parse_row(raw) {
            Ok(row) => ImportRow::Valid { line, row },
            Err(reason) => ImportRow::Invalid {
                line,
                raw: raw.to_string(),
                reason,
            },
        };
        rows.push(row);
    }

    PinImport { rows }
}

fn parse_row(raw: &str) -> Result<PinRow, RowError> {
    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    // Columns past the third (notes, trailing commas) are ignored.
    let [asset_id, x, y, ..] = fields.as_slice() else {
        return Err(RowError::ColumnCount);
    };
    if asset_id.is_empty() {
        return Err(RowError::MissingAssetId);
    }
    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;
    Ok(PinRow {
        asset_id: asset_id.to_string(),
        position: Point::new(x, y),
    })
}

fn parse_coordinate(field: &str) -> Result<f64, RowError> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(RowError::InvalidCoordinates)
}

/// Replace-by-identity merge: existing pins for any imported asset are
/// dropped, then one default-styled pin per imported asset is appended.
/// An asset listed twice keeps its last position.
pub fn merge_pins(existing: &[AssetPin], rows: &[PinRow]) -> Vec<AssetPin> {
    let incoming: HashSet<&str> = rows.iter().map(|r| r.asset_id.as_str()).collect();
    let mut pins: Vec<AssetPin> = existing
        .iter()
        .filter(|p| !incoming.contains(p.asset_id.as_str()))
        .cloned()
        .collect();
    let kept = pins.len();

    for row in rows {
        match pins[kept..].iter_mut().find(|p| p.asset_id == row.asset_id) {
            Some(pin) => pin.position = row.position,
            None => pins.push(AssetPin::new(&row.asset_id, row.position)),
        }
    }
    pins
}
