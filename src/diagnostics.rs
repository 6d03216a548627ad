//! Diagnostic records and sinks.
//!
//! After every grid change the affected tiles are described and handed to a
//! [`DiagnosticSink`]. The default sink writes one JSON line per tile to the log.

use log::info;
use serde::Serialize;

use crate::tile::{ShapeKind, TextColor};

/// `{ "tile": { ... } }` wrapper around a [`TileRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileDescription {
    pub tile: TileRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub shape: ShapeKind,
    #[serde(rename = "shapeRGB")]
    pub shape_rgb: String,
    pub width: i32,
    pub height: i32,
    pub font_size: i32,
    pub font_color: TextColor,
    pub letter: char,
}

impl TileDescription {
    /// Single-line JSON form.
    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Receiver of tile descriptions.
pub trait DiagnosticSink {
    /// Called once before the records of a paint.
    fn begin_paint(&mut self) {}

    fn record(&mut self, description: &TileDescription);
}

/// Writes descriptions to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn begin_paint(&mut self) {
        info!("Start paint...");
    }

    fn record(&mut self, description: &TileDescription) {
        info!("{}", description.to_json());
    }
}

/// Keeps every paint in memory, one batch per `begin_paint`.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub batches: Vec<Vec<TileDescription>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_batch(&self) -> Option<&[TileDescription]> {
        self.batches.last().map(Vec::as_slice)
    }
}

impl DiagnosticSink for MemorySink {
    fn begin_paint(&mut self) {
        self.batches.push(Vec::new());
    }

    fn record(&mut self, description: &TileDescription) {
        match self.batches.last_mut() {
            Some(batch) => batch.push(description.clone()),
            None => self.batches.push(vec![description.clone()]),
        }
    }
}
