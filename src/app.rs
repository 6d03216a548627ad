//! Mosaic session.
//!
//! Binds the user actions (randomize all, randomize one, save a new size) to
//! the grid controller. After each change the grid is laid out on the
//! surface and the affected tiles are handed to the diagnostic sink.

use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::diagnostics::DiagnosticSink;
use crate::error::{MosaicError, Result};
use crate::grid::GridController;
use crate::render::{Surface, SurfaceSize, layout_grid, paint_grid};

/// Parse one size field typed by the user.
pub fn parse_dimension(field: &'static str, text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| MosaicError::ParseFailure {
        field,
        input: text.to_string(),
    })
}

/// Front-end command read from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RandomizeAll,
    RandomizeOne,
    /// Raw field texts, parsed by [`Mosaic::save_values`].
    SaveValues { rows: String, cols: String },
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Returns `None` for blank, unknown or over-long input.
    pub fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let command = match words.next()?.to_ascii_lowercase().as_str() {
            "all" | "a" => Command::RandomizeAll,
            "one" | "o" => Command::RandomizeOne,
            "size" | "s" => Command::SaveValues {
                rows: words.next().unwrap_or("").to_string(),
                cols: words.next().unwrap_or("").to_string(),
            },
            "show" | "p" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => return None,
        };
        let extra: Vec<&str> = words.collect();
        if !extra.is_empty() {
            warn!("[Mosaic] Rejected command with trailing input: {:?}", extra);
            return None;
        }
        Some(command)
    }
}

pub const HELP: &str = "Commands:
  all               randomize all tiles
  one               randomize one tile
  size <rows> <cols> save new rows and columns and regenerate the grid
  show              print the grid
  help              show this message
  quit              exit";

pub struct Mosaic<S, R = StdRng> {
    grid: GridController<R>,
    size: SurfaceSize,
    sink: S,
}

impl<S: DiagnosticSink> Mosaic<S, StdRng> {
    /// Default 12x12 mosaic on the default surface.
    pub fn new(sink: S) -> Result<Self> {
        let grid = GridController::new(DEFAULT_ROWS as i64, DEFAULT_COLS as i64)?;
        Ok(Self::with_grid(grid, SurfaceSize::default(), sink))
    }
}

impl<S: DiagnosticSink, R: Rng> Mosaic<S, R> {
    /// Wrap an existing grid and emit its first paint.
    pub fn with_grid(grid: GridController<R>, size: SurfaceSize, sink: S) -> Self {
        let mut mosaic = Self { grid, size, sink };
        mosaic.layout();
        mosaic.emit_all();
        mosaic
    }

    /// "Randomize All" action.
    pub fn randomize_all(&mut self) {
        self.grid.randomize_all();
        self.emit_all();
    }

    /// "Randomize One Tile" action. Returns the index of the changed tile.
    pub fn randomize_one(&mut self) -> Option<usize> {
        let index = self.grid.randomize_one()?;
        self.sink.begin_paint();
        self.sink.record(&self.grid.tiles()[index].describe());
        Some(index)
    }

    /// Resize the grid. On error nothing changes and nothing is emitted.
    pub fn resize(&mut self, rows: i64, cols: i64) -> Result<()> {
        self.grid.resize(rows, cols)?;
        self.layout();
        self.emit_all();
        Ok(())
    }

    /// "Save Values" action: parse both size fields, then resize.
    pub fn save_values(&mut self, rows_text: &str, cols_text: &str) -> Result<()> {
        let parsed = parse_dimension("rows", rows_text)
            .and_then(|rows| Ok((rows, parse_dimension("cols", cols_text)?)));
        let (rows, cols) = parsed.inspect_err(|e| warn!("[Mosaic] Rejected input: {}", e))?;
        self.resize(rows, cols)
    }

    /// Run one front-end command. Returns `false` when the session should end.
    pub fn dispatch(&mut self, command: &Command) -> Result<bool> {
        debug!("[Mosaic] Dispatch {:?}", command);
        match command {
            Command::RandomizeAll => self.randomize_all(),
            Command::RandomizeOne => {
                self.randomize_one();
            }
            Command::SaveValues { rows, cols } => self.save_values(rows, cols)?,
            Command::Show | Command::Help => {}
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

impl<S, R> Mosaic<S, R> {
    /// Change the drawing area. Tiles are laid out again but not re-emitted.
    pub fn set_surface_size(&mut self, size: SurfaceSize) {
        self.size = size;
        self.layout();
    }

    /// Draw every tile onto `surface`.
    pub fn paint<T: Surface + ?Sized>(&mut self, surface: &mut T) {
        paint_grid(&mut self.grid, self.size, surface);
    }

    pub fn grid(&self) -> &GridController<R> {
        &self.grid
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn layout(&mut self) {
        layout_grid(&mut self.grid, self.size);
    }
}

impl<S: DiagnosticSink, R> Mosaic<S, R> {
    fn emit_all(&mut self) {
        self.sink.begin_paint();
        for tile in self.grid.tiles() {
            self.sink.record(&tile.describe());
        }
    }
}
