//! Grid controller.
//!
//! Owns the tiles of the mosaic in row-major order together with the random
//! generator that feeds them. The tile count always equals rows x cols.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::grid::MAX_TILES;
use crate::error::{MosaicError, Result};
use crate::tile::Tile;

/// Build `rows * cols` random tiles in row-major order.
pub fn generate_tiles<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Vec<Tile> {
    (0..rows * cols).map(|_| Tile::random(rng)).collect()
}

/// Check requested dimensions and convert them to sizes.
///
/// Both values must be positive and their product must not exceed [`MAX_TILES`].
pub fn checked_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
    let invalid = || MosaicError::InvalidDimension { rows, cols };

    if rows <= 0 || cols <= 0 {
        return Err(invalid());
    }
    let r = usize::try_from(rows).map_err(|_| invalid())?;
    let c = usize::try_from(cols).map_err(|_| invalid())?;
    match r.checked_mul(c) {
        Some(count) if count <= MAX_TILES => Ok((r, c)),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Clone)]
pub struct GridController<R = StdRng> {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
    rng: R,
}

impl GridController<StdRng> {
    /// Create a grid seeded from the operating system.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        Self::with_rng(rows, cols, StdRng::from_os_rng())
    }

    /// Create a grid whose draws are reproducible from `seed`.
    pub fn seeded(rows: i64, cols: i64, seed: u64) -> Result<Self> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridController<R> {
    pub fn with_rng(rows: i64, cols: i64, mut rng: R) -> Result<Self> {
        let (rows, cols) = checked_dimensions(rows, cols)?;
        let tiles = generate_tiles(rows, cols, &mut rng);
        Ok(Self { rows, cols, tiles, rng })
    }

    /// Discard every tile and rebuild the grid at the new size.
    ///
    /// Invalid dimensions are rejected before anything is discarded.
    pub fn resize(&mut self, rows: i64, cols: i64) -> Result<()> {
        let (rows, cols) = checked_dimensions(rows, cols).inspect_err(|e| {
            warn!("[GridController] Rejected resize: {}", e);
        })?;

        self.tiles = generate_tiles(rows, cols, &mut self.rng);
        self.rows = rows;
        self.cols = cols;
        info!("[GridController] Resized grid to {}x{} ({} tiles)", rows, cols, self.tiles.len());
        Ok(())
    }

    /// Redraw every tile, in row-major order.
    pub fn randomize_all(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.randomize(&mut self.rng);
        }
    }

    /// Redraw a single uniformly chosen tile and return its index.
    ///
    /// Returns `None` without touching anything if the grid is empty.
    pub fn randomize_one(&mut self) -> Option<usize> {
        if self.tiles.is_empty() {
            warn!("[GridController] No tile to randomize!");
            return None;
        }
        let index = self.rng.random_range(0..self.tiles.len());
        self.tiles[index].randomize(&mut self.rng);
        debug!("[GridController] Randomized tile {} (row {}, col {})", index, index / self.cols, index % self.cols);
        Some(index)
    }
}

impl<R> GridController<R> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Tile at the given row and column, if in bounds.
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_generation_size() {
        let grid = GridController::seeded(3, 4, 1).unwrap();
        assert_eq!(grid.len(), 12);
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
    }

    #[test]
    fn test_resize_rebuilds_to_new_size() {
        let mut grid = GridController::seeded(12, 12, 2).unwrap();
        grid.resize(3, 4).unwrap();
        assert_eq!(grid.len(), 12);

        grid.resize(1, 1).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!((grid.rows(), grid.cols()), (1, 1));
    }

    #[test]
    fn test_resize_rejects_non_positive_and_keeps_grid() {
        let mut grid = GridController::seeded(2, 2, 3).unwrap();
        let before = grid.tiles().to_vec();

        for (rows, cols) in [(0, 5), (-1, 5), (5, 0), (5, -3)] {
            let err = grid.resize(rows, cols).unwrap_err();
            assert_eq!(err, MosaicError::InvalidDimension { rows, cols });
        }
        assert_eq!(grid.tiles(), before.as_slice());
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
    }

    #[test]
    fn test_resize_rejects_oversized_product() {
        let mut grid = GridController::seeded(2, 2, 3).unwrap();
        assert!(grid.resize(i64::MAX, 2).is_err());
        assert!(grid.resize(MAX_TILES as i64, 2).is_err());
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn test_construction_rejects_invalid_dimensions() {
        assert!(GridController::seeded(0, 12, 1).is_err());
        assert!(GridController::seeded(12, -12, 1).is_err());
    }

    #[test]
    fn test_randomize_one_touches_exactly_one_tile() {
        let mut grid = GridController::seeded(6, 6, 4).unwrap();
        for _ in 0..50 {
            let before = grid.tiles().to_vec();
            let index = grid.randomize_one().unwrap();

            for (i, (old, new)) in before.iter().zip(grid.tiles()).enumerate() {
                if i != index {
                    assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn test_randomize_all_keeps_size() {
        let mut grid = GridController::seeded(4, 5, 5).unwrap();
        let before = grid.tiles().to_vec();
        grid.randomize_all();

        assert_eq!(grid.len(), 20);
        // 20 tiles all redrawing to their exact previous state is practically impossible.
        assert_ne!(grid.tiles(), before.as_slice());
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = GridController::seeded(3, 3, 99).unwrap();
        let b = GridController::seeded(3, 3, 99).unwrap();
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_tile_lookup_is_row_major() {
        let grid = GridController::seeded(3, 4, 6).unwrap();
        assert_eq!(grid.tile(1, 2), Some(&grid.tiles()[6]));
        assert_eq!(grid.tile(2, 3), grid.tiles().last());
        assert!(grid.tile(3, 0).is_none());
        assert!(grid.tile(0, 4).is_none());
    }

    #[test]
    fn test_randomize_one_index_covers_grid() {
        let mut grid = GridController::seeded(2, 3, 8).unwrap();
        let mut seen = [false; 6];
        for _ in 0..500 {
            if let Some(i) = grid.randomize_one() {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
