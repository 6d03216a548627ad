/// Main configuration module.
///
/// Re-exports submodules for grid and rendering configuration.
pub mod grid;
pub mod render;
