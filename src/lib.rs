//! Chord grid renderer
//!
//! Draws the measure/section guide grid used as a backdrop for chord
//! annotation and saves it as a PNG.
//!
//! ```no_run
//! use chord_grid::{generate, GridConfig};
//!
//! let canvas = generate(GridConfig::default())?;
//! canvas.save("chord_base.png")?;
//! # Ok::<(), chord_grid::GridError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod image_utils;
pub mod layout;
pub mod types;

pub use canvas::Canvas;
pub use config::{ConfigOverrides, GridConfig, STROKE_WIDTH};
pub use error::{GridError, GridResult};
pub use generator::{generate, GridLayoutGenerator};
pub use layout::GridLines;
pub use types::{Color, LineInstruction, LineKind, Point, Size};
