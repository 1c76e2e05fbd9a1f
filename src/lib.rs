//! graphword - draws words on the contribution graph.
//!
//! A word is rendered with a 5x7 bitmap font, each lit pixel is mapped to a
//! day (columns are weeks starting on Sunday, rows are weekdays) and every
//! day receives a handful of backdated empty commits.
//!
//! ```no_run
//! use graphword::pattern::{build_matrix, plan, Intensity};
//! use rand::SeedableRng;
//!
//! let matrix = build_matrix("hi")?;
//! let anchor = graphword::pattern::compute_optimal_anchor("hi", Some(2024));
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//! let plan = plan(&matrix, anchor, Intensity::Light, &mut rng)?;
//! assert_eq!(plan.total(), 2 * matrix.lit_cells());
//! # Ok::<(), graphword::error::GraphError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod font;
pub mod git;
pub mod logging;
pub mod pattern;
pub mod terminal;
pub mod utils;

pub use config::Settings;
pub use error::{GraphError, Result};
