//! Parallel multi-start annealing heuristic for the Euclidean travelling
//! salesman problem.
//!
//! - [`models`]: cities, tours, the swap mutation and the fitness evaluator
//! - [`anneal`]: acceptance criterion, per-start search loop, shared
//!   best-solution register and the parallel runner
//! - [`instances`]: the demonstration city set and random city sets
//! - [`render`]: MATLAB/Octave script output for plotting a tour
//!
//! Fitness is the negated tour length, so higher is better throughout.
//!
//! ```
//! use tsp_anneal::anneal::{AnnealConfig, AnnealRunner};
//! use tsp_anneal::instances::demo_cities;
//!
//! let cities = demo_cities();
//! let result = AnnealRunner::run(&cities, &AnnealConfig::default().with_seed(7)).unwrap();
//! assert!(result.best_distance() < 30.8);
//! ```

pub mod anneal;
pub mod error;
pub mod instances;
pub mod models;
pub mod render;

pub use error::{Error, Result};
