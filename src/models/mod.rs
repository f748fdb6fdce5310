//! Domain model types for the travelling salesman search.
//!
//! Cities are addressed by 1-based index; a [`Tour`] is a closed visiting
//! order that starts and ends at the same city.

mod city;
mod tour;

pub use city::{Cities, City};
pub use tour::Tour;
