//! Multi-start annealing search.
//!
//! Each start is an independent trajectory: a random tour is repeatedly
//! perturbed by a two-city swap, and the candidate replaces the current tour
//! if it is shorter, or otherwise with probability
//! `(n + 1)^(C * (fy - fx))`, where `n` is the iteration count. A start stops
//! after `M` consecutive rejections. Starts run in parallel and share only a
//! mutex-guarded best-solution register, which sees every candidate.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod acceptance;
mod config;
mod events;
mod register;
mod runner;
mod worker;

pub use acceptance::accept_probability;
pub use config::AnnealConfig;
pub use events::{LogObserver, NoopObserver, SearchEvent, SearchObserver};
pub use register::BestRegister;
pub use runner::{AnnealResult, AnnealRunner};
pub use worker::WorkerReport;
