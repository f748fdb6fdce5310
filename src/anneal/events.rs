//! Progress events emitted by search workers.

use crate::models::Tour;
use log::{debug, info};

/// A progress event from one worker.
///
/// `start` is the 1-based index of the emitting worker. Tours are borrowed
/// from the worker's state; clone them to keep them past the callback.
#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    /// A worker generated its starting tour.
    Started {
        start: usize,
        fitness: f64,
        tour: &'a Tour,
    },
    /// A worker adopted a candidate as its new current tour.
    Accepted {
        start: usize,
        iteration: usize,
        fitness: f64,
        tour: &'a Tour,
    },
    /// A worker hit the stagnation limit and stopped.
    Terminated {
        start: usize,
        iterations: usize,
        fitness: f64,
        tour: &'a Tour,
        /// Register fitness at the moment this worker stopped.
        global_best: f64,
    },
}

impl SearchEvent<'_> {
    pub fn start(&self) -> usize {
        match *self {
            SearchEvent::Started { start, .. }
            | SearchEvent::Accepted { start, .. }
            | SearchEvent::Terminated { start, .. } => start,
        }
    }
}

/// Receives progress events.
///
/// Called concurrently from every worker thread, so implementations must be
/// `Send + Sync`. Any `Fn(&SearchEvent)` closure is an observer.
pub trait SearchObserver: Send + Sync {
    fn on_event(&self, event: &SearchEvent<'_>);
}

impl<F> SearchObserver for F
where
    F: Fn(&SearchEvent<'_>) + Send + Sync,
{
    fn on_event(&self, event: &SearchEvent<'_>) {
        self(event)
    }
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_event(&self, _event: &SearchEvent<'_>) {}
}

/// Forwards events to the `log` facade.
///
/// Starts and terminations log at `info`, accepted solutions at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_event(&self, event: &SearchEvent<'_>) {
        match *event {
            SearchEvent::Started {
                start,
                fitness,
                tour,
            } => {
                info!("starting point {start}: fx={fitness:.4} {tour}");
            }
            SearchEvent::Accepted {
                start,
                iteration,
                fitness,
                tour,
            } => {
                debug!("start {start}: new solution iteration={iteration} fx={fitness:.4} {tour}");
            }
            SearchEvent::Terminated {
                start,
                iterations,
                fitness,
                tour,
                global_best,
            } => {
                info!(
                    "start {start}: stagnated after {iterations} iterations local fx={fitness:.4} x={tour} global fbest={global_best:.4}"
                );
            }
        }
    }
}
