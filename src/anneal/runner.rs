//! Multi-start orchestration.

use super::config::AnnealConfig;
use super::events::{NoopObserver, SearchObserver};
use super::register::BestRegister;
use super::worker::{Worker, WorkerReport};
use crate::error::{Error, Result};
use crate::models::{Cities, Tour};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Result of a multi-start annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best candidate offered by any worker, or the initial draw if none
    /// improved on it. A worker's starting tour is never offered.
    pub best: Tour,

    /// Fitness of the best tour (negated tour length).
    pub best_fitness: f64,

    /// Register fitness after each improvement, starting with the initial draw.
    pub fitness_history: Vec<f64>,

    /// Final state of every worker, ordered by start index.
    pub workers: Vec<WorkerReport>,
}

impl AnnealResult {
    /// Total length of the best tour.
    pub fn best_distance(&self) -> f64 {
        -self.best_fitness
    }
}

/// Runs independent annealing starts in parallel and keeps the best tour.
///
/// # Usage
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, AnnealRunner};
/// use tsp_anneal::instances::demo_cities;
///
/// let cities = demo_cities();
/// let config = AnnealConfig::default().with_starts(4).with_seed(42);
/// let result = AnnealRunner::run(&cities, &config).unwrap();
/// assert!(result.best.is_valid(cities.len()));
/// assert_eq!(result.workers.len(), 4);
/// ```
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs the search without progress reporting.
    pub fn run(cities: &Cities, config: &AnnealConfig) -> Result<AnnealResult> {
        Self::run_with_observer(cities, config, &NoopObserver)
    }

    /// Runs the search, delivering progress events to `observer`.
    ///
    /// The register starts from one random tour drawn from the master
    /// stream. Each worker then gets its own seed, drawn from the master
    /// stream in start order before any worker runs, so a fixed seed gives
    /// every worker the same stream regardless of scheduling.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        cities: &Cities,
        config: &AnnealConfig,
        observer: &O,
    ) -> Result<AnnealResult> {
        config.validate()?;
        if cities.is_empty() {
            return Err(Error::EmptyCities);
        }

        let mut master = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let initial = Tour::random(cities.len(), &mut master);
        let initial_fitness = cities.tour_fitness(initial.as_slice());
        let register = BestRegister::new(initial, initial_fitness);

        let seeds: Vec<u64> = (0..config.starts).map(|_| master.random()).collect();

        debug!(
            "spawning {} workers over {} cities (C={}, M={})",
            config.starts,
            cities.len(),
            config.cooling,
            config.stagnation_limit
        );

        let run_workers = || -> Vec<WorkerReport> {
            seeds
                .par_iter()
                .enumerate()
                .map(|(i, &seed)| {
                    Worker {
                        start: i + 1,
                        cities,
                        register: &register,
                        observer,
                        cooling: config.cooling,
                        stagnation_limit: config.stagnation_limit,
                        rng: StdRng::seed_from_u64(seed),
                    }
                    .run()
                })
                .collect()
        };

        let workers = match config.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| Error::ThreadPool(e.to_string()))?
                .install(run_workers),
            None => run_workers(),
        };

        let (best, best_fitness, fitness_history) = register.into_inner();
        debug!("best fitness {best_fitness:.4} after {} improvements", fitness_history.len() - 1);

        Ok(AnnealResult {
            best,
            best_fitness,
            fitness_history,
            workers,
        })
    }
}
