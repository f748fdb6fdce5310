//! Single-start search loop.

use super::acceptance::accept_probability;
use super::events::{SearchEvent, SearchObserver};
use super::register::BestRegister;
use crate::models::{Cities, Tour};
use rand::rngs::StdRng;
use rand::Rng;

/// Final state of one worker.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerReport {
    /// 1-based index of the start.
    pub start: usize,

    /// Number of candidates evaluated.
    pub iterations: usize,

    /// Number of candidates adopted as the current tour.
    pub accepted: usize,

    /// Fitness of the worker's final current tour.
    pub fitness: f64,

    /// The worker's final current tour.
    pub tour: Tour,
}

/// One independent start. Owns its random stream; shares only the register.
pub(crate) struct Worker<'a, O: SearchObserver + ?Sized> {
    pub start: usize,
    pub cities: &'a Cities,
    pub register: &'a BestRegister,
    pub observer: &'a O,
    pub cooling: f64,
    pub stagnation_limit: usize,
    pub rng: StdRng,
}

impl<O: SearchObserver + ?Sized> Worker<'_, O> {
    /// Runs until `stagnation_limit` consecutive candidates are rejected.
    ///
    /// When every tour has the same length (see [`Cities::is_degenerate`]) no
    /// candidate is ever rejected, so the worker stops right after the start.
    pub fn run(mut self) -> WorkerReport {
        let mut current = Tour::random(self.cities.len(), &mut self.rng);
        let mut current_fitness = self.cities.tour_fitness(current.as_slice());
        self.observer.on_event(&SearchEvent::Started {
            start: self.start,
            fitness: current_fitness,
            tour: &current,
        });

        let mut candidate = current.clone();
        let mut iteration = 0usize;
        let mut stagnation = 0usize;
        let mut accepted = 0usize;
        let mut searching = !self.cities.is_degenerate();

        while searching {
            iteration += 1;

            candidate.clone_from(&current);
            candidate.mutate(&mut self.rng);
            let candidate_fitness = self.cities.tour_fitness(candidate.as_slice());

            // Recorded whether or not this worker adopts the candidate.
            self.register.offer(&candidate, candidate_fitness);

            let probability =
                accept_probability(iteration, self.cooling, candidate_fitness, current_fitness);
            if candidate_fitness > current_fitness || self.rng.random::<f64>() < probability {
                std::mem::swap(&mut current, &mut candidate);
                current_fitness = candidate_fitness;
                stagnation = 0;
                accepted += 1;
                self.observer.on_event(&SearchEvent::Accepted {
                    start: self.start,
                    iteration,
                    fitness: current_fitness,
                    tour: &current,
                });
            } else {
                stagnation += 1;
            }

            searching = stagnation < self.stagnation_limit;
        }

        self.observer.on_event(&SearchEvent::Terminated {
            start: self.start,
            iterations: iteration,
            fitness: current_fitness,
            tour: &current,
            global_best: self.register.fitness(),
        });

        WorkerReport {
            start: self.start,
            iterations: iteration,
            accepted,
            fitness: current_fitness,
            tour: current,
        }
    }
}
