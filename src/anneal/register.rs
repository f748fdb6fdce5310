//! Shared best-solution register.

use crate::models::Tour;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The single best `(tour, fitness)` pair seen across all workers.
///
/// Every update is a check-then-copy under one lock, so fitness never
/// decreases and readers never see a partially copied tour. Tours are copied
/// in on [`offer`](BestRegister::offer) and copied out on
/// [`snapshot`](BestRegister::snapshot).
#[derive(Debug)]
pub struct BestRegister {
    inner: Mutex<Best>,
}

#[derive(Debug)]
struct Best {
    tour: Tour,
    fitness: f64,
    history: Vec<f64>,
}

impl BestRegister {
    /// Creates a register holding an initial solution.
    pub fn new(tour: Tour, fitness: f64) -> Self {
        Self {
            inner: Mutex::new(Best {
                tour,
                fitness,
                history: vec![fitness],
            }),
        }
    }

    /// Replaces the held solution if `fitness` is strictly greater.
    ///
    /// Returns `true` if the register was updated.
    pub fn offer(&self, tour: &Tour, fitness: f64) -> bool {
        let mut best = self.lock();
        if fitness > best.fitness {
            best.tour.clone_from(tour);
            best.fitness = fitness;
            best.history.push(fitness);
            true
        } else {
            false
        }
    }

    pub fn fitness(&self) -> f64 {
        self.lock().fitness
    }

    /// Copies out the held tour and its fitness.
    pub fn snapshot(&self) -> (Tour, f64) {
        let best = self.lock();
        (best.tour.clone(), best.fitness)
    }

    /// Fitness after every successful update, starting with the initial value.
    pub fn history(&self) -> Vec<f64> {
        self.lock().history.clone()
    }

    /// Consumes the register, returning the tour, fitness and history.
    pub fn into_inner(self) -> (Tour, f64, Vec<f64>) {
        let best = self
            .inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        (best.tour, best.fitness, best.history)
    }

    // Poisoning is ignored: nothing panics while the lock is held.
    fn lock(&self) -> MutexGuard<'_, Best> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    #[test]
    fn test_offer_strictly_better_only() {
        let register = BestRegister::new(Tour::identity(4), -10.0);

        assert!(!register.offer(&Tour::from_order(vec![1, 3, 2, 4, 1]).unwrap(), -10.0));
        assert!(!register.offer(&Tour::identity(4), -12.0));
        assert_eq!(register.snapshot().0, Tour::identity(4));

        let better = Tour::from_order(vec![1, 4, 3, 2, 1]).unwrap();
        assert!(register.offer(&better, -8.0));
        assert_eq!(register.snapshot(), (better, -8.0));
        assert_eq!(register.history(), vec![-10.0, -8.0]);
    }

    #[test]
    fn test_into_inner() {
        let register = BestRegister::new(Tour::identity(3), -5.0);
        register.offer(&Tour::from_order(vec![1, 3, 2, 1]).unwrap(), -4.0);
        let (tour, fitness, history) = register.into_inner();
        assert_eq!(tour.as_slice(), &[1, 3, 2, 1]);
        assert_eq!(fitness, -4.0);
        assert_eq!(history, vec![-5.0, -4.0]);
    }

    #[test]
    fn test_concurrent_offers_keep_maximum() {
        let register = Arc::new(BestRegister::new(Tour::identity(5), -1000.0));

        let handles: Vec<_> = (0..8u64)
            .map(|t| {
                let register = Arc::clone(&register);
                std::thread::spawn(move || {
                    let mut rng = StdRng::seed_from_u64(t);
                    let mut max = f64::NEG_INFINITY;
                    for _ in 0..1000 {
                        let tour = Tour::random(5, &mut rng);
                        let fitness = -rng.random_range(0.0f64..1000.0);
                        max = max.max(fitness);
                        register.offer(&tour, fitness);
                    }
                    max
                })
            })
            .collect();

        let overall = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .fold(f64::NEG_INFINITY, f64::max);

        let (tour, fitness) = register.snapshot();
        assert_eq!(fitness, overall.max(-1000.0));
        assert!(tour.is_valid(5));
        for pair in register.history().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}
