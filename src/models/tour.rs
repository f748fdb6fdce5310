//! Closed tours, the swap mutation, and random tour generation.

use rand::Rng;
use std::fmt;

/// A closed visiting order over cities `1..=n`.
///
/// Stored as `n + 1` city indices. Position 0 and position `n` hold the same
/// start city and never change under [`mutate`](Tour::mutate); positions
/// `0..n` visit every city exactly once.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_anneal::models::Tour;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let tour = Tour::random(5, &mut rng);
/// assert_eq!(tour.len(), 6);
/// assert_eq!(tour.start(), 1);
/// assert!(tour.is_valid(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Identity order `[1, 2, ..., n, 1]`.
    pub fn identity(n: usize) -> Self {
        let mut order: Vec<usize> = (1..=n).collect();
        order.push(1);
        Self { order }
    }

    /// Generates a random tour anchored at city 1.
    ///
    /// Starts from [`identity`](Tour::identity) and applies `2n` mutations.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut tour = Self::identity(n);
        for _ in 0..2 * n {
            tour.mutate(rng);
        }
        tour
    }

    /// Wraps an explicit order, returning `None` unless it is a valid closed
    /// tour over `1..=order.len() - 1`.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        let tour = Self { order };
        let n = tour.order.len().checked_sub(1)?;
        tour.is_valid(n).then_some(tour)
    }

    /// Swaps two distinct interior positions chosen uniformly from `[1, n-1]`.
    ///
    /// Positions 0 and `n` are never touched. With fewer than two interior
    /// positions there is nothing to swap and the tour is left unchanged.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let n = self.order.len().saturating_sub(1);
        if n < 3 {
            return;
        }
        let (a, b) = loop {
            let a = rng.random_range(1..n);
            let b = rng.random_range(1..n);
            if a != b {
                break (a, b);
            }
        };
        self.order.swap(a, b);
    }

    /// The city the tour starts and ends at.
    pub fn start(&self) -> usize {
        self.order[0]
    }

    /// Number of stored stops, including the closing return (`n + 1`).
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    /// Returns `true` if this is a closed tour over exactly `1..=n`.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 || self.order.len() != n + 1 || self.order.first() != self.order.last() {
            return false;
        }
        let mut seen = vec![false; n + 1];
        for &city in &self.order[..n] {
            if city == 0 || city > n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

/// Formats as `[ 1 3 2 1 ]`.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for city in &self.order {
            write!(f, " {city}")?;
        }
        f.write_str(" ]")
    }
}
