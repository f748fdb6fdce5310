//! Built-in city sets.

use crate::models::{Cities, City};
use rand::Rng;

/// Largest random instance [`cities_for_count`] will generate.
pub const MAX_RANDOM_CITIES: usize = 60;

/// Coordinates of random cities are drawn from this inclusive range.
pub const COORD_RANGE: std::ops::RangeInclusive<i32> = 1..=100;

const DEMO: [(i32, i32); 7] = [(0, 4), (2, 2), (3, 5), (6, 5), (6, 1), (9, 4), (5, 9)];

/// The fixed 7-city demonstration set.
pub fn demo_cities() -> Cities {
    Cities::from_coords(&DEMO)
}

/// `count` cities with coordinates uniform in [`COORD_RANGE`].
pub fn random_cities<R: Rng>(count: usize, rng: &mut R) -> Cities {
    (0..count)
        .map(|_| City::new(rng.random_range(COORD_RANGE), rng.random_range(COORD_RANGE)))
        .collect()
}

/// City set for a requested count.
///
/// Counts up to the size of the demo set return [`demo_cities`]; larger counts
/// are capped at [`MAX_RANDOM_CITIES`] and generated randomly.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp_anneal::instances::{cities_for_count, demo_cities};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(cities_for_count(3, &mut rng), demo_cities());
/// assert_eq!(cities_for_count(500, &mut rng).len(), 60);
/// ```
pub fn cities_for_count<R: Rng>(count: usize, rng: &mut R) -> Cities {
    if count <= DEMO.len() {
        demo_cities()
    } else {
        random_cities(count.min(MAX_RANDOM_CITIES), rng)
    }
}
