//! City coordinates and the distance/fitness evaluator.

use std::fmt;

/// A city at integer coordinates.
///
/// # Examples
///
/// ```
/// use tsp_anneal::models::City;
///
/// let a = City::new(0, 0);
/// let b = City::new(3, 4);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    x: i32,
    y: i32,
}

impl City {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether this city lies strictly inside the segment from `a` to `b`.
    fn lies_between(&self, a: &City, b: &City) -> bool {
        let (ax, ay) = (i64::from(a.x), i64::from(a.y));
        let (bx, by) = (i64::from(b.x), i64::from(b.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        let cross = (bx - ax) * (y - ay) - (by - ay) * (x - ax);
        cross == 0
            && (x - ax) * (bx - ax) + (y - ay) * (by - ay) > 0
            && (x - bx) * (ax - bx) + (y - by) * (ay - by) > 0
    }
}

impl From<(i32, i32)> for City {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An immutable set of cities addressed by 1-based index.
///
/// Index 0 is reserved and never refers to a city. Passing 0 or an index
/// greater than [`len`](Cities::len) to [`distance`](Cities::distance) is a
/// contract violation and panics.
///
/// # Examples
///
/// ```
/// use tsp_anneal::models::Cities;
///
/// let cities = Cities::from_coords(&[(0, 0), (3, 4), (6, 8)]);
/// assert_eq!(cities.len(), 3);
/// assert!((cities.distance(1, 2) - 5.0).abs() < 1e-10);
/// assert!((cities.tour_fitness(&[1, 2, 3, 1]) + 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cities {
    cities: Vec<City>,
}

impl Cities {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        coords.iter().copied().map(City::from).collect()
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` when every closed tour over these cities has the same
    /// length, so no tour is better than any other.
    ///
    /// That holds for fewer than four cities, for cities that all share one
    /// location, for two locations where one holds a single city, and for
    /// three collinear locations whose outer two each hold a single city.
    ///
    /// ```
    /// use tsp_anneal::models::Cities;
    ///
    /// assert!(Cities::from_coords(&[(5, 5); 6]).is_degenerate());
    /// assert!(!Cities::from_coords(&[(0, 0), (4, 0), (4, 3), (0, 3)]).is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        if self.cities.len() < 4 {
            return true;
        }

        let mut sites: Vec<(City, usize)> = Vec::with_capacity(3);
        for city in &self.cities {
            if let Some((_, count)) = sites.iter_mut().find(|(site, _)| site == city) {
                *count += 1;
            } else if sites.len() == 3 {
                return false;
            } else {
                sites.push((*city, 1));
            }
        }

        match sites.as_slice() {
            [_] => true,
            [(_, a), (_, b)] => *a == 1 || *b == 1,
            [a, b, c] => [(a, b, c), (b, a, c), (c, a, b)]
                .into_iter()
                .find(|(mid, end1, end2)| mid.0.lies_between(&end1.0, &end2.0))
                .is_some_and(|(_, end1, end2)| end1.1 == 1 && end2.1 == 1),
            _ => false,
        }
    }

    /// Returns the city at 1-based `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&City> {
        index.checked_sub(1).and_then(|i| self.cities.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    /// Euclidean distance between the cities at 1-based indices `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is 0 or greater than `len()`.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.cities[a - 1].distance_to(&self.cities[b - 1])
    }

    /// Fitness of a visiting order: the negated sum of consecutive distances.
    ///
    /// Higher is better. A sequence of fewer than two stops has fitness 0.
    pub fn tour_fitness(&self, order: &[usize]) -> f64 {
        let total: f64 = order.windows(2).map(|w| self.distance(w[0], w[1])).sum();
        -total
    }
}

impl FromIterator<City> for Cities {
    fn from_iter<T: IntoIterator<Item = City>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cities {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formats as a MATLAB matrix literal body: `[x y;x y;]`.
impl fmt::Display for Cities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for city in &self.cities {
            write!(f, "{} {};", city.x, city.y)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn demo() -> Cities {
        Cities::from_coords(&[(0, 4), (2, 2), (3, 5), (6, 5), (6, 1), (9, 4), (5, 9)])
    }

    #[test]
    fn test_distance_known_values() {
        let cities = demo();
        assert!((cities.distance(1, 2) - 8f64.sqrt()).abs() < 1e-12);
        assert!((cities.distance(3, 4) - 3.0).abs() < 1e-12);
        assert!((cities.distance(4, 5) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let cities = demo();
        for i in 1..=cities.len() {
            assert_eq!(cities.distance(i, i), 0.0);
        }
    }

    #[test]
    #[should_panic]
    fn test_distance_index_zero_panics() {
        demo().distance(0, 1);
    }

    #[test]
    #[should_panic]
    fn test_distance_index_past_end_panics() {
        demo().distance(1, 8);
    }

    #[test]
    fn test_demo_tour_fitness() {
        let fitness = demo().tour_fitness(&[1, 2, 3, 4, 5, 6, 7, 1]);
        assert!(
            (fitness + 30.707).abs() < 1e-3,
            "expected about -30.707, got {fitness}"
        );
    }

    #[test]
    fn test_tour_fitness_single_stop() {
        assert_eq!(demo().tour_fitness(&[1]), 0.0);
        assert_eq!(demo().tour_fitness(&[]), 0.0);
    }

    #[test]
    fn test_degenerate_layouts() {
        assert!(Cities::from_coords(&[(5, 5); 5]).is_degenerate());
        assert!(Cities::from_coords(&[(0, 0), (1, 5), (4, 2)]).is_degenerate());
        assert!(Cities::from_coords(&[(0, 0), (5, 5), (5, 5), (5, 5)]).is_degenerate());
        assert!(Cities::from_coords(&[(0, 0), (1, 0), (1, 0), (2, 0)]).is_degenerate());

        assert!(!demo().is_degenerate());
        assert!(!Cities::from_coords(&[(0, 0), (0, 0), (5, 5), (5, 5)]).is_degenerate());
        assert!(!Cities::from_coords(&[(0, 0), (0, 0), (1, 0), (2, 0)]).is_degenerate());
        assert!(!Cities::from_coords(&[(0, 0), (1, 0), (2, 0), (3, 0)]).is_degenerate());
        assert!(!Cities::from_coords(&[(0, 0), (1, 1), (1, 1), (2, 0)]).is_degenerate());
    }

    /// Lengths of every closed tour starting at city 1.
    fn all_tour_lengths(cities: &Cities) -> Vec<f64> {
        fn visit(
            cities: &Cities,
            order: &mut Vec<usize>,
            rest: &mut Vec<usize>,
            out: &mut Vec<f64>,
        ) {
            if rest.is_empty() {
                order.push(1);
                out.push(-cities.tour_fitness(order.as_slice()));
                order.pop();
                return;
            }
            for i in 0..rest.len() {
                let next = rest.remove(i);
                order.push(next);
                visit(cities, order, rest, out);
                order.pop();
                rest.insert(i, next);
            }
        }

        let mut out = Vec::new();
        let mut rest: Vec<usize> = (2..=cities.len()).collect();
        visit(cities, &mut vec![1], &mut rest, &mut out);
        out
    }

    #[test]
    fn test_degenerate_matches_exhaustive_lengths() {
        let grid: Vec<(i32, i32)> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        // Every multiset of 4 grid points, as non-decreasing index tuples.
        for a in 0..grid.len() {
            for b in a..grid.len() {
                for c in b..grid.len() {
                    for d in c..grid.len() {
                        let cities = Cities::from_coords(&[grid[a], grid[b], grid[c], grid[d]]);
                        let lengths = all_tour_lengths(&cities);
                        let uniform = lengths.iter().all(|l| (l - lengths[0]).abs() < 1e-9);
                        assert_eq!(cities.is_degenerate(), uniform, "{cities}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_get_is_one_based() {
        let cities = demo();
        assert_eq!(cities.get(0), None);
        assert_eq!(cities.get(1), Some(&City::new(0, 4)));
        assert_eq!(cities.get(7), Some(&City::new(5, 9)));
        assert_eq!(cities.get(8), None);
    }

    #[test]
    fn test_display() {
        let cities = Cities::from_coords(&[(0, 4), (2, 2)]);
        assert_eq!(cities.to_string(), "[0 4;2 2;]");
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            coords in prop::collection::vec((-1000i32..1000, -1000i32..1000), 1..30),
            a in 0usize..30,
            b in 0usize..30,
        ) {
            let cities = Cities::from_coords(&coords);
            let a = a % cities.len() + 1;
            let b = b % cities.len() + 1;
            prop_assert_eq!(cities.distance(a, b), cities.distance(b, a));
            prop_assert!(cities.distance(a, b) >= 0.0);
        }

        #[test]
        fn prop_fitness_negates_sum_of_legs(
            coords in prop::collection::vec((0i32..100, 0i32..100), 2..20),
        ) {
            let cities = Cities::from_coords(&coords);
            let mut order: Vec<usize> = (1..=cities.len()).collect();
            order.push(1);
            let sum: f64 = (1..order.len())
                .map(|i| cities.distance(order[i - 1], order[i]))
                .sum();
            prop_assert!((cities.tour_fitness(&order) + sum).abs() < 1e-9);
        }
    }
}
