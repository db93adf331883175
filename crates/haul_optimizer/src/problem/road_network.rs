use crate::problem::{
    city::{City, CityIdx},
    problem_error::ProblemError,
    topology::{Distance, Topology},
};

/// An undirected road between two cities. Without an explicit length the
/// euclidean distance between both endpoints is used.
#[derive(Debug, Clone, Copy)]
pub struct Road {
    pub from: CityIdx,
    pub to: CityIdx,
    pub length: Option<Distance>,
}

/// Dense all-pairs topology.
///
/// Distances and next hops use a flat layout: the entry for a pair of cities
/// lives at `from * num_cities + to`. `next_hops` holds the first city to visit
/// on a shortest path, or `None` when the destination is unreachable.
pub struct RoadNetwork {
    cities: Vec<City>,
    distances: Vec<Distance>,
    next_hops: Vec<Option<CityIdx>>,
    num_cities: usize,
}

impl RoadNetwork {
    /// Complete graph where every pair is joined by a straight road.
    pub fn from_euclidean(cities: Vec<City>) -> Self {
        let num_cities = cities.len();
        let mut distances = vec![0.0; num_cities * num_cities];
        let mut next_hops = vec![None; num_cities * num_cities];

        for (i, from) in cities.iter().enumerate() {
            for (j, to) in cities.iter().enumerate() {
                distances[i * num_cities + j] = from.euclidean_distance(to);
                next_hops[i * num_cities + j] = Some(CityIdx::new(j));
            }
        }

        RoadNetwork {
            cities,
            distances,
            next_hops,
            num_cities,
        }
    }

    /// Shortest paths over the given roads, computed with Floyd-Warshall.
    pub fn from_roads(cities: Vec<City>, roads: &[Road]) -> Result<Self, ProblemError> {
        let num_cities = cities.len();
        let mut distances = vec![f64::INFINITY; num_cities * num_cities];
        let mut next_hops = vec![None; num_cities * num_cities];

        for i in 0..num_cities {
            distances[i * num_cities + i] = 0.0;
            next_hops[i * num_cities + i] = Some(CityIdx::new(i));
        }

        for road in roads {
            for city in [road.from, road.to] {
                if city.get() >= num_cities {
                    return Err(ProblemError::CityOutOfBounds {
                        city: city.get(),
                        num_cities,
                    });
                }
            }

            let (a, b) = (road.from.get(), road.to.get());
            let length = road
                .length
                .unwrap_or_else(|| cities[a].euclidean_distance(&cities[b]));

            if length < 0.0 {
                return Err(ProblemError::NegativeDistance {
                    from: a,
                    to: b,
                    distance: length,
                });
            }

            for (from, to) in [(a, b), (b, a)] {
                if length < distances[from * num_cities + to] {
                    distances[from * num_cities + to] = length;
                    next_hops[from * num_cities + to] = Some(CityIdx::new(to));
                }
            }
        }

        for k in 0..num_cities {
            for i in 0..num_cities {
                let via_k = distances[i * num_cities + k];
                if via_k.is_infinite() {
                    continue;
                }

                for j in 0..num_cities {
                    let candidate = via_k + distances[k * num_cities + j];
                    if candidate < distances[i * num_cities + j] {
                        distances[i * num_cities + j] = candidate;
                        next_hops[i * num_cities + j] = next_hops[i * num_cities + k];
                    }
                }
            }
        }

        Ok(RoadNetwork {
            cities,
            distances,
            next_hops,
            num_cities,
        })
    }

    /// Uses the given matrix as-is, every pair being a direct road. Cities are
    /// named after their index and placed at the origin.
    pub fn from_distances(matrix: Vec<Vec<Distance>>) -> Result<Self, ProblemError> {
        let num_cities = matrix.len();
        let mut next_hops = Vec::with_capacity(num_cities * num_cities);

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != num_cities {
                return Err(ProblemError::NonSquareMatrix {
                    row: i,
                    len: row.len(),
                    expected: num_cities,
                });
            }

            for (j, &distance) in row.iter().enumerate() {
                if distance < 0.0 {
                    return Err(ProblemError::NegativeDistance {
                        from: i,
                        to: j,
                        distance,
                    });
                }
                next_hops.push(Some(CityIdx::new(j)));
            }
        }

        let cities = (0..num_cities)
            .map(|i| City::new(i.to_string(), 0.0, 0.0))
            .collect();

        Ok(RoadNetwork {
            cities,
            distances: matrix.into_iter().flatten().collect(),
            next_hops,
            num_cities,
        })
    }

    #[inline(always)]
    fn index(&self, from: CityIdx, to: CityIdx) -> usize {
        from.get() * self.num_cities + to.get()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, city: CityIdx) -> &City {
        &self.cities[city]
    }

    pub fn city_by_name(&self, name: &str) -> Option<CityIdx> {
        self.cities
            .iter()
            .position(|city| city.name() == name)
            .map(CityIdx::new)
    }

    pub fn is_reachable(&self, from: CityIdx, to: CityIdx) -> bool {
        self.next_hops[self.index(from, to)].is_some()
    }
}

impl Topology for RoadNetwork {
    fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline(always)]
    fn distance(&self, from: CityIdx, to: CityIdx) -> Distance {
        if from == to {
            return 0.0;
        }

        self.distances[self.index(from, to)]
    }

    fn path_between(&self, from: CityIdx, to: CityIdx) -> Vec<CityIdx> {
        let mut path = Vec::new();
        if from == to || !self.is_reachable(from, to) {
            return path;
        }

        let mut current = from;
        while current != to {
            match self.next_hops[self.index(current, to)] {
                Some(next) if path.len() < self.num_cities => {
                    path.push(next);
                    current = next;
                }
                _ => return Vec::new(),
            }
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_cities() -> Vec<City> {
        vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 1.0, 0.0),
            City::new("C", 2.0, 0.0),
            City::new("D", 3.0, 0.0),
        ]
    }

    fn road(from: usize, to: usize, length: f64) -> Road {
        Road {
            from: CityIdx::new(from),
            to: CityIdx::new(to),
            length: Some(length),
        }
    }

    #[test]
    fn test_from_roads_shortest_paths() {
        let network = RoadNetwork::from_roads(
            line_cities(),
            &[road(0, 1, 2.0), road(1, 2, 3.0), road(2, 3, 1.0), road(0, 3, 10.0)],
        )
        .unwrap();

        assert_eq!(network.distance(CityIdx::new(0), CityIdx::new(3)), 6.0);
        assert_eq!(network.distance(CityIdx::new(3), CityIdx::new(0)), 6.0);
        assert_eq!(
            network.path_between(CityIdx::new(0), CityIdx::new(3)),
            vec![CityIdx::new(1), CityIdx::new(2), CityIdx::new(3)]
        );
        assert_eq!(
            network.path_between(CityIdx::new(3), CityIdx::new(1)),
            vec![CityIdx::new(2), CityIdx::new(1)]
        );
    }

    #[test]
    fn test_path_to_same_city_is_empty() {
        let network = RoadNetwork::from_euclidean(line_cities());

        assert!(
            network
                .path_between(CityIdx::new(2), CityIdx::new(2))
                .is_empty()
        );
        assert_eq!(network.distance(CityIdx::new(2), CityIdx::new(2)), 0.0);
    }

    #[test]
    fn test_unreachable_city() {
        let network = RoadNetwork::from_roads(line_cities(), &[road(0, 1, 1.0)]).unwrap();

        assert!(!network.is_reachable(CityIdx::new(0), CityIdx::new(3)));
        assert!(network.distance(CityIdx::new(0), CityIdx::new(3)).is_infinite());
        assert!(
            network
                .path_between(CityIdx::new(0), CityIdx::new(3))
                .is_empty()
        );
    }

    #[test]
    fn test_road_length_defaults_to_euclidean() {
        let network = RoadNetwork::from_roads(
            line_cities(),
            &[Road {
                from: CityIdx::new(0),
                to: CityIdx::new(2),
                length: None,
            }],
        )
        .unwrap();

        assert_eq!(network.distance(CityIdx::new(0), CityIdx::new(2)), 2.0);
    }

    #[test]
    fn test_road_out_of_bounds() {
        let result = RoadNetwork::from_roads(line_cities(), &[road(0, 9, 1.0)]);

        assert_eq!(
            result.err(),
            Some(ProblemError::CityOutOfBounds {
                city: 9,
                num_cities: 4
            })
        );
    }

    #[test]
    fn test_from_distances_rejects_non_square() {
        let result = RoadNetwork::from_distances(vec![vec![0.0, 1.0], vec![1.0]]);

        assert!(matches!(
            result.err(),
            Some(ProblemError::NonSquareMatrix { row: 1, .. })
        ));
    }

    #[test]
    fn test_from_distances_direct_paths() {
        let network =
            RoadNetwork::from_distances(vec![vec![0.0, 7.0], vec![7.0, 0.0]]).unwrap();

        assert_eq!(network.distance(CityIdx::new(0), CityIdx::new(1)), 7.0);
        assert_eq!(
            network.path_between(CityIdx::new(0), CityIdx::new(1)),
            vec![CityIdx::new(1)]
        );
        assert_eq!(network.city_by_name("1"), Some(CityIdx::new(1)));
    }
}
