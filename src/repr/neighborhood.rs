use super::*;

/// Basic Neighborhood-Impl. using `Vec<(Node, Weight)>`.
///
/// Arcs are enumerated in insertion order. Parallel arcs are kept as-is.
#[derive(Default, Clone)]
pub struct ArrNeighborhood(pub Vec<(Node, Weight)>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn arcs(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0.iter().copied()
    }

    fn add_arc(&mut self, v: Node, w: Weight) {
        debug_assert!(w != INVALID_WEIGHT);
        self.0.push((v, w));
    }
}

/// A Neighborhood represented by a dense matrix row of optional weights.
///
/// Arcs are enumerated by increasing target index. Re-recording an arc
/// overwrites the stored weight, so parallel arcs cannot exist.
#[derive(Default, Clone)]
pub struct RowNeighborhood(pub Vec<Option<OptionalWeight>>);

impl Neighborhood for RowNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self(vec![None; n as usize])
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.iter().filter(|c| c.is_some()).count() as NumNodes
    }

    fn arcs(&self) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(v, &c)| c.map(|ow| (v as Node, ow.get())))
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.0[v as usize].map(|ow| ow.get())
    }

    fn add_arc(&mut self, v: Node, w: Weight) {
        debug_assert!(w != INVALID_WEIGHT);
        self.0[v as usize] = OptionalWeight::new(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn arr_keeps_insertion_order() {
        let mut nbs = ArrNeighborhood::new(5);
        nbs.add_arc(3, 7);
        nbs.add_arc(1, 2);
        nbs.add_arc(3, 9);

        assert_eq!(nbs.num_of_neighbors(), 3);
        assert_eq!(nbs.arcs().collect_vec(), vec![(3, 7), (1, 2), (3, 9)]);
        assert_eq!(nbs.neighbors().collect_vec(), vec![3, 1, 3]);
        // first recorded arc wins
        assert_eq!(nbs.weight_to(3), Some(7));
        assert_eq!(nbs.weight_to(0), None);
    }

    #[test]
    fn row_enumerates_by_index_and_overwrites() {
        let mut nbs = RowNeighborhood::new(5);
        nbs.add_arc(3, 7);
        nbs.add_arc(1, 0);
        nbs.add_arc(3, 9);

        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.arcs().collect_vec(), vec![(1, 0), (3, 9)]);
        // a zero weight is a real edge, not "absent"
        assert_eq!(nbs.weight_to(1), Some(0));
        assert_eq!(nbs.weight_to(3), Some(9));
        assert_eq!(nbs.weight_to(2), None);
    }
}
