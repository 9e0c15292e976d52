/*!
# IO

Plain-text dump writers for graphs and distance tables, meant for debugging
and golden-output tests. All writers target a `std::io::Write` sink and
produce deterministic output:

- [`write_adj_matrix`]: a header row of column indices followed by one
  right-justified row per vertex; absent edges render as the literal `INF`,
  the diagonal renders its self-distance `0` unless an explicit self-loop
  was recorded.
- [`write_distance_matrix`]: the same grid for an all-pairs
  [`DistanceMatrix`](crate::algo::DistanceMatrix), `INF` = unreachable.
- [`write_adj_list`]: one line per vertex with its optional label and its
  outgoing arcs in enumeration order.
*/

pub mod dump;

pub use dump::*;
