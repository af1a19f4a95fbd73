//! Lower bounds on the number of moves left to solve a cube.
//!
//! Every estimator here is admissible and consistent in the face turn metric: for any cube `s`
//! and move `m`, `estimate(s.apply_move(m)) + 1 >= estimate(s)`, and `estimate(s) == 0` only
//! for the solved cube.

use std::collections::VecDeque;

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::moves::MOVE_CUBES;

/// Scores a cube with a lower bound on its distance to the solved cube.
pub trait Heuristic {
    fn estimate(&self, cube: &CubieCube) -> u8;
}

lazy_static! {
    static ref DISTANCE_TABLES: DistanceTables = DistanceTables::new();
}

/// Per-cubie move distances.
///
/// A single corner (or edge) on its own can be in one of 24 (slot, orientation) states. For every
/// piece, `corner_dist[piece][slot * 3 + twist]` and `edge_dist[piece][slot * 2 + flip]` hold the
/// fewest face turns that carry that piece home with zero orientation.
pub struct DistanceTables {
    pub corner_dist: [[u8; N_CUBIE_STATES]; N_CORNERS],
    pub edge_dist: [[u8; N_CUBIE_STATES]; N_EDGES],
}

impl DistanceTables {
    fn new() -> Self {
        let mut corner_step = [[0usize; N_CUBIE_STATES]; N_MOVE];
        let mut edge_step = [[0usize; N_CUBIE_STATES]; N_MOVE];
        for (m, mc) in MOVE_CUBES.iter().enumerate() {
            // the piece in slot mc.cp[i] moves to slot i, picking up twist mc.co[i]
            for i in 0..N_CORNERS {
                let from = mc.cp[i] as usize;
                for ori in 0..3 {
                    corner_step[m][from * 3 + ori] = i * 3 + (ori + mc.co[i] as usize) % 3;
                }
            }
            for i in 0..N_EDGES {
                let from = mc.ep[i] as usize;
                for ori in 0..2 {
                    edge_step[m][from * 2 + ori] = i * 2 + (ori + mc.eo[i] as usize) % 2;
                }
            }
        }

        let mut corner_dist = [[0; N_CUBIE_STATES]; N_CORNERS];
        for (piece, dist) in corner_dist.iter_mut().enumerate() {
            *dist = bfs(piece * 3, &corner_step);
        }
        let mut edge_dist = [[0; N_CUBIE_STATES]; N_EDGES];
        for (piece, dist) in edge_dist.iter_mut().enumerate() {
            *dist = bfs(piece * 2, &edge_step);
        }
        log::debug!("built per-cubie distance tables");
        Self {
            corner_dist,
            edge_dist,
        }
    }

    /// Sum of the per-corner distances of a cube.
    pub fn corner_sum(&self, cc: &CubieCube) -> u32 {
        (0..N_CORNERS)
            .map(|i| self.corner_dist[cc.cp[i] as usize][i * 3 + cc.co[i] as usize] as u32)
            .sum()
    }

    /// Sum of the per-edge distances of a cube.
    pub fn edge_sum(&self, cc: &CubieCube) -> u32 {
        (0..N_EDGES)
            .map(|i| self.edge_dist[cc.ep[i] as usize][i * 2 + cc.eo[i] as usize] as u32)
            .sum()
    }
}

/// Breadth first search over the 24 states of one cubie. The move set is closed under inverses,
/// so distances from home equal distances to home.
fn bfs(home: usize, step: &[[usize; N_CUBIE_STATES]; N_MOVE]) -> [u8; N_CUBIE_STATES] {
    let mut dist = [u8::MAX; N_CUBIE_STATES];
    let mut queue = VecDeque::from([home]);
    dist[home] = 0;
    while let Some(s) = queue.pop_front() {
        for next in step.iter().map(|table| table[s]) {
            if dist[next] == u8::MAX {
                dist[next] = dist[s] + 1;
                queue.push_back(next);
            }
        }
    }
    dist
}

fn div_ceil(n: u32, d: u32) -> u8 {
    n.div_ceil(d) as u8
}

/// Per-cubie distance bound.
///
/// A face turn moves exactly four corners and four edges, each by one step in its own state
/// graph, so each of the corner and edge sums drops by at most four per move. The estimate is
/// the larger of the two sums divided by four, rounded up.
#[derive(Debug, Default, Clone, Copy)]
pub struct CubieDistance;

impl Heuristic for CubieDistance {
    fn estimate(&self, cube: &CubieCube) -> u8 {
        let per_turn = CUBIES_PER_TURN as u32;
        let corners = div_ceil(DISTANCE_TABLES.corner_sum(cube), per_turn);
        let edges = div_ceil(DISTANCE_TABLES.edge_sum(cube), per_turn);
        corners.max(edges)
    }
}

/// Count of cubies out of place or misoriented, divided by the eight cubies one turn can touch,
/// rounded up. Much weaker than [`CubieDistance`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MisplacedCubies;

impl Heuristic for MisplacedCubies {
    fn estimate(&self, cube: &CubieCube) -> u8 {
        let corners = (0..N_CORNERS)
            .filter(|&i| cube.cp[i] as usize != i || cube.co[i] != 0)
            .count();
        let edges = (0..N_EDGES)
            .filter(|&i| cube.ep[i] as usize != i || cube.eo[i] != 0)
            .count();
        div_ceil((corners + edges) as u32, 2 * CUBIES_PER_TURN as u32)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn any_move() -> impl Strategy<Value = crate::moves::Move> {
        (0..N_MOVE).prop_map(|i| ALL_MOVES[i])
    }

    #[test]
    fn test_solved_is_zero() {
        let cc = CubieCube::default();
        assert_eq!(CubieDistance.estimate(&cc), 0);
        assert_eq!(MisplacedCubies.estimate(&cc), 0);
    }

    #[test]
    fn test_single_move() {
        for m in ALL_MOVES {
            let cc = CubieCube::default().apply_move(m);
            assert_eq!(CubieDistance.estimate(&cc), 1, "{m}");
            assert_eq!(MisplacedCubies.estimate(&cc), 1, "{m}");
        }
    }

    #[test]
    fn test_distance_tables() {
        let tables = DistanceTables::new();
        for piece in 0..N_CORNERS {
            assert!(tables.corner_dist[piece].iter().all(|&d| d != u8::MAX));
            assert_eq!(tables.corner_dist[piece][piece * 3], 0);
            // a twist in place takes more than one turn
            assert!(tables.corner_dist[piece][piece * 3 + 1] >= 2);
            assert!(tables.corner_dist[piece][piece * 3 + 2] >= 2);
        }
        for piece in 0..N_EDGES {
            assert!(tables.edge_dist[piece].iter().all(|&d| d != u8::MAX));
            assert_eq!(tables.edge_dist[piece][piece * 2], 0);
            assert!(tables.edge_dist[piece][piece * 2 + 1] >= 2);
        }
    }

    #[test]
    fn test_bound_below_scramble_length() {
        let scramble = vec![R, U, F, L2, D3, B];
        let cc = CubieCube::from(&scramble);
        assert!(CubieDistance.estimate(&cc) as usize <= scramble.len());
        assert!(MisplacedCubies.estimate(&cc) as usize <= scramble.len());
    }

    proptest! {
        #[test]
        fn consistent_over_moves(mvs in vec(any_move(), 0..30), m in any_move()) {
            let cc = CubieCube::from(&mvs);
            let next = cc.apply_move(m);
            for h in [&CubieDistance as &dyn Heuristic, &MisplacedCubies] {
                let before = h.estimate(&cc) as i32;
                let after = h.estimate(&next) as i32;
                prop_assert!((before - after).abs() <= 1);
            }
        }

        #[test]
        fn admissible_for_scrambles(mvs in vec(any_move(), 0..12)) {
            let cc = CubieCube::from(&mvs);
            prop_assert!(CubieDistance.estimate(&cc) as usize <= mvs.len());
            prop_assert!(MisplacedCubies.estimate(&cc) as usize <= mvs.len());
        }

        #[test]
        fn zero_only_when_solved(mvs in vec(any_move(), 0..12)) {
            let cc = CubieCube::from(&mvs);
            prop_assert_eq!(CubieDistance.estimate(&cc) == 0, cc.is_solved());
            prop_assert_eq!(MisplacedCubies.estimate(&cc) == 0, cc.is_solved());
        }
    }
}
