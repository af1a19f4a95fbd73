use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::heuristic::{CubieDistance, Heuristic};
use crate::moves::Move;

/// Optional bounds on a single solve. The default is unbounded.
///
/// * `max_expansions`: stop with [`Error::BudgetExhausted`] after this many expanded nodes.
/// * `timeout`: stop with [`Error::BudgetExhausted`] once this much time has passed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>,
    pub timeout: Option<Duration>,
}

impl SearchLimits {
    /// Set the timeout from a number of seconds, rejecting negative, NaN or overflowing values.
    pub fn with_timeout_secs(self, secs: f32) -> Result<Self, Error> {
        let timeout = Duration::try_from_secs_f32(secs).map_err(|_| Error::InvalidTimeout(secs))?;
        Ok(Self {
            timeout: Some(timeout),
            ..self
        })
    }
}

/// Solution result:
/// * solution: a Move vector taking the start cube to the solved cube.
/// * expanded: number of nodes expanded.
/// * discovered: number of distinct states reached, expanded or still queued.
/// * solve_time: time spent searching.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SolutionResult {
    pub solution: Vec<Move>,
    pub expanded: usize,
    pub discovered: usize,
    pub solve_time: Duration,
}

impl Default for SolutionResult {
    fn default() -> Self {
        Self {
            solution: Vec::new(),
            expanded: 0,
            discovered: 0,
            solve_time: Duration::from_secs(0),
        }
    }
}

/// A search node. `parent` indexes into the node arena of the owning [`Search`] and is only
/// followed to rebuild the solution.
#[derive(Debug, Clone, Copy)]
struct Node {
    cube: CubieCube,
    g: u8,
    h: u8,
    parent: Option<usize>,
    mv: Option<Move>,
}

/// Frontier entry. The heap pops the lowest `f` first, then the deepest `g`, then the oldest
/// entry (nodes are numbered in insertion order).
#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    f: u16,
    g: u8,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of one call to [`Search::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A node was expanded and its successors queued.
    Expanded,
    /// The solved cube was popped; the moves lead from the start cube to it.
    Solved(Vec<Move>),
    /// The frontier ran empty without reaching the solved cube.
    Exhausted,
}

/// A* search over cube states.
///
/// The frontier is a binary heap without decrease-key: a cheaper path to a queued state pushes a
/// second entry, and the costlier entry is dropped when it is popped after the state has been
/// expanded. With a consistent heuristic an expanded state is never reopened.
///
/// The search can be driven to completion with [`solve_with`] or one expansion at a time with
/// [`Search::step`].
pub struct Search<H: Heuristic> {
    heuristic: H,
    nodes: Vec<Node>,
    frontier: BinaryHeap<FrontierEntry>,
    best_g: HashMap<CubieCube, u8>,
    explored: HashSet<CubieCube>,
    expanded: usize,
}

impl<H: Heuristic> Search<H> {
    pub fn new(start: CubieCube, heuristic: H) -> Self {
        let h = heuristic.estimate(&start);
        let mut search = Self {
            heuristic,
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            best_g: HashMap::new(),
            explored: HashSet::new(),
            expanded: 0,
        };
        search.best_g.insert(start, 0);
        search.push(Node {
            cube: start,
            g: 0,
            h,
            parent: None,
            mv: None,
        });
        search
    }

    /// Number of nodes expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of states finalized in the explored set.
    pub fn explored(&self) -> usize {
        self.explored.len()
    }

    /// Number of distinct states reached so far, queued ones included.
    pub fn discovered(&self) -> usize {
        self.best_g.len()
    }

    /// Number of entries waiting in the frontier, stale ones included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn push(&mut self, node: Node) {
        let index = self.nodes.len();
        self.frontier.push(FrontierEntry {
            f: node.g as u16 + node.h as u16,
            g: node.g,
            node: index,
        });
        self.nodes.push(node);
    }

    /// Follow parent links from `index` back to the root.
    fn path(&self, mut index: usize) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.nodes[index].g as usize);
        while let Some(parent) = self.nodes[index].parent {
            if let Some(m) = self.nodes[index].mv {
                moves.push(m);
            }
            index = parent;
        }
        moves.reverse();
        moves
    }

    /// Pop the best frontier node and expand it.
    pub fn step(&mut self) -> Step {
        loop {
            let Some(entry) = self.frontier.pop() else {
                return Step::Exhausted;
            };
            let node = self.nodes[entry.node];
            if self.explored.contains(&node.cube) {
                // superseded by a cheaper entry for the same state
                continue;
            }
            if node.cube.is_solved() {
                return Step::Solved(self.path(entry.node));
            }

            self.explored.insert(node.cube);
            self.expanded += 1;
            trace!(
                "expand g={} h={} frontier={}",
                node.g,
                node.h,
                self.frontier.len()
            );

            for m in ALL_MOVES {
                if is_redundant(node.mv, m) {
                    continue;
                }
                let cube = node.cube.apply_move(m);
                if self.explored.contains(&cube) {
                    continue;
                }
                let g = node.g + 1;
                if self.best_g.get(&cube).is_some_and(|&best| best <= g) {
                    continue;
                }
                self.best_g.insert(cube, g);
                let h = self.heuristic.estimate(&cube);
                self.push(Node {
                    cube,
                    g,
                    h,
                    parent: Some(entry.node),
                    mv: Some(m),
                });
            }
            return Step::Expanded;
        }
    }
}

/// Whether `m` after `prev` only reaches states a shorter or reordered path already covers.
///
/// A second turn of the same face is a single turn from the parent. Opposite faces commute, so
/// only the U, R, F before D, L, B order is searched.
fn is_redundant(prev: Option<Move>, m: Move) -> bool {
    prev.is_some_and(|prev| prev.is_same_layer(m) || (prev.is_same_axis(m) && prev > m))
}

/// Solve a cube with the per-cubie distance heuristic and no limits.
///
/// # Examples
/// ```rust
/// use astar_cube::cubie::CubieCube;
/// use astar_cube::moves::Move::*;
/// use astar_cube::solver::solve;
///
/// let cube = CubieCube::from(&vec![R, U, F3]);
/// let solution = solve(&cube).unwrap();
/// assert_eq!(solution.len(), 3);
/// assert!(cube.apply_moves(&solution).is_solved());
/// ```
pub fn solve(start: &CubieCube) -> Result<Vec<Move>, Error> {
    solve_with(start, CubieDistance, SearchLimits::default()).map(|result| result.solution)
}

/// Solve a cube with the given heuristic within the given limits.
///
/// # Parameters
/// * `start`: the cube to solve, must be reachable from the solved cube.
/// * `heuristic`: an admissible, consistent [`Heuristic`].
/// * `limits`: see [`SearchLimits`].
pub fn solve_with<H: Heuristic>(
    start: &CubieCube,
    heuristic: H,
    limits: SearchLimits,
) -> Result<SolutionResult, Error> {
    start.verify()?;
    let start_time = Instant::now();
    let mut search = Search::new(*start, heuristic);
    info!("searching, start estimate {}", search.nodes[0].h);

    loop {
        match search.step() {
            Step::Expanded => {
                let expanded = search.expanded();
                if expanded % 10_000 == 0 {
                    debug!(
                        "expanded {} nodes, {} states discovered",
                        expanded,
                        search.discovered()
                    );
                }
                let over_budget = limits.max_expansions.is_some_and(|max| expanded >= max)
                    || limits
                        .timeout
                        .is_some_and(|timeout| start_time.elapsed() >= timeout);
                if over_budget {
                    info!("search budget exhausted after {} expansions", expanded);
                    return Err(Error::BudgetExhausted { expanded });
                }
            }
            Step::Solved(solution) => {
                let result = SolutionResult {
                    solution,
                    expanded: search.expanded(),
                    discovered: search.discovered(),
                    solve_time: start_time.elapsed(),
                };
                info!(
                    "solved in {} moves, {} nodes expanded, {:?}",
                    result.solution.len(),
                    result.expanded,
                    result.solve_time
                );
                return Ok(result);
            }
            Step::Exhausted => {
                return Err(Error::SolverExhausted {
                    explored: search.explored(),
                });
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::heuristic::MisplacedCubies;
    use crate::moves::Move::*;
    use crate::scramble::scramble;
    use crate::solver::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn test_solve_solved() {
        let result =
            solve_with(&CubieCube::default(), CubieDistance, SearchLimits::default()).unwrap();
        assert!(result.solution.is_empty());
        assert_eq!(result.expanded, 0);
        assert_eq!(result.discovered, 1);
    }

    #[test]
    fn test_solve_single_move() {
        let cc = CubieCube::default().apply_move(R);
        assert_eq!(solve(&cc).unwrap(), vec![R3]);
    }

    #[test]
    fn test_solve_seeded_scramble() {
        let (cc, moves) = scramble(5, 2024);
        assert_eq!(moves.len(), 5);
        let solution = solve(&cc).unwrap();
        assert!(solution.len() <= 5);
        let solved = cc.apply_moves(&solution);
        assert_eq!(solved.cp, CubieCube::default().cp);
        assert_eq!(solved.co, CubieCube::default().co);
        assert_eq!(solved.ep, CubieCube::default().ep);
        assert_eq!(solved.eo, CubieCube::default().eo);
    }

    #[test]
    fn test_heuristics_agree_on_length() {
        let cc = CubieCube::from(&vec![F, R2, D3]);
        let a = solve_with(&cc, CubieDistance, SearchLimits::default()).unwrap();
        let b = solve_with(&cc, MisplacedCubies, SearchLimits::default()).unwrap();
        assert_eq!(a.solution.len(), 3);
        assert_eq!(b.solution.len(), 3);
        assert!(cc.apply_moves(&b.solution).is_solved());
    }

    #[test]
    fn test_step_by_step() {
        let cc = CubieCube::from(&vec![U, L]);
        let mut search = Search::new(cc, CubieDistance);
        let mut steps = 0;
        let solution = loop {
            match search.step() {
                Step::Expanded => steps += 1,
                Step::Solved(moves) => break moves,
                Step::Exhausted => panic!("frontier ran empty"),
            }
        };
        assert_eq!(solution, vec![L3, U3]);
        assert_eq!(steps, search.expanded());
        assert_eq!(search.explored(), steps);
        assert!(search.discovered() > steps);
    }

    #[test]
    fn test_expansion_budget() {
        let cc = CubieCube::from(&vec![R, U, F, L]);
        let limits = SearchLimits {
            max_expansions: Some(1),
            timeout: None,
        };
        let result = solve_with(&cc, CubieDistance, limits);
        assert!(matches!(
            result,
            Err(Error::BudgetExhausted { expanded: 1 })
        ));
    }

    #[test]
    fn test_timeout_budget() {
        let cc = CubieCube::from(&vec![R, U, F, L]);
        let limits = SearchLimits {
            max_expansions: None,
            timeout: Some(Duration::ZERO),
        };
        let result = solve_with(&cc, CubieDistance, limits);
        assert!(matches!(
            result,
            Err(Error::BudgetExhausted { expanded: 1 })
        ));
    }

    #[test]
    fn test_timeout_secs() {
        let limits = SearchLimits::default().with_timeout_secs(1.5).unwrap();
        assert_eq!(limits.timeout, Some(Duration::from_millis(1500)));
        assert_eq!(limits.max_expansions, None);
        for secs in [-1.0, f32::NAN, f32::INFINITY, f32::MAX] {
            assert!(matches!(
                SearchLimits::default().with_timeout_secs(secs),
                Err(Error::InvalidTimeout(_))
            ));
        }
    }

    #[test]
    fn test_successor_pruning() {
        assert!(!is_redundant(None, U));
        assert!(is_redundant(Some(R), R2));
        assert!(is_redundant(Some(D), U3));
        assert!(!is_redundant(Some(U), D3));
        assert!(is_redundant(Some(B2), F));
        assert!(!is_redundant(Some(F2), B));
        let after = |prev| ALL_MOVES.iter().filter(|&&m| !is_redundant(Some(prev), m)).count();
        assert_eq!(after(U), 15);
        assert_eq!(after(L3), 12);

        let solution = solve(&CubieCube::from(&vec![D, U])).unwrap();
        assert_eq!(solution, vec![U3, D3]);
    }

    #[test]
    fn test_malformed_start() {
        let mut cc = CubieCube::default();
        cc.co[0] = 2;
        assert!(matches!(solve(&cc), Err(Error::MalformedState(_))));
    }

    #[test]
    fn test_frontier_order() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { f: 5, g: 1, node: 0 });
        heap.push(FrontierEntry { f: 4, g: 1, node: 1 });
        heap.push(FrontierEntry { f: 4, g: 3, node: 2 });
        heap.push(FrontierEntry { f: 4, g: 3, node: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }

    fn any_move() -> impl Strategy<Value = Move> {
        (0..N_MOVE).prop_map(|i| ALL_MOVES[i])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]
        #[test]
        fn solution_no_longer_than_scramble(mvs in vec(any_move(), 0..5)) {
            let cc = CubieCube::from(&mvs);
            let solution = solve(&cc).unwrap();
            prop_assert!(solution.len() <= mvs.len());
            prop_assert!(cc.apply_moves(&solution).is_solved());
            for pair in solution.windows(2) {
                prop_assert!(!pair[0].is_same_layer(pair[1]));
                prop_assert!(!(pair[0].is_same_axis(pair[1]) && pair[0] > pair[1]));
            }
        }
    }
}
