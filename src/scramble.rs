use std::str::FromStr;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::constants::{ALL_MOVES, N_MOVE};
use crate::cubie::CubieCube;
use crate::{error::Error, Move};

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

pub fn scramble_to_str(s: &[Move]) -> String {
    s.iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draw `length` moves and apply them to the solved cube.
///
/// Each move is drawn uniformly from the moves that do not turn the same face as the move
/// before it, so no two consecutive moves cancel or merge.
///
/// Returns the scrambled cube together with the moves that produced it.
pub fn random_scramble<R: Rng + ?Sized>(length: usize, rng: &mut R) -> (CubieCube, Vec<Move>) {
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    for _ in 0..length {
        let m = match moves.last() {
            None => ALL_MOVES[rng.gen_range(0..N_MOVE)],
            Some(prev) => {
                // draw from the 15 moves left once the previous face's three turns are cut out
                let first = prev.face() as usize * 3;
                let i = rng.gen_range(0..N_MOVE - 3);
                ALL_MOVES[if i < first { i } else { i + 3 }]
            }
        };
        moves.push(m);
    }
    (CubieCube::from(&moves), moves)
}

/// Reproducible scramble: the same `length` and `seed` always give the same moves.
pub fn scramble(length: usize, seed: u64) -> (CubieCube, Vec<Move>) {
    let mut rng = StdRng::seed_from_u64(seed);
    random_scramble(length, &mut rng)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
        assert!(matches!(
            scramble_from_str("R U Q"),
            Err(Error::InvalidMove(token)) if token == "Q"
        ));
    }

    #[test]
    fn test_scramble_to_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
        assert_eq!(scramble_to_str(&[]), "");
    }

    #[test]
    fn test_scramble_length_and_state() {
        let (cc, moves) = scramble(25, 7);
        assert_eq!(moves.len(), 25);
        assert_eq!(cc, CubieCube::default().apply_moves(&moves));
        assert!(cc.verify().is_ok());
        for pair in moves.windows(2) {
            assert!(!pair[0].is_same_layer(pair[1]));
        }
    }

    #[test]
    fn test_scramble_constant_rng() {
        // an rng that always draws index 0 still yields `length` moves, never repeating a face
        let mut rng = StepRng::new(0, 0);
        let (cc, moves) = random_scramble(6, &mut rng);
        assert_eq!(moves, vec![U, R, U, R, U, R]);
        assert_eq!(cc, CubieCube::from(&moves));
    }

    #[test]
    fn test_scramble_covers_all_moves() {
        let mut rng = StdRng::seed_from_u64(5);
        let (_, moves) = random_scramble(2000, &mut rng);
        for m in ALL_MOVES {
            assert!(moves.contains(&m), "{m}");
        }
    }

    #[test]
    fn test_scramble_zero() {
        let (cc, moves) = scramble(0, 1);
        assert!(moves.is_empty());
        assert!(cc.is_solved());
    }

    #[test]
    fn test_scramble_reproducible() {
        assert_eq!(scramble(12, 99), scramble(12, 99));
        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(random_scramble(12, &mut rng), scramble(12, 99));
    }
}
