use crate::cubie::{Corner, Corner::*, Edge, Edge::*};
use crate::facelet::Color;
use crate::moves::Move::{self, *};

/// Number of corner cubies.
pub const N_CORNERS: usize = 8;
/// Number of edge cubies.
pub const N_EDGES: usize = 12;
/// Number of moves in the face turn metric alphabet.
pub const N_MOVE: usize = 18;
/// Number of (slot, orientation) pairs a single corner or edge can occupy.
pub const N_CUBIE_STATES: usize = 24;
/// Number of stickers on the cube.
pub const N_FACELETS: usize = 54;

/// Cubies a single face turn displaces, per cubie type.
pub const CUBIES_PER_TURN: u8 = 4;

#[rustfmt::skip]
pub const ALL_CORNERS: [Corner; N_CORNERS] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];

#[rustfmt::skip]
pub const ALL_EDGES: [Edge; N_EDGES] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];

/// All 18 moves, grouped by face in the order U, R, F, D, L, B.
#[rustfmt::skip]
pub const ALL_MOVES: [Move; N_MOVE] = [
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
];

pub const ALL_COLORS: [Color; 6] = [
    Color::U,
    Color::R,
    Color::F,
    Color::D,
    Color::L,
    Color::B,
];
