use std::fmt;

use serde::{Deserialize, Serialize};

use self::{Corner::*, Edge::*};
use crate::constants::*;
use crate::error::Error;
use crate::moves::{Move, MOVE_CUBES};

/// The names of the corner positions of the cube. Corner URF e.g. has an U(p), a R(ight) and a F(ront) facelet.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

/// The names of the edge positions of the cube. Edge UR e.g. has an U(p) and R(ight) facelet.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

/// Represent a cube on the cubie level.
///
/// The 20 movable cubies are stored in the "replaced-by" convention: slot `i` is occupied by
/// corner `cp[i]` with twist `co[i]` (mod 3) and by edge `ep[i]` with flip `eo[i]` (mod 2).
/// Centers never move and are not stored.
///
/// Values are never changed in place by the public API; [`CubieCube::apply_move`] returns a
/// fresh cube, so a state may be shared freely between search nodes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct CubieCube {
    pub cp: [Corner; N_CORNERS],
    pub co: [u8; N_CORNERS],
    pub ep: [Edge; N_EDGES],
    pub eo: [u8; N_EDGES],
}

/// The solved cube, the goal of every search.
pub const SOLVED_CUBE: CubieCube = CubieCube {
    cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
    co: [0; N_CORNERS],
    ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
    eo: [0; N_EDGES],
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBE
    }
}

impl fmt::Display for CubieCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, o) in self.cp.iter().zip(self.co) {
            write!(f, "({:?},{})", c, o)?;
        }
        writeln!(f)?;
        for (e, o) in self.ep.iter().zip(self.eo) {
            write!(f, "({:?},{})", e, o)?;
        }
        Ok(())
    }
}

impl From<&[Move]> for CubieCube {
    fn from(moves: &[Move]) -> Self {
        CubieCube::default().apply_moves(moves)
    }
}

impl From<&Vec<Move>> for CubieCube {
    fn from(moves: &Vec<Move>) -> Self {
        CubieCube::from(moves.as_slice())
    }
}

impl CubieCube {
    pub fn is_solved(&self) -> bool {
        *self == SOLVED_CUBE
    }

    /// Multiply this cube with another cube b, restricted to the corners.
    pub fn corner_multiply(&mut self, b: CubieCube) {
        let mut cp = self.cp;
        let mut co = self.co;
        for c in 0..N_CORNERS {
            let from = b.cp[c] as usize;
            cp[c] = self.cp[from];
            co[c] = (self.co[from] + b.co[c]) % 3;
        }
        self.cp = cp;
        self.co = co;
    }

    /// Multiply this cube with another cube b, restricted to the edges.
    pub fn edge_multiply(&mut self, b: CubieCube) {
        let mut ep = self.ep;
        let mut eo = self.eo;
        for e in 0..N_EDGES {
            let from = b.ep[e] as usize;
            ep[e] = self.ep[from];
            eo[e] = (self.eo[from] + b.eo[e]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Multiply this cube with another cube b.
    pub fn multiply(&mut self, b: CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// The cube reached by turning `m` on this cube.
    pub fn apply_move(&self, m: Move) -> Self {
        let mut cc = *self;
        cc.multiply(MOVE_CUBES[m as usize]);
        cc
    }

    /// The cube reached by turning every move of `moves`, in order, on this cube.
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        moves.iter().fold(*self, |cc, &m| cc.apply_move(m))
    }

    /// Return the inverse of this cubiecube, so that `self * inverse == solved`.
    pub fn inverse_cubie_cube(&self) -> Self {
        let mut d = SOLVED_CUBE;
        for e in 0..N_EDGES {
            d.ep[self.ep[e] as usize] = ALL_EDGES[e];
        }
        for e in 0..N_EDGES {
            d.eo[e] = self.eo[d.ep[e] as usize];
        }
        for c in 0..N_CORNERS {
            d.cp[self.cp[c] as usize] = ALL_CORNERS[c];
        }
        for c in 0..N_CORNERS {
            let ori = self.co[d.cp[c] as usize];
            d.co[c] = (3 - ori) % 3;
        }
        d
    }

    /// Give the parity of the corner permutation.
    pub fn corner_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..N_CORNERS).rev() {
            for j in 0..i {
                if self.cp[j] > self.cp[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Give the parity of the edge permutation. A solvable cube has the same corner and edge parity.
    pub fn edge_parity(&self) -> u8 {
        let mut s = 0;
        for i in (1..N_EDGES).rev() {
            for j in 0..i {
                if self.ep[j] > self.ep[i] {
                    s += 1;
                }
            }
        }
        s % 2
    }

    /// Check if cubiecube is reachable from the solved cube by face turns.
    pub fn verify(&self) -> Result<(), Error> {
        let mut edge_count = [0; N_EDGES];
        for e in self.ep {
            edge_count[e as usize] += 1;
        }
        if edge_count.iter().any(|&n| n != 1) {
            return Err(Error::MalformedState("some edges are undefined or duplicated"));
        }
        if self.eo.iter().any(|&o| o > 1) {
            return Err(Error::MalformedState("edge flip out of range"));
        }
        if self.eo.iter().map(|&o| o as u32).sum::<u32>() % 2 != 0 {
            return Err(Error::MalformedState("total edge flip is wrong"));
        }

        let mut corner_count = [0; N_CORNERS];
        for c in self.cp {
            corner_count[c as usize] += 1;
        }
        if corner_count.iter().any(|&n| n != 1) {
            return Err(Error::MalformedState("some corners are undefined or duplicated"));
        }
        if self.co.iter().any(|&o| o > 2) {
            return Err(Error::MalformedState("corner twist out of range"));
        }
        if self.co.iter().map(|&o| o as u32).sum::<u32>() % 3 != 0 {
            return Err(Error::MalformedState("total corner twist is wrong"));
        }

        if self.edge_parity() != self.corner_parity() {
            return Err(Error::MalformedState("wrong edge and corner parity"));
        }
        Ok(())
    }

    pub fn is_solvable(&self) -> bool {
        self.verify().is_ok()
    }
}
