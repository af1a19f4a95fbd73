use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::cubie::{CubieCube, SOLVED_CUBE};
use crate::error::Error;

/// The six face colors, named after the face whose center carries them.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidFaceletValue),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Facelet indices, faces in the order U, R, F, D, L, B, each read row by row.
//
//             |************|
//             |*U1**U2**U3*|
//             |************|
//             |*U4**U5**U6*|
//             |************|
//             |*U7**U8**U9*|
// ************|************|************|************|
// *L1**L2**L3*|*F1**F2**F3*|*R1**R2**R3*|*B1**B2**B3*|
// ************|************|************|************|
// *L4**L5**L6*|*F4**F5**F6*|*R4**R5**R6*|*B4**B5**B6*|
// ************|************|************|************|
// *L7**L8**L9*|*F7**F8**F9*|*R7**R8**R9*|*B7**B8**B9*|
// ************|************|************|************|
//             |*D1**D2**D3*|
//             |************|
//             |*D4**D5**D6*|
//             |************|
//             |*D7**D8**D9*|
//             |************|

/// Map the corner positions to facelet positions, clockwise starting with the U/D facelet.
const CORNER_FACELET: [[usize; 3]; N_CORNERS] = [
    [8, 9, 20],   // URF: U9 R1 F3
    [6, 18, 38],  // UFL: U7 F1 L3
    [0, 36, 47],  // ULB: U1 L1 B3
    [2, 45, 11],  // UBR: U3 B1 R3
    [29, 26, 15], // DFR: D3 F9 R7
    [27, 44, 24], // DLF: D1 L9 F7
    [33, 53, 42], // DBL: D7 B9 L7
    [35, 17, 51], // DRB: D9 R9 B7
];

/// Map the edge positions to facelet positions.
const EDGE_FACELET: [[usize; 2]; N_EDGES] = [
    [5, 10],  // UR
    [7, 19],  // UF
    [3, 37],  // UL
    [1, 46],  // UB
    [32, 16], // DR
    [28, 25], // DF
    [30, 43], // DL
    [34, 52], // DB
    [23, 12], // FR
    [21, 41], // FL
    [50, 39], // BL
    [48, 14], // BR
];

#[rustfmt::skip]
const CORNER_COLOR: [[Color; 3]; N_CORNERS] = {
    use Color::*;
    [
        [U, R, F], [U, F, L], [U, L, B], [U, B, R],
        [D, F, R], [D, L, F], [D, B, L], [D, R, B],
    ]
};

#[rustfmt::skip]
const EDGE_COLOR: [[Color; 2]; N_EDGES] = {
    use Color::*;
    [
        [U, R], [U, F], [U, L], [U, B], [D, R], [D, F],
        [D, L], [D, B], [F, R], [F, L], [B, L], [B, R],
    ]
};

const CENTERS: [usize; 6] = [4, 13, 22, 31, 40, 49];

/// Represent a cube on the facelet level, the sticker view a display needs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FaceCube {
    pub f: [Color; N_FACELETS],
}

impl Default for FaceCube {
    fn default() -> Self {
        FaceCube::from(&SOLVED_CUBE)
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.f {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    /// Parse a 54 character facelet string, faces in the order U, R, F, D, L, B.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.chars().count() != N_FACELETS {
            return Err(Error::InvalidFaceletString);
        }
        let mut f = [Color::U; N_FACELETS];
        let mut count = [0; 6];
        for (i, ch) in value.chars().enumerate() {
            let color = Color::try_from(ch)?;
            f[i] = color;
            count[color as usize] += 1;
        }
        if count.iter().any(|&n| n != 9) {
            return Err(Error::InvalidFaceletString);
        }
        for (center, color) in CENTERS.iter().zip(ALL_COLORS) {
            if f[*center] != color {
                return Err(Error::InvalidFaceletString);
            }
        }
        Ok(FaceCube { f })
    }
}

impl From<&CubieCube> for FaceCube {
    fn from(cc: &CubieCube) -> Self {
        let mut f = [Color::U; N_FACELETS];
        for (center, color) in CENTERS.iter().zip(ALL_COLORS) {
            f[*center] = color;
        }
        for i in 0..N_CORNERS {
            let j = cc.cp[i] as usize;
            let ori = cc.co[i] as usize;
            for k in 0..3 {
                f[CORNER_FACELET[i][(k + ori) % 3]] = CORNER_COLOR[j][k];
            }
        }
        for i in 0..N_EDGES {
            let j = cc.ep[i] as usize;
            let ori = cc.eo[i] as usize;
            for k in 0..2 {
                f[EDGE_FACELET[i][(k + ori) % 2]] = EDGE_COLOR[j][k];
            }
        }
        FaceCube { f }
    }
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    /// Recover the cubies from the stickers, rejecting sticker sets no cube can show.
    fn try_from(fc: &FaceCube) -> Result<Self, Self::Error> {
        let mut cc = SOLVED_CUBE;
        for i in 0..N_CORNERS {
            let fac = CORNER_FACELET[i];
            let ori = (0..3)
                .find(|&o| matches!(fc.f[fac[o]], Color::U | Color::D))
                .ok_or(Error::InvalidFaceletValue)?;
            let col1 = fc.f[fac[(ori + 1) % 3]];
            let col2 = fc.f[fac[(ori + 2) % 3]];
            let j = (0..N_CORNERS)
                .find(|&j| col1 == CORNER_COLOR[j][1] && col2 == CORNER_COLOR[j][2])
                .ok_or(Error::InvalidFaceletValue)?;
            cc.cp[i] = ALL_CORNERS[j];
            cc.co[i] = ori as u8;
        }

        for i in 0..N_EDGES {
            let a = fc.f[EDGE_FACELET[i][0]];
            let b = fc.f[EDGE_FACELET[i][1]];
            let (j, ori) = (0..N_EDGES)
                .find_map(|j| {
                    if a == EDGE_COLOR[j][0] && b == EDGE_COLOR[j][1] {
                        Some((j, 0))
                    } else if a == EDGE_COLOR[j][1] && b == EDGE_COLOR[j][0] {
                        Some((j, 1))
                    } else {
                        None
                    }
                })
                .ok_or(Error::InvalidFaceletValue)?;
            cc.ep[i] = ALL_EDGES[j];
            cc.eo[i] = ori;
        }

        cc.verify()?;
        Ok(cc)
    }
}
