//! The cubie-level state algebra.
//!
//! A [`CubieCube`] describes a cube state by where each corner and edge cubie sits and
//! how it is twisted or flipped. Moves and symmetries are themselves `CubieCube`s, and
//! "applying" one to a state is the group composition implemented by [`CubieCube::mul`].
//!
//! Corner orientations normally lie in `0..=2`. Values in `3..=5` mark a *mirrored*
//! chirality and appear only while composing with the LR-mirror symmetry; they never
//! occur in a state derived from a real puzzle position, so no raw coordinate ever
//! encodes them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of corner cubies.
pub const N_CORNERS: usize = 8;
/// Number of edge cubies.
pub const N_EDGES: usize = 12;

// Corner cubies, named by their faces.
pub const URF: u8 = 0;
pub const UFL: u8 = 1;
pub const ULB: u8 = 2;
pub const UBR: u8 = 3;
pub const DFR: u8 = 4;
pub const DLF: u8 = 5;
pub const DBL: u8 = 6;
pub const DRB: u8 = 7;

// Edge cubies. The four UD-slice edges (FR, FL, BL, BR) come last; phase 2 of the
// solver depends on this partition staying intact.
pub const UR: u8 = 0;
pub const UF: u8 = 1;
pub const UL: u8 = 2;
pub const UB: u8 = 3;
pub const DR: u8 = 4;
pub const DF: u8 = 5;
pub const DL: u8 = 6;
pub const DB: u8 = 7;
pub const FR: u8 = 8;
pub const FL: u8 = 9;
pub const BL: u8 = 10;
pub const BR: u8 = 11;

/// A cube state on the cubie level: permutations plus orientations for corners and
/// edges. `cp[i]` is the corner occupying position `i`, `co[i]` its orientation;
/// likewise `ep`/`eo` for edges.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct CubieCube {
    pub cp: [u8; N_CORNERS],
    pub co: [u8; N_CORNERS],
    pub ep: [u8; N_EDGES],
    pub eo: [u8; N_EDGES],
}

impl CubieCube {
    /// The solved cube; identity of the composition group.
    pub const SOLVED: CubieCube = CubieCube {
        cp: [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB],
        co: [0; N_CORNERS],
        ep: [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR],
        eo: [0; N_EDGES],
    };

    /// Composes two cube states: the result is `self` followed by `rhs` (i.e. `rhs`
    /// permutes the cubies of `self`). Handles the mirrored corner-orientation range
    /// so that symmetry cubes compose correctly.
    pub fn mul(&self, rhs: &CubieCube) -> CubieCube {
        let mut cp = [0; N_CORNERS];
        let mut co = [0; N_CORNERS];
        for i in 0..N_CORNERS {
            cp[i] = self.cp[rhs.cp[i] as usize];
            let ori_a = self.co[rhs.cp[i] as usize];
            let ori_b = rhs.co[i];
            co[i] = if ori_a < 3 && ori_b < 3 {
                (ori_a + ori_b) % 3
            } else if ori_a < 3 {
                // Right factor mirrored; the result stays mirrored.
                let ori = ori_a + ori_b;
                if ori >= 6 {
                    ori - 3
                } else {
                    ori
                }
            } else if ori_b < 3 {
                // Left factor mirrored; the result stays mirrored.
                let ori = ori_a - ori_b;
                if ori < 3 {
                    ori + 3
                } else {
                    ori
                }
            } else {
                // Two mirrors cancel.
                (3 + ori_a - ori_b) % 3
            };
        }
        let mut ep = [0; N_EDGES];
        let mut eo = [0; N_EDGES];
        for i in 0..N_EDGES {
            ep[i] = self.ep[rhs.ep[i] as usize];
            eo[i] = (self.eo[rhs.ep[i] as usize] + rhs.eo[i]) & 1;
        }
        CubieCube { cp, co, ep, eo }
    }

    /// The inverse state: `self.mul(&self.inverse())` is solved.
    pub fn inverse(&self) -> CubieCube {
        let mut inv = CubieCube::SOLVED;
        for i in 0..N_EDGES {
            inv.ep[self.ep[i] as usize] = i as u8;
        }
        for i in 0..N_EDGES {
            inv.eo[i] = self.eo[inv.ep[i] as usize];
        }
        for i in 0..N_CORNERS {
            inv.cp[self.cp[i] as usize] = i as u8;
        }
        for i in 0..N_CORNERS {
            let ori = self.co[inv.cp[i] as usize];
            inv.co[i] = if ori >= 3 { ori } else { (3 - ori) % 3 };
        }
        inv
    }

    /// Applies an elementary move.
    pub fn apply(&self, m: Move) -> CubieCube {
        self.mul(&m.cube())
    }
}

/// Number of elementary moves.
pub const N_MOVES: usize = 18;

/// An elementary face move. The B-face moves come last so that a 5-face move set is
/// a prefix of the full one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[rustfmt::skip]
pub enum Move {
    U1, U2, U3,
    R1, R2, R3,
    F1, F2, F3,
    D1, D2, D3,
    L1, L2, L3,
    B1, B2, B3,
}

#[rustfmt::skip]
const ALL_MOVES: [Move; N_MOVES] = [
    Move::U1, Move::U2, Move::U3,
    Move::R1, Move::R2, Move::R3,
    Move::F1, Move::F2, Move::F3,
    Move::D1, Move::D2, Move::D3,
    Move::L1, Move::L2, Move::L3,
    Move::B1, Move::B2, Move::B3,
];

impl Move {
    /// All moves, in index order.
    pub const ALL: [Move; N_MOVES] = ALL_MOVES;

    /// Dense index in `0..N_MOVES`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Move::index`]. Panics if out of range.
    pub fn from_index(index: usize) -> Move {
        ALL_MOVES[index]
    }

    /// The cubie-level effect of this move.
    pub fn cube(self) -> CubieCube {
        let base = &BASE_MOVE_CUBES[self.index() / 3];
        let mut cube = *base;
        for _ in 0..self.index() % 3 {
            cube = cube.mul(base);
        }
        cube
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let faces = ["U", "R", "F", "D", "L", "B"];
        let suffix = ["", "2", "'"];
        write!(f, "{}{}", faces[self.index() / 3], suffix[self.index() % 3])
    }
}

// Cubie-level definitions of the six clockwise quarter turns.
const BASE_MOVE_CUBES: [CubieCube; 6] = [
    // U
    CubieCube {
        cp: [UBR, URF, UFL, ULB, DFR, DLF, DBL, DRB],
        co: [0; N_CORNERS],
        ep: [UB, UR, UF, UL, DR, DF, DL, DB, FR, FL, BL, BR],
        eo: [0; N_EDGES],
    },
    // R
    CubieCube {
        cp: [DFR, UFL, ULB, URF, DRB, DLF, DBL, UBR],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [FR, UF, UL, UB, BR, DF, DL, DB, DR, FL, BL, UR],
        eo: [0; N_EDGES],
    },
    // F
    CubieCube {
        cp: [UFL, DLF, ULB, UBR, URF, DFR, DBL, DRB],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [UR, FL, UL, UB, DR, FR, DL, DB, UF, DF, BL, BR],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    CubieCube {
        cp: [URF, UFL, ULB, UBR, DLF, DBL, DRB, DFR],
        co: [0; N_CORNERS],
        ep: [UR, UF, UL, UB, DF, DL, DB, DR, FR, FL, BL, BR],
        eo: [0; N_EDGES],
    },
    // L
    CubieCube {
        cp: [URF, ULB, DBL, UBR, DFR, UFL, DLF, DRB],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [UR, UF, BL, UB, DR, DF, FL, DB, FR, UL, DL, BR],
        eo: [0; N_EDGES],
    },
    // B
    CubieCube {
        cp: [URF, UFL, UBR, DRB, DFR, DLF, ULB, DBL],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [UR, UF, UL, BR, DR, DF, DL, BL, FR, FL, UB, DB],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quarter_turns_have_order_four() {
        for face in [Move::U1, Move::R1, Move::F1, Move::D1, Move::L1, Move::B1] {
            let mut cube = CubieCube::SOLVED;
            for _ in 0..4 {
                cube = cube.apply(face);
            }
            assert_eq!(cube, CubieCube::SOLVED, "{}^4 should be solved", face);
        }
    }

    #[test]
    fn triple_turn_is_inverse_of_single() {
        for i in (0..N_MOVES).step_by(3) {
            let single = Move::from_index(i).cube();
            let triple = Move::from_index(i + 2).cube();
            assert_eq!(single.mul(&triple), CubieCube::SOLVED);
        }
    }

    #[test]
    fn inverse_composes_to_identity() {
        let scramble = [Move::R1, Move::U2, Move::F3, Move::L1, Move::B2, Move::D1];
        let mut cube = CubieCube::SOLVED;
        for m in scramble {
            cube = cube.apply(m);
        }
        assert_eq!(cube.mul(&cube.inverse()), CubieCube::SOLVED);
        assert_eq!(cube.inverse().mul(&cube), CubieCube::SOLVED);
    }

    #[test]
    fn composition_is_associative() {
        let a = Move::R1.cube().mul(&Move::U1.cube());
        let b = Move::F2.cube().mul(&Move::L3.cube());
        let c = Move::D1.cube().mul(&Move::B1.cube());
        assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    }

    #[test]
    fn moves_permute_cubies_consistently() {
        for m in Move::ALL {
            let cube = m.cube();
            let mut corners: Vec<u8> = cube.cp.to_vec();
            corners.sort_unstable();
            assert_eq!(corners, (0..N_CORNERS as u8).collect::<Vec<_>>());
            let mut edges: Vec<u8> = cube.ep.to_vec();
            edges.sort_unstable();
            assert_eq!(edges, (0..N_EDGES as u8).collect::<Vec<_>>());
            assert_eq!(cube.co.iter().map(|&o| o as u32).sum::<u32>() % 3, 0);
            assert_eq!(cube.eo.iter().map(|&o| o as u32).sum::<u32>() % 2, 0);
        }
    }
}
