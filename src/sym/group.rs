//! Private module for selective re-export.

use crate::cubie::*;
use serde::{Deserialize, Serialize};

/// Total number of cube symmetries.
pub const N_SYMS: usize = 48;

// The four basic symmetries every other one is a composition of.

/// Mirror through the plane between the L and R faces. Note the mirrored corner
/// orientations.
const LR2_CUBE: CubieCube = CubieCube {
    cp: [UFL, URF, UBR, ULB, DLF, DFR, DRB, DBL],
    co: [3; N_CORNERS],
    ep: [UL, UF, UR, UB, DL, DF, DR, DB, FL, FR, BR, BL],
    eo: [0; N_EDGES],
};

/// 90 degree rotation around the U-D axis.
const U4_CUBE: CubieCube = CubieCube {
    cp: [UBR, URF, UFL, ULB, DRB, DFR, DLF, DBL],
    co: [0; N_CORNERS],
    ep: [UB, UR, UF, UL, DB, DR, DF, DL, BR, FR, FL, BL],
    eo: [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
};

/// 180 degree rotation around the F-B axis.
const F2_CUBE: CubieCube = CubieCube {
    cp: [DLF, DFR, DRB, DBL, UFL, URF, UBR, ULB],
    co: [0; N_CORNERS],
    ep: [DL, DF, DR, DB, UL, UF, UR, UB, FL, FR, BR, BL],
    eo: [0; N_EDGES],
};

/// 120 degree rotation around the axis through the URF and DBL corners.
const URF3_CUBE: CubieCube = CubieCube {
    cp: [URF, DFR, DLF, UFL, UBR, DRB, DBL, ULB],
    co: [1, 2, 1, 2, 2, 1, 2, 1],
    ep: [UF, FR, DF, FL, UB, BR, DB, BL, UR, DR, DL, UL],
    eo: [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1],
};

/// The full symmetry group of the cube: all 48 symmetries as cubie-level states,
/// their inverses, and the conjugation action on elementary moves.
///
/// Generation order is the fixed nested product `URF3^a * U4^b * F2^c * LR2^d` with
/// index `((a*4 + b)*2 + c)*2 + d`. Downstream tables are addressed by these indices,
/// so the ordering is part of the output format. It puts the identity at index 0, the
/// 16 UD-slice-preserving symmetries at `0..16` and the 4 that additionally fix the
/// B face at `0..4`, so each variant's reduction subset is a prefix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymGroup {
    cubes: Vec<CubieCube>,
    inv: Vec<u8>,
    conj_move: Vec<u8>, // N_MOVES x N_SYMS
}

impl SymGroup {
    /// Generates the group. Cheap; meant to run unconditionally at process start.
    ///
    /// Panics if the generators fail to close to exactly [`N_SYMS`] distinct
    /// symmetries or an inverse or conjugated move is missing, all of which would
    /// indicate defective generator definitions.
    pub fn generate() -> SymGroup {
        let mut cubes = Vec::with_capacity(N_SYMS);
        let mut urf3 = CubieCube::SOLVED;
        for _ in 0..3 {
            let mut u4 = urf3;
            for _ in 0..4 {
                let mut f2 = u4;
                for _ in 0..2 {
                    let mut cube = f2;
                    for _ in 0..2 {
                        cubes.push(cube);
                        cube = cube.mul(&LR2_CUBE);
                    }
                    f2 = f2.mul(&F2_CUBE);
                }
                u4 = u4.mul(&U4_CUBE);
            }
            urf3 = urf3.mul(&URF3_CUBE);
        }
        let distinct = cubes
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();
        if distinct != N_SYMS {
            panic!(
                "symmetry generation did not close: expected {} distinct symmetries, got {}",
                N_SYMS, distinct
            );
        }

        let inv: Vec<u8> = cubes
            .iter()
            .map(|cube| {
                cubes
                    .iter()
                    .position(|candidate| cube.mul(candidate) == CubieCube::SOLVED)
                    .unwrap_or_else(|| panic!("no inverse found for a symmetry")) as u8
            })
            .collect();

        let mut conj_move = Vec::with_capacity(N_MOVES * N_SYMS);
        for m in Move::ALL {
            let move_cube = m.cube();
            for s in 0..N_SYMS {
                let conj = cubes[inv[s] as usize].mul(&move_cube).mul(&cubes[s]);
                let found = Move::ALL
                    .iter()
                    .position(|&c| c.cube() == conj)
                    .unwrap_or_else(|| {
                        panic!("conjugate of move {} by symmetry {} is not a move", m, s)
                    });
                conj_move.push(found as u8);
            }
        }

        log::debug!("generated {} symmetries", N_SYMS);
        SymGroup {
            cubes,
            inv,
            conj_move,
        }
    }

    /// The cubie-level state of symmetry `s`.
    pub fn cube(&self, s: usize) -> &CubieCube {
        &self.cubes[s]
    }

    /// Index of the inverse of symmetry `s`.
    pub fn inverse(&self, s: usize) -> usize {
        self.inv[s] as usize
    }

    /// Index of the symmetry `s1 * s2` (first `s1`, then `s2`). Exhaustive search;
    /// intended for table generation and tests, not inner loops.
    pub fn compose(&self, s1: usize, s2: usize) -> usize {
        let product = self.cubes[s1].mul(&self.cubes[s2]);
        self.cubes
            .iter()
            .position(|cube| *cube == product)
            .unwrap_or_else(|| panic!("symmetry group not closed under composition"))
    }

    /// The move a symmetry-transformed state must apply to stay consistent with `m`
    /// applied to the original state: `s⁻¹ * m * s`.
    pub fn conj_move(&self, m: Move, s: usize) -> Move {
        Move::from_index(self.conj_move[m.index() * N_SYMS + s] as usize)
    }

    /// Transforms a state by symmetry `s`: computes `s⁻¹ * cube * s`. Mirrored corner
    /// orientations arising mid-product cancel before the result is returned.
    pub fn conjugate(&self, cube: &CubieCube, s: usize) -> CubieCube {
        self.cubes[self.inv[s] as usize]
            .mul(cube)
            .mul(&self.cubes[s])
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Coord, Slice, N_SLICE};
    use rand::prelude::*;

    #[test]
    fn identity_is_index_zero() {
        let group = SymGroup::generate();
        assert_eq!(*group.cube(0), CubieCube::SOLVED);
        assert_eq!(group.inverse(0), 0);
    }

    #[test]
    fn closed_under_composition() {
        let group = SymGroup::generate();
        for s1 in 0..N_SYMS {
            for s2 in 0..N_SYMS {
                // `compose` panics if the product is not in the generated set.
                group.compose(s1, s2);
            }
        }
    }

    #[test]
    fn inverses_compose_to_identity() {
        let group = SymGroup::generate();
        for s in 0..N_SYMS {
            let inv = group.inverse(s);
            assert_eq!(group.cube(s).mul(group.cube(inv)), CubieCube::SOLVED);
            assert_eq!(group.compose(s, inv), 0);
        }
    }

    #[test]
    fn first_sixteen_preserve_the_slice() {
        let group = SymGroup::generate();
        for s in 0..N_SYMS {
            let preserves = group.cube(s).ep[8..].iter().all(|&e| e >= FR);
            assert_eq!(s < 16, preserves, "symmetry {}", s);
        }
    }

    #[test]
    fn first_four_fix_the_b_face() {
        let group = SymGroup::generate();
        for s in 0..16 {
            let fixes_b = [Move::B1, Move::B2, Move::B3]
                .iter()
                .all(|&m| [Move::B1, Move::B2, Move::B3].contains(&group.conj_move(m, s)));
            assert_eq!(s < 4, fixes_b, "symmetry {}", s);
        }
    }

    #[test]
    fn mirrored_orientations_only_on_mirror_symmetries() {
        let group = SymGroup::generate();
        for s in 0..N_SYMS {
            let mirrored = group.cube(s).co.iter().any(|&o| o >= 3);
            // LR2 is the innermost generator, so odd indices are the mirrored ones.
            assert_eq!(s % 2 == 1, mirrored, "symmetry {}", s);
        }
    }

    #[test]
    fn conjugated_moves_stay_consistent() {
        let group = SymGroup::generate();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..40 {
            let mut state = CubieCube::SOLVED;
            for _ in 0..12 {
                state = state.apply(Move::ALL[rng.gen_range(0..N_MOVES)]);
            }
            let s = rng.gen_range(0..N_SYMS);
            let m = Move::ALL[rng.gen_range(0..N_MOVES)];
            let lhs = group.conjugate(&state.apply(m), s);
            let rhs = group.conjugate(&state, s).apply(group.conj_move(m, s));
            assert_eq!(lhs, rhs, "move {} symmetry {}", m, s);
        }
    }

    #[test]
    fn conjugation_by_slice_symmetries_preserves_slice_membership() {
        let in_slice = |cube: &CubieCube| cube.ep[8..].iter().filter(|&&e| e >= FR).count();
        let group = SymGroup::generate();
        for s in 0..16 {
            for raw in [0, 17, N_SLICE - 1] {
                let cube = Slice::decode(raw);
                let conj = group.conjugate(&cube, s);
                assert_eq!(
                    in_slice(&conj),
                    in_slice(&cube),
                    "symmetry {} raw {}",
                    s,
                    raw
                );
            }
        }
    }
}
