//! Raw coordinates: dense integer projections of a [`CubieCube`].
//!
//! Each coordinate kind encodes one slice of the full state (an orientation pattern or
//! a permutation of a subset of cubies) as an integer in a fixed domain. The symmetry
//! tables are defined over these projections, so every kind supplies both directions:
//! `encode` reads the projection off a cube and `decode` builds *some* cube having the
//! given raw value (all other state components solved).

use crate::cubie::*;

/// Number of corner-twist coordinates (3^7).
pub const N_TWIST: usize = 2187;
/// Number of edge-flip coordinates (2^11).
pub const N_FLIP: usize = 2048;
/// Number of UD-slice location coordinates (12 choose 4).
pub const N_SLICE: usize = 495;
/// Number of combined flip+slice coordinates.
pub const N_FSLICE: usize = N_FLIP * N_SLICE;
/// Number of corner-permutation coordinates (8!).
pub const N_CPERM: usize = 40320;
/// Number of UD-edge-permutation coordinates (8!), valid in phase 2.
pub const N_UDEDGES: usize = 40320;

/// A raw coordinate kind: a bijection between `0..Self::COUNT` and the corresponding
/// projection of cube states.
pub trait Coord {
    /// Domain size of this coordinate.
    const COUNT: usize;
    /// Short name used in diagnostics.
    const NAME: &'static str;

    /// Derives the raw coordinate of a cube.
    fn encode(cube: &CubieCube) -> usize;

    /// Builds a cube whose coordinate is `raw`; every other component is solved.
    fn decode(raw: usize) -> CubieCube;
}

/// Corner orientations. The orientation of the last corner is implied by the first
/// seven (total twist is divisible by 3).
pub struct Twist;

impl Coord for Twist {
    const COUNT: usize = N_TWIST;
    const NAME: &'static str = "twist";

    fn encode(cube: &CubieCube) -> usize {
        cube.co[..N_CORNERS - 1]
            .iter()
            .fold(0, |acc, &o| 3 * acc + o as usize)
    }

    fn decode(raw: usize) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        let mut rem = raw;
        let mut total = 0;
        for i in (0..N_CORNERS - 1).rev() {
            cube.co[i] = (rem % 3) as u8;
            total += rem % 3;
            rem /= 3;
        }
        cube.co[N_CORNERS - 1] = ((3 - total % 3) % 3) as u8;
        cube
    }
}

/// Edge orientations. The flip of the last edge is implied by the first eleven.
pub struct Flip;

impl Coord for Flip {
    const COUNT: usize = N_FLIP;
    const NAME: &'static str = "flip";

    fn encode(cube: &CubieCube) -> usize {
        cube.eo[..N_EDGES - 1]
            .iter()
            .fold(0, |acc, &o| 2 * acc + o as usize)
    }

    fn decode(raw: usize) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        let mut rem = raw;
        let mut total = 0;
        for i in (0..N_EDGES - 1).rev() {
            cube.eo[i] = (rem & 1) as u8;
            total += rem & 1;
            rem >>= 1;
        }
        cube.eo[N_EDGES - 1] = ((2 - total % 2) % 2) as u8;
        cube
    }
}

/// Locations of the four UD-slice edges, ignoring their order.
pub struct Slice;

impl Coord for Slice {
    const COUNT: usize = N_SLICE;
    const NAME: &'static str = "slice";

    fn encode(cube: &CubieCube) -> usize {
        let mut raw = 0;
        let mut k = 0;
        for (pos, &edge) in cube.ep.iter().enumerate() {
            if edge >= FR {
                k += 1;
                raw += binomial(pos, k);
            }
        }
        raw
    }

    fn decode(raw: usize) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        let mut rem = raw;
        let mut slice_positions = [0usize; 4];
        // Unrank the 4-combination, largest position first.
        for k in (1..=4usize).rev() {
            let mut pos = N_EDGES - 1;
            while binomial(pos, k) > rem {
                pos -= 1;
            }
            slice_positions[k - 1] = pos;
            rem -= binomial(pos, k);
        }
        let mut slice_edge = FR;
        let mut other_edge = UR;
        for pos in 0..N_EDGES {
            if slice_positions.contains(&pos) {
                cube.ep[pos] = slice_edge;
                slice_edge += 1;
            } else {
                cube.ep[pos] = other_edge;
                other_edge += 1;
            }
        }
        cube
    }
}

/// Combined flip and slice location, the phase 1 reduction coordinate.
pub struct FSlice;

impl Coord for FSlice {
    const COUNT: usize = N_FSLICE;
    const NAME: &'static str = "fslice";

    fn encode(cube: &CubieCube) -> usize {
        Slice::encode(cube) * N_FLIP + Flip::encode(cube)
    }

    fn decode(raw: usize) -> CubieCube {
        let mut cube = Slice::decode(raw / N_FLIP);
        cube.eo = Flip::decode(raw % N_FLIP).eo;
        cube
    }
}

/// The corner permutation, the phase 2 reduction coordinate.
pub struct CPerm;

impl Coord for CPerm {
    const COUNT: usize = N_CPERM;
    const NAME: &'static str = "cperm";

    fn encode(cube: &CubieCube) -> usize {
        perm_rank(&cube.cp)
    }

    fn decode(raw: usize) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        perm_unrank(raw, &mut cube.cp);
        cube
    }
}

/// The permutation of the eight U/D-layer edges among the U/D positions. Only valid
/// for phase 2 states (slice edges within the slice), which is all the symmetry
/// tables ever conjugate.
pub struct UdEdges;

impl Coord for UdEdges {
    const COUNT: usize = N_UDEDGES;
    const NAME: &'static str = "udedges";

    fn encode(cube: &CubieCube) -> usize {
        let mut ud = [0u8; 8];
        ud.copy_from_slice(&cube.ep[..8]);
        perm_rank(&ud)
    }

    fn decode(raw: usize) -> CubieCube {
        let mut cube = CubieCube::SOLVED;
        let mut ud = [0u8; 8];
        perm_unrank(raw, &mut ud);
        cube.ep[..8].copy_from_slice(&ud);
        cube
    }
}

fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut result = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

const FACTORIALS: [usize; 8] = [1, 1, 2, 6, 24, 120, 720, 5040];

/// Ranks a permutation of `0..p.len()` in lexicographic order.
fn perm_rank(p: &[u8]) -> usize {
    let n = p.len();
    let mut rank = 0;
    for i in 0..n {
        let smaller = p[i + 1..].iter().filter(|&&x| x < p[i]).count();
        rank += smaller * FACTORIALS[n - 1 - i];
    }
    rank
}

/// Inverse of [`perm_rank`]; fills `out` with the permutation of the given rank.
fn perm_unrank(rank: usize, out: &mut [u8]) {
    let n = out.len();
    let mut elems: Vec<u8> = (0..n as u8).collect();
    let mut rem = rank;
    for (i, slot) in out.iter_mut().enumerate() {
        let f = FACTORIALS[n - 1 - i];
        *slot = elems.remove(rem / f);
        rem %= f;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::prelude::*;

    fn round_trips<C: Coord>(raws: impl IntoIterator<Item = usize>) {
        for raw in raws {
            let cube = C::decode(raw);
            assert_eq!(C::encode(&cube), raw, "{} raw={}", C::NAME, raw);
        }
    }

    #[test]
    fn solved_cube_encodes_to_zero() {
        assert_eq!(Twist::encode(&CubieCube::SOLVED), 0);
        assert_eq!(Flip::encode(&CubieCube::SOLVED), 0);
        assert_eq!(CPerm::encode(&CubieCube::SOLVED), 0);
        assert_eq!(UdEdges::encode(&CubieCube::SOLVED), 0);
        // The slice edges sit in the last four positions when solved.
        assert_eq!(Slice::encode(&CubieCube::SOLVED), N_SLICE - 1);
    }

    #[test]
    fn boundary_values_round_trip() {
        round_trips::<Twist>([0, 1, N_TWIST - 1]);
        round_trips::<Flip>([0, 1, N_FLIP - 1]);
        round_trips::<Slice>([0, 1, N_SLICE - 1]);
        round_trips::<FSlice>([0, 1, N_FSLICE - 1]);
        round_trips::<CPerm>([0, 1, N_CPERM - 1]);
        round_trips::<UdEdges>([0, 1, N_UDEDGES - 1]);
    }

    #[test]
    fn sampled_values_round_trip() {
        let mut rng = StdRng::seed_from_u64(5);
        round_trips::<FSlice>((0..200).map(|_| rng.gen_range(0..N_FSLICE)));
        round_trips::<CPerm>((0..200).map(|_| rng.gen_range(0..N_CPERM)));
        round_trips::<UdEdges>((0..200).map(|_| rng.gen_range(0..N_UDEDGES)));
        round_trips::<Twist>((0..200).map(|_| rng.gen_range(0..N_TWIST)));
    }

    #[test]
    fn coordinates_track_moves() {
        // A U move permutes U-layer edges and corners but flips and twists nothing.
        let cube = CubieCube::SOLVED.apply(Move::U1);
        assert_eq!(Twist::encode(&cube), 0);
        assert_eq!(Flip::encode(&cube), 0);
        assert_eq!(Slice::encode(&cube), N_SLICE - 1);
        assert_ne!(CPerm::encode(&cube), 0);
        assert_ne!(UdEdges::encode(&cube), 0);

        // An F move disturbs twist, flip and the slice.
        let cube = CubieCube::SOLVED.apply(Move::F1);
        assert_ne!(Twist::encode(&cube), 0);
        assert_ne!(Flip::encode(&cube), 0);
        assert_ne!(Slice::encode(&cube), N_SLICE - 1);
    }

    #[test]
    fn decoded_cubes_are_valid_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let cube = FSlice::decode(rng.gen_range(0..N_FSLICE));
            let mut edges: Vec<u8> = cube.ep.to_vec();
            edges.sort_unstable();
            assert_eq!(edges, (0..N_EDGES as u8).collect::<Vec<_>>());
        }
    }
}
