//! Symmetry reduction.
//!
//! "Similar" cube states, i.e. ones that can be transformed into each other by
//! relabeling the faces, are also similar to solve, so pruning tables only need one
//! entry per equivalence class instead of one per raw coordinate. This module
//! generates the symmetry group ([`SymGroup`]), the tables partitioning a raw
//! coordinate domain into classes ([`SymReduction`]) and the conjugation tables that
//! transform a jointly-used second coordinate under the same symmetry ([`ConjTable`]),
//! cutting table memory by roughly the size of the reduction subset.
//!
//! Not all 48 symmetries are usable for reduction: phase 2 of the solver depends on
//! the UD-slice staying intact, which only 16 preserve. The 5-face variant loses the
//! rotations that move the B face on top of that, leaving 4. See [`Variant`].

mod conj;
mod group;
mod reduce;

pub use conj::*;
pub use group::*;
pub use reduce::*;

use serde::{Deserialize, Serialize};

/// Build variant of the solver the tables are generated for.
///
/// The 5-face variant excludes B-face moves from the surrounding search, which
/// invalidates every symmetry that moves the B face; only 4 of the 16 UD-slice
/// preserving symmetries remain usable and the class tables grow accordingly. The
/// variant is an explicit value rather than a compile-time switch so both table sets
/// can coexist in one process.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    /// All 6 faces; 16 reduction symmetries.
    Full,
    /// B face excluded; 4 reduction symmetries.
    Faces5,
}

impl Variant {
    /// Number of symmetries usable for reduction. The usable subset is always a
    /// prefix of the generation order of [`SymGroup`].
    pub fn sym_count(self) -> usize {
        match self {
            Variant::Full => 16,
            Variant::Faces5 => 4,
        }
    }

    /// Expected number of flip+slice symmetry classes.
    pub fn fslice_classes(self) -> usize {
        match self {
            Variant::Full => 64_430,
            Variant::Faces5 => 255_664,
        }
    }

    /// Expected number of corner-permutation symmetry classes.
    pub fn cperm_classes(self) -> usize {
        match self {
            Variant::Full => 2_768,
            Variant::Faces5 => 10_368,
        }
    }
}

/// A packed reduced coordinate: `class * n_sub + sym`, where `sym` is the symmetry
/// mapping the class representative to the raw value the coordinate was derived from.
/// One lookup yields both pieces without a second dereference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct SymCoord(u32);

impl SymCoord {
    /// Packs a class index and symmetry index for a reduction subset of `n_sub`.
    pub fn pack(class: usize, sym: usize, n_sub: usize) -> SymCoord {
        debug_assert!(sym < n_sub);
        SymCoord((class * n_sub + sym) as u32)
    }

    /// Splits back into `(class, sym)`.
    pub fn unpack(self, n_sub: usize) -> (usize, usize) {
        (self.0 as usize / n_sub, self.0 as usize % n_sub)
    }

    /// The symmetry-class index.
    pub fn class(self, n_sub: usize) -> usize {
        self.0 as usize / n_sub
    }

    /// The index of the symmetry mapping the class representative to the raw value.
    pub fn sym(self, n_sub: usize) -> usize {
        self.0 as usize % n_sub
    }

    /// The packed integer value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Wraps an already-packed value, e.g. one read back from a persisted table.
    pub fn from_value(value: u32) -> SymCoord {
        SymCoord(value)
    }
}

/// All symmetry reduction tables of one [`Variant`]: the reduction of both primary
/// coordinates and the conjugation tables of both secondary coordinates.
///
/// Building is expensive and happens exactly once; afterwards everything is read-only
/// and may be shared freely across search threads. Regenerating with the same variant
/// reproduces identical tables, and the serde derives allow callers to persist them
/// instead of rebuilding on every process start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymTables {
    pub variant: Variant,
    /// Corner-twist conjugation, phase 1.
    pub conj_twist: ConjTable,
    /// UD-edge-permutation conjugation, phase 2.
    pub conj_udedges: ConjTable,
    /// Flip+slice reduction, phase 1.
    pub fslice: SymReduction,
    /// Corner-permutation reduction, phase 2.
    pub cperm: SymReduction,
}

impl SymTables {
    /// Builds all four tables, one worker per table.
    pub fn build(group: &SymGroup, variant: Variant) -> SymTables {
        use crate::coord::{CPerm, FSlice, Twist, UdEdges};

        let start = std::time::Instant::now();
        let tables = crossbeam_utils::thread::scope(|scope| {
            let conj_twist = scope.spawn(|_| ConjTable::build::<Twist>(group, variant));
            let conj_udedges = scope.spawn(|_| ConjTable::build::<UdEdges>(group, variant));
            let fslice = scope.spawn(|_| SymReduction::build::<FSlice>(group, variant));
            let cperm = scope.spawn(|_| SymReduction::build::<CPerm>(group, variant));
            SymTables {
                variant,
                conj_twist: conj_twist.join().expect("twist conjugation worker panicked"),
                conj_udedges: conj_udedges
                    .join()
                    .expect("udedges conjugation worker panicked"),
                fslice: fslice.join().expect("fslice reduction worker panicked"),
                cperm: cperm.join().expect("cperm reduction worker panicked"),
            }
        })
        .expect("symmetry table worker panicked");
        log::info!(
            "built all symmetry tables for {:?} in {:?}",
            variant,
            start.elapsed()
        );
        tables
    }
}
