//! Private module for selective re-export.

use crate::coord::{CPerm, Coord, FSlice};
use crate::sym::{SymCoord, SymGroup, Variant};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A coordinate whose domain gets partitioned into symmetry classes.
pub trait ReductionCoord: Coord {
    /// Expected class count under the given variant's reduction subset; a mismatch
    /// during generation is a fatal defect.
    fn classes(variant: Variant) -> usize;
}

impl ReductionCoord for FSlice {
    fn classes(variant: Variant) -> usize {
        variant.fslice_classes()
    }
}

impl ReductionCoord for CPerm {
    fn classes(variant: Variant) -> usize {
        variant.cperm_classes()
    }
}

/// Symmetry reduction of one raw coordinate domain.
///
/// Every raw value belongs to exactly one class; `raw_to_sym` yields its class
/// together with the symmetry mapping the class *representative to the raw value*
/// (that direction is what lets callers reconstruct a raw state from a reduced
/// coordinate by conjugating the representative). Representatives are the smallest
/// raw value of their class, classes are numbered in order of discovery, and both
/// facts make regeneration byte-for-byte reproducible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymReduction {
    n_sub: usize,
    sym: Vec<u32>,    // raw -> packed (class, sym)
    raw: Vec<u32>,    // class -> representative raw value
    selfs: Vec<u16>,  // class -> bitmask of self-symmetries
}

const UNSEEN: u32 = u32::MAX;

impl SymReduction {
    /// Builds the reduction of coordinate `C`. Panics if the resulting class count
    /// differs from the expected constant for the variant.
    pub fn build<C: ReductionCoord>(group: &SymGroup, variant: Variant) -> SymReduction {
        let reduction = Self::scan(C::NAME, C::COUNT, variant.sym_count(), |raw, s| {
            C::encode(&group.conjugate(&C::decode(raw), s))
        });
        if reduction.class_count() != C::classes(variant) {
            panic!(
                "{} reduction for {:?} produced {} classes, expected {}",
                C::NAME,
                variant,
                reduction.class_count(),
                C::classes(variant)
            );
        }
        reduction
    }

    /// The scan at the heart of the builder: walk raw values in increasing order,
    /// open a class at each value not yet assigned, and assign all images of the new
    /// representative under the reduction subset. When several symmetries produce
    /// the same image only the first one is recorded; an image equal to the
    /// representative itself marks a self-symmetry. Work is linear in the domain
    /// size times the subset size regardless of how large the combined (unreduced)
    /// state space is.
    ///
    /// `conj` maps `(raw, sym)` to the raw coordinate of the conjugated state.
    pub(crate) fn scan<F>(name: &str, domain: usize, n_sub: usize, conj: F) -> SymReduction
    where
        F: Fn(usize, usize) -> usize,
    {
        let start = Instant::now();
        let mut sym = vec![UNSEEN; domain];
        let mut raw = Vec::new();
        let mut selfs = Vec::new();
        for rep in 0..domain {
            if sym[rep] != UNSEEN {
                continue;
            }
            let class = raw.len();
            raw.push(rep as u32);
            let mut self_mask = 0u16;
            for s in 0..n_sub {
                let image = conj(rep, s);
                if image == rep {
                    // Always hit for s == 0, the identity.
                    self_mask |= 1 << s;
                }
                if sym[image] == UNSEEN {
                    sym[image] = SymCoord::pack(class, s, n_sub).value();
                }
            }
            selfs.push(self_mask);
        }
        log::info!(
            "reduced {} ({} raw values) to {} classes in {:?}",
            name,
            domain,
            raw.len(),
            start.elapsed()
        );
        SymReduction {
            n_sub,
            sym,
            raw,
            selfs,
        }
    }

    /// The packed reduced coordinate of a raw value.
    pub fn raw_to_sym(&self, raw: usize) -> SymCoord {
        SymCoord::from_value(self.sym[raw])
    }

    /// The representative raw value of a class.
    pub fn representative(&self, class: usize) -> usize {
        self.raw[class] as usize
    }

    /// Bitmask of the symmetries fixing the representative of a class. Bit 0 (the
    /// identity) is always set.
    pub fn self_syms(&self, class: usize) -> u16 {
        self.selfs[class]
    }

    /// Number of symmetry classes.
    pub fn class_count(&self) -> usize {
        self.raw.len()
    }

    /// Size of the reduction symmetry subset.
    pub fn sym_count(&self) -> usize {
        self.n_sub
    }

    /// Convenience for `raw_to_sym(raw).unpack(self.sym_count())`.
    pub fn decompose(&self, raw: usize) -> (usize, usize) {
        self.raw_to_sym(raw).unpack(self.n_sub)
    }
}
