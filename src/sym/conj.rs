//! Private module for selective re-export.

use crate::coord::Coord;
use crate::sym::{SymGroup, Variant};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Conjugation table of one secondary coordinate: maps `(raw, sym)` to the raw
/// coordinate of the symmetry-transformed state, `s⁻¹ * state * s`.
///
/// This is what lets the solver reduce only the primary coordinate of a pair and
/// still re-express the secondary one under the chosen symmetry with a single read,
/// instead of reducing the far larger combined space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConjTable {
    n_sub: usize,
    table: Vec<u16>, // raw * n_sub + sym
}

impl ConjTable {
    /// Builds the table for coordinate `C`. Raw values are split into disjoint chunks
    /// and filled by parallel workers; every entry is computed independently.
    pub fn build<C: Coord>(group: &SymGroup, variant: Variant) -> ConjTable {
        let n_sub = variant.sym_count();
        let start = Instant::now();
        let mut table = vec![0u16; C::COUNT * n_sub];

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let rows_per_chunk = (C::COUNT + workers - 1) / workers;
        crossbeam_utils::thread::scope(|scope| {
            for (chunk_index, chunk) in table.chunks_mut(rows_per_chunk * n_sub).enumerate() {
                scope.spawn(move |_| {
                    let base = chunk_index * rows_per_chunk;
                    for (row, entries) in chunk.chunks_mut(n_sub).enumerate() {
                        let cube = C::decode(base + row);
                        for (s, entry) in entries.iter_mut().enumerate() {
                            *entry = C::encode(&group.conjugate(&cube, s)) as u16;
                        }
                    }
                });
            }
        })
        .expect("conjugation worker panicked");

        log::info!(
            "built {} conjugation table ({} x {}) in {:?}",
            C::NAME,
            C::COUNT,
            n_sub,
            start.elapsed()
        );
        ConjTable { n_sub, table }
    }

    /// The conjugated raw value of `raw` under symmetry `s`.
    pub fn conj(&self, raw: usize, s: usize) -> usize {
        self.table[raw * self.n_sub + s] as usize
    }

    /// Size of the reduction symmetry subset this table covers.
    pub fn sym_count(&self) -> usize {
        self.n_sub
    }
}
