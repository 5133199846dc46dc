//! Symmetry reduction tables for a two-phase Rubik's cube solver.
//!
//! The two-phase algorithm searches phase-restricted coordinate spaces that are far
//! too large to tabulate directly. Its pruning tables become feasible by collapsing
//! states that differ only by a rigid relabeling of the faces into shared
//! representatives, which this crate computes: the 48-element symmetry group of the
//! cube, the tables partitioning each primary raw coordinate into symmetry classes,
//! and the conjugation tables that keep a jointly-used secondary coordinate
//! consistent under the same symmetry.
//!
//! A small example follows; [`SymGroup::generate`] is cheap and runs at process
//! start, [`SymTables::build`] is the expensive one-shot step an application would
//! typically persist (the table types implement serde's traits for that).
//!
//! ```rust,no_run
//! use cubesym::coord::{Coord, CPerm};
//! use cubesym::{SymGroup, SymTables, Variant};
//!
//! let group = SymGroup::generate();
//! let tables = SymTables::build(&group, Variant::Full);
//!
//! // Reduce a raw corner permutation to its class and recover it again.
//! let raw = 12345;
//! let (class, s) = tables.cperm.decompose(raw);
//! let rep = tables.cperm.representative(class);
//! assert_eq!(CPerm::encode(&group.conjugate(&CPerm::decode(rep), s)), raw);
//! ```
//!
//! All tables are immutable once built and can be shared across any number of search
//! threads without locking.

pub mod coord;
pub mod cubie;
mod sym;

pub use sym::*;
