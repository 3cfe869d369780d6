//! Gift compatibility graphs and the cycle search that assigns givers to receivers.
//!
//! - [`CompatibilityGraph`] records who may give a gift to whom
//! - [`hamiltonian::pairings`] finds a single cycle through every participant

pub mod compatibility;
pub mod hamiltonian;

pub use compatibility::CompatibilityGraph;
pub use hamiltonian::{pairings, Pairing};
