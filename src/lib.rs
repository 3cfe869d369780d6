pub mod error;
pub mod generator;
pub mod graph;
pub mod restrictions;
pub mod shuffle;

pub use error::{Error, Result, Unsolvable};
pub use generator::{format_pairings, PairingGenerator, SeededGenerator};
pub use graph::{pairings, CompatibilityGraph, Pairing};
pub use restrictions::{GiftRestrictions, Limits};
pub use shuffle::Shuffle;
