//! Production wiring around the cycle search: size limits, seeding, and the
//! plain-text rendering of a finished draw.
//!
//! # Example
//! ```
//! use secret_santa::generator::{format_pairings, PairingGenerator, SeededGenerator};
//! use secret_santa::restrictions::GiftRestrictions;
//!
//! let restrictions: GiftRestrictions = vec![("Bob", vec![]), ("Jane", vec![])]
//!     .into_iter()
//!     .collect();
//!
//! let mut generator = SeededGenerator::from_seed(2024);
//! let pairs = generator.generate(&restrictions).unwrap();
//! let text = format_pairings(&pairs);
//!
//! assert!(text.starts_with("Pairings:\n"));
//! assert!(text.contains("Bob -> Jane"));
//! assert!(text.contains("Jane -> Bob"));
//! ```

use std::fmt::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::Result;
use crate::graph::{pairings, Pairing};
use crate::restrictions::{GiftRestrictions, Limits};

/// Anything that can turn restrictions into a finished draw.
///
/// Implemented for closures so callers can substitute a canned result.
pub trait PairingGenerator {
    fn generate(&mut self, restrictions: &GiftRestrictions) -> Result<Vec<Pairing<String>>>;
}

impl<F> PairingGenerator for F
where
    F: FnMut(&GiftRestrictions) -> Result<Vec<Pairing<String>>>,
{
    fn generate(&mut self, restrictions: &GiftRestrictions) -> Result<Vec<Pairing<String>>> {
        self(restrictions)
    }
}

/// Validates restrictions against [`Limits`] and searches with an owned RNG.
#[derive(Clone, Debug)]
pub struct SeededGenerator<R> {
    rng: R,
    limits: Limits,
}

impl SeededGenerator<ChaCha20Rng> {
    /// Seeds from the current wall-clock time, so each run draws differently.
    pub fn from_time() -> Self {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(e) => {
                warn!("system clock is before the unix epoch: {}", e);
                e.duration().as_nanos() as u64
            }
        };
        Self::from_seed(seed)
    }

    /// A reproducible generator; the same seed and input give the same draw.
    pub fn from_seed(seed: u64) -> Self {
        SeededGenerator::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SeededGenerator<R> {
    pub fn new(rng: R) -> Self {
        SeededGenerator {
            rng,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}

impl<R: RngCore> PairingGenerator for SeededGenerator<R> {
    fn generate(&mut self, restrictions: &GiftRestrictions) -> Result<Vec<Pairing<String>>> {
        restrictions.validate(&self.limits)?;

        let graph = restrictions.graph();
        let result = pairings(&graph, &mut self.rng);
        if let Err(e) = &result {
            debug!("draw for {} participants failed: {}", graph.len(), e);
        }
        result
    }
}

/// Renders a draw as a `Pairings:` header followed by one `From -> To` line per pair.
pub fn format_pairings<P: fmt::Display>(pairs: &[Pairing<P>]) -> String {
    let mut out = String::from("Pairings:\n");
    for pair in pairs {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", pair);
    }
    out
}
