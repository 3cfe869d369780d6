//! The randomness capability consumed by the cycle search.
//!
//! The search only ever needs to permute short sequences, so the dependency is
//! a single operation: shuffle `n` items in place by issuing swaps. Every
//! [`rand::RngCore`] gets a Fisher-Yates implementation for free; tests can
//! supply a scripted implementation instead.
//!
//! # Example
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use secret_santa::shuffle::shuffle_slice;
//!
//! let mut items = vec!['a', 'b', 'c', 'd'];
//! let mut rng = StdRng::seed_from_u64(7);
//! shuffle_slice(&mut rng, &mut items);
//!
//! items.sort();
//! assert_eq!(items, vec!['a', 'b', 'c', 'd']);
//! ```

use rand::{Rng, RngCore};

/// Permutes `n` items in place through the supplied swap callback.
pub trait Shuffle {
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize));
}

impl<R: RngCore> Shuffle for R {
    fn shuffle(&mut self, n: usize, swap: &mut dyn FnMut(usize, usize)) {
        for i in (1..n).rev() {
            let j = self.gen_range(0..=i);
            swap(i, j);
        }
    }
}

/// Shuffles a slice using any [`Shuffle`] source.
pub fn shuffle_slice<S, T>(source: &mut S, items: &mut [T])
where
    S: Shuffle + ?Sized,
{
    source.shuffle(items.len(), &mut |i, j| items.swap(i, j));
}
