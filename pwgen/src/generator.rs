//! Random string generation for passwords and tokens.
//!
//! A string of length `n` is made of `n / 4` punctuation symbols and
//! `n - n / 4` alphanumeric characters. Each character is drawn independently
//! from its set and the whole sequence is then shuffled, all with the same
//! cryptographically secure generator.

use log::trace;
use rand::{CryptoRng, Rng, seq::SliceRandom};
use thiserror::Error;

use crate::params::{self, charset};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument :: `{0}` is not a valid string length")]
    InvalidArgument(i64),
}

/// Number of characters taken from each set for a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub alphanumeric: usize,
    pub punctuation: usize,
}

impl Composition {
    /// Splits `length` into its alphanumeric and punctuation parts.
    ///
    /// Fails with [`Error::InvalidArgument`] if `length` is negative
    /// (or does not fit in the platform's `usize`).
    pub fn for_length(length: i64) -> Result<Self, Error> {
        let total = usize::try_from(length).map_err(|_| Error::InvalidArgument(length))?;
        let punctuation = total / params::PUNCTUATION_RATIO;

        Ok(Self {
            alphanumeric: total - punctuation,
            punctuation,
        })
    }

    /// Total number of characters.
    pub fn len(&self) -> usize {
        self.alphanumeric + self.punctuation
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generates a random string of the given `length` using the thread-local
/// secure generator.
pub fn generate_string(length: i64) -> Result<String, Error> {
    generate_string_with(&mut rand::rng(), length)
}

/// Generates a random string of the given `length` drawing from `rng`.
pub fn generate_string_with<R>(rng: &mut R, length: i64) -> Result<String, Error>
where
    R: CryptoRng + ?Sized,
{
    let composition = Composition::for_length(length)?;

    trace!(
        "generating string of length {} ({} alphanumeric, {} punctuation)",
        composition.len(),
        composition.alphanumeric,
        composition.punctuation
    );

    let mut chars = Vec::with_capacity(composition.len());
    draw(rng, charset::ALPHABET, composition.alphanumeric, &mut chars);
    draw(rng, charset::PUNCTUATION, composition.punctuation, &mut chars);

    chars.shuffle(rng);

    Ok(chars.into_iter().collect())
}

/// Returns `true` if `c` belongs to the alphanumeric set.
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii() && charset::ALPHABET.contains(&(c as u8))
}

/// Returns `true` if `c` belongs to the punctuation set.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii() && charset::PUNCTUATION.contains(&(c as u8))
}

fn draw<R: Rng + ?Sized>(rng: &mut R, set: &[u8], count: usize, out: &mut Vec<char>) {
    debug_assert!(!set.is_empty());
    out.extend((0..count).map(|_| char::from(set[rng.random_range(0..set.len())])));
}
