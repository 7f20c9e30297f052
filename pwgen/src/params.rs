//! Fixed parameters used by the generator and the binary.

/// Length of the string produced when running the binary.
pub const DEFAULT_LENGTH: i64 = 32;

/// One character out of every `PUNCTUATION_RATIO` is a punctuation symbol
/// (rounded down).
pub const PUNCTUATION_RATIO: usize = 4;

pub mod charset {
    /// Uppercase letters, lowercase letters and digits.
    pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  abcdefghijklmnopqrstuvwxyz\
                                  0123456789";

    /// Symbols allowed in the punctuation portion of a string.
    pub const PUNCTUATION: &[u8] = b"#$%&*+,-./:;<=>?@[]^_{|}~";
}
