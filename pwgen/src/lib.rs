//! Generation of random strings made of letters, digits and punctuation,
//! meant to be used as passwords or tokens.

pub mod generator;
pub mod params;
pub mod utils;

pub use generator::{Error, generate_string};
