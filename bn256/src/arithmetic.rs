//! A pure-Rust implementation of the BN254 base field and scalar lattice.

pub mod constants;
pub mod field;
pub mod lattice;

mod util;
