//! BN254 (a.k.a. alt_bn128) pairing curve arithmetic core.
//!
//! This crate provides the two load-bearing pieces of a BN254 pairing
//! implementation:
//!
//! - [`FieldElement`]: an element of the 254-bit prime base field, stored as
//!   four 64-bit words in Montgomery form, with constant-time arithmetic,
//!   Fermat inversion, and canonical 32-byte big-endian serialization.
//! - [`Lattice`]: GLV decomposition of scalars modulo the group order into
//!   short components via Babai rounding, and their recoding into a joint
//!   Straus multi-scalar multiplication schedule.
//!
//! The extension field towers, curve groups, and the pairing itself consume
//! these types (and the constants in [`arithmetic::constants`]) but live in
//! higher layers.
//!
//! ```
//! use bn256::FieldElement;
//!
//! let seven = FieldElement::from(7i64);
//! assert_eq!(seven * seven.invert(), FieldElement::from(1i64));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

pub mod arithmetic;
mod error;

pub use crate::{
    arithmetic::{field::FieldElement, lattice::Lattice},
    error::{Error, Result},
};
