//! mathpress core library — domain types, content addressing, marker
//! extraction, and path relocation.
//!
//! Public API surface:
//! - [`types`] — [`MathMode`], [`MathSpan`], [`ContentHash`]
//! - [`hash`] — [`HashAlgorithm`]
//! - [`extract`] — [`MathExtractor`]
//! - [`relocate`] — [`relocate()`](relocate::relocate)
//! - [`error`] — [`ExtractError`]

pub mod error;
pub mod extract;
pub mod hash;
pub mod relocate;
pub mod types;

pub use error::ExtractError;
pub use extract::MathExtractor;
pub use hash::HashAlgorithm;
pub use types::{ContentHash, MathMode, MathSpan};
