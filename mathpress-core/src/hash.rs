//! Content addressing — digest algorithm selection and hashing.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256, Sha512};

use crate::types::ContentHash;

/// Digest algorithm used for content addressing.
///
/// Resolved once at process start and held fixed for the whole run: two
/// algorithms in one run would give the same expression two identities and
/// split the cache keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Hex digest of `text`'s exact byte content.
    ///
    /// Pure: identical text yields an identical hash, regardless of which
    /// file it came from or how often it occurs.
    pub fn hash(&self, text: &str) -> ContentHash {
        let digest = match self {
            HashAlgorithm::Sha256 => {
                let mut h = Sha256::new();
                h.update(text.as_bytes());
                hex::encode(h.finalize())
            }
            HashAlgorithm::Sha512 => {
                let mut h = Sha512::new();
                h.update(text.as_bytes());
                hex::encode(h.finalize())
            }
        };
        ContentHash(digest)
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            other => Err(format!(
                "unknown hash algorithm '{other}'; expected: sha256, sha512"
            )),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Sha512 => write!(f, "sha512"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identical_text_hashes_identically() {
        let algo = HashAlgorithm::Sha256;
        assert_eq!(algo.hash("E=mc^2"), algo.hash("E=mc^2"));
    }

    #[test]
    fn digest_is_lowercase_hex_of_expected_width() {
        let h256 = HashAlgorithm::Sha256.hash("F=ma");
        assert_eq!(h256.0.len(), 64);
        assert!(h256.0.chars().all(|c| c.is_ascii_hexdigit()));

        let h512 = HashAlgorithm::Sha512.hash("F=ma");
        assert_eq!(h512.0.len(), 128);
    }

    #[test]
    fn whitespace_is_significant() {
        let algo = HashAlgorithm::Sha256;
        assert_ne!(algo.hash("F=ma"), algo.hash(" F=ma"));
    }

    #[test]
    fn no_collisions_across_sample_corpus() {
        let algo = HashAlgorithm::Sha256;
        let corpus = [
            r"E=mc^2",
            r"F=ma",
            r"\int_0^1 x\,dx",
            r"\frac{a}{b}",
            r"\sum_{n=1}^\infty \frac{1}{n^2}",
            r"x^2 + y^2 = r^2",
            r"\nabla \cdot \mathbf{E} = \frac{\rho}{\varepsilon_0}",
            r"e^{i\pi} + 1 = 0",
        ];
        let hashes: HashSet<_> = corpus.iter().map(|e| algo.hash(e)).collect();
        assert_eq!(hashes.len(), corpus.len());
    }

    #[test]
    fn algorithms_are_distinct() {
        assert_ne!(
            HashAlgorithm::Sha256.hash("x"),
            HashAlgorithm::Sha512.hash("x")
        );
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("sha256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("SHA512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }
}
