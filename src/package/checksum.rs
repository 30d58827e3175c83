use crate::modrinth::types::Hashes;
use sha1::Sha1;
use sha2::{Digest, Sha512};

/// Hash algorithms understood by manifest and registry hash sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Sha512,
    Sha1,
}

impl ChecksumAlgorithm {
    /// Key used in hash sets
    pub fn name(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha512 => "sha512",
            ChecksumAlgorithm::Sha1 => "sha1",
        }
    }

    /// Lowercase hex digest of `data`
    pub fn digest_hex(self, data: &[u8]) -> String {
        match self {
            ChecksumAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
            ChecksumAlgorithm::Sha1 => hex::encode(Sha1::digest(data)),
        }
    }

    /// Strongest recognized algorithm in `hashes` with its expected digest.
    ///
    /// sha512 takes precedence over sha1. Unrecognized algorithms are ignored.
    pub fn select(hashes: &Hashes) -> Option<(Self, &str)> {
        [ChecksumAlgorithm::Sha512, ChecksumAlgorithm::Sha1]
            .into_iter()
            .find_map(|alg| hashes.get(alg.name()).map(|h| (alg, h.as_str())))
    }
}
