//! Digest type and the Blake3 hash primitive.
//!
//! Only [`hash`] and [`hash_pair`] ever touch the primitive. Both report the
//! work they did as an [`OperationCost`].

use std::fmt;

use blocktree_costs::{CostContext, CostsExt, OperationCost};
use blocktree_visualize::to_hex;

use crate::{Error, Result};

/// The length of a hash output (in bytes).
pub const HASH_LENGTH: usize = 32;

/// Opaque digest bytes.
///
/// Hash outputs are [`HASH_LENGTH`] bytes long. The digest of an empty leaf is
/// the zero-length digest, so the length is not fixed by the type.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// The zero-length digest carried by empty leaves.
    pub fn empty() -> Self {
        Digest(Vec::new())
    }

    /// Decode a digest from lowercase or uppercase hex, without prefix.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        hex::decode(encoded)
            .map(Digest)
            .map_err(|e| Error::InvalidDigest(format!("{encoded:?}: {e}")))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of digest bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` only for the empty-leaf digest.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        to_hex(&self.0)
    }
}

impl From<[u8; HASH_LENGTH]> for Digest {
    fn from(bytes: [u8; HASH_LENGTH]) -> Self {
        Digest(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Hashes raw block data.
pub fn hash(data: &[u8]) -> CostContext<Digest> {
    Digest::from(*blake3::hash(data).as_bytes())
        .wrap_with_cost(OperationCost::for_hash_input(data.len()))
}

/// Hashes `left ++ right`, no separator and no domain tag.
///
/// An empty `right` therefore hashes `left` alone.
pub fn hash_pair(left: &Digest, right: &Digest) -> CostContext<Digest> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Digest::from(*hasher.finalize().as_bytes())
        .wrap_with_cost(OperationCost::for_hash_input(left.len() + right.len()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_hex_display() {
        let digest = Digest::from([0xab; HASH_LENGTH]);
        assert_eq!(digest.to_string(), "ab".repeat(HASH_LENGTH));
        assert_eq!(Digest::empty().to_string(), "");
    }

    #[test]
    fn test_from_hex() {
        let digest = hash(b"bob-test-20").unwrap();
        let parsed = Digest::from_hex(&digest.to_hex()).expect("valid hex");
        assert_eq!(parsed, digest);
        assert_matches!(Digest::from_hex("zz"), Err(Error::InvalidDigest(_)));
        assert_matches!(Digest::from_hex("abc"), Err(Error::InvalidDigest(_)));
    }

    #[test]
    fn test_hash_pair_is_plain_concatenation() {
        let left = hash(b"left").unwrap();
        let right = hash(b"right").unwrap();
        let mut joined = left.as_bytes().to_vec();
        joined.extend_from_slice(right.as_bytes());
        assert_eq!(hash_pair(&left, &right).unwrap(), hash(&joined).unwrap());

        // empty right side contributes no bytes
        assert_eq!(
            hash_pair(&left, &Digest::empty()).unwrap(),
            hash(left.as_bytes()).unwrap()
        );
    }

    #[test]
    fn test_hash_cost() {
        let ctx = hash_pair(&hash(b"a").unwrap(), &hash(b"b").unwrap());
        assert_eq!(ctx.cost().hash_node_calls, 1);
        assert_eq!(ctx.cost().hash_byte_calls, 1);
        assert_eq!(hash(&[0u8; 200]).cost().hash_byte_calls, 4);
    }
}
