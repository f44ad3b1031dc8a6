//! # Block Key
//!
//! The fixed-width opaque identifier for a block.
//!
//! A key is 16 raw bytes. Its canonical textual form is 32 lowercase hex
//! characters, and that string is used verbatim as the block's filename.
//! Because only canonical hex names are ever produced or accepted, a key can
//! never name a path outside the store directory (no separators, no dots).

use crate::domain::errors::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of a block key in raw bytes.
pub const KEY_LENGTH: usize = 16;

/// Length of a block key's canonical hex encoding.
pub const KEY_HEX_LENGTH: usize = 2 * KEY_LENGTH;

/// A fixed-width opaque block identifier.
///
/// Equality, hashing and ordering are defined over the raw byte value, so
/// two equal keys always produce the identical filename. Keys are immutable
/// once constructed; how they are generated is a caller concern.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockKey([u8; KEY_LENGTH]);

impl BlockKey {
    /// Create a key from its raw byte value.
    pub const fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        BlockKey(bytes)
    }

    /// Get the raw byte value.
    pub const fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }
}

impl FromStr for BlockKey {
    type Err = KeyError;

    /// Parse the canonical hex form.
    ///
    /// Upper- and lowercase hex are both accepted (they decode to the same
    /// byte value); anything of the wrong length or containing a non-hex
    /// character is rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, KeyError> {
        if s.len() != KEY_HEX_LENGTH {
            return Err(KeyError::WrongLength {
                expected: KEY_HEX_LENGTH,
                actual: s.len(),
            });
        }
        let mut bytes = [0u8; KEY_LENGTH];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| KeyError::NonHexCharacter)?;
        Ok(BlockKey(bytes))
    }
}

impl fmt::Display for BlockKey {
    /// The canonical lowercase hex form, stable across the key's lifetime.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockKey({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const HEX: &str = "1491bb4932a389ee14bc7090ac772972";

    #[test]
    fn test_parse_roundtrip() {
        let key: BlockKey = HEX.parse().unwrap();
        assert_eq!(key.to_string(), HEX);
        assert_eq!(key, BlockKey::from_bytes(*key.as_bytes()));
    }

    #[test]
    fn test_parse_uppercase_canonicalizes() {
        let upper: BlockKey = HEX.to_uppercase().parse().unwrap();
        let lower: BlockKey = HEX.parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), HEX);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            "1491bb49".parse::<BlockKey>(),
            Err(KeyError::WrongLength {
                expected: KEY_HEX_LENGTH,
                actual: 8,
            })
        );
        assert!("".parse::<BlockKey>().is_err());
        assert!(format!("{}00", HEX).parse::<BlockKey>().is_err());
    }

    #[test]
    fn test_parse_non_hex_character() {
        let bad = format!("g{}", &HEX[1..]);
        assert_eq!(bad.parse::<BlockKey>(), Err(KeyError::NonHexCharacter));
    }

    #[test]
    fn test_rejects_path_like_input() {
        // A key string can never escape the store directory.
        assert!("../../../../etc/passwd\0paddingpad".parse::<BlockKey>().is_err());
        assert!("..%2f..%2f..%2f..%2fetc%2fpasswd".parse::<BlockKey>().is_err());
    }

    #[test]
    fn test_equal_keys_hash_identically() {
        let a: BlockKey = HEX.parse().unwrap();
        let b: BlockKey = HEX.to_uppercase().parse().unwrap();

        let mut map = HashMap::new();
        map.insert(a, 1);
        map.insert(b, 2);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_display_is_filename_safe() {
        let key = BlockKey::from_bytes([0xFF; KEY_LENGTH]);
        let name = key.to_string();
        assert_eq!(name.len(), KEY_HEX_LENGTH);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
