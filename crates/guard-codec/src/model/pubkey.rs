//! Public key type used throughout guard payloads.
//!
//! Keys are stored as 32 raw bytes. The text form is base58, matching how
//! wallets and explorers display them.

use crate::limits::PUBKEY_SIZE;

/// A 32-byte public key.
pub type Pubkey = [u8; PUBKEY_SIZE];

/// The all-zero key.
pub const DEFAULT_PUBKEY: Pubkey = [0u8; PUBKEY_SIZE];

/// Formats a public key as base58.
pub fn format_pubkey(key: &Pubkey) -> String {
    bs58::encode(key).into_string()
}

/// Parses a base58 public key.
///
/// Returns `None` if the string is not valid base58 or does not decode to
/// exactly 32 bytes.
pub fn parse_pubkey(s: &str) -> Option<Pubkey> {
    let bytes = bs58::decode(s).into_vec().ok()?;
    bytes.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pubkey_text_form() {
        assert_eq!(format_pubkey(&DEFAULT_PUBKEY), "11111111111111111111111111111111");
        assert_eq!(parse_pubkey("11111111111111111111111111111111"), Some(DEFAULT_PUBKEY));
    }

    #[test]
    fn test_pubkey_roundtrip() {
        let mut key = [0u8; 32];
        for (i, b) in key.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(7).wrapping_add(3);
        }
        let text = format_pubkey(&key);
        assert_eq!(parse_pubkey(&text), Some(key));
    }

    #[test]
    fn test_parse_pubkey_rejects_bad_input() {
        // '0' is not in the base58 alphabet
        assert_eq!(parse_pubkey("0OIl"), None);
        // valid base58 but too short
        assert_eq!(parse_pubkey("2g"), None);
    }
}
