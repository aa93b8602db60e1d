//! Publisher account derivation.
//!
//! Derives an EIP-55 checksummed Ethereum address from a secp256k1
//! private key: uncompressed public key, Keccak-256, last 20 bytes.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Error type for account derivation.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("private key is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("private key must be 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

/// A publisher account identified by its checksummed address.
///
/// Only the address is retained; the key material is dropped after
/// derivation and never logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    address: String,
}

impl Account {
    /// Derive an account from a hex-encoded private key, with or without
    /// a `0x` prefix.
    pub fn from_private_key(key: &str) -> Result<Self, AccountError> {
        let raw = key.strip_prefix("0x").unwrap_or(key);
        let bytes = hex::decode(raw)?;
        if bytes.len() != 32 {
            return Err(AccountError::InvalidLength(bytes.len()));
        }
        let signing_key =
            SigningKey::from_slice(&bytes).map_err(|_| AccountError::InvalidScalar)?;
        let public = signing_key.verifying_key().to_encoded_point(false);
        // Skip the 0x04 uncompressed-point tag byte.
        let digest = Keccak256::digest(&public.as_bytes()[1..]);
        Ok(Self {
            address: checksum_address(&digest[12..]),
        })
    }

    /// Checksummed `0x`-prefixed address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// EIP-55 mixed-case checksum encoding of a 20-byte address.
fn checksum_address(bytes: &[u8]) -> String {
    let lower = hex::encode(bytes);
    let hash = Keccak256::digest(lower.as_bytes());
    let mut out = String::with_capacity(2 + lower.len());
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0xf
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known throwaway development key (deterministic ganache account 0).
    const DEV_KEY: &str = "0x4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";
    const DEV_ADDRESS: &str = "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1";

    #[test]
    fn test_derives_known_address() {
        let account = Account::from_private_key(DEV_KEY).unwrap();
        assert_eq!(account.address(), DEV_ADDRESS);
    }

    #[test]
    fn test_prefix_is_optional() {
        let with = Account::from_private_key(DEV_KEY).unwrap();
        let without = Account::from_private_key(&DEV_KEY[2..]).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_eip55_checksum_vector() {
        let bytes = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            checksum_address(&bytes),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_rejects_bad_hex() {
        let result = Account::from_private_key("0xnot-hex");
        assert!(matches!(result, Err(AccountError::InvalidHex(_))));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let result = Account::from_private_key("0xdeadbeef");
        assert!(matches!(result, Err(AccountError::InvalidLength(4))));
    }

    #[test]
    fn test_rejects_zero_scalar() {
        let zero = format!("0x{}", "00".repeat(32));
        let result = Account::from_private_key(&zero);
        assert!(matches!(result, Err(AccountError::InvalidScalar)));
    }
}
