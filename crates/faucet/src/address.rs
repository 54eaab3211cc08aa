//! Wallet address parsing and validation.
//!
//! A faucet recipient must be a base58-encoded 32-byte ed25519 public key that
//! lies on the curve. Program-derived addresses are deliberately off-curve and
//! are refused.

use crate::error::{FaucetError, FaucetResult};
use curve25519_dalek::edwards::CompressedEdwardsY;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Length of a decoded account address
pub const PUBKEY_BYTES: usize = 32;

/// Account address (32 bytes)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pubkey(pub [u8; PUBKEY_BYTES]);

impl Pubkey {
    pub fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    /// Whether the bytes decompress to a point on the ed25519 curve.
    pub fn is_on_curve(&self) -> bool {
        CompressedEdwardsY(self.0).decompress().is_some()
    }
}

impl FromStr for Pubkey {
    type Err = FaucetError;

    fn from_str(s: &str) -> FaucetResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| FaucetError::InvalidAddress(format!("not base58: {}", e)))?;

        let bytes: [u8; PUBKEY_BYTES] = bytes.try_into().map_err(|v: Vec<u8>| {
            FaucetError::InvalidAddress(format!(
                "expected {} bytes, decoded {}",
                PUBKEY_BYTES,
                v.len()
            ))
        })?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

/// Parses `input` as a faucet recipient: base58, 32 bytes, on-curve.
pub fn valid_recipient(input: &str) -> Option<Pubkey> {
    match input.parse::<Pubkey>() {
        Ok(pubkey) if pubkey.is_on_curve() => Some(pubkey),
        Ok(_) => {
            debug!("Address {} is off the ed25519 curve", input);
            None
        }
        Err(e) => {
            debug!("Rejecting address {:?}: {}", input, e);
            None
        }
    }
}

/// Returns true when `input` is a base58 32-byte on-curve account address.
///
/// Never fails; every decode problem maps to `false`.
pub fn is_valid_address(input: &str) -> bool {
    valid_recipient(input).is_some()
}
