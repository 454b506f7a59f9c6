//! Core type definitions shared by every engine component

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Token amount in base units
pub type Amount = u128;

/// Chain timestamp in seconds
pub type Timestamp = u64;

/// Block (indivisible atomic unit of chain time)
pub type BlockNumber = u64;

/// Address - 20-byte account identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address {
    bytes: [u8; 20],
}

impl Address {
    /// Create an address from raw bytes
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self { bytes }
    }

    /// Address with every byte set to `b` (handy for fixtures)
    pub const fn repeat(b: u8) -> Self {
        Self { bytes: [b; 20] }
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }

    /// Convert to `0x`-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Parse from hex, with or without `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(trimmed)?;
        if decoded.len() != 20 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&decoded);
        Ok(Self { bytes })
    }

    /// Zero address
    pub const ZERO: Self = Self { bytes: [0u8; 20] };
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Address {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// StakeId - engine-assigned identifier, strictly increasing from 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StakeId(pub u64);

impl fmt::Display for StakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transaction context supplied with every mutating call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    /// Account issuing the call
    pub caller: Address,
    /// Chain time in seconds
    pub timestamp: Timestamp,
    /// Block the call is included in
    pub block: BlockNumber,
}

impl TxContext {
    pub fn new(caller: Address, timestamp: Timestamp, block: BlockNumber) -> Self {
        Self {
            caller,
            timestamp,
            block,
        }
    }
}

/// Serde helpers for amounts written as decimal strings.
///
/// TOML integers are 64-bit, so `u128` amounts travel as strings. Plain
/// integers are still accepted on input.
pub mod amount_str {
    use super::Amount;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(u64),
    }

    pub fn serialize<S: Serializer>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s
                .replace('_', "")
                .parse::<Amount>()
                .map_err(de::Error::custom),
            Raw::Int(n) => Ok(n as Amount),
        }
    }
}
