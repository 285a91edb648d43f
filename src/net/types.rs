//! Client-side shapes for contract and provider data.
//!
//! DESIGN
//! ======
//! Records are kept exactly as the contract returned them: no local
//! validation, de-duplication or re-ordering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use time::OffsetDateTime;

/// One logged wave, as shown in the history list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveRecord {
    /// Sender address, verbatim from the contract.
    pub address: String,
    /// Block time of the wave (UTC); `None` when the contract reported a
    /// time outside the calendar range.
    pub timestamp: Option<OffsetDateTime>,
    pub message: String,
}

impl WaveRecord {
    /// Build a record from raw contract fields.
    ///
    /// `timestamp_secs` is the on-chain Unix time in seconds. Values beyond
    /// the representable calendar range are logged and left unset.
    #[must_use]
    pub fn from_parts(address: impl Into<String>, timestamp_secs: u64, message: impl Into<String>) -> Self {
        let millis = i128::from(timestamp_secs) * 1_000;
        let timestamp = match OffsetDateTime::from_unix_timestamp_nanos(millis * 1_000_000) {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("wave timestamp {timestamp_secs} out of range: {e}");
                None
            }
        };
        Self { address: address.into(), timestamp, message: message.into() }
    }

    /// Milliseconds since the Unix epoch, if the time is known.
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i128> {
        self.timestamp.map(|t| t.unix_timestamp_nanos() / 1_000_000)
    }
}

/// The subset of an `eth_getTransactionReceipt` result the client uses.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_number: Option<String>,
    /// `0x1` on success, `0x0` on revert. Pre-Byzantium receipts omit it.
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Whether the transaction executed without reverting.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status.as_deref().map_or(true, |s| parse_quantity(s) != Some(0))
    }

    /// Block number the transaction was mined in, if reported.
    #[must_use]
    pub fn block(&self) -> Option<u64> {
        self.block_number.as_deref().and_then(parse_quantity)
    }
}

/// Parse a JSON-RPC hex quantity such as `0x1b4`.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<u64> {
    let digits = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
