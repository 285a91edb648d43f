//! Wallet provider transport and contract binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the EIP-1193 request seam, `injected` implements it over
//! `window.ethereum`, `contract` encodes portal calls on top of it, and
//! `types` holds the decoded shapes.

pub mod contract;
#[cfg(feature = "csr")]
pub mod injected;
#[cfg(test)]
pub(crate) mod mock_provider;
pub mod provider;
pub mod types;
