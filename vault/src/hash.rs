//! Deterministic record key derivation
//!
//! Allow-list entries are addressed by a key derived from fixed seeds, so the
//! same `(user, vault)` pair always lands on the same record and no caller can
//! choose where an entry lives.
//!
//! # Byte Layout
//! - seed:  `b"allowlist"`
//! - user:  u32 big-endian length, then the address bytes
//! - vault: u32 big-endian length, then the address bytes
//!
//! The key is `keccak256` over the concatenation.

use cosmwasm_std::Addr;
use tiny_keccak::{Hasher, Keccak};

/// Seed prefix for allow-list entry keys
pub const ALLOW_LIST_SEED: &[u8] = b"allowlist";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the storage key of the allow-list entry for `user` on `vault`.
pub fn allow_list_key(user: &Addr, vault: &Addr) -> [u8; 32] {
    let user = user.as_bytes();
    let vault = vault.as_bytes();

    let mut data = Vec::with_capacity(ALLOW_LIST_SEED.len() + 8 + user.len() + vault.len());
    data.extend_from_slice(ALLOW_LIST_SEED);
    data.extend_from_slice(&(user.len() as u32).to_be_bytes());
    data.extend_from_slice(user);
    data.extend_from_slice(&(vault.len() as u32).to_be_bytes());
    data.extend_from_slice(vault);

    keccak256(&data)
}

/// Render a 32-byte key as 0x-prefixed hex
pub fn key_to_hex(key: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(key))
}
