//! Execute handlers for the bridge vault contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `admin` - Initialize and the public/relayer breakers
//! - `config` - Owner configuration writes
//! - `liquidity` - Add/remove liquidity, relayer release, user deposit
//! - `whitelist` - Allow-list entries and enforcement toggle

mod admin;
mod config;
mod liquidity;
pub(crate) mod whitelist;

pub use admin::*;
pub use config::*;
pub use liquidity::*;
pub use whitelist::*;
