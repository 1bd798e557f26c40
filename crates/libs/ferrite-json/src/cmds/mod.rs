//! The built-in command surface, split by which server handles it.

pub mod chain;
pub mod wallet;
pub mod ws;

use crate::error::Error;
use crate::registry::Registry;

/// Registers the full built-in command set.
pub fn register_all(registry: &mut Registry) -> Result<(), Error> {
    chain::register_chain_commands(registry)?;
    wallet::register_wallet_commands(registry)?;
    ws::register_ws_commands(registry)?;
    Ok(())
}
