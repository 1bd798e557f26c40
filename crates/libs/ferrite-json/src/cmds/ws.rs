//! Commands only valid over a websocket transport: the authentication
//! handshake and the notification subscription toggles.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::field::{FieldDescriptor, ParamKind};
use crate::registry::{CommandDescriptor, Registry, UsageFlags};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateCmd {
    pub username: String,
    pub passphrase: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotifyWinningTicketsCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotifySpentAndMissedTicketsCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotifyNewTicketsCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotifyStakeDifficultyCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotifyBlocksCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopNotifyBlocksCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotifyNewTransactionsCmd {
    pub verbose: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopNotifyNewTransactionsCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RescanCmd {
    pub block_hashes: String,
}

crate::rpc_command!(AuthenticateCmd, "authenticate");
crate::rpc_command!(NotifyWinningTicketsCmd, "notifywinningtickets");
crate::rpc_command!(NotifySpentAndMissedTicketsCmd, "notifyspentandmissedtickets");
crate::rpc_command!(NotifyNewTicketsCmd, "notifynewtickets");
crate::rpc_command!(NotifyStakeDifficultyCmd, "notifystakedifficulty");
crate::rpc_command!(NotifyBlocksCmd, "notifyblocks");
crate::rpc_command!(StopNotifyBlocksCmd, "stopnotifyblocks");
crate::rpc_command!(NotifyNewTransactionsCmd, "notifynewtransactions");
crate::rpc_command!(StopNotifyNewTransactionsCmd, "stopnotifynewtransactions");
crate::rpc_command!(RescanCmd, "rescan");

/// Registers every websocket-only command.
pub fn register_ws_commands(registry: &mut Registry) -> Result<(), Error> {
    use FieldDescriptor as F;
    use ParamKind as K;

    let ws = UsageFlags::WEBSOCKET;

    registry.register::<AuthenticateCmd>(
        CommandDescriptor::new("authenticate", ws)
            .field(F::required("username", K::String))
            .field(F::required("passphrase", K::String)),
    )?;
    registry.register::<NotifyWinningTicketsCmd>(
        CommandDescriptor::new("notifywinningtickets", ws),
    )?;
    registry.register::<NotifySpentAndMissedTicketsCmd>(
        CommandDescriptor::new("notifyspentandmissedtickets", ws),
    )?;
    registry
        .register::<NotifyNewTicketsCmd>(CommandDescriptor::new("notifynewtickets", ws))?;
    registry.register::<NotifyStakeDifficultyCmd>(
        CommandDescriptor::new("notifystakedifficulty", ws),
    )?;
    registry.register::<NotifyBlocksCmd>(CommandDescriptor::new("notifyblocks", ws))?;
    registry.register::<StopNotifyBlocksCmd>(CommandDescriptor::new("stopnotifyblocks", ws))?;
    registry.register::<NotifyNewTransactionsCmd>(
        CommandDescriptor::new("notifynewtransactions", ws)
            .field(F::optional_defaulted("verbose", K::Bool, json!(false))),
    )?;
    registry.register::<StopNotifyNewTransactionsCmd>(
        CommandDescriptor::new("stopnotifynewtransactions", ws),
    )?;
    registry.register::<RescanCmd>(
        CommandDescriptor::new("rescan", ws).field(F::required("block_hashes", K::String)),
    )?;

    Ok(())
}
