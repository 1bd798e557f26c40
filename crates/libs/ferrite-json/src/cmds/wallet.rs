//! Wallet server commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::cmds::chain::TransactionInput;
use crate::error::Error;
use crate::field::{FieldDescriptor, ParamKind};
use crate::registry::{CommandDescriptor, Registry, UsageFlags};

/// An input being signed, with the scripts needed to redeem it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawTxInput {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub tree: i8,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    #[serde(rename = "redeemScript")]
    pub redeem_script: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddMultisigAddressCmd {
    pub n_required: i64,
    pub keys: Vec<String>,
    pub account: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateMultisigCmd {
    pub n_required: i64,
    pub keys: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateNewAccountCmd {
    pub account: String,
    pub account_type: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DumpPrivKeyCmd {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateFeeCmd {
    pub num_blocks: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatePriorityCmd {
    pub num_blocks: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetAccountCmd {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetAccountAddressCmd {
    pub account: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetAddressesByAccountCmd {
    pub account: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBalanceCmd {
    pub account: Option<String>,
    pub min_conf: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetNewAddressCmd {
    pub account: Option<String>,
    pub gap_policy: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetRawChangeAddressCmd {
    pub account: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetReceivedByAccountCmd {
    pub account: String,
    pub min_conf: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetReceivedByAddressCmd {
    pub address: String,
    pub min_conf: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetTransactionCmd {
    pub txid: String,
    pub include_watch_only: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportAddressCmd {
    pub address: String,
    pub rescan: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportPrivKeyCmd {
    pub priv_key: String,
    pub label: Option<String>,
    pub rescan: Option<bool>,
    pub scan_from: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportPubKeyCmd {
    pub pub_key: String,
    pub rescan: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyPoolRefillCmd {
    pub new_size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListAccountsCmd {
    pub min_conf: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListLockUnspentCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListReceivedByAccountCmd {
    pub min_conf: Option<i64>,
    pub include_empty: Option<bool>,
    pub include_watch_only: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListReceivedByAddressCmd {
    pub min_conf: Option<i64>,
    pub include_empty: Option<bool>,
    pub include_watch_only: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListSinceBlockCmd {
    pub block_hash: Option<String>,
    pub target_confirmations: Option<i64>,
    pub include_watch_only: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListTransactionsCmd {
    pub account: Option<String>,
    pub count: Option<i64>,
    pub from: Option<i64>,
    pub include_watch_only: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListUnspentCmd {
    pub min_conf: Option<i64>,
    pub max_conf: Option<i64>,
    pub addresses: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LockUnspentCmd {
    pub unlock: bool,
    pub transactions: Vec<TransactionInput>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenameAccountCmd {
    pub old_account: String,
    pub new_account: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SendFromCmd {
    pub from_account: String,
    pub to_address: String,
    pub amount: f64,
    pub min_conf: Option<i64>,
    pub comment: Option<String>,
    pub comment_to: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SendManyCmd {
    pub from_account: String,
    pub amounts: BTreeMap<String, f64>,
    pub min_conf: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SendToAddressCmd {
    pub address: String,
    pub amount: f64,
    pub comment: Option<String>,
    pub comment_to: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetTxFeeCmd {
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignMessageCmd {
    pub address: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignRawTransactionCmd {
    pub raw_tx: String,
    pub inputs: Option<Vec<RawTxInput>>,
    pub priv_keys: Option<Vec<String>>,
    pub flags: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepAccountCmd {
    pub source_account: String,
    pub destination_address: String,
    pub required_confirmations: Option<u32>,
    pub fee_per_kb: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifySeedCmd {
    pub seed: String,
    pub account: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletLockCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletPassphraseCmd {
    pub passphrase: String,
    pub timeout: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalletPassphraseChangeCmd {
    pub old_passphrase: String,
    pub new_passphrase: String,
}

crate::rpc_command!(AddMultisigAddressCmd, "addmultisigaddress");
crate::rpc_command!(CreateMultisigCmd, "createmultisig");
crate::rpc_command!(CreateNewAccountCmd, "createnewaccount");
crate::rpc_command!(DumpPrivKeyCmd, "dumpprivkey");
crate::rpc_command!(EstimateFeeCmd, "estimatefee");
crate::rpc_command!(EstimatePriorityCmd, "estimatepriority");
crate::rpc_command!(GetAccountCmd, "getaccount");
crate::rpc_command!(GetAccountAddressCmd, "getaccountaddress");
crate::rpc_command!(GetAddressesByAccountCmd, "getaddressesbyaccount");
crate::rpc_command!(GetBalanceCmd, "getbalance");
crate::rpc_command!(GetNewAddressCmd, "getnewaddress");
crate::rpc_command!(GetRawChangeAddressCmd, "getrawchangeaddress");
crate::rpc_command!(GetReceivedByAccountCmd, "getreceivedbyaccount");
crate::rpc_command!(GetReceivedByAddressCmd, "getreceivedbyaddress");
crate::rpc_command!(GetTransactionCmd, "gettransaction");
crate::rpc_command!(ImportAddressCmd, "importaddress");
crate::rpc_command!(ImportPrivKeyCmd, "importprivkey");
crate::rpc_command!(ImportPubKeyCmd, "importpubkey");
crate::rpc_command!(KeyPoolRefillCmd, "keypoolrefill");
crate::rpc_command!(ListAccountsCmd, "listaccounts");
crate::rpc_command!(ListLockUnspentCmd, "listlockunspent");
crate::rpc_command!(ListReceivedByAccountCmd, "listreceivedbyaccount");
crate::rpc_command!(ListReceivedByAddressCmd, "listreceivedbyaddress");
crate::rpc_command!(ListSinceBlockCmd, "listsinceblock");
crate::rpc_command!(ListTransactionsCmd, "listtransactions");
crate::rpc_command!(ListUnspentCmd, "listunspent");
crate::rpc_command!(LockUnspentCmd, "lockunspent");
crate::rpc_command!(RenameAccountCmd, "renameaccount");
crate::rpc_command!(SendFromCmd, "sendfrom");
crate::rpc_command!(SendManyCmd, "sendmany");
crate::rpc_command!(SendToAddressCmd, "sendtoaddress");
crate::rpc_command!(SetTxFeeCmd, "settxfee");
crate::rpc_command!(SignMessageCmd, "signmessage");
crate::rpc_command!(SignRawTransactionCmd, "signrawtransaction");
crate::rpc_command!(SweepAccountCmd, "sweepaccount");
crate::rpc_command!(VerifySeedCmd, "verifyseed");
crate::rpc_command!(WalletLockCmd, "walletlock");
crate::rpc_command!(WalletPassphraseCmd, "walletpassphrase");
crate::rpc_command!(WalletPassphraseChangeCmd, "walletpassphrasechange");

/// Registers every wallet server command.
pub fn register_wallet_commands(registry: &mut Registry) -> Result<(), Error> {
    use FieldDescriptor as F;
    use ParamKind as K;

    let wallet = UsageFlags::WALLET;

    registry.register::<AddMultisigAddressCmd>(
        CommandDescriptor::new("addmultisigaddress", wallet)
            .field(F::required("n_required", K::Int))
            .field(F::required("keys", K::StringArray))
            .field(F::optional("account", K::String)),
    )?;
    registry.register::<CreateMultisigCmd>(
        CommandDescriptor::new("createmultisig", wallet)
            .field(F::required("n_required", K::Int))
            .field(F::required("keys", K::StringArray)),
    )?;
    registry.register::<CreateNewAccountCmd>(
        CommandDescriptor::new("createnewaccount", wallet)
            .field(F::required("account", K::String))
            .field(F::optional_defaulted("account_type", K::Uint, json!(0))),
    )?;
    registry.register::<DumpPrivKeyCmd>(
        CommandDescriptor::new("dumpprivkey", wallet).field(F::required("address", K::String)),
    )?;
    registry.register::<EstimateFeeCmd>(
        CommandDescriptor::new("estimatefee", wallet).field(F::required("num_blocks", K::Int)),
    )?;
    registry.register::<EstimatePriorityCmd>(
        CommandDescriptor::new("estimatepriority", wallet)
            .field(F::required("num_blocks", K::Int)),
    )?;
    registry.register::<GetAccountCmd>(
        CommandDescriptor::new("getaccount", wallet).field(F::required("address", K::String)),
    )?;
    registry.register::<GetAccountAddressCmd>(
        CommandDescriptor::new("getaccountaddress", wallet)
            .field(F::required("account", K::String)),
    )?;
    registry.register::<GetAddressesByAccountCmd>(
        CommandDescriptor::new("getaddressesbyaccount", wallet)
            .field(F::required("account", K::String)),
    )?;
    registry.register::<GetBalanceCmd>(
        CommandDescriptor::new("getbalance", wallet)
            .field(F::optional("account", K::String))
            .field(F::optional_defaulted("min_conf", K::Int, json!(1))),
    )?;
    registry.register::<GetNewAddressCmd>(
        CommandDescriptor::new("getnewaddress", wallet)
            .field(F::optional("account", K::String))
            .field(F::optional("gap_policy", K::String)),
    )?;
    registry.register::<GetRawChangeAddressCmd>(
        CommandDescriptor::new("getrawchangeaddress", wallet)
            .field(F::optional("account", K::String)),
    )?;
    registry.register::<GetReceivedByAccountCmd>(
        CommandDescriptor::new("getreceivedbyaccount", wallet)
            .field(F::required("account", K::String))
            .field(F::optional_defaulted("min_conf", K::Int, json!(1))),
    )?;
    registry.register::<GetReceivedByAddressCmd>(
        CommandDescriptor::new("getreceivedbyaddress", wallet)
            .field(F::required("address", K::String))
            .field(F::optional_defaulted("min_conf", K::Int, json!(1))),
    )?;
    registry.register::<GetTransactionCmd>(
        CommandDescriptor::new("gettransaction", wallet)
            .field(F::required("txid", K::String))
            .field(F::optional_defaulted("include_watch_only", K::Bool, json!(false))),
    )?;
    registry.register::<ImportAddressCmd>(
        CommandDescriptor::new("importaddress", wallet)
            .field(F::required("address", K::String))
            .field(F::optional_defaulted("rescan", K::Bool, json!(true))),
    )?;
    registry.register::<ImportPrivKeyCmd>(
        CommandDescriptor::new("importprivkey", wallet)
            .field(F::required("priv_key", K::String))
            .field(F::optional("label", K::String))
            .field(F::optional_defaulted("rescan", K::Bool, json!(true)))
            .field(F::optional("scan_from", K::Int)),
    )?;
    registry.register::<ImportPubKeyCmd>(
        CommandDescriptor::new("importpubkey", wallet)
            .field(F::required("pub_key", K::String))
            .field(F::optional_defaulted("rescan", K::Bool, json!(true))),
    )?;
    registry.register::<KeyPoolRefillCmd>(
        CommandDescriptor::new("keypoolrefill", wallet)
            .field(F::optional_defaulted("new_size", K::Uint, json!(100))),
    )?;
    registry.register::<ListAccountsCmd>(
        CommandDescriptor::new("listaccounts", wallet)
            .field(F::optional_defaulted("min_conf", K::Int, json!(1))),
    )?;
    registry.register::<ListLockUnspentCmd>(CommandDescriptor::new("listlockunspent", wallet))?;
    registry.register::<ListReceivedByAccountCmd>(
        CommandDescriptor::new("listreceivedbyaccount", wallet)
            .field(F::optional_defaulted("min_conf", K::Int, json!(1)))
            .field(F::optional_defaulted("include_empty", K::Bool, json!(false)))
            .field(F::optional_defaulted("include_watch_only", K::Bool, json!(false))),
    )?;
    registry.register::<ListReceivedByAddressCmd>(
        CommandDescriptor::new("listreceivedbyaddress", wallet)
            .field(F::optional_defaulted("min_conf", K::Int, json!(1)))
            .field(F::optional_defaulted("include_empty", K::Bool, json!(false)))
            .field(F::optional_defaulted("include_watch_only", K::Bool, json!(false))),
    )?;
    registry.register::<ListSinceBlockCmd>(
        CommandDescriptor::new("listsinceblock", wallet)
            .field(F::optional("block_hash", K::String))
            .field(F::optional_defaulted("target_confirmations", K::Int, json!(1)))
            .field(F::optional_defaulted("include_watch_only", K::Bool, json!(false))),
    )?;
    registry.register::<ListTransactionsCmd>(
        CommandDescriptor::new("listtransactions", wallet)
            .field(F::optional("account", K::String))
            .field(F::optional_defaulted("count", K::Int, json!(10)))
            .field(F::optional_defaulted("from", K::Int, json!(0)))
            .field(F::optional_defaulted("include_watch_only", K::Bool, json!(false))),
    )?;
    registry.register::<ListUnspentCmd>(
        CommandDescriptor::new("listunspent", wallet)
            .field(F::optional_defaulted("min_conf", K::Int, json!(1)))
            .field(F::optional_defaulted("max_conf", K::Int, json!(9999999)))
            .field(F::optional("addresses", K::StringArray)),
    )?;
    registry.register::<LockUnspentCmd>(
        CommandDescriptor::new("lockunspent", wallet)
            .field(F::required("unlock", K::Bool))
            .field(F::required("transactions", K::ObjectArray)),
    )?;
    registry.register::<RenameAccountCmd>(
        CommandDescriptor::new("renameaccount", wallet)
            .field(F::required("old_account", K::String))
            .field(F::required("new_account", K::String)),
    )?;
    registry.register::<SendFromCmd>(
        CommandDescriptor::new("sendfrom", wallet)
            .field(F::required("from_account", K::String))
            .field(F::required("to_address", K::String))
            .field(F::required("amount", K::Float))
            .field(F::optional_defaulted("min_conf", K::Int, json!(1)))
            .field(F::optional("comment", K::String))
            .field(F::optional("comment_to", K::String)),
    )?;
    registry.register::<SendManyCmd>(
        CommandDescriptor::new("sendmany", wallet)
            .field(F::required("from_account", K::String))
            .field(F::required("amounts", K::AmountMap))
            .field(F::optional_defaulted("min_conf", K::Int, json!(1)))
            .field(F::optional("comment", K::String)),
    )?;
    registry.register::<SendToAddressCmd>(
        CommandDescriptor::new("sendtoaddress", wallet)
            .field(F::required("address", K::String))
            .field(F::required("amount", K::Float))
            .field(F::optional("comment", K::String))
            .field(F::optional("comment_to", K::String)),
    )?;
    registry.register::<SetTxFeeCmd>(
        CommandDescriptor::new("settxfee", wallet).field(F::required("amount", K::Float)),
    )?;
    registry.register::<SignMessageCmd>(
        CommandDescriptor::new("signmessage", wallet)
            .field(F::required("address", K::String))
            .field(F::required("message", K::String)),
    )?;
    registry.register::<SignRawTransactionCmd>(
        CommandDescriptor::new("signrawtransaction", wallet)
            .field(F::required("raw_tx", K::String))
            .field(F::optional("inputs", K::ObjectArray))
            .field(F::optional("priv_keys", K::StringArray))
            .field(F::optional_defaulted("flags", K::String, json!("ALL"))),
    )?;
    registry.register::<SweepAccountCmd>(
        CommandDescriptor::new("sweepaccount", wallet)
            .field(F::required("source_account", K::String))
            .field(F::required("destination_address", K::String))
            .field(F::optional("required_confirmations", K::Uint))
            .field(F::optional("fee_per_kb", K::Float)),
    )?;
    registry.register::<VerifySeedCmd>(
        CommandDescriptor::new("verifyseed", wallet)
            .field(F::required("seed", K::String))
            .field(F::optional("account", K::Uint)),
    )?;
    registry.register::<WalletLockCmd>(CommandDescriptor::new("walletlock", wallet))?;
    registry.register::<WalletPassphraseCmd>(
        CommandDescriptor::new("walletpassphrase", wallet)
            .field(F::required("passphrase", K::String))
            .field(F::required("timeout", K::Int)),
    )?;
    registry.register::<WalletPassphraseChangeCmd>(
        CommandDescriptor::new("walletpassphrasechange", wallet)
            .field(F::required("old_passphrase", K::String))
            .field(F::required("new_passphrase", K::String)),
    )?;

    Ok(())
}
