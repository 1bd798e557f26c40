//! Chain server commands and the aux wire types they carry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::field::{FieldDescriptor, ParamKind};
use crate::registry::{CommandDescriptor, Registry, UsageFlags};

/// A transaction outpoint reference as it appears in request parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub tree: i8,
}

/// Numeric template limits may arrive either as a size or as a boolean
/// enable/disable toggle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateLimit {
    Enabled(bool),
    Size(i64),
}

/// Block template tweaks accepted by getblocktemplate.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "longpollid")]
    pub long_poll_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sigoplimit")]
    pub sig_op_limit: Option<TemplateLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "sizelimit")]
    pub size_limit: Option<TemplateLimit>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "maxversion")]
    pub max_version: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "workid")]
    pub work_id: Option<String>,
}

/// Extra data accepted alongside a submitted block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitBlockOptions {
    #[serde(rename = "workid")]
    pub work_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddNodeSubCmd {
    Add,
    Remove,
    OneTry,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeSubCmd {
    Connect,
    Remove,
    Disconnect,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSmartFeeMode {
    Conservative,
    Economical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddNodeCmd {
    pub addr: String,
    pub sub_cmd: AddNodeSubCmd,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateRawTransactionCmd {
    pub inputs: Vec<TransactionInput>,
    pub amounts: BTreeMap<String, f64>,
    pub lock_time: Option<i64>,
    pub expiry: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DebugLevelCmd {
    pub level_spec: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodeRawTransactionCmd {
    pub hex_tx: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecodeScriptCmd {
    pub hex_script: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimateSmartFeeCmd {
    pub confirmations: i64,
    pub mode: EstimateSmartFeeMode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateCmd {
    pub num_blocks: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetAddedNodeInfoCmd {
    pub dns: bool,
    pub node: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBestBlockCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBestBlockHashCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockCmd {
    pub hash: String,
    pub verbose: Option<bool>,
    pub verbose_tx: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockChainInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockCountCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockHashCmd {
    pub index: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockHeaderCmd {
    pub hash: String,
    pub verbose: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockSubsidyCmd {
    pub height: i64,
    pub voters: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetBlockTemplateCmd {
    pub request: Option<TemplateRequest>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetCFilterCmd {
    pub hash: String,
    pub filter_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetCFilterHeaderCmd {
    pub hash: String,
    pub filter_type: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetChainTipsCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetConnectionCountCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetCurrentNetCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetDifficultyCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetGenerateCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetHashesPerSecCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetMempoolInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetMiningInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetNetworkInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetNetTotalsCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetNetworkHashPSCmd {
    pub blocks: Option<i64>,
    pub height: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetPeerInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetRawMempoolCmd {
    pub verbose: Option<bool>,
    pub tx_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetRawTransactionCmd {
    pub txid: String,
    pub verbose: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetStakeVersionsCmd {
    pub hash: String,
    pub count: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetTxOutCmd {
    pub txid: String,
    pub vout: u32,
    pub include_mempool: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetTxOutSetInfoCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetVoteInfoCmd {
    pub version: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetWorkCmd {
    pub data: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelpCmd {
    pub command: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeCmd {
    pub sub_cmd: NodeSubCmd,
    pub target: String,
    pub connect_sub_cmd: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PingCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchRawTransactionsCmd {
    pub address: String,
    pub verbose: Option<i64>,
    pub skip: Option<i64>,
    pub count: Option<i64>,
    pub vin_extra: Option<i64>,
    pub reverse: Option<bool>,
    pub filter_addrs: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SendRawTransactionCmd {
    pub hex_tx: String,
    pub allow_high_fees: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetGenerateCmd {
    pub generate: bool,
    pub gen_proc_limit: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StopCmd {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitBlockCmd {
    pub hex_block: String,
    pub options: Option<SubmitBlockOptions>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidateAddressCmd {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyChainCmd {
    pub check_level: Option<i64>,
    pub check_depth: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyMessageCmd {
    pub address: String,
    pub signature: String,
    pub message: String,
}

crate::rpc_command!(AddNodeCmd, "addnode");
crate::rpc_command!(CreateRawTransactionCmd, "createrawtransaction");
crate::rpc_command!(DebugLevelCmd, "debuglevel");
crate::rpc_command!(DecodeRawTransactionCmd, "decoderawtransaction");
crate::rpc_command!(DecodeScriptCmd, "decodescript");
crate::rpc_command!(EstimateSmartFeeCmd, "estimatesmartfee");
crate::rpc_command!(GenerateCmd, "generate");
crate::rpc_command!(GetAddedNodeInfoCmd, "getaddednodeinfo");
crate::rpc_command!(GetBestBlockCmd, "getbestblock");
crate::rpc_command!(GetBestBlockHashCmd, "getbestblockhash");
crate::rpc_command!(GetBlockCmd, "getblock");
crate::rpc_command!(GetBlockChainInfoCmd, "getblockchaininfo");
crate::rpc_command!(GetBlockCountCmd, "getblockcount");
crate::rpc_command!(GetBlockHashCmd, "getblockhash");
crate::rpc_command!(GetBlockHeaderCmd, "getblockheader");
crate::rpc_command!(GetBlockSubsidyCmd, "getblocksubsidy");
crate::rpc_command!(GetBlockTemplateCmd, "getblocktemplate");
crate::rpc_command!(GetCFilterCmd, "getcfilter");
crate::rpc_command!(GetCFilterHeaderCmd, "getcfilterheader");
crate::rpc_command!(GetChainTipsCmd, "getchaintips");
crate::rpc_command!(GetConnectionCountCmd, "getconnectioncount");
crate::rpc_command!(GetCurrentNetCmd, "getcurrentnet");
crate::rpc_command!(GetDifficultyCmd, "getdifficulty");
crate::rpc_command!(GetGenerateCmd, "getgenerate");
crate::rpc_command!(GetHashesPerSecCmd, "gethashespersec");
crate::rpc_command!(GetInfoCmd, "getinfo");
crate::rpc_command!(GetMempoolInfoCmd, "getmempoolinfo");
crate::rpc_command!(GetMiningInfoCmd, "getmininginfo");
crate::rpc_command!(GetNetworkInfoCmd, "getnetworkinfo");
crate::rpc_command!(GetNetTotalsCmd, "getnettotals");
crate::rpc_command!(GetNetworkHashPSCmd, "getnetworkhashps");
crate::rpc_command!(GetPeerInfoCmd, "getpeerinfo");
crate::rpc_command!(GetRawMempoolCmd, "getrawmempool");
crate::rpc_command!(GetRawTransactionCmd, "getrawtransaction");
crate::rpc_command!(GetStakeVersionsCmd, "getstakeversions");
crate::rpc_command!(GetTxOutCmd, "gettxout");
crate::rpc_command!(GetTxOutSetInfoCmd, "gettxoutsetinfo");
crate::rpc_command!(GetVoteInfoCmd, "getvoteinfo");
crate::rpc_command!(GetWorkCmd, "getwork");
crate::rpc_command!(HelpCmd, "help");
crate::rpc_command!(NodeCmd, "node");
crate::rpc_command!(PingCmd, "ping");
crate::rpc_command!(SearchRawTransactionsCmd, "searchrawtransactions");
crate::rpc_command!(SendRawTransactionCmd, "sendrawtransaction");
crate::rpc_command!(SetGenerateCmd, "setgenerate");
crate::rpc_command!(StopCmd, "stop");
crate::rpc_command!(SubmitBlockCmd, "submitblock");
crate::rpc_command!(ValidateAddressCmd, "validateaddress");
crate::rpc_command!(VerifyChainCmd, "verifychain");
crate::rpc_command!(VerifyMessageCmd, "verifymessage");

/// Registers every chain server command.
pub fn register_chain_commands(registry: &mut Registry) -> Result<(), Error> {
    use FieldDescriptor as F;
    use ParamKind as K;

    let none = UsageFlags::NONE;

    registry.register::<AddNodeCmd>(
        CommandDescriptor::new("addnode", none)
            .field(F::required("addr", K::String))
            .field(F::required("sub_cmd", K::String)),
    )?;
    registry.register::<CreateRawTransactionCmd>(
        CommandDescriptor::new("createrawtransaction", none)
            .field(F::required("inputs", K::ObjectArray))
            .field(F::required("amounts", K::AmountMap))
            .field(F::optional("lock_time", K::Int))
            .field(F::optional("expiry", K::Int)),
    )?;
    registry.register::<DebugLevelCmd>(
        CommandDescriptor::new("debuglevel", none).field(F::required("level_spec", K::String)),
    )?;
    registry.register::<DecodeRawTransactionCmd>(
        CommandDescriptor::new("decoderawtransaction", none)
            .field(F::required("hex_tx", K::String)),
    )?;
    registry.register::<DecodeScriptCmd>(
        CommandDescriptor::new("decodescript", none).field(F::required("hex_script", K::String)),
    )?;
    registry.register::<EstimateSmartFeeCmd>(
        CommandDescriptor::new("estimatesmartfee", none)
            .field(F::required("confirmations", K::Int))
            .field(F::required("mode", K::String)),
    )?;
    registry.register::<GenerateCmd>(
        CommandDescriptor::new("generate", none).field(F::required("num_blocks", K::Uint)),
    )?;
    registry.register::<GetAddedNodeInfoCmd>(
        CommandDescriptor::new("getaddednodeinfo", none)
            .field(F::required("dns", K::Bool))
            .field(F::optional("node", K::String)),
    )?;
    registry.register::<GetBestBlockCmd>(CommandDescriptor::new("getbestblock", none))?;
    registry.register::<GetBestBlockHashCmd>(CommandDescriptor::new("getbestblockhash", none))?;
    registry.register::<GetBlockCmd>(
        CommandDescriptor::new("getblock", none)
            .field(F::required("hash", K::String))
            .field(F::optional_defaulted("verbose", K::Bool, json!(true)))
            .field(F::optional_defaulted("verbose_tx", K::Bool, json!(false))),
    )?;
    registry
        .register::<GetBlockChainInfoCmd>(CommandDescriptor::new("getblockchaininfo", none))?;
    registry.register::<GetBlockCountCmd>(CommandDescriptor::new("getblockcount", none))?;
    registry.register::<GetBlockHashCmd>(
        CommandDescriptor::new("getblockhash", none).field(F::required("index", K::Int)),
    )?;
    registry.register::<GetBlockHeaderCmd>(
        CommandDescriptor::new("getblockheader", none)
            .field(F::required("hash", K::String))
            .field(F::optional_defaulted("verbose", K::Bool, json!(true))),
    )?;
    registry.register::<GetBlockSubsidyCmd>(
        CommandDescriptor::new("getblocksubsidy", none)
            .field(F::required("height", K::Int))
            .field(F::required("voters", K::Uint)),
    )?;
    registry.register::<GetBlockTemplateCmd>(
        CommandDescriptor::new("getblocktemplate", none)
            .field(F::optional("request", K::Object)),
    )?;
    registry.register::<GetCFilterCmd>(
        CommandDescriptor::new("getcfilter", none)
            .field(F::required("hash", K::String))
            .field(F::required("filter_type", K::String)),
    )?;
    registry.register::<GetCFilterHeaderCmd>(
        CommandDescriptor::new("getcfilterheader", none)
            .field(F::required("hash", K::String))
            .field(F::required("filter_type", K::String)),
    )?;
    registry.register::<GetChainTipsCmd>(CommandDescriptor::new("getchaintips", none))?;
    registry
        .register::<GetConnectionCountCmd>(CommandDescriptor::new("getconnectioncount", none))?;
    registry.register::<GetCurrentNetCmd>(CommandDescriptor::new("getcurrentnet", none))?;
    registry.register::<GetDifficultyCmd>(CommandDescriptor::new("getdifficulty", none))?;
    registry.register::<GetGenerateCmd>(CommandDescriptor::new("getgenerate", none))?;
    registry.register::<GetHashesPerSecCmd>(CommandDescriptor::new("gethashespersec", none))?;
    registry.register::<GetInfoCmd>(CommandDescriptor::new("getinfo", none))?;
    registry.register::<GetMempoolInfoCmd>(CommandDescriptor::new("getmempoolinfo", none))?;
    registry.register::<GetMiningInfoCmd>(CommandDescriptor::new("getmininginfo", none))?;
    registry.register::<GetNetworkInfoCmd>(CommandDescriptor::new("getnetworkinfo", none))?;
    registry.register::<GetNetTotalsCmd>(CommandDescriptor::new("getnettotals", none))?;
    registry.register::<GetNetworkHashPSCmd>(
        CommandDescriptor::new("getnetworkhashps", none)
            .field(F::optional_defaulted("blocks", K::Int, json!(120)))
            .field(F::optional_defaulted("height", K::Int, json!(-1))),
    )?;
    registry.register::<GetPeerInfoCmd>(CommandDescriptor::new("getpeerinfo", none))?;
    registry.register::<GetRawMempoolCmd>(
        CommandDescriptor::new("getrawmempool", none)
            .field(F::optional_defaulted("verbose", K::Bool, json!(false)))
            .field(F::optional("tx_type", K::String)),
    )?;
    registry.register::<GetRawTransactionCmd>(
        CommandDescriptor::new("getrawtransaction", none)
            .field(F::required("txid", K::String))
            .field(F::optional_defaulted("verbose", K::Int, json!(0))),
    )?;
    registry.register::<GetStakeVersionsCmd>(
        CommandDescriptor::new("getstakeversions", none)
            .field(F::required("hash", K::String))
            .field(F::required("count", K::Int)),
    )?;
    registry.register::<GetTxOutCmd>(
        CommandDescriptor::new("gettxout", none)
            .field(F::required("txid", K::String))
            .field(F::required("vout", K::Uint))
            .field(F::optional_defaulted("include_mempool", K::Bool, json!(true))),
    )?;
    registry.register::<GetTxOutSetInfoCmd>(CommandDescriptor::new("gettxoutsetinfo", none))?;
    registry.register::<GetVoteInfoCmd>(
        CommandDescriptor::new("getvoteinfo", none).field(F::required("version", K::Uint)),
    )?;
    registry.register::<GetWorkCmd>(
        CommandDescriptor::new("getwork", none).field(F::optional("data", K::String)),
    )?;
    registry.register::<HelpCmd>(
        CommandDescriptor::new("help", none).field(F::optional("command", K::String)),
    )?;
    registry.register::<NodeCmd>(
        CommandDescriptor::new("node", none)
            .field(F::required("sub_cmd", K::String))
            .field(F::required("target", K::String))
            .field(F::optional("connect_sub_cmd", K::String)),
    )?;
    registry.register::<PingCmd>(CommandDescriptor::new("ping", none))?;
    registry.register::<SearchRawTransactionsCmd>(
        CommandDescriptor::new("searchrawtransactions", none)
            .field(F::required("address", K::String))
            .field(F::optional_defaulted("verbose", K::Int, json!(1)))
            .field(F::optional_defaulted("skip", K::Int, json!(0)))
            .field(F::optional_defaulted("count", K::Int, json!(100)))
            .field(F::optional_defaulted("vin_extra", K::Int, json!(0)))
            .field(F::optional_defaulted("reverse", K::Bool, json!(false)))
            .field(F::optional("filter_addrs", K::StringArray)),
    )?;
    registry.register::<SendRawTransactionCmd>(
        CommandDescriptor::new("sendrawtransaction", none)
            .field(F::required("hex_tx", K::String))
            .field(F::optional_defaulted("allow_high_fees", K::Bool, json!(false))),
    )?;
    registry.register::<SetGenerateCmd>(
        CommandDescriptor::new("setgenerate", none)
            .field(F::required("generate", K::Bool))
            .field(F::optional_defaulted("gen_proc_limit", K::Int, json!(-1))),
    )?;
    registry.register::<StopCmd>(CommandDescriptor::new("stop", none))?;
    registry.register::<SubmitBlockCmd>(
        CommandDescriptor::new("submitblock", none)
            .field(F::required("hex_block", K::String))
            .field(F::optional("options", K::Object)),
    )?;
    registry.register::<ValidateAddressCmd>(
        CommandDescriptor::new("validateaddress", none).field(F::required("address", K::String)),
    )?;
    registry.register::<VerifyChainCmd>(
        CommandDescriptor::new("verifychain", none)
            .field(F::optional_defaulted("check_level", K::Int, json!(3)))
            .field(F::optional_defaulted("check_depth", K::Int, json!(288))),
    )?;
    registry.register::<VerifyMessageCmd>(
        CommandDescriptor::new("verifymessage", none)
            .field(F::required("address", K::String))
            .field(F::required("signature", K::String))
            .field(F::required("message", K::String)),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{TemplateLimit, TemplateRequest};

    #[test]
    fn template_limits_take_sizes_or_toggles() {
        let parsed: TemplateRequest =
            serde_json::from_str(r#"{"sigoplimit":500,"sizelimit":true}"#).expect("parse");
        assert_eq!(parsed.sig_op_limit, Some(TemplateLimit::Size(500)));
        assert_eq!(parsed.size_limit, Some(TemplateLimit::Enabled(true)));
    }

    #[test]
    fn template_request_rejects_malformed_fields() {
        assert!(serde_json::from_str::<TemplateRequest>(r#"{"mode":1}"#).is_err());
        assert!(serde_json::from_str::<TemplateRequest>(r#"{"sigoplimit":"invalid"}"#).is_err());
        assert!(serde_json::from_str::<TemplateRequest>(r#"{"sizelimit":"invalid"}"#).is_err());
    }
}
