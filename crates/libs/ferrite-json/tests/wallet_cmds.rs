//! Wire fixtures for every wallet server command.

mod common;

use std::collections::BTreeMap;

use serde_json::json;

use common::assert_cmd;
use ferrite_json::cmds::chain::TransactionInput;
use ferrite_json::cmds::wallet::*;
use ferrite_json::Registry;

fn registry() -> Registry {
    Registry::with_builtin_commands().expect("builtin registration")
}

#[test]
fn account_cmds() {
    let registry = registry();

    assert_cmd(
        &registry,
        &[json!("acct")],
        CreateNewAccountCmd {
            account: "acct".to_owned(),
            account_type: None,
        },
        r#"{"jsonrpc":"1.0","method":"createnewaccount","params":["acct"],"id":1}"#,
        CreateNewAccountCmd {
            account: "acct".to_owned(),
            account_type: Some(0),
        },
    );
    assert_cmd(
        &registry,
        &[json!("oldacct"), json!("newacct")],
        RenameAccountCmd {
            old_account: "oldacct".to_owned(),
            new_account: "newacct".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"renameaccount","params":["oldacct","newacct"],"id":1}"#,
        RenameAccountCmd {
            old_account: "oldacct".to_owned(),
            new_account: "newacct".to_owned(),
        },
    );
    assert_cmd(
        &registry,
        &[json!("1Address")],
        GetAccountCmd {
            address: "1Address".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"getaccount","params":["1Address"],"id":1}"#,
        GetAccountCmd {
            address: "1Address".to_owned(),
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct")],
        GetAccountAddressCmd {
            account: "acct".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"getaccountaddress","params":["acct"],"id":1}"#,
        GetAccountAddressCmd {
            account: "acct".to_owned(),
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct")],
        GetAddressesByAccountCmd {
            account: "acct".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"getaddressesbyaccount","params":["acct"],"id":1}"#,
        GetAddressesByAccountCmd {
            account: "acct".to_owned(),
        },
    );

    assert_cmd(
        &registry,
        &[],
        GetNewAddressCmd {
            account: None,
            gap_policy: None,
        },
        r#"{"jsonrpc":"1.0","method":"getnewaddress","params":[],"id":1}"#,
        GetNewAddressCmd {
            account: None,
            gap_policy: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct"), json!("ignore")],
        GetNewAddressCmd {
            account: Some("acct".to_owned()),
            gap_policy: Some("ignore".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"getnewaddress","params":["acct","ignore"],"id":1}"#,
        GetNewAddressCmd {
            account: Some("acct".to_owned()),
            gap_policy: Some("ignore".to_owned()),
        },
    );
    assert_cmd(
        &registry,
        &[],
        GetRawChangeAddressCmd { account: None },
        r#"{"jsonrpc":"1.0","method":"getrawchangeaddress","params":[],"id":1}"#,
        GetRawChangeAddressCmd { account: None },
    );
    assert_cmd(
        &registry,
        &[json!("acct")],
        GetRawChangeAddressCmd {
            account: Some("acct".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"getrawchangeaddress","params":["acct"],"id":1}"#,
        GetRawChangeAddressCmd {
            account: Some("acct".to_owned()),
        },
    );
}

#[test]
fn balance_cmds() {
    let registry = registry();

    assert_cmd(
        &registry,
        &[],
        GetBalanceCmd {
            account: None,
            min_conf: None,
        },
        r#"{"jsonrpc":"1.0","method":"getbalance","params":[],"id":1}"#,
        GetBalanceCmd {
            account: None,
            min_conf: Some(1),
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct")],
        GetBalanceCmd {
            account: Some("acct".to_owned()),
            min_conf: None,
        },
        r#"{"jsonrpc":"1.0","method":"getbalance","params":["acct"],"id":1}"#,
        GetBalanceCmd {
            account: Some("acct".to_owned()),
            min_conf: Some(1),
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct"), json!(6)],
        GetBalanceCmd {
            account: Some("acct".to_owned()),
            min_conf: Some(6),
        },
        r#"{"jsonrpc":"1.0","method":"getbalance","params":["acct",6],"id":1}"#,
        GetBalanceCmd {
            account: Some("acct".to_owned()),
            min_conf: Some(6),
        },
    );

    assert_cmd(
        &registry,
        &[json!("acct")],
        GetReceivedByAccountCmd {
            account: "acct".to_owned(),
            min_conf: None,
        },
        r#"{"jsonrpc":"1.0","method":"getreceivedbyaccount","params":["acct"],"id":1}"#,
        GetReceivedByAccountCmd {
            account: "acct".to_owned(),
            min_conf: Some(1),
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct"), json!(6)],
        GetReceivedByAccountCmd {
            account: "acct".to_owned(),
            min_conf: Some(6),
        },
        r#"{"jsonrpc":"1.0","method":"getreceivedbyaccount","params":["acct",6],"id":1}"#,
        GetReceivedByAccountCmd {
            account: "acct".to_owned(),
            min_conf: Some(6),
        },
    );
    assert_cmd(
        &registry,
        &[json!("1Address")],
        GetReceivedByAddressCmd {
            address: "1Address".to_owned(),
            min_conf: None,
        },
        r#"{"jsonrpc":"1.0","method":"getreceivedbyaddress","params":["1Address"],"id":1}"#,
        GetReceivedByAddressCmd {
            address: "1Address".to_owned(),
            min_conf: Some(1),
        },
    );
    assert_cmd(
        &registry,
        &[json!("1Address"), json!(6)],
        GetReceivedByAddressCmd {
            address: "1Address".to_owned(),
            min_conf: Some(6),
        },
        r#"{"jsonrpc":"1.0","method":"getreceivedbyaddress","params":["1Address",6],"id":1}"#,
        GetReceivedByAddressCmd {
            address: "1Address".to_owned(),
            min_conf: Some(6),
        },
    );
}

#[test]
fn listing_cmds() {
    let registry = registry();

    check_no_params!(registry, ListLockUnspentCmd, "listlockunspent");

    assert_cmd(
        &registry,
        &[],
        ListAccountsCmd { min_conf: None },
        r#"{"jsonrpc":"1.0","method":"listaccounts","params":[],"id":1}"#,
        ListAccountsCmd { min_conf: Some(1) },
    );
    assert_cmd(
        &registry,
        &[json!(6)],
        ListAccountsCmd { min_conf: Some(6) },
        r#"{"jsonrpc":"1.0","method":"listaccounts","params":[6],"id":1}"#,
        ListAccountsCmd { min_conf: Some(6) },
    );

    assert_cmd(
        &registry,
        &[],
        ListReceivedByAccountCmd {
            min_conf: None,
            include_empty: None,
            include_watch_only: None,
        },
        r#"{"jsonrpc":"1.0","method":"listreceivedbyaccount","params":[],"id":1}"#,
        ListReceivedByAccountCmd {
            min_conf: Some(1),
            include_empty: Some(false),
            include_watch_only: Some(false),
        },
    );
    // Trailing false equals the default and drops off the wire.
    assert_cmd(
        &registry,
        &[json!(6), json!(true), json!(false)],
        ListReceivedByAccountCmd {
            min_conf: Some(6),
            include_empty: Some(true),
            include_watch_only: Some(false),
        },
        r#"{"jsonrpc":"1.0","method":"listreceivedbyaccount","params":[6,true],"id":1}"#,
        ListReceivedByAccountCmd {
            min_conf: Some(6),
            include_empty: Some(true),
            include_watch_only: Some(false),
        },
    );
    assert_cmd(
        &registry,
        &[json!(6), json!(true), json!(false)],
        ListReceivedByAddressCmd {
            min_conf: Some(6),
            include_empty: Some(true),
            include_watch_only: Some(false),
        },
        r#"{"jsonrpc":"1.0","method":"listreceivedbyaddress","params":[6,true],"id":1}"#,
        ListReceivedByAddressCmd {
            min_conf: Some(6),
            include_empty: Some(true),
            include_watch_only: Some(false),
        },
    );

    assert_cmd(
        &registry,
        &[],
        ListSinceBlockCmd {
            block_hash: None,
            target_confirmations: None,
            include_watch_only: None,
        },
        r#"{"jsonrpc":"1.0","method":"listsinceblock","params":[],"id":1}"#,
        ListSinceBlockCmd {
            block_hash: None,
            target_confirmations: Some(1),
            include_watch_only: Some(false),
        },
    );
    assert_cmd(
        &registry,
        &[json!("123"), json!(6), json!(true)],
        ListSinceBlockCmd {
            block_hash: Some("123".to_owned()),
            target_confirmations: Some(6),
            include_watch_only: Some(true),
        },
        r#"{"jsonrpc":"1.0","method":"listsinceblock","params":["123",6,true],"id":1}"#,
        ListSinceBlockCmd {
            block_hash: Some("123".to_owned()),
            target_confirmations: Some(6),
            include_watch_only: Some(true),
        },
    );

    assert_cmd(
        &registry,
        &[],
        ListTransactionsCmd {
            account: None,
            count: None,
            from: None,
            include_watch_only: None,
        },
        r#"{"jsonrpc":"1.0","method":"listtransactions","params":[],"id":1}"#,
        ListTransactionsCmd {
            account: None,
            count: Some(10),
            from: Some(0),
            include_watch_only: Some(false),
        },
    );
    assert_cmd(
        &registry,
        &[json!("acct"), json!(20), json!(1), json!(true)],
        ListTransactionsCmd {
            account: Some("acct".to_owned()),
            count: Some(20),
            from: Some(1),
            include_watch_only: Some(true),
        },
        r#"{"jsonrpc":"1.0","method":"listtransactions","params":["acct",20,1,true],"id":1}"#,
        ListTransactionsCmd {
            account: Some("acct".to_owned()),
            count: Some(20),
            from: Some(1),
            include_watch_only: Some(true),
        },
    );

    assert_cmd(
        &registry,
        &[],
        ListUnspentCmd {
            min_conf: None,
            max_conf: None,
            addresses: None,
        },
        r#"{"jsonrpc":"1.0","method":"listunspent","params":[],"id":1}"#,
        ListUnspentCmd {
            min_conf: Some(1),
            max_conf: Some(9999999),
            addresses: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!(6), json!(100), json!(["1Address", "1Address2"])],
        ListUnspentCmd {
            min_conf: Some(6),
            max_conf: Some(100),
            addresses: Some(vec!["1Address".to_owned(), "1Address2".to_owned()]),
        },
        r#"{"jsonrpc":"1.0","method":"listunspent","params":[6,100,["1Address","1Address2"]],"id":1}"#,
        ListUnspentCmd {
            min_conf: Some(6),
            max_conf: Some(100),
            addresses: Some(vec!["1Address".to_owned(), "1Address2".to_owned()]),
        },
    );

    assert_cmd(
        &registry,
        &[json!("123")],
        GetTransactionCmd {
            txid: "123".to_owned(),
            include_watch_only: None,
        },
        r#"{"jsonrpc":"1.0","method":"gettransaction","params":["123"],"id":1}"#,
        GetTransactionCmd {
            txid: "123".to_owned(),
            include_watch_only: Some(false),
        },
    );
    assert_cmd(
        &registry,
        &[json!("123"), json!(true)],
        GetTransactionCmd {
            txid: "123".to_owned(),
            include_watch_only: Some(true),
        },
        r#"{"jsonrpc":"1.0","method":"gettransaction","params":["123",true],"id":1}"#,
        GetTransactionCmd {
            txid: "123".to_owned(),
            include_watch_only: Some(true),
        },
    );
}

#[test]
fn key_cmds() {
    let registry = registry();

    assert_cmd(
        &registry,
        &[json!(2), json!(["031234", "035678"])],
        AddMultisigAddressCmd {
            n_required: 2,
            keys: vec!["031234".to_owned(), "035678".to_owned()],
            account: None,
        },
        r#"{"jsonrpc":"1.0","method":"addmultisigaddress","params":[2,["031234","035678"]],"id":1}"#,
        AddMultisigAddressCmd {
            n_required: 2,
            keys: vec!["031234".to_owned(), "035678".to_owned()],
            account: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!(2), json!(["031234", "035678"]), json!("test")],
        AddMultisigAddressCmd {
            n_required: 2,
            keys: vec!["031234".to_owned(), "035678".to_owned()],
            account: Some("test".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"addmultisigaddress","params":[2,["031234","035678"],"test"],"id":1}"#,
        AddMultisigAddressCmd {
            n_required: 2,
            keys: vec!["031234".to_owned(), "035678".to_owned()],
            account: Some("test".to_owned()),
        },
    );
    assert_cmd(
        &registry,
        &[json!(2), json!(["031234", "035678"])],
        CreateMultisigCmd {
            n_required: 2,
            keys: vec!["031234".to_owned(), "035678".to_owned()],
        },
        r#"{"jsonrpc":"1.0","method":"createmultisig","params":[2,["031234","035678"]],"id":1}"#,
        CreateMultisigCmd {
            n_required: 2,
            keys: vec!["031234".to_owned(), "035678".to_owned()],
        },
    );

    assert_cmd(
        &registry,
        &[json!("1Address")],
        DumpPrivKeyCmd {
            address: "1Address".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"dumpprivkey","params":["1Address"],"id":1}"#,
        DumpPrivKeyCmd {
            address: "1Address".to_owned(),
        },
    );

    assert_cmd(
        &registry,
        &[json!("1Address")],
        ImportAddressCmd {
            address: "1Address".to_owned(),
            rescan: None,
        },
        r#"{"jsonrpc":"1.0","method":"importaddress","params":["1Address"],"id":1}"#,
        ImportAddressCmd {
            address: "1Address".to_owned(),
            rescan: Some(true),
        },
    );
    assert_cmd(
        &registry,
        &[json!("1Address"), json!(false)],
        ImportAddressCmd {
            address: "1Address".to_owned(),
            rescan: Some(false),
        },
        r#"{"jsonrpc":"1.0","method":"importaddress","params":["1Address",false],"id":1}"#,
        ImportAddressCmd {
            address: "1Address".to_owned(),
            rescan: Some(false),
        },
    );

    assert_cmd(
        &registry,
        &[json!("abc")],
        ImportPrivKeyCmd {
            priv_key: "abc".to_owned(),
            label: None,
            rescan: None,
            scan_from: None,
        },
        r#"{"jsonrpc":"1.0","method":"importprivkey","params":["abc"],"id":1}"#,
        ImportPrivKeyCmd {
            priv_key: "abc".to_owned(),
            label: None,
            rescan: Some(true),
            scan_from: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!("abc"), json!("label"), json!(false), json!(12345)],
        ImportPrivKeyCmd {
            priv_key: "abc".to_owned(),
            label: Some("label".to_owned()),
            rescan: Some(false),
            scan_from: Some(12345),
        },
        r#"{"jsonrpc":"1.0","method":"importprivkey","params":["abc","label",false,12345],"id":1}"#,
        ImportPrivKeyCmd {
            priv_key: "abc".to_owned(),
            label: Some("label".to_owned()),
            rescan: Some(false),
            scan_from: Some(12345),
        },
    );

    assert_cmd(
        &registry,
        &[json!("031234")],
        ImportPubKeyCmd {
            pub_key: "031234".to_owned(),
            rescan: None,
        },
        r#"{"jsonrpc":"1.0","method":"importpubkey","params":["031234"],"id":1}"#,
        ImportPubKeyCmd {
            pub_key: "031234".to_owned(),
            rescan: Some(true),
        },
    );
    assert_cmd(
        &registry,
        &[json!("031234"), json!(false)],
        ImportPubKeyCmd {
            pub_key: "031234".to_owned(),
            rescan: Some(false),
        },
        r#"{"jsonrpc":"1.0","method":"importpubkey","params":["031234",false],"id":1}"#,
        ImportPubKeyCmd {
            pub_key: "031234".to_owned(),
            rescan: Some(false),
        },
    );

    assert_cmd(
        &registry,
        &[],
        KeyPoolRefillCmd { new_size: None },
        r#"{"jsonrpc":"1.0","method":"keypoolrefill","params":[],"id":1}"#,
        KeyPoolRefillCmd {
            new_size: Some(100),
        },
    );
    assert_cmd(
        &registry,
        &[json!(200)],
        KeyPoolRefillCmd {
            new_size: Some(200),
        },
        r#"{"jsonrpc":"1.0","method":"keypoolrefill","params":[200],"id":1}"#,
        KeyPoolRefillCmd {
            new_size: Some(200),
        },
    );

    assert_cmd(
        &registry,
        &[json!("abc")],
        VerifySeedCmd {
            seed: "abc".to_owned(),
            account: None,
        },
        r#"{"jsonrpc":"1.0","method":"verifyseed","params":["abc"],"id":1}"#,
        VerifySeedCmd {
            seed: "abc".to_owned(),
            account: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!("abc"), json!(5)],
        VerifySeedCmd {
            seed: "abc".to_owned(),
            account: Some(5),
        },
        r#"{"jsonrpc":"1.0","method":"verifyseed","params":["abc",5],"id":1}"#,
        VerifySeedCmd {
            seed: "abc".to_owned(),
            account: Some(5),
        },
    );
}

#[test]
fn spend_cmds() {
    let registry = registry();

    assert_cmd(
        &registry,
        &[json!("from"), json!("1Address"), json!(0.5)],
        SendFromCmd {
            from_account: "from".to_owned(),
            to_address: "1Address".to_owned(),
            amount: 0.5,
            min_conf: None,
            comment: None,
            comment_to: None,
        },
        r#"{"jsonrpc":"1.0","method":"sendfrom","params":["from","1Address",0.5],"id":1}"#,
        SendFromCmd {
            from_account: "from".to_owned(),
            to_address: "1Address".to_owned(),
            amount: 0.5,
            min_conf: Some(1),
            comment: None,
            comment_to: None,
        },
    );
    assert_cmd(
        &registry,
        &[
            json!("from"),
            json!("1Address"),
            json!(0.5),
            json!(6),
            json!("comment"),
            json!("commentto"),
        ],
        SendFromCmd {
            from_account: "from".to_owned(),
            to_address: "1Address".to_owned(),
            amount: 0.5,
            min_conf: Some(6),
            comment: Some("comment".to_owned()),
            comment_to: Some("commentto".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"sendfrom","params":["from","1Address",0.5,6,"comment","commentto"],"id":1}"#,
        SendFromCmd {
            from_account: "from".to_owned(),
            to_address: "1Address".to_owned(),
            amount: 0.5,
            min_conf: Some(6),
            comment: Some("comment".to_owned()),
            comment_to: Some("commentto".to_owned()),
        },
    );

    let amounts = BTreeMap::from([("1Address".to_owned(), 0.5)]);
    assert_cmd(
        &registry,
        &[json!("from"), json!(r#"{"1Address":0.5}"#)],
        SendManyCmd {
            from_account: "from".to_owned(),
            amounts: amounts.clone(),
            min_conf: None,
            comment: None,
        },
        r#"{"jsonrpc":"1.0","method":"sendmany","params":["from",{"1Address":0.5}],"id":1}"#,
        SendManyCmd {
            from_account: "from".to_owned(),
            amounts: amounts.clone(),
            min_conf: Some(1),
            comment: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!("from"), json!(r#"{"1Address":0.5}"#), json!(6), json!("comment")],
        SendManyCmd {
            from_account: "from".to_owned(),
            amounts: amounts.clone(),
            min_conf: Some(6),
            comment: Some("comment".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"sendmany","params":["from",{"1Address":0.5},6,"comment"],"id":1}"#,
        SendManyCmd {
            from_account: "from".to_owned(),
            amounts,
            min_conf: Some(6),
            comment: Some("comment".to_owned()),
        },
    );

    assert_cmd(
        &registry,
        &[json!("1Address"), json!(0.5)],
        SendToAddressCmd {
            address: "1Address".to_owned(),
            amount: 0.5,
            comment: None,
            comment_to: None,
        },
        r#"{"jsonrpc":"1.0","method":"sendtoaddress","params":["1Address",0.5],"id":1}"#,
        SendToAddressCmd {
            address: "1Address".to_owned(),
            amount: 0.5,
            comment: None,
            comment_to: None,
        },
    );
    assert_cmd(
        &registry,
        &[json!("1Address"), json!(0.5), json!("comment"), json!("commentto")],
        SendToAddressCmd {
            address: "1Address".to_owned(),
            amount: 0.5,
            comment: Some("comment".to_owned()),
            comment_to: Some("commentto".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"sendtoaddress","params":["1Address",0.5,"comment","commentto"],"id":1}"#,
        SendToAddressCmd {
            address: "1Address".to_owned(),
            amount: 0.5,
            comment: Some("comment".to_owned()),
            comment_to: Some("commentto".to_owned()),
        },
    );

    assert_cmd(
        &registry,
        &[json!(0.0001)],
        SetTxFeeCmd { amount: 0.0001 },
        r#"{"jsonrpc":"1.0","method":"settxfee","params":[0.0001],"id":1}"#,
        SetTxFeeCmd { amount: 0.0001 },
    );

    assert_cmd(
        &registry,
        &[
            json!("default"),
            json!("DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu"),
            json!(6),
            json!(0.05),
        ],
        SweepAccountCmd {
            source_account: "default".to_owned(),
            destination_address: "DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu".to_owned(),
            required_confirmations: Some(6),
            fee_per_kb: Some(0.05),
        },
        r#"{"jsonrpc":"1.0","method":"sweepaccount","params":["default","DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu",6,0.05],"id":1}"#,
        SweepAccountCmd {
            source_account: "default".to_owned(),
            destination_address: "DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu".to_owned(),
            required_confirmations: Some(6),
            fee_per_kb: Some(0.05),
        },
    );
    assert_cmd(
        &registry,
        &[json!("default"), json!("DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu")],
        SweepAccountCmd {
            source_account: "default".to_owned(),
            destination_address: "DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu".to_owned(),
            required_confirmations: None,
            fee_per_kb: None,
        },
        r#"{"jsonrpc":"1.0","method":"sweepaccount","params":["default","DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu"],"id":1}"#,
        SweepAccountCmd {
            source_account: "default".to_owned(),
            destination_address: "DsUZxxoHJSty8DCfwfartwTYbuhmVct7tJu".to_owned(),
            required_confirmations: None,
            fee_per_kb: None,
        },
    );

    assert_cmd(
        &registry,
        &[json!(6)],
        EstimateFeeCmd { num_blocks: 6 },
        r#"{"jsonrpc":"1.0","method":"estimatefee","params":[6],"id":1}"#,
        EstimateFeeCmd { num_blocks: 6 },
    );
    assert_cmd(
        &registry,
        &[json!(6)],
        EstimatePriorityCmd { num_blocks: 6 },
        r#"{"jsonrpc":"1.0","method":"estimatepriority","params":[6],"id":1}"#,
        EstimatePriorityCmd { num_blocks: 6 },
    );
}

#[test]
fn signing_and_lock_cmds() {
    let registry = registry();

    check_no_params!(registry, WalletLockCmd, "walletlock");

    assert_cmd(
        &registry,
        &[json!("1Address"), json!("message")],
        SignMessageCmd {
            address: "1Address".to_owned(),
            message: "message".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"signmessage","params":["1Address","message"],"id":1}"#,
        SignMessageCmd {
            address: "1Address".to_owned(),
            message: "message".to_owned(),
        },
    );

    assert_cmd(
        &registry,
        &[json!("001122")],
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: None,
            priv_keys: None,
            flags: None,
        },
        r#"{"jsonrpc":"1.0","method":"signrawtransaction","params":["001122"],"id":1}"#,
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: None,
            priv_keys: None,
            flags: Some("ALL".to_owned()),
        },
    );
    let raw_inputs = vec![RawTxInput {
        txid: "123".to_owned(),
        vout: 1,
        tree: 0,
        script_pub_key: "00".to_owned(),
        redeem_script: "01".to_owned(),
    }];
    assert_cmd(
        &registry,
        &[
            json!("001122"),
            json!(
                r#"[{"txid":"123","vout":1,"tree":0,"scriptPubKey":"00","redeemScript":"01"}]"#
            ),
        ],
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: Some(raw_inputs.clone()),
            priv_keys: None,
            flags: None,
        },
        r#"{"jsonrpc":"1.0","method":"signrawtransaction","params":["001122",[{"txid":"123","vout":1,"tree":0,"scriptPubKey":"00","redeemScript":"01"}]],"id":1}"#,
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: Some(raw_inputs),
            priv_keys: None,
            flags: Some("ALL".to_owned()),
        },
    );
    assert_cmd(
        &registry,
        &[json!("001122"), json!("[]"), json!(r#"["abc"]"#)],
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: Some(Vec::new()),
            priv_keys: Some(vec!["abc".to_owned()]),
            flags: None,
        },
        r#"{"jsonrpc":"1.0","method":"signrawtransaction","params":["001122",[],["abc"]],"id":1}"#,
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: Some(Vec::new()),
            priv_keys: Some(vec!["abc".to_owned()]),
            flags: Some("ALL".to_owned()),
        },
    );
    // A trailing flags value equal to the default "ALL" is omitted.
    assert_cmd(
        &registry,
        &[json!("001122"), json!("[]"), json!("[]"), json!("ALL")],
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: Some(Vec::new()),
            priv_keys: Some(Vec::new()),
            flags: Some("ALL".to_owned()),
        },
        r#"{"jsonrpc":"1.0","method":"signrawtransaction","params":["001122",[],[]],"id":1}"#,
        SignRawTransactionCmd {
            raw_tx: "001122".to_owned(),
            inputs: Some(Vec::new()),
            priv_keys: Some(Vec::new()),
            flags: Some("ALL".to_owned()),
        },
    );

    assert_cmd(
        &registry,
        &[json!(true), json!(r#"[{"txid":"123","vout":1}]"#)],
        LockUnspentCmd {
            unlock: true,
            transactions: vec![TransactionInput {
                txid: "123".to_owned(),
                vout: 1,
                tree: 0,
            }],
        },
        r#"{"jsonrpc":"1.0","method":"lockunspent","params":[true,[{"txid":"123","vout":1,"tree":0}]],"id":1}"#,
        LockUnspentCmd {
            unlock: true,
            transactions: vec![TransactionInput {
                txid: "123".to_owned(),
                vout: 1,
                tree: 0,
            }],
        },
    );

    assert_cmd(
        &registry,
        &[json!("pass"), json!(60)],
        WalletPassphraseCmd {
            passphrase: "pass".to_owned(),
            timeout: 60,
        },
        r#"{"jsonrpc":"1.0","method":"walletpassphrase","params":["pass",60],"id":1}"#,
        WalletPassphraseCmd {
            passphrase: "pass".to_owned(),
            timeout: 60,
        },
    );
    assert_cmd(
        &registry,
        &[json!("old"), json!("new")],
        WalletPassphraseChangeCmd {
            old_passphrase: "old".to_owned(),
            new_passphrase: "new".to_owned(),
        },
        r#"{"jsonrpc":"1.0","method":"walletpassphrasechange","params":["old","new"],"id":1}"#,
        WalletPassphraseChangeCmd {
            old_passphrase: "old".to_owned(),
            new_passphrase: "new".to_owned(),
        },
    );
}
