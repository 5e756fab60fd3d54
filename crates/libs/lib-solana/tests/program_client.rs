//! GifProgramClient against a scripted RPC node and an in-process wallet.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use lib_core::{Invocation, PortalError, ProgramClient, WalletProvider};
use lib_solana::program::transaction_builder::{deserialize_transaction, serialize_transaction};
use lib_solana::{BaseAccount, GifProgramClient, ProgramConfig, Result, RpcTransport};
use serde_json::{json, Value};
use shared::dto::portal::{Cluster, GifItem};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

const IDL: &str = include_str!("../../../../portal-web/assets/idl.json");
const KEYPAIR: &str = include_str!("../../../../portal-web/assets/keypair.json");
const BASE_ACCOUNT: &str = "6PdwcpYRG8WgfMTz5xmnfHm7KdVD88VLKA2xQvUedicK";
const PROGRAM_ID: &str = "Bmn5Pp6urCR5S9kZc9QBthdCiHUb6tvVsaTt85874Znk";
const BLOCKHASH: &str = "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N";

/// Answers by method name; signature statuses are served from a queue.
#[derive(Default)]
struct ScriptedNode {
    account: Option<Value>,
    statuses: RefCell<VecDeque<Value>>,
    rpc_error: Option<Value>,
    methods: RefCell<Vec<String>>,
    sent: RefCell<Vec<Vec<u8>>>,
    pauses: RefCell<u32>,
}

impl ScriptedNode {
    fn with_account(data: Vec<u8>, owner: &str) -> Self {
        Self {
            account: Some(json!({
                "data": [general_purpose::STANDARD.encode(data), "base64"],
                "executable": false,
                "lamports": 63_500_000,
                "owner": owner,
                "rentEpoch": 0,
                "space": 9000
            })),
            ..Default::default()
        }
    }

    fn push_status(&self, status: Value) {
        self.statuses.borrow_mut().push_back(status);
    }

    fn methods(&self) -> Vec<String> {
        self.methods.borrow().clone()
    }

    fn ok(result: Value) -> String {
        json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string()
    }

    fn with_context(value: Value) -> Value {
        json!({ "context": { "slot": 42 }, "value": value })
    }
}

#[async_trait(?Send)]
impl<'a> RpcTransport for &'a ScriptedNode {
    async fn post(&self, url: &str, body: String) -> Result<String> {
        assert_eq!(url, "https://api.devnet.solana.com");
        let request: Value = serde_json::from_str(&body).unwrap();
        let method = request["method"].as_str().unwrap().to_string();
        self.methods.borrow_mut().push(method.clone());

        if let Some(error) = &self.rpc_error {
            return Ok(json!({ "jsonrpc": "2.0", "id": 1, "error": error }).to_string());
        }

        let reply = match method.as_str() {
            "getAccountInfo" => ScriptedNode::ok(ScriptedNode::with_context(
                self.account.clone().unwrap_or(Value::Null),
            )),
            "getLatestBlockhash" => ScriptedNode::ok(ScriptedNode::with_context(json!({
                "blockhash": BLOCKHASH,
                "lastValidBlockHeight": 100
            }))),
            "sendTransaction" => {
                let encoded = request["params"][0].as_str().unwrap();
                let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
                let tx = deserialize_transaction(&bytes).unwrap();
                self.sent.borrow_mut().push(bytes);
                ScriptedNode::ok(json!(tx.signatures[0].to_string()))
            }
            "getSignatureStatuses" => {
                let status = self.statuses.borrow_mut().pop_front().unwrap_or(Value::Null);
                ScriptedNode::ok(ScriptedNode::with_context(json!([status])))
            }
            other => panic!("unexpected method {}", other),
        };
        Ok(reply)
    }

    async fn pause(&self, _millis: u32) {
        *self.pauses.borrow_mut() += 1;
    }
}

struct KeypairWallet {
    keypair: Keypair,
    reject: bool,
}

impl KeypairWallet {
    fn new() -> Self {
        Self {
            keypair: Keypair::new(),
            reject: false,
        }
    }

    fn address(&self) -> String {
        self.keypair.pubkey().to_string()
    }
}

#[async_trait(?Send)]
impl<'a> WalletProvider for &'a KeypairWallet {
    fn is_available(&self) -> bool {
        true
    }

    fn is_recognized_kind(&self) -> bool {
        true
    }

    async fn connect(&self, _trusted_only: bool) -> lib_core::Result<String> {
        Ok(self.address())
    }

    async fn sign_transaction(&self, transaction: Vec<u8>) -> lib_core::Result<Vec<u8>> {
        if self.reject {
            return Err(PortalError::Authorization("User rejected the request.".to_string()));
        }
        let mut tx = deserialize_transaction(&transaction).unwrap();
        let blockhash = tx.message.recent_blockhash;
        tx.partial_sign(&[&self.keypair], blockhash);
        Ok(serialize_transaction(&tx).unwrap())
    }
}

fn config() -> ProgramConfig {
    ProgramConfig::from_bundle(IDL, KEYPAIR, Cluster::Devnet)
        .unwrap()
        .with_confirmation(3, 1)
}

fn confirmed() -> Value {
    json!({ "slot": 43, "confirmations": 0, "err": null, "confirmationStatus": "processed" })
}

fn stored_account(user: &str) -> Vec<u8> {
    let mut data = BaseAccount {
        total_gifs: 1,
        gif_list: vec![GifItem::new("http://x/y.gif", user)],
        user_address: Pubkey::default(),
    }
    .encode()
    .unwrap();
    data.resize(9000, 0);
    data
}

#[tokio::test]
async fn test_fetch_missing_account_is_none() {
    let node = ScriptedNode::default();
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    assert_eq!(client.fetch_account(BASE_ACCOUNT).await.unwrap(), None);
    assert_eq!(node.methods(), ["getAccountInfo"]);
}

#[tokio::test]
async fn test_fetch_decodes_items() {
    let wallet = KeypairWallet::new();
    let node = ScriptedNode::with_account(stored_account(&wallet.address()), PROGRAM_ID);
    let client = GifProgramClient::new(config(), &node, &wallet);

    let items = client.fetch_account(BASE_ACCOUNT).await.unwrap().unwrap();
    assert_eq!(items, vec![GifItem::new("http://x/y.gif", wallet.address())]);
}

#[tokio::test]
async fn test_fetch_rejects_foreign_owner() {
    let wallet = KeypairWallet::new();
    let node = ScriptedNode::with_account(
        stored_account(&wallet.address()),
        "11111111111111111111111111111111",
    );
    let client = GifProgramClient::new(config(), &node, &wallet);

    let err = client.fetch_account(BASE_ACCOUNT).await.unwrap_err();
    assert_eq!(err.kind(), "Fetch");
}

#[tokio::test]
async fn test_fetch_rpc_error_is_fetch_error() {
    let node = ScriptedNode {
        rpc_error: Some(json!({ "code": -32005, "message": "Node is behind" })),
        ..Default::default()
    };
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    let err = client.fetch_account(BASE_ACCOUNT).await.unwrap_err();
    assert!(matches!(err, PortalError::Fetch(msg) if msg.contains("Node is behind")));
}

#[tokio::test]
async fn test_add_gif_round_trip() {
    let node = ScriptedNode::default();
    node.push_status(Value::Null);
    node.push_status(confirmed());
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    let signature = client
        .invoke(Invocation::add_gif(BASE_ACCOUNT, &wallet.address(), "http://x/y.gif"))
        .await
        .unwrap();

    assert_eq!(
        node.methods(),
        [
            "getLatestBlockhash",
            "sendTransaction",
            "getSignatureStatuses",
            "getSignatureStatuses"
        ]
    );
    assert_eq!(*node.pauses.borrow(), 1);

    let sent = deserialize_transaction(&node.sent.borrow()[0]).unwrap();
    assert!(sent.is_signed());
    assert_eq!(sent.signatures.len(), 1);
    assert_eq!(sent.signatures[0].to_string(), signature);
    assert_eq!(sent.message.account_keys[0].to_string(), wallet.address());
}

#[tokio::test]
async fn test_start_stuff_off_is_co_signed_by_base_account() {
    let node = ScriptedNode::default();
    node.push_status(confirmed());
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    client
        .invoke(Invocation::start_stuff_off(BASE_ACCOUNT, &wallet.address()))
        .await
        .unwrap();

    let sent = deserialize_transaction(&node.sent.borrow()[0]).unwrap();
    assert_eq!(sent.signatures.len(), 2);
    assert!(sent.is_signed());
    assert!(sent
        .message
        .account_keys
        .iter()
        .any(|k| k.to_string() == BASE_ACCOUNT));
}

#[tokio::test]
async fn test_wallet_rejection_sends_nothing() {
    let node = ScriptedNode::default();
    let wallet = KeypairWallet {
        reject: true,
        ..KeypairWallet::new()
    };
    let client = GifProgramClient::new(config(), &node, &wallet);

    let err = client
        .invoke(Invocation::add_gif(BASE_ACCOUNT, &wallet.address(), "http://x/y.gif"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "Authorization");
    assert_eq!(node.methods(), ["getLatestBlockhash"]);
    assert!(node.sent.borrow().is_empty());
}

#[tokio::test]
async fn test_failed_transaction_is_remote_call_error() {
    let node = ScriptedNode::default();
    node.push_status(json!({
        "slot": 43,
        "confirmations": 0,
        "err": { "InstructionError": [0, { "Custom": 3012 }] },
        "confirmationStatus": "processed"
    }));
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    let err = client
        .invoke(Invocation::add_gif(BASE_ACCOUNT, &wallet.address(), "http://x/y.gif"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "RemoteCall");
}

#[tokio::test]
async fn test_unconfirmed_after_attempts() {
    let node = ScriptedNode::default();
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    let user = wallet.address();
    let err = client
        .invoke(Invocation::add_gif(BASE_ACCOUNT, &user, "http://x/y.gif"))
        .await
        .unwrap_err();

    assert!(matches!(err, PortalError::RemoteCall(msg) if msg.contains("not confirmed")));
    assert_eq!(*node.pauses.borrow(), 3);
}

#[tokio::test]
async fn test_base_account_mismatch_is_rejected_before_rpc() {
    let node = ScriptedNode::default();
    let wallet = KeypairWallet::new();
    let client = GifProgramClient::new(config(), &node, &wallet);

    let other = Keypair::new().pubkey().to_string();
    let err = client
        .invoke(Invocation::start_stuff_off(&other, &wallet.address()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "Config");
    assert!(node.methods().is_empty());
}
