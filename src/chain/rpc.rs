//! Ethereum JSON-RPC 2.0 client over HTTP.
//!
//! Connect and request timeouts are always applied; the public RPC
//! endpoints this tool probes can otherwise hang indefinitely.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ChainClient, ChainError, Connector};

/// Timeouts applied to every chain client this connector builds.
#[derive(Debug, Clone, Copy)]
pub struct RpcTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for RpcTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            request: Duration::from_secs(30),
        }
    }
}

/// Connector producing [`HttpChainClient`]s.
pub struct HttpConnector {
    timeouts: RpcTimeouts,
}

impl HttpConnector {
    pub fn new(timeouts: RpcTimeouts) -> Self {
        Self { timeouts }
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn connect(&self, url: &str) -> Result<Box<dyn ChainClient>, ChainError> {
        let client = HttpChainClient::new(url, self.timeouts)?;
        Ok(Box::new(client))
    }
}

/// JSON-RPC 2.0 chain client bound to a single endpoint URL.
pub struct HttpChainClient {
    http: reqwest::Client,
    url: String,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

impl HttpChainClient {
    pub fn new(url: &str, timeouts: RpcTimeouts) -> Result<Self, ChainError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, ChainError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::HttpStatus(status.as_u16()));
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;

        if let Some(err) = parsed.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        parsed
            .result
            .ok_or_else(|| ChainError::Transport("response had neither result nor error".into()))
    }
}

#[async_trait]
impl ChainClient for HttpChainClient {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        let result = self.call("eth_chainId", json!([])).await?;
        parse_quantity_u64(&result)
    }

    async fn block_number(&self) -> Result<u64, ChainError> {
        let result = self.call("eth_blockNumber", json!([])).await?;
        parse_quantity_u64(&result)
    }

    async fn get_balance(&self, address: &str) -> Result<u128, ChainError> {
        let result = self.call("eth_getBalance", json!([address, "latest"])).await?;
        parse_quantity_u128(&result)
    }
}

/// Parse a JSON-RPC hex quantity (e.g. `"0x1a4"`) into an integer.
fn parse_quantity_u128(value: &Value) -> Result<u128, ChainError> {
    let s = value
        .as_str()
        .ok_or_else(|| ChainError::MalformedQuantity(value.to_string()))?;
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| ChainError::MalformedQuantity(s.to_string()))?;
    if digits.is_empty() {
        return Err(ChainError::MalformedQuantity(s.to_string()));
    }
    u128::from_str_radix(digits, 16).map_err(|_| ChainError::MalformedQuantity(s.to_string()))
}

fn parse_quantity_u64(value: &Value) -> Result<u64, ChainError> {
    let quantity = parse_quantity_u128(value)?;
    u64::try_from(quantity).map_err(|_| ChainError::MalformedQuantity(quantity.to_string()))
}
