//! HTTP client for the canister gateway.
//!
//! The gateway speaks JSON-RPC: POST a JSON object with an `"action"`
//! field, get back `"result"` or a structured `"error"` body.

use std::time::Duration;

use serde::Deserialize;

use ironclad_types::{
    Listing, ListingId, Principal, ReinvestPlan, SatAmount, Timestamp, Vault, VaultId,
};

use crate::error::{ClientError, Rejection, WireError};

/// HTTP client for the Ironclad Vault canister gateway.
///
/// Wraps `reqwest::Client` with the gateway's base URL and provides one
/// typed method per canister operation.
#[derive(Clone)]
pub struct CanisterClient {
    http: reqwest::Client,
    gateway_url: String,
}

/// Parameters for creating a new vault.
#[derive(Clone, Debug)]
pub struct CreateVaultParams {
    pub expected_deposit: SatAmount,
    pub lock_duration_secs: u64,
    pub beneficiary: Option<Principal>,
    /// Inactivity window for the dead-man-switch; the canister applies
    /// its default when omitted.
    pub inheritance_timeout_secs: Option<u64>,
}

/// Result of a successful withdrawal.
#[derive(Clone, Debug, Deserialize)]
pub struct WithdrawReceipt {
    pub vault: Vault,
    pub txid: String,
}

impl CanisterClient {
    /// Create a client targeting the given gateway base URL.
    pub fn new(gateway_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            gateway_url: gateway_url.into(),
        })
    }

    /// The configured gateway URL.
    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// Send a JSON-RPC request and return the `result` field.
    async fn rpc_call(
        &self,
        action: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        let mut body = params;
        body.as_object_mut()
            .ok_or_else(|| ClientError::Protocol("params must be a JSON object".into()))?
            .insert("action".to_string(), serde_json::json!(action));

        tracing::debug!(action, "canister call");

        let response = self
            .http
            .post(&self.gateway_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ClientError::Transport(format!(
                "gateway returned HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("invalid JSON response: {e}")))?;

        if let Some(err) = json.get("error") {
            let wire: WireError = serde_json::from_value(err.clone())
                .map_err(|e| ClientError::Protocol(format!("malformed error body: {e}")))?;
            return Err(ClientError::Rejected(wire.into()));
        }

        json.get("result")
            .cloned()
            .ok_or_else(|| ClientError::Protocol("response carries neither result nor error".into()))
    }

    fn decode<T: serde::de::DeserializeOwned>(
        action: &str,
        value: serde_json::Value,
    ) -> Result<T, ClientError> {
        serde_json::from_value(value)
            .map_err(|e| ClientError::Protocol(format!("invalid {action} response: {e}")))
    }

    /// Fetch all vaults owned by a principal.
    pub async fn list_vaults(&self, owner: &Principal) -> Result<Vec<Vault>, ClientError> {
        let result = self
            .rpc_call("list_vaults", serde_json::json!({ "owner": owner }))
            .await?;
        Self::decode("list_vaults", result)
    }

    /// Fetch a single vault by id.
    pub async fn get_vault(&self, id: VaultId) -> Result<Vault, ClientError> {
        let result = self
            .rpc_call("get_vault", serde_json::json!({ "vault_id": id }))
            .await?;
        Self::decode("get_vault", result)
    }

    /// Create a vault; it starts in `PendingDeposit` until funded.
    pub async fn create_vault(
        &self,
        owner: &Principal,
        params: &CreateVaultParams,
    ) -> Result<Vault, ClientError> {
        let result = self
            .rpc_call(
                "create_vault",
                serde_json::json!({
                    "owner": owner,
                    "expected_deposit": params.expected_deposit,
                    "lock_duration_secs": params.lock_duration_secs,
                    "beneficiary": params.beneficiary,
                    "inheritance_timeout_secs": params.inheritance_timeout_secs,
                }),
            )
            .await?;
        Self::decode("create_vault", result)
    }

    /// Ask the canister to record the lock as elapsed.
    ///
    /// The canister re-validates expiry with its own clock; a
    /// [`Rejection::StillLocked`] here is a normal outcome when the
    /// client's display override ran ahead of backend time.
    pub async fn request_unlock(&self, id: VaultId) -> Result<Vault, ClientError> {
        let result = self
            .rpc_call("request_unlock", serde_json::json!({ "vault_id": id }))
            .await?;
        Self::decode("request_unlock", result)
    }

    /// Withdraw from an unlockable vault to a Bitcoin address.
    pub async fn withdraw(
        &self,
        id: VaultId,
        amount: SatAmount,
        destination: &str,
    ) -> Result<WithdrawReceipt, ClientError> {
        let result = self
            .rpc_call(
                "withdraw",
                serde_json::json!({
                    "vault_id": id,
                    "amount": amount,
                    "destination": destination,
                }),
            )
            .await?;
        Self::decode("withdraw", result)
    }

    /// Prove liveness, resetting the dead-man-switch window.
    /// Returns the new `last_keep_alive`.
    pub async fn keep_alive(&self, id: VaultId) -> Result<Timestamp, ClientError> {
        #[derive(Deserialize)]
        struct KeepAliveResult {
            last_keep_alive: Timestamp,
        }
        let result = self
            .rpc_call("keep_alive", serde_json::json!({ "vault_id": id }))
            .await?;
        let resp: KeepAliveResult = Self::decode("keep_alive", result)?;
        Ok(resp.last_keep_alive)
    }

    /// Fetch the reinvest plan for a vault, if one exists.
    pub async fn get_reinvest_plan(
        &self,
        id: VaultId,
    ) -> Result<Option<ReinvestPlan>, ClientError> {
        let result = self
            .rpc_call("get_reinvest_plan", serde_json::json!({ "vault_id": id }))
            .await;
        match result {
            Ok(value) => Self::decode("get_reinvest_plan", value).map(Some),
            Err(ClientError::Rejected(Rejection::PlanNotFound)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Schedule an auto-reinvest plan on a vault.
    pub async fn schedule_reinvest(
        &self,
        id: VaultId,
        lock_duration_secs: u64,
    ) -> Result<ReinvestPlan, ClientError> {
        let result = self
            .rpc_call(
                "schedule_reinvest",
                serde_json::json!({
                    "vault_id": id,
                    "lock_duration_secs": lock_duration_secs,
                }),
            )
            .await?;
        Self::decode("schedule_reinvest", result)
    }

    /// Cancel the vault's reinvest plan.
    pub async fn cancel_reinvest(&self, id: VaultId) -> Result<ReinvestPlan, ClientError> {
        let result = self
            .rpc_call("cancel_reinvest", serde_json::json!({ "vault_id": id }))
            .await?;
        Self::decode("cancel_reinvest", result)
    }

    /// Trigger an immediate plan execution on an unlockable vault.
    pub async fn execute_reinvest(&self, id: VaultId) -> Result<ReinvestPlan, ClientError> {
        let result = self
            .rpc_call("execute_reinvest", serde_json::json!({ "vault_id": id }))
            .await?;
        Self::decode("execute_reinvest", result)
    }

    /// List an `ActiveLocked` vault for sale.
    pub async fn create_listing(
        &self,
        vault_id: VaultId,
        price: SatAmount,
    ) -> Result<Listing, ClientError> {
        let result = self
            .rpc_call(
                "create_listing",
                serde_json::json!({ "vault_id": vault_id, "price": price }),
            )
            .await?;
        Self::decode("create_listing", result)
    }

    /// Cancel an open listing (seller only).
    pub async fn cancel_listing(&self, id: ListingId) -> Result<Listing, ClientError> {
        let result = self
            .rpc_call("cancel_listing", serde_json::json!({ "listing_id": id }))
            .await?;
        Self::decode("cancel_listing", result)
    }

    /// Buy an open listing, transferring vault ownership.
    pub async fn buy_listing(&self, id: ListingId) -> Result<Listing, ClientError> {
        let result = self
            .rpc_call("buy_listing", serde_json::json!({ "listing_id": id }))
            .await?;
        Self::decode("buy_listing", result)
    }

    /// Browse all open listings.
    pub async fn open_listings(&self) -> Result<Vec<Listing>, ClientError> {
        let result = self.rpc_call("open_listings", serde_json::json!({})).await?;
        Self::decode("open_listings", result)
    }
}
