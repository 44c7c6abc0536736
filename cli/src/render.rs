//! Plain-text rendering for command output and watch events.
//!
//! Everything here is a pure string builder; command handlers return
//! domain values and this module decides how they read on a terminal.

use ironclad_client::{ClientError, Rejection, WithdrawReceipt};
use ironclad_status::{inheritance_countdown, resolve, time_remaining, DisplayStatus};
use ironclad_types::{Listing, ReinvestPlan, Timestamp, Vault};
use ironclad_watch::WatchEvent;

/// One-line vault summary for list output.
pub fn vault_line(vault: &Vault, now: Timestamp) -> String {
    let status = resolve(vault, now);
    let countdown = match status {
        DisplayStatus::ActiveLocked => {
            format!("  ({})", time_remaining(vault.lock_until, now).format())
        }
        _ => String::new(),
    };
    format!(
        "{}  {:<15}  {}{}",
        vault.id,
        status.label(),
        vault.balance,
        countdown
    )
}

/// Multi-line vault detail.
pub fn vault_detail(vault: &Vault, now: Timestamp) -> String {
    let status = resolve(vault, now);
    let mut out = String::new();
    out.push_str(&format!("{}\n", vault.id));
    out.push_str(&format!("  status:   {}\n", status.label()));
    out.push_str(&format!("  owner:    {}\n", vault.owner));
    out.push_str(&format!("  balance:  {}\n", vault.balance));
    out.push_str(&format!("  expected: {}\n", vault.expected_deposit));
    out.push_str(&format!("  address:  {}\n", vault.btc_address));
    if status == DisplayStatus::ActiveLocked {
        out.push_str(&format!(
            "  unlock:   {}\n",
            time_remaining(vault.lock_until, now).format()
        ));
    }
    if let Some(txid) = &vault.deposit_txid {
        out.push_str(&format!("  deposit:  {txid}\n"));
    }
    if let Some(txid) = &vault.withdraw_txid {
        out.push_str(&format!("  withdraw: {txid}\n"));
    }
    if let Some(subaccount) = vault.ckbtc_subaccount_hex() {
        out.push_str(&format!("  ckbtc:    {subaccount}\n"));
    }
    if let Some(view) = inheritance_countdown(vault, now) {
        let heir = vault.beneficiary.as_ref().map(|b| b.as_str()).unwrap_or("");
        if view.is_claimable {
            out.push_str(&format!("  heir:     {heir} (claimable now)\n"));
        } else {
            out.push_str(&format!(
                "  heir:     {heir} (claimable in {}d {}h {}m)\n",
                view.remaining.days, view.remaining.hours, view.remaining.minutes
            ));
        }
    }
    out
}

pub fn withdraw_receipt(receipt: &WithdrawReceipt) -> String {
    format!(
        "withdrew from {}; txid {}; remaining balance {}",
        receipt.vault.id, receipt.txid, receipt.vault.balance
    )
}

pub fn plan_line(plan: &ReinvestPlan) -> String {
    let error = plan
        .last_error
        .as_ref()
        .map(|e| format!("  last error: {e}"))
        .unwrap_or_default();
    format!(
        "{}  reinvest {:?}  every {}  {} executions{}",
        plan.vault_id,
        plan.status,
        ironclad_utils::format_duration(plan.lock_duration_secs),
        plan.executions,
        error
    )
}

pub fn listing_line(listing: &Listing) -> String {
    format!(
        "{}  {}  {:?}  seller {}  asking {}",
        listing.id, listing.vault_id, listing.status, listing.seller, listing.price
    )
}

/// One line per watch event.
pub fn watch_event(event: &WatchEvent, now: Timestamp) -> String {
    match event {
        WatchEvent::Snapshot { vaults } => {
            let mut out = format!("snapshot: {} vault(s)", vaults.len());
            for vault in vaults {
                out.push_str(&format!("\n  {}", vault_line(vault, now)));
            }
            out
        }
        WatchEvent::StatusChanged {
            vault_id,
            previous,
            current,
        } => format!(
            "{} changed: {} -> {}",
            vault_id,
            previous.label(),
            current.label()
        ),
        WatchEvent::RefreshFailed {
            consecutive_failures,
            message,
        } => format!("refresh failed ({consecutive_failures} in a row): {message}"),
    }
}

/// Human rendering of an operation failure.
pub fn client_error(error: &ClientError) -> String {
    match error {
        ClientError::Rejected(Rejection::StillLocked { lock_until }) => format!(
            "the canister says this vault is still locked ({}) — its clock is authoritative",
            time_remaining(*lock_until, Timestamp::now()).format()
        ),
        ClientError::Rejected(rejection) => format!("operation rejected: {rejection}"),
        other => other.to_string(),
    }
}
