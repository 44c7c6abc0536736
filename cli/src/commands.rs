//! Command handlers.
//!
//! Each handler performs the canister calls for one subcommand and returns
//! rendered text; printing and error presentation stay in `main`. Mutating
//! operations return the canister's updated record, so the displayed state
//! is always post-action.

use ironclad_client::{ClientError, CreateVaultParams, Session};
use ironclad_status::RefreshPolicy;
use ironclad_types::{ListingId, SatAmount, Timestamp, VaultId};
use ironclad_watch::{SessionVaults, VaultWatcher};

use crate::render;

pub async fn vaults_list(session: &Session) -> Result<String, ClientError> {
    let vaults = session.client().list_vaults(session.principal()).await?;
    if vaults.is_empty() {
        return Ok("no vaults".to_string());
    }
    let now = Timestamp::now();
    Ok(vaults
        .iter()
        .map(|v| render::vault_line(v, now))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub async fn vaults_show(session: &Session, id: VaultId) -> Result<String, ClientError> {
    // vault record and reinvest plan are independent; fetch both at once
    let (vault, plan) = tokio::join!(
        session.client().get_vault(id),
        session.client().get_reinvest_plan(id),
    );
    let now = Timestamp::now();
    let mut out = render::vault_detail(&vault?, now);
    if let Some(plan) = plan? {
        out.push_str(&format!("  {}\n", render::plan_line(&plan)));
    }
    Ok(out)
}

pub async fn vaults_create(
    session: &Session,
    params: CreateVaultParams,
) -> Result<String, ClientError> {
    let vault = session
        .client()
        .create_vault(session.principal(), &params)
        .await?;
    Ok(format!(
        "created {}; deposit {} to {}",
        vault.id, vault.expected_deposit, vault.btc_address
    ))
}

pub async fn vaults_unlock(session: &Session, id: VaultId) -> Result<String, ClientError> {
    let vault = session.client().request_unlock(id).await?;
    Ok(render::vault_detail(&vault, Timestamp::now()))
}

pub async fn vaults_withdraw(
    session: &Session,
    id: VaultId,
    amount: SatAmount,
    destination: &str,
) -> Result<String, ClientError> {
    let receipt = session.client().withdraw(id, amount, destination).await?;
    Ok(render::withdraw_receipt(&receipt))
}

pub async fn vaults_keep_alive(session: &Session, id: VaultId) -> Result<String, ClientError> {
    let last_keep_alive = session.client().keep_alive(id).await?;
    Ok(format!(
        "liveness recorded for {} at {last_keep_alive}",
        id
    ))
}

pub async fn reinvest_show(session: &Session, id: VaultId) -> Result<String, ClientError> {
    match session.client().get_reinvest_plan(id).await? {
        Some(plan) => Ok(render::plan_line(&plan)),
        None => Ok(format!("no reinvest plan on {id}")),
    }
}

pub async fn reinvest_schedule(
    session: &Session,
    id: VaultId,
    lock_duration_secs: u64,
) -> Result<String, ClientError> {
    let plan = session
        .client()
        .schedule_reinvest(id, lock_duration_secs)
        .await?;
    Ok(render::plan_line(&plan))
}

pub async fn reinvest_cancel(session: &Session, id: VaultId) -> Result<String, ClientError> {
    let plan = session.client().cancel_reinvest(id).await?;
    Ok(render::plan_line(&plan))
}

pub async fn reinvest_execute(session: &Session, id: VaultId) -> Result<String, ClientError> {
    let plan = session.client().execute_reinvest(id).await?;
    Ok(render::plan_line(&plan))
}

pub async fn market_listings(session: &Session) -> Result<String, ClientError> {
    let listings = session.client().open_listings().await?;
    if listings.is_empty() {
        return Ok("no open listings".to_string());
    }
    Ok(listings
        .iter()
        .map(render::listing_line)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub async fn market_list(
    session: &Session,
    vault_id: VaultId,
    price: SatAmount,
) -> Result<String, ClientError> {
    let listing = session.client().create_listing(vault_id, price).await?;
    Ok(render::listing_line(&listing))
}

pub async fn market_cancel(session: &Session, id: ListingId) -> Result<String, ClientError> {
    let listing = session.client().cancel_listing(id).await?;
    Ok(render::listing_line(&listing))
}

pub async fn market_buy(session: &Session, id: ListingId) -> Result<String, ClientError> {
    let listing = session.client().buy_listing(id).await?;
    Ok(render::listing_line(&listing))
}

/// Run the watcher until Ctrl-C, printing one line per event.
///
/// With auto-refresh disabled this performs exactly one fetch and exits —
/// data then only moves on explicit invocations.
pub async fn watch(session: &Session, auto_refresh: bool) -> anyhow::Result<()> {
    if !auto_refresh {
        println!("{}", vaults_list(session).await?);
        return Ok(());
    }

    let source = SessionVaults::new(session);
    let mut watcher = VaultWatcher::new(source, RefreshPolicy::default());
    let mut events = watcher.start()?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("received SIGINT, stopping watch");
                break;
            }
            event = events.recv() => match event {
                Some(event) => println!("{}", render::watch_event(&event, Timestamp::now())),
                None => break,
            },
        }
    }

    watcher.stop().await?;
    Ok(())
}
