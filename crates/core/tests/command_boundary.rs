//! End-to-end use at a system boundary.
//!
//! A command handler produces an outcome, the chain maps it into a domain
//! event, and the HTTP edge discharges it exactly once into a status code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use anyhow::{Context, ensure};
use planetgame_core::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TransferFundsCommand {
    from_account_id: i64,
    to_account_id: i64,
    amount_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FundsTransferredEvent {
    from_account_id: i64,
    to_account_id: i64,
    amount_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestMiningRightsCommand {
    requester_id: i64,
    mine_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MiningRightsEvent {
    Granted { requester_id: i64, mine_id: i64 },
    Denied { requester_id: i64, mine_id: i64 },
}

struct Ledger {
    balances: HashMap<i64, i64>,
}

impl Ledger {
    fn with_accounts(accounts: &[(i64, i64)]) -> Self {
        Self {
            balances: accounts.iter().copied().collect(),
        }
    }

    fn transfer(&mut self, cmd: TransferFundsCommand) -> anyhow::Result<TransferFundsCommand> {
        ensure!(cmd.amount_cents > 0, "amount must be positive");
        let from = *self
            .balances
            .get(&cmd.from_account_id)
            .with_context(|| format!("account {} not found", cmd.from_account_id))?;
        ensure!(
            self.balances.contains_key(&cmd.to_account_id),
            "account {} not found",
            cmd.to_account_id
        );
        ensure!(from >= cmd.amount_cents, "insufficient funds");

        self.balances
            .insert(cmd.from_account_id, from - cmd.amount_cents);
        *self.balances.entry(cmd.to_account_id).or_default() += cmd.amount_cents;
        Ok(cmd)
    }
}

fn handle_transfer(ledger: &mut Ledger, cmd: TransferFundsCommand) -> Outcome<FundsTransferredEvent> {
    Outcome::try_with(|| ledger.transfer(cmd)).map(|done| FundsTransferredEvent {
        from_account_id: done.from_account_id,
        to_account_id: done.to_account_id,
        amount_cents: done.amount_cents,
    })
}

fn to_status(outcome: Outcome<FundsTransferredEvent>) -> (u16, String) {
    outcome.resolve(
        |event| (200, format!("moved {}", event.amount_cents)),
        |err| (422, err.to_string()),
    )
}

#[test]
fn test_transfer_success_maps_to_ok() {
    let mut ledger = Ledger::with_accounts(&[(1, 500), (2, 0)]);
    let cmd = TransferFundsCommand {
        from_account_id: 1,
        to_account_id: 2,
        amount_cents: 200,
    };

    let (status, body) = to_status(handle_transfer(&mut ledger, cmd));
    assert_eq!(status, 200);
    assert_eq!(body, "moved 200");
    assert_eq!(ledger.balances.get(&1), Some(&300));
    assert_eq!(ledger.balances.get(&2), Some(&200));
}

#[test]
fn test_transfer_rejection_maps_to_unprocessable() {
    let mut ledger = Ledger::with_accounts(&[(1, 50), (2, 0)]);
    let cmd = TransferFundsCommand {
        from_account_id: 1,
        to_account_id: 2,
        amount_cents: 200,
    };

    let (status, body) = to_status(handle_transfer(&mut ledger, cmd));
    assert_eq!(status, 422);
    assert_eq!(body, "insufficient funds");
    assert_eq!(ledger.balances.get(&1), Some(&50));
}

#[test]
fn test_transfer_unknown_account_keeps_cause_chain() {
    let mut ledger = Ledger::with_accounts(&[(2, 0)]);
    let cmd = TransferFundsCommand {
        from_account_id: 9,
        to_account_id: 2,
        amount_cents: 10,
    };

    let outcome = handle_transfer(&mut ledger, cmd);
    let err = outcome.failure_ref().cloned().unwrap();
    assert_eq!(err.message(), "account 9 not found");
    assert!(err.cause().is_some());
}

async fn review_mining_request(
    cmd: RequestMiningRightsCommand,
    claimed_mines: &[i64],
) -> Outcome<RequestMiningRightsCommand> {
    tokio::task::yield_now().await;
    if claimed_mines.contains(&cmd.mine_id) {
        Outcome::failure(format!("mine {} already claimed", cmd.mine_id))
    } else {
        Outcome::success(cmd)
    }
}

async fn decide(cmd: RequestMiningRightsCommand, claimed_mines: &[i64]) -> MiningRightsEvent {
    review_mining_request(cmd, claimed_mines)
        .resolve(
            |granted| MiningRightsEvent::Granted {
                requester_id: granted.requester_id,
                mine_id: granted.mine_id,
            },
            |_| MiningRightsEvent::Denied {
                requester_id: cmd.requester_id,
                mine_id: cmd.mine_id,
            },
        )
        .await
}

#[tokio::test]
async fn test_mining_rights_granted_for_free_mine() {
    let cmd = RequestMiningRightsCommand {
        requester_id: 3,
        mine_id: 11,
    };
    assert_eq!(
        decide(cmd, &[4, 5]).await,
        MiningRightsEvent::Granted {
            requester_id: 3,
            mine_id: 11
        }
    );
}

#[tokio::test]
async fn test_mining_rights_denied_for_claimed_mine() {
    let cmd = RequestMiningRightsCommand {
        requester_id: 3,
        mine_id: 4,
    };
    let mut logged = Vec::new();
    let event = review_mining_request(cmd, &[4, 5])
        .on_failure(|e| logged.push(e.message().to_string()))
        .resolve(
            |_| MiningRightsEvent::Granted {
                requester_id: 3,
                mine_id: 4,
            },
            |_| MiningRightsEvent::Denied {
                requester_id: 3,
                mine_id: 4,
            },
        )
        .await;
    assert_eq!(
        event,
        MiningRightsEvent::Denied {
            requester_id: 3,
            mine_id: 4
        }
    );
    assert_eq!(logged, vec!["mine 4 already claimed".to_string()]);
}
