//! Personal finance demo: two accounts and a handful of postings.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use recordkeep_core::{DomainResult, Entity, ItemId, Repository};
use recordkeep_finance::{Account, Ledger, Transaction};

use crate::report::{Scenario, write_scenarios};

#[derive(Debug, Clone, Serialize)]
pub struct AccountStatement {
    pub account: Account,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinanceSummary {
    pub statements: Vec<AccountStatement>,
    pub scenarios: Vec<Scenario>,
}

pub fn run(today: NaiveDate) -> DomainResult<FinanceSummary> {
    let checking = ItemId::new(1)?;
    let savings = ItemId::new(2)?;

    let mut ledger = Ledger::new();
    ledger.open_account(Account::new(checking, "Alice Johnson", 150_000)?)?;
    ledger.open_account(Account::new(savings, "Alice Johnson", 500_000)?)?;

    let last_week = today - Duration::days(7);
    let mut scenarios = vec![
        Scenario::domain(
            "deposit salary into account 1",
            ledger.deposit(checking, 320_000, last_week, "salary"),
            |tx| format!("transaction {tx}"),
        ),
        Scenario::domain(
            "pay rent from account 1",
            ledger.withdraw(checking, 180_000, today, "rent"),
            |tx| format!("transaction {tx}"),
        ),
        Scenario::domain(
            "withdraw more than account 1 holds",
            ledger.withdraw(checking, 1_000_000, today, "car"),
            |tx| format!("transaction {tx}"),
        ),
        Scenario::domain(
            "deposit a negative amount",
            ledger.deposit(savings, -500, today, "refund"),
            |tx| format!("transaction {tx}"),
        ),
        Scenario::domain(
            "deposit into unknown account 42",
            ledger.deposit(ItemId::new(42)?, 1_000, today, "gift"),
            |tx| format!("transaction {tx}"),
        ),
    ];
    scenarios.push(Scenario::domain(
        "open account 2 again",
        ledger.open_account(Account::new(savings, "Bob Smith", 0)?),
        |_| "opened".to_string(),
    ));

    let statements = ledger
        .accounts()
        .all()
        .into_iter()
        .map(|account| {
            let transactions = ledger.statement(account.id())?;
            Ok(AccountStatement {
                account,
                transactions,
            })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    Ok(FinanceSummary {
        statements,
        scenarios,
    })
}

impl fmt::Display for FinanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Finance ==")?;
        for s in &self.statements {
            writeln!(
                f,
                "Account #{} ({}): balance ${}",
                s.account.id(),
                s.account.owner(),
                s.account.balance()
            )?;
            for tx in &s.transactions {
                writeln!(
                    f,
                    "  {} {:<10} ${:>10}  {}",
                    tx.date(),
                    tx.kind(),
                    tx.amount(),
                    tx.memo()
                )?;
            }
        }
        write_scenarios(f, &self.scenarios)
    }
}
