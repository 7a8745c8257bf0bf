use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkeep_core::{DomainError, DomainResult, Entity, ItemId, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("deposit"),
            TransactionKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// Immutable record of money moving in or out of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TransactionFields")]
pub struct Transaction {
    id: ItemId,
    account_id: ItemId,
    kind: TransactionKind,
    amount: Money,
    date: NaiveDate,
    memo: String,
}

#[derive(Deserialize)]
struct TransactionFields {
    id: ItemId,
    account_id: ItemId,
    kind: TransactionKind,
    amount: i64,
    date: NaiveDate,
    #[serde(default)]
    memo: String,
}

impl TryFrom<TransactionFields> for Transaction {
    type Error = DomainError;

    fn try_from(f: TransactionFields) -> Result<Self, Self::Error> {
        Self::new(f.id, f.account_id, f.kind, f.amount, f.date, &f.memo)
    }
}

impl Transaction {
    pub fn new(
        id: ItemId,
        account_id: ItemId,
        kind: TransactionKind,
        amount_cents: i64,
        date: NaiveDate,
        memo: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            account_id,
            kind,
            amount: Money::positive(amount_cents)?,
            date,
            memo: memo.trim().to_string(),
        })
    }

    pub fn account_id(&self) -> ItemId {
        self.account_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }
}

impl Entity for Transaction {
    type Id = ItemId;
    const KIND: &'static str = "transaction";

    fn id(&self) -> ItemId {
        self.id
    }
}
