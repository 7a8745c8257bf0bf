//! Ledger: accounts plus the transactions posted against them.
//!
//! Every posting validates the amount and the resulting balance before touching
//! either repository. There is no rollback across the two repositories; the
//! ordering alone guarantees a rejected posting changes nothing.

use chrono::NaiveDate;

use recordkeep_core::{DomainError, DomainResult, InMemoryRepository, ItemId, Money, Repository};

use crate::account::Account;
use crate::transaction::{Transaction, TransactionKind};

#[derive(Debug, Clone)]
pub struct Ledger {
    accounts: InMemoryRepository<Account>,
    transactions: InMemoryRepository<Transaction>,
    next_transaction: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: InMemoryRepository::new(),
            transactions: InMemoryRepository::new(),
            next_transaction: 1,
        }
    }

    pub fn accounts(&self) -> &InMemoryRepository<Account> {
        &self.accounts
    }

    pub fn transactions(&self) -> &InMemoryRepository<Transaction> {
        &self.transactions
    }

    pub fn open_account(&mut self, account: Account) -> DomainResult<()> {
        self.accounts.add(account)
    }

    pub fn balance(&self, account_id: ItemId) -> DomainResult<Money> {
        Ok(self.accounts.get(account_id)?.balance())
    }

    pub fn deposit(
        &mut self,
        account_id: ItemId,
        amount_cents: i64,
        date: NaiveDate,
        memo: &str,
    ) -> DomainResult<ItemId> {
        self.post(account_id, TransactionKind::Deposit, amount_cents, date, memo)
    }

    /// Fails with `InvalidValue` when the balance does not cover the amount.
    pub fn withdraw(
        &mut self,
        account_id: ItemId,
        amount_cents: i64,
        date: NaiveDate,
        memo: &str,
    ) -> DomainResult<ItemId> {
        self.post(account_id, TransactionKind::Withdrawal, amount_cents, date, memo)
    }

    /// Transactions for one account, in posting order.
    pub fn statement(&self, account_id: ItemId) -> DomainResult<Vec<Transaction>> {
        self.accounts.get(account_id)?;
        Ok(self
            .transactions
            .iter()
            .filter(|tx| tx.account_id() == account_id)
            .cloned()
            .collect())
    }

    fn post(
        &mut self,
        account_id: ItemId,
        kind: TransactionKind,
        amount_cents: i64,
        date: NaiveDate,
        memo: &str,
    ) -> DomainResult<ItemId> {
        let tx_id = ItemId::new(self.next_transaction)?;
        let tx = Transaction::new(tx_id, account_id, kind, amount_cents, date, memo)?;

        let balance = self.accounts.get(account_id)?.balance();
        let new_balance = match kind {
            TransactionKind::Deposit => balance
                .checked_add(tx.amount())
                .ok_or_else(|| DomainError::invalid("balance overflows"))?,
            TransactionKind::Withdrawal => balance.checked_sub(tx.amount()).ok_or_else(|| {
                DomainError::invalid(format!(
                    "insufficient funds: balance {balance}, requested {}",
                    tx.amount()
                ))
            })?,
        };
        let next_transaction = tx_id
            .next()
            .map(ItemId::get)
            .ok_or_else(|| DomainError::invalid("transaction ids exhausted"))?;

        self.accounts.update(account_id, new_balance.cents())?;
        self.transactions.add(tx)?;
        self.next_transaction = next_transaction;

        tracing::info!(%account_id, %kind, amount = amount_cents, "transaction posted");
        Ok(tx_id)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
