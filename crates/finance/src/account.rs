use serde::{Deserialize, Serialize};

use recordkeep_core::{Adjustable, DomainError, DomainResult, Entity, ItemId, Money, Name};

/// Account with a non-negative running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountFields")]
pub struct Account {
    id: ItemId,
    owner: Name,
    balance: Money,
}

#[derive(Deserialize)]
struct AccountFields {
    id: ItemId,
    owner: String,
    balance: i64,
}

impl TryFrom<AccountFields> for Account {
    type Error = DomainError;

    fn try_from(f: AccountFields) -> Result<Self, Self::Error> {
        Self::new(f.id, &f.owner, f.balance)
    }
}

impl Account {
    pub fn new(id: ItemId, owner: &str, opening_cents: i64) -> DomainResult<Self> {
        Ok(Self {
            id,
            owner: Name::field("owner", owner)?,
            balance: Money::non_negative(opening_cents)?,
        })
    }

    pub fn owner(&self) -> &str {
        self.owner.as_str()
    }

    pub fn balance(&self) -> Money {
        self.balance
    }
}

impl Entity for Account {
    type Id = ItemId;
    const KIND: &'static str = "account";

    fn id(&self) -> ItemId {
        self.id
    }
}

/// The balance is the account's only mutable field.
impl Adjustable for Account {
    type Input = i64;
    type Value = Money;

    fn validate_input(input: i64) -> DomainResult<Money> {
        Money::non_negative(input)
    }

    fn apply_value(&mut self, value: Money) {
        self.balance = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkeep_core::DomainError;

    #[test]
    fn opening_balance_may_be_zero_but_not_negative() {
        let id = ItemId::new(1).unwrap();
        assert!(Account::new(id, "Alice", 0).is_ok());
        assert!(matches!(
            Account::new(id, "Alice", -1),
            Err(DomainError::InvalidValue(_))
        ));
    }

    #[test]
    fn owner_is_required() {
        let err = Account::new(ItemId::new(1).unwrap(), " ", 10).unwrap_err();
        assert_eq!(err, DomainError::invalid("owner cannot be empty"));
    }

    #[test]
    fn deserialized_balance_cannot_be_negative() {
        let json = r#"{"id":1,"owner":"Alice","balance":-1}"#;
        assert!(serde_json::from_str::<Account>(json).is_err());

        let json = r#"{"id":1,"owner":"Alice","balance":250}"#;
        let account = serde_json::from_str::<Account>(json).unwrap();
        assert_eq!(account.balance().cents(), 250);
    }
}
