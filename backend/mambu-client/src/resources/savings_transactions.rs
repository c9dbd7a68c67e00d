use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::resources::expect_kind;
use crate::url_builder::{SAVINGS, TRANSACTIONS, build_path};

use models::{Body, RecordKind};

use serde_json::Value;

/// `savings/{id}/transactions` resource.
#[derive(Debug, Clone)]
pub struct SavingsTransactions {
    dispatcher: Dispatcher,
}

impl SavingsTransactions {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Every transaction on the account.
    pub async fn get(&self, savings_id: &str) -> Result<Value, MambuClientError> {
        self.dispatcher
            .get(&transactions_path(savings_id, None), None)
            .await
    }

    pub async fn get_one(
        &self,
        savings_id: &str,
        transaction_id: &str,
    ) -> Result<Value, MambuClientError> {
        self.dispatcher
            .get(&transactions_path(savings_id, Some(transaction_id)), None)
            .await
    }

    /// Post a deposit, withdrawal or other transaction payload.
    pub async fn create(
        &self,
        savings_id: &str,
        transaction: impl Into<Body>,
    ) -> Result<Value, MambuClientError> {
        let transaction = expect_kind(transaction.into(), RecordKind::SavingsTransaction)?;
        self.dispatcher
            .post(&transactions_path(savings_id, None), &transaction)
            .await
    }
}

fn transactions_path(savings_id: &str, transaction_id: Option<&str>) -> String {
    build_path([
        Some(SAVINGS),
        Some(savings_id),
        Some(TRANSACTIONS),
        transaction_id,
    ])
}
