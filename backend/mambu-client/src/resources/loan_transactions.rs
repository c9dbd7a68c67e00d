//! Loan state transitions and money movements, all posted to
//! `loans/{id}/transactions`.
//!
//! The loan state machine lives on the platform. Nothing here tracks or
//! checks the current state; a transition that is not allowed comes back as
//! a remote error.

use crate::dates::{DateLike, explicit_date, today};
use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::resources::expect_kind;
use crate::url_builder::{LOANS, TRANSACTIONS, build_path};

use models::{Body, Record, RecordKind, SchemaRegistry};

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

const TYPE: &str = "type";
const AMOUNT: &str = "amount";
const DATE: &str = "date";
const METHOD: &str = "method";
const NOTES: &str = "notes";

/// Transaction type codes understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanTransactionType {
    Approval,
    UndoApproval,
    Withdraw,
    Reject,
    Lock,
    Unlock,
    Fee,
    Repayment,
    Disbursement,
    DisbursementAdjustment,
}

impl LoanTransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanTransactionType::Approval => "APPROVAL",
            LoanTransactionType::UndoApproval => "UNDO_APPROVAL",
            LoanTransactionType::Withdraw => "WITHDRAW",
            LoanTransactionType::Reject => "REJECT",
            LoanTransactionType::Lock => "LOCK",
            LoanTransactionType::Unlock => "UNLOCK",
            LoanTransactionType::Fee => "FEE",
            LoanTransactionType::Repayment => "REPAYMENT",
            // sic: the platform spells it this way
            LoanTransactionType::Disbursement => "DISBURSMENT",
            LoanTransactionType::DisbursementAdjustment => "DISBURSMENT_ADJUSTMENT",
        }
    }
}

impl fmt::Display for LoanTransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `loans/{id}/transactions` resource.
#[derive(Debug, Clone)]
pub struct LoanTransactions {
    dispatcher: Dispatcher,
    schema: Arc<SchemaRegistry>,
}

impl LoanTransactions {
    pub(crate) fn new(dispatcher: Dispatcher, schema: Arc<SchemaRegistry>) -> Self {
        Self { dispatcher, schema }
    }

    pub async fn get(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.dispatcher.get(&transactions_path(loan_id), None).await
    }

    /// Post an arbitrary transaction payload.
    pub async fn post(
        &self,
        loan_id: &str,
        transaction: impl Into<Body>,
    ) -> Result<Value, MambuClientError> {
        let transaction = expect_kind(transaction.into(), RecordKind::LoanTransaction)?;
        self.dispatcher
            .post(&transactions_path(loan_id), &transaction)
            .await
    }

    /// PENDING_APPROVAL -> APPROVED
    pub async fn approve(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::Approval).await
    }

    /// APPROVED -> PENDING_APPROVAL
    pub async fn undo_approval(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::UndoApproval)
            .await
    }

    pub async fn withdraw(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::Withdraw).await
    }

    pub async fn reject(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::Reject).await
    }

    /// ACTIVE -> INTEREST_LOCKED
    pub async fn lock(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::Lock).await
    }

    /// INTEREST_LOCKED -> ACTIVE
    pub async fn unlock(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::Unlock).await
    }

    async fn standalone(
        &self,
        loan_id: &str,
        transaction_type: LoanTransactionType,
    ) -> Result<Value, MambuClientError> {
        let transaction = typed_transaction(&self.schema, transaction_type)?;
        self.post(loan_id, transaction).await
    }

    /// Apply a fee of `amount` whole currency units.
    ///
    /// The date is omitted when absent or today, letting the platform book
    /// the fee at the current time.
    pub async fn apply_fee(
        &self,
        loan_id: &str,
        amount: f64,
        date: Option<DateLike>,
    ) -> Result<Value, MambuClientError> {
        let transaction = fee_transaction(&self.schema, amount, date.as_ref(), today())?;
        self.post(loan_id, transaction).await
    }

    /// Record a repayment. Only the parts supplied are sent.
    pub async fn repayment(
        &self,
        loan_id: &str,
        amount: f64,
        date: Option<DateLike>,
        method: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Value, MambuClientError> {
        let mut transaction = typed_transaction(&self.schema, LoanTransactionType::Repayment)?;
        transaction.set(AMOUNT, amount)?;
        if let Some(date) = date {
            transaction.set(DATE, date.mambu_date()?)?;
        }
        if let Some(method) = method {
            transaction.set(METHOD, method)?;
        }
        if let Some(notes) = notes {
            transaction.set(NOTES, notes)?;
        }
        self.post(loan_id, transaction).await
    }

    /// Disburse the next tranche. Same date rule as [`LoanTransactions::apply_fee`].
    pub async fn disburse(
        &self,
        loan_id: &str,
        date: Option<DateLike>,
    ) -> Result<Value, MambuClientError> {
        let transaction = disbursement_transaction(&self.schema, date.as_ref(), today())?;
        self.post(loan_id, transaction).await
    }

    pub async fn undo_disburse(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.standalone(loan_id, LoanTransactionType::DisbursementAdjustment)
            .await
    }

    /// Disburse, then apply `fee`. Stops at the first failure.
    ///
    /// Returns both responses in that order.
    pub async fn disburse_with_fee(
        &self,
        loan_id: &str,
        fee: f64,
        date: Option<DateLike>,
    ) -> Result<Vec<Value>, MambuClientError> {
        debug!("Disbursing {loan_id} with fee {fee}");
        let disbursed = self.disburse(loan_id, date.clone()).await?;
        let charged = self.apply_fee(loan_id, fee, date).await?;
        Ok(vec![disbursed, charged])
    }
}

fn transactions_path(loan_id: &str) -> String {
    build_path([Some(LOANS), Some(loan_id), Some(TRANSACTIONS)])
}

/// A transaction record carrying only its `type`.
#[track_caller]
pub fn typed_transaction(
    schema: &SchemaRegistry,
    transaction_type: LoanTransactionType,
) -> Result<Record, MambuClientError> {
    Ok(schema.record_from(
        RecordKind::LoanTransaction,
        [(TYPE, transaction_type.as_str())],
    )?)
}

/// Fee payload, applying the date-omission rule against `today`.
#[track_caller]
pub fn fee_transaction(
    schema: &SchemaRegistry,
    amount: f64,
    date: Option<&DateLike>,
    today: NaiveDate,
) -> Result<Record, MambuClientError> {
    let mut transaction = typed_transaction(schema, LoanTransactionType::Fee)?;
    transaction.set(AMOUNT, amount)?;
    if let Some(date) = explicit_date(date, today)? {
        transaction.set(DATE, date)?;
    }
    Ok(transaction)
}

/// Disbursement payload, applying the date-omission rule against `today`.
#[track_caller]
pub fn disbursement_transaction(
    schema: &SchemaRegistry,
    date: Option<&DateLike>,
    today: NaiveDate,
) -> Result<Record, MambuClientError> {
    let mut transaction = typed_transaction(schema, LoanTransactionType::Disbursement)?;
    if let Some(date) = explicit_date(date, today)? {
        transaction.set(DATE, date)?;
    }
    Ok(transaction)
}
