//! The eight resource clients.
//!
//! Each one composes the URL builder, typed records and the dispatcher into
//! domain-named operations and returns the decoded response unmodified.

pub mod attachments;
pub mod clients;
pub mod custom_fields;
pub mod loan_products;
pub mod loan_transactions;
pub mod loans;
pub mod savings;
pub mod savings_transactions;

pub use attachments::{ATTACHMENT_HOLDERS, AttachmentHolder, Attachments};
pub use clients::Clients;
pub use custom_fields::{CustomFieldSetType, CustomFields};
pub use loan_products::LoanProducts;
pub use loan_transactions::{LoanTransactionType, LoanTransactions};
pub use loans::Loans;
pub use savings::Savings;
pub use savings_transactions::SavingsTransactions;

use crate::dispatcher::{Dispatcher, HttpMethod};
use crate::error::MambuClientError;
use crate::url_builder::custom_field_path;

use models::{Body, ModelError, Record, RecordKind};

use log::{debug, warn};
use serde_json::Value;
use tokio::task::JoinSet;

pub(crate) const CUSTOM_FIELD_ID: &str = "customFieldID";
pub(crate) const CUSTOM_FIELD_VALUE: &str = "value";
pub(crate) const CUSTOM_FIELD_SET_GROUP_INDEX: &str = "customFieldSetGroupIndex";

/// Build a request envelope, dropping sections that were not supplied.
pub(crate) fn envelope<I>(sections: I) -> Body
where
    I: IntoIterator<Item = (&'static str, Option<Body>)>,
{
    Body::map(
        sections
            .into_iter()
            .filter_map(|(name, section)| section.map(|body| (name, body))),
    )
}

/// Check that a record-valued body is of `kind`. Plain JSON passes through.
#[track_caller]
pub(crate) fn expect_kind(body: Body, kind: RecordKind) -> Result<Body, ModelError> {
    match body {
        Body::Record(record) => Ok(Body::Record(record.expect_kind(kind)?)),
        other => Ok(other),
    }
}

/// Check every record in an optional list, then wrap it as a body.
#[track_caller]
pub(crate) fn expect_kinds(
    records: Option<Vec<Record>>,
    kind: RecordKind,
) -> Result<Option<Body>, ModelError> {
    records
        .map(|records| {
            records
                .into_iter()
                .map(|record| record.expect_kind(kind))
                .collect::<Result<Vec<_>, _>>()
                .map(Body::from)
        })
        .transpose()
}

/// `{"value": value}`, the body of a single custom field update.
pub(crate) fn custom_field_value(value: impl Into<Body>) -> Body {
    Body::map([(CUSTOM_FIELD_VALUE, value.into())])
}

struct CustomFieldUpdate {
    path: String,
    body: Body,
}

/// Read id, value and optional group index out of each custom field record.
///
/// Runs before anything is sent, so a malformed record fails the whole batch.
#[track_caller]
fn custom_field_updates(
    resource: &str,
    id: &str,
    fields: &[Record],
) -> Result<Vec<CustomFieldUpdate>, ModelError> {
    fields
        .iter()
        .map(|field| -> Result<CustomFieldUpdate, ModelError> {
            let field_id = field.get(CUSTOM_FIELD_ID)?.to_query_value();
            let value = field.get(CUSTOM_FIELD_VALUE)?.clone();
            let index = field
                .get(CUSTOM_FIELD_SET_GROUP_INDEX)
                .ok()
                .and_then(|index| index.to_query_value().parse::<i64>().ok());
            Ok(CustomFieldUpdate {
                path: custom_field_path(resource, id, &field_id, index),
                body: custom_field_value(value),
            })
        })
        .collect()
}

/// PATCH every custom field concurrently, one task per field.
///
/// Waits for all tasks. Returns the responses in completion order, or the
/// first failure observed once every task has finished.
pub(crate) async fn set_custom_fields_concurrently(
    dispatcher: &Dispatcher,
    resource: &str,
    id: &str,
    fields: &[Record],
) -> Result<Vec<Value>, MambuClientError> {
    let updates = custom_field_updates(resource, id, fields)?;
    debug!("Updating {} custom fields on {resource}/{id}", updates.len());

    let mut tasks = JoinSet::new();
    for update in updates {
        let dispatcher = dispatcher.clone();
        tasks.spawn(async move {
            dispatcher
                .call(HttpMethod::Patch, &update.path, None, Some(&update.body))
                .await
        });
    }

    let mut responses = Vec::with_capacity(tasks.len());
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        match joined.map_err(MambuClientError::from).and_then(|result| result) {
            Ok(response) => responses.push(response),
            Err(error) => {
                warn!("Custom field update on {resource}/{id} failed: {error}");
                first_error.get_or_insert(error);
            }
        }
    }

    match first_error {
        Some(error) => Err(error),
        None => Ok(responses),
    }
}
