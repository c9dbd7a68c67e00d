use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::resources::{custom_field_value, envelope, expect_kind, expect_kinds};
use crate::url_builder::{SAVINGS, custom_field_path, resource_path};

use models::{Body, Record, RecordKind};

use serde_json::Value;

/// `savings` resource.
#[derive(Debug, Clone)]
pub struct Savings {
    dispatcher: Dispatcher,
}

impl Savings {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn get(
        &self,
        savings_id: Option<&str>,
        params: Option<&Record>,
    ) -> Result<Value, MambuClientError> {
        let query = params.map(Record::to_query);
        self.dispatcher
            .get(&resource_path(SAVINGS, savings_id), query.as_deref())
            .await
    }

    pub async fn create(
        &self,
        account: impl Into<Body>,
        custom_information: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        self.create_or_update(None, account.into(), custom_information)
            .await
    }

    /// Overwrite the account. Sending `custom_information` replaces every
    /// custom field the account holds.
    pub async fn update(
        &self,
        savings_id: &str,
        account: impl Into<Body>,
        custom_information: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        self.create_or_update(Some(savings_id), account.into(), custom_information)
            .await
    }

    async fn create_or_update(
        &self,
        savings_id: Option<&str>,
        account: Body,
        custom_information: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        let body = envelope([
            (
                "savingsAccount",
                Some(expect_kind(account, RecordKind::SavingsAccount)?),
            ),
            (
                "customInformation",
                expect_kinds(custom_information, RecordKind::CustomField)?,
            ),
        ]);
        self.dispatcher
            .post(&resource_path(SAVINGS, savings_id), &body)
            .await
    }

    pub async fn set_custom_field(
        &self,
        savings_id: &str,
        field_id: &str,
        value: impl Into<Body>,
    ) -> Result<Value, MambuClientError> {
        let path = custom_field_path(SAVINGS, savings_id, field_id, None);
        self.dispatcher
            .patch(&path, &custom_field_value(value))
            .await
    }

    pub async fn delete_custom_field(
        &self,
        savings_id: &str,
        field_id: &str,
    ) -> Result<Value, MambuClientError> {
        self.dispatcher
            .delete(&custom_field_path(SAVINGS, savings_id, field_id, None))
            .await
    }
}
