use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::resources::{
    CUSTOM_FIELD_ID, CUSTOM_FIELD_SET_GROUP_INDEX, custom_field_value, envelope, expect_kind,
    expect_kinds, set_custom_fields_concurrently,
};
use crate::url_builder::{CLIENTS, custom_field_path, resource_path};

use models::{Body, Record, RecordKind, SchemaRegistry};

use std::sync::Arc;

use serde_json::Value;

const FULL_DETAILS: &str = "fullDetails";
const CUSTOM_INFORMATION_KEY: &str = "customInformation";

/// `clients` resource.
#[derive(Debug, Clone)]
pub struct Clients {
    dispatcher: Dispatcher,
    schema: Arc<SchemaRegistry>,
}

impl Clients {
    pub(crate) fn new(dispatcher: Dispatcher, schema: Arc<SchemaRegistry>) -> Self {
        Self { dispatcher, schema }
    }

    /// One client when `client_id` is given, otherwise the filtered list.
    pub async fn get(
        &self,
        client_id: Option<&str>,
        params: Option<&Record>,
    ) -> Result<Value, MambuClientError> {
        let query = params.map(Record::to_query);
        self.dispatcher
            .get(&resource_path(CLIENTS, client_id), query.as_deref())
            .await
    }

    /// The client with addresses, id documents and custom information.
    pub async fn get_full_details(&self, client_id: &str) -> Result<Value, MambuClientError> {
        let params = self
            .schema
            .record_from(RecordKind::ClientQuery, [(FULL_DETAILS, true)])?;
        self.get(Some(client_id), Some(&params)).await
    }

    pub async fn create(
        &self,
        client: impl Into<Body>,
        addresses: Option<Vec<Record>>,
        custom_information: Option<Vec<Record>>,
        id_documents: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        self.create_or_update(None, client.into(), addresses, custom_information, id_documents)
            .await
    }

    /// Overwrite the client. Sections left out are not touched; sections
    /// sent replace what the platform holds.
    pub async fn update(
        &self,
        client_id: &str,
        client: impl Into<Body>,
        addresses: Option<Vec<Record>>,
        custom_information: Option<Vec<Record>>,
        id_documents: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        self.create_or_update(
            Some(client_id),
            client.into(),
            addresses,
            custom_information,
            id_documents,
        )
        .await
    }

    async fn create_or_update(
        &self,
        client_id: Option<&str>,
        client: Body,
        addresses: Option<Vec<Record>>,
        custom_information: Option<Vec<Record>>,
        id_documents: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        let body = envelope([
            ("client", Some(expect_kind(client, RecordKind::Client)?)),
            ("addresses", expect_kinds(addresses, RecordKind::Address)?),
            (
                CUSTOM_INFORMATION_KEY,
                expect_kinds(custom_information, RecordKind::CustomField)?,
            ),
            ("idDocuments", expect_kinds(id_documents, RecordKind::IdDocument)?),
        ]);
        self.dispatcher
            .post(&resource_path(CLIENTS, client_id), &body)
            .await
    }

    /// Set one custom field value.
    ///
    /// `index` addresses a field inside a grouped field set
    /// (`customFieldSetGroupIndex`); `-1` starts a new group.
    pub async fn set_custom_field(
        &self,
        client_id: &str,
        field_id: &str,
        value: impl Into<Body>,
        index: Option<i64>,
    ) -> Result<Value, MambuClientError> {
        let path = custom_field_path(CLIENTS, client_id, field_id, index);
        self.dispatcher
            .patch(&path, &custom_field_value(value))
            .await
    }

    /// Set every field in `fields` (custom field records) concurrently.
    pub async fn set_custom_fields(
        &self,
        client_id: &str,
        fields: &[Record],
    ) -> Result<Vec<Value>, MambuClientError> {
        set_custom_fields_concurrently(&self.dispatcher, CLIENTS, client_id, fields).await
    }

    pub async fn delete_custom_field(
        &self,
        client_id: &str,
        field_id: &str,
        index: Option<i64>,
    ) -> Result<Value, MambuClientError> {
        self.dispatcher
            .delete(&custom_field_path(CLIENTS, client_id, field_id, index))
            .await
    }

    /// Replace the client's addresses with the single `address`.
    pub async fn update_addresses(
        &self,
        client_id: &str,
        address: Record,
    ) -> Result<Value, MambuClientError> {
        let address = address.expect_kind(RecordKind::Address)?;
        let body = envelope([("addresses", Some(Body::from(vec![address])))]);
        self.dispatcher
            .post(&resource_path(CLIENTS, Some(client_id)), &body)
            .await
    }

    /// Largest `customFieldSetGroupIndex` among the client's values for
    /// `field_id`, or `None` when the client has no grouped value for it.
    pub async fn max_field_index(
        &self,
        client_id: &str,
        field_id: &str,
    ) -> Result<Option<i64>, MambuClientError> {
        let details = self.get_full_details(client_id).await?;
        Ok(max_group_index(&details, field_id))
    }
}

pub(crate) fn max_group_index(details: &Value, field_id: &str) -> Option<i64> {
    details
        .get(CUSTOM_INFORMATION_KEY)?
        .as_array()?
        .iter()
        .filter(|value| value.get(CUSTOM_FIELD_ID).and_then(Value::as_str) == Some(field_id))
        .filter_map(|value| value.get(CUSTOM_FIELD_SET_GROUP_INDEX).and_then(Value::as_i64))
        .max()
}
