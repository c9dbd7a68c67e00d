use crate::dates::DateLike;
use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::resources::{
    custom_field_value, envelope, expect_kind, expect_kinds, set_custom_fields_concurrently,
};
use crate::url_builder::{
    CLIENTS, GROUPS, LOANS, SEARCH, TRANSACTIONS, build_path, custom_field_path, resource_path,
};

use models::{Body, ModelError, Record, RecordKind, SchemaRegistry};

use std::sync::Arc;

use serde_json::Value;

const FULL_DETAILS: &str = "fullDetails";
const FILTER_CONSTRAINTS: &str = "filterConstraints";

const EXPECTED_MATURITY_DATE: &str = "EXPECTED_MATURITY_DATE";
const FIRST_REPAYMENT_DATE: &str = "FIRST_REPAYMENT_DATE";
const FILTER_TODAY: &str = "TODAY";
const FILTER_ON: &str = "ON";

/// `loans` resource.
#[derive(Debug, Clone)]
pub struct Loans {
    dispatcher: Dispatcher,
    schema: Arc<SchemaRegistry>,
}

impl Loans {
    pub(crate) fn new(dispatcher: Dispatcher, schema: Arc<SchemaRegistry>) -> Self {
        Self { dispatcher, schema }
    }

    pub async fn get(
        &self,
        loan_id: Option<&str>,
        params: Option<&Record>,
    ) -> Result<Value, MambuClientError> {
        self.get_path(&resource_path(LOANS, loan_id), params).await
    }

    pub async fn get_full_details(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        let params = self
            .schema
            .record_from(RecordKind::LoanQuery, [(FULL_DETAILS, true)])?;
        self.get(Some(loan_id), Some(&params)).await
    }

    /// `clients/{id}/loans`, or every loan when `client_id` is absent or empty.
    pub async fn get_for_client(
        &self,
        client_id: Option<&str>,
        params: Option<&Record>,
    ) -> Result<Value, MambuClientError> {
        let client_id = client_id.filter(|id| !id.is_empty());
        let path = build_path([client_id.map(|_| CLIENTS), client_id, Some(LOANS)]);
        self.get_path(&path, params).await
    }

    /// `groups/{id}/loans`, or every loan when `group_id` is absent or empty.
    pub async fn get_for_group(
        &self,
        group_id: Option<&str>,
        params: Option<&Record>,
    ) -> Result<Value, MambuClientError> {
        let group_id = group_id.filter(|id| !id.is_empty());
        let path = build_path([group_id.map(|_| GROUPS), group_id, Some(LOANS)]);
        self.get_path(&path, params).await
    }

    async fn get_path(&self, path: &str, params: Option<&Record>) -> Result<Value, MambuClientError> {
        let query = params.map(Record::to_query);
        self.dispatcher.get(path, query.as_deref()).await
    }

    /// The loan's statement.
    pub async fn get_transactions(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        let path = build_path([Some(LOANS), Some(loan_id), Some(TRANSACTIONS)]);
        self.dispatcher.get(&path, None).await
    }

    pub async fn create(
        &self,
        loan: impl Into<Body>,
        custom_information: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        self.create_or_update(None, loan.into(), custom_information)
            .await
    }

    pub async fn update(
        &self,
        loan_id: &str,
        loan: impl Into<Body>,
        custom_information: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        self.create_or_update(Some(loan_id), loan.into(), custom_information)
            .await
    }

    async fn create_or_update(
        &self,
        loan_id: Option<&str>,
        loan: Body,
        custom_information: Option<Vec<Record>>,
    ) -> Result<Value, MambuClientError> {
        let body = envelope([
            ("loanAccount", Some(expect_kind(loan, RecordKind::Loan)?)),
            (
                "customInformation",
                expect_kinds(custom_information, RecordKind::CustomField)?,
            ),
        ]);
        self.dispatcher
            .post(&resource_path(LOANS, loan_id), &body)
            .await
    }

    pub async fn delete(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.dispatcher
            .delete(&resource_path(LOANS, Some(loan_id)))
            .await
    }

    pub async fn set_custom_field(
        &self,
        loan_id: &str,
        field_id: &str,
        value: impl Into<Body>,
    ) -> Result<Value, MambuClientError> {
        let path = custom_field_path(LOANS, loan_id, field_id, None);
        self.dispatcher
            .patch(&path, &custom_field_value(value))
            .await
    }

    pub async fn set_custom_fields(
        &self,
        loan_id: &str,
        fields: &[Record],
    ) -> Result<Vec<Value>, MambuClientError> {
        set_custom_fields_concurrently(&self.dispatcher, LOANS, loan_id, fields).await
    }

    pub async fn delete_custom_field(
        &self,
        loan_id: &str,
        field_id: &str,
    ) -> Result<Value, MambuClientError> {
        self.dispatcher
            .delete(&custom_field_path(LOANS, loan_id, field_id, None))
            .await
    }

    /// POST `loans/search` with the given filter records as constraints.
    pub async fn search(&self, constraints: Vec<Record>) -> Result<Value, MambuClientError> {
        let constraints = expect_kinds(Some(constraints), RecordKind::LoanFilter)?;
        let body = envelope([(FILTER_CONSTRAINTS, constraints)]);
        let path = build_path([Some(LOANS), Some(SEARCH)]);
        self.dispatcher.post(&path, &body).await
    }

    /// Search on a single constraint. Parts left as `None` are not sent.
    pub async fn search_by_filter(
        &self,
        selection: &str,
        element: Option<&str>,
        value: Option<Body>,
        second_value: Option<Body>,
    ) -> Result<Value, MambuClientError> {
        let constraint = filter_constraint(&self.schema, selection, element, value, second_value)?;
        self.search(vec![constraint]).await
    }

    /// Loans whose expected maturity date is today.
    pub async fn principals_due_today(&self) -> Result<Value, MambuClientError> {
        self.search_by_filter(EXPECTED_MATURITY_DATE, Some(FILTER_TODAY), None, None)
            .await
    }

    pub async fn principals_due_on(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<Value, MambuClientError> {
        let date = date.into().mambu_date()?;
        self.search_by_filter(EXPECTED_MATURITY_DATE, Some(FILTER_ON), Some(date.into()), None)
            .await
    }

    /// Loans whose first repayment falls today.
    pub async fn repayments_due_today(&self) -> Result<Value, MambuClientError> {
        self.search_by_filter(FIRST_REPAYMENT_DATE, Some(FILTER_TODAY), None, None)
            .await
    }

    pub async fn repayments_due_on(
        &self,
        date: impl Into<DateLike>,
    ) -> Result<Value, MambuClientError> {
        let date = date.into().mambu_date()?;
        self.search_by_filter(FIRST_REPAYMENT_DATE, Some(FILTER_ON), Some(date.into()), None)
            .await
    }
}

/// One `filterConstraints` entry holding only the supplied parts.
#[track_caller]
pub fn filter_constraint(
    schema: &SchemaRegistry,
    selection: &str,
    element: Option<&str>,
    value: Option<Body>,
    second_value: Option<Body>,
) -> Result<Record, ModelError> {
    let mut constraint = schema.record(RecordKind::LoanFilter);
    constraint.set("filterSelection", selection)?;
    if let Some(element) = element {
        constraint.set("filterElement", element)?;
    }
    if let Some(value) = value {
        constraint.set("value", value)?;
    }
    if let Some(second_value) = second_value {
        constraint.set("secondValue", second_value)?;
    }
    Ok(constraint)
}
