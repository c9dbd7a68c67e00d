use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::url_builder::{CUSTOM_FIELD_SETS, CUSTOM_FIELDS, resource_path};

use std::fmt;

use serde_json::Value;

const SET_TYPE_PARAM: &str = "type";

/// Which entity a custom field set applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomFieldSetType {
    ClientInfo,
    GroupInfo,
    LoanAccountInfo,
    SavingsAccountInfo,
    BranchInfo,
    CentreInfo,
    UserInfo,
}

impl CustomFieldSetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomFieldSetType::ClientInfo => "CLIENT_INFO",
            CustomFieldSetType::GroupInfo => "GROUP_INFO",
            CustomFieldSetType::LoanAccountInfo => "LOAN_ACCOUNT_INFO",
            CustomFieldSetType::SavingsAccountInfo => "SAVINGS_ACCOUNT_INFO",
            CustomFieldSetType::BranchInfo => "BRANCH_INFO",
            CustomFieldSetType::CentreInfo => "CENTRE_INFO",
            CustomFieldSetType::UserInfo => "USER_INFO",
        }
    }
}

impl fmt::Display for CustomFieldSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `customfields` and `customfieldsets` resources.
#[derive(Debug, Clone)]
pub struct CustomFields {
    dispatcher: Dispatcher,
}

impl CustomFields {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Definition of one custom field.
    pub async fn get(&self, field_id: &str) -> Result<Value, MambuClientError> {
        self.dispatcher
            .get(&resource_path(CUSTOM_FIELDS, Some(field_id)), None)
            .await
    }

    /// Custom field sets, optionally narrowed to one entity type.
    pub async fn get_sets(
        &self,
        set_type: Option<CustomFieldSetType>,
    ) -> Result<Value, MambuClientError> {
        let query: Vec<(String, String)> = set_type
            .map(|set_type| (SET_TYPE_PARAM.to_string(), set_type.as_str().to_string()))
            .into_iter()
            .collect();
        self.dispatcher
            .get(&resource_path(CUSTOM_FIELD_SETS, None), Some(query.as_slice()))
            .await
    }
}
