use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::url_builder::{LOAN_PRODUCTS, resource_path};

use serde_json::Value;

const ENCODED_KEY: &str = "encodedKey";

/// `loanproducts` resource.
#[derive(Debug, Clone)]
pub struct LoanProducts {
    dispatcher: Dispatcher,
}

impl LoanProducts {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn get(&self, product_id: Option<&str>) -> Result<Value, MambuClientError> {
        self.dispatcher
            .get(&resource_path(LOAN_PRODUCTS, product_id), None)
            .await
    }

    /// The product's `encodedKey`.
    pub async fn get_encoded_key(&self, product_id: &str) -> Result<String, MambuClientError> {
        let product = self.get(Some(product_id)).await?;
        product
            .get(ENCODED_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| MambuClientError::missing_response_field(ENCODED_KEY))
    }
}
