//! Single entry point bundling every resource client.

use crate::config::MambuConfig;
use crate::dispatcher::Dispatcher;
use crate::error::CoreError;
use crate::resources::{
    Attachments, Clients, CustomFields, LoanProducts, LoanTransactions, Loans, Savings,
    SavingsTransactions,
};

use models::{Body, ModelError, Record, RecordKind, SchemaRegistry};

use std::sync::Arc;

use log::info;

/// All resource clients of one platform tenant.
///
/// Every client shares one dispatcher (one connection pool, one set of
/// credentials) and one schema registry.
#[derive(Debug, Clone)]
pub struct MambuApi {
    dispatcher: Dispatcher,
    schema: Arc<SchemaRegistry>,
    clients: Clients,
    loans: Loans,
    loan_transactions: LoanTransactions,
    savings: Savings,
    savings_transactions: SavingsTransactions,
    attachments: Attachments,
    custom_fields: CustomFields,
    loan_products: LoanProducts,
}

impl MambuApi {
    /// # Errors
    ///
    /// Returns [`CoreError::Config`] if `config` fails validation, or
    /// [`CoreError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &MambuConfig, schema: Arc<SchemaRegistry>) -> Result<Self, CoreError> {
        config.validate()?;
        let dispatcher = Dispatcher::new(config)?;
        info!("Mambu client ready for {}", dispatcher.base_url());
        Ok(Self::with_dispatcher(dispatcher, schema))
    }

    /// Facade using the built-in field vocabularies.
    pub fn with_builtin_schema(config: &MambuConfig) -> Result<Self, CoreError> {
        Self::new(config, Arc::new(SchemaRegistry::builtin()))
    }

    fn with_dispatcher(dispatcher: Dispatcher, schema: Arc<SchemaRegistry>) -> Self {
        Self {
            clients: Clients::new(dispatcher.clone(), Arc::clone(&schema)),
            loans: Loans::new(dispatcher.clone(), Arc::clone(&schema)),
            loan_transactions: LoanTransactions::new(dispatcher.clone(), Arc::clone(&schema)),
            savings: Savings::new(dispatcher.clone()),
            savings_transactions: SavingsTransactions::new(dispatcher.clone()),
            attachments: Attachments::new(dispatcher.clone()),
            custom_fields: CustomFields::new(dispatcher.clone()),
            loan_products: LoanProducts::new(dispatcher.clone()),
            dispatcher,
            schema,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// An empty record of `kind` validated against this facade's schema.
    pub fn record(&self, kind: RecordKind) -> Record {
        self.schema.record(kind)
    }

    #[track_caller]
    pub fn record_from<I, K, V>(&self, kind: RecordKind, fields: I) -> Result<Record, ModelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Body>,
    {
        self.schema.record_from(kind, fields)
    }

    pub fn clients(&self) -> &Clients {
        &self.clients
    }

    pub fn loans(&self) -> &Loans {
        &self.loans
    }

    pub fn loan_transactions(&self) -> &LoanTransactions {
        &self.loan_transactions
    }

    pub fn savings(&self) -> &Savings {
        &self.savings
    }

    pub fn savings_transactions(&self) -> &SavingsTransactions {
        &self.savings_transactions
    }

    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }

    pub fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }

    pub fn loan_products(&self) -> &LoanProducts {
        &self.loan_products
    }
}
