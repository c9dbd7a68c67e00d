use crate::dispatcher::Dispatcher;
use crate::error::MambuClientError;
use crate::resources::{envelope, expect_kind};
use crate::url_builder::{DOCUMENTS, build_path, resource_path};

use common::ErrorLocation;
use models::{Body, RecordKind};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

/// Entity collections that can hold documents.
pub const ATTACHMENT_HOLDERS: &[&str] = &[
    "clients",
    "groups",
    "savings",
    "loans",
    "savingsProducts",
    "loanProducts",
    "branches",
    "centres",
    "users",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentHolder {
    Clients,
    Groups,
    Savings,
    Loans,
    SavingsProducts,
    LoanProducts,
    Branches,
    Centres,
    Users,
}

impl AttachmentHolder {
    pub const ALL: [AttachmentHolder; 9] = [
        AttachmentHolder::Clients,
        AttachmentHolder::Groups,
        AttachmentHolder::Savings,
        AttachmentHolder::Loans,
        AttachmentHolder::SavingsProducts,
        AttachmentHolder::LoanProducts,
        AttachmentHolder::Branches,
        AttachmentHolder::Centres,
        AttachmentHolder::Users,
    ];

    /// Path segment naming the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentHolder::Clients => "clients",
            AttachmentHolder::Groups => "groups",
            AttachmentHolder::Savings => "savings",
            AttachmentHolder::Loans => "loans",
            AttachmentHolder::SavingsProducts => "savingsProducts",
            AttachmentHolder::LoanProducts => "loanProducts",
            AttachmentHolder::Branches => "branches",
            AttachmentHolder::Centres => "centres",
            AttachmentHolder::Users => "users",
        }
    }
}

impl fmt::Display for AttachmentHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttachmentHolder {
    type Err = MambuClientError;

    #[track_caller]
    fn from_str(entity: &str) -> Result<Self, Self::Err> {
        let location = ErrorLocation::from(Location::caller());
        AttachmentHolder::ALL
            .into_iter()
            .find(|holder| holder.as_str() == entity)
            .ok_or_else(|| MambuClientError::UnknownEntity {
                entity: entity.to_string(),
                allowed: ATTACHMENT_HOLDERS,
                location,
            })
    }
}

/// `documents` resource.
#[derive(Debug, Clone)]
pub struct Attachments {
    dispatcher: Dispatcher,
}

impl Attachments {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn get(&self, document_id: &str) -> Result<Value, MambuClientError> {
        self.dispatcher
            .get(&resource_path(DOCUMENTS, Some(document_id)), None)
            .await
    }

    /// Upload `content` described by `document` (holder key and type, name,
    /// file extension). The content is sent base64-encoded.
    pub async fn create(
        &self,
        document: impl Into<Body>,
        content: &[u8],
    ) -> Result<Value, MambuClientError> {
        let body = upload_body(document.into(), content)?;
        self.dispatcher
            .post(&resource_path(DOCUMENTS, None), &body)
            .await
    }

    pub async fn delete(&self, document_id: &str) -> Result<Value, MambuClientError> {
        self.dispatcher
            .delete(&resource_path(DOCUMENTS, Some(document_id)))
            .await
    }

    /// Documents attached to `entity_id` of the `entity` collection.
    ///
    /// # Errors
    /// [`MambuClientError::UnknownEntity`] before any request when `entity`
    /// is not one of [`ATTACHMENT_HOLDERS`].
    pub async fn get_by_entity(
        &self,
        entity: &str,
        entity_id: &str,
    ) -> Result<Value, MambuClientError> {
        let holder = entity.parse::<AttachmentHolder>()?;
        self.get_for(holder, entity_id).await
    }

    pub async fn get_for(
        &self,
        holder: AttachmentHolder,
        entity_id: &str,
    ) -> Result<Value, MambuClientError> {
        let path = build_path([Some(holder.as_str()), Some(entity_id), Some(DOCUMENTS)]);
        self.dispatcher.get(&path, None).await
    }

    pub async fn get_for_client(&self, client_id: &str) -> Result<Value, MambuClientError> {
        self.get_for(AttachmentHolder::Clients, client_id).await
    }

    pub async fn get_for_loan(&self, loan_id: &str) -> Result<Value, MambuClientError> {
        self.get_for(AttachmentHolder::Loans, loan_id).await
    }

    pub async fn get_for_savings(&self, savings_id: &str) -> Result<Value, MambuClientError> {
        self.get_for(AttachmentHolder::Savings, savings_id).await
    }

    pub async fn get_for_user(&self, user_id: &str) -> Result<Value, MambuClientError> {
        self.get_for(AttachmentHolder::Users, user_id).await
    }
}

/// `{"document": ..., "documentContent": <base64>}`
#[track_caller]
pub fn upload_body(document: Body, content: &[u8]) -> Result<Body, MambuClientError> {
    let document = expect_kind(document, RecordKind::Document)?;
    Ok(envelope([
        ("document", Some(document)),
        ("documentContent", Some(Body::from(STANDARD.encode(content)))),
    ]))
}
