use crate::ModelError;

use common::ErrorLocation;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

/// Entity kinds that have a closed field vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Client,
    Address,
    CustomField,
    IdDocument,
    ClientQuery,
    Loan,
    LoanQuery,
    LoanFilter,
    LoanTransaction,
    SavingsAccount,
    SavingsQuery,
    SavingsTransaction,
    Document,
}

impl RecordKind {
    pub const ALL: [RecordKind; 13] = [
        RecordKind::Client,
        RecordKind::Address,
        RecordKind::CustomField,
        RecordKind::IdDocument,
        RecordKind::ClientQuery,
        RecordKind::Loan,
        RecordKind::LoanQuery,
        RecordKind::LoanFilter,
        RecordKind::LoanTransaction,
        RecordKind::SavingsAccount,
        RecordKind::SavingsQuery,
        RecordKind::SavingsTransaction,
        RecordKind::Document,
    ];

    /// Key used for this kind in schema configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Client => "client",
            RecordKind::Address => "address",
            RecordKind::CustomField => "custom_field",
            RecordKind::IdDocument => "id_document",
            RecordKind::ClientQuery => "client_query",
            RecordKind::Loan => "loan",
            RecordKind::LoanQuery => "loan_query",
            RecordKind::LoanFilter => "loan_filter",
            RecordKind::LoanTransaction => "loan_transaction",
            RecordKind::SavingsAccount => "savings_account",
            RecordKind::SavingsQuery => "savings_query",
            RecordKind::SavingsTransaction => "savings_transaction",
            RecordKind::Document => "document",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = ModelError;

    #[track_caller]
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RecordKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ModelError::UnknownKind {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
