//! Built-in field vocabularies, one list per record kind.

use crate::RecordKind;

const CLIENT: &[&str] = &[
    "id",
    "encodedKey",
    "state",
    "firstName",
    "middleName",
    "lastName",
    "homePhone",
    "mobilePhone1",
    "mobilePhone2",
    "emailAddress",
    "gender",
    "birthDate",
    "preferredLanguage",
    "notes",
    "clientRoleId",
    "assignedBranchKey",
    "assignedCentreKey",
    "assignedUserKey",
    "groupKeys",
    "loanCycle",
    "groupLoanCycle",
    "creationDate",
    "approvedDate",
    "activationDate",
    "closedDate",
    "lastModifiedDate",
];

const ADDRESS: &[&str] = &[
    "encodedKey",
    "parentKey",
    "line1",
    "line2",
    "city",
    "region",
    "postcode",
    "country",
    "indexInList",
];

const CUSTOM_FIELD: &[&str] = &[
    "customFieldID",
    "value",
    "customFieldSetGroupIndex",
    "linkedEntityKeyValue",
];

const ID_DOCUMENT: &[&str] = &[
    "encodedKey",
    "clientKey",
    "documentType",
    "documentId",
    "issuingAuthority",
    "validUntil",
    "indexInList",
    "identificationDocumentTemplateKey",
];

const CLIENT_QUERY: &[&str] = &[
    "firstName",
    "lastName",
    "idDocument",
    "birthDate",
    "state",
    "branchId",
    "centreId",
    "creditOfficerUsername",
    "fullDetails",
    "offset",
    "limit",
];

const LOAN: &[&str] = &[
    "id",
    "encodedKey",
    "loanName",
    "accountHolderType",
    "accountHolderKey",
    "accountState",
    "productTypeKey",
    "loanAmount",
    "interestRate",
    "interestChargeFrequency",
    "interestCalculationMethod",
    "repaymentInstallments",
    "repaymentPeriodCount",
    "repaymentPeriodUnit",
    "principalRepaymentInterval",
    "gracePeriod",
    "gracePeriodType",
    "penaltyRate",
    "arrearsTolerancePeriod",
    "expectedDisbursementDate",
    "firstRepaymentDate",
    "expectedMaturityDate",
    "tranches",
    "guarantees",
    "disbursementDetails",
    "assignedBranchKey",
    "assignedCentreKey",
    "assignedUserKey",
    "notes",
];

const LOAN_QUERY: &[&str] = &[
    "accountState",
    "branchId",
    "centreId",
    "creditOfficerUsername",
    "fullDetails",
    "offset",
    "limit",
];

const LOAN_FILTER: &[&str] = &[
    "filterSelection",
    "filterElement",
    "value",
    "secondValue",
    "dataFieldType",
];

const LOAN_TRANSACTION: &[&str] = &[
    "type",
    "amount",
    "date",
    "method",
    "notes",
    "identifier",
    "receiptNumber",
    "bankNumber",
    "checkNumber",
    "bankAccountNumber",
    "bankRoutingNumber",
    "firstRepaymentDate",
];

const SAVINGS_ACCOUNT: &[&str] = &[
    "encodedKey",
    "id",
    "accountHolderType",
    "accountHolderKey",
    "productTypeKey",
    "name",
    "accountType",
    "accountState",
    "balance",
    "accruedInterest",
    "maturityDate",
    "targetAmount",
    "recommendedDepositAmount",
    "maxWidthdrawlAmount",
    "lockedBalance",
    "overdrafAmount",
    "overdraftInterestAccrued",
    "overdraftExpiryDate",
    "overdraftLimit",
    "allowOverdraft",
    "assignedBranchKey",
    "assignedCentreKey",
    "interestPaymentPoint",
    "interestPaymentDates",
    "withholdingTaxSourceKey",
    "overdraftInterestRateSource",
    "overdraftInterestRate",
    "overdraftInterestRateReviewCount",
    "overdraftInterestRateReviewUnit",
    "notes",
];

const SAVINGS_QUERY: &[&str] = &[
    "branchId",
    "centreId",
    "creditOfficerUsername",
    "accountState",
    "fullDetails",
    "offset",
    "limit",
];

const SAVINGS_TRANSACTION: &[&str] = &[
    "type",
    "amount",
    "toSavingsAccount",
    "toLoanAccount",
    "date",
    "method",
    "identifier",
    "accountName",
    "receiptNumber",
    "bankNumber",
    "checkNumber",
    "bankAccountNumber",
    "bankRoutingNumber",
    "notes",
];

const DOCUMENT: &[&str] = &["documentHolderKey", "documentHolderType", "name", "type"];

// Spellings such as `maxWidthdrawlAmount` and `overdrafAmount` are the
// platform's own field names.
pub(crate) fn fields_for(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Client => CLIENT,
        RecordKind::Address => ADDRESS,
        RecordKind::CustomField => CUSTOM_FIELD,
        RecordKind::IdDocument => ID_DOCUMENT,
        RecordKind::ClientQuery => CLIENT_QUERY,
        RecordKind::Loan => LOAN,
        RecordKind::LoanQuery => LOAN_QUERY,
        RecordKind::LoanFilter => LOAN_FILTER,
        RecordKind::LoanTransaction => LOAN_TRANSACTION,
        RecordKind::SavingsAccount => SAVINGS_ACCOUNT,
        RecordKind::SavingsQuery => SAVINGS_QUERY,
        RecordKind::SavingsTransaction => SAVINGS_TRANSACTION,
        RecordKind::Document => DOCUMENT,
    }
}
