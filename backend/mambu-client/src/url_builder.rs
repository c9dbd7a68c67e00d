//! REST path composition.
//!
//! Paths are `/`-joined segments in caller order. Absent segments (`None` or
//! the empty string) are skipped, so `{resource}[/{id}][/{sub}[/{sub_id}]]`
//! collapses to the bare collection name when no identifiers are given.
//! Segment values are not escaped or normalized.

pub const CLIENTS: &str = "clients";
pub const GROUPS: &str = "groups";
pub const LOANS: &str = "loans";
pub const SAVINGS: &str = "savings";
pub const DOCUMENTS: &str = "documents";
pub const CUSTOM_FIELDS: &str = "customfields";
pub const CUSTOM_FIELD_SETS: &str = "customfieldsets";
pub const LOAN_PRODUCTS: &str = "loanproducts";
pub const TRANSACTIONS: &str = "transactions";
pub const CUSTOM_INFORMATION: &str = "custominformation";
pub const SEARCH: &str = "search";

/// Join the present segments with `/`.
pub fn build_path<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    segments
        .into_iter()
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// `{resource}[/{id}]`
pub fn resource_path(resource: &str, id: Option<&str>) -> String {
    build_path([Some(resource), id])
}

/// `{resource}/{id}/custominformation/{field}[/{index}]`
pub fn custom_field_path(resource: &str, id: &str, field_id: &str, index: Option<i64>) -> String {
    let index = index.map(|i| i.to_string());
    build_path([
        Some(resource),
        Some(id),
        Some(CUSTOM_INFORMATION),
        Some(field_id),
        index.as_deref(),
    ])
}
