// Unit tests for REST path composition

use crate::url_builder::{
    CLIENTS, LOANS, SAVINGS, TRANSACTIONS, build_path, custom_field_path, resource_path,
};

#[test]
fn given_no_segments_when_build_path_then_empty_string() {
    let path = build_path(std::iter::empty::<Option<&str>>());

    assert_eq!(path, "");
}

#[test]
fn given_single_resource_when_build_path_then_bare_collection() {
    assert_eq!(build_path([Some(LOANS)]), "loans");
}

#[test]
fn given_resource_id_and_sub_resource_when_build_path_then_joined_in_order() {
    let path = build_path([Some(LOANS), Some("42"), Some(TRANSACTIONS)]);

    assert_eq!(path, "loans/42/transactions");
}

/// **VALUE**: An absent segment in any position behaves as if it had never
/// been passed.
///
/// **WHY THIS MATTERS**: Optional identifiers are threaded straight through
/// from callers. A `None` in the middle must not leave `//` in the path.
///
/// **BUG THIS CATCHES**: Would catch joining before filtering, or treating
/// `Some("")` differently from `None`.
#[test]
fn given_absent_segments_anywhere_when_build_path_then_same_as_omitting_them() {
    let cases = [("clients", "7"), ("savings", "abc"), ("documents", "x-1")];

    for (a, b) in cases {
        let expected = build_path([Some(a), Some(b)]);

        assert_eq!(build_path([Some(a), None, Some(b)]), expected);
        assert_eq!(build_path([None, Some(a), Some(b), None]), expected);
        assert_eq!(build_path([Some(a), Some(""), Some(b)]), expected);
    }
}

#[test]
fn given_segment_with_slash_when_build_path_then_left_unescaped() {
    assert_eq!(build_path([Some(CLIENTS), Some("a/b")]), "clients/a/b");
}

#[test]
fn given_optional_id_when_resource_path_then_id_appended_only_if_present() {
    assert_eq!(resource_path(SAVINGS, None), "savings");
    assert_eq!(resource_path(SAVINGS, Some("S1")), "savings/S1");
}

#[test]
fn given_group_index_when_custom_field_path_then_index_is_last_segment() {
    assert_eq!(
        custom_field_path(SAVINGS, "S1", "nickname", None),
        "savings/S1/custominformation/nickname"
    );
    assert_eq!(
        custom_field_path(CLIENTS, "C1", "phones", Some(-1)),
        "clients/C1/custominformation/phones/-1"
    );
}
