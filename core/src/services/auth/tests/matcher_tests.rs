//! Tests for account resolution with non-unique identifiers

use std::sync::Arc;

use crate::repositories::MockAccountLookup;
use crate::services::auth::matcher::{AccountMatcher, MatchError};

use super::mocks::test_account;

fn matcher_with(accounts: Vec<crate::domain::entities::Account>) -> AccountMatcher<MockAccountLookup> {
    AccountMatcher::new(Arc::new(MockAccountLookup::with_accounts(accounts)))
}

#[tokio::test]
async fn test_unique_email_resolves_without_phone() {
    let matcher = matcher_with(vec![test_account(1, "a@x.com", Some("5551234"))]);

    let account = matcher.resolve("a@x.com", None).await.unwrap();
    assert_eq!(account.id, 1);
}

#[tokio::test]
async fn test_unique_email_ignores_supplied_phone() {
    let matcher = matcher_with(vec![test_account(1, "a@x.com", Some("5551234"))]);

    // A unique email wins outright; the phone is not used to disqualify it
    let account = matcher.resolve("a@x.com", Some("9999999")).await.unwrap();
    assert_eq!(account.id, 1);
}

#[tokio::test]
async fn test_unknown_email_is_not_found() {
    let matcher = matcher_with(vec![test_account(1, "a@x.com", None)]);

    let result = matcher.resolve("nobody@x.com", None).await;
    assert!(matches!(result, Err(MatchError::NotFound)));
}

#[tokio::test]
async fn test_ambiguous_email_requires_phone() {
    let matcher = matcher_with(vec![
        test_account(1, "b@x.com", Some("111")),
        test_account(2, "b@x.com", Some("222")),
    ]);

    let result = matcher.resolve("b@x.com", None).await;
    assert!(matches!(result, Err(MatchError::PhoneRequired)));
}

#[tokio::test]
async fn test_ambiguous_email_with_phone_selects_the_account() {
    let matcher = matcher_with(vec![
        test_account(1, "b@x.com", Some("111")),
        test_account(2, "b@x.com", Some("222")),
    ]);

    let account = matcher.resolve("b@x.com", Some("222")).await.unwrap();
    assert_eq!(account.id, 2);
}

#[tokio::test]
async fn test_ambiguous_email_with_unmatched_phone_is_not_found() {
    let matcher = matcher_with(vec![
        test_account(1, "b@x.com", Some("111")),
        test_account(2, "b@x.com", Some("222")),
    ]);

    let result = matcher.resolve("b@x.com", Some("333")).await;
    assert!(matches!(result, Err(MatchError::NotFound)));
}

#[tokio::test]
async fn test_duplicate_email_phone_tuple_is_not_disclosed() {
    // Two records with the same (email, phone) tuple: resolution refuses
    // to pick one, and the caller only learns "not found"
    let matcher = matcher_with(vec![
        test_account(1, "b@x.com", Some("111")),
        test_account(2, "b@x.com", Some("111")),
    ]);

    let result = matcher.resolve("b@x.com", Some("111")).await;
    assert!(matches!(result, Err(MatchError::NotFound)));
}

#[tokio::test]
async fn test_deleted_accounts_never_match() {
    let mut deleted = test_account(1, "a@x.com", None);
    deleted.mark_deleted();
    let matcher = matcher_with(vec![deleted]);

    let result = matcher.resolve("a@x.com", None).await;
    assert!(matches!(result, Err(MatchError::NotFound)));
}

#[tokio::test]
async fn test_resolution_is_case_insensitive() {
    let matcher = matcher_with(vec![test_account(1, "Alice@X.Com", None)]);

    let account = matcher.resolve("alice@x.com", None).await.unwrap();
    assert_eq!(account.id, 1);
}
