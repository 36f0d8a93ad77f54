// Rust guideline compliant 2026-08-24

//! Unit tests for fault capture, flattening, and classification.

use anyhow::Context;
use verdict_core::{
    flatten_messages, is_cancellation_shaped, Cancelled, Fault, FaultKind,
    NULL_FAULT_DETAIL,
};

#[test]
fn test_flatten_two_level_chain_is_root_cause_first() {
    let error = anyhow::anyhow!("B").context("A");
    let messages = flatten_messages(Some(&error));
    assert_eq!(messages, vec!["B".to_string(), "A".to_string()]);
}

#[test]
fn test_flatten_three_level_chain_is_root_cause_first() {
    let error = anyhow::anyhow!("root")
        .context("middle")
        .context("outer");
    let messages = flatten_messages(Some(&error));
    assert_eq!(
        messages,
        vec![
            "root".to_string(),
            "middle".to_string(),
            "outer".to_string()
        ]
    );
}

#[test]
fn test_flatten_single_error_yields_one_message() {
    let error = anyhow::anyhow!("only");
    assert_eq!(flatten_messages(Some(&error)), vec!["only".to_string()]);
}

#[test]
fn test_flatten_absent_fault_yields_sentinel() {
    let messages = flatten_messages(None);
    assert_eq!(messages, vec![NULL_FAULT_DETAIL.to_string()]);
}

#[test]
fn test_flatten_preserves_source_error_text() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let error = anyhow::Error::new(io_error).context("loading config");
    let messages = flatten_messages(Some(&error));
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "file missing");
    assert_eq!(messages[1], "loading config");
}

#[test]
fn test_cancellation_recognized_at_top_level() {
    let error = anyhow::Error::new(Cancelled::new("user aborted"));
    assert!(is_cancellation_shaped(Some(&error)));
}

#[test]
fn test_cancellation_recognized_deep_in_chain() {
    let error = anyhow::Error::new(Cancelled::new("user aborted"))
        .context("saving changes")
        .context("handling request");
    assert!(is_cancellation_shaped(Some(&error)));
}

#[test]
fn test_ordinary_fault_is_not_cancellation_shaped() {
    let error = anyhow::anyhow!("disk full").context("saving changes");
    assert!(!is_cancellation_shaped(Some(&error)));
}

#[test]
fn test_absent_fault_is_not_cancellation_shaped() {
    assert!(!is_cancellation_shaped(None));
}

#[test]
fn test_capture_classifies_ordinary_fault() {
    let error = anyhow::anyhow!("boom");
    let fault = Fault::capture(&error);
    assert_eq!(fault.kind(), FaultKind::Ordinary);
    assert!(!fault.is_cancelled());
}

#[test]
fn test_capture_classifies_cancelled_fault() {
    let error = anyhow::Error::new(Cancelled::new("timeout budget spent"));
    let fault = Fault::capture(&error);
    assert_eq!(fault.kind(), FaultKind::Cancelled);
    assert!(fault.is_cancelled());
}

#[test]
fn test_capture_records_messages_and_trace() {
    let error = anyhow::anyhow!("inner").context("outer");
    let fault = Fault::capture(&error);
    assert_eq!(fault.root_cause(), Some("inner"));
    assert_eq!(fault.outer_message(), Some("outer"));
    assert!(
        fault.trace().contains("outer"),
        "trace should include the outer message"
    );
}

#[test]
fn test_cancelled_display_includes_reason() {
    let marker = Cancelled::new("user aborted");
    assert_eq!(
        marker.to_string(),
        "operation was cancelled: user aborted"
    );
}
