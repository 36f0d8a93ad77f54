// Rust guideline compliant 2026-08-24

//! Unit tests for cross-response conversion.
//!
//! The absent-source path here is deliberately distinct from the
//! absent-fault path in the factory: converting from nothing yields
//! NotFound, while capturing nothing yields InternalError.

use verdict_core::{
    Cancelled, Response, ResponseStatus, NULL_RESPONSE_MESSAGE,
    NULL_RESPONSE_MESSAGE_BARE,
};

fn annotated_source() -> Response<i32> {
    let mut source = Response::ok_with_messages(7, ["first", "second"]);
    source.set_title("Import");
    source.set_execution_time(std::time::Duration::from_millis(250));
    source
}

#[test]
fn test_conversion_preserves_metadata() {
    let source = annotated_source();
    let converted = Response::<String>::converted_from(Some(&source));
    assert_eq!(converted.status(), source.status());
    assert_eq!(converted.success(), source.success());
    assert_eq!(converted.cancelled(), source.cancelled());
    assert_eq!(converted.title(), source.title());
    assert_eq!(converted.messages(), source.messages());
    assert_eq!(converted.execution_time(), source.execution_time());
}

#[test]
fn test_conversion_preserves_fault_and_cancelled_flag() {
    let error = anyhow::Error::new(Cancelled::new("user aborted"));
    let source = Response::<()>::exception(Some(&error));
    let converted = Response::<Vec<i32>>::converted_from(Some(&source));
    assert_eq!(converted.status(), ResponseStatus::BadRequest);
    assert!(converted.cancelled());
    assert_eq!(converted.fault(), source.fault());
}

#[test]
fn test_conversion_drops_blank_messages() {
    let source = Response::<()>::builder(ResponseStatus::Ok)
        .messages(["kept", "   ", "", "\t", "also kept"])
        .build();
    let converted = Response::<()>::converted_from(Some(&source));
    assert_eq!(
        converted.messages(),
        ["kept".to_string(), "also kept".to_string()]
    );
}

#[test]
fn test_absent_source_yields_not_found() {
    let converted = Response::<i32>::converted_from(None::<&Response<()>>);
    assert_eq!(converted.status(), ResponseStatus::NotFound);
    assert!(!converted.success());
    assert_eq!(converted.messages(), [NULL_RESPONSE_MESSAGE.to_string()]);
}

#[test]
fn test_absent_source_with_value_uses_bare_message() {
    let converted = Response::<i32>::converted_with(None::<&Response<()>>, 5);
    assert_eq!(converted.status(), ResponseStatus::NotFound);
    assert_eq!(
        converted.messages(),
        [NULL_RESPONSE_MESSAGE_BARE.to_string()]
    );
}

#[test]
fn test_same_shape_value_is_carried_over() {
    let source = Response::ok_with(vec![1, 2, 3]);
    let converted = Response::<Vec<i32>>::converted_from(Some(&source));
    assert_eq!(converted.value(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_different_shape_value_is_defaulted() {
    let source = Response::ok_with(7i32);
    let converted = Response::<Vec<String>>::converted_from(Some(&source));
    assert_eq!(
        converted.value(),
        Some(&Vec::new()),
        "container payloads default to empty when no carry-over applies"
    );

    let scalar = Response::<i64>::converted_from(Some(&source));
    assert!(
        scalar.value().is_none(),
        "scalar payloads stay absent when no carry-over applies"
    );
}

#[test]
fn test_explicit_value_always_wins() {
    let source = Response::ok_with(vec![1, 2, 3]);
    let converted = Response::<Vec<i32>>::converted_with(Some(&source), vec![9]);
    assert_eq!(converted.value(), Some(&vec![9]));
}

#[test]
fn test_value_less_source_converts_to_generic_target() {
    let source = Response::<()>::error_message("broken");
    let converted = Response::<Vec<u8>>::converted_from(Some(&source));
    assert_eq!(converted.status(), ResponseStatus::InternalError);
    assert_eq!(converted.messages(), ["broken".to_string()]);
    assert_eq!(converted.value(), Some(&Vec::new()));
}

#[test]
fn test_double_conversion_to_same_shape_is_identity() {
    let source = annotated_source();
    let once = Response::<i32>::converted_from(Some(&source));
    let twice = Response::<i32>::converted_from(Some(&once));
    assert_eq!(twice, source);
}

#[test]
fn test_double_conversion_is_idempotent_for_containers() {
    let mut source = Response::ok_with(vec![1, 2]);
    source.set_title("Batch");
    let once = Response::<Vec<i32>>::converted_from(Some(&source));
    let twice = Response::<Vec<i32>>::converted_from(Some(&once));
    assert_eq!(once, twice);
}
