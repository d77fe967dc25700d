//! Integration tests for the special-key dispatch path.
//!
//! These tests drive the public API end to end — use case, resolver, and
//! emitter together — against the macOS table, covering every input shape a
//! caller can hand us: missing, null, wrong type, unknown name, known name,
//! and the fire-and-forget form.

use std::sync::Arc;

use serde_json::{json, Value};
use specialkey_emulator::{KeyEmitter, MockKeyEmitter, TriggerError, TriggerKeyUseCase};

/// Builds a use case pinned to the macOS table with a recording emitter.
fn make_emulator() -> (TriggerKeyUseCase, Arc<MockKeyEmitter>) {
    let emitter = Arc::new(MockKeyEmitter::new());
    let uc = TriggerKeyUseCase::for_platform(Arc::clone(&emitter) as Arc<dyn KeyEmitter>, "macos");
    (uc, emitter)
}

#[test]
fn test_null_key_reports_an_error() {
    let (uc, em) = make_emulator();

    let outcome = uc.trigger_with_callback(Value::Null, |outcome| outcome);

    assert!(outcome.is_err());
    assert!(em.emitted.lock().unwrap().is_empty());
}

#[test]
fn test_missing_key_reports_an_error() {
    let (uc, em) = make_emulator();

    let outcome = uc.trigger_with_callback(None::<&str>, |outcome| outcome);

    assert!(outcome.is_err());
    assert!(em.emitted.lock().unwrap().is_empty());
}

#[test]
fn test_numeric_key_reports_an_error() {
    let (uc, em) = make_emulator();

    let outcome = uc.trigger_with_callback(1234, |outcome| outcome);

    assert!(outcome.is_err());
    assert!(em.emitted.lock().unwrap().is_empty());
}

#[test]
fn test_unknown_key_name_reports_an_error() {
    let (uc, em) = make_emulator();

    let outcome = uc.trigger_with_callback("1234", |outcome| outcome);

    assert!(outcome.is_err());
    assert!(em.emitted.lock().unwrap().is_empty());
}

#[test]
fn test_known_key_name_succeeds() {
    let (uc, em) = make_emulator();

    let outcome = uc.trigger_with_callback("NX_KEYTYPE_ILLUMINATION_UP", |outcome| outcome);

    assert_eq!(outcome, Ok(21));
    assert_eq!(*em.emitted.lock().unwrap(), vec![21]);
}

#[test]
fn test_dispatch_without_a_callback_completes_silently() {
    let (uc, em) = make_emulator();

    // Neither outcome may panic or surface anywhere but the log.
    uc.trigger_detached("NX_KEYTYPE_ILLUMINATION_UP");
    uc.trigger_detached(json!(null));

    assert_eq!(*em.emitted.lock().unwrap(), vec![21]);
}

#[test]
fn test_failure_categories_are_distinguishable() {
    use specialkey_core::ResolveError;

    let (uc, _) = make_emulator();

    // Callers branch on the error variant instead of parsing diagnostics.
    match uc.trigger(json!(42)) {
        Err(TriggerError::Resolve(ResolveError::NameNotString(value))) => {
            assert_eq!(value, json!(42));
        }
        other => panic!("expected NameNotString, got {other:?}"),
    }
}

#[test]
fn test_emission_mismatch_is_reported() {
    let mut emitter = MockKeyEmitter::new();
    emitter.should_fail = true;
    let emitter = Arc::new(emitter);
    let uc = TriggerKeyUseCase::for_platform(Arc::clone(&emitter) as Arc<dyn KeyEmitter>, "macos");

    let outcome = uc.trigger("NX_KEYTYPE_PLAY");

    assert!(matches!(outcome, Err(TriggerError::EmissionMismatch { requested: 16, .. })));
}
