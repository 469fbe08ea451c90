//! Tests for Dispatcher
//!
//! These tests verify:
//! - Operation names routed case-insensitively
//! - Store outcomes mapped to success/failure responses
//! - Unknown and malformed requests never touch the store

use std::sync::Arc;
use std::thread;

use tallykv::protocol::{
    decode_request, decode_response, encode_response, Request, Response, StatusCode,
};
use tallykv::{Dispatcher, Key, Store, TallyError};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_dispatcher() -> Dispatcher {
    Dispatcher::new(Arc::new(Store::new()))
}

fn request(operation: &str, key: Key, value: f64) -> Request {
    Request::new(operation, key, value)
}

// =============================================================================
// Routing Tests
// =============================================================================

#[test]
fn test_read_absent_key() {
    let dispatcher = setup_dispatcher();

    let response = dispatcher.dispatch(&request("READ", Key::new_v4(), 99.0));

    assert_eq!(response, Response::ok(0.0));
    assert!(dispatcher.store().is_empty());
}

#[test]
fn test_create_uses_request_value() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();

    let response = dispatcher.dispatch(&request("CREATE", key, 7.25));

    assert_eq!(response.code, 200);
    assert_eq!(response.value, 7.25);
    assert!(response.error.is_empty());
    assert_eq!(dispatcher.store().read(&key), 7.25);
}

#[test]
fn test_increment_ignores_request_value() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();
    dispatcher.store().create_if_absent(key, 1.0).unwrap();

    let response = dispatcher.dispatch(&request("INCREMENT", key, 1000.0));

    assert_eq!(response, Response::ok(2.0));
}

#[test]
fn test_operation_names_are_case_insensitive() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();

    assert!(dispatcher.dispatch(&request("create", key, 5.0)).is_success());
    assert_eq!(dispatcher.dispatch(&request("Increment", key, 0.0)).value, 6.0);
    assert_eq!(dispatcher.dispatch(&request("increment", key, 0.0)).value, 7.0);
    assert_eq!(dispatcher.dispatch(&request("decrement", key, 0.0)).value, 6.0);
    assert_eq!(dispatcher.dispatch(&request("rEaD", key, 0.0)).value, 6.0);
}

#[test]
fn test_short_operation_aliases() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();

    assert_eq!(dispatcher.dispatch(&request("setx", key, 3.0)), Response::ok(3.0));
    assert_eq!(dispatcher.dispatch(&request("INCX", key, 0.0)), Response::ok(4.0));
    assert_eq!(dispatcher.dispatch(&request("decx", key, 0.0)), Response::ok(3.0));
    assert_eq!(dispatcher.dispatch(&request("GET", key, 0.0)), Response::ok(3.0));
}

// =============================================================================
// Failure Mapping Tests
// =============================================================================

#[test]
fn test_create_existing_maps_to_failure() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();

    dispatcher.dispatch(&request("CREATE", key, 1.0));
    let response = dispatcher.dispatch(&request("CREATE", key, 2.0));

    assert_eq!(response.status(), Some(StatusCode::Failure));
    assert_eq!(response.error, TallyError::AlreadyExists.to_string());
    assert_eq!(dispatcher.store().read(&key), 1.0);
}

#[test]
fn test_increment_missing_maps_to_failure() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();

    let response = dispatcher.dispatch(&request("INCREMENT", key, 0.0));

    assert_eq!(response.code, 422);
    assert_eq!(response.value, 0.0);
    assert_eq!(response.error, TallyError::NotFound.to_string());
    assert!(!dispatcher.store().contains(&key));
}

#[test]
fn test_unknown_operation_leaves_store_unchanged() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();

    let result = dispatcher.execute(&request("FROB", key, 1.0));
    assert!(matches!(result, Err(TallyError::UnknownOperation(ref name)) if name == "FROB"));

    let response = dispatcher.dispatch(&request("FROB", key, 1.0));
    assert_eq!(response.code, 422);
    assert!(response.error.contains("FROB"));
    assert!(dispatcher.store().is_empty());
}

#[test]
fn test_empty_operation_is_unknown() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4().to_string();

    let decoded = decode_request(&[("operation", ""), ("key", key.as_str()), ("value", "1")]);
    let response = dispatcher.handle(decoded);

    assert_eq!(response.code, 422);
    assert!(response.error.starts_with("Unknown operation"));
    assert!(dispatcher.store().is_empty());
}

#[test]
fn test_all_failures_share_one_status_code() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();
    dispatcher.dispatch(&request("CREATE", key, 0.0));

    let codes = [
        dispatcher.dispatch(&request("CREATE", key, 0.0)).code,
        dispatcher.dispatch(&request("DECREMENT", Key::new_v4(), 0.0)).code,
        dispatcher.dispatch(&request("NOPE", key, 0.0)).code,
        dispatcher
            .handle(Err(TallyError::MalformedRequest("bad".to_string())))
            .code,
    ];

    assert!(codes.iter().all(|&c| c == StatusCode::Failure.as_u16()));
}

// =============================================================================
// Malformed Request Tests
// =============================================================================

#[test]
fn test_handle_malformed_key() {
    let dispatcher = setup_dispatcher();

    let decoded = decode_request(&[("operation", "CREATE"), ("key", "not-a-uuid"), ("value", "1")]);
    let response = dispatcher.handle(decoded);

    assert_eq!(response.code, 422);
    assert!(response.error.starts_with("Malformed request"));
    assert!(dispatcher.store().is_empty());
}

#[test]
fn test_handle_malformed_value() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4().to_string();

    let decoded = decode_request(&[
        ("operation", "CREATE"),
        ("key", key.as_str()),
        ("value", "twelve"),
    ]);
    let response = dispatcher.handle(decoded);

    assert_eq!(response.code, 422);
    assert!(response.error.starts_with("Malformed request"));
    assert!(dispatcher.store().is_empty());
}

#[test]
fn test_handle_wraps_other_decode_errors_as_malformed() {
    let dispatcher = setup_dispatcher();

    let response = dispatcher.handle(Err(TallyError::Http("body".to_string())));

    assert_eq!(response.code, 422);
    assert!(response.error.starts_with("Malformed request"));
}

#[test]
fn test_handle_valid_request() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();
    let key_str = key.to_string();

    let decoded = decode_request(&[
        ("operation", "create"),
        ("key", key_str.as_str()),
        ("value", "2.5"),
    ]);

    assert_eq!(dispatcher.handle(decoded), Response::ok(2.5));
    assert_eq!(dispatcher.store().read(&key), 2.5);
}

#[test]
fn test_nan_create_yields_decodable_response() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();
    let key_str = key.to_string();

    let decoded = decode_request(&[
        ("operation", "CREATE"),
        ("key", key_str.as_str()),
        ("value", "NaN"),
    ]);
    let response = dispatcher.handle(decoded);
    assert!(response.is_success());

    let bytes = encode_response(&response).unwrap();
    let round_tripped = decode_response(&bytes).unwrap();

    assert_eq!(round_tripped.code, 200);
    assert!(round_tripped.value.is_nan());
    assert!(round_tripped.error.is_empty());
    assert!(dispatcher.store().read(&key).is_nan());
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_cloned_dispatchers_share_store() {
    let dispatcher = setup_dispatcher();
    let key = Key::new_v4();
    dispatcher.dispatch(&request("CREATE", key, 0.0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dispatcher = dispatcher.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    assert!(dispatcher.dispatch(&request("INCREMENT", key, 0.0)).is_success());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(dispatcher.dispatch(&request("READ", key, 0.0)).value, 400.0);
}
