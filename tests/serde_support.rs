//! Serde integration, enabled with the `serde` feature.

#![cfg(feature = "serde")]

use credential_args::{OperationArguments, TargetUri};

#[test]
fn arguments_serialize_as_ordered_map() {
    let args = OperationArguments::parse("protocol=https\nhost=github.com\nwwwauth[]=Basic\n\n")
        .unwrap();
    let json = serde_json::to_string(&args).unwrap();
    assert_eq!(
        json,
        r#"{"protocol":"https","host":"github.com","wwwauth[]":"Basic"}"#
    );
}

#[test]
fn arguments_deserialize_preserving_order() {
    let args: OperationArguments =
        serde_json::from_str(r#"{"host":"github.com","protocol":"https"}"#).unwrap();
    assert_eq!(args.to_string(), "host=github.com\nprotocol=https\n\n");
}

#[test]
fn arguments_deserialize_rejects_line_breaks() {
    let result: Result<OperationArguments, _> =
        serde_json::from_str(r#"{"username":"a\nb"}"#);
    assert!(result.is_err());
}

#[test]
fn parsed_empty_key_survives_json() {
    let args = OperationArguments::parse("=value\nprotocol=https\n\n").unwrap();
    let json = serde_json::to_string(&args).unwrap();
    let back: OperationArguments = serde_json::from_str(&json).unwrap();
    assert_eq!(back, args);
}

#[test]
fn arguments_deserialize_rejects_separator_in_key() {
    let result: Result<OperationArguments, _> = serde_json::from_str(r#"{"a=b":"c"}"#);
    assert!(result.is_err());
}

#[test]
fn target_uri_serializes_as_string() {
    let uri = TargetUri::from_fields(Some("https"), Some("onpremis:8080"), Some("repo")).unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, r#""https://onpremis:8080/repo""#);

    let back: TargetUri = serde_json::from_str(&json).unwrap();
    assert_eq!(back, uri);
}

#[test]
fn target_uri_deserialize_rejects_invalid() {
    let result: Result<TargetUri, _> = serde_json::from_str(r#""no-scheme""#);
    assert!(result.is_err());
}
