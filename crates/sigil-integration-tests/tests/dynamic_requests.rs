//! The data-driven request path: names, hex arguments, JSON responses.

use serde_json::{Value, json};
use sigil::{
    Arguments, DispatchMode, DispatchSection, ErrorKind, Operation, OperationError, Output,
    Request, Sigil,
};
use sigil_test::vectors;

fn request(value: &Value) -> Request {
    Request::from_json(&value.to_string()).unwrap()
}

#[tokio::test]
async fn test_vectors_through_requests() {
    let sigil = Sigil::new();

    for v in vectors::ed25519().unwrap() {
        let req = request(&json!({
            "operation": "auth.sign",
            "message": hex::encode(&v.message),
            "key": hex::encode(&v.secret_key),
        }));
        let out = sigil.call(req).await.unwrap();
        assert_eq!(out.field(), "signature");
        assert_eq!(out.as_bytes(), v.signature.as_slice(), "line {}", v.line);
    }

    let mac_sets = [
        ("auth.mac", vectors::hmacsha384().unwrap()),
        ("alt.auth.hmacsha256", vectors::hmacsha256().unwrap()),
        ("alt.auth.hmacsha512", vectors::hmacsha512().unwrap()),
    ];
    for (name, set) in mac_sets {
        for v in set {
            let req = request(&json!({
                "operation": name,
                "message": hex::encode(&v.message),
                "key": v.key,
            }));
            let out = sigil.call(req).await.unwrap();
            assert_eq!(out, Output::Mac(v.tag.clone()), "{name} line {}", v.line);
        }
    }

    let hash_sets = [
        ("util.hash", vectors::sha384().unwrap()),
        ("alt.util.sha256", vectors::sha256().unwrap()),
        ("alt.util.sha512", vectors::sha512().unwrap()),
    ];
    for (name, set) in hash_sets {
        for v in set {
            let req = request(&json!({
                "operation": name,
                "message": hex::encode(&v.message),
            }));
            let out = sigil.call(req).await.unwrap();
            assert_eq!(out, Output::Hash(v.digest.clone()), "{name} line {}", v.line);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batch_preserves_order() {
    let sigil = Sigil::with_dispatch(&DispatchSection {
        mode: DispatchMode::Blocking,
        max_in_flight: 2,
    });
    let set = vectors::sha512().unwrap();

    let requests = set
        .iter()
        .map(|v| Request::new(Operation::Sha512, Arguments::message(v.message.clone())));
    let results = sigil.call_many(requests).await;

    assert_eq!(results.len(), set.len());
    for (result, v) in results.into_iter().zip(&set) {
        assert_eq!(result.unwrap(), Output::Hash(v.digest.clone()), "line {}", v.line);
    }
}

#[tokio::test]
async fn test_invalid_input_cases() {
    let sigil = Sigil::new();
    let cases = [
        // key passed to a hash
        (
            json!({"operation": "util.hash", "message": "", "key": "00"}),
            OperationError::UnexpectedArgument("key"),
        ),
        // missing key for a MAC
        (
            json!({"operation": "auth.mac", "message": "00"}),
            OperationError::MissingArgument("key"),
        ),
        // missing message
        (
            json!({"operation": "alt.util.sha256"}),
            OperationError::MissingArgument("message"),
        ),
        // 31-byte signing key
        (
            json!({"operation": "auth.sign", "message": "", "key": "11".repeat(31)}),
            OperationError::InvalidKeyLength {
                expected: &[32, 64],
                actual: 31,
            },
        ),
    ];

    for (value, expected) in cases {
        let err = sigil.call(request(&value)).await.unwrap_err();
        assert_eq!(err, expected, "{value}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    let err = sigil
        .call(request(&json!({"operation": "auth.sign", "message": "zz", "key": "00".repeat(32)})))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OperationError::InvalidEncoding {
            argument: "message",
            ..
        }
    ));
}

#[tokio::test]
async fn test_mismatched_keypair_is_primitive_failure() {
    let set = vectors::ed25519().unwrap();
    let mut keypair = set[0].seed().to_vec();
    keypair.extend_from_slice(&set[1].public_key);

    let sigil = Sigil::new();
    let err = sigil
        .call(Request::new(
            Operation::Sign,
            Arguments::message(Vec::<u8>::new()).with_key(keypair),
        ))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PrimitiveFailure);
}

#[tokio::test]
async fn test_json_responses() {
    let sigil = Sigil::new();

    let ok = sigil
        .respond(r#"{"operation":"alt.util.sha256","message":"616263"}"#)
        .await;
    let body: Value = serde_json::from_str(&ok.to_json().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"hash": "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"})
    );

    let failed = sigil
        .respond(r#"{"operation":"auth.sign","message":""}"#)
        .await;
    let body: Value = serde_json::from_str(&failed.to_json().unwrap()).unwrap();
    assert_eq!(body["error"]["kind"], "invalid_input");

    let unknown = sigil
        .respond(r#"{"operation":"alt.util.md5","message":""}"#)
        .await;
    let body: Value = serde_json::from_str(&unknown.to_json().unwrap()).unwrap();
    assert_eq!(body["error"]["kind"], "invalid_input");
    assert!(body["error"]["message"].as_str().unwrap().contains("alt.util.md5"));
}

#[tokio::test]
async fn test_null_and_misnamed_arguments_rejected() {
    let sigil = Sigil::new();

    let null_key = sigil
        .respond(r#"{"operation":"util.hash","message":"616263","key":null}"#)
        .await;
    let body: Value = serde_json::from_str(&null_key.to_json().unwrap()).unwrap();
    assert_eq!(body["error"]["kind"], "invalid_input");
    assert!(body["error"]["message"].as_str().unwrap().contains("key"));

    let misnamed = sigil
        .respond(r#"{"operation":"auth.sign","message":"","secretKey":"00"}"#)
        .await;
    let body: Value = serde_json::from_str(&misnamed.to_json().unwrap()).unwrap();
    assert_eq!(body["error"]["kind"], "invalid_input");
    assert!(body["error"]["message"].as_str().unwrap().contains("secretKey"));
}
