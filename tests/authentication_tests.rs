mod common;

use common::{authenticated_client, endpoint, unauthenticated_client};
use coolpay::domain::ports::{HttpResponse, Method};
use coolpay::{CoolpayError, Token};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn test_credentials_must_be_present() {
    let (client, transport) = unauthenticated_client();

    for (username, apikey) in [("", "test"), ("test", ""), ("", "")] {
        let result = client.authenticate(username, apikey).await;
        assert!(
            matches!(result, Err(CoolpayError::ValidationError(_))),
            "expected validation error for {username:?}/{apikey:?}"
        );
    }

    assert!(transport.requests().await.is_empty());
    assert!(client.token().await.is_none());
}

#[tokio::test]
async fn test_validation_names_missing_field() {
    let (client, _) = unauthenticated_client();

    match client.authenticate("", "test").await {
        Err(CoolpayError::ValidationError(msg)) => assert!(msg.contains("username")),
        other => panic!("unexpected result: {other:?}"),
    }
    match client.authenticate("test", "").await {
        Err(CoolpayError::ValidationError(msg)) => assert!(msg.contains("apikey")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_successful_login_stores_token() {
    let (client, transport) = authenticated_client().await;

    assert_eq!(client.token().await, Some(Token::new("valid-token")));

    let login = transport.last_request().await.unwrap();
    assert_eq!(login.url, endpoint("/login"));
    assert_eq!(
        login.body,
        Some(json!({ "username": "valid-user", "apikey": "valid-apikey" }))
    );
    assert_eq!(login.header_value("Authorization"), None);
}

#[tokio::test]
async fn test_authenticate_returns_token() {
    let (client, transport) = unauthenticated_client();
    transport
        .stub(
            Method::Post,
            endpoint("/login"),
            HttpResponse::json(200, json!({ "token": "session-1" })),
        )
        .await;

    let token = client.authenticate("valid-user", "valid-apikey").await.unwrap();
    assert_eq!(token.as_str(), "session-1");
}

#[tokio::test]
async fn test_relogin_overwrites_token() {
    let (client, transport) = authenticated_client().await;
    transport
        .stub(
            Method::Post,
            endpoint("/login"),
            HttpResponse::json(200, json!({ "token": "fresh-token" })),
        )
        .await;

    client.authenticate("valid-user", "valid-apikey").await.unwrap();
    assert_eq!(client.token().await, Some(Token::new("fresh-token")));
}

#[tokio::test]
async fn test_rejected_login_raises_authentication_error() {
    let (client, transport) = unauthenticated_client();
    transport
        .stub(
            Method::Post,
            endpoint("/login"),
            HttpResponse::new(404, "Internal Server Error"),
        )
        .await;

    let result = client.authenticate("valid-user", "valid-apikey").await;
    assert!(matches!(
        result,
        Err(CoolpayError::AuthenticationError { status: 404 })
    ));
    assert!(client.token().await.is_none());
}

#[tokio::test]
async fn test_login_body_without_token_is_decode_error() {
    let (client, transport) = unauthenticated_client();
    transport
        .stub(
            Method::Post,
            endpoint("/login"),
            HttpResponse::json(200, json!({ "session": "abc" })),
        )
        .await;

    let result = client.authenticate("valid-user", "valid-apikey").await;
    assert!(matches!(result, Err(CoolpayError::DecodeError(_))));
    assert!(client.token().await.is_none());
}

#[tokio::test]
async fn test_authenticated_calls_require_login() {
    let (client, transport) = unauthenticated_client();

    assert!(matches!(
        client.add_recipient("recipient").await,
        Err(CoolpayError::UnauthorizedError(_))
    ));
    assert!(matches!(
        client.get_recipients(None).await,
        Err(CoolpayError::UnauthorizedError(_))
    ));
    assert!(matches!(
        client.create_payment(dec!(1.2), "GBP", "test_recipient").await,
        Err(CoolpayError::UnauthorizedError(_))
    ));
    assert!(matches!(
        client.get_payments().await,
        Err(CoolpayError::UnauthorizedError(_))
    ));

    assert!(transport.requests().await.is_empty());
}
