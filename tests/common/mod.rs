#![allow(dead_code)]

use coolpay::CoolpayClient;
use coolpay::domain::ports::{HttpResponse, Method};
use coolpay::infrastructure::in_memory::StubTransport;
use serde_json::{Value, json};

pub const API_URL: &str = "http://coolpay.test/api";

pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_URL, path)
}

pub fn unauthenticated_client() -> (CoolpayClient, StubTransport) {
    let transport = StubTransport::new();
    let client = CoolpayClient::with_api_url(Box::new(transport.clone()), API_URL);
    (client, transport)
}

/// A client already logged in as `valid-user`, holding `valid-token`.
pub async fn authenticated_client() -> (CoolpayClient, StubTransport) {
    let (client, transport) = unauthenticated_client();
    transport
        .stub(
            Method::Post,
            endpoint("/login"),
            HttpResponse::json(200, json!({ "token": "valid-token" })),
        )
        .await;
    client
        .authenticate("valid-user", "valid-apikey")
        .await
        .expect("login should succeed");
    (client, transport)
}

pub async fn respond(transport: &StubTransport, method: Method, path: &str, status: u16, body: Value) {
    transport
        .stub(method, endpoint(path), HttpResponse::json(status, body))
        .await;
}

pub fn payment_json(id: &str, amount: &str) -> Value {
    json!({
        "status": "processing",
        "recipient_id": "test_recipient",
        "id": id,
        "currency": "GBP",
        "amount": amount
    })
}
