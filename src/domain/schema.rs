//! Wire bodies for each endpoint.
//!
//! Responses are decoded into these structs first, so a missing or mistyped
//! field surfaces as a decode error. Domain validation happens afterwards, in
//! the `TryFrom` conversions.

use super::payment::Payment;
use super::recipient::Recipient;
use crate::error::CoolpayError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub apikey: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct NewRecipient<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateRecipientRequest<'a> {
    pub recipient: NewRecipient<'a>,
}

#[derive(Debug, Deserialize)]
pub struct RecipientBody {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipientEnvelope {
    pub recipient: RecipientBody,
}

#[derive(Debug, Deserialize)]
pub struct RecipientList {
    pub recipients: Vec<RecipientBody>,
}

#[derive(Debug, Serialize)]
pub struct NewPayment<'a> {
    pub amount: f64,
    pub currency: &'a str,
    pub recipient_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentRequest<'a> {
    pub payment: NewPayment<'a>,
}

/// `amount` is accepted either as a JSON string (`"1.20"`) or a number.
#[derive(Debug, Deserialize)]
pub struct PaymentBody {
    pub status: String,
    pub recipient_id: String,
    pub id: String,
    pub currency: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct PaymentEnvelope {
    pub payment: PaymentBody,
}

#[derive(Debug, Deserialize)]
pub struct PaymentList {
    pub payments: Vec<PaymentBody>,
}

impl TryFrom<RecipientBody> for Recipient {
    type Error = CoolpayError;

    fn try_from(body: RecipientBody) -> Result<Self, Self::Error> {
        Recipient::new(body.name, body.id)
    }
}

impl TryFrom<PaymentBody> for Payment {
    type Error = CoolpayError;

    fn try_from(body: PaymentBody) -> Result<Self, Self::Error> {
        Payment::new(
            body.status,
            body.recipient_id,
            body.id,
            body.currency,
            body.amount,
        )
    }
}
