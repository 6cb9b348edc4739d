use crate::error::{CoolpayError, Result, require_present};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A strictly positive monetary amount.
///
/// Wraps `rust_decimal::Decimal` so amounts echoed back by the service
/// (e.g. `"1.20"`) keep their exact scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CoolpayError::ValidationError(
                "amount must be greater than 0".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount as sent on the wire, which takes a JSON float.
    pub fn to_f64(&self) -> Result<f64> {
        self.0.to_f64().ok_or_else(|| {
            CoolpayError::ValidationError(format!("amount {} is not representable", self.0))
        })
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = CoolpayError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A money transfer to a recipient, as reported by the service.
///
/// Payments are only ever read back from API responses and never mutated.
/// Like recipients, they are identified by their server-assigned `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    status: String,
    recipient_id: String,
    id: String,
    currency: String,
    amount: Amount,
}

impl Payment {
    pub fn new(
        status: impl Into<String>,
        recipient_id: impl Into<String>,
        id: impl Into<String>,
        currency: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self> {
        let status = status.into();
        let recipient_id = recipient_id.into();
        let id = id.into();
        let currency = currency.into();

        require_present(&status, "status")?;
        require_present(&recipient_id, "recipient_id")?;
        require_present(&id, "id")?;
        require_present(&currency, "currency")?;
        let amount = Amount::new(amount)?;

        Ok(Self {
            status,
            recipient_id,
            id,
            currency,
            amount,
        })
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn recipient_id(&self) -> &str {
        &self.recipient_id
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Payment {}
