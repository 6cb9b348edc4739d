use crate::config::DEFAULT_API_URL;
use crate::domain::payment::{Amount, Payment};
use crate::domain::ports::{HttpRequest, HttpResponse, HttpTransportBox, Method};
use crate::domain::recipient::Recipient;
use crate::domain::schema::{
    CreatePaymentRequest, CreateRecipientRequest, LoginRequest, LoginResponse, NewPayment,
    NewRecipient, PaymentEnvelope, PaymentList, RecipientEnvelope, RecipientList,
};
use crate::domain::session::Token;
use crate::error::{CoolpayError, Result, require_present};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Client for the Coolpay API.
///
/// One instance is one logical session: `authenticate` stores the returned
/// token and every later call sends it as a bearer credential. The token sits
/// behind a lock, so the client can be shared across tasks, but concurrent
/// `authenticate` calls are last-write-wins and a call already in flight keeps
/// using the token it read when it started.
pub struct CoolpayClient {
    api_url: String,
    transport: HttpTransportBox,
    token: RwLock<Option<Token>>,
}

impl CoolpayClient {
    /// Creates an unauthenticated client for the default API root.
    pub fn new(transport: HttpTransportBox) -> Self {
        Self::with_api_url(transport, DEFAULT_API_URL)
    }

    /// Creates an unauthenticated client for the API rooted at `api_url`.
    pub fn with_api_url(transport: HttpTransportBox, api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            transport,
            token: RwLock::new(None),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The token of the current session, if `authenticate` has succeeded.
    pub async fn token(&self) -> Option<Token> {
        self.token.read().await.clone()
    }

    /// Logs in and stores the returned token as the session token.
    ///
    /// A rejected login leaves any previous token in place.
    pub async fn authenticate(&self, username: &str, apikey: &str) -> Result<Token> {
        require_present(username, "username")?;
        require_present(apikey, "apikey")?;

        let body = to_json(&LoginRequest { username, apikey })?;
        let request = HttpRequest::new(Method::Post, self.url("/login")).json(body);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            warn!(status = response.status, "Login rejected");
            return Err(CoolpayError::AuthenticationError {
                status: response.status,
            });
        }

        let login: LoginResponse = response.decode()?;
        let token = Token::new(login.token);
        *self.token.write().await = Some(token.clone());

        info!(username, "Authenticated");
        Ok(token)
    }

    /// Registers a new recipient called `name`.
    pub async fn add_recipient(&self, name: &str) -> Result<Recipient> {
        require_present(name, "name")?;
        let token = self.require_token().await?;

        let body = to_json(&CreateRecipientRequest {
            recipient: NewRecipient { name },
        })?;
        let request = HttpRequest::new(Method::Post, self.url("/recipients"))
            .header("Authorization", token.bearer())
            .json(body);
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            return Err(unauthorized(&response));
        }
        if response.status != 201 {
            return Err(api_error(response));
        }

        let envelope: RecipientEnvelope = response.decode()?;
        let recipient = Recipient::try_from(envelope.recipient)?;
        debug!(id = recipient.id(), "Recipient created");
        Ok(recipient)
    }

    /// Lists recipients in server order, optionally filtered by exact `name`.
    pub async fn get_recipients(&self, name: Option<&str>) -> Result<Vec<Recipient>> {
        let token = self.require_token().await?;

        let mut request = HttpRequest::new(Method::Get, self.url("/recipients"))
            .header("Authorization", token.bearer());
        if let Some(name) = name {
            request = request.query("name", name);
        }
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            return Err(unauthorized(&response));
        }
        if !response.is_success() {
            return Err(api_error(response));
        }

        let list: RecipientList = response.decode()?;
        list.recipients
            .into_iter()
            .map(Recipient::try_from)
            .collect()
    }

    /// Sends `amount` in `currency` to the recipient with id `recipient_id`.
    pub async fn create_payment(
        &self,
        amount: Decimal,
        currency: &str,
        recipient_id: &str,
    ) -> Result<Payment> {
        let token = self.require_token().await?;
        let amount = Amount::new(amount)?;
        require_present(currency, "currency")?;
        require_present(recipient_id, "recipient_id")?;

        let body = to_json(&CreatePaymentRequest {
            payment: NewPayment {
                amount: amount.to_f64()?,
                currency,
                recipient_id,
            },
        })?;
        let request = HttpRequest::new(Method::Post, self.url("/payments"))
            .header("Authorization", token.bearer())
            .json(body);
        let response = self.transport.send(request).await?;

        let status = response.status;
        match status {
            401 => return Err(unauthorized(&response)),
            422 => {
                return Err(CoolpayError::ValidationError(
                    "recipient does not exist".to_string(),
                ));
            }
            _ if !response.is_success() => return Err(api_error(response)),
            _ => {}
        }

        let envelope: PaymentEnvelope = response.decode()?;
        let payment = Payment::try_from(envelope.payment)?;
        debug!(id = payment.id(), status = payment.status(), "Payment created");
        Ok(payment)
    }

    /// Lists payments in server order.
    ///
    /// Every entry is validated; one invalid entry fails the whole call.
    pub async fn get_payments(&self) -> Result<Vec<Payment>> {
        let token = self.require_token().await?;

        let request = HttpRequest::new(Method::Get, self.url("/payments"))
            .header("Authorization", token.bearer());
        let response = self.transport.send(request).await?;

        if response.status == 401 {
            return Err(unauthorized(&response));
        }
        if !response.is_success() {
            return Err(api_error(response));
        }

        let list: PaymentList = response.decode()?;
        list.payments.into_iter().map(Payment::try_from).collect()
    }

    async fn require_token(&self) -> Result<Token> {
        self.token.read().await.clone().ok_or_else(|| {
            CoolpayError::UnauthorizedError("client is not authenticated".to_string())
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn to_json<T: Serialize>(body: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(body)?)
}

fn unauthorized(response: &HttpResponse) -> CoolpayError {
    warn!(status = response.status, "Request rejected as unauthorized");
    CoolpayError::UnauthorizedError("token rejected by server".to_string())
}

fn api_error(response: HttpResponse) -> CoolpayError {
    warn!(status = response.status, "API request failed");
    CoolpayError::ApiError {
        status: response.status,
        body: response.body,
    }
}
