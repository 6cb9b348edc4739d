//! Client library for the Coolpay payment API.
//!
//! ```no_run
//! use coolpay::ClientConfig;
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> coolpay::Result<()> {
//! let client = ClientConfig::default().connect()?;
//! client.authenticate("user", "apikey").await?;
//! let recipient = client.add_recipient("Jake McFriend").await?;
//! let payment = client
//!     .create_payment(Decimal::new(1050, 2), "GBP", recipient.id())
//!     .await?;
//! println!("{} is {}", payment.id(), payment.status());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::client::CoolpayClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use domain::payment::{Amount, Payment};
pub use domain::recipient::Recipient;
pub use domain::session::Token;
pub use error::{CoolpayError, Result};
