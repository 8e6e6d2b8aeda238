//! Client for the TBC/UFC ECOMM card-payment gateway.
//!
//! Implements the DMS (dual message system) flow against the bank's
//! MerchantHandler endpoint: register an authorization, check its result,
//! execute it, reverse it, and close the payment day. Authentication is a
//! PKCS#12 client certificate plus passphrase presented over mutual TLS; the
//! gateway answers with a line-oriented `KEY: VALUE` body that
//! [`EcommResponse`] parses into a field mapping.
//!
//! ```no_run
//! use tbc_ecomm::{EcommClient, EcommConfig, MakeTransaction, RegisterTransaction};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = EcommClient::new(EcommConfig::from_env()?);
//!
//! let registered = client
//!     .register_transaction(RegisterTransaction {
//!         amount: Some("12.50".to_string()),
//!         client_ip_address: Some("192.168.1.1".to_string()),
//!         description: Some("Order 42".to_string()),
//!     })
//!     .await?;
//! let transaction_id = registered.trans_id().unwrap_or_default().to_string();
//!
//! client
//!     .make_transaction(MakeTransaction {
//!         transaction_id: Some(transaction_id),
//!         amount: Some("12.50".to_string()),
//!         client_ip_address: Some("192.168.1.1".to_string()),
//!         description: None,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod request;
pub mod response;
pub mod transformers;
pub mod types;

pub use client::{execute_request, EcommClient};
pub use config::{ConfigurationError, EcommConfig, EcommConfigUpdate, DEFAULT_MERCHANT_HANDLER_URL};
pub use errors::{ApiClientError, ConnectorError, CustomResult};
pub use request::{Method, Request, RequestContent};
pub use response::EcommResponse;
pub use transformers::{
    CancelTransaction, CheckTransaction, MakeTransaction, RefundTransaction, RegisterTransaction,
};
pub use types::{
    Currency, EcommCommand, MinorUnit, Response, ThreeDSecureStatus, TransactionResult,
    MAX_RESPONSE_BODY_SIZE,
};
