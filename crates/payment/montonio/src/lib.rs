//! Client helpers for the Montonio payment gateway.
//!
//! Builds signed payment tokens and redirect URLs, extracts the merchant
//! reference from returned tokens and prepares bank list requests.
//! No HTTP requests are made here.

pub mod banks;
pub mod credentials;
pub mod environment;
pub mod errors;
mod jwt;
pub mod payment;
pub mod payment_request;

pub use banks::{bank_list_request, bank_list_url, BankListRequest};
pub use credentials::Credentials;
pub use environment::Environment;
pub use errors::MontonioError;
pub use payment::{decode_payment_token, payment_token, payment_url, reference_from_payment_token};
pub use payment_request::{Currency, PaymentInfo};
