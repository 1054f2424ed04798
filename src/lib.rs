//! Typed Rust client for the SmsAero HTTP API.
//!
//! The design splits into a domain layer of strong types, a transport layer
//! for wire-format quirks (gateway mirrors, URL-embedded credentials,
//! response classification), and a small client layer orchestrating requests
//! over blocking I/O.
//!
//! ```rust,no_run
//! use smsaero::{ApiKey, Email, MessageText, PhoneNumber, Recipients, SendSmsOptions, SmsAeroClient};
//!
//! fn main() -> Result<(), smsaero::SmsAeroError> {
//!     let mut client = SmsAeroClient::new(
//!         Email::new("admin@smsaero.ru")?,
//!         ApiKey::new("...")?,
//!     );
//!     let to = Recipients::one(PhoneNumber::new(79031234567)?);
//!     let text = MessageText::new("Hello, World!")?;
//!     let response = client.send_sms(to, text, SendSmsOptions::default())?;
//!     println!("{response:#}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_TIMEOUT, SmsAeroClient, SmsAeroClientBuilder, SmsAeroError};
pub use domain::{
    AddContact, ApiKey, BlacklistEntryId, CallbackUrl, CardId, ContactFilter, ContactId, Email,
    FlashCallFilter, FlashCallId, GroupId, HlrId, MessageText, PhoneNumber, Recipients,
    SendSmsOptions, SendType, SendingId, Sex, Signature, SmsId, SmsListFilter, UnixTimestamp,
    ValidationError, ViberMessage,
};
