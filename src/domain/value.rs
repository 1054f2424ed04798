use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account email used as the URL user-info component.
///
/// Invariant: non-empty after trimming.
pub struct Email(String);

impl Email {
    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated email.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SmsAero API key.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiKey(String);

impl ApiKey {
    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: "api_key" });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender signature (`sign`) attached to outgoing messages.
///
/// Invariant: non-empty after trimming. The value must be enabled in your
/// SmsAero account.
pub struct Signature(String);

impl Signature {
    /// JSON field name used by SmsAero (`sign`).
    pub const FIELD: &'static str = "sign";

    /// Create a validated [`Signature`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated signature.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Signature {
    /// The shared signature every account starts with.
    fn default() -> Self {
        Self("Sms Aero".to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Default messaging-channel code, passed through unopinionated.
pub struct SendType(u8);

impl SendType {
    /// Create a send-type code (no range validation is performed).
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the underlying code.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for SendType {
    fn default() -> Self {
        Self(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number in the bare-MSISDN form the gateway consumes (`number`).
///
/// Invariant: non-zero. Use [`PhoneNumber::parse`] for human-formatted input.
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// JSON field name used by SmsAero for a single recipient (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a phone number from already-normalized digits.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::InvalidPhoneNumber {
                input: "0".to_owned(),
            });
        }
        Ok(Self(value))
    }

    /// Parse and normalize a human-formatted phone number.
    ///
    /// Bare digit strings are accepted as-is; anything else goes through the
    /// `phonenumber` parser and is normalized via E.164. `default_region` is
    /// used when the input carries no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let raw = input.as_ref().trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            let value = raw
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidPhoneNumber {
                    input: raw.to_owned(),
                })?;
            return Self::new(value);
        }

        let parsed = phonenumber::parse(default_region, raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let value = e164
            .trim_start_matches('+')
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            })?;
        Self::new(value)
    }

    /// Get the underlying digits.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by SmsAero (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery-status callback URL (`callbackUrl`).
///
/// Invariant: absolute `http`/`https` URL.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// JSON field name used by SmsAero (`callbackUrl`).
    pub const FIELD: &'static str = "callbackUrl";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidCallbackUrl {
            input: trimmed.to_owned(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidCallbackUrl {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`dateSend`), used for scheduled sends.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// JSON field name used by SmsAero (`dateSend`).
    pub const FIELD: &'static str = "dateSend";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id returned by `sms/send`.
pub struct SmsId(u64);

impl SmsId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// HLR request id returned by `hlr/check`.
pub struct HlrId(u64);

impl HlrId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact group id (`groupId`).
pub struct GroupId(u64);

impl GroupId {
    /// JSON field name used when a group scopes another entity (`groupId`).
    pub const FIELD: &'static str = "groupId";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Contact id returned by `contact/add`.
pub struct ContactId(u64);

impl ContactId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Blacklist entry id returned by `blacklist/add`.
pub struct BlacklistEntryId(u64);

impl BlacklistEntryId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Saved payment card id (`cardId`) for balance top-ups.
pub struct CardId(u64);

impl CardId {
    /// JSON field name used by SmsAero (`cardId`).
    pub const FIELD: &'static str = "cardId";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Viber campaign id (`sendingId`) used by `viber/statistic`.
pub struct SendingId(u64);

impl SendingId {
    /// JSON field name used by SmsAero (`sendingId`).
    pub const FIELD: &'static str = "sendingId";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Flash-call id returned by `flashcall/send`.
pub struct FlashCallId(u64);

impl FlashCallId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}
