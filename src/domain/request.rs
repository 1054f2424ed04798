use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackUrl, GroupId, MessageText, PhoneNumber, Signature, UnixTimestamp,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    One(PhoneNumber),
    Many(Vec<PhoneNumber>),
}

impl Recipients {
    /// JSON field name used by SmsAero for a recipient list (`numbers`).
    pub const LIST_FIELD: &'static str = "numbers";

    pub fn one(number: PhoneNumber) -> Self {
        Self::One(number)
    }

    pub fn many(numbers: Vec<PhoneNumber>) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::NoRecipients);
        }
        Ok(Self::Many(numbers))
    }
}

impl From<PhoneNumber> for Recipients {
    fn from(number: PhoneNumber) -> Self {
        Self::One(number)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendSmsOptions {
    /// Overrides the client-level signature for this send only.
    pub sign: Option<Signature>,
    pub callback_url: Option<CallbackUrl>,
    pub date_send: Option<UnixTimestamp>,
}

#[derive(Debug, Clone, Default)]
pub struct SmsListFilter {
    pub recipients: Option<Recipients>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddContact {
    pub number: PhoneNumber,
    pub group_id: Option<GroupId>,
    pub birthday: Option<String>,
    pub sex: Option<Sex>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub param1: Option<String>,
    pub param2: Option<String>,
    pub param3: Option<String>,
}

impl AddContact {
    pub fn new(number: PhoneNumber) -> Self {
        Self {
            number,
            group_id: None,
            birthday: None,
            sex: None,
            last_name: None,
            first_name: None,
            middle_name: None,
            param1: None,
            param2: None,
            param3: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub number: Option<PhoneNumber>,
    pub group_id: Option<GroupId>,
    pub birthday: Option<String>,
    pub sex: Option<Sex>,
    pub operator: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ViberMessage {
    pub sign: Signature,
    pub channel: String,
    pub text: MessageText,
    pub recipients: Option<Recipients>,
    pub group_id: Option<GroupId>,
    pub image_source: Option<String>,
    pub text_button: Option<String>,
    pub link_button: Option<String>,
    pub date_send: Option<UnixTimestamp>,
    pub sign_sms: Option<Signature>,
    pub channel_sms: Option<String>,
    pub text_sms: Option<String>,
    pub price_sms: Option<f64>,
}

impl ViberMessage {
    pub fn new(sign: Signature, channel: impl Into<String>, text: MessageText) -> Self {
        Self {
            sign,
            channel: channel.into(),
            text,
            recipients: None,
            group_id: None,
            image_source: None,
            text_button: None,
            link_button: None,
            date_send: None,
            sign_sms: None,
            channel_sms: None,
            text_sms: None,
            price_sms: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlashCallFilter {
    pub number: Option<PhoneNumber>,
    pub text: Option<String>,
}
