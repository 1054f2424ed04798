use serde_json::{Map, Value, json};

use super::params::{push_nullable, push_recipients};
use crate::domain::{
    CallbackUrl, MessageText, Recipients, SendSmsOptions, Signature, SmsListFilter, UnixTimestamp,
};

pub fn encode_send_sms_body(
    recipients: &Recipients,
    text: &MessageText,
    sign: &Signature,
    options: &SendSmsOptions,
) -> Map<String, Value> {
    let mut body = Map::new();
    push_recipients(&mut body, recipients);
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(text.as_str().to_owned()),
    );
    body.insert(
        Signature::FIELD.to_owned(),
        Value::String(sign.as_str().to_owned()),
    );
    // The gateway expects callbackUrl present even when unset.
    push_nullable(
        &mut body,
        CallbackUrl::FIELD,
        options
            .callback_url
            .as_ref()
            .map(|url| Value::String(url.as_str().to_owned())),
    );
    if let Some(date_send) = options.date_send {
        body.insert(UnixTimestamp::FIELD.to_owned(), json!(date_send.value()));
    }
    body
}

pub fn encode_sms_list_body(filter: &SmsListFilter) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(recipients) = filter.recipients.as_ref() {
        push_recipients(&mut body, recipients);
    }
    if let Some(text) = filter.text.as_deref() {
        body.insert(
            MessageText::FIELD.to_owned(),
            Value::String(text.to_owned()),
        );
    }
    body
}
