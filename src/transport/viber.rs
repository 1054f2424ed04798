use serde_json::{Map, Value, json};

use super::params::{push_nullable, push_recipients};
use crate::domain::{GroupId, MessageText, SendingId, Signature, UnixTimestamp, ViberMessage};

/// The viber endpoint wants the full key set with explicit nulls; only the
/// recipient pair is omitted when the message targets a group instead.
pub fn encode_viber_send_body(message: &ViberMessage) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(recipients) = message.recipients.as_ref() {
        push_recipients(&mut body, recipients);
    }
    push_nullable(
        &mut body,
        GroupId::FIELD,
        message.group_id.map(|id| json!(id.value())),
    );
    body.insert(
        Signature::FIELD.to_owned(),
        Value::String(message.sign.as_str().to_owned()),
    );
    body.insert(
        "channel".to_owned(),
        Value::String(message.channel.clone()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(message.text.as_str().to_owned()),
    );
    push_nullable(
        &mut body,
        "imageSource",
        message.image_source.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "textButton",
        message.text_button.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "linkButton",
        message.link_button.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        UnixTimestamp::FIELD,
        message.date_send.map(|ts| json!(ts.value())),
    );
    push_nullable(
        &mut body,
        "signSms",
        message.sign_sms.as_ref().map(|sign| json!(sign.as_str())),
    );
    push_nullable(
        &mut body,
        "channelSms",
        message.channel_sms.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "textSms",
        message.text_sms.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "priceSms",
        message.price_sms.map(|price| json!(price)),
    );
    body
}

pub fn encode_viber_statistic_body(sending_id: SendingId) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(SendingId::FIELD.to_owned(), json!(sending_id.value()));
    body
}

#[cfg(test)]
mod tests {
    use crate::domain::{PhoneNumber, Recipients};

    use super::*;

    fn message() -> ViberMessage {
        ViberMessage::new(
            Signature::new("test sign").unwrap(),
            "VIBER",
            MessageText::new("test message").unwrap(),
        )
    }

    #[test]
    fn send_body_without_recipients_omits_the_number_pair() {
        assert_eq!(
            Value::Object(encode_viber_send_body(&message())),
            json!({
                "groupId": null,
                "sign": "test sign",
                "channel": "VIBER",
                "text": "test message",
                "imageSource": null,
                "textButton": null,
                "linkButton": null,
                "dateSend": null,
                "signSms": null,
                "channelSms": null,
                "textSms": null,
                "priceSms": null,
            })
        );
    }

    #[test]
    fn send_body_with_a_number_adds_the_recipient_key() {
        let mut message = message();
        message.recipients = Some(Recipients::one(PhoneNumber::new(79031234567).unwrap()));

        let body = Value::Object(encode_viber_send_body(&message));
        assert_eq!(body.get("number"), Some(&json!("79031234567")));
        assert_eq!(body.get("groupId"), Some(&Value::Null));
    }

    #[test]
    fn statistic_body_carries_the_sending_id() {
        assert_eq!(
            Value::Object(encode_viber_statistic_body(SendingId::new(123))),
            json!({"sendingId": 123})
        );
    }
}
