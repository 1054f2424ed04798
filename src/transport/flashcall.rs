use serde_json::{Map, Value, json};

use crate::domain::{FlashCallFilter, PhoneNumber};

pub fn encode_flashcall_send_body(phone: PhoneNumber, code: u32) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("phone".to_owned(), json!(phone.value()));
    body.insert("code".to_owned(), json!(code));
    body
}

pub fn encode_flashcall_list_body(filter: &FlashCallFilter) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(number) = filter.number {
        body.insert(
            PhoneNumber::FIELD.to_owned(),
            Value::String(number.to_string()),
        );
    }
    if let Some(text) = filter.text.as_deref() {
        body.insert("text".to_owned(), Value::String(text.to_owned()));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_body_keeps_the_phone_numeric() {
        assert_eq!(
            Value::Object(encode_flashcall_send_body(
                PhoneNumber::new(79031234567).unwrap(),
                1234
            )),
            json!({"phone": 79031234567u64, "code": 1234})
        );
    }

    #[test]
    fn list_body_only_carries_supplied_filters() {
        assert_eq!(
            Value::Object(encode_flashcall_list_body(&FlashCallFilter::default())),
            json!({})
        );

        let filter = FlashCallFilter {
            number: Some(PhoneNumber::new(79031234567).unwrap()),
            text: Some("1234".to_owned()),
        };
        assert_eq!(
            Value::Object(encode_flashcall_list_body(&filter)),
            json!({"number": "79031234567", "text": "1234"})
        );
    }
}
