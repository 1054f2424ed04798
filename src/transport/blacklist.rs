use serde_json::{Map, Value};

use super::params::push_recipients;
use crate::domain::{PhoneNumber, Recipients};

pub fn encode_blacklist_add_body(recipients: &Recipients) -> Map<String, Value> {
    let mut body = Map::new();
    push_recipients(&mut body, recipients);
    body
}

pub fn encode_blacklist_list_body(number: Option<PhoneNumber>) -> Map<String, Value> {
    let mut body = Map::new();
    if let Some(number) = number {
        body.insert(
            PhoneNumber::FIELD.to_owned(),
            Value::String(number.to_string()),
        );
    }
    body
}
