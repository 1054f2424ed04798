use serde_json::{Map, Value, json};

use super::params::push_nullable;
use crate::domain::{AddContact, ContactFilter, GroupId};

pub fn encode_group_add_body(name: &str) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("name".to_owned(), Value::String(name.to_owned()));
    body
}

/// The contact endpoints expect every field present, `null` when unset.
pub fn encode_contact_add_body(contact: &AddContact) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(
        "number".to_owned(),
        Value::String(contact.number.to_string()),
    );
    push_nullable(
        &mut body,
        GroupId::FIELD,
        contact.group_id.map(|id| json!(id.value())),
    );
    push_nullable(
        &mut body,
        "birthday",
        contact.birthday.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "sex",
        contact.sex.map(|sex| json!(sex.as_str())),
    );
    push_nullable(
        &mut body,
        "lname",
        contact.last_name.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "fname",
        contact.first_name.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "sname",
        contact.middle_name.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "param1",
        contact.param1.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "param2",
        contact.param2.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "param3",
        contact.param3.as_deref().map(|v| json!(v)),
    );
    body
}

pub fn encode_contact_list_body(filter: &ContactFilter) -> Map<String, Value> {
    let mut body = Map::new();
    push_nullable(
        &mut body,
        "number",
        filter.number.map(|number| json!(number.to_string())),
    );
    push_nullable(
        &mut body,
        GroupId::FIELD,
        filter.group_id.map(|id| json!(id.value())),
    );
    push_nullable(
        &mut body,
        "birthday",
        filter.birthday.as_deref().map(|v| json!(v)),
    );
    push_nullable(&mut body, "sex", filter.sex.map(|sex| json!(sex.as_str())));
    push_nullable(
        &mut body,
        "operator",
        filter.operator.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "lname",
        filter.last_name.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "fname",
        filter.first_name.as_deref().map(|v| json!(v)),
    );
    push_nullable(
        &mut body,
        "sname",
        filter.middle_name.as_deref().map(|v| json!(v)),
    );
    body
}
