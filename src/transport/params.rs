use serde_json::{Map, Value, json};

use crate::domain::{PhoneNumber, Recipients};

/// Insert the number-or-numbers pair: a single recipient is stringified under
/// `number`, a list is passed unchanged under `numbers`.
pub fn push_recipients(body: &mut Map<String, Value>, recipients: &Recipients) {
    match recipients {
        Recipients::One(number) => {
            body.insert(
                PhoneNumber::FIELD.to_owned(),
                Value::String(number.to_string()),
            );
        }
        Recipients::Many(numbers) => {
            body.insert(
                Recipients::LIST_FIELD.to_owned(),
                Value::Array(numbers.iter().map(|number| json!(number.value())).collect()),
            );
        }
    }
}

/// Insert `field` with the given value, or JSON `null` when absent.
pub fn push_nullable(body: &mut Map<String, Value>, field: &str, value: Option<Value>) {
    body.insert(field.to_owned(), value.unwrap_or(Value::Null));
}

/// Body for the `{"id": N}` family of operations.
pub fn id_only(id: u64) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("id".to_owned(), json!(id));
    body
}

#[cfg(test)]
mod tests {
    use crate::domain::ValidationError;

    use super::*;

    #[test]
    fn single_recipient_is_stringified_under_number() {
        let mut body = Map::new();
        push_recipients(
            &mut body,
            &Recipients::one(PhoneNumber::new(79031234567).unwrap()),
        );
        assert_eq!(Value::Object(body), json!({"number": "79031234567"}));
    }

    #[test]
    fn recipient_list_is_passed_unchanged_under_numbers() {
        let numbers = vec![
            PhoneNumber::new(79031234567).unwrap(),
            PhoneNumber::new(9876543210).unwrap(),
        ];
        let mut body = Map::new();
        push_recipients(&mut body, &Recipients::many(numbers).unwrap());
        assert_eq!(
            Value::Object(body),
            json!({"numbers": [79031234567u64, 9876543210u64]})
        );
    }

    #[test]
    fn empty_recipient_list_is_rejected_at_construction() {
        assert_eq!(
            Recipients::many(Vec::new()).unwrap_err(),
            ValidationError::NoRecipients
        );
    }

    #[test]
    fn id_only_body_uses_a_numeric_id() {
        assert_eq!(Value::Object(id_only(12345)), json!({"id": 12345}));
    }
}
