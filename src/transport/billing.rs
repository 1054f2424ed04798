use serde_json::{Map, Value, json};

use crate::domain::CardId;

pub fn encode_balance_add_body(sum: f64, card_id: CardId) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("sum".to_owned(), json!(sum));
    body.insert(CardId::FIELD.to_owned(), json!(card_id.value()));
    body
}
