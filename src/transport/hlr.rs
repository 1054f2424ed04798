use serde_json::{Map, Value};

use super::params::push_recipients;
use crate::domain::Recipients;

/// Shared body for `hlr/check` and `number/operator`: just the recipients.
pub fn encode_number_lookup_body(recipients: &Recipients) -> Map<String, Value> {
    let mut body = Map::new();
    push_recipients(&mut body, recipients);
    body
}
