//! Transport layer: gateway URLs and wire-format details (encoding/classification).

mod billing;
mod blacklist;
mod contact;
mod flashcall;
mod gate;
mod hlr;
mod params;
mod response;
mod sms;
mod viber;

pub use billing::encode_balance_add_body;
pub use blacklist::{encode_blacklist_add_body, encode_blacklist_list_body};
pub use contact::{encode_contact_add_body, encode_contact_list_body, encode_group_add_body};
pub use flashcall::{encode_flashcall_list_body, encode_flashcall_send_body};
pub use gate::{GATE_URLS, Proto, build_url, normalize_gate};
pub use hlr::encode_number_lookup_body;
pub use params::id_only;
pub use response::{ClassifyError, classify};
pub use sms::{encode_send_sms_body, encode_sms_list_body};
pub use viber::{encode_viber_send_body, encode_viber_statistic_body};
