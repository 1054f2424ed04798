//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::{
    AddContact, ContactFilter, FlashCallFilter, Recipients, SendSmsOptions, Sex, SmsListFilter,
    ViberMessage,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, BlacklistEntryId, CallbackUrl, CardId, ContactId, Email, FlashCallId, GroupId, HlrId,
    MessageText, PhoneNumber, SendType, SendingId, Signature, SmsId, UnixTimestamp,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipients_require_at_least_one_number() {
        assert!(matches!(
            Recipients::many(Vec::new()),
            Err(ValidationError::NoRecipients)
        ));

        let numbers = vec![
            PhoneNumber::new(79031234567).unwrap(),
            PhoneNumber::new(79038805678).unwrap(),
        ];
        assert!(Recipients::many(numbers).is_ok());
    }

    #[test]
    fn recipients_from_phone_number_is_the_single_form() {
        let number = PhoneNumber::new(79031234567).unwrap();
        assert_eq!(Recipients::from(number), Recipients::One(number));
    }

    #[test]
    fn add_contact_starts_with_only_a_number() {
        let contact = AddContact::new(PhoneNumber::new(79031234567).unwrap());
        assert!(contact.group_id.is_none());
        assert!(contact.sex.is_none());
        assert!(contact.param3.is_none());
    }

    #[test]
    fn sex_maps_to_wire_values() {
        assert_eq!(Sex::Male.as_str(), "male");
        assert_eq!(Sex::Female.as_str(), "female");
    }
}
