use serde::{Deserialize, Serialize};

/// One input of the booking form. The order of [`BookingField::ALL`] is the
/// order the inputs are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CardNumber,
    ExpirationDate,
    Cvv,
    BillingAddress,
}

impl BookingField {
    pub const ALL: [BookingField; 8] = [
        BookingField::FirstName,
        BookingField::LastName,
        BookingField::Email,
        BookingField::PhoneNumber,
        BookingField::CardNumber,
        BookingField::ExpirationDate,
        BookingField::Cvv,
        BookingField::BillingAddress,
    ];

    /// Key used on the wire and as the input's `name` and placeholder.
    pub fn key(self) -> &'static str {
        match self {
            BookingField::FirstName => "firstName",
            BookingField::LastName => "lastName",
            BookingField::Email => "email",
            BookingField::PhoneNumber => "phoneNumber",
            BookingField::CardNumber => "cardNumber",
            BookingField::ExpirationDate => "expirationDate",
            BookingField::Cvv => "cvv",
            BookingField::BillingAddress => "billingAddress",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Values typed into the booking form, posted as-is to the bookings endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub billing_address: String,
}

impl BookingDetails {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::FirstName => &self.first_name,
            BookingField::LastName => &self.last_name,
            BookingField::Email => &self.email,
            BookingField::PhoneNumber => &self.phone_number,
            BookingField::CardNumber => &self.card_number,
            BookingField::ExpirationDate => &self.expiration_date,
            BookingField::Cvv => &self.cvv,
            BookingField::BillingAddress => &self.billing_address,
        }
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::PhoneNumber => &mut self.phone_number,
            BookingField::CardNumber => &mut self.card_number,
            BookingField::ExpirationDate => &mut self.expiration_date,
            BookingField::Cvv => &mut self.cvv,
            BookingField::BillingAddress => &mut self.billing_address,
        };
        *slot = value;
    }
}
