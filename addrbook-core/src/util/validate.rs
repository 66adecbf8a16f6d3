use addrbook_entities::address::Address;
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressInvalidation {
    #[error("Missing street")]
    Street,
    #[error("Missing city")]
    City,
    #[error("Missing state")]
    State,
    #[error("Missing zip code")]
    Zip,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Validate for Address {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let Address {
            street,
            city,
            state,
            zip,
        } = self;
        if is_blank(street) {
            return Err(Self::Error::Street);
        }
        if is_blank(city) {
            return Err(Self::Error::City);
        }
        if is_blank(state) {
            return Err(Self::Error::State);
        }
        if is_blank(zip) {
            return Err(Self::Error::Zip);
        }
        Ok(())
    }
}

fn trimmed(s: String) -> String {
    let t = s.trim();
    if t.len() == s.len() {
        s
    } else {
        t.to_owned()
    }
}

impl AutoCorrect for Address {
    fn auto_correct(self) -> Self {
        let Address {
            street,
            city,
            state,
            zip,
        } = self;
        Self {
            street: trimmed(street),
            city: trimmed(city),
            state: trimmed(state),
            zip: trimmed(zip),
        }
    }
}
