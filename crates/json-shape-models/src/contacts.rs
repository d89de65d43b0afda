//! Contact records behind a `results` wrapper, bound from camelCase wire
//! keys.

use json_shape::{Decoder, Field};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
}

pub fn contact() -> Decoder<Contact> {
    let first_name = Field::required("firstName", Decoder::string());
    let last_name = Field::required("lastName", Decoder::string());
    let bindings = vec![first_name.binding(), last_name.binding()];
    Decoder::record("Contact", bindings, move |rec| {
        Ok(Contact {
            first_name: first_name.get(rec)?,
            last_name: last_name.get(rec)?,
        })
    })
}

/// The contact list, unwrapped from `{"results": [...]}`.
pub fn directory() -> Decoder<Vec<Contact>> {
    Decoder::field("results", Decoder::list(contact()))
}
