//! Person records from a user-directory feed: a `results` wrapper, a
//! postcode whose JSON type varies between records, and an identification
//! block whose value may be `null`.

use json_shape::{Decoder, Field};

/// A postcode is an integer in some countries and a string in others.
/// Decoding tries the integer alternative first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Postcode {
    Int(i64),
    Text(String),
}

pub fn postcode() -> Decoder<Postcode> {
    Decoder::one_of(vec![
        Decoder::int().map(Postcode::Int),
        Decoder::string().map(Postcode::Text),
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub postcode: Postcode,
}

pub fn location() -> Decoder<Location> {
    let city = Field::required("city", Decoder::string());
    let country = Field::required("country", Decoder::string());
    let code = Field::required("postcode", postcode());
    let bindings = vec![city.binding(), country.binding(), code.binding()];
    Decoder::record("Location", bindings, move |rec| {
        Ok(Location {
            city: city.get(rec)?,
            country: country.get(rec)?,
            postcode: code.get(rec)?,
        })
    })
}

/// The document block naming a person's national id. Some records carry
/// `"value": null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identification {
    pub name: String,
    pub value: Option<String>,
}

pub fn identification() -> Decoder<Identification> {
    let name = Field::required("name", Decoder::string());
    let value = Field::optional("value", Decoder::string());
    let bindings = vec![name.binding(), value.binding()];
    Decoder::record("Identification", bindings, move |rec| {
        Ok(Identification {
            name: name.get(rec)?,
            value: value.get(rec)?,
        })
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub gender: String,
    pub location: Location,
    pub id: Identification,
}

pub fn person() -> Decoder<Person> {
    let gender = Field::required("gender", Decoder::string());
    let loc = Field::required("location", location());
    let id = Field::required("id", identification());
    let bindings = vec![gender.binding(), loc.binding(), id.binding()];
    Decoder::record("Person", bindings, move |rec| {
        Ok(Person {
            gender: gender.get(rec)?,
            location: loc.get(rec)?,
            id: id.get(rec)?,
        })
    })
}

/// The person list, unwrapped from `{"results": [...]}`.
pub fn directory() -> Decoder<Vec<Person>> {
    Decoder::field("results", Decoder::list(person()))
}
