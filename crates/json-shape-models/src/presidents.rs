//! The presidents roster: a top-level JSON array of renamed-key records.

use json_shape::{Decoder, Field};

/// One presidency. The wire format calls the name `president` and keeps the
/// year keys snake_cased; a sitting president has no `death_year` and no
/// `left_office`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct President {
    pub number: i64,
    pub name: String,
    pub birth_year: i64,
    pub death_year: Option<i64>,
    pub took_office: String,
    pub left_office: Option<String>,
    pub party: String,
}

pub fn president() -> Decoder<President> {
    let number = Field::required("number", Decoder::int());
    let name = Field::required("president", Decoder::string());
    let birth_year = Field::required("birth_year", Decoder::int());
    let death_year = Field::optional("death_year", Decoder::int());
    let took_office = Field::required("took_office", Decoder::string());
    let left_office = Field::optional("left_office", Decoder::string());
    let party = Field::required("party", Decoder::string());
    let bindings = vec![
        number.binding(),
        name.binding(),
        birth_year.binding(),
        death_year.binding(),
        took_office.binding(),
        left_office.binding(),
        party.binding(),
    ];
    Decoder::record("President", bindings, move |rec| {
        Ok(President {
            number: number.get(rec)?,
            name: name.get(rec)?,
            birth_year: birth_year.get(rec)?,
            death_year: death_year.get(rec)?,
            took_office: took_office.get(rec)?,
            left_office: left_office.get(rec)?,
            party: party.get(rec)?,
        })
    })
}

/// The full roster.
pub fn roster() -> Decoder<Vec<President>> {
    Decoder::list(president())
}
