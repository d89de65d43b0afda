//! The strain catalog: a keyed collection of records under arbitrary
//! strain-name keys, reshaped into an ordered list.

use json_shape::{Decoder, Field};

/// One strain. `effects` is itself a keyed collection (`positive`,
/// `negative`, `medical`, ...) whose keys are meaningful, so they are
/// retained as `(key, list)` pairs in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strain {
    pub id: i64,
    pub race: String,
    pub flavors: Vec<String>,
    pub effects: Vec<(String, Vec<String>)>,
}

pub fn strain() -> Decoder<Strain> {
    let id = Field::required("id", Decoder::int());
    let race = Field::required("race", Decoder::string());
    let flavors = Field::required("flavors", Decoder::list(Decoder::string()));
    let effects = Field::required("effects", Decoder::entries(Decoder::list(Decoder::string())));
    let bindings = vec![
        id.binding(),
        race.binding(),
        flavors.binding(),
        effects.binding(),
    ];
    Decoder::record("Strain", bindings, move |rec| {
        Ok(Strain {
            id: id.get(rec)?,
            race: race.get(rec)?,
            flavors: flavors.get(rec)?,
            effects: effects.get(rec)?,
        })
    })
}

/// The catalog reshaped to strains only, in source order, the strain-name
/// keys discarded.
pub fn catalog() -> Decoder<Vec<Strain>> {
    Decoder::values(strain())
}

/// The catalog reshaped with the strain-name keys retained.
pub fn catalog_by_name() -> Decoder<Vec<(String, Strain)>> {
    Decoder::entries(strain())
}
