//! The bike-share station feed: records under a two-level `data.stations`
//! wrapper, with far more wire keys than the model binds.

use json_shape::{Decoder, Field};

/// One dock station. `lat`/`lon` widen to the full coordinate names; the
/// feed's other dozen-odd keys are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub station_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub capacity: i64,
}

pub fn station() -> Decoder<Station> {
    let name = Field::required("name", Decoder::string());
    let station_type = Field::required("station_type", Decoder::string());
    let latitude = Field::required("lat", Decoder::float());
    let longitude = Field::required("lon", Decoder::float());
    let capacity = Field::required("capacity", Decoder::int());
    let bindings = vec![
        name.binding(),
        station_type.binding(),
        latitude.binding(),
        longitude.binding(),
        capacity.binding(),
    ];
    Decoder::record("Station", bindings, move |rec| {
        Ok(Station {
            name: name.get(rec)?,
            station_type: station_type.get(rec)?,
            latitude: latitude.get(rec)?,
            longitude: longitude.get(rec)?,
            capacity: capacity.get(rec)?,
        })
    })
}

/// The station list, unwrapped from `{"data": {"stations": [...]}}`.
pub fn feed() -> Decoder<Vec<Station>> {
    Decoder::at(&["data", "stations"], Decoder::list(station()))
}
