//! City search results: a top-level array whose records rename two wire
//! keys, including the oddly named `latt_long` coordinate pair.

use json_shape::{Decoder, Field};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct City {
    pub title: String,
    pub location_type: String,
    /// Comma-joined `"lat,long"`, kept verbatim from the wire.
    pub coordinate: String,
    pub woeid: i64,
}

pub fn city() -> Decoder<City> {
    let title = Field::required("title", Decoder::string());
    let location_type = Field::required("location_type", Decoder::string());
    let coordinate = Field::required("latt_long", Decoder::string());
    let woeid = Field::required("woeid", Decoder::int());
    let bindings = vec![
        title.binding(),
        location_type.binding(),
        coordinate.binding(),
        woeid.binding(),
    ];
    Decoder::record("City", bindings, move |rec| {
        Ok(City {
            title: title.get(rec)?,
            location_type: location_type.get(rec)?,
            coordinate: coordinate.get(rec)?,
            woeid: woeid.get(rec)?,
        })
    })
}

pub fn cities() -> Decoder<Vec<City>> {
    Decoder::list(city())
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_shape::from_str;

    #[test]
    fn decodes_search_results() {
        let input = r#"[
            {
                "title": "New York",
                "location_type": "City",
                "woeid": 2459115,
                "latt_long": "40.71455,-74.007118"
            }
        ]"#;
        let decoded = from_str(&cities(), input).unwrap();
        assert_eq!(
            decoded,
            vec![City {
                title: "New York".to_string(),
                location_type: "City".to_string(),
                coordinate: "40.71455,-74.007118".to_string(),
                woeid: 2459115,
            }]
        );
    }

    #[test]
    fn cities_schema_is_well_formed() {
        assert!(cities().check().is_ok());
    }
}
