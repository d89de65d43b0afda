use json_shape::{from_str, from_value, DecodeError, Decoder, Field, Path, Segment};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct Station {
    name: String,
    capacity: i64,
}

fn station() -> Decoder<Station> {
    let name = Field::required("name", Decoder::string());
    let capacity = Field::required("capacity", Decoder::int());
    let bindings = vec![name.binding(), capacity.binding()];
    Decoder::record("Station", bindings, move |rec| {
        Ok(Station {
            name: name.get(rec)?,
            capacity: capacity.get(rec)?,
        })
    })
}

fn feed() -> Decoder<Vec<Station>> {
    Decoder::at(&["data", "stations"], Decoder::list(station()))
}

#[test]
fn syntax_errors_carry_position_and_no_path() {
    for input in ["", "{", "[1,]", "{\"data\": tru}"] {
        let err = from_str(&feed(), input).unwrap_err();
        assert_eq!(err.kind(), "SYNTAX", "input {input:?}");
        assert!(err.path().is_none());
    }
}

#[test]
fn missing_field_matrix() {
    // Missing key deep in a list element: path names the element, key the binding.
    let err = from_str(
        &feed(),
        r#"{"data": {"stations": [
            {"name": "W 52 St & 11 Ave", "capacity": 39},
            {"name": "Franklin St & W Broadway"}
        ]}}"#,
    )
    .unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingField {
            path: Path::from(vec![
                Segment::key("data"),
                Segment::key("stations"),
                Segment::index(1),
            ]),
            key: "capacity".to_string(),
        }
    );

    // Missing wrapper key: reported against the enclosing object.
    let err = from_value(&feed(), &json!({"data": {}})).unwrap_err();
    assert_eq!(
        err,
        DecodeError::MissingField {
            path: Path::from(vec![Segment::key("data")]),
            key: "stations".to_string(),
        }
    );
}

#[test]
fn type_mismatch_matrix() {
    let cases = vec![
        (
            json!({"data": {"stations": {"not": "an array"}}}),
            DecodeError::TypeMismatch {
                path: Path::from(vec![Segment::key("data"), Segment::key("stations")]),
                expected: "array".to_string(),
                found: "object",
            },
        ),
        (
            json!({"data": {"stations": [{"name": 7, "capacity": 39}]}}),
            DecodeError::TypeMismatch {
                path: Path::from(vec![
                    Segment::key("data"),
                    Segment::key("stations"),
                    Segment::index(0),
                    Segment::key("name"),
                ]),
                expected: "string".to_string(),
                found: "int",
            },
        ),
        (
            json!({"data": {"stations": [{"name": "ok", "capacity": 39.5}]}}),
            DecodeError::TypeMismatch {
                path: Path::from(vec![
                    Segment::key("data"),
                    Segment::key("stations"),
                    Segment::index(0),
                    Segment::key("capacity"),
                ]),
                expected: "int".to_string(),
                found: "float",
            },
        ),
        (
            json!(["not", "a", "wrapper"]),
            DecodeError::TypeMismatch {
                path: Path::root(),
                expected: "object with key `data`".to_string(),
                found: "array",
            },
        ),
    ];
    for (value, expected) in cases {
        assert_eq!(from_value(&feed(), &value), Err(expected));
    }
}

#[test]
fn invalid_union_reports_attempted_alternatives() {
    #[derive(Debug, Clone, PartialEq)]
    enum Postcode {
        Int(i64),
        Text(String),
    }
    let postcode = Decoder::one_of(vec![
        Decoder::int().map(Postcode::Int),
        Decoder::string().map(Postcode::Text),
    ]);
    let d = Decoder::field("postcode", postcode);

    assert_eq!(
        from_value(&d, &json!({"postcode": 83696})),
        Ok(Postcode::Int(83696))
    );
    assert_eq!(
        from_value(&d, &json!({"postcode": "Y5N 0E9"})),
        Ok(Postcode::Text("Y5N 0E9".to_string()))
    );

    let err = from_value(&d, &json!({"postcode": [83696]})).unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidUnion {
            path: Path::from(vec![Segment::key("postcode")]),
            attempted: vec!["int".to_string(), "string".to_string()],
            found: "array",
        }
    );
    assert_eq!(
        err.to_string(),
        "expected one of int, string, found array at /postcode"
    );
}

#[test]
fn first_failure_wins() {
    let d = Decoder::list(Decoder::int());
    let err = from_value(&d, &json!([1, "two", 3, "four"])).unwrap_err();
    assert_eq!(err.path().map(Path::pointer).as_deref(), Some("/1"));
}

#[test]
fn decode_is_all_or_nothing() {
    // One bad element fails the entire feed even though three others are fine.
    let err = from_str(
        &feed(),
        r#"{"data": {"stations": [
            {"name": "a", "capacity": 1},
            {"name": "b", "capacity": 2},
            {"name": "c", "capacity": null},
            {"name": "d", "capacity": 4}
        ]}}"#,
    )
    .unwrap_err();
    assert_eq!(
        err.path().map(Path::pointer).as_deref(),
        Some("/data/stations/2/capacity")
    );
    assert_eq!(err.kind(), "TYPE_MISMATCH");
}

#[test]
fn error_messages_read_end_to_end() {
    let err = from_value(&feed(), &json!({})).unwrap_err();
    assert_eq!(err.to_string(), "missing key `data` in object at (root)");

    let err = from_value(
        &feed(),
        &json!({"data": {"stations": [{"name": "ok", "capacity": "39"}]}}),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected int, found string at /data/stations/0/capacity"
    );
}

#[test]
fn declared_decoders_pass_integrity_check() {
    assert!(feed().check().is_ok());
    assert!(station().check().is_ok());
}
