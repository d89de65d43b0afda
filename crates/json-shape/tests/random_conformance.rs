use json_shape::{from_str, from_value, Decoder, Field, Random};

#[derive(Debug, Clone, PartialEq)]
struct President {
    number: i64,
    name: String,
    death_year: Option<i64>,
    party: String,
}

fn president() -> Decoder<President> {
    let number = Field::required("number", Decoder::int());
    let name = Field::required("president", Decoder::string());
    let death_year = Field::optional("death_year", Decoder::int());
    let party = Field::defaulted("party", Decoder::string(), "No Party".to_string());
    let bindings = vec![
        number.binding(),
        name.binding(),
        death_year.binding(),
        party.binding(),
    ];
    Decoder::record("President", bindings, move |rec| {
        Ok(President {
            number: number.get(rec)?,
            name: name.get(rec)?,
            death_year: death_year.get(rec)?,
            party: party.get(rec)?,
        })
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Postcode {
    Int(i64),
    Text(String),
}

fn postcode() -> Decoder<Postcode> {
    Decoder::one_of(vec![
        Decoder::int().map(Postcode::Int),
        Decoder::string().map(Postcode::Text),
    ])
}

fn assert_generated_values_decode<T>(decoder: &Decoder<T>) {
    let random = Random::new();
    for _ in 0..50 {
        let value = random.gen(decoder.shape());
        assert!(
            from_value(decoder, &value).is_ok(),
            "generated value failed to decode: {value}"
        );
    }
}

#[test]
fn generated_records_decode() {
    assert_generated_values_decode(&president());
}

#[test]
fn generated_wrapped_lists_decode() {
    let feed = Decoder::at(&["data", "items"], Decoder::list(president()));
    assert_generated_values_decode(&feed);
}

#[test]
fn generated_unions_decode() {
    assert_generated_values_decode(&postcode());
    assert_generated_values_decode(&Decoder::list(postcode()));
}

#[test]
fn generated_keyed_collections_decode() {
    assert_generated_values_decode(&Decoder::values(president()));
    assert_generated_values_decode(&Decoder::entries(Decoder::list(Decoder::string())));
}

#[test]
fn generated_nullable_values_decode() {
    assert_generated_values_decode(&Decoder::nullable(Decoder::float()));
}

#[test]
fn decoding_same_input_twice_yields_equal_values() {
    let inputs = [
        r#"{"number": 1, "president": "George Washington", "death_year": 1799, "party": "No Party"}"#,
        r#"{"number": 44, "president": "Barack Obama", "death_year": null}"#,
    ];
    for input in inputs {
        let first = from_str(&president(), input).unwrap();
        let second = from_str(&president(), input).unwrap();
        assert_eq!(first, second);
    }

    let floats = Decoder::list(Decoder::float());
    let input = "[40.76727216, -73.99392888, 55]";
    assert_eq!(
        from_str(&floats, input).unwrap(),
        from_str(&floats, input).unwrap()
    );
}

#[test]
fn generator_shapes_pass_integrity_check() {
    assert!(president().check().is_ok());
    assert!(postcode().check().is_ok());
    assert!(Decoder::values(president()).check().is_ok());
}
