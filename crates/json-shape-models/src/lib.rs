//! Worked decoding models for `json-shape`.
//!
//! One module per source feed: a plain record type plus the decoder that
//! binds it. Together they exercise every decoding policy the core offers:
//! renamed keys, optional fields, nested wrapper unwrapping, ordered unions,
//! and keyed-collection reshaping.

pub mod cities;
pub mod contacts;
pub mod people;
pub mod presidents;
pub mod stations;
pub mod strains;
