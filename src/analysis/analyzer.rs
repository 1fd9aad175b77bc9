//! Property value analysis

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::sortable::{encode_float64, encode_int64, encode_uint32};
use super::value::{PropertyValue, Reference};
use crate::error::Result;
use crate::schema::PropertySpec;

/// A single indexable token: opaque key bytes plus, for text-like
/// properties, the term frequency within the source value.
#[derive(Clone, Debug, PartialEq)]
pub struct Countable {
    pub data: Vec<u8>,
    /// Only meaningful when the owning property has frequency
    pub term_frequency: f32,
}

/// The analyzed output for one named property of one object
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub name: String,
    pub items: Vec<Countable>,
    pub has_frequency: bool,
}

/// Stateless value analyzer
#[derive(Clone, Copy, Debug, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Analyzer
    }

    /// Splits on any rune that is neither a Unicode letter nor a digit,
    /// lowercases, then aggregates duplicates into term frequencies.
    pub fn text(&self, input: &str) -> Vec<Countable> {
        aggregate_terms(
            input
                .split(|c: char| !c.is_alphanumeric())
                .filter(|token| !token.is_empty())
                .map(|token| token.to_lowercase()),
        )
    }

    /// Splits on Unicode whitespace only, preserving case, then
    /// aggregates duplicates into term frequencies.
    pub fn string(&self, input: &str) -> Vec<Countable> {
        aggregate_terms(input.split_whitespace().map(|token| token.to_string()))
    }

    /// A single item under the order-preserving i64 key
    pub fn int(&self, input: i64) -> Vec<Countable> {
        vec![Countable {
            data: encode_int64(input).to_vec(),
            term_frequency: 0.0,
        }]
    }

    /// A single item under the order-preserving f64 key. Fails on NaN.
    pub fn float(&self, input: f64) -> Result<Vec<Countable>> {
        Ok(vec![Countable {
            data: encode_float64(input)?.to_vec(),
            term_frequency: 0.0,
        }])
    }

    /// A single one-byte item, `0x00` for false and `0x01` for true
    pub fn bool(&self, input: bool) -> Vec<Countable> {
        vec![Countable {
            data: vec![input as u8],
            term_frequency: 0.0,
        }]
    }

    /// Indexes the reference count only, with zero as a legal value.
    /// The referenced objects themselves are never analyzed.
    pub fn ref_count(&self, refs: &[Reference]) -> Vec<Countable> {
        vec![Countable {
            data: encode_uint32(refs.len() as u32).to_vec(),
            term_frequency: 0.0,
        }]
    }

    /// Analyze every declared property present in the map
    ///
    /// Missing and null values are skipped; present values must decode
    /// as their declared kind.
    pub fn object(
        &self,
        properties: &Map<String, Value>,
        specs: &[PropertySpec],
    ) -> Result<Vec<Property>> {
        let mut out = Vec::new();

        for spec in specs {
            let Some(raw) = properties.get(&spec.name) else {
                continue;
            };
            if raw.is_null() {
                continue;
            }

            let value = PropertyValue::from_json(spec.kind, raw, &spec.name)?;
            let items = match value {
                PropertyValue::Text(s) => self.text(&s),
                PropertyValue::String(s) => self.string(&s),
                PropertyValue::Int(i) => self.int(i),
                PropertyValue::Float(f) => self.float(f)?,
                PropertyValue::Bool(b) => self.bool(b),
                PropertyValue::RefSet(refs) => self.ref_count(&refs),
            };

            out.push(Property {
                name: spec.name.clone(),
                items,
                has_frequency: spec.kind.has_frequency(),
            });
        }

        Ok(out)
    }
}

/// Count per distinct term, term frequency = count / total tokens.
/// Output order over distinct terms is unspecified.
fn aggregate_terms(tokens: impl Iterator<Item = String>) -> Vec<Countable> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut total = 0u32;
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
        total += 1;
    }

    counts
        .into_iter()
        .map(|(term, count)| Countable {
            data: term.into_bytes(),
            term_frequency: count as f32 / total as f32,
        })
        .collect()
}
