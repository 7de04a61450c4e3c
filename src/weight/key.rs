//! Weights and sort keys.

use super::WeightError;
use crate::page::Page;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::{cmp::Ordering, fmt};

/// `2^63` as a float: the first float above every `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// A numeric page weight.
///
/// Integers and floats compare by numeric value, exactly, so a mix of
/// `weight = 1` and `weight = 1.5` across pages orders as expected.
/// Weights come from JSON numbers, so a float weight is always finite.
#[derive(Debug, Clone, Copy)]
pub enum Weight {
    Int(i64),
    Float(f64),
}

impl Weight {
    /// Convert a JSON number. Integers above `i64::MAX` become floats.
    pub fn from_number(number: &Number) -> Self {
        match (number.as_i64(), number.as_f64()) {
            (Some(int), _) => Self::Int(int),
            (None, Some(float)) => Self::Float(float),
            // as_f64 only fails with serde_json's arbitrary_precision feature
            (None, None) => Self::Float(f64::INFINITY),
        }
    }

    /// Read the weight of a page.
    ///
    /// `Ok(None)` for a missing, `null` or `false` weight, which all mean
    /// "unweighted" in front matter.
    pub fn of_page(page: &Page) -> Result<Option<Self>, WeightError> {
        let found = match page.raw_weight() {
            None | Some(Value::Null | Value::Bool(false)) => return Ok(None),
            Some(Value::Number(number)) => return Ok(Some(Self::from_number(number))),
            Some(Value::Bool(true)) => "boolean",
            Some(Value::String(_)) => "string",
            Some(Value::Array(_)) => "array",
            Some(Value::Object(_)) => "table",
        };

        Err(WeightError::InvalidWeightType {
            path: page.path.clone(),
            found,
        })
    }
}

/// Compare an integer with a finite or infinite float without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float >= I64_UPPER {
        return Ordering::Less;
    }
    if float < -I64_UPPER {
        return Ordering::Greater;
    }

    #[allow(clippy::cast_possible_truncation)] // Safe: range checked above
    let whole = float.trunc() as i64;
    match int.cmp(&whole) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - float.trunc())).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).reverse(),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => write!(f, "{int}"),
            Self::Float(float) => write!(f, "{float}"),
        }
    }
}

/// The key a page is sorted by.
///
/// `Last` orders after every `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Value(Weight),
    Last,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(weight) => weight.fmt(f),
            Self::Last => f.write_str("last"),
        }
    }
}

/// Key given to pages without a weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
pub enum UnweightedKey {
    /// The number of pages in the collection
    #[default]
    #[serde(rename = "length")]
    #[value(name = "length")]
    CollectionLength,
    /// After every weighted page
    #[serde(rename = "last")]
    Last,
}

impl UnweightedKey {
    /// Key for an unweighted page in a collection of `len` pages.
    pub fn key(self, len: usize) -> SortKey {
        match self {
            Self::CollectionLength => SortKey::Value(Weight::Int(i64::try_from(len).unwrap_or(i64::MAX))),
            Self::Last => SortKey::Last,
        }
    }
}
