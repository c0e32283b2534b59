//! Cell values produced by column accessors.
//!
//! The grid never looks at row fields directly. Every column maps a row to a
//! [`CellValue`], and searching and sorting only ever see these values.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Display format for [`CellValue::Date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for [`CellValue::DateTime`].
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single value derived from a row by a column accessor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (missing optional field).
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Canonical, locale-free string form used for searching and as the
    /// default cell label.
    pub fn search_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Date(value) => value.format(DATE_FORMAT).to_string(),
            Self::DateTime(value) => value.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Case-insensitive substring match against an already lowercased needle.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.search_text().to_lowercase().contains(needle_lowercase)
    }

    /// Total order used by column sorting.
    ///
    /// Values of different kinds order by kind: empty, booleans, numbers,
    /// dates, then text. Within a kind, numbers compare numerically
    /// (integers and floats mix exactly, NaN sorts last), text compares
    /// case-insensitively, and dates and booleans compare naturally. A date
    /// compares as midnight of that day against a date-time.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => compare_floats(*a, *b),
            (Self::Int(a), Self::Float(b)) => compare_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => compare_int_float(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            (Self::Date(a), Self::DateTime(b)) => a.and_time(NaiveTime::MIN).cmp(b),
            (Self::DateTime(a), Self::Date(b)) => a.cmp(&b.and_time(NaiveTime::MIN)),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Date(_) | Self::DateTime(_) => 3,
            Self::Text(_) => 4,
        }
    }
}

/// Numeric order with `-0.0 == 0.0` and every NaN above every number.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer with a float, without rounding the
/// integer to `f64`.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    // -2^63, exactly representable
    let lower = i64::MIN as f64;
    if float < lower {
        return Ordering::Greater;
    }
    if float >= -lower {
        return Ordering::Less;
    }

    let whole = float.trunc();
    // `whole` is integral and within i64 range, so the cast is exact.
    int.cmp(&(whole as i64)).then_with(|| {
        0.0_f64
            .partial_cmp(&(float - whole))
            .unwrap_or(Ordering::Equal)
    })
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.search_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for CellValue {
    /// Amounts beyond `i64::MAX` degrade to floats.
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
