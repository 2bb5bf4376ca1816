//! Cell values, row keys, and the row accessor trait.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically-typed value read from one field of a row.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// The row has no such field (or it holds nothing).
    #[default]
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Check if the value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The string shown in a cell without a custom renderer.
    ///
    /// Absent values display as an empty string.
    pub fn display_string(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    /// The string used when two values of unlike types are compared.
    ///
    /// Unlike [`display_string`](Self::display_string), an absent value
    /// coerces to the literal `"undefined"`.
    pub fn coerce_string(&self) -> Cow<'_, str> {
        match self {
            Self::Absent => Cow::Borrowed("undefined"),
            other => other.display_string(),
        }
    }
}

/// Format a number the way cells show it.
///
/// Shortest round-trip digits; plain notation for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign otherwise.
/// `-0` shows as `0`, infinities as `Infinity`/`-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Identity of a row for selection purposes.
///
/// Derived from the value of the row's key field. Numbers compare by value
/// with `-0` equal to `0` and every NaN equal to every other NaN.
#[derive(Debug, Clone)]
pub enum RowKey {
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl RowKey {
    fn number_bits(n: f64) -> u64 {
        if n.is_nan() {
            f64::NAN.to_bits()
        } else if n == 0.0 {
            0.0f64.to_bits()
        } else {
            n.to_bits()
        }
    }
}

impl PartialEq for RowKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => Self::number_bits(*a) == Self::number_bits(*b),
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for RowKey {}

impl Hash for RowKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Absent => {}
            Self::Text(s) => s.hash(state),
            Self::Number(n) => Self::number_bits(*n).hash(state),
            Self::Bool(b) => b.hash(state),
        }
    }
}

impl From<CellValue> for RowKey {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Absent => Self::Absent,
            CellValue::Text(s) => Self::Text(s),
            CellValue::Number(n) => Self::Number(n),
            CellValue::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for RowKey {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for RowKey {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for RowKey {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Trait for records that can be displayed as rows of a table.
///
/// Rows expose their fields by name; the table reads the key field for
/// identity and the columns' data fields for display and sorting.
///
/// # Example
///
/// ```
/// use gridform::{CellValue, TableRow};
///
/// #[derive(Clone)]
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     fn field(&self, name: &str) -> CellValue {
///         match name {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             _ => CellValue::Absent,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone {
    /// Value of the named field, or [`CellValue::Absent`] if there is none.
    fn field(&self, name: &str) -> CellValue;

    /// Identity of this row given the name of the key field.
    fn key(&self, row_key: &str) -> RowKey {
        self.field(row_key).into()
    }
}
