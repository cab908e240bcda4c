//! Profile data tree and dotted-path lookup.
use std::collections::BTreeMap;
use std::fmt;

use crate::error::PathError;

/// A terminal value in a profile: the only kind of node a placeholder may
/// resolve to.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text, substituted verbatim.
    String(String),
    /// Signed integer.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// `true` or `false`.
    Boolean(bool),
    /// TOML date, time or date-time.
    Datetime(toml::value::Datetime),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write_float(f, *x),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Datetime(dt) => write!(f, "{dt}"),
        }
    }
}

/// Floats keep a fractional part so `1.0` does not collapse to `1`.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else if x.fract() == 0.0 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

/// A node in a profile's data tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileValue {
    /// Leaf value.
    Scalar(Scalar),
    /// Nested table keyed by segment name.
    Mapping(BTreeMap<String, ProfileValue>),
    /// Array of values; never traversed by a dotted path.
    Sequence(Vec<ProfileValue>),
}

impl From<toml::Value> for ProfileValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::Scalar(Scalar::String(s)),
            toml::Value::Integer(i) => Self::Scalar(Scalar::Integer(i)),
            toml::Value::Float(x) => Self::Scalar(Scalar::Float(x)),
            toml::Value::Boolean(b) => Self::Scalar(Scalar::Boolean(b)),
            toml::Value::Datetime(dt) => Self::Scalar(Scalar::Datetime(dt)),
            toml::Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => Self::Mapping(mapping(table)),
        }
    }
}

fn mapping(table: toml::Table) -> BTreeMap<String, ProfileValue> {
    table
        .into_iter()
        .map(|(k, v)| (k, ProfileValue::from(v)))
        .collect()
}

/// The full data tree of one profile document.
///
/// The root is always a mapping. Loaded once per render and never mutated.
///
/// # Examples
///
/// ```
/// use nexus::config::value::ProfileData;
///
/// let table: toml::Table = toml::from_str("[colors]\nbackground = \"#000000\"\n").unwrap();
/// let data = ProfileData::from(table);
/// let value = data.get_path(&["colors", "background"]).unwrap();
/// assert_eq!(value.to_string(), "#000000");
/// assert!(data.get_path(&["colors", "foreground"]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileData {
    root: BTreeMap<String, ProfileValue>,
}

impl From<toml::Table> for ProfileData {
    fn from(table: toml::Table) -> Self {
        Self {
            root: mapping(table),
        }
    }
}

impl ProfileData {
    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ProfileValue> {
        self.root.get(key)
    }

    /// Walk `segments` through nested mappings and return the terminal scalar.
    ///
    /// # Errors
    ///
    /// - [`PathError::MissingKey`] if a mapping along the way lacks the segment
    /// - [`PathError::NotAMapping`] if a scalar or sequence is reached before the last segment
    /// - [`PathError::NotAScalar`] if the path ends on a mapping or sequence
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<&Scalar, PathError> {
        let mut node: Option<&ProfileValue> = None;

        for segment in segments {
            let key = segment.as_ref();
            let table = match node {
                None => &self.root,
                Some(ProfileValue::Mapping(table)) => table,
                Some(_) => {
                    return Err(PathError::NotAMapping {
                        key: key.to_string(),
                    });
                }
            };
            node = Some(table.get(key).ok_or_else(|| PathError::MissingKey {
                key: key.to_string(),
            })?);
        }

        match node {
            Some(ProfileValue::Scalar(scalar)) => Ok(scalar),
            _ => Err(PathError::NotAScalar),
        }
    }
}
