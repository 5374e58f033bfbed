use std::fmt;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::primitives::{datetime_label, decimal_to_f64};
use crate::error::ChartResult;

/// X coordinate of a data point as the host library expects it.
///
/// Timestamps serialize as unix milliseconds for datetime axes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Text(String),
    Number(OrderedFloat<f64>),
    Time(#[serde(with = "chrono::serde::ts_milliseconds")] DateTime<Utc>),
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) => write!(f, "{}", value.0),
            Self::Time(time) => f.write_str(&datetime_label(*time)),
        }
    }
}

impl From<&str> for XValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for XValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl From<i64> for XValue {
    fn from(value: i64) -> Self {
        Self::Number(OrderedFloat(value as f64))
    }
}

impl From<DateTime<Utc>> for XValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

/// One observation emitted by a series.
///
/// `source` carries the record the point was built from so selection
/// callbacks can hand it back; it never crosses the host boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint<T> {
    pub x: XValue,
    pub y: f64,
    #[serde(skip)]
    pub source: T,
}

impl<T> DataPoint<T> {
    #[must_use]
    pub fn new(x: impl Into<XValue>, y: f64, source: T) -> Self {
        Self {
            x: x.into(),
            y,
            source,
        }
    }

    pub fn from_decimal(x: impl Into<XValue>, y: Decimal, source: T) -> ChartResult<Self> {
        Ok(Self {
            x: x.into(),
            y: decimal_to_f64(y, "y")?,
            source,
        })
    }

    /// Display form of the x value, used as a label by non-axis charts.
    #[must_use]
    pub fn label(&self) -> String {
        self.x.to_string()
    }
}

/// Width or height of the chart element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Pixels(u32),
    Percent(f64),
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pixels(px) => serializer.serialize_u32(*px),
            Self::Percent(pct) => serializer.serialize_str(&format!("{pct}%")),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Pixels(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawDimension::deserialize(deserializer)? {
            RawDimension::Pixels(px) => Ok(Self::Pixels(px)),
            RawDimension::Text(text) => {
                let trimmed = text.trim();
                if let Some(pct) = trimmed.strip_suffix('%') {
                    let value = pct.trim().parse::<f64>().map_err(serde::de::Error::custom)?;
                    return Ok(Self::Percent(value));
                }
                let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);
                trimmed
                    .trim()
                    .parse::<u32>()
                    .map(Self::Pixels)
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}
