use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One street-centerline row as exported by the city. Only the columns the
/// munge reads are named here; serde ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "OBJECTID")]
    pub object_id: String,
    #[serde(rename = "STREETNAME")]
    pub street_id: String,
    #[serde(rename = "F_CROSS_ST")]
    pub cross_street_id: String,
    #[serde(rename = "PRE_DIR")]
    pub direction: String,
    #[serde(rename = "STREET_NAM")]
    pub name: String,
    #[serde(rename = "STREET_TYP")]
    pub street_type: String,
    #[serde(rename = "R_ZIP")]
    pub zipcode: String,
    #[serde(rename = "the_geom")]
    pub geometry: String,
    #[serde(rename = "SHAPE_LEN")]
    pub shape_length: String,
    #[serde(rename = "UPDATE_TIM")]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub object_id: String,
    pub mainstreet_id: i64,
    pub xstreet_id: i64,
    pub mainstreet_name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub zipcode: String,
    pub shape_length: f64,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    pub cleaned: CleanedRecord,
    pub xstreet_name: String,
    pub street_1: String,
    pub street_2: String,
    pub pair_key: String,
}

/// A de-duplicated intersection. Field order is the tabular column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntersectionRecord {
    #[serde(rename = "intersection")]
    pub pair_key: String,
    pub street_1: String,
    pub street_2: String,
    pub zipcode: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl From<ResolvedRecord> for IntersectionRecord {
    fn from(record: ResolvedRecord) -> Self {
        Self {
            pair_key: record.pair_key,
            street_1: record.street_1,
            street_2: record.street_2,
            zipcode: record.cleaned.zipcode,
            longitude: record.cleaned.longitude,
            latitude: record.cleaned.latitude,
        }
    }
}

/// Collapses every whitespace run to one space and trims both ends.
pub fn normalize_string(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y/%m/%d %H:%M:%S%.f%#z",
];

const NAIVE_FORMATS: [&str; 12] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d %b %Y %H:%M:%S",
    "%b %d %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y%m%d",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%B %d, %Y",
];

/// Tries the layouts seen in city exports first, then falls back to
/// `dateparser` for anything else. Values with an offset are converted to UTC;
/// naive values are kept as written.
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Some(dt.naive_utc());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    {
        return date.and_hms_opt(0, 0, 0);
    }

    // Naive input is read as UTC, so it comes back unchanged.
    dateparser::parse_with_timezone(text, &Utc)
        .ok()
        .map(|dt| dt.naive_utc())
}
