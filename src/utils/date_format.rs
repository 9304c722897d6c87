use serde::{self, Deserialize, Deserializer, Serialize, Serializer};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

// Parses a calendar date. Timestamps are accepted too and truncated to their
// date part, since some endpoints return `2022-01-05T00:00:00` for date fields.
pub fn parse_date(date_str: &str) -> Result<Date, String> {
    let format = format_description!("[year]-[month]-[day]");
    let date_part = date_str.split('T').next().unwrap_or(date_str);

    Date::parse(date_part, &format).map_err(|e| format!("Failed to parse date '{date_str}': {e}"))
}

// Parses a timestamp. RFC 3339 first; timestamps without an offset are taken
// as UTC.
pub fn parse_datetime(datetime_str: &str) -> Result<OffsetDateTime, String> {
    if let Ok(dt) = OffsetDateTime::parse(datetime_str, &Rfc3339) {
        return Ok(dt);
    }

    // e.g. "2022-03-03T06:17:25.8448470"
    if datetime_str.contains('.') {
        let format =
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
        if let Ok(dt) = PrimitiveDateTime::parse(datetime_str, &format) {
            return Ok(dt.assume_utc());
        }
    }

    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(datetime_str, &format)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| format!("Failed to parse datetime '{datetime_str}': {e}"))
}

/// A timestamp as exchanged with the platform.
///
/// Remembers the text it was parsed from and writes exactly that text back,
/// so offset-less values like `2022-03-03T06:17:25.8448470` survive a round
/// trip. Values built from an [`OffsetDateTime`] are written as RFC 3339.
/// Equality compares the instant only.
#[derive(Clone, Debug)]
pub struct Timestamp {
    value: OffsetDateTime,
    text: Option<String>,
}

impl Timestamp {
    pub fn parse(text: &str) -> Result<Self, String> {
        parse_datetime(text).map(|value| Self {
            value,
            text: Some(text.to_string()),
        })
    }

    #[must_use]
    pub fn value(&self) -> OffsetDateTime {
        self.value
    }

    /// The text this timestamp was read from, if it came off the wire.
    #[must_use]
    pub fn wire_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(value: OffsetDateTime) -> Self {
        Self { value, text: None }
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Timestamp {}

impl PartialEq<OffsetDateTime> for Timestamp {
    fn eq(&self, other: &OffsetDateTime) -> bool {
        self.value == *other
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.text {
            Some(text) => serializer.serialize_str(text),
            None => {
                let formatted = self.value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A calendar date as exchanged with the platform.
///
/// Some endpoints send timestamps for date fields; the date part is used and
/// the original text is written back unchanged. Dates built from a [`Date`]
/// are written as `YYYY-MM-DD`. Equality compares the date only.
#[derive(Clone, Debug)]
pub struct CalendarDate {
    value: Date,
    text: Option<String>,
}

impl CalendarDate {
    pub fn parse(text: &str) -> Result<Self, String> {
        parse_date(text).map(|value| Self {
            value,
            text: Some(text.to_string()),
        })
    }

    #[must_use]
    pub fn value(&self) -> Date {
        self.value
    }

    /// The text this date was read from, if it came off the wire.
    #[must_use]
    pub fn wire_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl From<Date> for CalendarDate {
    fn from(value: Date) -> Self {
        Self { value, text: None }
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for CalendarDate {}

impl PartialEq<Date> for CalendarDate {
    fn eq(&self, other: &Date) -> bool {
        self.value == *other
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.text {
            Some(text) => serializer.serialize_str(text),
            None => {
                let formatted = self
                    .value
                    .format(&format_description!("[year]-[month]-[day]"))
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
        }
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// `Option<CalendarDate>`; an empty string reads as `None`.
pub mod date_option {
    use super::{CalendarDate, Deserialize, Deserializer, Serialize, Serializer, serde};

    pub fn serialize<S>(date: &Option<CalendarDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => date.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<CalendarDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => CalendarDate::parse(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

/// `Option<Timestamp>`; an empty string reads as `None`.
pub mod datetime_option {
    use super::{Deserialize, Deserializer, Serialize, Serializer, Timestamp, serde};

    pub fn serialize<S>(datetime: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match datetime {
            Some(datetime) => datetime.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => Timestamp::parse(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
