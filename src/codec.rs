//! Date encodings used on the wire.
//!
//! The portal mixes two conventions: campaign endpoints send calendar dates
//! (`YYYY-MM-DD`, optionally with `THH:MM:SS`) read as UTC, while call records
//! and statistics send epoch milliseconds. Each record picks the codec that
//! matches its endpoint family through `#[serde(with = "...")]`.
//!
//! Neither encoding carries the full precision of a `DateTime<Utc>`, so
//! serializing a value the wire cannot represent (sub-second calendar values,
//! sub-millisecond epoch values) fails instead of silently truncating.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Timelike, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Format a timestamp for statistics query parameters (`dateFrom`, `dateTo`).
pub(crate) fn format_query_datetime(value: &DateTime<Utc>) -> String {
    value.format(QUERY_FORMAT).to_string()
}

/// Calendar date strings, UTC, whole seconds.
pub(crate) mod calendar {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    /// Fractional seconds on input are dropped.
    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim().trim_end_matches('Z');
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(datetime.and_utc().trunc_subsecs(0));
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Midnight values are written as a bare date, anything else keeps its time.
    pub(crate) fn format(value: &DateTime<Utc>) -> String {
        if value.time() == NaiveTime::MIN {
            value.format(DATE_FORMAT).to_string()
        } else {
            value.format(DATETIME_FORMAT).to_string()
        }
    }

    /// Like [`format`], but refuses values with a sub-second part.
    pub(crate) fn encode<E: serde::ser::Error>(value: &DateTime<Utc>) -> Result<String, E> {
        if value.nanosecond() != 0 {
            return Err(E::custom(format!(
                "calendar date cannot carry sub-second precision: {value}"
            )));
        }
        Ok(format(value))
    }

    pub(crate) fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode::<S::Error>(value)?)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}")))
    }

    pub(crate) mod option {
        use super::*;
        use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

        pub(crate) fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.serialize_str(&encode::<S::Error>(value)?),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid calendar date: {raw}"))),
                None => Ok(None),
            }
        }
    }
}

/// Integer milliseconds since the Unix epoch.
pub(crate) mod epoch_millis {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    fn from_millis<E: serde::de::Error>(millis: i64) -> Result<DateTime<Utc>, E> {
        DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {millis}")))
    }

    pub(crate) fn to_millis<E: serde::ser::Error>(value: &DateTime<Utc>) -> Result<i64, E> {
        if value.timestamp_subsec_nanos() % 1_000_000 != 0 {
            return Err(E::custom(format!(
                "epoch timestamp cannot carry sub-millisecond precision: {value}"
            )));
        }
        Ok(value.timestamp_millis())
    }

    pub(crate) fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(to_millis::<S::Error>(value)?)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        from_millis(i64::deserialize(deserializer)?)
    }

    pub(crate) mod option {
        use super::*;
        use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

        pub(crate) fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.serialize_i64(to_millis::<S::Error>(value)?),
                None => serializer.serialize_none(),
            }
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<i64>::deserialize(deserializer)?
                .map(from_millis::<D::Error>)
                .transpose()
        }
    }
}
