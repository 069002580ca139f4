use serde::de::{Error as _, Unexpected};
use serde_json::Value;

/// Response structure for the `locations/{id}/suninfo` endpoint.
///
/// All fields are Unix timestamps in seconds. Fields absent from the payload
/// decode as `0`.
#[derive(serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SunInfo {
    pub sunrise: i64,
    pub sunset: i64,
    /// Solar noon
    pub transit: i64,
    pub civil_twilight_begin: i64,
    pub civil_twilight_end: i64,
    pub nautical_twilight_begin: i64,
    pub nautical_twilight_end: i64,
    pub astronomical_twilight_begin: i64,
    pub astronomical_twilight_end: i64,
}

impl SunInfo {
    /// Decodes a response body, which must be a single JSON object.
    ///
    /// Serde would otherwise also accept a positional array for a struct.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;

        if value.is_object() {
            return serde_json::from_value(value);
        }

        let unexpected = match &value {
            Value::Object(_) | Value::Array(_) => Unexpected::Seq,
            Value::Null => Unexpected::Unit,
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Number(_) => Unexpected::Other("number"),
            Value::String(s) => Unexpected::Str(s),
        };

        Err(serde_json::Error::invalid_type(unexpected, &"a JSON object"))
    }

    /// Named events in display order
    pub fn events(&self) -> [(&'static str, i64); 9] {
        [
            ("Sunrise", self.sunrise),
            ("Sunset", self.sunset),
            ("Solar Noon", self.transit),
            ("Civil Twilight Begin", self.civil_twilight_begin),
            ("Civil Twilight End", self.civil_twilight_end),
            ("Nautical Twilight Begin", self.nautical_twilight_begin),
            ("Nautical Twilight End", self.nautical_twilight_end),
            ("Astronomical Twilight Begin", self.astronomical_twilight_begin),
            ("Astronomical Twilight End", self.astronomical_twilight_end),
        ]
    }
}
