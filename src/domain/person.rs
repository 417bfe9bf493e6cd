//! Front man aggregate nested inside a band record.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point in space where the front man is located.
///
/// All three coordinates are mandatory on the wire; only the label is
/// optional.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Band front man. The whole aggregate is optional on a band, but once
/// present it must carry a passport id and a fully specified location.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "passportID")]
    pub passport_id: String,
    pub location: Location,
}

impl Person {
    /// Assembles a front man from independently optional form inputs.
    ///
    /// Returns `Some` only when the passport id and all three location
    /// coordinates are present; otherwise the partial input is dropped and
    /// `None` is returned, so a band can be saved without a front man even
    /// when a few of the fields were touched.
    pub fn from_parts(
        name: Option<String>,
        birthday: Option<NaiveDate>,
        passport_id: Option<String>,
        location_name: Option<String>,
        x: Option<f64>,
        y: Option<f64>,
        z: Option<f64>,
    ) -> Option<Self> {
        let passport_id = passport_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;
        let (x, y, z) = (x?, y?, z?);
        Some(Self {
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            birthday,
            passport_id,
            location: Location {
                name: location_name
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
                x,
                y,
                z,
            },
        })
    }
}
