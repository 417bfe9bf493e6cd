//! Band aggregate as served by the band directory service.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::person::Person;
use crate::domain::single::Single;
use crate::domain::types::{BandId, TypeConstraintError};

/// Musical genre of a band. The directory service only accepts values from
/// this closed set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Rock,
    Soul,
    Jazz,
    Blues,
    MathRock,
    PostPunk,
}

impl Genre {
    /// Every accepted genre, in the order shown in selection lists.
    pub const ALL: [Genre; 6] = [
        Genre::Rock,
        Genre::Soul,
        Genre::Jazz,
        Genre::Blues,
        Genre::MathRock,
        Genre::PostPunk,
    ];

    /// Returns the wire spelling of the genre.
    pub const fn as_str(self) -> &'static str {
        match self {
            Genre::Rock => "ROCK",
            Genre::Soul => "SOUL",
            Genre::Jazz => "JAZZ",
            Genre::Blues => "BLUES",
            Genre::MathRock => "MATH_ROCK",
            Genre::PostPunk => "POST_PUNK",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Genre {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Location of a band on the map.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// A saved band record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    pub id: BandId,
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub creation_date: DateTime<Utc>,
    pub number_of_participants: i32,
    pub genre: Genre,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_man: Option<Person>,
    /// `None` when the band released no singles; never an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singles: Option<Vec<Single>>,
}

/// Payload accepted by the directory service when creating a band or
/// replacing an existing one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBand {
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub creation_date: DateTime<Utc>,
    pub number_of_participants: i32,
    pub genre: Genre,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_man: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singles: Option<Vec<Single>>,
}

impl NewBand {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: String,
        coordinates: Coordinates,
        creation_date: DateTime<Utc>,
        number_of_participants: i32,
        genre: Genre,
        front_man: Option<Person>,
        singles: Option<Vec<Single>>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            coordinates,
            creation_date,
            number_of_participants,
            genre,
            front_man,
            singles: singles.filter(|s| !s.is_empty()),
        }
    }
}

impl From<&Band> for NewBand {
    /// Payload that would recreate the band as-is; used to seed the edit
    /// form with a saved record.
    fn from(band: &Band) -> Self {
        Self {
            name: band.name.clone(),
            description: band.description.clone(),
            coordinates: band.coordinates,
            creation_date: band.creation_date,
            number_of_participants: band.number_of_participants,
            genre: band.genre,
            front_man: band.front_man.clone(),
            singles: band.singles.clone(),
        }
    }
}

/// One page of band records as reported by the directory service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BandPage {
    pub bands: Vec<Band>,
    pub total_pages: usize,
}
