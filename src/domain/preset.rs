//! Canned band record used to pre-populate the add/edit forms.
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::band::{Band, Coordinates, Genre, NewBand};
use crate::domain::person::{Location, Person};
use crate::domain::single::Single;
use crate::domain::types::BandId;

fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Returns the preset record offered by the "Apply preset" action. Every
/// field of the form, including the optional front man block and the
/// singles list, has a value here.
pub fn band_preset() -> NewBand {
    NewBand {
        name: "The Strokes".to_string(),
        description: "Indie rock from New York City".to_string(),
        coordinates: Coordinates { x: 40.7, y: -74.0 },
        creation_date: utc_date(1998, 7, 1),
        number_of_participants: 5,
        genre: Genre::Rock,
        front_man: Some(Person {
            name: Some("Julian Casablancas".to_string()),
            birthday: NaiveDate::from_ymd_opt(1978, 8, 23),
            passport_id: "7711 223344".to_string(),
            location: Location {
                name: Some("New York".to_string()),
                x: 40.7,
                y: -74.0,
                z: 10.0,
            },
        }),
        singles: Some(vec![
            Single::new("Last Nite"),
            Single::new("Reptilia"),
            Single::new("Someday"),
        ]),
    }
}

/// Deterministic sample records for rendering the table without a running
/// directory service, e.g. in template tests.
pub fn sample_bands() -> Vec<Band> {
    vec![
        Band {
            id: BandId::new(1).expect("positive id"),
            name: "Nirvana".to_string(),
            description: "Grunge from Aberdeen".to_string(),
            coordinates: Coordinates { x: 5.0, y: -3.5 },
            creation_date: utc_date(1987, 1, 1),
            number_of_participants: 3,
            genre: Genre::Rock,
            front_man: Some(Person {
                name: Some("Kurt Cobain".to_string()),
                birthday: NaiveDate::from_ymd_opt(1967, 2, 20),
                passport_id: "1234 567890".to_string(),
                location: Location {
                    name: Some("Aberdeen".to_string()),
                    x: 46.98,
                    y: -123.81,
                    z: 0.0,
                },
            }),
            singles: Some(vec![
                Single::new("Smells Like Teen Spirit"),
                Single::new("Come as You Are"),
            ]),
        },
        Band {
            id: BandId::new(2).expect("positive id"),
            name: "Portishead".to_string(),
            description: "Trip hop from Bristol".to_string(),
            coordinates: Coordinates { x: 51.45, y: -2.59 },
            creation_date: utc_date(1991, 1, 1),
            number_of_participants: 3,
            genre: Genre::Soul,
            front_man: None,
            singles: None,
        },
    ]
}
