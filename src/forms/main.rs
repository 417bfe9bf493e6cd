use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use crate::domain::band::{Coordinates, Genre, NewBand};
use crate::domain::person::Person;
use crate::forms::{
    FormError, optional_date, optional_f64, optional_str, parse_singles, required_date_time,
    required_f64, required_positive_i32, required_str,
};

/// Form data for creating a band from the index page modal.
///
/// The front man block is optional as a whole: it only becomes part of the
/// payload when the passport id and all three location coordinates are
/// filled in. Partially filled blocks are dropped.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddBandForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub x: String,
    pub y: String,
    pub creation_date: String,
    pub number_of_participants: String,
    pub genre: String,
    /// Comma-separated list of single names.
    #[serde(default)]
    pub singles: String,
    #[serde(default)]
    pub front_man_name: String,
    #[serde(default)]
    pub front_man_birthday: String,
    #[serde(default)]
    pub front_man_passport_id: String,
    #[serde(default)]
    pub front_man_location_name: String,
    #[serde(default)]
    pub front_man_x: String,
    #[serde(default)]
    pub front_man_y: String,
    #[serde(default)]
    pub front_man_z: String,
}

impl TryFrom<&AddBandForm> for NewBand {
    type Error = FormError;

    fn try_from(form: &AddBandForm) -> Result<Self, Self::Error> {
        let name = required_str("name", &form.name)?;
        let description = required_str("description", &form.description)?;
        let coordinates = Coordinates {
            x: required_f64("x", &form.x)?,
            y: required_f64("y", &form.y)?,
        };
        let creation_date = required_date_time("creation date", &form.creation_date)?;
        let number_of_participants =
            required_positive_i32("number of participants", &form.number_of_participants)?;
        let genre = required_str("genre", &form.genre)?;
        let genre =
            Genre::from_str(&genre).map_err(|_| FormError::UnknownGenre(genre.to_string()))?;

        let front_man = Person::from_parts(
            optional_str(&form.front_man_name),
            optional_date("front man birthday", &form.front_man_birthday)?,
            optional_str(&form.front_man_passport_id),
            optional_str(&form.front_man_location_name),
            optional_f64("front man x", &form.front_man_x)?,
            optional_f64("front man y", &form.front_man_y)?,
            optional_f64("front man z", &form.front_man_z)?,
        );

        Ok(NewBand::new(
            name,
            description,
            coordinates,
            creation_date,
            number_of_participants,
            genre,
            front_man,
            parse_singles(&form.singles),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::single::Single;

    fn filled_form() -> AddBandForm {
        AddBandForm {
            name: "Nirvana".to_string(),
            description: "Grunge from Aberdeen".to_string(),
            x: "5".to_string(),
            y: "-3.5".to_string(),
            creation_date: "1987-01-01T00:00".to_string(),
            number_of_participants: "3".to_string(),
            genre: "ROCK".to_string(),
            singles: "Smells Like Teen Spirit".to_string(),
            front_man_name: String::new(),
            front_man_birthday: String::new(),
            front_man_passport_id: String::new(),
            front_man_location_name: String::new(),
            front_man_x: String::new(),
            front_man_y: String::new(),
            front_man_z: String::new(),
        }
    }

    #[test]
    fn filled_form_converts_without_a_front_man() {
        let band = NewBand::try_from(&filled_form()).unwrap();
        assert_eq!(band.name, "Nirvana");
        assert_eq!(band.coordinates, Coordinates { x: 5.0, y: -3.5 });
        assert_eq!(band.number_of_participants, 3);
        assert_eq!(band.genre, Genre::Rock);
        assert!(band.front_man.is_none());
        assert_eq!(
            band.singles,
            Some(vec![Single::new("Smells Like Teen Spirit")])
        );
    }

    #[test]
    fn partial_front_man_block_is_dropped() {
        let mut form = filled_form();
        form.front_man_name = "Kurt Cobain".to_string();
        form.front_man_passport_id = "1234 567890".to_string();
        // Location left blank, so no front man is produced.
        let band = NewBand::try_from(&form).unwrap();
        assert!(band.front_man.is_none());
    }

    #[test]
    fn complete_front_man_block_is_kept() {
        let mut form = filled_form();
        form.front_man_name = "Kurt Cobain".to_string();
        form.front_man_birthday = "1967-02-20".to_string();
        form.front_man_passport_id = "1234 567890".to_string();
        form.front_man_location_name = "Aberdeen".to_string();
        form.front_man_x = "46.98".to_string();
        form.front_man_y = "-123.81".to_string();
        form.front_man_z = "0".to_string();
        let band = NewBand::try_from(&form).unwrap();
        let front_man = band.front_man.unwrap();
        assert_eq!(front_man.passport_id, "1234 567890");
        assert_eq!(front_man.location.z, 0.0);
        assert_eq!(front_man.location.name.as_deref(), Some("Aberdeen"));
    }

    #[test]
    fn zero_coordinate_is_accepted() {
        let mut form = filled_form();
        form.x = "0".to_string();
        let band = NewBand::try_from(&form).unwrap();
        assert_eq!(band.coordinates.x, 0.0);
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let mut form = filled_form();
        form.x = "  ".to_string();
        assert!(matches!(
            NewBand::try_from(&form),
            Err(FormError::MissingField("x"))
        ));

        let mut form = filled_form();
        form.genre = String::new();
        assert!(matches!(
            NewBand::try_from(&form),
            Err(FormError::MissingField("genre"))
        ));
    }

    #[test]
    fn unknown_genre_is_rejected() {
        let mut form = filled_form();
        form.genre = "SKIFFLE".to_string();
        assert!(matches!(
            NewBand::try_from(&form),
            Err(FormError::UnknownGenre(g)) if g == "SKIFFLE"
        ));
    }

    #[test]
    fn malformed_front_man_number_is_an_error_not_a_silent_drop() {
        let mut form = filled_form();
        form.front_man_passport_id = "1234".to_string();
        form.front_man_x = "not-a-number".to_string();
        form.front_man_y = "2".to_string();
        form.front_man_z = "3".to_string();
        assert!(matches!(
            NewBand::try_from(&form),
            Err(FormError::InvalidNumber("front man x"))
        ));
    }
}
