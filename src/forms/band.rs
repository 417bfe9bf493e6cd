use serde::Deserialize;
use validator::Validate;

use crate::domain::band::NewBand;
use crate::domain::types::BandId;
use crate::forms::FormError;
use crate::forms::main::AddBandForm;

/// Form data for updating an existing band from the edit page. Same fields
/// as the add form plus the id of the record being replaced. The fields are
/// spelled out because urlencoded form decoding cannot flatten nested
/// structs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveBandForm {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub x: String,
    pub y: String,
    pub creation_date: String,
    pub number_of_participants: String,
    pub genre: String,
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

impl SaveBandForm {
    /// Parses the id submitted with the form.
    pub fn band_id(&self) -> Result<BandId, FormError> {
        let id = self
            .id
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::InvalidBandId)?;
        BandId::new(id).map_err(|_| FormError::InvalidBandId)
    }

    /// The band fields of the submission, without the id.
    pub fn as_add_form(&self) -> AddBandForm {
        AddBandForm {
            name: self.name.clone(),
            description: self.description.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
            creation_date: self.creation_date.clone(),
            number_of_participants: self.number_of_participants.clone(),
            genre: self.genre.clone(),
            singles: self.singles.clone(),
            front_man_name: self.front_man_name.clone(),
            front_man_birthday: self.front_man_birthday.clone(),
            front_man_passport_id: self.front_man_passport_id.clone(),
            front_man_location_name: self.front_man_location_name.clone(),
            front_man_x: self.front_man_x.clone(),
            front_man_y: self.front_man_y.clone(),
            front_man_z: self.front_man_z.clone(),
        }
    }
}

impl TryFrom<&SaveBandForm> for NewBand {
    type Error = FormError;

    fn try_from(form: &SaveBandForm) -> Result<Self, Self::Error> {
        NewBand::try_from(&form.as_add_form())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_form(id: &str) -> SaveBandForm {
        SaveBandForm {
            id: id.to_string(),
            name: "Portishead".to_string(),
            description: "Trip hop from Bristol".to_string(),
            x: "51.45".to_string(),
            y: "-2.59".to_string(),
            creation_date: "1991-01-01".to_string(),
            number_of_participants: "3".to_string(),
            genre: "SOUL".to_string(),
            singles: String::new(),
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
    fn band_id_parses_positive_integers_only() {
        assert_eq!(save_form("12").band_id().unwrap().get(), 12);
        assert!(matches!(
            save_form("0").band_id(),
            Err(FormError::InvalidBandId)
        ));
        assert!(matches!(
            save_form("twelve").band_id(),
            Err(FormError::InvalidBandId)
        ));
    }

    #[test]
    fn conversion_shares_the_add_form_parsing() {
        let band = NewBand::try_from(&save_form("3")).unwrap();
        assert_eq!(band.name, "Portishead");
        assert!(band.singles.is_none());
    }
}
