//! DTOs shaped for the add and edit band forms.

use serde::{Deserialize, Serialize};

use crate::domain::band::{Band, NewBand};
use crate::domain::preset::band_preset;
use crate::forms::band::SaveBandForm;
use crate::forms::join_singles;
use crate::forms::main::AddBandForm;

/// Query parameters accepted by the band edit page.
#[derive(Debug, Default, Deserialize)]
pub struct EditBandQuery {
    /// When set, the form is seeded from the preset record instead of the
    /// saved band.
    pub preset: Option<bool>,
}

/// Everything the band form inputs display, as text. Echoing submitted
/// values through this struct keeps user input on the screen when a
/// submission is rejected.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct BandFormValues {
    pub name: String,
    pub description: String,
    pub x: String,
    pub y: String,
    pub creation_date: String,
    pub number_of_participants: String,
    pub genre: String,
    pub singles: String,
    pub front_man_name: String,
    pub front_man_birthday: String,
    pub front_man_passport_id: String,
    pub front_man_location_name: String,
    pub front_man_x: String,
    pub front_man_y: String,
    pub front_man_z: String,
}

impl BandFormValues {
    /// Form values for the preset record.
    pub fn preset() -> Self {
        Self::from_new_band(&band_preset())
    }

    /// Formats a payload back into form input values.
    pub fn from_new_band(band: &NewBand) -> Self {
        let mut values = Self {
            name: band.name.clone(),
            description: band.description.clone(),
            x: band.coordinates.x.to_string(),
            y: band.coordinates.y.to_string(),
            creation_date: band.creation_date.format("%Y-%m-%dT%H:%M").to_string(),
            number_of_participants: band.number_of_participants.to_string(),
            genre: band.genre.as_str().to_string(),
            singles: band
                .singles
                .as_deref()
                .map(join_singles)
                .unwrap_or_default(),
            ..Self::default()
        };
        if let Some(front_man) = &band.front_man {
            values.front_man_name = front_man.name.clone().unwrap_or_default();
            values.front_man_birthday = front_man
                .birthday
                .map(|day| day.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            values.front_man_passport_id = front_man.passport_id.clone();
            values.front_man_location_name = front_man.location.name.clone().unwrap_or_default();
            values.front_man_x = front_man.location.x.to_string();
            values.front_man_y = front_man.location.y.to_string();
            values.front_man_z = front_man.location.z.to_string();
        }
        values
    }

    /// Form values showing a saved band, for the edit page.
    pub fn from_band(band: &Band) -> Self {
        Self::from_new_band(&NewBand::from(band))
    }

    /// Echoes a submitted add form verbatim, valid or not.
    pub fn from_add_form(form: &AddBandForm) -> Self {
        Self {
            name: form.name.clone(),
            description: form.description.clone(),
            x: form.x.clone(),
            y: form.y.clone(),
            creation_date: form.creation_date.clone(),
            number_of_participants: form.number_of_participants.clone(),
            genre: form.genre.clone(),
            singles: form.singles.clone(),
            front_man_name: form.front_man_name.clone(),
            front_man_birthday: form.front_man_birthday.clone(),
            front_man_passport_id: form.front_man_passport_id.clone(),
            front_man_location_name: form.front_man_location_name.clone(),
            front_man_x: form.front_man_x.clone(),
            front_man_y: form.front_man_y.clone(),
            front_man_z: form.front_man_z.clone(),
        }
    }

    /// Echoes a submitted save form verbatim, valid or not.
    pub fn from_save_form(form: &SaveBandForm) -> Self {
        Self::from_add_form(&form.as_add_form())
    }
}
