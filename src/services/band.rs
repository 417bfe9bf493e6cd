use validator::Validate;

use crate::domain::band::{Band, NewBand};
use crate::domain::types::BandId;
use crate::forms::band::SaveBandForm;
use crate::forms::main::AddBandForm;
use crate::refresh::RefreshCounter;
use crate::repository::{BandReader, BandWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a single band by its identifier.
pub async fn get_band<R>(repo: &R, id: BandId) -> ServiceResult<Band>
where
    R: BandReader + ?Sized,
{
    match repo.get_band_by_id(id).await.map_err(ServiceError::from)? {
        Some(band) => Ok(band),
        None => Err(ServiceError::NotFound),
    }
}

/// Validates the add-band form and persists a new record.
///
/// The refresh counter is bumped exactly once, and only after the directory
/// service confirmed the write.
pub async fn create_band<R>(
    repo: &R,
    refresh: &RefreshCounter,
    form: &AddBandForm,
) -> ServiceResult<Band>
where
    R: BandWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please enter all the required values".to_string(),
        ));
    }

    let new_band = NewBand::try_from(form).map_err(ServiceError::from)?;

    let band = repo.create_band(&new_band).await.map_err(|err| {
        log::error!("Failed to create band: {err}");
        ServiceError::from(err)
    })?;

    refresh.notify();
    Ok(band)
}

/// Validates the save form and replaces the stored band record.
///
/// The refresh counter is bumped exactly once, and only after the directory
/// service confirmed the write.
pub async fn update_band<R>(
    repo: &R,
    refresh: &RefreshCounter,
    form: &SaveBandForm,
) -> ServiceResult<Band>
where
    R: BandWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate form: {err}");
        return Err(ServiceError::Form(
            "Please enter all the required values".to_string(),
        ));
    }

    let id = form.band_id().map_err(ServiceError::from)?;
    let updates = NewBand::try_from(form).map_err(ServiceError::from)?;

    let band = repo.update_band(id, &updates).await.map_err(|err| {
        log::error!("Failed to update band: {err}");
        ServiceError::from(err)
    })?;

    refresh.notify();
    Ok(band)
}

/// Deletes a band record. The refresh counter is bumped only on success.
pub async fn delete_band<R>(repo: &R, refresh: &RefreshCounter, id: BandId) -> ServiceResult<()>
where
    R: BandWriter + ?Sized,
{
    repo.delete_band(id).await.map_err(|err| {
        log::error!("Failed to delete band: {err}");
        ServiceError::from(err)
    })?;

    refresh.notify();
    Ok(())
}
