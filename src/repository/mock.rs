//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::band::{Band, BandPage, NewBand};
use crate::domain::types::BandId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{BandListQuery, BandReader, BandWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl BandReader for Repository {
        async fn get_band_by_id(&self, id: BandId) -> RepositoryResult<Option<Band>>;
        async fn list_bands(&self, query: BandListQuery) -> RepositoryResult<BandPage>;
    }

    #[async_trait]
    impl BandWriter for Repository {
        async fn create_band(&self, new_band: &NewBand) -> RepositoryResult<Band>;
        async fn update_band(&self, id: BandId, updates: &NewBand) -> RepositoryResult<Band>;
        async fn delete_band(&self, id: BandId) -> RepositoryResult<()>;
    }
}
