use async_trait::async_trait;

use crate::domain::band::{Band, BandPage, NewBand};
use crate::domain::sort::SortState;
use crate::domain::types::BandId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Listing parameters forwarded to the band directory service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandListQuery {
    pub search: Option<String>,
    pub sort: SortState,
    pub pagination: Option<Pagination>,
}

impl BandListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[async_trait]
pub trait BandReader {
    async fn get_band_by_id(&self, id: BandId) -> RepositoryResult<Option<Band>>;
    async fn list_bands(&self, query: BandListQuery) -> RepositoryResult<BandPage>;
}

#[async_trait]
pub trait BandWriter {
    async fn create_band(&self, new_band: &NewBand) -> RepositoryResult<Band>;
    async fn update_band(&self, id: BandId, updates: &NewBand) -> RepositoryResult<Band>;
    async fn delete_band(&self, id: BandId) -> RepositoryResult<()>;
}
