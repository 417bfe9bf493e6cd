//! REST implementation of the band repository, backed by the band
//! directory service.
use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::domain::band::{Band, BandPage, NewBand};
use crate::domain::types::BandId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BandListQuery, BandReader, BandWriter};

/// Client for the band directory REST API. Cheap to clone; the inner
/// `reqwest::Client` shares its connection pool across clones.
#[derive(Debug, Clone)]
pub struct RestRepository {
    base_url: String,
    http: reqwest::Client,
}

impl RestRepository {
    /// Creates a repository talking to the service at `base_url`, e.g.
    /// `http://localhost:9000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn bands_url(&self) -> String {
        format!("{}/bands", self.base_url)
    }

    fn band_url(&self, id: BandId) -> String {
        format!("{}/bands/{id}", self.base_url)
    }

    /// Query parameters for a listing request. Empty search terms and the
    /// default sort order are omitted entirely.
    fn list_params(query: &BandListQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(pagination) = &query.pagination {
            params.push(("page", pagination.page.to_string()));
            params.push(("size", pagination.per_page.to_string()));
        }
        if !query.sort.is_empty() {
            params.push(("sort", query.sort.to_query_value()));
        }
        if let Some(search) = &query.search {
            if !search.trim().is_empty() {
                params.push(("q", search.trim().to_string()));
            }
        }
        params
    }

    async fn api_error(resp: Response) -> RepositoryError {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        RepositoryError::Api { status, message }
    }

    async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> RepositoryResult<T> {
        resp.json::<T>()
            .await
            .map_err(|e| RepositoryError::Parse(e.to_string()))
    }
}

#[async_trait]
impl BandReader for RestRepository {
    async fn get_band_by_id(&self, id: BandId) -> RepositoryResult<Option<Band>> {
        let resp = self.http.get(self.band_url(id)).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(Self::read_json(resp).await?)),
            _ => Err(Self::api_error(resp).await),
        }
    }

    async fn list_bands(&self, query: BandListQuery) -> RepositoryResult<BandPage> {
        let resp = self
            .http
            .get(self.bands_url())
            .query(&Self::list_params(&query))
            .send()
            .await?;
        if resp.status().is_success() {
            Self::read_json(resp).await
        } else {
            Err(Self::api_error(resp).await)
        }
    }
}

#[async_trait]
impl BandWriter for RestRepository {
    async fn create_band(&self, new_band: &NewBand) -> RepositoryResult<Band> {
        let resp = self
            .http
            .post(self.bands_url())
            .json(new_band)
            .send()
            .await?;
        if resp.status().is_success() {
            Self::read_json(resp).await
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    async fn update_band(&self, id: BandId, updates: &NewBand) -> RepositoryResult<Band> {
        let resp = self
            .http
            .put(self.band_url(id))
            .json(updates)
            .send()
            .await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            status if status.is_success() => Self::read_json(resp).await,
            _ => Err(Self::api_error(resp).await),
        }
    }

    async fn delete_band(&self, id: BandId) -> RepositoryResult<()> {
        let resp = self.http.delete(self.band_url(id)).send().await?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(RepositoryError::NotFound),
            status if status.is_success() => Ok(()),
            _ => Err(Self::api_error(resp).await),
        }
    }
}
