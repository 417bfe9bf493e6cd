use crate::domain::sort::SortState;
use crate::dto::api::{BandsQuery, BandsResponse};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE};
use crate::repository::{BandListQuery, BandReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered page of bands for API consumers, applying the same
/// defaults as the index page.
pub async fn list_bands<R>(repo: &R, params: BandsQuery) -> ServiceResult<BandsResponse>
where
    R: BandReader + ?Sized,
{
    let page = params.page.unwrap_or(DEFAULT_PAGE).max(1);
    let size = params.size.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);
    let sort = params
        .sort
        .as_deref()
        .map(SortState::parse)
        .unwrap_or_default();

    let mut query = BandListQuery::new().sort(sort).paginate(page, size);

    let search = params.q.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    if let Some(term) = search {
        query = query.search(term);
    }

    let band_page = repo.list_bands(query).await.map_err(ServiceError::from)?;

    Ok(BandsResponse {
        total_pages: band_page.total_pages,
        bands: band_page.bands,
    })
}
