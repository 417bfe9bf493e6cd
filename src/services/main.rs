use crate::domain::sort::SortState;
use crate::dto::band::BandFormValues;
use crate::dto::main::{IndexPageData, sort_headers};
pub use crate::dto::main::IndexQuery;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE, Paginated};
use crate::refresh::RefreshCounter;
use crate::repository::{BandListQuery, BandReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the band listing and form state for the main index page.
///
/// `form` overrides the values shown in the add-band form; handlers pass
/// `Some` to echo a rejected submission back to the user, and `None` to show
/// the preset record.
pub async fn load_index_page<R>(
    repo: &R,
    refresh: &RefreshCounter,
    query: IndexQuery,
    form: Option<BandFormValues>,
) -> ServiceResult<IndexPageData>
where
    R: BandReader + ?Sized,
{
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let page_size = query.size.unwrap_or(DEFAULT_ITEMS_PER_PAGE).max(1);
    let sort = query
        .sort
        .as_deref()
        .map(SortState::parse)
        .unwrap_or_default();

    let search_query = query.q.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    let mut list_query = BandListQuery::new()
        .sort(sort.clone())
        .paginate(page, page_size);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let band_page = repo
        .list_bands(list_query)
        .await
        .map_err(ServiceError::from)?;
    let bands = Paginated::new(band_page.bands, page, band_page.total_pages);

    Ok(IndexPageData {
        bands,
        form: form.unwrap_or_else(BandFormValues::preset),
        sort_headers: sort_headers(&sort),
        search_query,
        page_size,
        sort_param: sort.to_query_value(),
        data_version: refresh.version(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::band::BandPage;
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn defaults_apply_when_the_url_has_no_parameters() {
        let mut repo = MockRepository::new();
        repo.expect_list_bands()
            .times(1)
            .withf(|query| {
                query.search.is_none()
                    && query.sort.is_empty()
                    && query.pagination
                        == Some(crate::repository::Pagination {
                            page: DEFAULT_PAGE,
                            per_page: DEFAULT_ITEMS_PER_PAGE,
                        })
            })
            .returning(|_| {
                Ok(BandPage {
                    bands: vec![],
                    total_pages: 0,
                })
            });

        let refresh = RefreshCounter::new();
        let data = load_index_page(&repo, &refresh, IndexQuery::default(), None)
            .await
            .unwrap();

        assert_eq!(data.page_size, DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(data.sort_param, "");
        assert_eq!(data.data_version, 0);
        // With no override the form shows the preset record.
        assert_eq!(data.form, BandFormValues::preset());
        assert!(data.bands.items.is_empty());
    }

    #[actix_web::test]
    async fn url_parameters_reach_the_repository_query() {
        let mut repo = MockRepository::new();
        repo.expect_list_bands()
            .times(1)
            .withf(|query| {
                query.search.as_deref() == Some("nirvana")
                    && query.sort.to_query_value() == "name:asc"
                    && query.pagination
                        == Some(crate::repository::Pagination {
                            page: 3,
                            per_page: 25,
                        })
            })
            .returning(|_| {
                Ok(BandPage {
                    bands: vec![],
                    total_pages: 15,
                })
            });

        let refresh = RefreshCounter::new();
        let query = IndexQuery {
            q: Some("  nirvana ".to_string()),
            page: Some(3),
            size: Some(25),
            sort: Some("name:asc".to_string()),
        };
        let data = load_index_page(&repo, &refresh, query, None).await.unwrap();

        assert_eq!(data.search_query.as_deref(), Some("nirvana"));
        assert_eq!(data.bands.page, 3);
        assert_eq!(data.bands.pages.last(), Some(&Some(15)));
        let name_header = data.sort_headers.iter().find(|h| h.key == "name").unwrap();
        assert_eq!(name_header.direction, Some("asc"));
    }

    #[actix_web::test]
    async fn echoed_form_values_override_the_preset() {
        let mut repo = MockRepository::new();
        repo.expect_list_bands().returning(|_| {
            Ok(BandPage {
                bands: vec![],
                total_pages: 0,
            })
        });

        let refresh = RefreshCounter::new();
        let echo = BandFormValues {
            name: "Nirvana".to_string(),
            ..BandFormValues::default()
        };
        let data = load_index_page(&repo, &refresh, IndexQuery::default(), Some(echo.clone()))
            .await
            .unwrap();
        assert_eq!(data.form, echo);
    }
}
