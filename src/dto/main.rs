use serde::{Deserialize, Serialize};

use crate::domain::band::Band;
use crate::domain::sort::{SortColumn, SortDirection, SortState};
use crate::dto::band::BandFormValues;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub q: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    /// Rows per page requested by the user interface.
    pub size: Option<usize>,
    /// Active sort order, e.g. `name:asc,genre:desc`.
    pub sort: Option<String>,
}

/// One sortable column header of the bands table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SortHeader {
    /// Column key as used in the `sort` query parameter.
    pub key: &'static str,
    /// Text shown in the header cell.
    pub label: &'static str,
    /// Direction marker when the column takes part in the active order.
    pub direction: Option<&'static str>,
    /// Value of the `sort` parameter after a click on this header.
    pub sort_param: String,
}

/// Builds the header row for the given sort order, with each header
/// carrying the order a click on it produces.
pub fn sort_headers(sort: &SortState) -> Vec<SortHeader> {
    SortColumn::ALL
        .into_iter()
        .map(|column| SortHeader {
            key: column.as_str(),
            label: column.label(),
            direction: sort.direction_of(column).map(SortDirection::as_str),
            sort_param: sort.toggled(column).to_query_value(),
        })
        .collect()
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// Paginated list of bands to show in the table.
    pub bands: Paginated<Band>,
    /// Values populating the add-band form.
    pub form: BandFormValues,
    /// Sortable column headers with their toggle links.
    pub sort_headers: Vec<SortHeader>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    /// Rows per page, echoed into pager and header links.
    pub page_size: usize,
    /// Active sort order in query parameter form.
    pub sort_param: String,
    /// Version of the band data the page was rendered from.
    pub data_version: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_toggle_targets() {
        let sort = SortState::parse("name:asc");
        let headers = sort_headers(&sort);
        assert_eq!(headers.len(), SortColumn::ALL.len());

        let name = headers.iter().find(|h| h.key == "name").unwrap();
        assert_eq!(name.direction, Some("asc"));
        assert_eq!(name.sort_param, "name:desc");

        // A click on an unsorted column appends it to the active order.
        let genre = headers.iter().find(|h| h.key == "genre").unwrap();
        assert_eq!(genre.direction, None);
        assert_eq!(genre.sort_param, "name:asc,genre:asc");
    }
}
