//! Multi-column sort order for band listings.
//!
//! The order lives in the `sort` query parameter as `column:direction` pairs
//! joined by commas (`name:asc,genre:desc`), so every listing URL fully
//! describes the table it renders.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::types::TypeConstraintError;

/// Direction of a single sort entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Band table columns that support sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    Name,
    Description,
    X,
    Y,
    CreationDate,
    NumberOfParticipants,
    Genre,
}

impl SortColumn {
    /// Sortable columns in table order.
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Description,
        SortColumn::X,
        SortColumn::Y,
        SortColumn::CreationDate,
        SortColumn::NumberOfParticipants,
        SortColumn::Genre,
    ];

    /// Key used in query parameters and directory service sort fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::Name => "name",
            SortColumn::Description => "description",
            SortColumn::X => "x",
            SortColumn::Y => "y",
            SortColumn::CreationDate => "creationDate",
            SortColumn::NumberOfParticipants => "numberOfParticipants",
            SortColumn::Genre => "genre",
        }
    }

    /// Human readable column header.
    pub const fn label(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::Description => "Description",
            SortColumn::X => "X",
            SortColumn::Y => "Y",
            SortColumn::CreationDate => "Created",
            SortColumn::NumberOfParticipants => "Members",
            SortColumn::Genre => "Genre",
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// Ordered set of active sort entries. Entries are kept in the order the
/// user activated them, and a column appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<(SortColumn, SortDirection)>,
}

impl SortState {
    /// Empty sort order, i.e. the directory service default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `sort` query parameter. Malformed or unknown pairs are
    /// ignored so a hand-edited URL degrades to a partial order instead of
    /// failing the request; duplicate columns keep their first occurrence.
    pub fn parse(value: &str) -> Self {
        let mut state = Self::new();
        for part in value.split(',') {
            let Some((column, direction)) = part.trim().split_once(':') else {
                continue;
            };
            let (Ok(column), Ok(direction)) =
                (SortColumn::from_str(column), SortDirection::from_str(direction))
            else {
                continue;
            };
            if state.direction_of(column).is_none() {
                state.entries.push((column, direction));
            }
        }
        state
    }

    /// Active direction for a column, if any.
    pub fn direction_of(&self, column: SortColumn) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, direction)| *direction)
    }

    /// Returns the state after one click on a column header: unsorted
    /// columns become ascending, ascending becomes descending, and a
    /// descending column drops out of the order. Other entries keep their
    /// positions.
    #[must_use]
    pub fn toggled(&self, column: SortColumn) -> Self {
        let mut entries = self.entries.clone();
        match self.direction_of(column) {
            None => entries.push((column, SortDirection::Asc)),
            Some(SortDirection::Asc) => {
                for entry in &mut entries {
                    if entry.0 == column {
                        entry.1 = SortDirection::Desc;
                    }
                }
            }
            Some(SortDirection::Desc) => entries.retain(|(c, _)| *c != column),
        }
        Self { entries }
    }

    /// Serializes the state back into the `sort` query parameter format.
    pub fn to_query_value(&self) -> String {
        self.entries
            .iter()
            .map(|(column, direction)| format!("{column}:{direction}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Active entries in activation order.
    pub fn entries(&self) -> &[(SortColumn, SortDirection)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for SortState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_through_directions() {
        let state = SortState::new();
        let asc = state.toggled(SortColumn::Name);
        assert_eq!(asc.direction_of(SortColumn::Name), Some(SortDirection::Asc));
        let desc = asc.toggled(SortColumn::Name);
        assert_eq!(
            desc.direction_of(SortColumn::Name),
            Some(SortDirection::Desc)
        );
        let unset = desc.toggled(SortColumn::Name);
        assert_eq!(unset.direction_of(SortColumn::Name), None);
        assert!(unset.is_empty());
    }

    #[test]
    fn toggle_preserves_other_entries_and_order() {
        let state = SortState::new()
            .toggled(SortColumn::Name)
            .toggled(SortColumn::Genre)
            .toggled(SortColumn::Name);
        assert_eq!(state.to_query_value(), "name:desc,genre:asc");
        let state = state.toggled(SortColumn::Name);
        assert_eq!(state.to_query_value(), "genre:asc");
    }

    #[test]
    fn query_value_round_trips() {
        let state = SortState::parse("name:asc,creationDate:desc");
        assert_eq!(state.to_query_value(), "name:asc,creationDate:desc");
        assert_eq!(
            state.direction_of(SortColumn::CreationDate),
            Some(SortDirection::Desc)
        );
    }

    #[test]
    fn parse_skips_malformed_and_unknown_pairs() {
        let state = SortState::parse("bogus:asc,name,genre:sideways,id:desc,id:asc");
        assert_eq!(state.to_query_value(), "id:desc");
    }

    #[test]
    fn parse_of_empty_string_is_default() {
        assert!(SortState::parse("").is_empty());
    }
}
