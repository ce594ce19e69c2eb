//! Search & facet filtering over in-memory encyclopedia catalogs.
//!
//! A catalog is the full list of records fetched for one listing. Listings narrow it with
//! two independent predicates: a case-insensitive substring match on the record name and
//! an exact match on a categorical facet (nation for ships, game mode for battle types).
//! Facet values offered to the user are always derived from the full catalog so the
//! choices do not shrink as the user filters.

use std::collections::BTreeSet;

use wows_api::model::encyclopedia::{BattleType, Ship};

/// A record that can be searched by name and filtered by facet.
pub trait CatalogRecord {
    /// Name matched against the search query
    fn name(&self) -> Option<&str>;

    /// Categorical value matched against the facet filter
    fn facet(&self) -> Option<&str>;
}

impl CatalogRecord for Ship {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn facet(&self) -> Option<&str> {
        self.nation.as_deref()
    }
}

impl CatalogRecord for BattleType {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn facet(&self) -> Option<&str> {
        self.game_mode.as_deref()
    }
}

/// Returns the records matching both the search query and the facet, in catalog order.
///
/// # Arguments
/// - `catalog` - Full catalog, never modified
/// - `query` - Substring matched case-insensitively against the name; an empty or
///   whitespace-only query matches every record
/// - `facet` - Exact, case-sensitive facet value; `None` matches every record
///
/// # Returns
/// References to the matching records. Records without a name never match a non-empty
/// query and records without a facet never match a present facet.
pub fn filter_catalog<'a, T: CatalogRecord>(
    catalog: &'a [T],
    query: &str,
    facet: Option<&str>,
) -> Vec<&'a T> {
    let needle = if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    };

    catalog
        .iter()
        .filter(|record| match &needle {
            None => true,
            Some(needle) => record
                .name()
                .is_some_and(|name| name.to_lowercase().contains(needle.as_str())),
        })
        .filter(|record| match facet {
            None => true,
            Some(facet) => record.facet() == Some(facet),
        })
        .collect()
}

/// Returns every facet value present in the catalog, deduplicated and sorted ascending.
pub fn distinct_facet_values<T: CatalogRecord>(catalog: &[T]) -> Vec<String> {
    catalog
        .iter()
        .filter_map(|record| record.facet())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
