//! Record filtering
//!
//! A category pre-filter (status, tab) composed with a case-insensitive
//! substring search over each record's searchable fields. Both are pure and
//! keep the input order.

use crate::models::{Client, JudicialHouse, LegalProcess, TrackingItem, TrackingStatus};

/// Records that expose text fields to free-text search
pub trait Searchable {
    /// Fields the search query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// True if any searchable field contains `query`, ignoring case.
    /// `query` must already be lowercased.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query))
    }
}

/// Fixed-set membership filter applied before the text search
pub trait CategoryFilter<R> {
    fn matches(&self, record: &R) -> bool;
}

/// True when the query should not narrow the list
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Keep the records whose searchable fields contain `query`.
///
/// A blank query returns every record. The result is a stable subsequence
/// of `records`.
pub fn filter<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<&'a R> {
    if is_blank(query) {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.matches_lowercase(&needle))
        .collect()
}

/// Category pre-filter AND text search
pub fn filter_records<'a, R, C>(records: &'a [R], category: &C, query: &str) -> Vec<&'a R>
where
    R: Searchable,
    C: CategoryFilter<R> + ?Sized,
{
    let needle = (!is_blank(query)).then(|| query.to_lowercase());
    records
        .iter()
        .filter(|r| category.matches(r))
        .filter(|r| needle.as_deref().map_or(true, |q| r.matches_lowercase(q)))
        .collect()
}

// =============================================================================
// Searchable fields
// =============================================================================

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl Searchable for LegalProcess {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.case_number.as_str(), self.client.as_str()]
    }
}

impl Searchable for TrackingItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.case_number.as_str(), self.description.as_str()]
    }
}

impl Searchable for JudicialHouse {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str(), self.city.as_str()]
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Category that accepts every record (screens without tabs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllRecords;

impl<R> CategoryFilter<R> for AllRecords {
    fn matches(&self, _record: &R) -> bool {
        true
    }
}

/// Tabs on the legal processes screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessTab {
    /// Everything that is not archived
    #[default]
    Active,
    Archived,
}

impl ProcessTab {
    pub const ALL: [ProcessTab; 2] = [ProcessTab::Active, ProcessTab::Archived];

    pub fn label(&self) -> &'static str {
        match self {
            ProcessTab::Active => "Activos",
            ProcessTab::Archived => "Archivados",
        }
    }
}

impl CategoryFilter<LegalProcess> for ProcessTab {
    fn matches(&self, record: &LegalProcess) -> bool {
        match self {
            ProcessTab::Active => !record.status.is_archived(),
            ProcessTab::Archived => record.status.is_archived(),
        }
    }
}

impl CategoryFilter<TrackingItem> for TrackingStatus {
    fn matches(&self, record: &TrackingItem) -> bool {
        record.status == *self
    }
}
