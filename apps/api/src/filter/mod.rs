//! Filter Engine — narrows the posting list by free-text search and three selectors.
//!
//! All four predicates are independent and combined with AND. Filtering borrows
//! the postings and returns them in input order; nothing is copied or mutated.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ExperienceLevel, JobCategory, JobPosting, Labeled, LocationArea};

/// Selector label meaning "no restriction".
pub const ALL_SENTINEL: &str = "전체";

/// Active filter predicates. `None` on a selector means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub area: Option<LocationArea>,
    pub category: Option<JobCategory>,
    pub experience: Option<ExperienceLevel>,
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recently created first.
    Latest,
    /// Earliest dated deadline first; undated deadlines ("상시모집") last.
    Deadline,
}

/// Raw query string of `GET /api/v1/postings`.
#[derive(Debug, Default, Deserialize)]
pub struct PostingQuery {
    pub search: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
    pub experience: Option<String>,
    pub sort: Option<String>,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Deadline => "deadline",
        }
    }
}

/// Parses the `sort` query value. Missing or empty means input order.
pub fn parse_sort(raw: Option<&str>) -> Result<Option<SortOrder>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some("latest") => Ok(Some(SortOrder::Latest)),
        Some("deadline") => Ok(Some(SortOrder::Deadline)),
        Some(other) => Err(AppError::Validation(format!(
            "Unknown sort '{other}'. Expected one of: {}, {}",
            SortOrder::Latest.as_str(),
            SortOrder::Deadline.as_str()
        ))),
    }
}

impl FilterCriteria {
    /// True when any predicate differs from "match everything".
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.area.is_some()
            || self.category.is_some()
            || self.experience.is_some()
    }

    pub fn matches(&self, posting: &JobPosting) -> bool {
        let match_search = self.search_term.is_empty()
            || posting.title.contains(self.search_term.as_str())
            || posting.institution_name.contains(self.search_term.as_str());
        let match_area = self.area.map_or(true, |a| posting.area == a);
        let match_category = self.category.map_or(true, |c| posting.category == c);
        let match_experience = self.experience.map_or(true, |e| posting.experience == e);

        match_search && match_area && match_category && match_experience
    }
}

impl TryFrom<&PostingQuery> for FilterCriteria {
    type Error = AppError;

    fn try_from(query: &PostingQuery) -> Result<Self, Self::Error> {
        Ok(FilterCriteria {
            search_term: query.search.clone().unwrap_or_default(),
            area: parse_selector("area", query.area.as_deref())?,
            category: parse_selector("category", query.category.as_deref())?,
            experience: parse_selector("experience", query.experience.as_deref())?,
        })
    }
}

/// Parses one selector value. Missing, empty or `전체` mean "all".
fn parse_selector<T: Labeled>(field: &str, raw: Option<&str>) -> Result<Option<T>, AppError> {
    match raw.map(str::trim) {
        None | Some("") | Some(ALL_SENTINEL) => Ok(None),
        Some(label) => T::from_label(label).map(Some).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown {field} '{label}'. Expected one of: {ALL_SENTINEL}, {}",
                T::labels().join(", ")
            ))
        }),
    }
}

/// Returns the postings that satisfy every predicate, in input order.
pub fn filter_postings<'a>(
    postings: &'a [JobPosting],
    criteria: &FilterCriteria,
) -> Vec<&'a JobPosting> {
    postings.iter().filter(|p| criteria.matches(p)).collect()
}

/// Sorts in place. Stable, so ties keep their filtered order.
pub fn sort_postings(postings: &mut [&JobPosting], order: SortOrder) {
    match order {
        SortOrder::Latest => postings.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Deadline => postings.sort_by(|a, b| {
            match (a.deadline_date(), b.deadline_date()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
}
