//! Catalog — the in-memory posting dataset, fixed for the life of the process.

use serde::Serialize;

use crate::models::{ExperienceLevel, InstitutionType, JobCategory, JobPosting, Labeled, LocationArea};

pub mod handlers;
mod seed;

pub use seed::seed_postings;

/// Immutable posting list shared by all handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    postings: Vec<JobPosting>,
}

/// Values offered by the filter selectors, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub areas: Vec<&'static str>,
    pub categories: Vec<&'static str>,
    pub experiences: Vec<&'static str>,
    pub institution_types: Vec<&'static str>,
}

impl Catalog {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    /// The built-in dataset.
    pub fn seeded() -> Self {
        Self::new(seed_postings())
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

pub fn filter_options() -> FilterOptions {
    FilterOptions {
        areas: LocationArea::labels(),
        categories: JobCategory::labels(),
        experiences: ExperienceLevel::labels(),
        institution_types: InstitutionType::labels(),
    }
}
