pub mod posting;

pub use posting::{
    AiAnalysis, ExperienceLevel, InstitutionType, JobCategory, JobPosting, Labeled, LocationArea,
};
