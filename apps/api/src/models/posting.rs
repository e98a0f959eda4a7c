use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed set of Korean display labels. Serde renames on each enum use the
/// same strings, so `label()` and the JSON form always agree.
pub trait Labeled: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(Labeled::label).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstitutionType {
    #[serde(rename = "유치원")]
    Kindergarten,
    #[serde(rename = "어린이집")]
    Daycare,
    #[serde(rename = "기타")]
    Other,
}

impl Labeled for InstitutionType {
    const ALL: &'static [Self] = &[Self::Kindergarten, Self::Daycare, Self::Other];

    fn label(&self) -> &'static str {
        match self {
            Self::Kindergarten => "유치원",
            Self::Daycare => "어린이집",
            Self::Other => "기타",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCategory {
    #[serde(rename = "정교사")]
    LeadTeacher,
    #[serde(rename = "보육교사")]
    ChildcareTeacher,
    #[serde(rename = "연장반교사")]
    ExtendedCareTeacher,
    #[serde(rename = "보조교사")]
    AssistantTeacher,
    #[serde(rename = "미술교사")]
    ArtTeacher,
    #[serde(rename = "음악교사")]
    MusicTeacher,
    #[serde(rename = "체육교사")]
    PhysicalEducationTeacher,
    #[serde(rename = "학습지교사")]
    HomeStudyTutor,
    #[serde(rename = "특기교사")]
    SpecialtyTeacher,
}

impl Labeled for JobCategory {
    const ALL: &'static [Self] = &[
        Self::LeadTeacher,
        Self::ChildcareTeacher,
        Self::ExtendedCareTeacher,
        Self::AssistantTeacher,
        Self::ArtTeacher,
        Self::MusicTeacher,
        Self::PhysicalEducationTeacher,
        Self::HomeStudyTutor,
        Self::SpecialtyTeacher,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::LeadTeacher => "정교사",
            Self::ChildcareTeacher => "보육교사",
            Self::ExtendedCareTeacher => "연장반교사",
            Self::AssistantTeacher => "보조교사",
            Self::ArtTeacher => "미술교사",
            Self::MusicTeacher => "음악교사",
            Self::PhysicalEducationTeacher => "체육교사",
            Self::HomeStudyTutor => "학습지교사",
            Self::SpecialtyTeacher => "특기교사",
        }
    }
}

/// Region used by the area selector. `location` on a posting stays free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationArea {
    #[serde(rename = "서울")]
    Seoul,
    #[serde(rename = "경기")]
    Gyeonggi,
    #[serde(rename = "인천")]
    Incheon,
    #[serde(rename = "부산")]
    Busan,
    #[serde(rename = "대구")]
    Daegu,
    #[serde(rename = "대전")]
    Daejeon,
    #[serde(rename = "광주")]
    Gwangju,
    #[serde(rename = "기타")]
    Other,
}

impl Labeled for LocationArea {
    const ALL: &'static [Self] = &[
        Self::Seoul,
        Self::Gyeonggi,
        Self::Incheon,
        Self::Busan,
        Self::Daegu,
        Self::Daejeon,
        Self::Gwangju,
        Self::Other,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Seoul => "서울",
            Self::Gyeonggi => "경기",
            Self::Incheon => "인천",
            Self::Busan => "부산",
            Self::Daegu => "대구",
            Self::Daejeon => "대전",
            Self::Gwangju => "광주",
            Self::Other => "기타",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "신입")]
    Entry,
    #[serde(rename = "1-3년")]
    OneToThreeYears,
    #[serde(rename = "3-5년")]
    ThreeToFiveYears,
    #[serde(rename = "5년 이상")]
    FiveYearsPlus,
    #[serde(rename = "경력무관")]
    Any,
}

impl Labeled for ExperienceLevel {
    const ALL: &'static [Self] = &[
        Self::Entry,
        Self::OneToThreeYears,
        Self::ThreeToFiveYears,
        Self::FiveYearsPlus,
        Self::Any,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Entry => "신입",
            Self::OneToThreeYears => "1-3년",
            Self::ThreeToFiveYears => "3-5년",
            Self::FiveYearsPlus => "5년 이상",
            Self::Any => "경력무관",
        }
    }
}

/// A single recruitment listing. Built once from the seed data and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub institution_name: String,
    pub institution_type: InstitutionType,
    pub category: JobCategory,
    pub location: String,
    pub area: LocationArea,
    pub salary: String,
    pub experience: ExperienceLevel,
    /// Either `YYYY-MM-DD` or free text such as "채용시까지".
    pub deadline: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
}

impl JobPosting {
    /// The deadline as a date, when it is written as one.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d").ok()
    }
}

/// Structured summary of a posting produced by the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAnalysis {
    pub summary: String,
    /// Expected to hold three entries; not enforced.
    pub pros: Vec<String>,
    /// Expected to hold two entries; not enforced.
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_labels_match_serde<T: Labeled + Serialize>() {
        for value in T::ALL {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.label()));
        }
    }

    #[test]
    fn test_labels_match_serde_names() {
        assert_labels_match_serde::<InstitutionType>();
        assert_labels_match_serde::<JobCategory>();
        assert_labels_match_serde::<LocationArea>();
        assert_labels_match_serde::<ExperienceLevel>();
    }

    #[test]
    fn test_enum_cardinalities() {
        assert_eq!(InstitutionType::ALL.len(), 3);
        assert_eq!(JobCategory::ALL.len(), 9);
        assert_eq!(LocationArea::ALL.len(), 8);
        assert_eq!(ExperienceLevel::ALL.len(), 5);
    }

    #[test]
    fn test_from_label_roundtrips_and_rejects_unknown() {
        assert_eq!(
            ExperienceLevel::from_label("5년 이상"),
            Some(ExperienceLevel::FiveYearsPlus)
        );
        assert_eq!(LocationArea::from_label("제주"), None);
        assert_eq!(JobCategory::from_label(""), None);
    }

    #[test]
    fn test_deadline_date_parses_only_dates() {
        let mut posting = JobPosting {
            id: "x".to_string(),
            title: "t".to_string(),
            institution_name: "i".to_string(),
            institution_type: InstitutionType::Other,
            category: JobCategory::ArtTeacher,
            location: "l".to_string(),
            area: LocationArea::Other,
            salary: "s".to_string(),
            experience: ExperienceLevel::Any,
            deadline: "2024-06-10".to_string(),
            content: "c".to_string(),
            tags: vec![],
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(posting.deadline_date(), NaiveDate::from_ymd_opt(2024, 6, 10));

        posting.deadline = "상시모집".to_string();
        assert_eq!(posting.deadline_date(), None);
    }

    #[test]
    fn test_ai_analysis_deserializes_schema_shape() {
        let json = r#"{"summary": "요약", "pros": ["a", "b", "c"], "tips": ["x", "y"]}"#;
        let analysis: AiAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.summary, "요약");
        assert_eq!(analysis.pros.len(), 3);
        assert_eq!(analysis.tips.len(), 2);
    }
}
