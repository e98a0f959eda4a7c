use chrono::NaiveDate;

use crate::models::{ExperienceLevel, InstitutionType, JobCategory, JobPosting, LocationArea};

/// The built-in posting dataset loaded at startup.
pub fn seed_postings() -> Vec<JobPosting> {
    vec![
        posting(
            "1",
            "햇살유치원 정교사 및 부담임 교사 채용 공고",
            "햇살유치원",
            InstitutionType::Kindergarten,
            JobCategory::LeadTeacher,
            "서울시 서초구",
            LocationArea::Seoul,
            "연봉 3,200만원 이상",
            ExperienceLevel::OneToThreeYears,
            "2024-05-30",
            "저희 햇살유치원에서는 아이들을 사랑하는 마음으로 함께 성장해 나갈 정교사를 모집합니다. 유아교육 전공자 및 정교사 2급 자격증 소지자를 대상으로 하며, 다양한 연수 기회를 제공합니다.",
            &["정규직", "교통비지원", "연차제도"],
            (2024, 5, 1),
        ),
        posting(
            "2",
            "꿈나무 어린이집 영아반 보조교사 급구",
            "꿈나무 어린이집",
            InstitutionType::Daycare,
            JobCategory::AssistantTeacher,
            "경기도 성남시 분당구",
            LocationArea::Gyeonggi,
            "시급 11,000원",
            ExperienceLevel::Entry,
            "채용시까지",
            "영아반 아이들을 따뜻하게 돌봐주실 보조교사 선생님을 모십니다. 오후 파트타임 근무이며, 보육교사 자격증 필수입니다.",
            &["단기알바", "파트타임", "초보환영"],
            (2024, 5, 3),
        ),
        posting(
            "3",
            "아트팡 미술학원 창의미술 전임교사 채용",
            "아트팡 미술센터",
            InstitutionType::Other,
            JobCategory::ArtTeacher,
            "인천시 연수구",
            LocationArea::Incheon,
            "월 280만원",
            ExperienceLevel::ThreeToFiveYears,
            "2024-06-10",
            "아이들의 창의력을 함께 키워나갈 열정적인 미술 선생님을 모십니다. 아동미술 경력자를 우대합니다.",
            &["미술교육", "인센티브", "쾌적한환경"],
            (2024, 5, 5),
        ),
        posting(
            "4",
            "서울시립 푸른숲 어린이집 연장반 교사 채용",
            "푸른숲 어린이집",
            InstitutionType::Daycare,
            JobCategory::ExtendedCareTeacher,
            "서울시 강남구",
            LocationArea::Seoul,
            "월 250만원선",
            ExperienceLevel::Any,
            "2024-06-15",
            "국공립 어린이집에서 함께하실 열정적인 선생님을 기다립니다. 연장반 전담 교사로서 안정적인 근무 환경을 보장합니다.",
            &["국공립", "복리후생우수", "4대보험"],
            (2024, 5, 2),
        ),
        posting(
            "5",
            "방문 학습지 교사 (한글/수학) 파트타임 모집",
            "아이똑똑 교육",
            InstitutionType::Other,
            JobCategory::HomeStudyTutor,
            "부산시 해운대구",
            LocationArea::Busan,
            "건당 수수료제",
            ExperienceLevel::Entry,
            "상시모집",
            "가정 방문을 통해 아이들의 기초 학습을 도와주실 선생님을 모십니다. 유아 교육에 열정이 있는 분이라면 누구나 환영합니다.",
            &["유연한근무", "자차필수", "인센티브"],
            (2024, 5, 6),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    institution_name: &str,
    institution_type: InstitutionType,
    category: JobCategory,
    location: &str,
    area: LocationArea,
    salary: &str,
    experience: ExperienceLevel,
    deadline: &str,
    content: &str,
    tags: &[&str],
    (year, month, day): (i32, u32, u32),
) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        institution_name: institution_name.to_string(),
        institution_type,
        category,
        location: location.to_string(),
        area,
        salary: salary.to_string(),
        experience,
        deadline: deadline.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        // Seed dates are literals; an invalid one is a programming error.
        created_at: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}
