// Prompt text and canned fallbacks for the assistant.
// Fallback strings are part of the API contract: clients may compare against them.

use serde_json::{json, Value};

/// Posting summary prompt. Replace `{content}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str =
    "다음 유아교육 기관의 채용 공고 내용을 분석해서 요약해줘: \n\n {content}";

/// Job posting draft prompt. Replace `{requirements}` before sending.
pub const JOB_POSTING_PROMPT_TEMPLATE: &str =
    "다음 조건을 바탕으로 유치원/어린이집 채용 공고문을 전문가스럽고 따뜻하게 작성해줘: \n\n {requirements}";

/// Recruiter-side voice: warm and trustworthy.
pub const JOB_POSTING_SYSTEM: &str = "당신은 유아교육 채용 전문 컨설턴트입니다. \
    구인자(원장님/부장님)의 입장에서 신뢰감 있고 따뜻한 어조를 사용하세요.";

/// Self-introduction draft prompt. Replace `{info}` before sending.
pub const SELF_INTRO_PROMPT_TEMPLATE: &str =
    "다음 정보를 바탕으로 유치원/어린이집 지원을 위한 자기소개서 핵심 단락을 작성해줘: \n\n {info}";

/// Applicant-side voice: genuine and professional.
pub const SELF_INTRO_SYSTEM: &str = "당신은 유아교육 취업 컨설턴트입니다. \
    구직자(교사)의 입장에서 자신의 역량과 아이들에 대한 사랑이 잘 드러나도록 \
    전문적이고 진정성 있게 작성하세요.";

pub const SUMMARY_FALLBACK: &str = "AI 요약에 실패했습니다.";
pub const SUMMARY_FALLBACK_PRO: &str = "직접 내용을 확인해주세요.";
pub const SUMMARY_FALLBACK_TIP: &str = "문의처로 직접 연락해보는 것이 가장 정확합니다.";
pub const JOB_POSTING_FALLBACK: &str = "공고문 생성 중 오류가 발생했습니다.";
pub const SELF_INTRO_FALLBACK: &str = "자기소개서 생성 중 오류가 발생했습니다.";

/// Response schema for the summary call, in Gemini's OpenAPI subset.
pub fn summary_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "공고의 핵심 내용을 한 문장으로 요약"
            },
            "pros": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "해당 공고의 장점이나 혜택 3가지"
            },
            "tips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "지원자를 위한 면접이나 자소서 팁 2가지"
            }
        },
        "required": ["summary", "pros", "tips"]
    })
}
