//! Fixed text pools the composers draw from.
//!
//! Pools indexed by `|seed + offset| % len` live here so the composers read
//! as layout only. Pools that embed a keyword are functions.

use crate::catalog::Domain;

/// Section separator line.
pub const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Advice line used when an entry has none for a domain.
pub const CALM_ADVICE: &str = "오늘은 평온한 흐름을 유지하세요.";

/// "Today's message" lines for a single keyword.
pub fn today_messages(keyword: &str) -> [String; 7] {
    [
        format!("오늘 {keyword} 꿈을 꾸셨다면, 무의식이 특별한 메시지를 보내고 있습니다."),
        format!("{keyword}의 에너지가 오늘 하루를 좌우할 수 있습니다."),
        format!("{keyword} 꿈은 오늘 중요한 결정의 힌트가 될 수 있습니다."),
        format!("이 시기에 {keyword} 꿈을 꾸는 것은 변화의 전조입니다."),
        format!("{keyword}이(가) 당신의 잠재의식에서 깨어나고 있습니다."),
        format!("오늘 {keyword}의 기운이 당신과 함께합니다."),
        format!("{keyword} 꿈은 내면 깊은 곳의 소망을 반영합니다."),
    ]
}

/// Sentences appended to the detailed interpretation.
pub const ADDITIONAL: [&str; 7] = [
    "특히 오늘 이 꿈을 꾸셨다면, 가까운 시일 내에 관련된 일이 현실에서 일어날 수 있습니다.",
    "이 꿈은 당신의 현재 감정 상태와 밀접하게 연결되어 있습니다. 마음을 살펴보세요.",
    "무의식은 종종 우리가 의식적으로 놓치는 것들을 보여줍니다. 주변을 다시 살펴보세요.",
    "이 상징이 반복해서 나타난다면, 더 깊은 의미가 있을 수 있습니다.",
    "꿈에서 느낀 감정이 해석의 핵심입니다. 긍정적이었다면 좋은 징조, 부정적이었다면 주의가 필요합니다.",
    "고대부터 이 꿈은 중요한 전환점을 알리는 것으로 해석되어 왔습니다.",
    "현재 고민하고 있는 문제의 해답이 이 꿈에 숨어있을 수 있습니다.",
];

/// Clauses appended to a domain's base advice in single readings.
pub fn enhancements(domain: Domain) -> [&'static str; 4] {
    match domain {
        Domain::Love => [
            " 특히 오후 3시경에 좋은 기운이 있습니다.",
            " 진심 어린 대화가 관계를 깊게 합니다.",
            " 작은 선물이나 메시지가 큰 효과를 발휘합니다.",
            " 상대방의 말에 귀 기울이는 것이 중요합니다.",
        ],
        Domain::Money => [
            " 오늘 중 좋은 소식이 있을 수 있습니다.",
            " 충동 구매는 피하세요.",
            " 예상치 못한 수입이 생길 수 있습니다.",
            " 장기적 관점에서 결정하세요.",
        ],
        Domain::Health => [
            " 충분한 수분 섭취를 잊지 마세요.",
            " 가벼운 스트레칭이 도움이 됩니다.",
            " 오늘은 무리하지 않는 것이 좋습니다.",
            " 긍정적인 마인드가 건강에도 영향을 줍니다.",
        ],
        Domain::Work => [
            " 오전에 중요한 업무를 처리하세요.",
            " 동료와의 협력이 성과를 높입니다.",
            " 새로운 아이디어를 적극적으로 제안해보세요.",
            " 세부사항에 주의를 기울이세요.",
        ],
    }
}

/// Morning action lines.
pub const MORNING: [&str; 3] = [
    "오전: 중요한 결정이나 시작에 좋은 시간입니다.",
    "오전: 명상이나 계획 수립에 적합합니다.",
    "오전: 에너지가 높으니 도전적인 일을 시작하세요.",
];

/// Afternoon action lines.
pub const AFTERNOON: [&str; 3] = [
    "오후: 대인관계에서 좋은 일이 생길 수 있습니다.",
    "오후: 집중력이 필요한 업무를 처리하세요.",
    "오후: 잠시 휴식을 취하면 아이디어가 떠오릅니다.",
];

/// Evening action lines.
pub const EVENING: [&str; 3] = [
    "저녁: 사랑하는 사람과의 시간이 행운을 부릅니다.",
    "저녁: 하루를 정리하며 감사한 것을 떠올리세요.",
    "저녁: 꿈 일기를 쓰면 더 깊은 통찰을 얻습니다.",
];

/// Colours added to an entry's own lucky colours.
pub const EXTRA_COLORS: [&str; 7] = ["금색", "은색", "하늘색", "연두색", "코랄", "라벤더", "민트"];

/// Lucky time windows.
pub const LUCKY_TIMES: [&str; 8] = [
    "오전 9시 ~ 11시",
    "오전 10시 ~ 12시",
    "오후 1시 ~ 3시",
    "오후 2시 ~ 4시",
    "오후 3시 ~ 5시",
    "저녁 6시 ~ 8시",
    "저녁 7시 ~ 9시",
    "밤 9시 ~ 11시",
];

/// Lucky directions for deep readings.
pub const DIRECTIONS: [&str; 6] = ["동쪽", "서쪽", "남쪽", "북쪽", "동북쪽", "남동쪽"];

/// Opening line of a combined reading.
pub fn multi_messages(count: usize) -> [String; 4] {
    [
        "여러 상징이 함께 나타난 것은 복합적인 메시지입니다. 각각의 의미가 서로를 보완하며 더 깊은 통찰을 제공합니다.".to_string(),
        format!("{count}개의 상징이 조화를 이루며 나타났습니다. 이는 삶의 여러 영역이 연결되어 있음을 보여줍니다."),
        "흥미로운 조합입니다! 무의식이 여러 층위의 메시지를 동시에 보내고 있습니다.".to_string(),
        "이 상징들의 만남은 우연이 아닙니다. 당신의 내면이 중요한 이야기를 하고 있습니다.".to_string(),
    ]
}

/// Per-keyword "today's meaning" in a combined reading, after a truncated
/// excerpt of the detailed text.
pub fn dynamic_meanings(excerpt: &str) -> [String; 4] {
    [
        format!("{excerpt}... 오늘 특히 이 에너지가 강하게 작용합니다."),
        format!("{excerpt}... 가까운 시일 내에 관련된 일이 일어날 수 있습니다."),
        format!("{excerpt}... 현재 상황과 밀접하게 연결되어 있습니다."),
        format!("{excerpt}... 이 메시지에 주의를 기울이세요."),
    ]
}

/// Remark for a sorted pair of categories, if the pair has one.
pub fn category_pair(first: &str, second: &str) -> Option<&'static str> {
    match (first, second) {
        ("동물", "자연") => Some("본능과 환경이 조화를 이루고 있습니다. 자연의 흐름을 따르세요."),
        ("동물", "행동") => Some("행동으로 옮길 때입니다. 본능을 믿고 움직이세요."),
        ("자연", "행동") => Some("자연스러운 행동이 좋은 결과를 가져옵니다."),
        ("동물", "물건") => Some("물질적 변화가 예고됩니다. 재물운과 연결됩니다."),
        _ => None,
    }
}

/// Remark for category combinations without a dedicated line.
pub fn category_fallback(categories: &[&str]) -> String {
    format!(
        "{} 관련 상징의 만남은 삶의 다양한 영역이 연결되어 있음을 보여줍니다.",
        categories.join("과 ")
    )
}

/// Combination lines for exactly two keywords.
pub fn two_keyword_templates(k1: &str, k2: &str, luck: i64) -> [String; 4] {
    let tone = if luck >= 70 {
        "매우 길한"
    } else if luck >= 50 {
        "의미 있는"
    } else {
        "주의가 필요한"
    };
    [
        format!("{k1}과(와) {k2}의 만남은 {tone} 조합입니다. {k1}의 에너지가 {k2}를 통해 구체화됩니다."),
        format!(
            "{k1}이(가) 나타내는 내면의 욕구와 {k2}이(가) 상징하는 외부 상황이 만나고 있습니다. {}",
            if luck >= 60 {
                "조화로운 진행이 예상됩니다."
            } else {
                "균형을 찾아야 합니다."
            }
        ),
        format!(
            "두 상징이 서로를 보완합니다. {k1}에서 시작된 흐름이 {k2}로 이어지며, {}",
            if luck >= 70 {
                "긍정적인 결과를 예고합니다."
            } else {
                "신중한 접근이 필요합니다."
            }
        ),
        format!(
            "{k1}과(와) {k2}이(가) 함께 나타난 것은 드문 조합입니다. {}",
            if luck >= 65 {
                "특별한 기회가 찾아올 수 있습니다."
            } else {
                "변화에 대비하세요."
            }
        ),
    ]
}

/// Combination lines for three or more keywords.
pub fn many_keyword_templates(keywords: &[&str], luck: i64) -> [String; 3] {
    let leading = keywords.iter().take(2).copied().collect::<Vec<_>>().join(", ");
    [
        format!(
            "{}개의 상징이 복합적으로 나타났습니다. 이는 삶의 여러 측면이 동시에 변화하고 있음을 의미합니다. {}",
            keywords.len(),
            if luck >= 70 {
                "전반적으로 긍정적인 흐름입니다."
            } else {
                "하나씩 차분히 접근하세요."
            }
        ),
        format!(
            "풍부한 상징의 향연입니다! {leading} 등이 어우러져 {}을 예고합니다. 직관을 따르세요.",
            if luck >= 65 {
                "다양한 기회"
            } else {
                "복잡한 상황"
            }
        ),
        format!(
            "무의식이 풍부한 메시지를 보내고 있습니다. 각 상징을 개별적으로 이해하되, 전체 그림을 놓치지 마세요. {}",
            if luck >= 60 {
                "통합적 시각이 열쇠입니다."
            } else {
                "우선순위를 정하세요."
            }
        ),
    ]
}

/// Closing line per weekday, Sunday first.
pub const DAY_MESSAGES: [&str; 7] = [
    "일요일의 이 꿈은 한 주의 방향을 알려줍니다.",
    "월요일의 이 꿈은 새로운 시작을 암시합니다.",
    "화요일의 이 꿈은 열정과 행동을 요구합니다.",
    "수요일의 이 꿈은 소통과 연결의 중요성을 말합니다.",
    "목요일의 이 꿈은 확장과 성장의 기회를 보여줍니다.",
    "금요일의 이 꿈은 관계와 조화에 대한 메시지입니다.",
    "토요일의 이 꿈은 휴식과 성찰을 권합니다.",
];

/// Domain line for combined readings when no matched keyword has advice.
pub fn combined_default(domain: Domain) -> &'static str {
    match domain {
        Domain::Love => "새로운 만남이나 관계의 발전이 기대됩니다.",
        Domain::Money => "재물운이 안정적으로 흐르고 있습니다.",
        Domain::Health => "전반적으로 건강한 흐름입니다.",
        Domain::Work => "업무에서 순조로운 진행이 예상됩니다.",
    }
}

/// Short bonus clause; the last slot is intentionally empty.
pub fn field_bonus(domain: Domain) -> [&'static str; 3] {
    match domain {
        Domain::Love => [" 특히 저녁 시간이 좋습니다.", " 진심 어린 표현이 효과적입니다.", ""],
        Domain::Money => [" 오후에 좋은 소식이 있을 수 있습니다.", " 직감을 믿으세요.", ""],
        Domain::Health => [" 가벼운 산책이 도움이 됩니다.", " 충분한 휴식을 취하세요.", ""],
        Domain::Work => [" 협업이 성과를 높입니다.", " 오전에 중요한 업무를 처리하세요.", ""],
    }
}

/// Clause used when several matched keywords advise on the same domain.
pub fn combination_bonus(domain: Domain) -> &'static str {
    match domain {
        Domain::Love => "더 깊은 연결이 가능해집니다.",
        Domain::Money => "예상보다 좋은 결과가 기대됩니다.",
        Domain::Health => "총체적인 균형이 회복됩니다.",
        Domain::Work => "시너지 효과가 발휘됩니다.",
    }
}

/// Closing quotes for combined readings.
pub const QUOTES: [&str; 8] = [
    "꿈은 무의식의 왕도이다. - 프로이트",
    "모든 꿈은 이루어진다, 그것을 쫓을 용기가 있다면.",
    "밤의 꿈은 낮의 지혜가 된다.",
    "당신의 무의식은 언제나 당신을 돕고 있다.",
    "꿈을 믿는 자에게 길이 열린다.",
    "오늘 꾼 꿈이 내일의 현실이 된다.",
    "우주는 꿈을 통해 당신에게 말을 건넨다.",
    "직관을 따르라, 그것이 당신의 진정한 나침반이다.",
];

/// Psychological reading when no matched keyword has one.
pub const GENERIC_PSYCHOLOGY: &str = "이 꿈은 당신의 개인적인 무의식의 메시지를 담고 있습니다. 꿈에서 느낀 감정이 핵심입니다. 그 감정이 현재 삶과 어떻게 연결되는지 생각해보세요.";

/// Psychological reading for matched keywords without one of their own.
pub const MATCHED_PSYCHOLOGY: &str =
    "이 꿈은 당신의 현재 심리 상태와 무의식적 욕구를 반영합니다. 꿈에서 느낀 감정이 핵심입니다.";

/// Recommended actions by luck tier: high (75+), middle (50+), low.
pub const ACTIONS: [[&str; 3]; 3] = [
    [
        "지금 시작한 일이 좋은 결과를 가져올 거예요. 자신감을 가지고 나아가세요.",
        "주변 사람들과의 소통을 소중히 하세요. 중요한 대화가 좋은 기회를 만들 수 있습니다.",
        "이 시기는 새로운 시도에 좋은 때입니다. 미루던 일을 시작해보세요.",
    ],
    [
        "신중함과 열정의 균형을 맞추세요. 서두르지 않아도 됩니다.",
        "자신의 직관을 믿고 행동하되, 작은 결정부터 천천히 진행하세요.",
        "현재 상황을 객관적으로 관찰하고 다음 스텝을 준비하세요.",
    ],
    [
        "내면의 목소리에 귀 기울이세요. 지금은 성찰의 시간입니다.",
        "자신을 돌보는 것이 가장 중요합니다. 명상이나 충분한 수면을 취하세요.",
        "이 시기는 준비의 시간입니다. 기초를 튼튼히 하세요.",
    ],
];
