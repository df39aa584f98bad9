//! Dream readings: one matched keyword, several, or the generic fallback.

use tracing::debug;

use super::matcher::match_keywords;
use super::pools::{self, DIVIDER};
use super::{
    LuckyItems, Reading, ReadingContext, average_luck, clamp_luck, extra_color, lucky_number,
    lucky_time, time_block, unique,
};
use crate::catalog::{Catalog, Domain, SubjectEntry};
use crate::error::{DfError, DfResult};
use crate::sampler::{pick, sample, select_between};
use crate::seed::daily_seed;

/// Interpret free text.
///
/// The seed is `daily_seed(date, input)` over the trimmed input. A single
/// match yields a full single-keyword reading; several yield a combined
/// reading; none yields the default entry's reading titled with the input.
pub fn interpret(catalog: &Catalog, input: &str, ctx: &ReadingContext) -> DfResult<Reading> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DfError::EmptyInput);
    }
    let seed = daily_seed(ctx.date, input);
    debug!(input, seed, "interpreting dream");

    let matches = match_keywords(catalog, input);
    let reading = match matches.entries.as_slice() {
        [] => single(catalog.default_dream(), input, seed, Vec::new()),
        [entry] => single(entry, &entry.id, seed, vec![entry.id.clone()]),
        entries => combined(entries, seed, ctx.weekday),
    };
    Ok(reading)
}

/// Base luck plus `sample(seed, -5, 10)`, clamped to 0-100.
pub fn single_luck(base: u8, seed: i64) -> u8 {
    clamp_luck(i64::from(base) + sample(seed, -5, 10), 0, 100)
}

/// Rounded average base luck plus `bonus`, clamped to 0-100.
pub fn combined_luck(bases: &[u8], bonus: i64) -> u8 {
    clamp_luck(average_luck(bases) + bonus, 0, 100)
}

fn enhance_advice(entry: &SubjectEntry, domain: Domain, seed: i64) -> String {
    match entry.advice(domain) {
        Some(advice) => {
            let clause = *pick(&pools::enhancements(domain), seed + domain.seed_offset());
            format!("{advice}{clause}")
        }
        None => pools::CALM_ADVICE.to_string(),
    }
}

fn single(entry: &SubjectEntry, keyword: &str, seed: i64, matched: Vec<String>) -> Reading {
    let mut body = String::new();

    if let Some(category) = &entry.category {
        body.push_str(&format!("📂 분류: {category}\n\n"));
    }

    body.push_str(&format!("🔮 핵심 의미: {}\n", entry.meaning));
    body.push_str(&format!(
        "✨ 오늘의 메시지: {}\n\n",
        pick(&pools::today_messages(keyword), seed)
    ));

    body.push_str(&format!("📖 상세 해석\n{}\n", entry.detailed));
    body.push_str(&format!("{}\n\n", pick(&pools::ADDITIONAL, seed + 7)));

    if !entry.situations.is_empty() {
        body.push_str(&format!("{DIVIDER}\n🎭 오늘 주목할 상황 해석\n"));
        for situation in select_between(&entry.situations, seed, 2, 3) {
            body.push_str(&format!("• {}: {}\n", situation.name, situation.text));
        }
        body.push('\n');
    }

    body.push_str(&format!("{DIVIDER}\n📊 오늘의 분야별 운세\n"));
    for domain in Domain::ALL {
        body.push_str(&format!(
            "{} {}: {}\n",
            domain.icon(),
            domain.label(),
            enhance_advice(entry, domain, seed)
        ));
    }
    body.push('\n');

    body.push_str(&format!("{DIVIDER}\n⏰ 시간대별 행동 지침\n{}\n\n", time_block(seed)));

    let colors = unique(
        entry
            .lucky_colors
            .iter()
            .cloned()
            .chain([extra_color(entry.lucky_colors.as_slice(), seed).to_string()]),
    );
    let base_numbers = if entry.lucky_numbers.is_empty() {
        vec![7]
    } else {
        entry.lucky_numbers.clone()
    };
    let numbers: Vec<u32> = unique(
        base_numbers
            .into_iter()
            .chain([lucky_number(seed), lucky_number(seed + 5)]),
    )
    .into_iter()
    .take(4)
    .collect();
    let time = lucky_time(seed).to_string();

    body.push_str(&format!("{DIVIDER}\n🍀 오늘의 행운\n"));
    body.push_str(&format!("🎨 행운 색상: {}\n", colors.join(", ")));
    body.push_str(&format!("🔢 행운 숫자: {}\n", join_numbers(&numbers)));
    if let Some(direction) = &entry.lucky_direction {
        body.push_str(&format!("🧭 행운 방향: {direction}\n"));
    }
    body.push_str(&format!("🌟 행운의 시간: {time}\n"));

    if !entry.related.is_empty() {
        body.push_str(&format!(
            "\n🔗 함께 해석하면 좋은 키워드: {}",
            entry.related.join(", ")
        ));
    }

    Reading {
        title: format!("\"{keyword}\" 꿈 해석"),
        body,
        luck: single_luck(entry.luck, seed),
        matched,
        label: keyword.to_string(),
        lucky: LuckyItems {
            colors,
            numbers,
            direction: entry.lucky_direction.clone(),
            time,
        },
    }
}

fn combination_remark(entries: &[&SubjectEntry], seed: i64, weekday: usize) -> String {
    let keywords: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    let base = average_luck(&entries.iter().map(|e| e.luck).collect::<Vec<_>>());
    let categories = unique(entries.iter().filter_map(|e| e.category.as_deref()));

    let mut out = String::new();
    if categories.len() > 1 {
        let mut pair = [categories[0], categories[1]];
        pair.sort_unstable();
        let remark = pools::category_pair(pair[0], pair[1])
            .map(str::to_string)
            .unwrap_or_else(|| pools::category_fallback(&categories));
        out.push_str(&remark);
        out.push_str("\n\n");
    }

    match keywords.as_slice() {
        [k1, k2] => {
            let templates = pools::two_keyword_templates(k1, k2, base);
            out.push_str(pick::<String>(&templates, seed));
        }
        ks if ks.len() >= 3 => {
            let templates = pools::many_keyword_templates(ks, base);
            out.push_str(pick::<String>(&templates, seed));
        }
        _ => {}
    }

    out.push_str(&format!("\n\n🗓️ {}", pools::DAY_MESSAGES[weekday % 7]));
    out
}

fn combined_fortune(entries: &[&SubjectEntry], domain: Domain, seed: i64) -> String {
    let advices: Vec<&str> = entries.iter().filter_map(|e| e.advice(domain)).collect();
    match advices.as_slice() {
        [] => format!(
            "{}{}",
            pools::combined_default(domain),
            pick(&pools::field_bonus(domain), seed)
        ),
        [only] => format!("{only}{}", pick(&pools::field_bonus(domain), seed)),
        [first, ..] => format!(
            "{first} 여러 상징의 조합으로 {}",
            pools::combination_bonus(domain)
        ),
    }
}

fn combined(entries: &[&SubjectEntry], seed: i64, weekday: usize) -> Reading {
    let ids: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
    let bases: Vec<u8> = entries.iter().map(|e| e.luck).collect();
    let luck = combined_luck(&bases, sample(seed, -5, 15));

    let mut body = format!("🔮 발견된 상징: {}\n", ids.join(", "));
    body.push_str(&format!(
        "✨ {}\n\n",
        pick(&pools::multi_messages(entries.len()), seed)
    ));

    for (i, entry) in entries.iter().enumerate() {
        let excerpt: String = entry.detailed.chars().take(60).collect();
        body.push_str(&format!("【{}】\n", entry.id));
        body.push_str(&format!("• 핵심: {}\n", entry.meaning));
        body.push_str(&format!(
            "• 오늘의 의미: {}\n\n",
            pick(&pools::dynamic_meanings(&excerpt), seed + i as i64)
        ));
    }

    body.push_str(&format!(
        "{DIVIDER}\n✨ 키워드 조합 해석\n{}\n\n",
        combination_remark(entries, seed, weekday)
    ));

    body.push_str(&format!("{DIVIDER}\n📊 오늘의 종합 운세\n"));
    for domain in Domain::ALL {
        body.push_str(&format!(
            "{} {}: {}\n",
            domain.icon(),
            domain.label(),
            combined_fortune(entries, domain, seed)
        ));
    }
    body.push('\n');

    body.push_str(&format!("{DIVIDER}\n⏰ 시간대별 행동 지침\n{}\n\n", time_block(seed)));

    let mut colors = unique(entries.iter().flat_map(|e| e.lucky_colors.iter().cloned()));
    if colors.is_empty() {
        colors.push("금색".to_string());
    }
    let numbers: Vec<u32> = unique(
        entries
            .iter()
            .flat_map(|e| e.lucky_numbers.iter().copied())
            .chain([lucky_number(seed)]),
    )
    .into_iter()
    .take(5)
    .collect();
    let time = lucky_time(seed).to_string();

    body.push_str(&format!("{DIVIDER}\n🍀 오늘의 종합 행운\n"));
    body.push_str(&format!("🎨 행운 색상: {}\n", colors.join(", ")));
    body.push_str(&format!("🔢 행운 숫자: {}\n", join_numbers(&numbers)));
    body.push_str(&format!("🌟 행운의 시간: {time}\n"));
    body.push_str(&format!(
        "\n💫 오늘의 한마디: \"{}\"",
        pick(&pools::QUOTES, seed)
    ));

    Reading {
        title: format!("종합 꿈 해석 ({}개 상징)", entries.len()),
        body,
        luck,
        label: ids.join(", "),
        matched: ids,
        lucky: LuckyItems {
            colors,
            numbers,
            direction: None,
            time,
        },
    }
}

pub(crate) fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dream::fixtures::entry;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn ctx(y: i32, m: u32, d: u32) -> ReadingContext {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        ReadingContext {
            date,
            weekday: 5,
            hour: 10,
        }
    }

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn same_day_is_identical() {
        let catalog = catalog();
        let a = interpret(&catalog, "뱀", &ctx(2026, 10, 16)).unwrap();
        let b = interpret(&catalog, "뱀", &ctx(2026, 10, 16)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn other_days_vary() {
        let catalog = catalog();
        let first = interpret(&catalog, "뱀", &ctx(2026, 10, 16)).unwrap();
        let differs = (17..=28).any(|d| {
            let other = interpret(&catalog, "뱀", &ctx(2026, 10, d)).unwrap();
            other.body != first.body || other.luck != first.luck
        });
        assert!(differs);
    }

    #[test]
    fn single_match_layout() {
        let catalog = catalog();
        let r = interpret(&catalog, "뱀을 봤어요", &ctx(2026, 10, 16)).unwrap();
        assert_eq!(r.matched, vec!["뱀"]);
        assert_eq!(r.title, "\"뱀\" 꿈 해석");
        assert_eq!(r.label, "뱀");
        assert!(r.body.starts_with("📂 분류: 동물\n\n🔮 핵심 의미: "));
        assert!(r.body.contains("🎭 오늘 주목할 상황 해석"));
        assert!(r.body.contains("💕 연애: "));
        assert!(r.body.contains("💼 직장: "));
        assert!(r.body.contains("🔗 함께 해석하면 좋은 키워드: "));
        assert!(r.lucky.numbers.len() <= 4);
        assert!(r.luck_line().starts_with("🍀 오늘의 행운지수"));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let catalog = catalog();
        let r = interpret(&catalog, "용", &ctx(2026, 3, 1)).unwrap();
        let order = ["🔮 핵심 의미", "📖 상세 해석", "📊 오늘의 분야별 운세", "⏰ 시간대별", "🍀 오늘의 행운"];
        let positions: Vec<usize> = order.iter().map(|s| r.body.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn nonsense_uses_default_entry() {
        let catalog = catalog();
        let r = interpret(&catalog, "xyzzy qwerty", &ctx(2026, 10, 16)).unwrap();
        assert!(r.is_generic());
        assert!(r.matched.is_empty());
        assert_eq!(r.title, "\"xyzzy qwerty\" 꿈 해석");
        assert_eq!(r.label, "xyzzy qwerty");
        assert!(!r.body.contains("📂 분류"));
        assert!(!r.body.contains("🎭"));
        assert!(r.lucky.colors.contains(&"금색".to_string()) || r.body.contains("금색"));
    }

    #[test]
    fn blank_input_is_rejected() {
        let catalog = catalog();
        assert!(matches!(
            interpret(&catalog, "   \t", &ctx(2026, 10, 16)),
            Err(DfError::EmptyInput)
        ));
    }

    #[test]
    fn input_is_trimmed_before_seeding() {
        let catalog = catalog();
        let a = interpret(&catalog, "  뱀  ", &ctx(2026, 10, 16)).unwrap();
        let b = interpret(&catalog, "뱀", &ctx(2026, 10, 16)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn several_matches_are_combined() {
        let catalog = catalog();
        let r = interpret(&catalog, "뱀과 물", &ctx(2026, 10, 16)).unwrap();
        assert!(r.is_combined());
        assert_eq!(r.matched, vec!["뱀", "물"]);
        assert_eq!(r.label, "뱀, 물");
        assert_eq!(r.title, "종합 꿈 해석 (2개 상징)");
        assert!(r.body.starts_with("🔮 발견된 상징: 뱀, 물\n"));
        assert!(r.body.contains("【뱀】"));
        assert!(r.body.contains("【물】"));
        // 동물 + 자연 has a dedicated remark.
        assert!(r.body.contains("본능과 환경이 조화를 이루고 있습니다."));
        assert!(r.body.contains("🗓️ 금요일의 이 꿈은"));
        assert!(r.body.contains("💫 오늘의 한마디: \""));
        assert!(r.lucky.numbers.len() <= 5);
        assert!(r.luck_line().contains("종합"));
    }

    #[test]
    fn average_of_eighty_and_sixty_is_seventy() {
        assert_eq!(combined_luck(&[80, 60], 0), 70);
        assert_eq!(combined_luck(&[100, 100], 15), 100);
        assert_eq!(combined_luck(&[0, 2], -5), 0);
    }

    #[test]
    fn combined_fortune_rules() {
        let a = entry("가", Some("동물"), 80);
        let b = entry("나", Some("자연"), 60);
        let both = [&a, &b];

        let love = combined_fortune(&both, Domain::Love, 0);
        assert_eq!(love, "가 연애운 여러 상징의 조합으로 더 깊은 연결이 가능해집니다.");

        // Fixtures carry no health advice.
        let health = combined_fortune(&both, Domain::Health, 0);
        assert!(health.starts_with("전반적으로 건강한 흐름입니다."));

        let one = combined_fortune(&[&a], Domain::Money, 2);
        assert_eq!(one, "가 재물운");
    }

    #[test]
    fn unknown_category_pair_uses_fallback() {
        let a = entry("가", Some("신체"), 80);
        let b = entry("나", Some("상황"), 60);
        let remark = combination_remark(&[&a, &b], 0, 0);
        assert!(remark.starts_with("신체과 상황 관련 상징의 만남은"));
        assert!(remark.ends_with("🗓️ 일요일의 이 꿈은 한 주의 방향을 알려줍니다."));
    }

    #[test]
    fn three_keywords_use_many_template() {
        let a = entry("가", Some("동물"), 80);
        let b = entry("나", Some("동물"), 70);
        let c = entry("다", None, 60);
        let remark = combination_remark(&[&a, &b, &c], 1, 3);
        assert!(!remark.contains("관련 상징의 만남"));
        assert!(
            remark.contains("가, 나 등이")
                || remark.contains("3개의 상징")
                || remark.contains("무의식이 풍부한")
        );
    }

    #[test]
    fn extra_color_differs_from_base() {
        let catalog = catalog();
        for day in 1..=28 {
            let r = interpret(&catalog, "용", &ctx(2026, 2, day)).unwrap();
            assert_eq!(r.lucky.colors.len(), 2);
            assert_eq!(r.lucky.colors[0], "금색");
            assert_ne!(r.lucky.colors[1], "금색");
        }
    }

    #[test]
    fn extra_color_falls_back_when_pool_is_covered() {
        let all: Vec<String> = pools::EXTRA_COLORS.iter().map(|c| c.to_string()).collect();
        assert!(pools::EXTRA_COLORS.contains(&extra_color(all.as_slice(), 12)));
    }

    #[test]
    fn missing_advice_reads_calm() {
        let e = entry("가", None, 50);
        let r = single(&e, "가", 1234, vec!["가".to_string()]);
        assert!(r.body.contains(&format!("💪 건강: {}", pools::CALM_ADVICE)));
    }

    proptest! {
        #[test]
        fn single_luck_stays_in_range(base in 0u8..=100, seed in any::<i32>()) {
            let luck = single_luck(base, i64::from(seed));
            prop_assert!(luck <= 100);
        }

        #[test]
        fn combined_luck_stays_in_range(
            bases in proptest::collection::vec(0u8..=100, 2..6),
            seed in any::<i32>(),
        ) {
            let luck = combined_luck(&bases, sample(i64::from(seed), -5, 15));
            prop_assert!(luck <= 100);
        }

        #[test]
        fn any_text_reading_is_clamped(input in "[가-힣a-z ]{1,12}") {
            prop_assume!(!input.trim().is_empty());
            let catalog = Catalog::builtin().unwrap();
            let r = interpret(&catalog, &input, &ctx(2026, 10, 16)).unwrap();
            prop_assert!(r.luck <= 100);
        }
    }
}
