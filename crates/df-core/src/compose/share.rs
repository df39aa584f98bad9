//! Share texts handed verbatim to an external share or clipboard facility.

use super::dream::join_numbers;
use super::{DeepReading, FortuneReading, Reading};

/// Share text for a dream reading.
pub fn dream_text(reading: &Reading, url: &str) -> String {
    format!(
        "🌙 나의 꿈해몽 결과\n\n{}\n{}\n\n너도 어젯밤 꿈 해석해봐! 👇\n{url}",
        reading.title, reading.body
    )
}

/// Share text for a zodiac fortune.
pub fn fortune_text(reading: &FortuneReading, url: &str) -> String {
    format!(
        "⭐ 오늘의 {} 운세\n\n{}\n\n🎨 행운 색상: {}\n🔢 행운 숫자: {}\n\n너의 오늘 운세도 확인해봐! 👇\n{url}",
        reading.title,
        reading.message,
        reading.color,
        reading.numbers_text()
    )
}

/// Share text for a deep reading. The psychology note is cut to 80
/// characters.
pub fn deep_text(reading: &DeepReading, url: &str) -> String {
    let excerpt: String = reading.psychology.chars().take(80).collect();
    format!(
        "✨ {}\n\n🌟 행운 지수: {}%\n🔢 행운의 숫자: {}\n🎨 행운의 색상: {}\n\n🧠 {excerpt}...\n\n꿈해몽 & 운세 앱에서 심층 분석을 받아보세요! 🔮\n\n{url}",
        reading.title,
        reading.luck,
        join_numbers(&reading.numbers),
        reading.color
    )
}
