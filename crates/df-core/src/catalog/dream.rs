//! Dream keyword entries.

use serde::{Deserialize, Serialize};

use crate::error::{DfError, DfResult};

/// Identifier of the generic fallback entry.
pub const DEFAULT_ID: &str = "default";

/// Life domain covered by per-domain fortune lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Romance and relationships.
    Love,
    /// Wealth and finances.
    Money,
    /// Physical and mental health.
    Health,
    /// Career and studies.
    Work,
}

impl Domain {
    /// All domains in the order fortune lines are composed.
    pub const ALL: [Domain; 4] = [Self::Love, Self::Money, Self::Health, Self::Work];

    /// Lowercase English key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Money => "money",
            Self::Health => "health",
            Self::Work => "work",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Love => "연애",
            Self::Money => "재물",
            Self::Health => "건강",
            Self::Work => "직장",
        }
    }

    /// Display icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Love => "💕",
            Self::Money => "💰",
            Self::Health => "💪",
            Self::Work => "💼",
        }
    }

    /// Seed offset for this domain's bonus clause: the code of the key's
    /// first letter, so each domain draws from a different position.
    pub fn seed_offset(self) -> i64 {
        i64::from(self.key().as_bytes()[0])
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named situational variant of a dream ("being bitten by a snake").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    /// Short description of the situation.
    pub name: String,
    /// Interpretation for that situation.
    pub text: String,
}

/// One dream keyword and its fragment pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// Keyword matched against free text; unique within the catalog.
    pub id: String,
    /// Optional category tag ("동물", "자연", ...).
    #[serde(default)]
    pub category: Option<String>,
    /// One-line core meaning.
    pub meaning: String,
    /// Longer interpretation.
    pub detailed: String,
    /// Situational variants, in authoring order.
    #[serde(default)]
    pub situations: Vec<Situation>,
    /// Love advice.
    #[serde(default)]
    pub love: Option<String>,
    /// Money advice.
    #[serde(default)]
    pub money: Option<String>,
    /// Health advice.
    #[serde(default)]
    pub health: Option<String>,
    /// Work advice.
    #[serde(default)]
    pub work: Option<String>,
    /// Base luck score, 0-100.
    pub luck: u8,
    /// Base lucky colour names.
    #[serde(default)]
    pub lucky_colors: Vec<String>,
    /// Base lucky numbers.
    #[serde(default)]
    pub lucky_numbers: Vec<u32>,
    /// Lucky direction, if any.
    #[serde(default)]
    pub lucky_direction: Option<String>,
    /// Related keywords worth interpreting together.
    #[serde(default)]
    pub related: Vec<String>,
    /// Psychological reading used by the deep interpretation.
    #[serde(default)]
    pub psychology: Option<String>,
}

impl SubjectEntry {
    /// Advice for `domain`, if authored.
    pub fn advice(&self, domain: Domain) -> Option<&str> {
        let text = match domain {
            Domain::Love => &self.love,
            Domain::Money => &self.money,
            Domain::Health => &self.health,
            Domain::Work => &self.work,
        };
        text.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Whether this is the generic fallback entry.
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_ID
    }

    pub(crate) fn validate(&self) -> DfResult<()> {
        if self.id.trim().is_empty() {
            return Err(DfError::invalid("", "empty identifier"));
        }
        if self.luck > 100 {
            return Err(DfError::invalid(
                &self.id,
                format!("luck {} is above 100", self.luck),
            ));
        }
        if self.meaning.trim().is_empty() {
            return Err(DfError::invalid(&self.id, "missing meaning"));
        }
        if self.detailed.trim().is_empty() {
            return Err(DfError::invalid(&self.id, "missing detailed meaning"));
        }
        if let Some(s) = self.situations.iter().find(|s| s.name.trim().is_empty()) {
            return Err(DfError::invalid(
                &self.id,
                format!("situation with empty name: {:?}", s.text),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal entry for composer tests.
    pub fn entry(id: &str, category: Option<&str>, luck: u8) -> SubjectEntry {
        SubjectEntry {
            id: id.to_string(),
            category: category.map(str::to_string),
            meaning: format!("{id}의 핵심 의미"),
            detailed: format!("{id}은(는) 무의식 속에서 중요한 변화를 알리는 상징으로 자주 등장합니다."),
            situations: vec![
                Situation {
                    name: format!("{id}을 보는 꿈"),
                    text: "좋은 소식이 옵니다.".to_string(),
                },
                Situation {
                    name: format!("{id}을 잡는 꿈"),
                    text: "기회를 붙잡습니다.".to_string(),
                },
                Situation {
                    name: format!("{id}이 사라지는 꿈"),
                    text: "정리가 필요합니다.".to_string(),
                },
            ],
            love: Some(format!("{id} 연애운")),
            money: Some(format!("{id} 재물운")),
            health: None,
            work: Some(format!("{id} 직장운")),
            luck,
            lucky_colors: vec!["초록색".to_string()],
            lucky_numbers: vec![3, 8],
            lucky_direction: Some("동쪽".to_string()),
            related: vec!["용".to_string()],
            psychology: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::entry;
    use super::*;

    #[test]
    fn domain_offsets_are_first_letter_codes() {
        assert_eq!(Domain::Love.seed_offset(), 108);
        assert_eq!(Domain::Money.seed_offset(), 109);
        assert_eq!(Domain::Health.seed_offset(), 104);
        assert_eq!(Domain::Work.seed_offset(), 119);
    }

    #[test]
    fn advice_skips_missing_and_blank() {
        let mut e = entry("뱀", Some("동물"), 80);
        assert_eq!(e.advice(Domain::Love), Some("뱀 연애운"));
        assert_eq!(e.advice(Domain::Health), None);
        e.work = Some("   ".to_string());
        assert_eq!(e.advice(Domain::Work), None);
    }

    #[test]
    fn validate_rejects_bad_luck() {
        let e = entry("뱀", None, 101);
        assert!(matches!(e.validate(), Err(DfError::InvalidSubject { .. })));
    }

    #[test]
    fn validate_rejects_missing_meaning() {
        let mut e = entry("뱀", None, 50);
        e.meaning = String::new();
        let err = e.validate().unwrap_err();
        assert!(err.to_string().contains("missing meaning"));
    }

    #[test]
    fn deserialize_minimal_entry() {
        let json = r#"{"id":"물","meaning":"m","detailed":"d","luck":70}"#;
        let e: SubjectEntry = serde_json::from_str(json).unwrap();
        assert!(e.category.is_none());
        assert!(e.situations.is_empty());
        assert!(e.lucky_numbers.is_empty());
        assert!(e.validate().is_ok());
    }
}
