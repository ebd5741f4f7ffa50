use serde::{Deserialize, Serialize};
use std::fmt;

/// The six personality classifications a profile can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Archetype {
    Builder,
    Creator,
    Influencer,
    Thinker,
    Degen,
    Lurker,
}

/// Fixed display strings for an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeMeta {
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Builder,
        Archetype::Creator,
        Archetype::Influencer,
        Archetype::Thinker,
        Archetype::Degen,
        Archetype::Lurker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Builder => "BUILDER",
            Archetype::Creator => "CREATOR",
            Archetype::Influencer => "INFLUENCER",
            Archetype::Thinker => "THINKER",
            Archetype::Degen => "DEGEN",
            Archetype::Lurker => "LURKER",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn meta(&self) -> ArchetypeMeta {
        match self {
            Archetype::Builder => ArchetypeMeta {
                emoji: "🛠",
                label: "Builder Aura",
                description: "You ship more than you talk. Keep building.",
            },
            Archetype::Creator => ArchetypeMeta {
                emoji: "🎨",
                label: "Creator Aura",
                description: "Taste + output. You make the timeline prettier.",
            },
            Archetype::Influencer => ArchetypeMeta {
                emoji: "📣",
                label: "Influencer Aura",
                description: "You move attention. The feed follows your signal.",
            },
            Archetype::Thinker => ArchetypeMeta {
                emoji: "🧠",
                label: "Thinker Aura",
                description: "Depth merchant. Your replies add real brainpower.",
            },
            Archetype::Degen => ArchetypeMeta {
                emoji: "🎰",
                label: "Degen Aura",
                description: "Onchain instincts. You're early, often, and unbothered.",
            },
            Archetype::Lurker => ArchetypeMeta {
                emoji: "👀",
                label: "Lurker Aura",
                description: "Silent watcher. Your aura is mysterious (and powerful).",
            },
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dimension scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuraBreakdown {
    pub activity: u8,
    pub impact: u8,
    pub social: u8,
    pub style: u8,
    pub onchain: u8,
}

impl AuraBreakdown {
    pub fn dimensions(&self) -> [(&'static str, u8); 5] {
        [
            ("activity", self.activity),
            ("impact", self.impact),
            ("social", self.social),
            ("style", self.style),
            ("onchain", self.onchain),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraResult {
    #[serde(rename = "type")]
    pub archetype: Archetype,
    pub score: u8,
    pub emoji: String,
    pub label: String,
    pub description: String,
    pub breakdown: AuraBreakdown,
}

impl AuraResult {
    pub fn new(archetype: Archetype, score: u8, breakdown: AuraBreakdown) -> Self {
        let meta = archetype.meta();
        Self {
            archetype,
            score,
            emoji: meta.emoji.to_string(),
            label: meta.label.to_string(),
            description: meta.description.to_string(),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_archetype_has_metadata() {
        for archetype in Archetype::ALL {
            let meta = archetype.meta();
            assert!(!meta.emoji.is_empty());
            assert!(meta.label.ends_with("Aura"));
            assert!(!meta.description.is_empty());
        }
        assert_eq!(Archetype::Lurker.meta().emoji, "👀");
        assert_eq!(Archetype::Degen.meta().label, "Degen Aura");
    }

    #[test]
    fn test_archetype_parsing() {
        assert_eq!(Archetype::from_str("builder"), Some(Archetype::Builder));
        assert_eq!(Archetype::from_str(" DEGEN "), Some(Archetype::Degen));
        assert_eq!(Archetype::from_str("whale"), None);
    }

    #[test]
    fn test_result_serializes_type_tag() {
        let result = AuraResult::new(Archetype::Thinker, 42, AuraBreakdown::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["type"], "THINKER");
        assert_eq!(json["label"], "Thinker Aura");
        assert_eq!(json["breakdown"]["style"], 0);
    }
}
