//! Plan categories and keyword classification

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Domain tag that drives template selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Learning,
    Health,
    Travel,
    Creative,
    Personal,
    #[default]
    General,
}

/// Classification order; the first category with a keyword hit wins
const PRIORITY: [Category; 6] = [
    Category::Business,
    Category::Learning,
    Category::Health,
    Category::Travel,
    Category::Creative,
    Category::Personal,
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "startup",
    "company",
    "revenue",
    "market",
    "strategy",
    "product launch",
];
const LEARNING_KEYWORDS: &[&str] = &["learn", "study", "course", "skill", "education", "training", "development"];
const HEALTH_KEYWORDS: &[&str] = &["fitness", "health", "exercise", "workout", "diet", "nutrition", "weight"];
const TRAVEL_KEYWORDS: &[&str] = &["travel", "trip", "vacation", "visit", "journey", "destination"];
const CREATIVE_KEYWORDS: &[&str] = &["creative", "art", "design", "writing", "music", "photography", "project"];
const PERSONAL_KEYWORDS: &[&str] = &["goal", "habit", "personal", "improvement", "lifestyle", "routine"];

impl Category {
    /// Every category, General last
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Learning,
        Category::Health,
        Category::Travel,
        Category::Creative,
        Category::Personal,
        Category::General,
    ];

    /// Lower-case keywords matched as substrings of the request
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Business => BUSINESS_KEYWORDS,
            Self::Learning => LEARNING_KEYWORDS,
            Self::Health => HEALTH_KEYWORDS,
            Self::Travel => TRAVEL_KEYWORDS,
            Self::Creative => CREATIVE_KEYWORDS,
            Self::Personal => PERSONAL_KEYWORDS,
            Self::General => &[],
        }
    }

    /// Short machine name, also the template name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Learning => "learning",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Creative => "creative",
            Self::Personal => "personal",
            Self::General => "general",
        }
    }

    /// Human-facing label sent to the backend and shown in documents
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Business => "Business Strategy",
            Self::Learning => "Learning Plan",
            Self::Health => "Health & Fitness",
            Self::Travel => "Travel Planning",
            Self::Creative => "Creative Project",
            Self::Personal => "Personal Goals",
            Self::General => "General",
        }
    }

    /// What a plan in this category should cover, None for General
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self {
            Self::Business => {
                Some("Focus on market analysis, competitive advantage, revenue models, and implementation timeline.")
            }
            Self::Learning => Some(
                "Structure with learning objectives, resources, practice exercises, and progress milestones.",
            ),
            Self::Health => {
                Some("Include safety considerations, progressive difficulty, nutrition advice, and tracking methods.")
            }
            Self::Travel => {
                Some("Cover budget planning, itinerary, accommodations, transportation, and local experiences.")
            }
            Self::Creative => {
                Some("Emphasize creative process, inspiration sources, skill development, and project timeline.")
            }
            Self::Personal => {
                Some("Focus on SMART goals, habit formation, accountability measures, and progress tracking.")
            }
            Self::General => None,
        }
    }

    /// Example request for quick starts
    pub fn starter_prompt(&self) -> &'static str {
        match self {
            Self::Business => "Create a business strategy for launching a new product",
            Self::Learning => "Design a 30-day learning plan for web development",
            Self::Health => "Create a beginner-friendly fitness routine for weight loss",
            Self::Travel => "Plan a 7-day budget trip to Europe",
            Self::Creative => "Plan a creative writing project for a short story collection",
            Self::Personal => "Create a plan to improve work-life balance",
            Self::General => "Organize my garage over the next month",
        }
    }
}

/// Classify free text into a category
///
/// Matching is plain substring containment on the lower-cased text, so a
/// keyword can hit inside a longer word ("art" in "start"). Categories are
/// tried in a fixed order and General is returned when nothing matches.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    let category = PRIORITY
        .into_iter()
        .find(|c| c.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(Category::General);
    debug!(text_len = text.len(), %category, "classify: resolved");
    category
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == needle || c.display_name().to_lowercase() == needle)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
