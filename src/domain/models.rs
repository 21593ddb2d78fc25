use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One recorded exchange turn. The server keeps no session state; the
/// caller supplies the rolling history on every request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Coarse emotional category inferred from recent turns by keyword match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Anxious,
    Sad,
    Stressed,
    Happy,
    Angry,
    Neutral,
}

/// Coarse life-domain category inferred from a prior user turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Work,
    School,
    Family,
    Relationship,
    Health,
    Financial,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mindfulness,
    Exercise,
    Social,
    Creative,
    Learning,
    Rest,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mindfulness => "mindfulness",
            Self::Exercise => "exercise",
            Self::Social => "social",
            Self::Creative => "creative",
            Self::Learning => "learning",
            Self::Rest => "rest",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Immutable reference data drawn from the fixed activity catalogs.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: &'static str,
    pub duration_minutes: u16,
    pub category: Category,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, Serialize)]
pub struct DayPlan {
    pub tasks: Vec<Activity>,
    pub focus: String,
}

/// A full Monday-first schedule. Produced fresh per call; durability is
/// whatever the caller chooses to keep client-side.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,
    pub theme: String,
    pub tips: Vec<&'static str>,
    pub created_at: DateTime<Utc>,
}
