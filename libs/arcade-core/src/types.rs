//! Core types for the mini-games.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Picture,
    Word,
    Math,
    Quiz,
}

impl GameMode {
    /// All modes, in menu order.
    pub const ALL: [GameMode; 4] = [Self::Picture, Self::Word, Self::Math, Self::Quiz];

    /// Get the mode name as used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Picture => "picture",
            Self::Word => "word",
            Self::Math => "math",
            Self::Quiz => "quiz",
        }
    }

    /// Display title for summaries.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Picture => "Guess the Picture",
            Self::Word => "Guess the Word",
            Self::Math => "Math Challenge",
            Self::Quiz => "Fun Quiz",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "picture" => Ok(Self::Picture),
            "word" => Ok(Self::Word),
            "math" => Ok(Self::Math),
            "quiz" => Ok(Self::Quiz),
            other => Err(format!("unknown game mode: {other}")),
        }
    }
}

/// How strictly typed answers are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Lenient,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::Lenient
    }
}

impl FromStr for MatchingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "case_insensitive" | "case-insensitive" => Ok(Self::CaseInsensitive),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown matching mode: {other}")),
        }
    }
}

/// What a wrong answer costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Penalty {
    /// Seconds removed from the countdown.
    Time(u32),
    /// Points removed from the score, floored at zero.
    Score(u32),
}

impl Penalty {
    pub fn amount(&self) -> u32 {
        match self {
            Self::Time(n) | Self::Score(n) => *n,
        }
    }
}

/// Scoring and timer configuration for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub initial_time_secs: u32,
    pub reward: u32,
    pub penalty: Penalty,
    pub level_up_every: u32,
    pub matching_mode: MatchingMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::time_penalty()
    }
}

impl GameConfig {
    /// +5 points for a correct answer, -5 seconds for a wrong one.
    pub fn time_penalty() -> Self {
        Self {
            initial_time_secs: 60,
            reward: 5,
            penalty: Penalty::Time(5),
            level_up_every: 25,
            matching_mode: MatchingMode::Lenient,
        }
    }

    /// +10 points for a correct answer, -5 points for a wrong one.
    pub fn score_penalty() -> Self {
        Self {
            initial_time_secs: 60,
            reward: 10,
            penalty: Penalty::Score(5),
            level_up_every: 50,
            matching_mode: MatchingMode::Lenient,
        }
    }

    /// Apply optional overrides on top of this configuration.
    pub fn merge(&self, overrides: &ConfigOverrides) -> Self {
        let penalty_amount = overrides.penalty.unwrap_or(self.penalty.amount());
        let penalty = match self.penalty {
            Penalty::Time(_) => Penalty::Time(penalty_amount),
            Penalty::Score(_) => Penalty::Score(penalty_amount),
        };
        Self {
            initial_time_secs: overrides.initial_time_secs.unwrap_or(self.initial_time_secs),
            reward: overrides.reward.unwrap_or(self.reward),
            penalty,
            // A zero threshold would level up on every answer.
            level_up_every: overrides
                .level_up_every
                .unwrap_or(self.level_up_every)
                .max(1),
            matching_mode: overrides.matching_mode.unwrap_or(self.matching_mode),
        }
    }
}

/// Per-run overrides (all fields optional).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_time_secs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_up_every: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_mode: Option<MatchingMode>,
}

/// Picture game question: an image to name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureQuestion {
    pub src: String,
    pub answer: String,
}

impl PictureQuestion {
    /// File name of the image, served from the local images directory.
    pub fn image_name(&self) -> &str {
        self.src.rsplit('/').next().unwrap_or(&self.src)
    }
}

/// Word game question: a hint describing the word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordQuestion {
    pub hint: String,
    pub answer: String,
}

/// Multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswerIndex")]
    pub correct_index: usize,
}

impl QuizQuestion {
    /// Text of the correct option, if the index is in range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

/// Questions for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSet {
    Picture(Vec<PictureQuestion>),
    Word(Vec<WordQuestion>),
    Quiz(Vec<QuizQuestion>),
    /// Math questions are generated locally.
    Math,
}

impl QuestionSet {
    pub fn mode(&self) -> GameMode {
        match self {
            Self::Picture(_) => GameMode::Picture,
            Self::Word(_) => GameMode::Word,
            Self::Quiz(_) => GameMode::Quiz,
            Self::Math => GameMode::Math,
        }
    }

    /// Number of questions, `None` for the unbounded math game.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Picture(q) => Some(q.len()),
            Self::Word(q) => Some(q.len()),
            Self::Quiz(q) => Some(q.len()),
            Self::Math => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

/// End-of-game summary shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub mode: GameMode,
    pub final_score: u32,
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub time_remaining: u32,
    pub questions_answered: usize,
    pub level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn game_mode_round_trips_through_str() {
        for mode in GameMode::ALL {
            assert_eq!(mode.as_str().parse::<GameMode>(), Ok(mode));
        }
        assert_eq!(" Quiz ".parse::<GameMode>(), Ok(GameMode::Quiz));
        assert!("chess".parse::<GameMode>().is_err());
    }

    #[test]
    fn presets_match_both_variants() {
        let time = GameConfig::time_penalty();
        assert_eq!(time.reward, 5);
        assert_eq!(time.penalty, Penalty::Time(5));
        assert_eq!(time.level_up_every, 25);

        let score = GameConfig::score_penalty();
        assert_eq!(score.reward, 10);
        assert_eq!(score.penalty, Penalty::Score(5));
        assert_eq!(score.level_up_every, 50);
    }

    #[test]
    fn merge_without_overrides_is_identity() {
        let base = GameConfig::score_penalty();
        assert_eq!(base.merge(&ConfigOverrides::default()), base);
    }

    #[test]
    fn merge_keeps_penalty_kind() {
        let overrides = ConfigOverrides {
            initial_time_secs: Some(90),
            penalty: Some(3),
            level_up_every: Some(0),
            ..Default::default()
        };
        let merged = GameConfig::time_penalty().merge(&overrides);
        assert_eq!(merged.initial_time_secs, 90);
        assert_eq!(merged.penalty, Penalty::Time(3));
        assert_eq!(merged.level_up_every, 1);
        assert_eq!(merged.reward, 5);
    }

    #[test]
    fn quiz_question_uses_wire_field_name() {
        let json = r#"{"question":"What animal says 'moo'?","options":["Dog","Cat","Cow","Duck"],"correctAnswerIndex":2}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_index, 2);
        assert_eq!(q.correct_option(), Some("Cow"));
    }

    #[test]
    fn picture_image_name_is_last_segment() {
        let q = PictureQuestion {
            src: "https://placehold.co/400x300/A8D9FF/3182CE?text=Cute+Cat".to_string(),
            answer: "cat".to_string(),
        };
        assert_eq!(q.image_name(), "3182CE?text=Cute+Cat");

        let local = PictureQuestion {
            src: "cat.jpeg".to_string(),
            answer: "cat".to_string(),
        };
        assert_eq!(local.image_name(), "cat.jpeg");
    }

    #[test]
    fn penalty_serializes_tagged() {
        let json = serde_json::to_string(&Penalty::Score(5)).unwrap();
        assert_eq!(json, r#"{"kind":"score","amount":5}"#);
    }
}
