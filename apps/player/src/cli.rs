//! Command-line arguments.

use clap::{Parser, ValueEnum};

use arcade_core::types::{ConfigOverrides, GameConfig, GameMode, MatchingMode};

/// What a wrong answer costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// +5 points per correct answer, -5 seconds per wrong one
    Time,
    /// +10 points per correct answer, -5 points per wrong one
    Score,
}

#[derive(Debug, Parser)]
#[command(name = "arcade-player", version, about = "Play the trivia arcade mini-games in the terminal")]
pub struct Cli {
    /// Game to play: picture, word, math or quiz
    pub mode: GameMode,

    /// Question API base URL
    #[arg(long, env = "API_BASE_URL", default_value = "http://127.0.0.1:5000")]
    pub backend_url: String,

    /// Scoring policy
    #[arg(long, value_enum, default_value_t = Policy::Time)]
    pub policy: Policy,

    /// Countdown length in seconds
    #[arg(long)]
    pub time: Option<u32>,

    /// Points for a correct answer
    #[arg(long)]
    pub reward: Option<u32>,

    /// Seconds or points lost on a wrong answer, depending on the policy
    #[arg(long)]
    pub penalty: Option<u32>,

    /// Math level goes up every this many points
    #[arg(long)]
    pub level_up_every: Option<u32>,

    /// Answer matching: exact, case_insensitive or lenient
    #[arg(long)]
    pub matching: Option<MatchingMode>,
}

impl Cli {
    /// Game configuration for the chosen policy and overrides.
    pub fn config(&self) -> GameConfig {
        let base = match self.policy {
            Policy::Time => GameConfig::time_penalty(),
            Policy::Score => GameConfig::score_penalty(),
        };
        base.merge(&ConfigOverrides {
            initial_time_secs: self.time,
            reward: self.reward,
            penalty: self.penalty,
            level_up_every: self.level_up_every,
            matching_mode: self.matching,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::types::Penalty;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_time_policy() {
        let cli = Cli::try_parse_from(["arcade-player", "word"]).unwrap();
        assert_eq!(cli.mode, GameMode::Word);
        assert_eq!(cli.config(), GameConfig::time_penalty());
    }

    #[test]
    fn score_policy_with_overrides() {
        let cli = Cli::try_parse_from([
            "arcade-player",
            "math",
            "--policy",
            "score",
            "--time",
            "90",
            "--penalty",
            "3",
            "--matching",
            "exact",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.initial_time_secs, 90);
        assert_eq!(config.reward, 10);
        assert_eq!(config.penalty, Penalty::Score(3));
        assert_eq!(config.level_up_every, 50);
        assert_eq!(config.matching_mode, MatchingMode::Exact);
    }

    #[test]
    fn unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["arcade-player", "chess"]).is_err());
    }
}
