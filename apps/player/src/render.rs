//! Text rendering for the terminal.

use arcade_core::types::{GameMode, GameSummary, Penalty};
use arcade_core::{CurrentQuestion, GameError, GameSession, Submission, TimerUrgency, Verdict};

pub const LEVEL_UP: &str = "Level Up! Difficulty increased!";
pub const TIME_UP: &str = "Time's up!";
pub const SELECT_ANSWER: &str = "Please select an answer!";
pub const ENTER_NUMBER: &str = "Please enter a valid number!";

/// Status line plus the current question.
pub fn prompt(session: &GameSession) -> Option<String> {
    let question = session.current()?;

    let progress = match session.total_questions() {
        Some(total) => format!("Question {}/{}", session.question_index() + 1, total),
        None => format!("Level {}", session.level()),
    };
    let mut out = format!(
        "\nScore: {} | {} | Time: {}s\n",
        session.score(),
        progress,
        session.time_remaining()
    );

    match question {
        CurrentQuestion::Picture(q) => {
            out.push_str(&format!("What is in this picture? /images/{}\n", q.image_name()));
            out.push_str(&format!("  ({})\n", q.src));
        }
        CurrentQuestion::Word(q) => {
            out.push_str(&format!("Hint: {}\n", q.hint));
        }
        CurrentQuestion::Quiz(q) => {
            out.push_str(&format!("{}\n", q.question));
            for (i, option) in q.options.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, option));
            }
        }
        CurrentQuestion::Math(q) => {
            out.push_str(&format!("{}\n", q.expression()));
        }
    }
    out.push_str("> ");
    Some(out)
}

/// Feedback line for a scored submission.
pub fn feedback(mode: GameMode, submission: &Submission) -> Option<String> {
    let Submission::Scored { verdict, .. } = submission else {
        return None;
    };

    let line = match verdict {
        Verdict::Correct { points } => format!("Correct! 🎉 (+{} points)", points),
        Verdict::Incorrect { expected, penalty } => {
            let cost = match penalty {
                Penalty::Time(secs) => format!("-{}s", secs),
                Penalty::Score(points) => format!("-{} points", points),
            };
            match mode {
                GameMode::Picture | GameMode::Word => {
                    format!("Wrong! It was \"{}\". ({})", expected.to_uppercase(), cost)
                }
                GameMode::Quiz => format!("Wrong! The answer was \"{}\". ({})", expected, cost),
                GameMode::Math => format!("Wrong! The answer was {}. ({})", expected, cost),
            }
        }
    };
    Some(line)
}

/// Warning shown when the countdown crosses into a new urgency band.
pub fn timer_warning(urgency: TimerUrgency, remaining: u32) -> Option<String> {
    match urgency {
        TimerUrgency::Normal => None,
        TimerUrgency::Warning => Some(format!("⏳ {}s left", remaining)),
        TimerUrgency::Danger => Some(format!("⏰ Hurry! {}s left", remaining)),
    }
}

/// Message for a game that could not be loaded.
pub fn load_failure(mode: GameMode, error: &GameError) -> String {
    match error {
        GameError::FetchFailure(_) if mode == GameMode::Math => {
            "Failed to connect to math backend. Is backend running?".to_string()
        }
        GameError::FetchFailure(_) => {
            format!("Failed to load {} questions. Is backend running?", mode)
        }
        GameError::EmptyQuestionSet(_) => {
            format!("No {} questions loaded from backend.", mode)
        }
        other => other.to_string(),
    }
}

/// End-of-game summary.
pub fn summary(summary: &GameSummary) -> String {
    let mut out = format!("\n{} - Game Complete! 🎉\n", summary.mode.title());
    out.push_str(&format!("  Final Score:       {}\n", summary.final_score));
    out.push_str(&format!("  Correct Answers:   {}\n", summary.correct_count));
    out.push_str(&format!("  Incorrect Answers: {}\n", summary.incorrect_count));
    out.push_str(&format!("  Time Remaining:    {}s\n", summary.time_remaining));
    if summary.mode == GameMode::Math {
        out.push_str(&format!("  Level Reached:     {}\n", summary.level));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::types::{GameConfig, QuestionSet, QuizQuestion, WordQuestion};
    use pretty_assertions::assert_eq;

    fn incorrect(expected: &str, penalty: Penalty) -> Submission {
        Submission::Scored {
            verdict: Verdict::Incorrect {
                expected: expected.to_string(),
                penalty,
            },
            level_up: false,
            ended: false,
        }
    }

    #[test]
    fn feedback_messages() {
        let correct = Submission::Scored {
            verdict: Verdict::Correct { points: 5 },
            level_up: false,
            ended: false,
        };
        assert_eq!(
            feedback(GameMode::Word, &correct).unwrap(),
            "Correct! 🎉 (+5 points)"
        );
        assert_eq!(
            feedback(GameMode::Picture, &incorrect("cat", Penalty::Time(5))).unwrap(),
            "Wrong! It was \"CAT\". (-5s)"
        );
        assert_eq!(
            feedback(GameMode::Math, &incorrect("12", Penalty::Score(5))).unwrap(),
            "Wrong! The answer was 12. (-5 points)"
        );
        assert_eq!(
            feedback(GameMode::Quiz, &incorrect("Cow", Penalty::Time(5))).unwrap(),
            "Wrong! The answer was \"Cow\". (-5s)"
        );
        assert_eq!(feedback(GameMode::Quiz, &Submission::Ignored), None);
    }

    #[test]
    fn load_failure_messages() {
        assert_eq!(
            load_failure(GameMode::Word, &GameError::FetchFailure("refused".into())),
            "Failed to load word questions. Is backend running?"
        );
        assert_eq!(
            load_failure(GameMode::Math, &GameError::FetchFailure("refused".into())),
            "Failed to connect to math backend. Is backend running?"
        );
        assert_eq!(
            load_failure(GameMode::Quiz, &GameError::EmptyQuestionSet(GameMode::Quiz)),
            "No quiz questions loaded from backend."
        );
    }

    #[test]
    fn timer_warnings() {
        assert_eq!(timer_warning(TimerUrgency::Normal, 30), None);
        assert_eq!(timer_warning(TimerUrgency::Warning, 20).unwrap(), "⏳ 20s left");
        assert_eq!(timer_warning(TimerUrgency::Danger, 9).unwrap(), "⏰ Hurry! 9s left");
    }

    #[test]
    fn quiz_prompt_numbers_options() {
        let mut session = GameSession::new(GameConfig::default());
        session
            .load(QuestionSet::Quiz(vec![QuizQuestion {
                question: "How many legs does a dog have?".to_string(),
                options: vec!["Two".into(), "Four".into()],
                correct_index: 1,
            }]))
            .unwrap();
        session.start().unwrap();

        let text = prompt(&session).unwrap();
        assert!(text.contains("Score: 0 | Question 1/1 | Time: 60s"));
        assert!(text.contains("  1. Two\n  2. Four\n"));
    }

    #[test]
    fn no_prompt_before_start() {
        let mut session = GameSession::new(GameConfig::default());
        session
            .load(QuestionSet::Word(vec![WordQuestion {
                hint: "barks".to_string(),
                answer: "dog".to_string(),
            }]))
            .unwrap();
        assert_eq!(prompt(&session), None);
    }

    #[test]
    fn math_summary_includes_level() {
        let text = summary(&GameSummary {
            mode: GameMode::Math,
            final_score: 30,
            correct_count: 6,
            incorrect_count: 1,
            time_remaining: 0,
            questions_answered: 7,
            level: 2,
        });
        assert!(text.starts_with("\nMath Challenge - Game Complete! 🎉\n"));
        assert!(text.contains("Final Score:       30"));
        assert!(text.contains("Level Reached:     2"));
    }
}
