//! Game session state machine.
//!
//! A session moves `NotStarted -> Running -> Ended`. While running it is
//! driven by two entry points owned by the caller: a submission (typed
//! answer or quiz choice) and a one-second [`GameSession::tick`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::error::{GameError, Result};
use crate::math::{MathQuestion, MathQuestionGenerator};
use crate::matching::compare_answers;
use crate::provider::QuestionProvider;
use crate::types::{
    GameConfig, GameMode, GameSummary, Penalty, PictureQuestion, QuestionSet, QuizQuestion,
    WordQuestion,
};

const WARNING_SECS: u32 = 20;
const DANGER_SECS: u32 = 10;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    NotStarted,
    Running,
    Ended,
}

/// How close the countdown is to running out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerUrgency {
    Normal,
    Warning,
    Danger,
}

/// Outcome of a scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Verdict {
    Correct { points: u32 },
    Incorrect { expected: String, penalty: Penalty },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

/// Result of submitting an answer or choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Submission {
    Scored {
        verdict: Verdict,
        level_up: bool,
        ended: bool,
    },
    /// The call had no effect (session not running, wrong input kind for
    /// the mode, or a choice outside the options).
    Ignored,
}

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running { remaining: u32 },
    TimeUp,
    /// The session is not running; nothing changed.
    Idle,
}

/// The question awaiting an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentQuestion<'a> {
    Picture(&'a PictureQuestion),
    Word(&'a WordQuestion),
    Quiz(&'a QuizQuestion),
    Math(&'a MathQuestion),
}

/// One playthrough of a single mini-game.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    generator: MathQuestionGenerator,
    rng: StdRng,
    questions: Option<QuestionSet>,
    state: SessionState,
    score: u32,
    question_index: usize,
    time_remaining: u32,
    correct_count: u32,
    incorrect_count: u32,
    level: u32,
    tiers_awarded: u32,
    math_question: Option<MathQuestion>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a session with a caller-supplied random source.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let time_remaining = config.initial_time_secs;
        Self {
            config,
            generator: MathQuestionGenerator::default(),
            rng,
            questions: None,
            state: SessionState::NotStarted,
            score: 0,
            question_index: 0,
            time_remaining,
            correct_count: 0,
            incorrect_count: 0,
            level: 1,
            tiers_awarded: 0,
            math_question: None,
        }
    }

    /// Replace the math question generator.
    pub fn with_generator(mut self, generator: MathQuestionGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Attach the questions for the next playthrough.
    pub fn load(&mut self, questions: QuestionSet) -> Result<()> {
        if self.state == SessionState::Running {
            return Err(GameError::AlreadyRunning);
        }
        if questions.is_empty() {
            return Err(GameError::EmptyQuestionSet(questions.mode()));
        }
        if let QuestionSet::Quiz(quiz) = &questions {
            validate_quiz(quiz)?;
        }

        self.questions = Some(questions);
        self.state = SessionState::NotStarted;
        Ok(())
    }

    /// Fetch questions for `mode` from `provider` and load them.
    ///
    /// The math game only probes the provider for liveness. An ended session
    /// goes back to `NotStarted` first, so a failed fetch leaves it there with
    /// its previous questions.
    pub async fn load_from<P: QuestionProvider>(
        &mut self,
        provider: &P,
        mode: GameMode,
    ) -> Result<()> {
        if self.state == SessionState::Running {
            return Err(GameError::AlreadyRunning);
        }
        self.state = SessionState::NotStarted;

        let questions = match mode {
            GameMode::Math => {
                provider.status().await?;
                QuestionSet::Math
            }
            _ => provider.fetch(mode).await?,
        };

        if questions.mode() != mode {
            return Err(GameError::FetchFailure(format!(
                "expected {} questions, got {}",
                mode,
                questions.mode()
            )));
        }

        self.load(questions)
    }

    /// Reset counters and countdown and begin accepting submissions.
    pub fn start(&mut self) -> Result<()> {
        let mode = self.mode().ok_or(GameError::NoQuestions)?;

        self.score = 0;
        self.question_index = 0;
        self.time_remaining = self.config.initial_time_secs;
        self.correct_count = 0;
        self.incorrect_count = 0;
        self.level = 1;
        self.tiers_awarded = 0;
        self.math_question = None;
        self.state = SessionState::Running;

        if self.time_remaining == 0 {
            self.end();
        } else if mode == GameMode::Math {
            self.next_math_question();
        }
        Ok(())
    }

    /// Submit a typed answer (picture, word and math games).
    ///
    /// A math answer that is not an integer is rejected with
    /// [`GameError::InvalidInput`] and leaves the session unchanged.
    pub fn submit_answer(&mut self, raw: &str) -> Result<Submission> {
        if self.state != SessionState::Running {
            return Ok(Submission::Ignored);
        }

        let matching_mode = self.config.matching_mode;
        let (is_correct, expected) = match (&self.questions, &self.math_question) {
            (Some(QuestionSet::Picture(questions)), _) => match questions.get(self.question_index) {
                Some(q) => (
                    compare_answers(raw, &q.answer, matching_mode).is_correct,
                    q.answer.clone(),
                ),
                None => return Ok(Submission::Ignored),
            },
            (Some(QuestionSet::Word(questions)), _) => match questions.get(self.question_index) {
                Some(q) => (
                    compare_answers(raw, &q.answer, matching_mode).is_correct,
                    q.answer.clone(),
                ),
                None => return Ok(Submission::Ignored),
            },
            (Some(QuestionSet::Math), Some(q)) => {
                let value: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| GameError::InvalidInput(format!("{:?} is not a number", raw.trim())))?;
                (value == q.answer, q.answer.to_string())
            }
            _ => return Ok(Submission::Ignored),
        };

        Ok(self.score_answer(is_correct, expected))
    }

    /// Submit a quiz choice by zero-based option index.
    pub fn submit_choice(&mut self, index: usize) -> Submission {
        if self.state != SessionState::Running {
            return Submission::Ignored;
        }

        let (is_correct, expected) = match &self.questions {
            Some(QuestionSet::Quiz(questions)) => match questions.get(self.question_index) {
                Some(q) if index < q.options.len() => (
                    index == q.correct_index,
                    q.correct_option().unwrap_or_default().to_string(),
                ),
                _ => return Submission::Ignored,
            },
            _ => return Submission::Ignored,
        };

        self.score_answer(is_correct, expected)
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if self.state != SessionState::Running {
            return Tick::Idle;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.end();
            Tick::TimeUp
        } else {
            Tick::Running {
                remaining: self.time_remaining,
            }
        }
    }

    fn score_answer(&mut self, is_correct: bool, expected: String) -> Submission {
        let verdict = if is_correct {
            self.score = self.score.saturating_add(self.config.reward);
            self.correct_count += 1;
            Verdict::Correct {
                points: self.config.reward,
            }
        } else {
            self.incorrect_count += 1;
            match self.config.penalty {
                Penalty::Time(secs) => {
                    self.time_remaining = self.time_remaining.saturating_sub(secs)
                }
                Penalty::Score(points) => self.score = self.score.saturating_sub(points),
            }
            Verdict::Incorrect {
                expected,
                penalty: self.config.penalty,
            }
        };

        let level_up = self.mode() == Some(GameMode::Math) && self.award_level();
        self.question_index += 1;

        let ended = self.time_remaining == 0 || self.questions_exhausted();
        if ended {
            self.end();
        } else if self.mode() == Some(GameMode::Math) {
            self.next_math_question();
        }

        Submission::Scored {
            verdict,
            level_up,
            ended,
        }
    }

    /// Raise the level for each score tier not yet awarded this session.
    fn award_level(&mut self) -> bool {
        let tier = self.score / self.config.level_up_every.max(1);
        if tier > self.tiers_awarded {
            self.level = self.level.saturating_add(tier - self.tiers_awarded);
            self.tiers_awarded = tier;
            true
        } else {
            false
        }
    }

    fn next_math_question(&mut self) {
        self.math_question = Some(self.generator.generate(self.level, &mut self.rng));
    }

    fn questions_exhausted(&self) -> bool {
        self.questions
            .as_ref()
            .and_then(QuestionSet::len)
            .is_some_and(|total| self.question_index >= total)
    }

    fn end(&mut self) {
        self.state = SessionState::Ended;
        self.math_question = None;
    }

    /// The question currently awaiting an answer.
    pub fn current(&self) -> Option<CurrentQuestion<'_>> {
        if self.state != SessionState::Running {
            return None;
        }
        match self.questions.as_ref()? {
            QuestionSet::Picture(q) => q.get(self.question_index).map(CurrentQuestion::Picture),
            QuestionSet::Word(q) => q.get(self.question_index).map(CurrentQuestion::Word),
            QuestionSet::Quiz(q) => q.get(self.question_index).map(CurrentQuestion::Quiz),
            QuestionSet::Math => self.math_question.as_ref().map(CurrentQuestion::Math),
        }
    }

    pub fn urgency(&self) -> TimerUrgency {
        if self.time_remaining <= DANGER_SECS {
            TimerUrgency::Danger
        } else if self.time_remaining <= WARNING_SECS {
            TimerUrgency::Warning
        } else {
            TimerUrgency::Normal
        }
    }

    /// End-of-game summary, or `None` when no questions were ever loaded.
    pub fn summary(&self) -> Option<GameSummary> {
        Some(GameSummary {
            mode: self.mode()?,
            final_score: self.score,
            correct_count: self.correct_count,
            incorrect_count: self.incorrect_count,
            time_remaining: self.time_remaining,
            questions_answered: self.question_index,
            level: self.level,
        })
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.questions.as_ref().map(QuestionSet::mode)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Number of questions in the loaded set, `None` for math.
    pub fn total_questions(&self) -> Option<usize> {
        self.questions.as_ref().and_then(QuestionSet::len)
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

fn validate_quiz(questions: &[QuizQuestion]) -> Result<()> {
    for (index, q) in questions.iter().enumerate() {
        if q.options.is_empty() {
            return Err(GameError::MalformedQuestion {
                index,
                reason: "no options".to_string(),
            });
        }
        if q.correct_index >= q.options.len() {
            return Err(GameError::MalformedQuestion {
                index,
                reason: format!(
                    "correct index {} out of range for {} options",
                    q.correct_index,
                    q.options.len()
                ),
            });
        }
    }
    Ok(())
}
