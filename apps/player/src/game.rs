//! Game loop: one session driven by a one-second ticker and player input.

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use arcade_core::types::{GameConfig, GameMode, GameSummary};
use arcade_core::{GameError, GameSession, QuestionProvider, Submission, Tick};

use crate::render;

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Forward stdin lines over a channel.
///
/// The reader runs on a detached thread so a blocked read never holds up
/// shutdown once the game is over.
pub fn stdin_lines() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });
    rx
}

/// Load and play one game of `mode`.
///
/// Returns `None` when the questions could not be loaded; the reason has
/// already been written to `out`. The game ends when the countdown runs
/// out, the questions are exhausted, input closes, or `cancel` resolves.
pub async fn play<P, W, C>(
    provider: &P,
    mode: GameMode,
    config: GameConfig,
    mut input: mpsc::UnboundedReceiver<String>,
    out: &mut W,
    cancel: C,
) -> anyhow::Result<Option<GameSummary>>
where
    P: QuestionProvider,
    W: Write,
    C: Future<Output = ()>,
{
    let mut session = GameSession::new(config);
    if let Err(e) = session.load_from(provider, mode).await {
        tracing::error!("Error loading {} questions: {}", mode, e);
        writeln!(out, "{}", render::load_failure(mode, &e))?;
        return Ok(None);
    }

    session.start()?;
    write_prompt(&session, out)?;

    let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(cancel);
    let mut urgency = session.urgency();

    while session.is_running() {
        tokio::select! {
            biased;
            line = input.recv() => match line {
                Some(line) => handle_line(&mut session, &line, out)?,
                None => {
                    tracing::info!("Input closed, abandoning game");
                    break;
                }
            },
            _ = &mut cancel => {
                writeln!(out, "\nGame abandoned.")?;
                break;
            }
            _ = ticker.tick() => {
                if session.tick() == Tick::TimeUp {
                    writeln!(out, "\n{}", render::TIME_UP)?;
                }
            }
        }

        let current = session.urgency();
        if current != urgency && session.is_running() {
            if let Some(warning) = render::timer_warning(current, session.time_remaining()) {
                write!(out, "\n{}\n> ", warning)?;
                out.flush()?;
            }
        }
        urgency = current;
    }
    // The countdown stops with the ticker.
    drop(ticker);

    let summary = session.summary().ok_or(GameError::NoQuestions)?;
    tracing::info!(
        "{} game over: score {}, {} correct, {} incorrect",
        mode,
        summary.final_score,
        summary.correct_count,
        summary.incorrect_count
    );
    write!(out, "{}", render::summary(&summary))?;
    out.flush()?;

    Ok(Some(summary))
}

fn handle_line<W: Write>(session: &mut GameSession, line: &str, out: &mut W) -> anyhow::Result<()> {
    let Some(mode) = session.mode() else {
        return Ok(());
    };

    let submission = if mode == GameMode::Quiz {
        // Options are shown 1-based.
        let choice = line.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1));
        match choice.map(|index| session.submit_choice(index)) {
            Some(submission @ Submission::Scored { .. }) => submission,
            _ => return reprompt(out, render::SELECT_ANSWER),
        }
    } else {
        match session.submit_answer(line) {
            Ok(submission) => submission,
            Err(GameError::InvalidInput(_)) => return reprompt(out, render::ENTER_NUMBER),
            Err(e) => return Err(e.into()),
        }
    };

    if let Some(text) = render::feedback(mode, &submission) {
        writeln!(out, "{}", text)?;
    }
    if let Submission::Scored { level_up: true, .. } = submission {
        writeln!(out, "{}", render::LEVEL_UP)?;
    }
    write_prompt(session, out)?;
    Ok(())
}

fn reprompt<W: Write>(out: &mut W, message: &str) -> anyhow::Result<()> {
    write!(out, "{}\n> ", message)?;
    out.flush()?;
    Ok(())
}

fn write_prompt<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    if let Some(prompt) = render::prompt(session) {
        write!(out, "{}", prompt)?;
    }
    out.flush()
}
