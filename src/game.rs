use std::fmt::{self, Display, Formatter};
use std::io;

use log::{info, warn};

use crate::config::Config;
use crate::frontend::{Frontend, Input};
use crate::history::{History, Session};
use crate::level::Level;
use crate::moves::Moves;
use crate::world::World;

pub const LEVEL_COMPLETE: &str = "LEVEL COMPLETE!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Skipped,
    Quit,
    /// The level couldn't be parsed.
    Invalid,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved => write!(f, "solved"),
            Outcome::Skipped => write!(f, "skipped"),
            Outcome::Quit => write!(f, "quit"),
            Outcome::Invalid => write!(f, "invalid"),
        }
    }
}

/// How a single level ended.
#[derive(Debug, Clone)]
pub struct Played {
    pub outcome: Outcome,
    pub world: World,
    pub history: History,
    /// The player wants to stop playing altogether.
    pub quit: bool,
}

impl Played {
    fn new(outcome: Outcome, session: Session, quit: bool) -> Self {
        let (world, history) = session.into_parts();
        Played {
            outcome,
            world,
            history,
            quit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    /// 1-based position in the collection
    pub number: usize,
    pub title: String,
    pub outcome: Outcome,
    pub moves: Moves,
    pub pushes: u32,
}

/// Runs the input loop for one level until it's solved, skipped or quit.
///
/// A solved level shows `LEVEL_COMPLETE` and waits for `Input::Confirm`.
pub fn play_level<F>(frontend: &mut F, title: &str, initial: World) -> io::Result<Played>
where
    F: Frontend + ?Sized,
{
    let mut session = Session::new(initial);
    frontend.show(title, session.world(), session.history())?;

    while !session.world().is_solved() {
        let outcome = match frontend.wait_input()? {
            Input::Move(dir) => {
                session.move_worker(dir);
                None
            }
            Input::Undo => {
                session.undo();
                None
            }
            Input::Reset => {
                session.reset();
                None
            }
            Input::SkipLevel => Some(Outcome::Skipped),
            Input::Quit => Some(Outcome::Quit),
            Input::Confirm => continue,
        };
        if let Some(outcome) = outcome {
            return Ok(Played::new(outcome, session, outcome == Outcome::Quit));
        }
        frontend.show(title, session.world(), session.history())?;
    }

    frontend.show_message(LEVEL_COMPLETE)?;
    let quit = loop {
        match frontend.wait_input()? {
            Input::Confirm => break false,
            Input::Quit => break true,
            _ => {}
        }
    };
    Ok(Played::new(Outcome::Solved, session, quit))
}

/// Plays the collection from `config.first_level` until the last level or until the player quits.
pub fn play<F>(frontend: &mut F, levels: &[Level], config: &Config) -> io::Result<Vec<LevelReport>>
where
    F: Frontend + ?Sized,
{
    let mut reports = Vec::new();
    let skip = config.first_level.saturating_sub(1);

    for (index, level) in levels.iter().enumerate().skip(skip) {
        let number = index + 1;
        let title = level.display_title(number);

        let world = match level.world(config.char_policy) {
            Ok(world) => world,
            Err(err) => {
                warn!("Skipping {}: {}", title, err);
                reports.push(LevelReport {
                    number,
                    title,
                    outcome: Outcome::Invalid,
                    moves: Moves::default(),
                    pushes: 0,
                });
                continue;
            }
        };

        info!("Playing {}", title);
        let played = play_level(frontend, &title, world)?;
        info!(
            "{} {} after {} moves, {} pushes",
            title,
            played.outcome,
            played.history.len(),
            played.world.pushes()
        );

        reports.push(LevelReport {
            number,
            title,
            outcome: played.outcome,
            moves: played.history.moves(),
            pushes: played.world.pushes(),
        });
        if played.quit {
            break;
        }
    }

    Ok(reports)
}
