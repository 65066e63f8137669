use log::trace;

use crate::data::{Dir, Pos};
use crate::moves::{Move, Moves};
use crate::rules::{self, MoveResult};
use crate::world::World;

/// One successful move and where the worker stood before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    mov: Move,
    from: Pos,
}

/// Successful moves since the start of the level, newest last.
///
/// Only the move is stored, not the whole world: the worker always ends up
/// exactly one step from where it started, which is enough to step back.
/// Stepping back is only valid on the world the moves were recorded on,
/// `Session` keeps the two together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    steps: Vec<Step>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves that can be undone, i.e. the move counter.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn moves(&self) -> Moves {
        self.steps.iter().map(|step| step.mov).collect()
    }

    /// Attempts the move and records it if it succeeded.
    /// Rejected moves leave the world unchanged and no history.
    pub(crate) fn record_and_move(&mut self, dir: Dir, world: &mut World) -> bool {
        match rules::attempt_move(dir, world) {
            MoveResult::Moved(new_world, mov) => {
                self.steps.push(Step {
                    mov,
                    from: world.worker,
                });
                *world = new_world;
                true
            }
            _ => false,
        }
    }

    /// Restores the world from before the last move. No-op without history.
    pub(crate) fn undo(&mut self, world: &mut World) {
        if let Some(step) = self.steps.pop() {
            trace!("Undoing {}", step.mov);
            step_back(world, step);
        }
    }

    /// Restores the level's initial world and clears history.
    pub(crate) fn reset(&mut self, world: &mut World) {
        while let Some(step) = self.steps.pop() {
            step_back(world, step);
        }
    }
}

fn step_back(world: &mut World, step: Step) {
    let worker = world.worker;
    assert_eq!(
        worker,
        step.from + step.mov.dir,
        "world doesn't match history when undoing {}",
        step.mov
    );
    if step.mov.is_push {
        world.pull_box(worker + step.mov.dir, worker);
    }
    world.worker = step.from;
}

/// The live world of one level together with the history that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    world: World,
    history: History,
}

impl Session {
    pub fn new(world: World) -> Self {
        Session {
            world,
            history: History::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns whether the worker moved.
    pub fn move_worker(&mut self, dir: Dir) -> bool {
        self.history.record_and_move(dir, &mut self.world)
    }

    pub fn undo(&mut self) {
        self.history.undo(&mut self.world);
    }

    pub fn reset(&mut self) {
        self.history.reset(&mut self.world);
    }

    pub fn into_parts(self) -> (World, History) {
        (self.world, self.history)
    }
}
