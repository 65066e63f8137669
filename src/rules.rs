use log::trace;

use crate::data::Dir;
use crate::moves::Move;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved(World, Move),
    /// Wall ahead, or a box that can't be pushed.
    Blocked,
    /// Nothing ahead - off the grid or a gap in it.
    OutOfBounds,
}

/// Resolves one step of the worker. The input world is never modified.
///
/// Boxes can only be pushed, never pulled, and at most one box moves.
pub fn attempt_move(dir: Dir, world: &World) -> MoveResult {
    let next = world.worker() + dir;
    let push = next + dir;

    let next_tile = match world.effective_tile(next) {
        None => return MoveResult::OutOfBounds,
        Some(tile) => tile,
    };

    let result = if next_tile.is_box() {
        // a box can only be pushed to a free floor or dock
        if world.effective_tile(push).map_or(false, |tile| tile.is_floor()) {
            let mut new_world = world.clone();
            new_world.push_box(next, push);
            new_world.worker = next;
            MoveResult::Moved(new_world, Move::new(dir, true))
        } else {
            MoveResult::Blocked
        }
    } else if next_tile.is_floor() {
        let mut new_world = world.clone();
        new_world.worker = next;
        MoveResult::Moved(new_world, Move::new(dir, false))
    } else {
        MoveResult::Blocked
    };

    trace!("{} from {:?}: {:?}", dir, world.worker(), result_kind(&result));
    result
}

fn result_kind(result: &MoveResult) -> &'static str {
    match *result {
        MoveResult::Moved(_, mov) if mov.is_push => "pushed",
        MoveResult::Moved(..) => "moved",
        MoveResult::Blocked => "blocked",
        MoveResult::OutOfBounds => "out of bounds",
    }
}
