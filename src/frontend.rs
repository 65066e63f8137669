use std::io;

use crate::data::Dir;
use crate::history::History;
use crate::world::World;

/// Everything a player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Dir),
    Undo,
    Reset,
    SkipLevel,
    Quit,
    /// Dismisses a message.
    Confirm,
}

/// Draws the game and reads player input.
///
/// The game only ever reads the world and history through this.
pub trait Frontend {
    fn show(&mut self, title: &str, world: &World, history: &History) -> io::Result<()>;

    /// Blocks until the next input.
    fn wait_input(&mut self) -> io::Result<Input>;

    fn show_message(&mut self, text: &str) -> io::Result<()>;
}
