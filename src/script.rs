use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::{self, Write};
use std::vec;

use crate::data::Dir;
use crate::frontend::{Frontend, Input};
use crate::history::History;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptErr {
    pub pos: usize,
    pub found: char,
}

impl Display for ScriptErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid command {:?} at position {}", self.found, self.pos)
    }
}

impl Error for ScriptErr {}

/// Parses a command script: LURD letters move (either case), `-` undoes,
/// `=` resets, `>` skips the level and `q` quits. Whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<Input>, ScriptErr> {
    script
        .chars()
        .enumerate()
        .filter(|&(_, c)| !c.is_whitespace())
        .map(|(pos, c)| -> Result<Input, ScriptErr> {
            let input = match c {
                '-' => Input::Undo,
                '=' => Input::Reset,
                '>' => Input::SkipLevel,
                'q' | 'Q' => Input::Quit,
                _ => Input::Move(Dir::from_lurd(c).ok_or(ScriptErr { pos, found: c })?),
            };
            Ok(input)
        })
        .collect()
}

/// Plays a fixed list of inputs and writes the board only when a level ends
/// or a message is shown. Quits once the inputs run out.
pub struct ScriptFrontend<W: Write> {
    inputs: vec::IntoIter<Input>,
    out: W,
    last_frame: String,
    awaiting_confirm: bool,
}

impl<W: Write> ScriptFrontend<W> {
    pub fn new(inputs: Vec<Input>, out: W) -> Self {
        ScriptFrontend {
            inputs: inputs.into_iter(),
            out,
            last_frame: String::new(),
            awaiting_confirm: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Frontend for ScriptFrontend<W> {
    fn show(&mut self, title: &str, world: &World, history: &History) -> io::Result<()> {
        self.last_frame = format!(
            "{}\n{}Moves: {}\nPushes: {}\n",
            title,
            world,
            history.len(),
            world.pushes()
        );
        Ok(())
    }

    fn wait_input(&mut self) -> io::Result<Input> {
        if self.awaiting_confirm {
            self.awaiting_confirm = false;
            return Ok(Input::Confirm);
        }
        match self.inputs.next() {
            Some(input) => Ok(input),
            None => {
                write!(self.out, "{}", self.last_frame)?;
                Ok(Input::Quit)
            }
        }
    }

    fn show_message(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", self.last_frame)?;
        writeln!(self.out, "{}", text)?;
        self.awaiting_confirm = true;
        Ok(())
    }
}

impl<W: Write> Debug for ScriptFrontend<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptFrontend({} inputs left)", self.inputs.len())
    }
}
