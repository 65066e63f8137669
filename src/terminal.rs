use std::fmt::{self, Debug, Formatter};
use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use log::debug;

use crate::data::{Dir, Pos, Tile};
use crate::frontend::{Frontend, Input};
use crate::history::History;
use crate::world::World;

const HELP: &str = "arrows/hjkl move  u undo  r reset  s skip  q quit";

/// Interactive frontend on the terminal's alternate screen.
///
/// Raw mode is on for as long as this lives. Call `cleanup` to restore the
/// terminal and see errors, otherwise it's done on drop.
pub struct Terminal {
    writer: BufWriter<Stdout>,
    active: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut term = Terminal {
            writer: BufWriter::new(io::stdout()),
            active: true,
        };
        execute!(
            term.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        debug!("Terminal initialized");
        Ok(term)
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

impl Debug for Terminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Terminal {{ active: {} }}", self.active)
    }
}

impl Frontend for Terminal {
    fn show(&mut self, title: &str, world: &World, history: &History) -> io::Result<()> {
        draw_frame(&mut self.writer, title, world, history)?;
        self.writer.flush()
    }

    fn wait_input(&mut self) -> io::Result<Input> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(input) = map_key(key) {
                    return Ok(input);
                }
            }
        }
    }

    fn show_message(&mut self, text: &str) -> io::Result<()> {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        let x = (width as usize).saturating_sub(text.len()) / 2;
        let y = height / 2;
        queue!(
            self.writer,
            Clear(ClearType::All),
            MoveTo(x as u16, y),
            SetForegroundColor(Color::Green),
            Print(text),
            ResetColor,
            MoveTo(0, y + 2),
            Print("press space to continue")
        )?;
        self.writer.flush()
    }
}

/// Redraws over the previous frame line by line instead of clearing the whole screen,
/// leftovers right of each line and below the frame are erased.
fn draw_frame<W: Write>(
    out: &mut W,
    title: &str,
    world: &World,
    history: &History,
) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Print(title), Clear(ClearType::UntilNewLine))?;
    queue!(out, MoveTo(0, 1), Clear(ClearType::UntilNewLine))?;

    for r in 0..world.rows() {
        queue!(out, MoveTo(0, r as u16 + 2))?;
        for c in 0..world.cols() {
            let pos = Pos::new(r, c);
            let (ch, color) = match world.effective_tile(pos) {
                Some(Tile::Worker) if world.map().is_dock(pos) => ('+', Color::Cyan),
                Some(tile) => (tile.to_xsb(), tile_color(tile)),
                None => (' ', Color::Reset),
            };
            queue!(out, SetForegroundColor(color), Print(ch))?;
        }
        queue!(out, ResetColor, Clear(ClearType::UntilNewLine))?;
    }

    let status = world.rows() as u16 + 3;
    queue!(
        out,
        MoveTo(0, status - 1),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, status),
        Print("MOVES  PUSHES"),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, status + 1),
        Print(format!(" {:04}     {:04}", history.len(), world.pushes())),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, status + 2),
        Clear(ClearType::UntilNewLine),
        MoveTo(0, status + 3),
        Print(HELP),
        Clear(ClearType::FromCursorDown)
    )
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Wall => Color::DarkGrey,
        Tile::Floor => Color::Reset,
        Tile::Dock => Color::Yellow,
        Tile::Box => Color::DarkYellow,
        Tile::BoxOnDock => Color::Green,
        Tile::Worker => Color::Cyan,
    }
}

fn map_key(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Input::Quit),
            _ => None,
        };
    }
    let input = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Input::Move(Dir::Up),
        KeyCode::Down | KeyCode::Char('j') => Input::Move(Dir::Down),
        KeyCode::Left | KeyCode::Char('h') => Input::Move(Dir::Left),
        KeyCode::Right | KeyCode::Char('l') => Input::Move(Dir::Right),
        KeyCode::Backspace | KeyCode::Char('u') => Input::Undo,
        KeyCode::Char('r') => Input::Reset,
        KeyCode::Char('s') => Input::SkipLevel,
        KeyCode::Esc | KeyCode::Char('q') => Input::Quit,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Confirm,
        _ => return None,
    };
    Some(input)
}
