use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;
use std::str::FromStr;

use fnv::FnvHashSet;
use log::{debug, warn};

use crate::config::CharPolicy;
use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::Map;
use crate::vec2d::Vec2d;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    MultipleWorkers,
    NoWorker,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::MultipleWorkers => write!(f, "More than one worker"),
            ParserErr::NoWorker => write!(f, "No worker"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for World {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_rows(None, s.lines()).world(CharPolicy::Skip)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
pub(crate) fn parse_rows<S: AsRef<str>>(rows: &[S], policy: CharPolicy) -> Result<World, ParserErr> {
    let mut grid = Vec::with_capacity(rows.len());
    let mut docks = FnvHashSet::default();
    let mut boxes = FnvHashSet::default();
    let mut worker = None;

    for (r, line) in rows.iter().enumerate() {
        let mut line_cells = Vec::new();
        for (c, cur_char) in line.as_ref().chars().enumerate() {
            let pos = Pos::new(r as i32, c as i32);

            let cell = match cur_char {
                '#' => MapCell::Wall,
                ' ' => MapCell::Floor,
                '@' => {
                    if worker.replace(pos).is_some() {
                        return Err(ParserErr::MultipleWorkers);
                    }
                    MapCell::Floor
                }
                '+' => {
                    if worker.replace(pos).is_some() {
                        return Err(ParserErr::MultipleWorkers);
                    }
                    docks.insert(pos);
                    MapCell::Dock
                }
                '$' => {
                    boxes.insert(pos);
                    MapCell::Floor
                }
                '*' => {
                    boxes.insert(pos);
                    docks.insert(pos);
                    MapCell::Dock
                }
                '.' => {
                    docks.insert(pos);
                    MapCell::Dock
                }
                _ => match policy {
                    CharPolicy::Reject => return Err(ParserErr::Pos(r, c)),
                    CharPolicy::Skip => {
                        warn!("Skipping unknown character {:?} at [{}, {}]", cur_char, r, c);
                        line_cells.push(None);
                        continue;
                    }
                },
            };
            line_cells.push(Some(cell));
        }
        grid.push(line_cells);
    }

    let worker = worker.ok_or(ParserErr::NoWorker)?;
    let map = Map::new(Vec2d::new(&grid, None), docks);
    debug!(
        "Parsed level {}x{} with {} boxes and {} docks",
        map.rows(),
        map.cols(),
        boxes.len(),
        map.docks().len()
    );
    Ok(World::new(Rc::new(map), worker, boxes))
}

/// Splits a level collection. Every line starting with `;` ends a level
/// and the rest of that line is the level's title.
pub(crate) fn parse_collection(text: &str) -> Vec<Level> {
    let mut levels = Vec::new();
    let mut rows = Vec::new();

    for line in text.lines() {
        if line.starts_with(';') {
            let title = line[1..].trim();
            let title = if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            };
            levels.push(Level::from_rows(title, rows.drain(..)));
        } else {
            rows.push(line);
        }
    }

    if rows.iter().any(|row| !row.trim().is_empty()) {
        levels.push(Level::from_rows(None, rows));
    }

    debug!("Parsed collection with {} levels", levels.len());
    levels
}
