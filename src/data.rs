use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

/// Cell position. Signed so that neighbors of border cells can be represented
/// and rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// Parses a LURD letter, either case.
    pub fn from_lurd(c: char) -> Option<Dir> {
        match c.to_ascii_lowercase() {
            'u' => Some(Dir::Up),
            'r' => Some(Dir::Right),
            'd' => Some(Dir::Down),
            'l' => Some(Dir::Left),
            _ => None,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r + dr, self.c + dc)
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos::new(self.r - dr, self.c - dc)
    }
}

/// Static part of the level - never changes after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Wall,
    Floor,
    Dock,
}

/// What is visible at a position once the worker and boxes are overlaid on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Dock,
    Box,
    Worker,
    BoxOnDock,
}

impl Tile {
    pub fn is_floor(self) -> bool {
        self == Tile::Floor || self == Tile::Dock
    }

    pub fn is_box(self) -> bool {
        self == Tile::Box || self == Tile::BoxOnDock
    }

    /// A worker standing on a dock is still `@` here, callers that care check the map.
    pub fn to_xsb(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => ' ',
            Tile::Dock => '.',
            Tile::Box => '$',
            Tile::Worker => '@',
            Tile::BoxOnDock => '*',
        }
    }
}

impl From<MapCell> for Tile {
    fn from(cell: MapCell) -> Tile {
        match cell {
            MapCell::Wall => Tile::Wall,
            MapCell::Floor => Tile::Floor,
            MapCell::Dock => Tile::Dock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let pos = Pos::new(3, 5);
        assert_eq!(pos + Dir::Up, Pos::new(2, 5));
        assert_eq!(pos + Dir::Down, Pos::new(4, 5));
        assert_eq!(pos + Dir::Left, Pos::new(3, 4));
        assert_eq!(pos + Dir::Right, Pos::new(3, 6));
        for &dir in &DIRECTIONS {
            assert_eq!(pos + dir - dir, pos);
        }
        assert_eq!(Pos::new(0, 0) + Dir::Up, Pos::new(-1, 0));
    }

    #[test]
    fn lurd_letters() {
        let dirs: String = DIRECTIONS.iter().map(|d| d.to_string()).collect();
        assert_eq!(dirs, "urdl");
        for &dir in &DIRECTIONS {
            let letter = dir.to_string().chars().next().unwrap();
            assert_eq!(Dir::from_lurd(letter), Some(dir));
            assert_eq!(Dir::from_lurd(letter.to_ascii_uppercase()), Some(dir));
        }
        assert_eq!(Dir::from_lurd('x'), None);
    }
}
