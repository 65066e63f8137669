use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;

use crate::data::Dir;

/// One successful step of the worker.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub dir: Dir,
    pub is_push: bool,
}

impl Move {
    pub fn new(dir: Dir, is_push: bool) -> Self {
        Move { dir, is_push }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_push {
            write!(f, "{}", self.dir.to_string().to_uppercase())?;
        } else {
            write!(f, "{}", self.dir)?;
        }
        Ok(())
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Moves in the order they were made. Displayed in LURD notation.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Move>);

impl Moves {
    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Move> {
        self.0.iter()
    }
}

impl FromIterator<Move> for Moves {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Moves(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Move;
    type IntoIter = ::std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
