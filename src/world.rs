use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use fnv::FnvHashSet;

use crate::data::{Pos, Tile};
use crate::map::Map;

/// The worker and boxes on top of a shared static map.
///
/// Cloning a world is a full snapshot: the box set is copied,
/// only the immutable map is shared.
#[derive(Clone, PartialEq, Eq)]
pub struct World {
    map: Rc<Map>,
    pub(crate) worker: Pos,
    pub(crate) boxes: FnvHashSet<Pos>,
    pub(crate) pushes: u32,
}

impl World {
    pub(crate) fn new(map: Rc<Map>, worker: Pos, boxes: FnvHashSet<Pos>) -> Self {
        World {
            map,
            worker,
            boxes,
            pushes: 0,
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn worker(&self) -> Pos {
        self.worker
    }

    pub fn boxes(&self) -> &FnvHashSet<Pos> {
        &self.boxes
    }

    pub fn docks(&self) -> &FnvHashSet<Pos> {
        self.map.docks()
    }

    pub fn pushes(&self) -> u32 {
        self.pushes
    }

    pub fn rows(&self) -> i32 {
        self.map.rows()
    }

    pub fn cols(&self) -> i32 {
        self.map.cols()
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.contains(&pos)
    }

    /// The tile seen at `pos` with the worker and boxes overlaid,
    /// `None` where the map has no tile.
    pub fn effective_tile(&self, pos: Pos) -> Option<Tile> {
        if pos == self.worker {
            Some(Tile::Worker)
        } else if self.has_box(pos) && self.map.is_dock(pos) {
            Some(Tile::BoxOnDock)
        } else if self.has_box(pos) {
            Some(Tile::Box)
        } else {
            self.map.tile_at(pos).map(Tile::from)
        }
    }

    /// Moves a box and counts the push.
    pub(crate) fn push_box(&mut self, from: Pos, to: Pos) {
        assert!(self.boxes.remove(&from), "no box to push at {:?}", from);
        assert!(self.boxes.insert(to), "box pushed onto another box at {:?}", to);
        self.pushes += 1;
    }

    /// Reverse of `push_box`, only for undoing history.
    pub(crate) fn pull_box(&mut self, from: Pos, to: Pos) {
        assert!(self.pushes > 0, "pulling a box that was never pushed");
        assert!(self.boxes.remove(&from), "no box to pull at {:?}", from);
        assert!(self.boxes.insert(to), "box pulled onto another box at {:?}", to);
        self.pushes -= 1;
    }

    /// Every dock holds a box. Levels without docks are trivially solved.
    pub fn is_solved(&self) -> bool {
        self.docks()
            .iter()
            .all(|&dock| self.effective_tile(dock) == Some(Tile::BoxOnDock))
    }
}

impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            let mut line = String::with_capacity(self.cols() as usize);
            for c in 0..self.cols() {
                let pos = Pos::new(r, c);
                let ch = match self.effective_tile(pos) {
                    Some(Tile::Worker) if self.map.is_dock(pos) => '+',
                    Some(tile) => tile.to_xsb(),
                    None => ' ',
                };
                line.push(ch);
            }
            // don't print trailing empty cells to match the input level strings
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl Debug for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "pushes: {}", self.pushes)?;
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_tiles() {
        let world: World = r"
#######
#@$.* #
#######
"
        .parse()
        .unwrap();

        assert_eq!(world.effective_tile(Pos::new(0, 0)), Some(Tile::Wall));
        assert_eq!(world.effective_tile(Pos::new(1, 1)), Some(Tile::Worker));
        assert_eq!(world.effective_tile(Pos::new(1, 2)), Some(Tile::Box));
        assert_eq!(world.effective_tile(Pos::new(1, 3)), Some(Tile::Dock));
        assert_eq!(world.effective_tile(Pos::new(1, 4)), Some(Tile::BoxOnDock));
        assert_eq!(world.effective_tile(Pos::new(1, 5)), Some(Tile::Floor));
        assert_eq!(world.effective_tile(Pos::new(1, 7)), None);
        assert_eq!(world.effective_tile(Pos::new(3, 0)), None);
    }

    #[test]
    fn worker_on_dock() {
        let world: World = r"
#####
#+$ #
#####
"
        .parse()
        .unwrap();

        assert_eq!(world.effective_tile(Pos::new(1, 1)), Some(Tile::Worker));
        assert!(world.docks().contains(&Pos::new(1, 1)));
        assert!(!world.is_solved());
    }

    #[test]
    fn pushing_box() {
        let mut world: World = "#@$ #".parse().unwrap();
        world.push_box(Pos::new(0, 2), Pos::new(0, 3));
        assert_eq!(world.pushes(), 1);
        assert_eq!(world.boxes().len(), 1);
        assert!(world.has_box(Pos::new(0, 3)));
        assert!(!world.has_box(Pos::new(0, 2)));

        world.pull_box(Pos::new(0, 3), Pos::new(0, 2));
        assert_eq!(world.pushes(), 0);
        assert!(world.has_box(Pos::new(0, 2)));
    }

    #[test]
    #[should_panic]
    fn pushing_missing_box() {
        let mut world: World = "#@$ #".parse().unwrap();
        world.push_box(Pos::new(0, 3), Pos::new(0, 4));
    }

    #[test]
    #[should_panic]
    fn pushing_onto_box() {
        let mut world: World = "#@$$ #".parse().unwrap();
        world.push_box(Pos::new(0, 2), Pos::new(0, 3));
    }

    #[test]
    #[should_panic(expected = "never pushed")]
    fn pulling_unpushed_box() {
        let mut world: World = "#@ $#".parse().unwrap();
        world.pull_box(Pos::new(0, 3), Pos::new(0, 2));
    }

    #[test]
    fn solved() {
        let solved: World = "#@ ** #".parse().unwrap();
        assert!(solved.is_solved());

        let uncovered: World = "#@ *. $#".parse().unwrap();
        assert!(!uncovered.is_solved());

        let no_docks: World = "#@ $ #".parse().unwrap();
        assert!(no_docks.is_solved());
    }

    #[test]
    fn snapshots_are_independent() {
        let world: World = "#@$ .#".parse().unwrap();
        let mut moved = world.clone();
        moved.push_box(Pos::new(0, 2), Pos::new(0, 3));
        assert!(world.has_box(Pos::new(0, 2)));
        assert_eq!(world.pushes(), 0);
        assert_ne!(world, moved);
    }

    #[test]
    fn formatting() {
        let level = r"
    #####
    #   #
    #$  #
  ###  $##
  #  $ $ #
### # ## #   ######
#   # ## #####  ..#
# $  $          ..#
##### ### #@##  ..#
    #     #########
    #######
"
        .trim_start_matches('\n');
        let world: World = level.parse().unwrap();
        assert_eq!(world.to_string(), level);
        assert_eq!(world.rows(), 11);
        assert_eq!(world.cols(), 19);

        let on_dock: World = "#+*$.#".parse().unwrap();
        assert_eq!(on_dock.to_string(), "#+*$.#\n");
    }
}
