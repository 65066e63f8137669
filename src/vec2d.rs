use crate::data::Pos;

/// Row-major grid. Ragged input rows are padded to the longest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: i32,
    cols: i32,
}

impl<T: Copy> Vec2d<T> {
    pub(crate) fn new(grid: &[Vec<T>], fill: T) -> Self {
        let max_cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(fill);
            }
        }
        Vec2d {
            data,
            rows: grid.len() as i32,
            cols: max_cols as i32,
        }
    }
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> i32 {
        self.rows
    }

    pub(crate) fn cols(&self) -> i32 {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && pos.r < self.rows && pos.c < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        (pos.r * self.cols + pos.c) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_ragged_rows() {
        let grid = Vec2d::new(&[vec![1, 2, 3], vec![4], vec![]], 0);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Pos::new(0, 2)), Some(&3));
        assert_eq!(grid.get(Pos::new(1, 0)), Some(&4));
        assert_eq!(grid.get(Pos::new(1, 2)), Some(&0));
        assert_eq!(grid.get(Pos::new(2, 1)), Some(&0));
    }

    #[test]
    fn bounds() {
        let grid = Vec2d::new(&[vec![1, 2], vec![3, 4]], 0);
        assert_eq!(grid.get(Pos::new(1, 1)), Some(&4));
        assert_eq!(grid.get(Pos::new(-1, 0)), None);
        assert_eq!(grid.get(Pos::new(0, -1)), None);
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert_eq!(grid.get(Pos::new(0, 2)), None);
    }

    #[test]
    fn empty() {
        let grid: Vec2d<u8> = Vec2d::new(&[], 0);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.get(Pos::new(0, 0)), None);
    }
}
