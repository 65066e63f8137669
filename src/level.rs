use std::error::Error;
use std::path::Path;

use crate::config::CharPolicy;
use crate::fs;
use crate::parser::{self, ParserErr};
use crate::world::World;

/// The text of one puzzle from a level collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    title: Option<String>,
    rows: Vec<String>,
}

impl Level {
    /// Leading and trailing blank rows are dropped, the rest is kept as is.
    pub fn from_rows<I, S>(title: Option<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<String> = rows.into_iter().map(|row| row.as_ref().to_string()).collect();
        while rows.last().map_or(false, |row| row.trim().is_empty()) {
            rows.pop();
        }
        let leading = rows.iter().take_while(|row| row.trim().is_empty()).count();
        rows.drain(..leading);
        Level { title, rows }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(String::as_str)
    }

    /// Title for display, `number` is 1-based.
    pub fn display_title(&self, number: usize) -> String {
        match self.title {
            Some(ref title) => title.clone(),
            None => format!("Level {}", number),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Builds the level's initial world.
    pub fn world(&self, policy: CharPolicy) -> Result<World, ParserErr> {
        parser::parse_rows(&self.rows, policy)
    }
}

pub trait LoadLevels {
    fn load_levels(&self) -> Result<Vec<Level>, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadLevels for P {
    fn load_levels(&self) -> Result<Vec<Level>, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(parser::parse_collection(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimming_blank_rows() {
        let level = Level::from_rows(None, vec!["", "  ", "####", "", "#@.#", "####", " ", ""]);
        assert_eq!(level.rows(), &["####", "", "#@.#", "####"]);
    }

    #[test]
    fn titles() {
        let named = Level::from_rows(Some("Tiny".to_string()), vec!["#@#"]);
        assert_eq!(named.title(), Some("Tiny"));
        assert_eq!(named.display_title(4), "Tiny");

        let unnamed = Level::from_rows(None, vec!["#@#"]);
        assert_eq!(unnamed.title(), None);
        assert_eq!(unnamed.display_title(4), "Level 4");
    }

    #[test]
    fn loading_levels() {
        let levels = "levels/simple.txt".load_levels().unwrap();
        assert_eq!(levels.len(), 3);
        for level in &levels {
            level.world(CharPolicy::Reject).unwrap();
        }

        let original = "levels/original.txt".load_levels().unwrap();
        assert_eq!(original.len(), 2);
        assert_eq!(original[0].title(), Some("Original 1"));
        let world = original[0].world(CharPolicy::Reject).unwrap();
        assert_eq!(world.boxes().len(), 6);
        assert_eq!(world.docks().len(), 6);

        assert!("levels/does-not-exist.txt".load_levels().is_err());
    }
}
