use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

pub(crate) fn read_file<P: AsRef<Path> + ?Sized>(path: &P) -> io::Result<String> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
