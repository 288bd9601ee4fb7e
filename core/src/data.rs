use itertools::Itertools;
use std::io::{self, BufRead, Write};
use std::{fs::File, path::Path};

pub fn load_words<P>(filename: P) -> io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    let words = io::BufReader::new(file)
        .lines()
        .collect::<io::Result<Vec<_>>>()?;

    Ok(words)
}

/// One word per line, UTF-8, no header.
pub fn save_words<P>(filename: P, words: &[String]) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let mut file = File::create(filename)?;
    file.write_all(words.iter().join("\n").as_bytes())?;

    Ok(())
}
