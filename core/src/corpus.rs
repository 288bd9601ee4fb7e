use log::info;
use regex::Regex;
use reqwest::StatusCode;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::data;

pub const WORDLE_ARCHIVE_URL: &str = "https://www.techradar.com/news/past-wordle-answers";
pub const DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

const ANSWERS_SECTION_ID: &str = "section-past-wordle-answers-alphabetical-list";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: StatusCode },
    #[error("Could not extract word list: {0}")]
    Extract(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How to turn a response body into a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Answers live in the paragraph following the alphabetical-list heading,
    /// separated by '|'.
    ArchivePage,
    /// One word per line, keeping entries of the given length.
    WordList { word_length: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub url: String,
    pub extraction: Extraction,
}

impl Source {
    pub fn wordle_archive() -> Self {
        Self {
            name: "Wordle answer".to_string(),
            url: WORDLE_ARCHIVE_URL.to_string(),
            extraction: Extraction::ArchivePage,
        }
    }

    pub fn dictionary(word_length: usize) -> Self {
        Self {
            name: "dictionary".to_string(),
            url: DICTIONARY_URL.to_string(),
            extraction: Extraction::WordList { word_length },
        }
    }
}

/// Reads the cache file if it exists, otherwise fetches the source and
/// writes the extracted words to the cache.
pub fn load_or_fetch<P>(cache_path: P, source: &Source) -> Result<Vec<String>, CorpusError>
where
    P: AsRef<Path>,
{
    let cache_path = cache_path.as_ref();

    if cache_path.exists() {
        info!(
            "Reading {} words from {}",
            source.name,
            cache_path.display()
        );
        return Ok(data::load_words(cache_path)?);
    }

    info!("Fetching {} words from {}", source.name, source.url);
    let words = fetch(source)?;
    data::save_words(cache_path, &words)?;

    Ok(words)
}

pub fn fetch(source: &Source) -> Result<Vec<String>, CorpusError> {
    let response = reqwest::blocking::get(&source.url).map_err(|err| CorpusError::Network {
        url: source.url.clone(),
        source: err,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CorpusError::Status {
            url: source.url.clone(),
            status,
        });
    }

    let body = response.text().map_err(|err| CorpusError::Network {
        url: source.url.clone(),
        source: err,
    })?;

    extract(&source.extraction, &body)
}

pub fn extract(extraction: &Extraction, body: &str) -> Result<Vec<String>, CorpusError> {
    match extraction {
        Extraction::ArchivePage => extract_archive_answers(body),
        Extraction::WordList { word_length } => Ok(body
            .lines()
            .map(|line| line.trim().to_ascii_lowercase())
            .filter(|word| word.chars().count() == *word_length)
            .collect()),
    }
}

fn extract_archive_answers(body: &str) -> Result<Vec<String>, CorpusError> {
    let section = Regex::new(&format!(
        r#"(?s)<h3[^>]*id="{ANSWERS_SECTION_ID}"[^>]*>.*?<p[^>]*>(.*?)</p>"#
    ))
    .unwrap();

    let paragraph = section
        .captures(body)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| {
            CorpusError::Extract(format!(
                "No paragraph following the \"{ANSWERS_SECTION_ID}\" heading"
            ))
        })?;

    let tags = Regex::new(r"<[^>]+>").unwrap();
    let text = tags.replace_all(paragraph.as_str(), "");

    Ok(text
        .split('|')
        .map(|word| word.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .collect())
}
