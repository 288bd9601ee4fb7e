mod plot;

use anyhow::{Context, Result};
use log::{info, warn};
use plotters::prelude::*;
use wordle_freq_core::corpus::{load_or_fetch, Source};
use wordle_freq_core::filter::filter_words;
use wordle_freq_core::freq::{count_frequencies, letter_stats};
use wordle_freq_core::structs::{Corpus, FrequencyAnalysis, WordN};
use wordle_freq_core::summary::print_summary;

const WORDLE_CACHE_PATH: &str = "wordle.txt";
const DICTIONARY_CACHE_PATH: &str = "five_letter_words.txt";
const PLOT_PATH: &str = "letter_frequency.png";
const WORDS_LENGTH: usize = 5;

type Word = WordN<WORDS_LENGTH>;

// matplotlib-ish skyblue and lightgreen
const WORDLE_BAR: RGBColor = RGBColor(135, 206, 235);
const DICTIONARY_BAR: RGBColor = RGBColor(144, 238, 144);
const WORDLE_HEAT: RGBColor = RGBColor(31, 119, 180);
const DICTIONARY_HEAT: RGBColor = RGBColor(44, 160, 44);

fn load_corpus(name: &str, cache_path: &str, source: &Source) -> Result<Corpus<WORDS_LENGTH>> {
    let raw = load_or_fetch(cache_path, source)
        .with_context(|| format!("Failed to load the {name} corpus"))?;
    let words: Vec<Word> = filter_words(raw);
    if words.is_empty() {
        warn!("The {name} corpus is empty, statistics will be all zero");
    }

    Ok(Corpus::new(name.to_string(), words))
}

fn analyze(corpus: &Corpus<WORDS_LENGTH>) -> FrequencyAnalysis<WORDS_LENGTH> {
    info!("Analyzing {} ({} words)", corpus.name, corpus.words.len());

    let analysis = count_frequencies(&corpus.words);
    let stats = letter_stats(&analysis.letters);
    print_summary(&corpus.name, corpus.words.len(), &analysis, &stats);

    analysis
}

fn render(
    wordle: &Corpus<WORDS_LENGTH>,
    wordle_analysis: &FrequencyAnalysis<WORDS_LENGTH>,
    dictionary: &Corpus<WORDS_LENGTH>,
    dictionary_analysis: &FrequencyAnalysis<WORDS_LENGTH>,
) -> Result<()> {
    info!("Rendering charts to {PLOT_PATH}");

    let root = BitMapBackend::new(PLOT_PATH, (1400, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let panes = root.split_evenly((2, 2));

    plot::draw_letter_bar(
        &panes[0],
        &format!("{} letter frequency", wordle.name),
        &wordle_analysis.letters,
        &WORDLE_BAR,
    )?;
    plot::draw_positional_heatmap(
        &panes[1],
        &format!("{} positional frequency", wordle.name),
        &wordle_analysis.positions.normalized(),
        &WORDLE_HEAT,
    )?;
    plot::draw_letter_bar(
        &panes[2],
        &format!("{} letter frequency", dictionary.name),
        &dictionary_analysis.letters,
        &DICTIONARY_BAR,
    )?;
    plot::draw_positional_heatmap(
        &panes[3],
        &format!("{} positional frequency", dictionary.name),
        &dictionary_analysis.positions.normalized(),
        &DICTIONARY_HEAT,
    )?;

    root.present()
        .with_context(|| format!("Unable to write {PLOT_PATH}"))?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let wordle = load_corpus(
        "Wordle answers",
        WORDLE_CACHE_PATH,
        &Source::wordle_archive(),
    )?;
    let dictionary = load_corpus(
        "five-letter words",
        DICTIONARY_CACHE_PATH,
        &Source::dictionary(WORDS_LENGTH),
    )?;

    let wordle_analysis = analyze(&wordle);
    let dictionary_analysis = analyze(&dictionary);

    render(&wordle, &wordle_analysis, &dictionary, &dictionary_analysis)?;

    info!("Charts written to {PLOT_PATH}");

    Ok(())
}
