use colored::Colorize;
use itertools::Itertools;

use crate::structs::{FrequencyAnalysis, LetterStats};

/// Prints a per-corpus overview of the computed tables.
pub fn print_summary<const N: usize>(
    name: &str,
    word_count: usize,
    analysis: &FrequencyAnalysis<N>,
    stats: &LetterStats,
) {
    println!("{}", format!("{name}: {word_count} words").bold());
    println!(
        "  letter counts: mean {:.2}, std dev {:.2}",
        stats.mean, stats.std_dev
    );

    let top = analysis
        .letters
        .iter()
        .sorted_by(|&(_, count1), &(_, count2)| count2.cmp(&count1))
        .take(5)
        .map(|(letter, count)| format!("{} {count}", letter.to_string().green()))
        .join(", ");
    println!("  most common: {top}");
}
