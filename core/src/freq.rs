use ndarray::Array1;

use crate::structs::{
    letter_index, FrequencyAnalysis, LetterCounts, LetterStats, PositionalCounts, WordN,
};

/// Fills both tables in a single pass over the word list.
pub fn count_frequencies<const N: usize>(words: &[WordN<N>]) -> FrequencyAnalysis<N> {
    let mut letters = LetterCounts::zero();
    let mut positions = PositionalCounts::<N>::zero();

    for word in words {
        for (position, &c) in word.0.iter().enumerate() {
            let index = letter_index(c);
            letters.0[index] += 1;
            positions.0[position][index] += 1;
        }
    }

    FrequencyAnalysis { letters, positions }
}

/// Population statistics over the 26 per-letter counts.
pub fn letter_stats(counts: &LetterCounts) -> LetterStats {
    let counts = counts.0.iter().map(|&count| count as f64).collect::<Array1<f64>>();

    LetterStats {
        mean: counts.mean().unwrap_or(0.),
        std_dev: counts.std(0.),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_words;

    const WORDS_LENGTH: usize = 5;

    fn words(raw: &[&str]) -> Vec<WordN<WORDS_LENGTH>> {
        filter_words(raw.iter().copied())
    }

    #[test]
    fn letter_counts_sum_to_five_times_word_count() {
        let words = words(&["apple", "mango", "grape", "amigo", "agile"]);
        let analysis = count_frequencies(&words);

        assert_eq!(WORDS_LENGTH as u64 * words.len() as u64, analysis.letters.total());
    }

    #[test]
    fn positional_counts_sum_to_word_count_at_each_position() {
        let words = words(&["apple", "mango", "grape", "amigo", "agile"]);
        let analysis = count_frequencies(&words);

        for position in 0..WORDS_LENGTH {
            assert_eq!(
                words.len() as u64,
                analysis.positions.position_total(position)
            );
        }
    }

    #[test]
    fn counts_literal_scenario() {
        let words = words(&["apple", "mango", "grape", "amigo", "agile"]);
        let analysis = count_frequencies(&words);

        assert_eq!(5, analysis.letters.get('a'));
        assert_eq!(4, analysis.letters.get('g'));
        assert_eq!(3, analysis.letters.get('p'));
        // apple, amigo, agile start with 'a'
        assert_eq!(3, analysis.positions.get(0, 'a'));
        // apple, grape, agile end with 'e'
        assert_eq!(3, analysis.positions.get(4, 'e'));
        // mango, amigo have 'g' at position 3
        assert_eq!(2, analysis.positions.get(3, 'g'));
    }

    #[test]
    fn empty_word_list_gives_zero_tables() {
        let analysis = count_frequencies::<WORDS_LENGTH>(&[]);

        assert_eq!(0, analysis.letters.total());
        assert!(analysis.letters.normalized().0.iter().all(|&f| f == 0.));
        assert!(analysis
            .positions
            .normalized()
            .0
            .iter()
            .flatten()
            .all(|&f| f == 0.));

        let stats = letter_stats(&analysis.letters);
        assert_eq!(0., stats.mean);
        assert_eq!(0., stats.std_dev);
    }

    #[test]
    fn normalized_letter_frequencies_sum_to_one() {
        let words = words(&["apple", "mango", "grape"]);
        let analysis = count_frequencies(&words);

        let sum: f64 = analysis.letters.normalized().0.iter().sum();
        assert!((sum - 1.).abs() < 1e-10);
    }

    #[test]
    fn normalized_positional_frequencies_sum_to_one_per_position() {
        let words = words(&["apple", "mango", "grape"]);
        let frequencies = count_frequencies(&words).positions.normalized();

        for position in 0..WORDS_LENGTH {
            let sum: f64 = frequencies.0[position].iter().sum();
            assert!((sum - 1.).abs() < 1e-10);
        }
    }

    #[test]
    fn short_entries_never_reach_the_tables() {
        let words = words(&["pear", "apple", "mango"]);
        assert_eq!(2, words.len());

        let analysis = count_frequencies(&words);
        assert_eq!(10, analysis.letters.total());
        assert_eq!(0, analysis.positions.get(0, 'p'));
    }

    #[test]
    fn stats_match_hand_computed_values() {
        let words = words(&["aaaaa", "bbbbb"]);
        let stats = letter_stats(&count_frequencies(&words).letters);

        let mean: f64 = 10. / 26.;
        let variance = (2. * (5. - mean).powi(2) + 24. * mean * mean) / 26.;

        assert!((stats.mean - mean).abs() < 1e-10);
        assert!((stats.std_dev - variance.sqrt()).abs() < 1e-10);
    }
}
