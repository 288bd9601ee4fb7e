use crate::structs::WordN;

/// Keeps entries of exactly N ASCII letters, lowercased, in input order.
/// Everything else is dropped silently.
pub fn filter_words<I, S, const N: usize>(raw: I) -> Vec<WordN<N>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|word| WordN::<N>::try_from(word.as_ref().trim()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_five_letter_words_in_order() {
        let raw = ["apple", "pear", "Mango", "grapes", "agile", "s1ick", ""];

        let words: Vec<WordN<5>> = filter_words(raw);
        let words = words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

        assert_eq!(vec!["apple", "mango", "agile"], words);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let words: Vec<WordN<5>> = filter_words(["  crane ", "\tslate\n"]);
        let words = words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

        assert_eq!(vec!["crane", "slate"], words);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let words: Vec<WordN<5>> = filter_words(Vec::<String>::new());
        assert!(words.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let words: Vec<WordN<5>> = filter_words(["crane", "crane"]);
        assert_eq!(2, words.len());
    }
}
