//! Sentence segmentation
//!
//! Splits a document into ordered sentences that borrow from it. The
//! default segmenter follows the Unicode sentence boundary rules (UAX #29).

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// A sentence of the document and its position in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sentence<'a> {
    /// 0-based rank in the original ordering
    pub index: usize,
    /// Verbatim slice of the document, surrounding whitespace trimmed
    pub text: &'a str,
}

pub trait SentenceSegmenter {
    /// Split `text` into sentences. Indices must be `0..n` in order of appearance.
    fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>>;
}

impl<S: SentenceSegmenter + ?Sized> SentenceSegmenter for &S {
    fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        (**self).segment(text)
    }
}

/// Abbreviations that end with a period but do not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "gen", "col", "lt", "sgt", "capt", "gov",
    "sen", "rep", "rev", "vs", "approx", "fig", "dept", "vol", "jan", "feb", "aug", "sept", "oct",
    "nov", "dec",
];

/// Последнее слово - известное сокращение (`Mr.`) или инициализм (`U.S.`, `e.g.`)
fn ends_with_abbreviation(piece: &str) -> bool {
    let Some(token) = piece.split_whitespace().next_back() else {
        return false;
    };
    let token = token.trim_start_matches(|c: char| !c.is_alphanumeric());
    let Some(stem) = token.strip_suffix('.') else {
        return false;
    };

    if ABBREVIATIONS.contains(&stem.to_lowercase().as_str()) {
        return true;
    }

    // Одиночная буква ("A.") считается концом предложения
    let letters: Vec<&str> = stem.split('.').collect();
    letters.len() >= 2
        && letters
            .iter()
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
}

/// UAX #29 segmenter. Whitespace-only pieces are dropped, and a piece ending
/// in an abbreviation is joined with the one that follows it unless a line
/// break separates them.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut pieces = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, piece) in text.split_sentence_bound_indices() {
            let start = pending.unwrap_or(offset);
            let candidate = &text[start..offset + piece.len()];
            let trimmed = candidate.trim_end();
            let line_break = candidate[trimmed.len()..].contains('\n');

            if !line_break && ends_with_abbreviation(trimmed) {
                pending = Some(start);
                continue;
            }

            pending = None;
            pieces.push(candidate);
        }
        if let Some(start) = pending {
            pieces.push(&text[start..]);
        }

        pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(index, text)| Sentence { index, text })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(sentences: &[Sentence<'a>]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = UnicodeSentenceSegmenter.segment("A. B is similar. C. B is similar too.");

        assert_eq!(
            texts(&sentences),
            vec!["A.", "B is similar.", "C.", "B is similar too."]
        );
        for (position, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, position);
        }
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = UnicodeSentenceSegmenter.segment("Is it done? Yes! It is.");
        assert_eq!(texts(&sentences), vec!["Is it done?", "Yes!", "It is."]);
    }

    #[test]
    fn test_paragraph_breaks_and_whitespace() {
        let sentences = UnicodeSentenceSegmenter.segment("  First line.\n\nSecond line.  \n");
        assert_eq!(texts(&sentences), vec!["First line.", "Second line."]);
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = UnicodeSentenceSegmenter.segment("just one fragment");
        assert_eq!(texts(&sentences), vec!["just one fragment"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(UnicodeSentenceSegmenter.segment("").is_empty());
        assert!(UnicodeSentenceSegmenter.segment(" \n\t ").is_empty());
    }

    #[test]
    fn test_sentences_are_substrings() {
        let text = "Rust is fast. Rust is safe.\nMemory safety matters.";
        for sentence in UnicodeSentenceSegmenter.segment(text) {
            assert!(text.contains(sentence.text));
        }
    }

    #[test]
    fn test_title_abbreviation_not_split() {
        let sentences =
            UnicodeSentenceSegmenter.segment("Mr. Smith went to Washington. He arrived late.");
        assert_eq!(
            texts(&sentences),
            vec!["Mr. Smith went to Washington.", "He arrived late."]
        );
    }

    #[test]
    fn test_initialism_not_split() {
        let sentences = UnicodeSentenceSegmenter.segment("The U.S. Army moved. Troops followed.");
        assert_eq!(texts(&sentences), vec!["The U.S. Army moved.", "Troops followed."]);
    }

    #[test]
    fn test_several_abbreviations_in_one_sentence() {
        let text = "Dr. Jones met Prof. Lee, e.g. Monday. It went well.";
        let sentences = UnicodeSentenceSegmenter.segment(text);
        assert_eq!(
            texts(&sentences),
            vec!["Dr. Jones met Prof. Lee, e.g. Monday.", "It went well."]
        );
        assert_eq!(sentences[1].index, 1);
    }

    #[test]
    fn test_single_letter_still_ends_sentence() {
        let sentences = UnicodeSentenceSegmenter.segment("Plan A. Plan B.");
        assert_eq!(texts(&sentences), vec!["Plan A.", "Plan B."]);
    }

    #[test]
    fn test_abbreviation_before_line_break_ends_sentence() {
        let sentences = UnicodeSentenceSegmenter.segment("Signed by Dr.\n\nNext part here.");
        assert_eq!(texts(&sentences), vec!["Signed by Dr.", "Next part here."]);
    }

    #[test]
    fn test_trailing_abbreviation_kept() {
        let sentences = UnicodeSentenceSegmenter.segment("Ask the Dr.");
        assert_eq!(texts(&sentences), vec!["Ask the Dr."]);
    }

    #[test]
    fn test_ends_with_abbreviation() {
        assert!(ends_with_abbreviation("Mr."));
        assert!(ends_with_abbreviation("met (Dr."));
        assert!(ends_with_abbreviation("the U.S."));
        assert!(ends_with_abbreviation("i.e."));
        assert!(!ends_with_abbreviation("A."));
        assert!(!ends_with_abbreviation("Washington."));
        assert!(!ends_with_abbreviation("Mr"));
        assert!(!ends_with_abbreviation(""));
    }
}
