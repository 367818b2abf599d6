use dictionary::{Phonetic, RandomWord, Word, WordMeaning};

/// The normalized record displayed for one searched or randomly fetched word.
///
/// The random-word service only knows the word and a single definition, so
/// that path leaves `phonetics` and `meanings` unset. A full lookup carries
/// both lists, even when they are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub word: String,
    pub definition: String,
    pub phonetics: Option<Vec<Phonetic>>,
    pub meanings: Option<Vec<WordMeaning>>,
}

impl LookupResult {
    pub fn from_random(entry: RandomWord) -> Self {
        Self {
            word: entry.word,
            definition: entry.definition,
            phonetics: None,
            meanings: None,
        }
    }

    pub fn from_word(word: Word) -> Self {
        // The summary definition is the first definition of the first meaning.
        let definition = word
            .meanings
            .first()
            .and_then(|meaning| meaning.definitions.first())
            .map(|definition| definition.definition.clone())
            .unwrap_or_default();
        Self {
            word: word.word,
            definition,
            phonetics: Some(word.phonetics),
            meanings: Some(word.meanings),
        }
    }
}

#[cfg(test)]
mod tests {
    use dictionary::WordDefinition;
    use pretty_assertions::assert_eq;

    use super::*;

    fn definition(text: &str) -> WordDefinition {
        WordDefinition {
            definition: text.to_string(),
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    #[test]
    fn from_random_has_no_detail_lists() {
        let result = LookupResult::from_random(RandomWord {
            word: "apple".to_string(),
            definition: "it is a fruit".to_string(),
        });
        assert_eq!(result.word, "apple");
        assert_eq!(result.definition, "it is a fruit");
        assert_eq!(result.phonetics, None);
        assert_eq!(result.meanings, None);
    }

    #[test]
    fn from_word_summarizes_with_the_first_definition() {
        let word = Word {
            word: "shout".to_string(),
            phonetics: Vec::new(),
            meanings: vec![
                WordMeaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec![definition("A loud burst of voice."), definition("A round.")],
                    synonyms: Vec::new(),
                    antonyms: Vec::new(),
                },
                WordMeaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec![definition("To utter a loud cry.")],
                    synonyms: Vec::new(),
                    antonyms: Vec::new(),
                },
            ],
        };
        let result = LookupResult::from_word(word);
        assert_eq!(result.definition, "A loud burst of voice.");
        assert_eq!(result.phonetics, Some(Vec::new()));
        assert_eq!(result.meanings.map(|meanings| meanings.len()), Some(2));
    }

    #[test]
    fn from_word_without_meanings_has_an_empty_summary() {
        let word = Word {
            word: "mystery".to_string(),
            phonetics: Vec::new(),
            meanings: Vec::new(),
        };
        let result = LookupResult::from_word(word);
        assert_eq!(result.definition, "");
        assert_eq!(result.meanings, Some(Vec::new()));
    }
}
