use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;

use crate::dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
use crate::{DictionaryError, NotFoundError};

const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

// Characters that are not safe inside a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Deserialize)]
struct EntryResponse {
    word: String,
    #[serde(default)]
    phonetics: Vec<PhoneticResponse>,
    #[serde(default)]
    meanings: Vec<MeaningResponse>,
}

#[derive(Debug, Deserialize)]
struct PhoneticResponse {
    text: Option<String>,
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeaningResponse {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: String,
    definitions: Vec<DefinitionResponse>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DefinitionResponse {
    definition: String,
    example: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
}

// The api returns this body along with a 404 when it has no entry for a word.
#[derive(Debug, Deserialize)]
struct NotFoundResponse {
    message: String,
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = format!(
        "{DICTIONARY_API_URL}/{}",
        utf8_percent_encode(word, PATH_SEGMENT)
    );
    let res = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    if res.status() == reqwest::StatusCode::NOT_FOUND {
        let body: NotFoundResponse = res.json().await.map_err(DictionaryError::Deserialize)?;
        return Err(DictionaryError::NotFound(NotFoundError {
            message: body.message,
        }));
    }
    let res = res.error_for_status().map_err(DictionaryError::Fetch)?;
    let mut entries: Vec<EntryResponse> =
        res.json().await.map_err(DictionaryError::Deserialize)?;
    if entries.is_empty() {
        return Err(DictionaryError::EmptyResponse);
    }
    Ok(entries.swap_remove(0).into())
}

impl From<EntryResponse> for Word {
    fn from(entry: EntryResponse) -> Self {
        Word {
            word: entry.word,
            phonetics: entry
                .phonetics
                .into_iter()
                .map(|phonetic| Phonetic {
                    text: phonetic.text,
                    audio: phonetic.audio,
                })
                .collect(),
            meanings: entry.meanings.into_iter().map(WordMeaning::from).collect(),
        }
    }
}

impl From<MeaningResponse> for WordMeaning {
    fn from(meaning: MeaningResponse) -> Self {
        WordMeaning {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning
                .definitions
                .into_iter()
                .map(|definition| WordDefinition {
                    definition: definition.definition,
                    example: definition.example,
                    synonyms: definition.synonyms,
                    antonyms: definition.antonyms,
                })
                .collect(),
            synonyms: meaning.synonyms,
            antonyms: meaning.antonyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "word": "shout",
        "phonetic": "/ʃaʊt/",
        "phonetics": [
            { "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/shout-au.mp3" },
            { "text": "/ʃʌʊt/", "audio": "" }
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "definitions": [
                    { "definition": "A loud burst of voice.", "synonyms": [], "antonyms": [] },
                    {
                        "definition": "A round of drinks in a pub.",
                        "synonyms": ["round"],
                        "antonyms": [],
                        "example": "It's my shout."
                    }
                ],
                "synonyms": ["shout out"],
                "antonyms": []
            },
            {
                "partOfSpeech": "verb",
                "definitions": [
                    { "definition": "To utter a sudden and loud cry." }
                ]
            }
        ]
    }"#;

    #[test]
    fn converts_entry_to_word() {
        let entry: EntryResponse = serde_json::from_str(ENTRY).unwrap();
        let word = Word::from(entry);
        assert_eq!(word.word, "shout");
        assert_eq!(word.phonetics.len(), 2);
        assert_eq!(
            word.phonetics[0].audio.as_deref(),
            Some("https://api.dictionaryapi.dev/media/pronunciations/en/shout-au.mp3")
        );
        assert_eq!(word.phonetics[1].audio.as_deref(), Some(""));
        assert_eq!(word.meanings.len(), 2);
        assert_eq!(word.meanings[0].part_of_speech, "noun");
        assert_eq!(word.meanings[0].definitions.len(), 2);
        assert_eq!(
            word.meanings[0].definitions[1].example.as_deref(),
            Some("It's my shout.")
        );
        assert_eq!(word.meanings[1].part_of_speech, "verb");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let entry: EntryResponse = serde_json::from_str(r#"{ "word": "bare" }"#).unwrap();
        let word = Word::from(entry);
        assert!(word.phonetics.is_empty());
        assert!(word.meanings.is_empty());
    }

    #[test]
    fn parses_not_found_body() {
        let body: NotFoundResponse = serde_json::from_str(
            r#"{
                "title": "No Definitions Found",
                "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
                "resolution": "You can try the search again at later time or head to the web instead."
            }"#,
        )
        .unwrap();
        assert!(body.message.starts_with("Sorry pal"));
    }

    #[test]
    fn encodes_the_word_as_a_path_segment() {
        let encoded = utf8_percent_encode("ice cream", PATH_SEGMENT).to_string();
        assert_eq!(encoded, "ice%20cream");
    }
}
