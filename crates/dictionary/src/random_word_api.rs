// https://random-words-api.vercel.app/word - returns a single-element array
// with the word, its definition and a pronunciation field we don't need.

use serde::Deserialize;

use crate::DictionaryError;

const RANDOM_WORD_API_URL: &str = "https://random-words-api.vercel.app/word";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomWord {
    pub word: String,
    pub definition: String,
}

pub(crate) async fn get_random_word(
    client: &reqwest::Client,
) -> Result<RandomWord, DictionaryError> {
    let res = client
        .get(RANDOM_WORD_API_URL)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let res = res.error_for_status().map_err(DictionaryError::Fetch)?;
    let mut words: Vec<RandomWord> = res.json().await.map_err(DictionaryError::Deserialize)?;
    if words.is_empty() {
        return Err(DictionaryError::EmptyResponse);
    }
    Ok(words.swap_remove(0))
}
