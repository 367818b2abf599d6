mod dictionary;
mod dictionary_api;
mod random_word_api;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
pub use random_word_api::RandomWord;

#[derive(Debug)]
pub enum DictionaryError {
    Fetch(reqwest::Error),
    Deserialize(reqwest::Error),
    NotFound(NotFoundError),
    EmptyResponse,
}

#[derive(Debug)]
pub struct NotFoundError {
    pub message: String,
}

#[derive(Clone)]
pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        dictionary_api::get_definition(&self.client, word).await
    }

    pub async fn get_random_word(&self) -> Result<RandomWord, DictionaryError> {
        random_word_api::get_random_word(&self.client).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
