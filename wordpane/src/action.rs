use dictionary::{RandomWord, Word};

/// Everything that flows through the application's action channel.
///
/// Fetch requests and their outcomes carry a request generation; responses
/// are only applied when their generation matches the latest issued request,
/// so a stale response can never overwrite a newer one.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Render,
    Resize(u16, u16),
    ToggleTheme,
    FetchRandomWord {
        generation: u64,
    },
    FetchDefinition {
        generation: u64,
        word: String,
    },
    RandomWordLoaded {
        generation: u64,
        entry: RandomWord,
    },
    RandomWordFailed {
        generation: u64,
    },
    DefinitionLoaded {
        generation: u64,
        entry: Box<Word>,
    },
    DefinitionFailed {
        generation: u64,
        word: String,
    },
}
