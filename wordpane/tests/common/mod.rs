#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dictionary::{Phonetic, RandomWord, Word, WordDefinition, WordMeaning};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use wordpane::components::SearchPanel;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn type_text(panel: &mut SearchPanel, text: &str) {
    for c in text.chars() {
        panel.handle_key_event(key(KeyCode::Char(c)));
    }
}

pub fn render_panel(panel: &SearchPanel) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| panel.draw(f, f.area())).unwrap();
    buffer_text(&terminal)
}

pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        text.push('\n');
    }
    text
}

pub fn apple() -> RandomWord {
    RandomWord {
        word: "apple".to_string(),
        definition: "it is a fruit".to_string(),
    }
}

pub fn definition(text: &str) -> WordDefinition {
    WordDefinition {
        definition: text.to_string(),
        example: None,
        synonyms: Vec::new(),
        antonyms: Vec::new(),
    }
}

pub fn banana() -> Word {
    Word {
        word: "banana".to_string(),
        phonetics: vec![
            Phonetic {
                text: None,
                audio: Some(
                    "https://api.dictionaryapi.dev/media/pronunciations/en/shout-au.mp3"
                        .to_string(),
                ),
            },
            Phonetic {
                text: Some("/ʃʌʊt/".to_string()),
                audio: Some(String::new()),
            },
        ],
        meanings: vec![
            WordMeaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![
                    definition("A loud burst of voice."),
                    definition("A round of drinks in a pub."),
                ],
                synonyms: vec!["shout out".to_string()],
                antonyms: Vec::new(),
            },
            WordMeaning {
                part_of_speech: "verb".to_string(),
                definitions: vec![definition("To utter a sudden and loud cry.")],
                synonyms: Vec::new(),
                antonyms: Vec::new(),
            },
        ],
    }
}
