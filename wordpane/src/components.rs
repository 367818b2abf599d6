pub mod result_card;
pub mod search_panel;

pub use result_card::ResultCard;
pub use search_panel::SearchPanel;
