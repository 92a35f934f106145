pub mod conversation;
pub mod terminal;

pub use terminal::run_tui;
