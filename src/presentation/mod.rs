mod terminal_renderer;

pub use terminal_renderer::{initial_helper_text, TerminalRenderer};
