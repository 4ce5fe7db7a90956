// Adapters layer: concrete implementations of the domain ports.

pub mod terminal;

pub use terminal::TerminalConsole;
