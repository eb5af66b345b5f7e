//! Messenger adapters.

mod console;
mod mock;

pub use console::ConsoleMessenger;
pub use mock::MockMessenger;
