pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod models;

pub use app::App;
pub use config::StartupArgs;
pub use console::Console;
pub use error::{FlashcardError, Result};
pub use models::{Card, Collection};
