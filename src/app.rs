//! Main menu loop and session state.
//! Reads one action per iteration and dispatches it to its handler.

use crate::commands::{self, Command};
use crate::config::StartupArgs;
use crate::console::Console;
use crate::error::{FlashcardError, Result};
use crate::models::Collection;
use rand::Rng;
use std::io::{BufRead, Write};

pub const MENU: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// Menu loop states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AppState {
    #[default]
    Running,
    Terminated,
}

/// One interactive session: the cards, the console and the random source for quizzes.
pub struct App<R, W, G> {
    cards: Collection,
    console: Console<R, W>,
    rng: G,
    state: AppState,
}

impl<R: BufRead, W: Write, G: Rng> App<R, W, G> {
    pub fn new(console: Console<R, W>, rng: G) -> Self {
        Self {
            cards: Collection::new(),
            console,
            rng,
            state: AppState::default(),
        }
    }

    /// Runs a whole session: optional startup import, the menu loop, optional final export.
    /// Hands back the final collection and the console.
    pub fn run(mut self, args: &StartupArgs) -> (Collection, Console<R, W>) {
        if let Some(path) = &args.import {
            if let Err(e) = commands::import_from(&mut self.cards, &mut self.console, path) {
                tracing::error!("startup import failed: {e}");
            }
        }

        while self.state == AppState::Running {
            match self.step() {
                Ok(()) => {}
                Err(FlashcardError::EndOfInput) => {
                    tracing::debug!("input closed, leaving menu");
                    self.state = AppState::Terminated;
                }
                Err(e) => {
                    tracing::error!("console failure: {e}");
                    self.state = AppState::Terminated;
                }
            }
        }

        if let Some(path) = &args.export {
            if let Err(e) = commands::export_to(&mut self.cards, &mut self.console, path) {
                tracing::error!("final export failed: {e}");
            }
        }
        (self.cards, self.console)
    }

    /// Shows the menu, reads one action and handles it.
    fn step(&mut self) -> Result<()> {
        let input = self.console.ask(&mut self.cards, MENU)?;
        let cards = &mut self.cards;
        let console = &mut self.console;

        match Command::parse(&input) {
            Some(Command::Add) => commands::add(cards, console),
            Some(Command::Remove) => commands::remove(cards, console),
            Some(Command::Import) => commands::import(cards, console),
            Some(Command::Export) => commands::export(cards, console),
            Some(Command::Ask) => commands::ask(cards, console, &mut self.rng),
            Some(Command::Log) => commands::save_log(cards, console),
            Some(Command::HardestCard) => commands::hardest_card(cards, console),
            Some(Command::ResetStats) => commands::reset_stats(cards, console),
            Some(Command::Exit) => {
                self.state = AppState::Terminated;
                console.say(cards, "Bye bye!")
            }
            None => console.report(cards, "Wrong input!"),
        }
    }
}
