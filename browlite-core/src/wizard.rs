//! First-run setup.
//!
//! Runs before any window exists, only when `config.ini` is missing. The
//! flow is a small state machine so it can be driven from the console or
//! from tests with canned answers:
//!
//! `NeedsPreset` -> `NeedsEngineChoice` -> `Ready`

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::Preset;
use crate::console::{ask, parse_menu_choice};
use crate::search;
use crate::store::{Store, StoreError};

/// Where the wizard is in the setup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Waiting for the preset choice.
    NeedsPreset,
    /// Preset applied, waiting for the search engine choice.
    NeedsEngineChoice,
    /// Setup finished.
    Ready,
}

/// First-run setup state machine writing into a [`Store`].
pub struct FirstRunWizard<'a> {
    store: &'a Store,
    state: WizardState,
    preset: Option<Preset>,
}

impl<'a> FirstRunWizard<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self {
            store,
            state: WizardState::NeedsPreset,
            preset: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Preset applied in the first step, if it has run.
    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    /// Menu text for the current step, `None` once ready.
    pub fn prompt(&self) -> Option<String> {
        match self.state {
            WizardState::NeedsPreset => {
                let mut text = String::from("\nSelect the operating mode:\n");
                for (i, preset) in Preset::all().iter().enumerate() {
                    text.push_str(&format!("{}. {}\n", i + 1, preset.label()));
                }
                text.push_str("Choose (1/2): ");
                Some(text)
            }
            WizardState::NeedsEngineChoice => {
                let mut text = String::from("\nChoose your default search engine:\n");
                for (i, engine) in search::all().iter().enumerate() {
                    text.push_str(&format!("{}. {}\n", i + 1, engine.name));
                }
                text.push_str("Enter the engine number: ");
                Some(text)
            }
            WizardState::Ready => None,
        }
    }

    /// Feed the user's answer for the current step.
    ///
    /// Invalid answers pick the default for that step. Returns a message to
    /// show the user, if any.
    pub fn answer(&mut self, choice: &str) -> Result<Option<String>, StoreError> {
        match self.state {
            WizardState::NeedsPreset => {
                let preset = Preset::from_choice(choice);
                self.store.apply_preset(preset)?;
                self.preset = Some(preset);
                self.state = WizardState::NeedsEngineChoice;
                Ok(Some(preset.activated_message().to_string()))
            }
            WizardState::NeedsEngineChoice => {
                let engines = search::all();
                self.state = WizardState::Ready;
                match parse_menu_choice(choice, engines.len()) {
                    Some(n) => {
                        let engine = &engines[n - 1];
                        self.store.set_default_search_engine(engine.id)?;
                        Ok(Some(format!("{} set as default search engine.", engine.name)))
                    }
                    None => {
                        debug!(choice, "Keeping preset search engine");
                        Ok(None)
                    }
                }
            }
            WizardState::Ready => Ok(None),
        }
    }
}

/// Drive the wizard over console streams until it is ready.
pub fn run_console<R: BufRead, W: Write>(
    store: &Store,
    input: &mut R,
    output: &mut W,
) -> Result<(), StoreError> {
    let mut wizard = FirstRunWizard::new(store);

    while let Some(prompt) = wizard.prompt() {
        let choice = ask(input, output, &prompt)?;
        if let Some(message) = wizard.answer(&choice)? {
            writeln!(output, "{message}").map_err(StoreError::Console)?;
        }
    }

    info!(preset = ?wizard.preset(), "First-run setup complete");
    Ok(())
}
