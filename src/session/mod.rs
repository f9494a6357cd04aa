//! Turn-driven puzzle sessions.
//!
//! A session offers a random handful of functions and a turn budget. Each
//! turn takes a free-text response from the player, pulls out the last call
//! to an offered function, and applies it to the current Zab. At the end the
//! real effects are revealed.

mod action;
pub mod catalog;
mod config;
mod script;

pub use action::{parse_response, Action, ParsedResponse};
pub use catalog::FunctionInfo;
pub use config::{ConfigError, GameConfig, OracleConfig};
pub use script::{apply_calls, ScriptError};

use crate::core::{initial_state, render_call, Zab, ZabError};
use crate::registry::Registry;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

const SCRATCH_INSTRUCTIONS: &str = "You can include private notes in a scratchpad by wrapping them with <scratch></scratch> tags. This information will be preserved across turns.";

const GOAL: &str = "Your goal is to figure out what all the functions do over the course of your turns. \
At the end, you'll be prompted to make a guess as to what each function does. \
It is helpful to use your <scratch></scratch> functionality to include working theories so they can be tested later.\n\
Submit an action after describing your current working theory for what the functions do as well as what your goal is. \
Include notes you'd like to pass into the future with the <scratch></scratch> tags";

/// Errors that can occur while setting up or playing a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Turn budget of {turns} exhausted")]
    BudgetExhausted { turns: u32 },

    #[error("Function '{name}' cannot be offered in a game")]
    UnknownPoolFunction { name: String },

    #[error("Cannot pick {pick} functions from a pool of {available}")]
    PickTooLarge { pick: usize, available: usize },
}

/// Identifier used to correlate a session's log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(format!("session-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happened on one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The call succeeded; `state` describes the new Zab
    Applied { call: String, state: String },

    /// The call was made but failed; the Zab is unchanged
    Rejected { call: String, error: ZabError },

    /// The response contained no call to an offered function
    NoAction,
}

/// One game.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    registry: Registry,
    offered: Vec<&'static FunctionInfo>,
    offered_names: Vec<String>,
    zab: Zab,
    turn: u32,
    scratchpad: String,
}

impl Session {
    /// Start a game, drawing `config.pick` functions from `config.functions`.
    pub fn new(registry: Registry, config: &GameConfig) -> Result<Self, SessionError> {
        let mut pool: Vec<&'static FunctionInfo> = Vec::new();
        for name in &config.functions {
            let info = catalog::lookup(name)
                .filter(|_| registry.contains(name))
                .ok_or_else(|| SessionError::UnknownPoolFunction { name: name.clone() })?;
            if !pool.contains(&info) {
                pool.push(info);
            }
        }

        if config.pick > pool.len() {
            return Err(SessionError::PickTooLarge {
                pick: config.pick,
                available: pool.len(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        pool.shuffle(&mut rng);
        pool.truncate(config.pick);

        let id = SessionId::new();
        let offered_names: Vec<String> = pool.iter().map(|info| info.name.to_string()).collect();
        info!(session = %id, functions = ?offered_names, turns = config.turns, "Session started");

        Ok(Self {
            id,
            registry,
            offered: pool,
            offered_names,
            zab: initial_state(config.turns),
            turn: 0,
            scratchpad: String::new(),
        })
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn zab(&self) -> &Zab {
        &self.zab
    }

    /// Turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn remaining(&self) -> u32 {
        self.zab.turns().saturating_sub(self.turn)
    }

    pub fn is_over(&self) -> bool {
        self.remaining() == 0
    }

    pub fn offered(&self) -> &[String] {
        &self.offered_names
    }

    pub fn scratchpad(&self) -> &str {
        &self.scratchpad
    }

    /// Play one turn from a free-text response.
    ///
    /// A turn is used up whether or not the response held a valid call.
    pub fn play_turn(&mut self, response: &str) -> Result<TurnOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::BudgetExhausted {
                turns: self.zab.turns(),
            });
        }

        let parsed = parse_response(response, &self.offered_names);
        if let Some(notes) = parsed.scratchpad {
            debug!(session = %self.id, "Scratchpad updated");
            self.scratchpad = notes;
        }
        self.turn += 1;

        let outcome = match parsed.action {
            None => TurnOutcome::NoAction,
            Some(action) => {
                let call = render_call(&action.function, &action.args);
                match self.zab.call(&self.registry, &action.function, &action.args) {
                    Ok(next) => {
                        self.zab = next;
                        TurnOutcome::Applied {
                            call,
                            state: self.zab.describe(),
                        }
                    }
                    Err(error) => TurnOutcome::Rejected { call, error },
                }
            }
        };

        info!(session = %self.id, turn = self.turn, outcome = ?outcome, "Turn played");
        Ok(outcome)
    }

    /// What the player sees before a turn.
    ///
    /// Explains the scratchpad and the goal on every turn. History appears
    /// from the second turn on.
    pub fn briefing(&self) -> String {
        let hints: Vec<String> = self
            .offered
            .iter()
            .map(|info| format!("    - {}", info.hint_block()))
            .collect();

        let mut text = format!(
            "You are a Zab.\n\
             As a Zab, you have three qualities: your name is \"{}\", your bim is \"{}\", and your pim is \"{}\".\n\
             You have access to the following actions:\n{}\n\n\
             This is turn {}/{}.\n\n\
             {SCRATCH_INSTRUCTIONS}\n\n\
             Your scratchpad:\n{}\n\n\
             {GOAL}",
            self.zab.name(),
            self.zab.bim(),
            self.zab.pim(),
            hints.join("\n"),
            (self.turn + 1).min(self.zab.turns()),
            self.zab.turns(),
            self.scratchpad,
        );

        if self.turn > 0 {
            text.push_str(&format!(
                "\n\nYour history (the actions you've taken already):\n{}",
                self.history_text("No actions taken yet.")
            ));
        }

        text
    }

    /// The closing prompt asking the player to explain each offered function.
    ///
    /// Shown once the budget is spent and before [`reveal`](Self::reveal).
    pub fn final_prompt(&self) -> String {
        let guesses: Vec<String> = self
            .offered
            .iter()
            .map(|info| format!("- {}:", info.name))
            .collect();

        format!(
            "The game is now complete! Based on your {} turns of experimentation, please provide your final analysis.\n\n\
             Your final state: {}\n\n\
             Your complete history:\n{}\n\n\
             Your final scratchpad:\n{}\n\n\
             Now, please provide your best guess for what each of the {} functions does:\n{}\n\n\
             Be specific about how each function affects your name, bim, and pim values.",
            self.zab.turns(),
            self.zab.describe(),
            self.history_text("No actions were successfully executed."),
            self.scratchpad,
            self.offered.len(),
            guesses.join("\n"),
        )
    }

    fn history_text(&self, empty: &str) -> String {
        if self.zab.history().is_empty() {
            empty.to_string()
        } else {
            self.zab.history().lines().join("\n")
        }
    }

    /// The real effect of each offered function.
    pub fn reveal(&self) -> Vec<(&'static str, &'static str)> {
        self.offered
            .iter()
            .map(|info| (info.name, info.effect))
            .collect()
    }
}
