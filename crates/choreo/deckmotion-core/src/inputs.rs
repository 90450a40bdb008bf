//! Input contracts for the deck.
//!
//! Hosts build and pass these into `Deck::update()` each tick; navigation
//! commands are applied before the frame is stepped.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub nav_cmds: Vec<NavCommand>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    GoTo { index: usize },
}

impl Inputs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn nav(cmd: NavCommand) -> Self {
        Self {
            nav_cmds: vec![cmd],
        }
    }
}
