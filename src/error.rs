//! Error types.  None of these reach the player: intents that fail
//! validation are dropped and only the reason is logged.

use thiserror::Error;

use crate::entities::Screen;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} id `{id}`")]
pub struct UnknownId {
    pub kind: &'static str,
    pub id: String,
}

/// Why an intent was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("intent not valid on the {0:?} screen")]
    WrongScreen(Screen),
    #[error("a turn is still resolving")]
    Resolving,
    #[error("no character selected")]
    MissingCharacter,
    #[error("no weapon selected")]
    MissingWeapon,
    #[error("no enemy on the field")]
    NoEnemy,
}
