//! Bridge Legends: pair a character (abstraction) with a weapon
//! (implementation) and beat each enemy before the countdown runs out.
//!
//! The library holds all game rules; the `bridge_legends` binary is a
//! crossterm front end over [`controller::GameController`].

pub mod catalog;
pub mod clock;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod error;
