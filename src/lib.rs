#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod benchmark;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
pub mod strategy;

pub use benchmark::*;
pub use bitboard::{BitBoard, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use strategy::{
    AdaptiveStrategy, Mode, RandomStrategy, StrategyKind, TargetingState, TargetingStrategy,
};
