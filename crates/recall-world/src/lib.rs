//! Toroidal grid world: layout, perception, movement and reward respawn.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod field;
pub mod world;

pub use cell::Cell;
pub use config::WorldConfig;
pub use field::{Field, FieldError};
pub use world::GridWorld;
