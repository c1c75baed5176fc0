//! Roll `rollout.yaml` files back to an earlier git revision.
//!
//! Layers, innermost first: [`domain`], [`application`], [`infrastructure`], [`cli`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
