//! Core logic for the in-game diagnostic overlay device.
//!
//! The device is a stateful on-screen instrument the player raises during
//! play: a rotating motion scan, scrolling database/communications text, and
//! a handful of puzzle sub-modes. Everything platform-facing (blitting,
//! pictures, text shaping, script variables) is reached through the traits
//! in [`host`] and [`render`], so the crate stays free of engine types and
//! runs one synchronous update per game logic tick.

#![cfg_attr(not(test), no_std)]

pub mod device;
pub mod email;
pub mod floors;
pub mod host;
pub mod input;
pub mod panel;
pub mod render;
pub mod zoom;
