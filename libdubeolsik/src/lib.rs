//! # libdubeolsik
//!
//! Dubeolsik (two-set) Korean keyboard input engine built on libhangul-core.

pub mod config;
pub mod engine;
pub mod keymap;

// Re-export IME components from core
pub use libhangul_core::{
    compose, compose_all, compose_with_action, Action, ImeContext, ImeEngine, InputMode, KeyEvent,
    KeyResult,
};

pub use config::DubeolsikConfig;
pub use engine::Engine;
pub use keymap::{hangul_to_keys, jamo_for_key, key_for_jamo, keys_to_hangul};
