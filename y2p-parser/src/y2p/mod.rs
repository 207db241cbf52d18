//! Main module for y2p library functionality

pub mod ast;
pub mod building;
pub mod formats;
pub mod loader;
pub mod parsing;
pub mod pipeline;
pub mod testing;
