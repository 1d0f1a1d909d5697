//! Main module for notemark library functionality

pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod preview;
pub mod token;
