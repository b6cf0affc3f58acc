//! Brasis Core
//!
//! This crate provides core types, traits, and error definitions
//! for the brasis line-break preserving wiki renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`LineCategory`], [`ListKind`] - Structural roles a wiki line can play
//! - [`Classification`], [`ScanContext`] - What a scanner knows about a line
//! - [`MarkupScanner`], [`Formatter`], [`LineProcessor`] - The seams between
//!   scanning, rendering and line-break policy
//! - [`BrasisError`] - Error types

pub mod enums;
pub mod error;
pub mod formatter;
pub mod scanner;

pub use enums::{LineCategory, ListKind};
pub use error::{BrasisError, Result};
pub use formatter::Formatter;
pub use scanner::{Classification, LineProcessor, MarkupScanner, ScanContext};
