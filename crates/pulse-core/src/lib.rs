//! # pulse-core
//!
//! Core types shared across all Pulse crates:
//! - Entity structs for the dashboard views (metrics, procedures, categories,
//!   providers, market trends, news articles)
//! - The [`Vertical`](enums::Vertical) enum that scopes every read
//! - Per-vertical colour palettes
//! - Tolerant field decoders for loosely typed view rows
//! - View formatting and normalization helpers
//! - Response shapes emitted by the `pulse` CLI
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod lenient;
pub mod responses;
pub mod theme;
