//! # cahier-core
//!
//! Core types and view-layer rules for Cahier.
//!
//! This crate provides the types shared by the API client and the CLI:
//! - Entity structs for every backend record (professors, filières, modules,
//!   matières, groupes, assignments, logbooks)
//! - Role, session type and logbook status enums
//! - Draft payloads sent on create/update
//! - Wire envelopes (`{ data: ... }`, paginated lists, acknowledgements)
//! - Form validation, search filters and dashboard statistics used by the
//!   view layer before and after calling the API

mod de;

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod envelope;
pub mod errors;
pub mod filter;
pub mod stats;
pub mod validation;

pub use errors::CoreError;
