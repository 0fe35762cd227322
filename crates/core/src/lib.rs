//! # Carebill Core
//!
//! Billing and status rules for a house-call practice: patients, the
//! facilities where they are seen, their diagnoses, and billable clinical
//! events (visits, chronic-care-management time, hospice supervision).
//!
//! This crate is the pure rules layer. It classifies events as billable,
//! derives default procedure codes, computes follow-up due dates, keeps
//! diagnosis ordering and the single-hospice-designation invariant, and
//! guards event status transitions. All persistence happens behind the
//! [`facade::RecordStore`] trait, implemented by the surrounding
//! application; the core validates and derives, the facade writes.
//!
//! **No storage or transport concerns**: screens, wire protocols and the
//! storage engine live with the caller. Every operation here is a
//! synchronous, deterministic function over its inputs; current time enters
//! only through the injected [`clock::Clock`].

pub mod billing;
pub mod clock;
pub mod diagnoses;
pub mod error;
pub mod facade;
pub mod schedule;
pub mod service;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{RulesError, RulesResult};
pub use facade::RecordStore;
pub use schedule::next_follow_up;
pub use service::CareService;
pub use status::{is_unbilled, TransitionTable};

// Identifier derivation is part of the caller-facing surface.
pub use carebill_upi::{generate_upi, Upi};
