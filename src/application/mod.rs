// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator contracts.
//!
//! The gallery never reaches for a global service. Everything it talks to is
//! described by a trait in [`port`] and handed in at construction, so tests
//! can substitute stubs and the desktop host can plug in its own adapters
//! (see [`crate::infrastructure`]).
//!
//! # Dependency Rule
//!
//! - Ports use domain types only (no Iced handles, no file paths)
//! - Infrastructure implements the ports
//! - The gallery core and its UI adapter depend on the ports, never on
//!   infrastructure

pub mod port;
