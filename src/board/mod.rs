//! Kanban board drag-and-drop engine.
//!
//! This module moves task cards between board columns in response to raw
//! pointer and touch input. It recognises drag intent per input modality,
//! tracks one in-flight drag session, hit-tests the pointer against live
//! column geometry, and commits a card-to-column move exactly once when the
//! drop column differs from the origin. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Read-only render helpers in [`presentation`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod services;
