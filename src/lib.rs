//! Questboard: gamified task tracking core.
//!
//! This crate provides the board interaction engine behind the Kanban view:
//! recognising drag gestures from mouse and touch input, tracking the card
//! in flight, hit-testing the pointer against live column geometry, and
//! committing column changes to the board store exactly once per drop.
//!
//! # Architecture
//!
//! Questboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and gesture types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the store, geometry, haptics,
//!   input surface and observers
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Cards, columns and the drag-and-drop engine

pub mod board;
