//! Core interaction logic for the portfolio page.
//!
//! Main components:
//! - [`marker`] — decorative bubble markers and sets.
//! - [`pointer`] — container-relative pointer state.
//! - [`config`] — tuning parameters for the bubble fields.
//! - [`phases`] — per-frame drift and repulsion phases.
//! - [`field`] — a bubble field instance with its run lifecycle.
//! - [`form`] — contact form validation and the submission boundary.
//! - [`nav`] — scroll-driven navigation highlighting.
//! - [`accordion`] — single-open accordion state.
//! - [`skills`] — skill-level meter percentages.
//! - [`typewriter`] — timed hero tagline reveal.

pub mod accordion;
pub mod config;
pub mod field;
pub mod form;
pub mod marker;
pub mod nav;
pub mod phases;
pub mod pointer;
pub mod skills;
pub mod typewriter;
