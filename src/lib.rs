#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::collapsible_if)]

//! Paranormal activity scoring engine.
//!
//! The [`engine`] module turns a stream of scaled magnetometer readings into a
//! bounded activity level, injects rate-limited anomaly spikes, detects rising
//! trends and synthesizes "spirit" responses. The [`ui`] module renders the
//! terminal meter used by the `ghost_meter` binary.

pub mod engine;
pub mod ui;
