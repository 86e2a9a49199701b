//! Canvas drawing helpers and a diagnostics overlay for browser-hosted scenes.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but every
//! drawing routine is written against the [`surface::Surface`] trait so the
//! whole overlay can be exercised natively with a [`surface::Recorder`]. The
//! host page owns the animation loop and DOM wiring; it forwards pointer and
//! button events as [`diagnostics::Command`]s and calls
//! [`diagnostics::Diagnostics::render_diagnostics`] once per frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `wasm_bindgen` entry point wrapping the browser context |
//! | [`diagnostics`] | Overlay compositor and command handling |
//! | [`render`] | Primitive and composite drawers |
//! | [`metrics`] | Text bounding-box measurement |
//! | [`surface`] | Drawing-surface trait, style scope guard, recording stub |
//! | [`shapes`] | Line and text specs |
//! | [`toggles`] | Per-overlay on/off flags and their configuration |
//! | [`timekeeper`] | Frame, generation and cycle counters |
//! | [`fps`] | Sliding-window frame-rate estimator |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric and style constants |

pub mod consts;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod fps;
pub mod metrics;
pub mod render;
pub mod shapes;
pub mod surface;
pub mod timekeeper;
pub mod toggles;

#[cfg(test)]
#[path = "log_capture_test.rs"]
mod log_capture;
