//! Kestrel render crate.
//!
//! This crate owns the drawing-request pipeline: it turns a frame's worth of
//! abstract draw requests into concrete calls against a [`render::Backend`].

pub mod coords;
pub mod paint;
pub mod scene;
pub mod render;

pub mod logging;
pub mod time;
