//! Page-turning core for a book-styled presentation.
//!
//! Raw input flows through the [`gesture::GestureArbiter`] into the
//! [`app::BookApp`] state machine, which owns the current page, the flip
//! timers and the reveal cascade. Renderers pull a [`render::BookView`]
//! snapshot through [`app::BookApp::with_view`].

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod chrome;
pub mod effects;
pub mod gesture;
pub mod input;
pub mod pages;
pub mod render;
pub mod reveal;
pub mod settings;
