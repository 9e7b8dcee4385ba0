//! Desktop front end for the Pencilmark editor.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod action;
pub mod app;
pub mod theme;
mod ui;

pub use self::app::PencilmarkApp;
