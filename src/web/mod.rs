//! HTML front end: Askama page and fragment handlers.

pub mod handlers;
