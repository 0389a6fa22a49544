//! Domain logic for the tour and transfer admin dashboard.
//!
//! Pure and I/O-free: package draft types, rich-text measurement, slug
//! generation, the draft validator and the form state machine. The API
//! crate and any other front end share these rules.

pub mod error;
pub mod form;
pub mod markup;
pub mod package;
pub mod slug;
pub mod validation;
