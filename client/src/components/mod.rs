//! Reusable UI components.

pub mod form_field;
pub mod header;
pub mod notice_banner;
