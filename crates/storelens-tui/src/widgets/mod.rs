//! Small reusable render helpers shared by the browse screen.

pub mod rating_meter;
pub mod sub_tabs;
pub mod text_fmt;
