pub mod error_map;
pub mod form;
pub mod session;
