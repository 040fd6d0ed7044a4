pub mod form;
pub mod hint;
pub mod list;
