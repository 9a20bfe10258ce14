pub mod field;
pub mod select;
