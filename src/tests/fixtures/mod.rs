pub mod note;
pub mod records;
