pub mod count;
pub mod list;
pub mod sample;
