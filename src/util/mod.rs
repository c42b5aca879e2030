pub mod log;
pub mod markup;
