pub mod parse;
pub mod search;
pub mod validate;
