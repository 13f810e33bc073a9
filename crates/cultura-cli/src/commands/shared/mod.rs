pub mod criteria;
pub mod limit;
pub mod parse;
pub mod submit;
