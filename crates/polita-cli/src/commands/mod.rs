pub mod extract;
pub mod rules;
pub mod text;
pub mod validate;
