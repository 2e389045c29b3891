pub mod operator;
pub mod operators;
pub mod runtime;
