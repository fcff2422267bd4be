pub mod input;
pub mod roster;
