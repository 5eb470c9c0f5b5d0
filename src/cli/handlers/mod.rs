pub mod alphabets;
pub mod index;
pub mod reverse;
