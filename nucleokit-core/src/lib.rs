#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod motif;
pub mod orf;
pub mod seq;
pub mod translation;
