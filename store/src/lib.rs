#![deny(clippy::pedantic)]
#![deny(clippy::cargo)]

//! Core of the conditional scalar store: a single heap cell that is
//! acquired only when the offered value exceeds a threshold, observed
//! only through an API that makes absence explicit, and released exactly
//! once when it goes out of scope.

pub mod cell;
pub mod parse;
pub mod store;
