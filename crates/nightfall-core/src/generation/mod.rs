//! Generation - populating a fresh world with its static objects.

mod island;

pub use island::*;
