//! Terminal front end: the interactive session and the one-shot quote.

pub mod prompt;
pub mod quote;
pub mod session;
