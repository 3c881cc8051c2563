// Prompt Builder and the single generation round trip.
// All model calls go through `writer::BlogWriter`; nothing here talks HTTP directly.

pub mod builder;
pub mod catalog;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod writer;
