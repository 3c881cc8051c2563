// Output Normalizer: display HTML, platform-export Markdown and plain text,
// plus the preview/export endpoints built on them.
// Everything below `handlers` is pure string work and never fails on odd input.

pub mod export;
pub mod handlers;
pub mod html;
pub mod medium;
pub mod plain;
pub mod preview;
