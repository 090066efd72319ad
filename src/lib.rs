// Kotoba: keyword extraction for short text snippets
//
// This is the library root. The binary reads stdin, runs the pipeline once,
// and prints a single JSON envelope to stdout; everything with actual
// decision-making lives here so it can be tested without process plumbing.

pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod segment;
