// ATS matcher: tokenize → score → enhance, plus the upload/extraction boundary.
// Core modules (tokenizer, scoring, sentences, clusters, enhancer) are pure and do no I/O.

pub mod clusters;
pub mod enhancer;
pub mod extract;
pub mod handlers;
pub mod scoring;
pub mod sentences;
pub mod tokenizer;
