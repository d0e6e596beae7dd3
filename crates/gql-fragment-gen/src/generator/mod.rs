pub(crate) mod documents;
pub mod emitter;
pub mod errors;
pub mod extractor;
pub(crate) mod fragment;
pub mod metrics;
pub mod naming;
pub mod orchestrator;

#[cfg(test)]
mod tests;
