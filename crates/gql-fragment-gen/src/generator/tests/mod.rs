mod fragment;
mod orchestrator;
