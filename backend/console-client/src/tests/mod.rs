mod config;
mod envelope;
mod extract;
mod support;
