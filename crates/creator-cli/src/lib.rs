pub mod backend;
pub mod config;
pub mod generator;
pub mod intake;
pub mod output;
pub mod pipeline;
