pub mod backend;
pub mod groq;
pub mod pipeline;
pub mod runner;
pub mod status;
