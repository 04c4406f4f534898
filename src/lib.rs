pub mod assistant;
pub mod core;
pub mod corpus;
pub mod faq;
pub mod llm;
pub mod rag;
pub mod server;
pub mod state;
