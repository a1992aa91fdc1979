pub mod handlers;
pub mod prompts;
pub mod session;
pub mod transcript;
pub mod validation;
pub mod verdict;
