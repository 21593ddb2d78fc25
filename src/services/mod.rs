pub mod planner;
pub mod prompts;
pub mod responder;
