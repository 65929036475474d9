pub mod agents;
pub mod autopilot;
pub mod context;
pub mod orchestrator;
pub mod stage_agent;
pub mod workflow;
