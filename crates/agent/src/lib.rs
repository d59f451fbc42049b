//! Agent surface for the procurement pipeline.
//!
//! This crate exposes the deterministic core to an LLM-driven chat
//! session:
//! - **Tools** (`tools`) — the six boundary operations as registry
//!   entries with JSON in/out, failures returned as data
//! - **Guardrails** (`guardrails`) — what the LLM may and may not do
//!   on its own
//! - **Runtime** (`runtime`) — the system prompt and guardrail
//!   screening around tool execution
//!
//! # Safety principle
//!
//! The LLM is strictly a translator. It never decides eligibility,
//! budgets, or approval outcomes; those are deterministic decisions
//! made by `procura-core`, and an over-budget order is only ever
//! finalized after a human says so.

pub mod guardrails;
pub mod llm;
pub mod runtime;
pub mod tools;

pub use guardrails::{GuardrailDecision, GuardrailIntent, GuardrailPolicy};
pub use llm::LlmClient;
pub use runtime::AgentRuntime;
pub use tools::{register_procurement_tools, Tool, ToolRegistry};
