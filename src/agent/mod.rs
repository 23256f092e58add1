//! Agent module - persona construction and task execution.
//!
//! A request is answered by a single agent running a single task:
//! 1. Build the agent persona and task from the validated request
//! 2. Hand both to an [`AgentRuntime`]
//! 3. The production runtime calls the LLM with the agent's tools,
//!    executes any tool calls, and loops until a final answer

mod agent_loop;
mod persona;
mod prompt;

use async_trait::async_trait;

pub use agent_loop::CrewRuntime;
pub use persona::{AgentConfig, LlmBinding, Task};
pub use prompt::{build_system_prompt, build_task_prompt};

/// Executes one task with one agent and returns the final answer text.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    async fn execute(&self, agent: &AgentConfig, task: &Task) -> anyhow::Result<String>;
}
