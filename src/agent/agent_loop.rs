//! Core agent loop implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::llm::{ChatMessage, GroqClient, LlmClient, Role, ToolCall};
use crate::tools::ToolRegistry;

use super::prompt::{build_system_prompt, build_task_prompt};
use super::{AgentConfig, AgentRuntime, Task};

/// Runs a single agent on a single task against a remote LLM.
pub struct CrewRuntime {
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    max_iterations: usize,
}

impl CrewRuntime {
    pub fn new(llm: Arc<dyn LlmClient>, tools: ToolRegistry, max_iterations: usize) -> Self {
        Self {
            llm,
            tools,
            max_iterations,
        }
    }

    /// Groq-backed runtime with the default tool set, sharing one HTTP client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sigiriya-guide/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let llm = Arc::new(GroqClient::new(
            client.clone(),
            config.groq_api_key.clone(),
            config.groq_base_url.clone(),
        ));
        let tools = ToolRegistry::with_defaults(client, config.serper_api_key.clone());

        Ok(Self::new(llm, tools, config.max_iterations))
    }

    /// Tool names from the agent config that the registry can serve.
    fn resolve_tools(&self, agent: &AgentConfig) -> Vec<String> {
        agent
            .tools
            .iter()
            .filter(|name| {
                let known = self.tools.contains(name);
                if !known {
                    tracing::warn!(tool = %name, "Agent requested unknown tool; skipping");
                }
                known
            })
            .cloned()
            .collect()
    }

    /// Execute a single tool call.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> anyhow::Result<String> {
        let args: serde_json::Value = serde_json::from_str(&tool_call.function.arguments)
            .unwrap_or(serde_json::Value::Null);

        self.tools.execute(&tool_call.function.name, args).await
    }
}

#[async_trait]
impl AgentRuntime for CrewRuntime {
    async fn execute(&self, agent: &AgentConfig, task: &Task) -> anyhow::Result<String> {
        if agent.allow_delegation {
            tracing::debug!(role = %agent.role, "Delegation requested, but a single-agent crew has no coworkers");
        }

        let tool_names = self.resolve_tools(agent);
        let tool_infos: Vec<_> = self
            .tools
            .list_tools()
            .into_iter()
            .filter(|t| tool_names.contains(&t.name))
            .collect();
        let tool_schemas = self.tools.get_tool_schemas(&tool_names);
        let offered_tools = (!tool_schemas.is_empty()).then_some(tool_schemas.as_slice());

        let mut messages = vec![
            ChatMessage::system(build_system_prompt(agent, &tool_infos)),
            ChatMessage::user(build_task_prompt(task)),
        ];

        log_step(agent, &format!("Working on task: {}", task.description));

        for iteration in 0..self.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            let response = self
                .llm
                .chat_completion(
                    &agent.llm.model,
                    &messages,
                    offered_tools,
                    Some(agent.llm.temperature),
                )
                .await?;

            if let Some(tool_calls) = &response.tool_calls {
                if !tool_calls.is_empty() {
                    messages.push(ChatMessage {
                        role: Role::Assistant,
                        content: response.content.clone(),
                        tool_calls: Some(tool_calls.clone()),
                        tool_call_id: None,
                    });

                    for tool_call in tool_calls {
                        log_step(
                            agent,
                            &format!(
                                "Calling tool: {} with args: {}",
                                tool_call.function.name, tool_call.function.arguments
                            ),
                        );

                        let result_str = match self.execute_tool_call(tool_call).await {
                            Ok(output) => output,
                            Err(e) => format!("Error: {}", e),
                        };

                        log_step(agent, &truncate_for_log(&result_str, 1000));

                        messages.push(ChatMessage {
                            role: Role::Tool,
                            content: Some(result_str),
                            tool_calls: None,
                            tool_call_id: Some(tool_call.id.clone()),
                        });
                    }

                    continue;
                }
            }

            // No tool calls - this is the final answer, returned as the model wrote it
            if let Some(content) = response.content {
                if !content.trim().is_empty() {
                    log_step(agent, &truncate_for_log(&content, 2000));
                    return Ok(content);
                }
            }

            return Err(anyhow::anyhow!("LLM returned empty response"));
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without completion",
            self.max_iterations
        ))
    }
}

fn log_step(agent: &AgentConfig, message: &str) {
    if agent.verbose {
        tracing::info!(role = %agent.role, "{}", message);
    } else {
        tracing::debug!(role = %agent.role, "{}", message);
    }
}

/// Truncate a string for logging purposes.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut idx = max_len;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    format!("{}... [truncated]", &s[..idx])
}
