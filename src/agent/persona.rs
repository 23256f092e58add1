//! Per-request agent and task definitions.

use crate::config::Config;

/// Model an agent is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmBinding {
    /// Provider-prefixed model id, e.g. `groq/llama-3.3-70b-versatile`
    pub model: String,

    pub temperature: f32,
}

impl LlmBinding {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

/// Agent persona and capabilities. Built fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub role: String,
    pub goal: String,
    pub backstory: String,

    /// Names of registry tools the agent may call
    pub tools: Vec<String>,

    pub llm: LlmBinding,

    /// Whether the agent may hand work to coworkers
    pub allow_delegation: bool,

    /// Log every step at info level instead of debug
    pub verbose: bool,
}

impl AgentConfig {
    /// Local guide scoped to a single Sigiriya location.
    pub fn site_guide(location: &str, llm: LlmBinding) -> Self {
        Self {
            role: format!("{} Expert", location),
            goal: format!(
                "Provide details ONLY about {} inside the Sigiriya complex.",
                location
            ),
            backstory: format!(
                "You are a local guide at {}. You do not know about any places outside of Sigiriya. \
                 Stick strictly to the history of this spot.",
                location
            ),
            tools: vec!["web_search".to_string()],
            llm,
            allow_delegation: false,
            verbose: true,
        }
    }
}

/// A unit of work handed to an agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub description: String,
    pub expected_output: String,
}

impl Task {
    pub fn explain(user_query: &str, location: &str) -> Self {
        Self {
            description: format!("Explain '{}' specifically for {}.", user_query, location),
            expected_output: "A historical explanation of the site.".to_string(),
        }
    }
}
