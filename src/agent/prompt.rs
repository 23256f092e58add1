//! Prompt templates for the agent.

use crate::tools::ToolInfo;

use super::{AgentConfig, Task};

/// Build the system prompt from the agent persona and its tools.
pub fn build_system_prompt(agent: &AgentConfig, tools: &[ToolInfo]) -> String {
    let mut prompt = format!(
        "You are {role}. {backstory}\nYour personal goal is: {goal}",
        role = agent.role,
        backstory = agent.backstory,
        goal = agent.goal
    );

    if !tools.is_empty() {
        let tool_descriptions = tools
            .iter()
            .map(|t| format!("- **{}**: {}", t.name, t.description))
            .collect::<Vec<_>>()
            .join("\n");
        prompt.push_str("\n\nYou have access to the following tools:\n");
        prompt.push_str(&tool_descriptions);
        prompt.push_str("\n\nUse a tool only when you need information you do not already have.");
    }

    prompt
}

/// Build the user turn that states the task.
pub fn build_task_prompt(task: &Task) -> String {
    format!(
        r#"Current Task: {description}

This is the expected criteria for your final answer: {expected_output}
You MUST return the actual complete content as the final answer, not a summary.

Begin! This is VERY important to you, use the tools available and give your best complete answer, your job depends on it!"#,
        description = task.description,
        expected_output = task.expected_output
    )
}
