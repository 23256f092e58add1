//! # Sigiriya Guide
//!
//! A visitor guide for the Sigiriya rock fortress, answered by an LLM agent
//! that only talks about a fixed set of sub-locations.
//!
//! This library provides:
//! - An HTTP API (`POST /chat`) for visitor questions
//! - A location allow-list that gates every request
//! - A single-agent, single-task runtime backed by Groq with a Serper web search tool
//!
//! ## Request flow
//!
//! 1. Check the requested location against the allow-list; reject otherwise
//! 2. Build a location-scoped agent persona and task
//! 3. Run the task through an [`agent::AgentRuntime`]
//! 4. Return `{ location, response }`
//!
//! ## Example
//!
//! ```rust,ignore
//! use sigiriya_guide::{api, config::{self, Config}};
//!
//! config::apply_env_defaults();
//! let config = Config::from_env()?;
//! api::serve(config).await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod sites;
pub mod tools;

pub use config::Config;
