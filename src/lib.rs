//! react-agent: a ReAct-style tool-calling agent over Google Gemini.
//!
//! Registers three toy tools, asks one question, and prints both the answer
//! and the prompt the agent built.
//!
//! # Quick Start
//!
//! ```no_run
//! use react_agent::prelude::*;
//!
//! # async fn example() -> react_agent::error::Result<()> {
//! let config = AgentConfig::from_env()?;
//! let tools = react_agent::tools::demo::demo_tools()?;
//! let provider = react_agent::provider::create_provider(&config);
//! let mut agent = ReActAgent::from_tools(tools, provider, true);
//! let response = agent.chat("What is 3 multiplied by 7?").await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
