//! Demo driver: one fixed question, printed answer, then a prompt dump.

use std::io::Write;

use tracing::{info, warn};

use crate::agent::{AgentDelegate, ReActAgent};
use crate::config::AgentConfig;
use crate::error::Result;
use crate::provider::create_provider;
use crate::tools::demo::demo_tools;
use crate::types::{AgentResponse, GenerationSettings};

/// The question submitted once per run.
pub const QUESTION: &str = "Who was Alan Turing and what is 5 added to 12.5?";

/// Sampling temperature used for the demo run.
pub const TEMPERATURE: f64 = 0.1;

/// Build the demo tools and agent from `config`, then run the fixed question.
pub async fn launch<W: Write + ?Sized>(config: &AgentConfig, out: &mut W) -> Result<()> {
    let tools = demo_tools()?;
    let provider = create_provider(config);
    info!(
        provider = provider.provider_name(),
        model = provider.model_id(),
        tools = ?tools,
        "Starting demo agent"
    );

    let settings = GenerationSettings::builder().temperature(TEMPERATURE).build();
    let mut agent = ReActAgent::from_tools(tools, provider, true).with_settings(settings);

    run(&mut agent, QUESTION, out).await?;
    Ok(())
}

/// Same as [`launch`], reading configuration through `lookup`.
///
/// Nothing is printed and no tool is constructed when configuration fails.
pub async fn launch_with_lookup<F, W>(lookup: F, out: &mut W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: Write + ?Sized,
{
    let config = AgentConfig::from_lookup(lookup)?;
    launch(&config, out).await
}

/// Ask `question`, print the answer, then dump the agent's prompt.
///
/// Agent failures are printed rather than returned; only output errors
/// propagate.
pub async fn run<W: Write + ?Sized>(
    agent: &mut dyn AgentDelegate,
    question: &str,
    out: &mut W,
) -> std::io::Result<Option<AgentResponse>> {
    writeln!(out, "--- Starting Agent ---")?;
    out.flush()?;

    let response = match agent.chat(question).await {
        Ok(response) => {
            writeln!(out, "\n--- Final Answer ---")?;
            writeln!(out, "{response}")?;
            Some(response)
        }
        Err(e) => {
            warn!(error = %e, "agent chat failed");
            writeln!(out, "\n--- Agent Error ---")?;
            writeln!(out, "{e}")?;
            None
        }
    };

    writeln!(out, "\n--- Agent Finished ---")?;
    dump_prompt(&*agent, out)?;
    Ok(response)
}

/// Best-effort print of the system prompt and tool descriptions.
pub fn dump_prompt<W: Write + ?Sized>(agent: &dyn AgentDelegate, out: &mut W) -> std::io::Result<()> {
    match agent.inspect_prompt() {
        Ok(prompt) => {
            writeln!(out, "\n--- System Prompt ---")?;
            writeln!(out, "{}", prompt.system_header)?;
            writeln!(out, "---------------------\n")?;
            writeln!(out, "\n--- Generated Tool Description (Part of Prompt) ---")?;
            writeln!(out, "{}", prompt.tool_descriptions)?;
            writeln!(out, "----------------------------------------------------\n")?;
        }
        Err(e) => {
            writeln!(out, "\nCould not inspect the agent prompt: {e}")?;
        }
    }
    out.flush()
}
