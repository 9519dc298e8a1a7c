use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::watch;

use greenstack_a2a::{
    A2aRequestHandler, AgentCardBuilder, AgentExecutor, AgentSkill, SkillServer,
};
use greenstack_core::{Config, ContentMode, SkillContext};
use greenstack_mcp::{McpRequestHandler, MessageExecutor};
use greenstack_skills::{AUDITOR_ID, EXECUTOR_ID, FULL_STACK_ID, PLANNER_ID, default_registry};

#[derive(Parser)]
#[command(name = "greenstack", version, about = "Sustainable code-generation agent fleet")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "greenstack.toml")]
    config: PathBuf,
}

/// Skill-bearing endpoints, bound to consecutive ports in this order.
const SERVED_SKILLS: [&str; 4] = [PLANNER_ID, EXECUTOR_ID, AUDITOR_ID, FULL_STACK_ID];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    let context = Arc::new(
        SkillContext::new(&config.agent.name, &config.agent.version)
            .with_baseline(config.baseline()),
    );
    let registry = Arc::new(default_registry());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            let _ = shutdown_tx.send(true);
        }
    });

    let mut servers = Vec::new();
    for (offset, skill_id) in SERVED_SKILLS.iter().enumerate() {
        let port = config.server.first_port
            + u16::try_from(offset).context("too many skill endpoints")?;
        let entry = registry
            .resolve(skill_id)
            .with_context(|| format!("skill {skill_id} missing from registry"))?;
        let descriptor = &entry.descriptor;

        let input_mode = if descriptor.expects_structured_input {
            ContentMode::StructuredJson
        } else {
            ContentMode::TextPlain
        };
        let card = AgentCardBuilder::new(
            &descriptor.name,
            format!("http://{}:{port}/", config.server.host),
            &config.agent.version,
        )
        .description(&descriptor.description)
        .streaming(false)
        .extended_protocol_support(true)
        .default_input_modes(vec![input_mode])
        .default_output_modes(vec![ContentMode::StructuredJson])
        .skill(AgentSkill::from(descriptor))
        .build();

        let a2a = A2aRequestHandler::new(AgentExecutor::new(
            Arc::clone(&registry),
            Arc::clone(&context),
        ));
        let mcp = McpRequestHandler::new(MessageExecutor::new(
            Arc::clone(&registry),
            Arc::clone(&context),
        ));

        let server = SkillServer::new(
            card,
            a2a,
            mcp,
            &config.server.host,
            port,
            shutdown_rx.clone(),
        )?;
        tracing::info!(
            "{} serving on http://{}:{port}",
            descriptor.name,
            config.server.host
        );
        servers.push(server.serve());
    }

    futures::future::try_join_all(servers)
        .await
        .context("skill server failed")?;

    Ok(())
}
