//! Console runner for the DevOps assistant.
//!
//! Reads lines from stdin as messages from a single "console" user and
//! routes them: deploy-dialogue events first, then the standalone commands
//! (`!pipeline <request>`, `!ask <question>`). Generated files land in the
//! configured output directory.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tokio::io::{AsyncBufReadExt, BufReader};

use devops_assistant::adapters::ai::{GeminiConfig, GeminiGenerator};
use devops_assistant::adapters::chat::ConsoleMessenger;
use devops_assistant::adapters::session::InMemorySessionStore;
use devops_assistant::application::{
    AdvisorService, DeployDialogue, EventOutcome, InboundEvent, PipelineService,
};
use devops_assistant::config::AppConfig;
use devops_assistant::domain::foundation::UserId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devops_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let api_key = config
        .ai
        .gemini_api_key
        .clone()
        .unwrap_or_default();
    let gemini_config = GeminiConfig::new(api_key)
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries);

    let generator: Arc<GeminiGenerator> = Arc::new(GeminiGenerator::new(gemini_config));
    let messenger = Arc::new(ConsoleMessenger::new(config.chat.output_dir.clone()));
    let store = Arc::new(InMemorySessionStore::new());

    let dialogue = Arc::new(DeployDialogue::new(
        store,
        generator.clone(),
        messenger.clone(),
    ));
    let pipeline = Arc::new(PipelineService::new(generator.clone(), messenger.clone()));
    let advisor = Arc::new(AdvisorService::new(
        generator,
        messenger,
        config.chat.max_message_len,
    ));

    let user_id = UserId::new("console")?;
    tracing::info!("assistant ready; type '!deploy' to start, Ctrl-D to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        // One task per event; per-user turn locks inside the dialogue keep
        // a single user's turns in order.
        if let Some(request) = text.strip_prefix("!pipeline") {
            let pipeline = pipeline.clone();
            let user_id = user_id.clone();
            let request = request.to_string();
            tokio::spawn(async move { pipeline.handle_request(&user_id, &request).await });
            continue;
        }
        if let Some(question) = text.strip_prefix("!ask") {
            let advisor = advisor.clone();
            let user_id = user_id.clone();
            let question = question.to_string();
            tokio::spawn(async move { advisor.handle_question(&user_id, &question).await });
            continue;
        }

        let event = InboundEvent::new(user_id.clone(), text);
        if dialogue.handle_event(event).await == EventOutcome::Ignored {
            println!("(no active session; '!deploy' starts one, '!ask <question>' for advice)");
        }
    }

    Ok(())
}
