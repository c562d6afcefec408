//! Workbench Canvas - headless driver
//!
//! Runs the client core against a live workbench service:
//!
//! ```text
//! workbench-canvas show <assistant-id> [conversation-id]
//! workbench-canvas attach <assistant-id> <conversation-id>
//! ```

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workbench_canvas::api::Conversation;
use workbench_canvas::drawer::{CanvasDrawer, DrawerSide};
use workbench_canvas::{
    AssistantEditor, CanvasController, HttpWorkbenchClient, InspectorTabs, LoggingNavigator,
    Panel, WorkbenchConfig,
};

const USAGE: &str = "usage: workbench-canvas show <assistant-id> [conversation-id]\n       workbench-canvas attach <assistant-id> <conversation-id>";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workbench_canvas=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, assistant_id, conversation_id) = match args.as_slice() {
        [command, assistant_id] => (command.as_str(), assistant_id.as_str(), None),
        [command, assistant_id, conversation_id] => (
            command.as_str(),
            assistant_id.as_str(),
            Some(conversation_id.as_str()),
        ),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let config = WorkbenchConfig::from_env()?;
    tracing::info!(url = %config.base_url, user = %config.user.name, "Connecting to workbench");

    let api = Arc::new(HttpWorkbenchClient::new(&config)?);
    let mut editor = AssistantEditor::load(
        Arc::clone(&api),
        LoggingNavigator,
        config.user.clone(),
        assistant_id,
    )
    .await?;

    match (command, conversation_id) {
        ("show", conversation_id) => {
            let conversation_id = conversation_id
                .map(str::to_string)
                .or_else(|| editor.conversations().first().map(|c| c.id.clone()));
            let Some(conversation_id) = conversation_id else {
                tracing::info!(assistant = %editor.assistant().name, "Assistant has no conversations");
                return Ok(());
            };

            let mut controller = CanvasController::new();
            let descriptions = editor
                .open_inspectors(&mut controller, &conversation_id)
                .await?;
            let state = controller.state();

            let drawer = CanvasDrawer {
                hosts: Panel::Assistant,
                mode: config.drawer_mode(),
                side: DrawerSide::Right,
                width: config.drawer_width,
            };
            let tabs = InspectorTabs::new(&conversation_id, &editor.assistant().id, &descriptions);
            tracing::info!(
                assistant = %editor.assistant().name,
                conversation_id = %conversation_id,
                tabs = ?tabs.render(&state),
                drawer = ?drawer.layout_for(&state),
                "Inspectors"
            );
            controller.reset();
        }
        ("attach", Some(conversation_id)) => {
            let conversation = Conversation {
                id: conversation_id.to_string(),
                title: String::new(),
                created_datetime: None,
            };
            editor.on_conversation_create(conversation).await?;
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
