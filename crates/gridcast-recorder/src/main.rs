//! Gridcast recorder entry point.
//!
//! Wires configuration, the layout pipeline, and the control loop together
//! and runs headless until Ctrl-C.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()           -- TOML → profile / policy / directory
//!  └─ RecordingSession::join  -- local lifecycle bookkeeping
//!  └─ RecorderController::run -- events in, layouts out
//!       ├─ ChannelEventSource -- fed by the hosting engine's callbacks
//!       └─ LoggingCompositor  -- stands in for the mixing engine
//! ```

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gridcast_recorder::application::compute_layout::LayoutPipeline;
use gridcast_recorder::application::control_loop::{RecorderController, SessionEvent};
use gridcast_recorder::application::manage_session::RecordingSession;
use gridcast_recorder::infrastructure::compositor::LoggingCompositor;
use gridcast_recorder::infrastructure::events::ChannelEventSource;
use gridcast_recorder::infrastructure::storage::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    let app_config = config::load_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(app_config.recording.log_level.clone())),
        )
        .init();

    info!("gridcast recorder starting");

    let addressing = app_config.recording.addressing();
    let directory = Arc::new(app_config.static_directory());
    let pipeline = LayoutPipeline::new(
        app_config.mixer.profile(app_config.recording.keep_last_frame),
        app_config.mixer.policy(),
        addressing,
        app_config.mixer.highlight_target(addressing),
        directory,
    );

    let mut session = RecordingSession::new(app_config.recording.channel.clone(), addressing);
    session.join()?;

    // Engine callbacks would publish into clones of this sender; until an
    // engine is embedded, only the Ctrl-C task produces events.
    let (events, mut source) = ChannelEventSource::channel(64);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = events.send(SessionEvent::Shutdown).await;
        }
    });

    let mut controller =
        RecorderController::new(pipeline, Arc::new(LoggingCompositor::new()));

    info!(
        session = %session.session_id(),
        channel = %session.channel(),
        "gridcast recorder ready; press Ctrl-C to exit"
    );
    controller.run(&mut source).await;

    session.leave()?;
    info!("gridcast recorder stopped");
    Ok(())
}
