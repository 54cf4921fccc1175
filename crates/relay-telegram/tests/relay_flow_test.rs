//! Integration tests for the status flow as seen from the Telegram side.

use std::sync::Arc;

use relay_models::ServiceStatus;
use relay_runtime::{CycleOutcome, NotificationId, RecordingNotifier, RelayContext, StatusSync};
use relay_store::MemoryStatusSource;
use relay_telegram::format::payload_html;
use relay_telegram::handlers::command_reply;
use relay_telegram::{BotState, Command, PrefixTrigger, Reply};
use teloxide::types::ChatId;

fn setup() -> (Arc<MemoryStatusSource>, Arc<RecordingNotifier>, StatusSync, BotState) {
    let source = Arc::new(MemoryStatusSource::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let context = RelayContext::shared();
    let sync = StatusSync::new(source.clone(), notifier.clone(), Arc::clone(&context));
    let state = BotState::new(context, ChatId(-100));
    (source, notifier, sync, state)
}

#[tokio::test]
async fn test_transition_updates_commands_and_notification() {
    let (source, notifier, sync, state) = setup();

    source
        .set(ServiceStatus::new(false, Some("Upgrading database".to_string())))
        .await;
    let outcome = sync.run_cycle().await.unwrap();
    assert_eq!(outcome, CycleOutcome::Announced(NotificationId(1)));

    let sent = notifier.sent().await;
    let html = payload_html(&sent[0].1);
    assert!(html.contains("❌ Offline"));
    assert!(html.contains("Upgrading database"));

    let status = state.context.status().await;
    let Reply::Html(report) = command_reply(&Command::Status, None, &status).unwrap() else {
        panic!("expected html reply");
    };
    assert!(report.contains("🔴 Offline"));
    assert!(report.contains("<b>Additional Info</b>\nUpgrading database"));

    let check = PrefixTrigger::Check.payload(&status);
    assert_eq!(check, sent[0].1);
}

#[tokio::test]
async fn test_previews_leave_announcement_state_alone() {
    let (source, notifier, sync, state) = setup();

    source.set(ServiceStatus::new(true, None)).await;
    sync.run_cycle().await.unwrap();
    let before = state.context.announcement().await;

    let status = state.context.status().await;
    let _ = PrefixTrigger::Offline.payload(&status);
    let _ = PrefixTrigger::Online.payload(&status);

    assert_eq!(state.context.announcement().await, before);
    assert_eq!(sync.run_cycle().await.unwrap(), CycleOutcome::Unchanged);
    assert_eq!(notifier.sent().await.len(), 1);
}

#[tokio::test]
async fn test_prefix_gating() {
    let (_source, _notifier, _sync, state) = setup();

    assert!(state.accepts_prefix(ChatId(-100), Some(false)));
    assert!(!state.accepts_prefix(ChatId(-100), Some(true)));
    assert!(!state.accepts_prefix(ChatId(5), Some(false)));
}
