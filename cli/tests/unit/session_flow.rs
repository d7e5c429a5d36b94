//! Session bootstrap/refresh behavior and full prompt-loop scenarios.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use vdi_cli::application::services::session::{FlowState, Session};
use vdi_cli::commands::session::{self, SessionEnd};
use vdi_cli::domain::WorkspaceState;
use vdi_cli::output::OutputContext;

use crate::mocks::{
    CountingSink, FailingCatalog, ScriptedPrompt, StubCatalog, StubDirectory, directory,
    menu_catalog, workspace,
};

fn populated_session(state: WorkspaceState) -> Session {
    Session {
        catalog: menu_catalog(),
        directory: Some(directory()),
        workspaces: vec![workspace("ws-1", state)],
        ..Session::new()
    }
}

// ── Bootstrap ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_populates_catalog_directory_and_workspaces() {
    let catalog = StubCatalog(menu_catalog());
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Stopped)],
    );
    let mut session = Session::new();
    session.bootstrap(&catalog, &dir).await.unwrap();

    assert_eq!(session.catalog.len(), 3);
    assert_eq!(session.directory, Some(directory()));
    assert_eq!(session.workspaces.len(), 1);
    assert_eq!(session.state, FlowState::AwaitingAction);
}

#[tokio::test]
async fn bootstrap_without_directory_skips_the_workspace_fetch() {
    let catalog = StubCatalog(menu_catalog());
    let dir = StubDirectory::new(None, vec![workspace("ws-1", WorkspaceState::Stopped)]);
    let mut session = Session::new();
    session.bootstrap(&catalog, &dir).await.unwrap();

    assert!(session.workspaces.is_empty());
    assert_eq!(dir.workspace_fetches.get(), 0);
}

#[tokio::test]
async fn bootstrap_propagates_a_catalog_failure_with_context() {
    let dir = StubDirectory::new(Some(directory()), Vec::new());
    let mut session = Session::new();
    let err = session.bootstrap(&FailingCatalog, &dir).await.unwrap_err();
    assert!(format!("{err:#}").contains("action catalog"));
}

#[tokio::test]
async fn bootstrap_keeps_partially_fetched_state_on_failure() {
    let catalog = StubCatalog(menu_catalog());
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Stopped)],
    );
    dir.fail_workspace_fetch.set(true);

    let mut session = Session::new();
    let err = session.bootstrap(&catalog, &dir).await.unwrap_err();
    assert!(format!("{err:#}").contains("workspace listing"));
    // No rollback: the catalog and directory fetched before the failure stay.
    assert_eq!(session.catalog.len(), 3);
    assert_eq!(session.directory, Some(directory()));
    assert!(session.workspaces.is_empty());
}

// ── Refresh ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_replaces_the_listing_and_resets_selections() {
    let dir = StubDirectory::new(
        Some(directory()),
        vec![
            workspace("ws-1", WorkspaceState::Stopped),
            workspace("ws-2", WorkspaceState::Available),
        ],
    );
    let mut session = populated_session(WorkspaceState::Stopped);
    session.selected_action = Some(1);
    session.selected_workspace = Some(0);

    session.refresh(&dir).await;

    assert_eq!(session.workspaces.len(), 2);
    assert_eq!(session.selected_action, None);
    assert_eq!(session.selected_workspace, None);
    assert_eq!(session.state, FlowState::AwaitingAction);
}

#[tokio::test]
async fn refresh_failure_keeps_the_previous_listing() {
    let dir = StubDirectory::new(Some(directory()), Vec::new());
    dir.fail_workspace_fetch.set(true);
    let mut session = populated_session(WorkspaceState::Stopped);

    session.refresh(&dir).await;

    // Stale-but-consistent: the listing fetched before the failure survives.
    assert_eq!(session.workspaces.len(), 1);
    assert_eq!(session.state, FlowState::AwaitingAction);
}

// ── Prompt loop scenarios ─────────────────────────────────────────────────────

#[tokio::test]
async fn start_on_stopped_workspace_completes_and_loops_back() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Stopped);
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Starting)],
    );
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&["1", "1", "3"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(sink.starts.get(), 1);
    assert_eq!(sink.total_calls(), 1);
    // The action was followed by exactly one refresh before the exit prompt.
    assert_eq!(dir.workspace_fetches.get(), 1);
    assert_eq!(session.workspaces[0].state, WorkspaceState::Starting);
    assert_eq!(prompt.remaining(), 0);
}

#[tokio::test]
async fn guard_rejection_issues_no_call_but_still_refreshes() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Available);
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Available)],
    );
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&["1", "1", "3"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(sink.total_calls(), 0);
    assert_eq!(dir.workspace_fetches.get(), 1);
}

#[tokio::test]
async fn exit_action_ends_the_session_without_further_prompts() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Stopped);
    let dir = StubDirectory::new(Some(directory()), Vec::new());
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&["3"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(end.exit_code(), 0);
    assert_eq!(sink.total_calls(), 0);
    assert_eq!(dir.workspace_fetches.get(), 0);
    assert_eq!(session.state, FlowState::Exited);
}

#[tokio::test]
async fn missing_directory_refuses_entry_before_any_prompt() {
    let ctx = OutputContext::new();
    let mut session = Session {
        catalog: menu_catalog(),
        directory: None,
        ..Session::new()
    };
    let dir = StubDirectory::new(None, Vec::new());
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&[]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::NoDirectory);
    assert_eq!(end.exit_code(), 1);
}

#[tokio::test]
async fn empty_listing_refuses_entry_with_a_distinct_end() {
    let ctx = OutputContext::new();
    let mut session = Session {
        catalog: menu_catalog(),
        directory: Some(directory()),
        ..Session::new()
    };
    let dir = StubDirectory::new(Some(directory()), Vec::new());
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&[]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::NoWorkspaces);
    assert_eq!(end.exit_code(), 2);
}

#[tokio::test]
async fn invalid_inputs_re_prompt_until_a_valid_selection_arrives() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Stopped);
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Starting)],
    );
    let sink = CountingSink::new();
    // Three bad action picks, a good one, a bad workspace pick, a good one,
    // then exit after the refresh.
    let prompt = ScriptedPrompt::new(&["0", "nope", "4", "1", "abc", "1", "3"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(sink.starts.get(), 1);
    // Each invalid input pauses once before re-prompting.
    let invalid_pauses = prompt
        .settles
        .borrow()
        .iter()
        .filter(|d| **d == std::time::Duration::from_secs(2))
        .count();
    assert_eq!(invalid_pauses, 4);
}

#[tokio::test]
async fn unrecognized_action_resolves_without_any_provider_call() {
    let ctx = OutputContext::new();
    let mut session = Session {
        catalog: vdi_cli::domain::ActionCatalog::from_entries([
            (1, "Rebuild Workspace".to_string()),
            (2, "Exit".to_string()),
        ]),
        directory: Some(directory()),
        workspaces: vec![workspace("ws-1", WorkspaceState::Stopped)],
        ..Session::new()
    };
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Stopped)],
    );
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&["1", "1", "2"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(sink.total_calls(), 0);
    assert_eq!(dir.workspace_fetches.get(), 1);
}

#[tokio::test]
async fn transport_failure_is_logged_and_the_session_continues() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Stopped);
    let dir = StubDirectory::new(
        Some(directory()),
        vec![workspace("ws-1", WorkspaceState::Stopped)],
    );
    let sink = CountingSink::new();
    sink.transport_error.set(true);
    let prompt = ScriptedPrompt::new(&["1", "1", "3"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::Exit);
    assert_eq!(sink.starts.get(), 1);
    assert_eq!(dir.workspace_fetches.get(), 1);
}

#[tokio::test]
async fn listing_emptied_by_refresh_ends_the_session_on_the_next_pass() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Stopped);
    // Refresh returns an empty listing, so the entry guard fires next loop.
    let dir = StubDirectory::new(Some(directory()), Vec::new());
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&["1", "1"]);

    let end = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap();

    assert_eq!(end, SessionEnd::NoWorkspaces);
    assert_eq!(sink.starts.get(), 1);
}

#[tokio::test]
async fn exhausted_input_surfaces_as_an_error() {
    let ctx = OutputContext::new();
    let mut session = populated_session(WorkspaceState::Stopped);
    let dir = StubDirectory::new(Some(directory()), Vec::new());
    let sink = CountingSink::new();
    let prompt = ScriptedPrompt::new(&[]);

    let err = session::run(&ctx, &mut session, &dir, &sink, &prompt)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("end of input"));
}
