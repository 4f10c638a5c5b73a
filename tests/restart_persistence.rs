// tests/restart_persistence.rs

mod common;

use portfolio_editor_lib::{command, context::AppCtx, fields, types::AppState};

use crate::common::{active_name, setup_editing};

#[test]
fn exported_artifact_reloads_to_the_same_display_state() {
    let env = setup_editing("A");
    command::update_draft(&env.state, fields::set_name("Renamed".into())).unwrap();
    command::update_draft(&env.state, fields::set_project_tags_from_text(1, "x, y")).unwrap();
    command::update_draft(&env.state, fields::set_social_url(0, "https://gh.test".into())).unwrap();
    let artifact = command::save_changes(&env.state, env.ctx()).unwrap();

    // fresh process reading the exported file as its input
    let state = AppState::new_for_tests();
    let ctx = AppCtx::new(artifact.path.clone(), env.ctx().export_dir.clone());
    command::load_portfolio(&state, &ctx).expect("reload export");

    let original = env.state.store.lock().unwrap().committed().cloned();
    let reloaded = state.store.lock().unwrap().committed().cloned();
    assert_eq!(original, reloaded);
    assert_eq!(active_name(&state), "Renamed");
}

#[test]
fn malformed_input_leaves_nothing_to_render() {
    let td = tempfile::tempdir().expect("tempdir");
    let input = td.path().join("portfolio.json");
    std::fs::write(&input, br#"{ "name": "A" }"#).unwrap();

    let state = AppState::new_for_tests();
    let ctx = AppCtx::new(input, td.path().to_path_buf());

    assert!(command::load_portfolio(&state, &ctx).is_err());

    let store = state.store.lock().unwrap();
    assert!(store.committed().is_none());
    assert!(store.draft().is_none());
    assert!(store.load_error().is_some());
}
