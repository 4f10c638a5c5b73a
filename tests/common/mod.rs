// tests/common/mod.rs

#![allow(dead_code)]

use portfolio_editor_lib::{command, context::AppCtx, types::AppState};
use serde_json::{json, Value};

pub const PASSWORD: &str = "x";
pub const DEMO_JSON: &str = include_str!("../../demo/portfolio.json");

pub struct TestEnv {
    // Keep tempdirs alive for the duration of the test.
    _td_input: tempfile::TempDir,
    _td_export: tempfile::TempDir,

    pub state: AppState,
    ctx: AppCtx,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }
}

/// Minimal valid document with the given name and optional password.
pub fn doc(name: &str, password: Option<&str>) -> Value {
    let mut v = json!({
        "name": name,
        "title": "Engineer",
        "bio": "Bio",
        "avatarUrl": "https://example.test/avatar.png",
        "contact": {
            "email": "a@example.test",
            "socials": [{ "name": "GitHub", "url": "https://github.com", "icon": "GitHub" }]
        },
        "projects": [
            {
                "title": "P0",
                "description": "first",
                "tags": ["Rust", "egui"],
                "imageUrl": "p0.png",
                "liveUrl": "#"
            },
            {
                "title": "P1",
                "description": "second",
                "tags": [],
                "imageUrl": "p1.png",
                "sourceUrl": "#"
            }
        ],
        "skills": [
            { "name": "Rust", "category": "Languages" },
            { "name": "Docker", "category": "Tools & DevOps" }
        ],
        "experience": [
            {
                "company": "Acme",
                "title": "Dev",
                "duration": "2020 - Present",
                "description": ["built things"]
            }
        ]
    });

    if let Some(p) = password {
        v["editPassword"] = json!(p);
    }
    v
}

/// Writes `document` as the input file, builds state + ctx, loads it.
pub fn setup_loaded(document: &Value) -> TestEnv {
    let td_input = tempfile::tempdir().expect("tempdir input");
    let td_export = tempfile::tempdir().expect("tempdir export");

    let input = td_input.path().join("portfolio.json");
    std::fs::write(&input, serde_json::to_vec_pretty(document).expect("fixture json"))
        .expect("write input");

    let state = AppState::new_for_tests();
    let ctx = AppCtx::new(input, td_export.path().to_path_buf());

    command::load_portfolio(&state, &ctx).expect("load_portfolio");

    TestEnv {
        _td_input: td_input,
        _td_export: td_export,
        state,
        ctx,
    }
}

/// Loaded with a password and already unlocked into `Editing`.
pub fn setup_editing(name: &str) -> TestEnv {
    let env = setup_loaded(&doc(name, Some(PASSWORD)));
    command::request_edit(&env.state).expect("request_edit");
    command::submit_password(PASSWORD, &env.state).expect("submit_password");
    env
}

pub fn committed_name(state: &AppState) -> String {
    state
        .store
        .lock()
        .expect("store lock")
        .committed()
        .expect("committed")
        .name
        .clone()
}

pub fn active_name(state: &AppState) -> String {
    portfolio_editor_lib::command_state::with_active_view(state, |r| {
        r.expect("active view").name.clone()
    })
    .expect("with_active_view")
}
