// src/ui/mod.rs

pub mod image_picker;
pub mod nav;
pub mod panel_contact;
pub mod panel_edit;
pub mod panel_experience;
pub mod panel_hero;
pub mod panel_password;
pub mod panel_projects;
pub mod panel_skills;

pub mod message;
pub mod route_policy;
pub mod widgets;

use eframe::egui;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use nav::{NavModel, TopNav};
use route_policy::{leaving_editing, message_clear_policy, overlay_model, MessageClearPolicy};

use image_picker::ImagePick;
use message::PanelMsgState;
use panel_edit::EditControls;
use panel_password::PasswordPanel;
use portfolio_editor_lib::command;
use portfolio_editor_lib::command_state::{lock_image_requests, lock_store, with_active_view};
use portfolio_editor_lib::context::AppCtx;
use portfolio_editor_lib::image_load::ImageReadDone;
use portfolio_editor_lib::portfolio::PortfolioRecord;
use portfolio_editor_lib::types::{AppState, EditMode, SessionStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    /// Order of the top bar links.
    pub const NAV: [Section; 4] = [
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }
}

/// One frame's read-only snapshot handed to the section panels.
pub struct SectionView<'a> {
    pub state: &'a AppState,
    pub record: &'a PortfolioRecord,
    pub editing: bool,
}

/// Routes a field edit into the draft; failures land in `msg`.
pub(crate) fn apply_edit<F>(state: &AppState, msg: &mut PanelMsgState, mutator: F)
where
    F: FnOnce(PortfolioRecord) -> PortfolioRecord,
{
    if let Err(e) = command::update_draft(state, mutator) {
        msg.from_app_error(&e);
    }
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,

    prev_mode: EditMode,
    scroll_to: Option<Section>,
    image_pick: Option<ImagePick>,

    image_tx: Sender<ImageReadDone>,
    image_rx: Receiver<ImageReadDone>,

    nav: TopNav,
    password: PasswordPanel,
    edit: EditControls,
    msg: PanelMsgState,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        // Always start viewing
        if let Err(e) = portfolio_editor_lib::command_state::return_to_viewing(&state) {
            log::error!("could not reset session state: {e}");
        }

        let (image_tx, image_rx) = mpsc::channel();

        Self {
            state,
            ctx,
            prev_mode: EditMode::Viewing,
            scroll_to: None,
            image_pick: None,
            image_tx,
            image_rx,
            nav: TopNav::new(),
            password: PasswordPanel::new(),
            edit: EditControls::new(),
            msg: PanelMsgState::default(),
        }
    }

    /// Applies finished image reads; stale or late ones are dropped inside.
    fn drain_image_reads(&mut self) {
        while let Ok(done) = self.image_rx.try_recv() {
            if let Err(e) = command::apply_image_read(self.state.as_ref(), done) {
                self.msg.from_app_error(&e);
            }
        }
    }

    fn start_image_read(&mut self, pick: ImagePick) {
        let tx = self.image_tx.clone();
        if let Err(e) = command::begin_image_read(self.state.as_ref(), pick.target, pick.path, tx) {
            self.msg.from_app_error(&e);
        }
    }

    fn reads_pending(&self) -> bool {
        lock_image_requests(self.state.as_ref())
            .map(|g| g.pending() > 0)
            .unwrap_or(false)
    }

    fn on_mode_change(&mut self, prev: EditMode, next: EditMode) {
        match message_clear_policy(prev, next) {
            MessageClearPolicy::Keep => {}
            MessageClearPolicy::ClearEditMessages => {
                self.edit.clear_messages();
                self.msg.clear();
            }
            MessageClearPolicy::ClearPasswordPrompt => {
                self.password.clear_messages();
                self.password.reset_inputs();
            }
        }

        if leaving_editing(prev, next) {
            self.image_pick = None;
        }
    }

    fn load_error_text(&self) -> String {
        lock_store(self.state.as_ref())
            .ok()
            .and_then(|s| s.load_error().map(str::to_string))
            .unwrap_or_else(|| "No portfolio data loaded.".to_string())
    }

    fn show_unavailable(&self, ctx: &egui::Context, body: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            widgets::ui_notice(ui, "Failed to load portfolio data.", body);
            ui.add_space(8.0);
            ui.label(format!(
                "Check that {} exists and contains valid portfolio JSON.",
                self.ctx.portfolio_path.display()
            ));
        });
    }

    fn show_sections(&mut self, ctx: &egui::Context, record: &PortfolioRecord, editing: bool) {
        let view = SectionView {
            state: self.state.as_ref(),
            record,
            editing,
        };
        let scroll_to = self.scroll_to.take();
        let debug_ui = self.ctx.debug_ui;

        egui::CentralPanel::default().show(ctx, |ui| {
            self.msg.show(ui, debug_ui);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(960.0);

                    panel_hero::ui(
                        ui,
                        &view,
                        &mut self.msg,
                        &mut self.image_pick,
                        &mut self.scroll_to,
                    );
                    panel_projects::ui(ui, &view, &mut self.msg, &mut self.image_pick, scroll_to);
                    panel_skills::ui(ui, &view, &mut self.msg, scroll_to);
                    panel_experience::ui(ui, &view, &mut self.msg, scroll_to);
                    panel_contact::ui(ui, &view, &mut self.msg, scroll_to);
                    panel_contact::footer(ui, &view, &mut self.msg);
                });
        });
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_image_reads();

        let status: SessionStatus = match command::get_status(self.state.as_ref()) {
            Ok(s) => s,
            Err(e) => {
                log::error!("state unavailable: {e}");
                self.show_unavailable(ctx, &e.user_msg().short);
                return;
            }
        };

        // Mode transition hooks
        if status.mode != self.prev_mode {
            self.on_mode_change(self.prev_mode, status.mode);
            self.prev_mode = status.mode;
        }

        if !status.loaded {
            let body = self.load_error_text();
            self.show_unavailable(ctx, &body);
            return;
        }

        // cloned so edits can lock the store while the frame renders
        let record = match with_active_view(self.state.as_ref(), |r| r.cloned()) {
            Ok(Some(r)) => r,
            Ok(None) => return,
            Err(e) => {
                self.msg.from_app_error(&e);
                return;
            }
        };
        let editing = status.mode == EditMode::Editing;

        // Nav
        let nav_model = NavModel {
            name: record.name.clone(),
            editing,
        };
        self.nav.ui(
            ctx,
            self.state.as_ref(),
            &nav_model,
            &mut self.msg,
            &mut self.scroll_to,
        );

        self.show_sections(ctx, &record, editing);

        // Overlays; derived after the sections since image picks happen there
        let overlays = overlay_model(status, self.image_pick.is_some());

        if overlays.show_edit_controls {
            self.edit.ui(ctx, self.state.as_ref(), &self.ctx, status.mode);
        }

        if overlays.show_password_modal {
            self.password.ui(ctx, self.state.as_ref(), &self.ctx);
        }

        if let (true, Some(pick)) = (overlays.start_image_read, self.image_pick.take()) {
            self.start_image_read(pick);
        }

        if self.reads_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
