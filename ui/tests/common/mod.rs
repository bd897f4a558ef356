// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use egui_kittest::Harness;
use kittest::Queryable;
use portal_ui::state::State;
use portal_ui::widgets::{toasts, users_page};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// One frame of the page as the app draws it.
pub fn page(ui: &mut egui::Ui, state: &mut State) {
    state.ctx.sync();
    users_page(&mut state.ctx, ui);
    toasts(&mut state.ctx, ui.ctx());
}

pub struct TestCtx<'a> {
    pub mock_server: MockServer,
    pub harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Page backed by a mock server whose list endpoint returns `users`.
    pub async fn new(users: Value) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": users })))
            .mount(&mock_server)
            .await;

        let mut ctx = Self::with_server(mock_server).await;
        ctx.settle().await;
        ctx
    }

    /// Page backed by `mock_server` as-is; the first frame dispatches the fetch.
    pub async fn with_server(mock_server: MockServer) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let state = State::test(mock_server.uri());
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 900.0))
            .build_ui_state(page, state);

        Self {
            mock_server,
            harness,
        }
    }

    /// Wait for every dispatched command, apply its updates and redraw.
    pub async fn settle(&mut self) {
        self.harness.step();
        self.harness.state_mut().ctx.flush_and_wait().await;
        self.harness.step();
        self.harness.step();
    }

    /// Click the node labelled exactly `label` and let the click land.
    pub fn click(&mut self, label: &str) {
        self.harness.get_by_label(label).click();
        self.harness.step();
        self.harness.step();
        self.harness.step();
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.harness.query_by_label(label).is_some()
    }

    pub fn has_label_containing(&self, fragment: &str) -> bool {
        self.harness.query_by_label_contains(fragment).is_some()
    }
}

pub fn user_json(id: &str, name: &str, role: &str, balance: f64) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@x.com", name.to_lowercase()),
        "employeeCode": format!("E-{id}"),
        "medicalCardNumber": format!("M-{id}"),
        "address": "Main Road",
        "balance": balance,
        "role": role
    })
}
