//! Add/edit user window.

use egui::{Align2, Button, ComboBox, Grid, TextEdit, Ui, Window};
use log::debug;
use portal_business::users::draft::{
    LABEL_ADDRESS, LABEL_BALANCE, LABEL_EMAIL, LABEL_EMPLOYEE_CODE, LABEL_MEDICAL_CARD_NUMBER,
    LABEL_NAME, LABEL_PASSWORD, LABEL_ROLE,
};
use portal_business::{
    PasswordCheck, Role, Submission, UserDraft, UserListState, UserModal, controller,
};
use portal_states::StateCtx;

use crate::utils::colors::COLOR_RED;

pub const ADD_TITLE: &str = "Add New User";
pub const EDIT_TITLE: &str = "Edit User";
pub const CREATE: &str = "Create User";
pub const CREATING: &str = "Creating...";
pub const SAVE: &str = "Save Changes";
pub const SAVING: &str = "Saving...";
pub const CANCEL: &str = "Cancel";
pub const SHOW: &str = "Show";
pub const HIDE: &str = "Hide";

/// Labels that differ between the add and edit forms.
struct FormText {
    title: &'static str,
    submit: &'static str,
    submitting: &'static str,
}

const ADD_TEXT: FormText = FormText {
    title: ADD_TITLE,
    submit: CREATE,
    submitting: CREATING,
};

const EDIT_TEXT: FormText = FormText {
    title: EDIT_TITLE,
    submit: SAVE,
    submitting: SAVING,
};

/// Shows the form for whatever `UserModal` is open.
pub fn user_form(ctx: &mut StateCtx, egui_ctx: &egui::Context) {
    let state = ctx.state_mut::<UserListState>();
    let (text, is_add) = match state.modal() {
        UserModal::Closed => return,
        UserModal::Add(_) => (ADD_TEXT, true),
        UserModal::Edit(_) => (EDIT_TEXT, false),
    };
    let busy = state.is_submitting();
    let Some(draft) = state.draft_mut() else {
        return;
    };

    let mut open = true;
    let mut submit = false;
    let mut cancel = false;

    let mut window = Window::new(text.title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0]);
    // No close button while a request is in flight.
    if !busy {
        window = window.open(&mut open);
    }

    window.show(egui_ctx, |ui| {
        ui.add_enabled_ui(!busy, |ui| {
            fields(ui, draft, is_add);
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let blocked_by_password = is_add && draft.password_check() == PasswordCheck::TooShort;
            let can_submit = !busy && draft.missing_required().is_none() && !blocked_by_password;
            let label = if busy { text.submitting } else { text.submit };

            if ui.add_enabled(can_submit, Button::new(label)).clicked() {
                submit = true;
            }
            if ui.add_enabled(!busy, Button::new(CANCEL)).clicked() {
                cancel = true;
            }
            if busy {
                ui.spinner();
            }
        });
    });

    if submit {
        let outcome = if is_add {
            controller::create_user(ctx)
        } else {
            controller::update_user(ctx)
        };
        if let Submission::Rejected(reason) = outcome {
            debug!("Form submission rejected: {reason}");
        }
    } else if cancel || !open {
        controller::close_modal(ctx);
    }
}

fn fields(ui: &mut Ui, draft: &mut UserDraft, is_add: bool) {
    Grid::new("user_form_fields")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            if let Some(value) = text_row(ui, LABEL_NAME, draft.name()) {
                draft.set_name(value);
            }
            if let Some(value) = text_row(ui, LABEL_EMAIL, draft.email()) {
                draft.set_email(value);
            }
            if is_add {
                password_row(ui, draft);
            }
            if let Some(value) = text_row(ui, LABEL_EMPLOYEE_CODE, draft.employee_code()) {
                draft.set_employee_code(value);
            }
            if let Some(value) =
                text_row(ui, LABEL_MEDICAL_CARD_NUMBER, draft.medical_card_number())
            {
                draft.set_medical_card_number(value);
            }
            if let Some(value) = text_row(ui, LABEL_ADDRESS, draft.address()) {
                draft.set_address(value);
            }
            if let Some(value) = text_row(ui, LABEL_BALANCE, draft.balance_text()) {
                draft.set_balance_input(value);
            }

            ui.label(LABEL_ROLE);
            let mut role = draft.role();
            ComboBox::from_id_salt("user_form_role")
                .selected_text(role.label())
                .show_ui(ui, |ui| {
                    for option in Role::ALL {
                        ui.selectable_value(&mut role, option, option.label());
                    }
                });
            if role != draft.role() {
                draft.set_role(role);
            }
            ui.end_row();
        });
}

/// One labelled single-line input. Returns the new text when it changed.
fn text_row(ui: &mut Ui, label: &str, value: &str) -> Option<String> {
    ui.label(label);
    let mut buffer = value.to_owned();
    let changed = ui
        .add(TextEdit::singleline(&mut buffer).desired_width(240.0))
        .changed();
    ui.end_row();
    changed.then_some(buffer)
}

fn password_row(ui: &mut Ui, draft: &mut UserDraft) {
    ui.label(LABEL_PASSWORD);
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            let mut buffer = draft.password().to_owned();
            let changed = ui
                .add(
                    TextEdit::singleline(&mut buffer)
                        .password(!draft.password_visible())
                        .desired_width(180.0),
                )
                .changed();
            if changed {
                draft.set_password(buffer);
            }

            let toggle = if draft.password_visible() { HIDE } else { SHOW };
            if ui.small_button(toggle).clicked() {
                draft.toggle_password_visibility();
            }
        });
        if let Some(message) = draft.password_error() {
            ui.colored_label(COLOR_RED, message);
        }
    });
    ui.end_row();
}
