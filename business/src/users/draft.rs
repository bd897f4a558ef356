//! Editable copy of one user, backing the add and edit forms.

use super::model::{NewUser, Role, UserId, UserRecord};
use super::password::{PasswordCheck, check_password};

/// Form field labels, used both in the form and in the required-field gate.
pub const LABEL_NAME: &str = "Name";
pub const LABEL_EMAIL: &str = "Email";
pub const LABEL_EMPLOYEE_CODE: &str = "Employee Code";
pub const LABEL_MEDICAL_CARD_NUMBER: &str = "Medical Card Number";
pub const LABEL_ADDRESS: &str = "Address";
pub const LABEL_BALANCE: &str = "Balance";
pub const LABEL_ROLE: &str = "Role";
pub const LABEL_PASSWORD: &str = "Password";

/// Draft of a user record.
///
/// Each setter replaces exactly one field. The password and its visibility
/// flag only matter for the add form; `to_record` never carries a password.
#[derive(Clone, PartialEq, Default)]
pub struct UserDraft {
    id: Option<UserId>,
    name: String,
    email: String,
    employee_code: String,
    medical_card_number: String,
    address: String,
    balance: f64,
    balance_text: String,
    role: Role,
    password: String,
    password_visible: bool,
    password_error: Option<&'static str>,
}

impl std::fmt::Debug for UserDraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDraft")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("employee_code", &self.employee_code)
            .field("medical_card_number", &self.medical_card_number)
            .field("address", &self.address)
            .field("balance", &self.balance)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .field("password_error", &self.password_error)
            .finish()
    }
}

impl UserDraft {
    /// Blank draft for the add form: role `user`, balance 0.
    pub fn empty() -> Self {
        Self {
            balance_text: "0".to_owned(),
            ..Self::default()
        }
    }

    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            employee_code: record.employee_code.clone(),
            medical_card_number: record.medical_card_number.clone(),
            address: record.address.clone(),
            balance: record.balance,
            balance_text: record.balance.to_string(),
            role: record.role,
            ..Self::default()
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn employee_code(&self) -> &str {
        &self.employee_code
    }

    pub fn medical_card_number(&self) -> &str {
        &self.medical_card_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Text the balance field was last given, before coercion.
    pub fn balance_text(&self) -> &str {
        &self.balance_text
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn password_error(&self) -> Option<&'static str> {
        self.password_error
    }

    pub fn password_check(&self) -> PasswordCheck {
        check_password(&self.password)
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_employee_code(&mut self, value: impl Into<String>) {
        self.employee_code = value.into();
    }

    pub fn set_medical_card_number(&mut self, value: impl Into<String>) {
        self.medical_card_number = value.into();
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address = value.into();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Replaces the password and re-runs the strength check.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = self.password_check().message();
    }

    /// Used by the submission gate, where an empty password is also rejected.
    pub fn set_password_error(&mut self, message: Option<&'static str>) {
        self.password_error = message;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Parse the balance field. Empty, non-numeric, non-finite and negative
    /// input all become `0.0`. Returns the stored value.
    pub fn set_balance_input(&mut self, text: impl Into<String>) -> f64 {
        let text = text.into();
        self.balance = coerce_balance(&text);
        self.balance_text = text;
        self.balance
    }

    /// First required field that is blank, or `Email` when the address is
    /// not shaped like `local@domain`.
    pub fn missing_required(&self) -> Option<&'static str> {
        let fields = [
            (LABEL_NAME, &self.name),
            (LABEL_EMAIL, &self.email),
            (LABEL_EMPLOYEE_CODE, &self.employee_code),
            (LABEL_MEDICAL_CARD_NUMBER, &self.medical_card_number),
            (LABEL_ADDRESS, &self.address),
        ];

        for (label, value) in fields {
            if value.trim().is_empty() {
                return Some(label);
            }
            if label == LABEL_EMAIL && !looks_like_email(value) {
                return Some(label);
            }
        }
        None
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.clone(),
            email: self.email.clone(),
            employee_code: self.employee_code.clone(),
            medical_card_number: self.medical_card_number.clone(),
            address: self.address.clone(),
            balance: self.balance,
            role: self.role,
            password: self.password.clone(),
        }
    }

    /// The edited record, or `None` for a draft that never had an id.
    pub fn to_record(&self) -> Option<UserRecord> {
        Some(UserRecord {
            id: self.id?,
            name: self.name.clone(),
            email: self.email.clone(),
            employee_code: self.employee_code.clone(),
            medical_card_number: self.medical_card_number.clone(),
            address: self.address.clone(),
            balance: self.balance,
            role: self.role,
        })
    }
}

fn coerce_balance(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}
