//! Client-side search over the loaded list.

use super::model::UserRecord;

/// Users whose name, email, employee code or medical card number contains
/// `term`, ignoring case. Order is preserved; an empty term matches everyone.
pub fn filter_users<'a>(users: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    if term.is_empty() {
        return users.iter().collect();
    }

    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|user| {
            [
                &user.name,
                &user.email,
                &user.employee_code,
                &user.medical_card_number,
            ]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
