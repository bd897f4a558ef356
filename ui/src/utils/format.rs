/// Balance as shown in the table, e.g. `₹1250.50`.
pub fn format_balance(balance: f64) -> String {
    format!("₹{balance:.2}")
}

/// Footer line under the table.
pub fn format_footer(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} users")
}
