//! Users table formatter.

use anyhow::Result;
use cm_client::User;

use crate::formatters::MISSING;

/// Format users as a table.
pub fn format_users(users: &[User]) -> Result<String> {
    let mut output = String::new();

    if users.is_empty() {
        output.push_str("No users found.\n");
        return Ok(output);
    }

    output.push_str(&format!("{:<20} {:<40}\n", "NAME", "ROLES"));
    output.push_str(&format!("{:<20} {:<40}\n", "====", "====="));

    for user in users {
        let roles = if user.roles.is_empty() {
            MISSING.to_string()
        } else {
            user.roles.join(", ")
        };
        output.push_str(&format!("{:<20} {:<40}\n", user.name, roles));
    }

    Ok(output)
}
