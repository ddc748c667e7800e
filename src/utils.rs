//! Terminal output helpers.

use crate::models::Account;
use colored::*;

/// Print an error message and exit.
pub fn error_exit(message: &str, code: i32) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(code);
}

/// Print a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a warning message.
pub fn warning(message: &str) {
    println!("{} {}", "Warning:".yellow(), message);
}

/// Render one account as display lines.
pub fn format_account(acc: &Account) -> Vec<String> {
    let login = if acc.login.is_empty() {
        "(no login)".dimmed().to_string()
    } else {
        acc.login.bold().to_string()
    };

    let mut lines = vec![format!("{} {} [{}]", acc.id.to_string().cyan(), login, acc.account_type)];

    if !acc.label.is_empty() {
        lines.push(format!("    labels:   {}", acc.label_raw));
    }
    if let Some(password) = acc.masked_password() {
        lines.push(format!("    password: {password}"));
    }
    if let Some(err) = &acc.errors.login {
        lines.push(format!("    {} login: {}", "!".red(), err));
    }
    if let Some(err) = &acc.errors.password {
        lines.push(format!("    {} password: {}", "!".red(), err));
    }

    lines
}
