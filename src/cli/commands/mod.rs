pub mod backup;
pub mod config;
pub mod costs;
pub mod cycle;
pub mod dashboard;
pub mod day;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod menu;
pub mod reduction;
pub mod tips;
pub mod toggle;
pub mod weight;

use std::io::{self, Write};

use crate::ui::messages::warning;

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
