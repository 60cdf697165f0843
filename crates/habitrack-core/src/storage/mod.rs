mod config;
pub mod habit_file;
pub mod session;

pub use config::{Config, DisplayConfig, StorageConfig};
pub use habit_file::{HabitFile, HabitRecord, HabitsDocument};
pub use session::SessionFile;

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `HABITRACK_HOME` wins when set. Otherwise `~/.config/habitrack[-dev]/`,
/// with `HABITRACK_ENV=dev` selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("HABITRACK_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitrack-dev")
            } else {
                base_dir.join("habitrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
