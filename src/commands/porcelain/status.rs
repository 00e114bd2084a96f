use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{Status, StatusInfo};
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn status(&self) -> anyhow::Result<StatusInfo> {
        let _lock = self.lock(LockMode::Shared)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let status_info = Status::new(self).initialize(&index)?;
        self.print_status(&status_info)?;

        Ok(status_info)
    }

    fn print_status(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        for branch in &status_info.branches {
            if branch == &status_info.current_branch {
                writeln!(writer, "{}", format!("*{branch}").green())?;
            } else {
                writeln!(writer, "{branch}")?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for file in &status_info.staged_files {
            writeln!(writer, "{file}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for file in &status_info.removed_files {
            writeln!(writer, "{file}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (file, change) in &status_info.workspace_changeset {
            writeln!(writer, "{file} ({change})")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for file in &status_info.untracked_files {
            writeln!(writer, "{file}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
