use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        archive,
        force,
    } = cmd
    {
        BackupLogic::backup(cfg, file, *compress, *archive, *force)?;
    }

    Ok(())
}
