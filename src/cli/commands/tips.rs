use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::views::render_tips;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Tips) {
        print!("{}", render_tips(cfg.separator()));
    }
    Ok(())
}
