use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::views::render_costs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Costs { shopping } = cmd {
        print!("{}", render_costs(*shopping, cfg.separator()));
    }
    Ok(())
}
