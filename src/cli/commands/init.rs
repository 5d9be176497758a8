use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command: write a default config file.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = &ctx.config_path;

        if path.exists() && !*force {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::init_at(path)?;
        success(format!("Config file: {}", path.display()));
    }

    Ok(())
}
