use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::views;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Dashboard { details } = cmd {
        let d = Core::build_dashboard(&ctx.store.snapshot(), ctx.today, &ctx.cfg.policy);
        println!("{}", views::render_dashboard(&d, &ctx.cfg, *details));
    }
    Ok(())
}
