use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::resolve_output_path;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        what,
        force,
    } = cmd
    {
        let path = resolve_output_path(file);
        let snap = ctx.store.snapshot();
        let d = Core::build_dashboard(&snap, ctx.today, &ctx.cfg.policy);
        ExportLogic::export(&snap, &d, *what, *format, &path, *force)?;
    }
    Ok(())
}
