use crate::context::AppContext;
use crate::core::brief;
use crate::core::logic::Core;
use crate::errors::AppResult;

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let snap = ctx.store.snapshot();
    let d = Core::build_dashboard(&snap, ctx.today, &ctx.cfg.policy);
    println!("{}", brief::compose(&d, &snap, &ctx.cfg));
    Ok(())
}
