use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::views;

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    print!(
        "{}",
        views::render_contractors(
            ctx.store.contractors(),
            ctx.store.selected_contractor_id(),
            &ctx.cfg.currency,
            ctx.today
        )
    );
    Ok(())
}
