use crate::context::AppContext;
use crate::core::calculator::crew::resolve_crew;
use crate::errors::AppResult;
use crate::ui::views;
use crate::utils::formatting::plural;

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let snap = ctx.store.snapshot();
    let crew = resolve_crew(&snap);

    if crew.is_empty() {
        println!("No workers in the current selection.");
        return Ok(());
    }

    print!("{}", views::render_crew(&crew, &ctx.cfg.currency));
    println!("{}", plural(crew.len(), "worker", "workers"));
    Ok(())
}
