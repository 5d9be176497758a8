pub mod attendance;
pub mod brief;
pub mod config;
pub mod contractors;
pub mod crew;
pub mod dashboard;
pub mod export;
pub mod init;
pub mod log;
pub mod payments;
pub mod session;
pub mod worker;

use crate::context::AppContext;
use crate::core::logic::Core;
use crate::ui::views;

/// Print the one-line digest of the current selection after a change.
pub(crate) fn print_summary(ctx: &AppContext) {
    let d = Core::build_dashboard(&ctx.store.snapshot(), ctx.today, &ctx.cfg.policy);
    println!("{}", views::summary_line(&d, &ctx.cfg.currency));
}
