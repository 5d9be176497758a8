use super::print_summary;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::calculator::crew::resolve_crew;
use crate::core::input::{non_negative, parse_status};
use crate::errors::{AppError, AppResult};
use crate::models::{LabourStatus, NewWorker};
use crate::ui::messages::{success, warning};
use crate::ui::views;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Worker {
        add,
        name,
        trade,
        rate,
        assign_to,
        status,
        phone,
        set_status,
    } = cmd
    {
        if let Some([id, raw]) = set_status.as_deref() {
            let status = parse_status(raw)?;
            ctx.store.update_worker_status(id, status)?;
            success(format!("{id} is now {status}"));
        }

        if *add {
            let (Some(name), Some(trade), Some(rate), Some(contractor_id)) =
                (name, trade, rate, assign_to)
            else {
                return Err(AppError::Session(
                    "--add requires --name, --trade, --rate and --assign-to".into(),
                ));
            };
            if ctx.store.contractor(contractor_id).is_none() {
                warning(format!("Contractor '{contractor_id}' does not exist."));
            }

            let worker = NewWorker {
                name: name.clone(),
                trade: trade.clone(),
                daily_rate: non_negative(*rate, "daily rate")?,
                status: match status {
                    Some(s) => parse_status(s)?,
                    None => LabourStatus::Present,
                },
                phone: phone.clone(),
                contractor_id: contractor_id.clone(),
            };

            let id = ctx.store.add_worker(worker)?;
            success(format!("Worker added: {id}"));
        }

        let snap = ctx.store.snapshot();
        print!(
            "{}",
            views::render_crew(&resolve_crew(&snap), &ctx.cfg.currency)
        );

        if *add || set_status.is_some() {
            print_summary(ctx);
        }
    }

    Ok(())
}
