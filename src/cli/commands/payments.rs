use super::print_summary;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::calculator::crew::build_scope;
use crate::core::input::{non_negative, parse_category};
use crate::errors::{AppError, AppResult};
use crate::models::NewPayment;
use crate::ui::messages::{success, warning};
use crate::ui::views;
use crate::utils::date;
use crate::utils::formatting::currency;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Payments {
        add,
        worker,
        amount,
        category,
        date: day,
        note,
    } = cmd
    {
        if *add {
            let (Some(worker_id), Some(amount), Some(category)) = (worker, amount, category)
            else {
                return Err(AppError::Session(
                    "--add requires --worker, --amount and --category".into(),
                ));
            };
            if ctx.store.worker(worker_id).is_none() {
                warning(format!("Worker '{worker_id}' is not on the roster."));
            }

            let payment = NewPayment {
                worker_id: worker_id.clone(),
                amount: non_negative(*amount, "amount")?,
                date: date::parse_date_or(day.as_deref(), ctx.today)
                    .map_err(AppError::InvalidDate)?,
                category: parse_category(category)?,
                note: note.clone(),
            };

            let id = ctx.store.add_payment(payment)?;
            success(format!("Payment recorded: {id}"));
        }

        let snap = ctx.store.snapshot();
        let scope = build_scope(&snap);
        if scope.payments.is_empty() {
            println!("No payments for the current selection.");
        } else {
            print!(
                "{}",
                views::render_payments(&scope.payments, &snap, &ctx.cfg.currency)
            );
            let total: f64 = scope.payments.iter().map(|p| p.amount).sum();
            println!("Total: {}", currency(&ctx.cfg.currency, total));
        }

        if *add {
            print_summary(ctx);
        }
    }

    Ok(())
}
