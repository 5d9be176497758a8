use super::print_summary;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::calculator::crew::build_scope;
use crate::core::input::{non_negative, parse_status};
use crate::errors::{AppError, AppResult};
use crate::models::{LabourStatus, NewAttendance};
use crate::ui::messages::{success, warning};
use crate::ui::views;
use crate::utils::date;

const DEFAULT_HOURS: f64 = 8.0;

/// List, log or correct attendance records.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Attendance {
        add,
        worker,
        hours,
        presence,
        site,
        date: day,
        remarks,
        set_presence,
    } = cmd
    {
        //
        // 1. Correct an existing record
        //
        if let Some([id, raw]) = set_presence.as_deref() {
            let presence = parse_status(raw)?;
            ctx.store.update_attendance_presence(id, presence)?;
            success(format!("Attendance {id} marked {presence}"));
        }

        //
        // 2. Log a new record
        //
        if *add {
            let worker_id = worker
                .clone()
                .ok_or_else(|| AppError::Session("--add requires --worker".into()))?;
            if ctx.store.worker(&worker_id).is_none() {
                warning(format!("Worker '{worker_id}' is not on the roster."));
            }

            let record = NewAttendance {
                worker_id,
                date: date::parse_date_or(day.as_deref(), ctx.today)
                    .map_err(AppError::InvalidDate)?,
                hours_worked: non_negative(hours.unwrap_or(DEFAULT_HOURS), "hours")?,
                presence: match presence {
                    Some(p) => parse_status(p)?,
                    None => LabourStatus::Present,
                },
                remarks: remarks.clone(),
                site: site.clone().unwrap_or_else(|| ctx.cfg.site.clone()),
            };

            let id = ctx.store.add_attendance(record)?;
            success(format!("Attendance logged: {id}"));
        }

        //
        // 3. Show the scoped log
        //
        let snap = ctx.store.snapshot();
        let scope = build_scope(&snap);
        if scope.attendance.is_empty() {
            println!("No attendance records for the current selection.");
        } else {
            print!("{}", views::render_attendance(&scope.attendance, &snap));
        }

        if *add || set_presence.is_some() {
            print_summary(ctx);
        }
    }

    Ok(())
}
