//! Line-oriented commands for an interactive session. Each line maps to one
//! store mutation or one read-only view.

use crate::config::Config;
use crate::core::brief;
use crate::core::input::{parse_category, parse_non_negative, parse_status};
use crate::core::log::LogLogic;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::{LabourStatus, NewAttendance, NewPayment, NewWorker, PaymentCategory};
use crate::store::RecordStore;
use crate::ui::views;
use chrono::NaiveDate;

pub const HELP: &str = "\
Commands:
  select <contractor-id|none>
  status <worker-id> <present|absent|leave|standby>
  attend <worker-id> <presence> <hours> [site...]
  presence <attendance-id> <presence>
  pay <worker-id> <advance|material|bonus|deduction> <amount> [note...]
  hire <contractor-id> <trade> <daily-rate> <name...>
  show | crew | brief | log | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Select(Option<String>),
    Status {
        worker_id: String,
        status: LabourStatus,
    },
    Attend {
        worker_id: String,
        presence: LabourStatus,
        hours: f64,
        site: Option<String>,
    },
    Presence {
        id: String,
        presence: LabourStatus,
    },
    Pay {
        worker_id: String,
        category: PaymentCategory,
        amount: f64,
        note: Option<String>,
    },
    Hire {
        contractor_id: String,
        trade: String,
        daily_rate: f64,
        name: String,
    },
    Show,
    Crew,
    Brief,
    Log,
    Help,
    Quit,
}

/// What the caller should do with the result of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Changed(String),
    Output(String),
    Quit,
}

fn arg<'a>(parts: &[&'a str], i: usize, usage: &str) -> AppResult<&'a str> {
    parts
        .get(i)
        .copied()
        .ok_or_else(|| AppError::Session(format!("usage: {usage}")))
}

fn rest(parts: &[&str], from: usize) -> Option<String> {
    (parts.len() > from).then(|| parts[from..].join(" "))
}

impl SessionCommand {
    /// `Ok(None)` for blank lines and `#` comments.
    pub fn parse(line: &str) -> AppResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = match parts[0].to_lowercase().as_str() {
            "select" => {
                let usage = "select <contractor-id|none>";
                let id = arg(&parts, 1, usage)?;
                if id.eq_ignore_ascii_case("none") {
                    SessionCommand::Select(None)
                } else {
                    SessionCommand::Select(Some(id.to_string()))
                }
            }
            "status" => {
                let usage = "status <worker-id> <status>";
                SessionCommand::Status {
                    worker_id: arg(&parts, 1, usage)?.to_string(),
                    status: parse_status(arg(&parts, 2, usage)?)?,
                }
            }
            "attend" => {
                let usage = "attend <worker-id> <presence> <hours> [site...]";
                SessionCommand::Attend {
                    worker_id: arg(&parts, 1, usage)?.to_string(),
                    presence: parse_status(arg(&parts, 2, usage)?)?,
                    hours: parse_non_negative(arg(&parts, 3, usage)?, "hours")?,
                    site: rest(&parts, 4),
                }
            }
            "presence" => {
                let usage = "presence <attendance-id> <presence>";
                SessionCommand::Presence {
                    id: arg(&parts, 1, usage)?.to_string(),
                    presence: parse_status(arg(&parts, 2, usage)?)?,
                }
            }
            "pay" => {
                let usage = "pay <worker-id> <category> <amount> [note...]";
                SessionCommand::Pay {
                    worker_id: arg(&parts, 1, usage)?.to_string(),
                    category: parse_category(arg(&parts, 2, usage)?)?,
                    amount: parse_non_negative(arg(&parts, 3, usage)?, "amount")?,
                    note: rest(&parts, 4),
                }
            }
            "hire" => {
                let usage = "hire <contractor-id> <trade> <daily-rate> <name...>";
                let contractor_id = arg(&parts, 1, usage)?.to_string();
                let trade = arg(&parts, 2, usage)?.to_string();
                let daily_rate = parse_non_negative(arg(&parts, 3, usage)?, "daily rate")?;
                let name = rest(&parts, 4)
                    .ok_or_else(|| AppError::Session(format!("usage: {usage}")))?;
                SessionCommand::Hire {
                    contractor_id,
                    trade,
                    daily_rate,
                    name,
                }
            }
            "show" => SessionCommand::Show,
            "crew" => SessionCommand::Crew,
            "brief" => SessionCommand::Brief,
            "log" => SessionCommand::Log,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => {
                return Err(AppError::Session(format!(
                    "unknown command '{other}' (try 'help')"
                )));
            }
        };

        Ok(Some(cmd))
    }
}

pub struct SessionLogic;

impl SessionLogic {
    pub fn apply(
        store: &mut RecordStore,
        cmd: SessionCommand,
        cfg: &Config,
        today: NaiveDate,
    ) -> AppResult<Reply> {
        let reply = match cmd {
            SessionCommand::Select(id) => {
                if let Some(c) = id.as_deref()
                    && store.contractor(c).is_none()
                {
                    // selection is allowed anyway; the crew will be empty
                    tracing::warn!(contractor = c, "selected contractor does not exist");
                }
                store.set_selected_contractor(id.as_deref());
                Reply::Changed(match id {
                    Some(c) => format!("Selected contractor {c}"),
                    None => "Showing all contractors".to_string(),
                })
            }
            SessionCommand::Status { worker_id, status } => {
                store.update_worker_status(&worker_id, status)?;
                Reply::Changed(format!("{worker_id} is now {status}"))
            }
            SessionCommand::Attend {
                worker_id,
                presence,
                hours,
                site,
            } => {
                let id = store.add_attendance(NewAttendance {
                    worker_id: worker_id.clone(),
                    date: today,
                    hours_worked: hours,
                    presence,
                    remarks: None,
                    site: site.unwrap_or_else(|| cfg.site.clone()),
                })?;
                Reply::Changed(format!("Logged {worker_id} as {presence} ({id})"))
            }
            SessionCommand::Presence { id, presence } => {
                store.update_attendance_presence(&id, presence)?;
                Reply::Changed(format!("Attendance {id} marked {presence}"))
            }
            SessionCommand::Pay {
                worker_id,
                category,
                amount,
                note,
            } => {
                let id = store.add_payment(NewPayment {
                    worker_id: worker_id.clone(),
                    amount,
                    date: today,
                    category,
                    note,
                })?;
                Reply::Changed(format!("Recorded {category} for {worker_id} ({id})"))
            }
            SessionCommand::Hire {
                contractor_id,
                trade,
                daily_rate,
                name,
            } => {
                let id = store.add_worker(NewWorker {
                    name: name.clone(),
                    trade,
                    daily_rate,
                    status: LabourStatus::Present,
                    phone: None,
                    contractor_id,
                })?;
                Reply::Changed(format!("Added {name} ({id})"))
            }
            SessionCommand::Show => {
                let d = Core::build_dashboard(&store.snapshot(), today, &cfg.policy);
                Reply::Output(views::render_dashboard(&d, cfg, false))
            }
            SessionCommand::Crew => {
                let snap = store.snapshot();
                let crew = crate::core::calculator::crew::resolve_crew(&snap);
                Reply::Output(views::render_crew(&crew, &cfg.currency))
            }
            SessionCommand::Brief => {
                let snap = store.snapshot();
                let d = Core::build_dashboard(&snap, today, &cfg.policy);
                Reply::Output(brief::compose(&d, &snap, cfg))
            }
            SessionCommand::Log => Reply::Output(LogLogic::render(store.audit_log())),
            SessionCommand::Help => Reply::Output(HELP.to_string()),
            SessionCommand::Quit => Reply::Quit,
        };

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ids::SequentialIds;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn run(store: &mut RecordStore, line: &str) -> AppResult<Reply> {
        let cmd = SessionCommand::parse(line)?.expect("command");
        SessionLogic::apply(store, cmd, &Config::default(), today())
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
        assert_eq!(SessionCommand::parse("# morning roll call").unwrap(), None);
    }

    #[test]
    fn parses_attend_with_multi_word_site() {
        let cmd = SessionCommand::parse("attend w-1 present 7.5 Tower B east").unwrap();
        assert_eq!(
            cmd,
            Some(SessionCommand::Attend {
                worker_id: "w-1".into(),
                presence: LabourStatus::Present,
                hours: 7.5,
                site: Some("Tower B east".into()),
            })
        );
    }

    #[test]
    fn rejects_negative_numbers_before_the_store() {
        assert!(SessionCommand::parse("attend w-1 present -2").is_err());
        assert!(SessionCommand::parse("pay w-1 bonus -100").is_err());
    }

    #[test]
    fn reports_usage_and_unknown_commands() {
        let err = SessionCommand::parse("status w-1").unwrap_err();
        assert!(err.to_string().contains("usage: status"));
        let err = SessionCommand::parse("fly away").unwrap_err();
        assert!(err.to_string().contains("unknown command 'fly'"));
    }

    #[test]
    fn mutations_reach_the_store() {
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));

        run(&mut store, "attend w-2 absent 0").unwrap();
        assert_eq!(store.attendance()[0].id, "n-1");
        assert_eq!(store.attendance()[0].site, "Main site");

        run(&mut store, "presence n-1 present").unwrap();
        assert_eq!(store.attendance()[0].presence, LabourStatus::Present);

        run(&mut store, "pay w-1 deduction 250 late arrival").unwrap();
        assert_eq!(store.payments()[0].note.as_deref(), Some("late arrival"));

        run(&mut store, "hire c-2 Electrician 5200 Kiran Rao").unwrap();
        let last = store.workers().last().unwrap();
        assert_eq!(last.name, "Kiran Rao");
        assert_eq!(last.contractor_id, "c-2");
    }

    #[test]
    fn unknown_ids_surface_not_found() {
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        let err = run(&mut store, "status w-404 present").unwrap_err();
        assert!(err.is_not_found());
        let err = run(&mut store, "presence a-404 absent").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn select_none_clears_selection() {
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        run(&mut store, "select c-1").unwrap();
        assert_eq!(store.selected_contractor_id(), Some("c-1"));
        assert_eq!(
            run(&mut store, "select none").unwrap(),
            Reply::Changed("Showing all contractors".into())
        );
        assert_eq!(store.selected_contractor_id(), None);
    }

    #[test]
    fn quit_and_views() {
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        assert_eq!(run(&mut store, "exit").unwrap(), Reply::Quit);
        match run(&mut store, "brief").unwrap() {
            Reply::Output(text) => assert!(text.contains("Coordination brief")),
            other => panic!("unexpected reply {other:?}"),
        }
    }
}
