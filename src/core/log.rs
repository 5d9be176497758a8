use crate::store::audit::AuditEntry;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const OP_MAX_WIDTH: usize = 60;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "attendance_add" | "payment_add" | "worker_add" => Colour::Green,
        "attendance_presence" | "worker_status" => Colour::Yellow,
        "select" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per entry, operation colored.
    pub fn render(entries: &[AuditEntry]) -> String {
        if entries.is_empty() {
            return "📜 Internal log is empty.".to_string();
        }

        let rows: Vec<(usize, String, String, String, String)> = entries
            .iter()
            .map(|e| {
                // Unica colonna op+target
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (
                    e.seq,
                    e.at.format("%FT%T%:z").to_string(),
                    e.operation.clone(),
                    op_target,
                    e.message.clone(),
                )
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = rows
            .iter()
            .map(|(seq, _, _, _, _)| seq.to_string().len())
            .max()
            .unwrap_or(1);

        let mut out = String::from("📜 Internal log:\n\n");

        for (seq, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            let visible = if op_target.chars().count() > OP_MAX_WIDTH {
                let mut s: String = op_target.chars().take(OP_MAX_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {} | {}{} => {}\n",
                seq,
                date,
                colored,
                padding,
                message,
                id_w = id_w
            ));
        }

        out
    }

    pub fn print_log(entries: &[AuditEntry]) {
        print!("{}", Self::render(entries));
    }
}
