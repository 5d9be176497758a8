use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::logic::Core;
use crate::core::session::{HELP, Reply, SessionCommand, SessionLogic};
use crate::errors::AppResult;
use crate::ui::messages::{changed, error, info, success};
use crate::ui::views;
use std::io::{self, BufRead, IsTerminal, Write};

/// Read commands from stdin until `quit` or end of input. Every change is
/// followed by a refreshed summary driven by a store subscription.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    let Commands::Session { quiet } = cmd else {
        return Ok(());
    };

    let subscription = if *quiet {
        None
    } else {
        let today = ctx.today;
        let policy = ctx.cfg.policy.clone();
        let symbol = ctx.cfg.currency.clone();
        Some(ctx.store.subscribe(move |event, snap| {
            let d = Core::build_dashboard(snap, today, &policy);
            changed(format!(
                "{} | {}",
                event.operation(),
                views::summary_line(&d, &symbol)
            ));
        }))
    };

    let interactive = io::stdin().is_terminal();
    if interactive {
        info(format!("Session started for {}. Type 'help' for commands.", ctx.cfg.site));
        println!("{HELP}");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut changes = 0usize;

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().ok();
        }

        let Some(line) = lines.next() else { break };
        let line = line?;

        let parsed = match SessionCommand::parse(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                error(e);
                continue;
            }
        };

        match SessionLogic::apply(&mut ctx.store, parsed, &ctx.cfg, ctx.today) {
            Ok(Reply::Changed(msg)) => {
                changes += 1;
                success(msg);
            }
            Ok(Reply::Output(text)) => println!("{text}"),
            Ok(Reply::Quit) => break,
            Err(e) => error(e),
        }
    }

    if let Some(id) = subscription {
        ctx.store.unsubscribe(id);
    }

    info(format!(
        "Session closed after {changes} change(s); changes are not kept."
    ));
    Ok(())
}
