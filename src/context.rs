//! Per-process session: configuration, the seeded store and "today".

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::store::ids::{IdGenerator, SequentialIds, UuidGenerator};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub store: RecordStore,
    pub today: NaiveDate,
}

impl AppContext {
    pub fn new(cfg: Config, config_path: PathBuf, store: RecordStore, today: NaiveDate) -> Self {
        Self {
            cfg,
            config_path,
            store,
            today,
        }
    }

    /// Load config, seed the store and apply the global selection.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = Config::resolve_path(cli.config.as_deref());
        let cfg = Config::load(&config_path)?;

        let today = date::parse_date_or(cli.today.as_deref(), date::today())
            .map_err(AppError::InvalidDate)?;

        let ids: Box<dyn IdGenerator> = if cli.test {
            Box::new(SequentialIds::new("n"))
        } else {
            Box::new(UuidGenerator)
        };
        let mut store = RecordStore::seeded(ids);

        if let Some(id) = &cli.contractor {
            if store.contractor(id).is_none() {
                warning(format!(
                    "Contractor '{id}' does not exist: the crew will be empty."
                ));
            }
            store.set_selected_contractor(Some(id.as_str()));
        }

        Ok(Self::new(cfg, config_path, store, today))
    }
}
