mod coins;
mod hover;
mod view;

use std::path::Path;

use coinstats_core::{
    load_from_path, Catalog, ChartConfig, ChartDate, CoinId, DataConfig, DateRange, Envelope,
    EnvelopeError, EnvelopeMeta, Metric, NormalizeReport, ViewState,
};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::cli::{ChartArgs, Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Loaded dataset plus the chart settings every command shares.
pub struct Session {
    pub catalog: Catalog,
    pub report: NormalizeReport,
    pub config: ChartConfig,
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| DataConfig::default().data_path);
    let session = load_session(&data_path)?;

    let CommandResult {
        data,
        warnings,
        errors,
    } = match &cli.command {
        Command::Coins => coins::run(&session)?,
        Command::View(args) => view::run(args, &session)?,
        Command::Hover(args) => hover::run(args, &session)?,
    };

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        data_path.display().to_string(),
        session.report.skipped(),
    )?;

    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

fn load_session(path: &Path) -> Result<Session, CliError> {
    debug!(path = %path.display(), "loading dataset");
    let (catalog, report) = load_from_path(path)?;

    Ok(Session {
        catalog,
        report,
        config: ChartConfig::default(),
    })
}

/// Resolve chart arguments into a view, defaulting open range ends to the slider bounds.
///
/// Returns warnings for range ends outside the loaded data.
pub fn resolve_view(
    args: &ChartArgs,
    session: &Session,
) -> Result<(ViewState, Vec<String>), CliError> {
    let coin = CoinId::parse(&args.coin)?;
    let metric: Metric = args.metric.parse()?;
    let bounds = session.catalog.slider_bounds(&session.config);

    let start = match &args.from {
        Some(raw) => ChartDate::parse(raw.trim())?,
        None => bounds.start(),
    };
    let end = match &args.to {
        Some(raw) => ChartDate::parse(raw.trim())?,
        None => bounds.end(),
    };
    let range = DateRange::new(start, end)?;

    let mut warnings = Vec::new();
    if start < bounds.start() || end > bounds.end() {
        warnings.push(format!(
            "requested range {start}..{end} extends beyond available data {}..{}",
            bounds.start(),
            bounds.end()
        ));
    }

    Ok((ViewState::new(coin, metric, range), warnings))
}
