use coinstats_core::{ChartDate, ChartFrame, EnvelopeError};
use serde_json::Value;

use crate::cli::HoverArgs;
use crate::error::CliError;

use super::{resolve_view, CommandResult, Session};

pub fn run(args: &HoverArgs, session: &Session) -> Result<CommandResult, CliError> {
    let (view, warnings) = resolve_view(&args.chart, session)?;

    let date = args
        .date
        .as_deref()
        .map(|raw| ChartDate::parse(raw.trim()))
        .transpose()?;

    // clap guarantees exactly one of --x and --date.
    let tooltip = ChartFrame::compute(&session.catalog, &view, &session.config).and_then(|frame| {
        match date {
            Some(date) => frame.hover_date(date),
            None => frame.hover(args.x.unwrap_or_default()),
        }
    });

    match tooltip {
        Ok(tooltip) => {
            let data = serde_json::to_value(tooltip)?;
            Ok(CommandResult::ok(data).with_warnings(warnings))
        }
        Err(error) if error.is_empty_data() => Ok(CommandResult::ok(Value::Null)
            .with_warnings(warnings)
            .with_error(EnvelopeError::from(&error))),
        Err(error) => Err(error.into()),
    }
}
