use serde::Serialize;

use coinstats_core::{
    ChartDate, ChartFrame, DateDomain, EnvelopeError, Tick, TimeTick, ValueDomain, ViewState,
};

use crate::cli::ViewArgs;
use crate::error::CliError;

use super::{resolve_view, CommandResult, Session};

#[derive(Debug, Serialize)]
struct PointData {
    date: ChartDate,
    value: f64,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct ViewResponseData {
    view: ViewState,
    label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_domain: Option<ValueDomain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_domain: Option<DateDomain>,
    x_ticks: Vec<TimeTick>,
    y_ticks: Vec<Tick>,
    points: Vec<PointData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl ViewResponseData {
    fn empty(view: ViewState) -> Self {
        Self {
            label: view.metric.label(),
            view,
            value_domain: None,
            date_domain: None,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            points: Vec::new(),
            path: None,
        }
    }
}

pub fn run(args: &ViewArgs, session: &Session) -> Result<CommandResult, CliError> {
    let (view, warnings) = resolve_view(&args.chart, session)?;

    let frame = match ChartFrame::compute(&session.catalog, &view, &session.config) {
        Ok(frame) => frame,
        Err(error) if error.is_empty_data() => {
            let data = serde_json::to_value(ViewResponseData::empty(view))?;
            return Ok(CommandResult::ok(data)
                .with_warnings(warnings)
                .with_error(EnvelopeError::from(&error)));
        }
        Err(error) => return Err(error.into()),
    };

    let points = frame
        .series
        .iter()
        .map(|obs| {
            let (x, y) = frame.position(obs);
            PointData {
                date: obs.date,
                value: obs.value(view.metric),
                x,
                y,
            }
        })
        .collect();

    let data = serde_json::to_value(ViewResponseData {
        label: frame.label,
        value_domain: Some(frame.value_domain),
        date_domain: Some(frame.date_domain),
        path: args.path.then(|| frame.path_data()),
        points,
        x_ticks: frame.x_ticks,
        y_ticks: frame.y_ticks,
        view,
    })?;

    Ok(CommandResult::ok(data).with_warnings(warnings))
}
