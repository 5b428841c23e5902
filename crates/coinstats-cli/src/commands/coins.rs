use serde::Serialize;

use coinstats_core::{ChartDate, CoinId, DateRange};

use crate::error::CliError;

use super::{CommandResult, Session};

#[derive(Debug, Serialize)]
struct CoinSummary<'a> {
    coin: &'a CoinId,
    observations: usize,
    skipped: usize,
    first_date: Option<ChartDate>,
    last_date: Option<ChartDate>,
}

#[derive(Debug, Serialize)]
struct CoinsResponseData<'a> {
    coins: Vec<CoinSummary<'a>>,
    slider_bounds: DateRange,
}

pub fn run(session: &Session) -> Result<CommandResult, CliError> {
    let coins = session
        .catalog
        .iter()
        .map(|(coin, series)| CoinSummary {
            coin,
            observations: series.len(),
            skipped: session
                .report
                .coins
                .get(coin)
                .map_or(0, |report| report.skipped()),
            first_date: series.first_date(),
            last_date: series.last_date(),
        })
        .collect::<Vec<_>>();

    let data = serde_json::to_value(CoinsResponseData {
        coins,
        slider_bounds: session.catalog.slider_bounds(&session.config),
    })?;

    Ok(CommandResult::ok(data))
}
