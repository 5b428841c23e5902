use crate::{DateRange, Series};

/// Observations whose date falls inside `range`, both ends inclusive, in source order.
pub fn filter_by_range(series: &Series, range: &DateRange) -> Series {
    let observations = series
        .iter()
        .filter(|obs| range.contains(obs.date))
        .cloned()
        .collect();

    Series::new(series.coin.clone(), observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChartDate, CoinId, Observation};

    fn series(dates: &[&str]) -> Series {
        let coin = CoinId::parse("bitcoin").expect("coin");
        let observations = dates
            .iter()
            .map(|date| Observation {
                coin: coin.clone(),
                date: ChartDate::parse(date).expect("date"),
                volume: 1.0,
                market_cap: 1.0,
                price_usd: 1.0,
            })
            .collect();
        Series::new(coin, observations)
    }

    #[test]
    fn keeps_points_on_both_bounds() {
        let s = series(&["01/01/2015", "02/01/2015", "03/01/2015", "04/01/2015"]);
        let range = DateRange::parse("02/01/2015", "03/01/2015").expect("range");

        let filtered = filter_by_range(&s, &range);
        let dates: Vec<String> = filtered.iter().map(|obs| obs.date.to_string()).collect();
        assert_eq!(dates, vec!["02/01/2015", "03/01/2015"]);
    }

    #[test]
    fn returns_empty_series_when_nothing_qualifies() {
        let s = series(&["01/01/2015", "02/01/2015"]);
        let range = DateRange::parse("01/01/2030", "02/01/2030").expect("range");

        let filtered = filter_by_range(&s, &range);
        assert!(filtered.is_empty());
        assert_eq!(filtered.coin, s.coin);
    }

    #[test]
    fn filtering_twice_is_a_no_op() {
        let s = series(&["01/01/2015", "15/06/2015", "01/01/2016"]);
        let range = DateRange::parse("01/02/2015", "31/12/2015").expect("range");

        let once = filter_by_range(&s, &range);
        let twice = filter_by_range(&once, &range);
        assert_eq!(once, twice);
    }
}
