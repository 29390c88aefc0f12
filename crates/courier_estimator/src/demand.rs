use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{confidence::Confidence, config::EstimatorConfig, error::EstimatorError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DemandQuery {
    pub location: String,
    /// Target day as `YYYY-MM-DD`.
    pub date: String,
    /// Accepted for compatibility, never consulted.
    #[serde(default)]
    pub historical_data: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DemandResult {
    pub demand: u32,
    pub trend: Trend,
    pub confidence: Confidence,
    pub factors: DemandFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DemandFactors {
    pub location: String,
    /// 0 is Monday, 6 is Sunday.
    pub day_of_week: u8,
    pub base_demand: u32,
    pub multiplier: f64,
}

fn parse_date(input: &str) -> Result<Date, EstimatorError> {
    Date::strptime("%Y-%m-%d", input).map_err(|source| EstimatorError::InvalidDate {
        input: input.to_owned(),
        source,
    })
}

pub(crate) fn forecast_demand(
    config: &EstimatorConfig,
    query: &DemandQuery,
) -> Result<DemandResult, EstimatorError> {
    let date = parse_date(&query.date)?;
    let weekday = date.weekday();
    let day_of_week = weekday.to_monday_zero_offset() as u8;

    let multiplier = config.weekday_multipliers.resolve(weekday);
    let demand = (f64::from(config.base_demand) * multiplier).floor() as u32;

    // Weekdays ramp up, weekends wind down.
    let trend = if day_of_week < 5 {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };

    Ok(DemandResult {
        demand,
        trend,
        confidence: Confidence::new(config.demand_confidence),
        factors: DemandFactors {
            location: query.location.clone(),
            day_of_week,
            base_demand: config.base_demand,
            multiplier,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(date: &str) -> DemandQuery {
        DemandQuery {
            location: "Hanoi".to_owned(),
            date: date.to_owned(),
            historical_data: None,
        }
    }

    #[test]
    fn test_friday() {
        let config = EstimatorConfig::default();
        let result = forecast_demand(&config, &query("2024-03-15")).unwrap();

        assert_eq!(result.demand, 65);
        assert_eq!(result.trend, Trend::Increasing);
        assert_eq!(result.confidence.value(), 0.70);
        assert_eq!(result.factors.day_of_week, 4);
        assert_eq!(result.factors.multiplier, 1.3);
        assert_eq!(result.factors.location, "Hanoi");
    }

    #[test]
    fn test_whole_week() {
        let config = EstimatorConfig::default();
        // 2024-03-11 is a Monday.
        let expected = [
            (50, 0, Trend::Increasing),
            (55, 1, Trend::Increasing),
            (60, 2, Trend::Increasing),
            (57, 3, Trend::Increasing),
            (65, 4, Trend::Increasing),
            (40, 5, Trend::Decreasing),
            (25, 6, Trend::Decreasing),
        ];

        for (offset, (demand, day_of_week, trend)) in expected.into_iter().enumerate() {
            let date = format!("2024-03-{}", 11 + offset);
            let result = forecast_demand(&config, &query(&date)).unwrap();

            assert_eq!(result.demand, demand, "{date}");
            assert_eq!(result.factors.day_of_week, day_of_week);
            assert_eq!(result.trend, trend);
        }
    }

    #[test]
    fn test_month_is_respected() {
        // Same day number, different month, different weekday.
        let config = EstimatorConfig::default();
        let january = forecast_demand(&config, &query("2024-01-15")).unwrap();
        let march = forecast_demand(&config, &query("2024-03-15")).unwrap();

        assert_eq!(january.factors.day_of_week, 0);
        assert_eq!(march.factors.day_of_week, 4);
    }

    #[test]
    fn test_historical_data_is_ignored() {
        let config = EstimatorConfig::default();
        let mut with_history = query("2024-03-16");
        with_history.historical_data = Some(vec![serde_json::json!({ "orders": 900 })]);

        assert_eq!(
            forecast_demand(&config, &with_history).unwrap(),
            forecast_demand(&config, &query("2024-03-16")).unwrap()
        );
    }

    #[test]
    fn test_invalid_date() {
        let config = EstimatorConfig::default();

        for input in [
            "15/03/2024",
            "2024-13-01",
            "2023-02-29",
            "",
            "2024-03-15T23:59:59",
            "20240315",
            "2024-03-15 ",
            "2024-03-15T10:00[Asia/Ho_Chi_Minh]",
        ] {
            assert!(
                matches!(
                    forecast_demand(&config, &query(input)),
                    Err(EstimatorError::InvalidDate { .. })
                ),
                "{input:?}"
            );
        }
    }
}
