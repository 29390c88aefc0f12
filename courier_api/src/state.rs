use courier_estimator::LogisticsEstimator;

pub struct AppState {
    pub estimator: LogisticsEstimator,
}
