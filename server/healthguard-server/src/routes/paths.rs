//! Route path constants

pub mod health {
    pub const HEALTH: &str = "/api/health";
    pub const VERSION: &str = "/api/version";
}

pub mod predict {
    pub const PREDICT: &str = "/api/predict";
    pub const DIFFERENTIAL: &str = "/api/predict/differential";
}

pub mod conditions {
    pub const CONDITIONS: &str = "/api/conditions";
    pub const CONDITION_BY_NAME: &str = "/api/conditions/:name";
}
