// Error codes implementation
// Standardized error codes returned in API error bodies

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const INVALID_FORMAT: &str = "VALIDATION_1002";
}

pub mod catalog {
    pub const LOAD_FAILED: &str = "CATALOG_2001";
    pub const UNKNOWN_CONDITION: &str = "CATALOG_2002";
}

pub mod system {
    pub const CONFIGURATION: &str = "SYSTEM_5001";
    pub const NETWORK: &str = "SYSTEM_5002";
    pub const SERVER: &str = "SYSTEM_5003";
    pub const INTERNAL: &str = "SYSTEM_5004";
}
