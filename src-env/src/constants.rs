/// Environment variable naming the project root
pub const HBA_DIR_VAR: &str = "HBA_DIR";

/// Environment variable enabling per-step timing logs
pub const HBA_TIMING_VAR: &str = "HBA_TIMING";

/// Directory (relative to the project root) receiving generated data
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` receiving recorded runs
pub const RECORDS: &str = "records";
