/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// JSON field carrying the payroll configuration schema version
pub const CONFIGURATION_SCHEMA_VERSION_FIELD: &str = "schemaVersion";

/// Flat percentage schema (`hraPercentage`, `daPercentage`, `pfPercentage`,
/// `taxSlab*Percentage`). Documents written before versioning use this.
pub const LEGACY_CONFIGURATION_SCHEMA_VERSION: u64 = 1;

/// Flag-gated schema with employee/employer PF and ESI rates.
pub const CURRENT_CONFIGURATION_SCHEMA_VERSION: u64 = 2;
