use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Upper bound for any single amount or slab limit fed to the engine.
pub const MAX_MONETARY_AMOUNT: Decimal = dec!(1000000000000000);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const FEBRUARY: u32 = 2;

/// ESI applies only while monthly gross stays at or below this ceiling.
/// Fixed by the rule set, not configurable per company.
pub const ESI_GROSS_CEILING: Decimal = dec!(21000);

// Professional tax (Maharashtra slabs)
pub const PT_FEMALE_EXEMPTION_LIMIT: Decimal = dec!(25000);
pub const PT_EXEMPTION_LIMIT: Decimal = dec!(7500);
pub const PT_REDUCED_SLAB_LIMIT: Decimal = dec!(10000);
pub const PT_REDUCED_AMOUNT: Decimal = dec!(175);
pub const PT_STANDARD_AMOUNT: Decimal = dec!(200);
pub const PT_FEBRUARY_AMOUNT: Decimal = dec!(300);
