use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Markup applied to the optimized share to model naive, unoptimized booking
pub const INEFFICIENCY_FACTOR: Decimal = dec!(1.2);

/// Decimal places kept on allocated amounts (whole currency units)
pub const AMOUNT_DECIMAL_PRECISION: u32 = 0;
