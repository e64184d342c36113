use rust_decimal::Decimal;

/// Price value - uses Decimal so catalog amounts never pick up float drift
pub type Price = Decimal;
