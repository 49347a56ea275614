//! Static rates used when the live provider cannot answer.
//!
//! Every entry is quoted against IDR, in both directions. Cross pairs such as
//! USD/EUR are deliberately absent; callers treat a missing pair as a data gap.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::currency::CurrencyCode;

/// Units of IDR per one unit of the other currency.
const IDR_PER_UNIT: [(CurrencyCode, Decimal); 9] = [
    (CurrencyCode::Usd, dec!(15000)),
    (CurrencyCode::Eur, dec!(16500)),
    (CurrencyCode::Gbp, dec!(19000)),
    (CurrencyCode::Jpy, dec!(100)),
    (CurrencyCode::Sgd, dec!(11000)),
    (CurrencyCode::Myr, dec!(3200)),
    (CurrencyCode::Aud, dec!(10000)),
    (CurrencyCode::Cad, dec!(11000)),
    (CurrencyCode::Chf, dec!(17000)),
];

/// Units of the other currency per one IDR. These are rounded constants,
/// not exact reciprocals of [`IDR_PER_UNIT`].
const UNITS_PER_IDR: [(CurrencyCode, Decimal); 9] = [
    (CurrencyCode::Usd, dec!(0.000067)),
    (CurrencyCode::Eur, dec!(0.000061)),
    (CurrencyCode::Gbp, dec!(0.000053)),
    (CurrencyCode::Jpy, dec!(0.01)),
    (CurrencyCode::Sgd, dec!(0.000091)),
    (CurrencyCode::Myr, dec!(0.00031)),
    (CurrencyCode::Aud, dec!(0.00010)),
    (CurrencyCode::Cad, dec!(0.000091)),
    (CurrencyCode::Chf, dec!(0.000059)),
];

fn lookup(table: &[(CurrencyCode, Decimal)], code: CurrencyCode) -> Option<Decimal> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, rate)| *rate)
}

/// Returns the static rate for `from -> to`, or `None` if the table has no
/// entry for that ordered pair.
pub fn fallback_rate(from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
    match (from, to) {
        (CurrencyCode::Idr, CurrencyCode::Idr) => None,
        (other, CurrencyCode::Idr) => lookup(&IDR_PER_UNIT, other),
        (CurrencyCode::Idr, other) => lookup(&UNITS_PER_IDR, other),
        _ => None,
    }
}
