use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use stockscope_core::PricePoint;

use super::companies;

const POINTS: u64 = 120;

/// 120 daily closes ending 2024-06-28, newest first like the live API.
pub fn by_symbol(s: &str) -> Option<Vec<PricePoint>> {
    let company = companies::find(s)?;
    let end = NaiveDate::from_ymd_opt(2024, 6, 28)?;
    let mut out = Vec::with_capacity(POINTS as usize);
    for back in 0..POINTS {
        let date = end.checked_sub_days(Days::new(back))?;
        let wobble = i64::try_from((back * 37) % 200).unwrap_or(0) - 100;
        let cents = company.price - i64::try_from(back).unwrap_or(0) * 5 + wobble;
        out.push(PricePoint {
            date,
            close: Decimal::new(cents.max(1), 2),
        });
    }
    Some(out)
}
