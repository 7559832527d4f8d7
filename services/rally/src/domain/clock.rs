//! Single definition of "today" shared by issuance and redemption.

use chrono::{NaiveDate, Utc};

/// Current calendar date in UTC, at day granularity.
///
/// Issuance and redemption both resolve "today" here, so a code issued
/// "for today" stays redeemable "today" under one day boundary. Usecases
/// take the date as an explicit parameter; only handlers call this.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
