//! Deterministic scan payload encode/decode.
//!
//! The stored/scanned payload is `stamp-rally:<spot_id>:<YYYY-MM-DD>`,
//! three colon-delimited fields counting the fixed literal prefix. The QR
//! image itself carries a scan URL embedding the same pair as query
//! parameters; both forms decode through [`decode`] to one canonical pair.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::RallyServiceError;

/// Fixed first field of every raw scan payload.
pub const PAYLOAD_PREFIX: &str = "stamp-rally";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical decoded form of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePayload {
    pub spot_id: Uuid,
    pub date: NaiveDate,
}

/// Encode `(spot_id, date)` as the payload string. Deterministic, so the
/// displayed code and the stored record match without a round trip.
pub fn encode(spot_id: Uuid, date: NaiveDate) -> String {
    format!("{PAYLOAD_PREFIX}:{spot_id}:{}", date.format(DATE_FORMAT))
}

/// Build the presentation URL embedded in the QR image. Decodes back to the
/// same pair as the raw payload.
pub fn scan_url(base_url: &str, spot_id: Uuid, date: NaiveDate) -> String {
    format!(
        "{}/scan?spot={spot_id}&date={}",
        base_url.trim_end_matches('/'),
        date.format(DATE_FORMAT)
    )
}

#[derive(Deserialize)]
struct ScanQuery {
    spot: String,
    date: String,
}

/// Decode a scanned string back into its canonical `(spot_id, date)` pair.
///
/// Accepts the raw `stamp-rally:` form (camera scan) and the URL form with
/// `spot`/`date` query parameters (link navigation). Wrong prefix, wrong
/// field count, a non-UUID spot id, or a malformed date all reject with
/// `InvalidCodeFormat`.
pub fn decode(raw: &str) -> Result<CodePayload, RallyServiceError> {
    let (spot, date) = if let Some((_, query)) = raw.split_once('?') {
        let q: ScanQuery =
            serde_qs::from_str(query).map_err(|_| RallyServiceError::InvalidCodeFormat)?;
        (q.spot, q.date)
    } else {
        let fields: Vec<&str> = raw.split(':').collect();
        match fields.as_slice() {
            [PAYLOAD_PREFIX, spot, date] => ((*spot).to_owned(), (*date).to_owned()),
            _ => return Err(RallyServiceError::InvalidCodeFormat),
        }
    };

    let spot_id = spot
        .parse::<Uuid>()
        .map_err(|_| RallyServiceError::InvalidCodeFormat)?;
    let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
        .map_err(|_| RallyServiceError::InvalidCodeFormat)?;
    Ok(CodePayload { spot_id, date })
}
