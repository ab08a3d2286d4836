/*
Visit recording logic.
Module is independent from HTTP / Axum for testing
*/

use chrono::{DateTime, Local};

use crate::models::VisitRecord;
use crate::store::{Store, StoreError};

// Second precision, local time, no timezone marker. This is the
// format already present in deployed analytics files.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Record one visit: load the document, bump the total, append a
// timestamped record, write the whole document back. Returns the new
// total for the HTTP response.
//
// Load-modify-save with no lock: two concurrent calls can both read
// total N and both persist N+1, the second save discarding the first.
// Accepted limitation of the flat-file design.
pub fn record_visit(store: &Store, now: DateTime<Local>) -> Result<u64, StoreError> {
    let mut analytics = store.load()?;

    analytics.total_visits += 1;
    analytics.timeseries.push(VisitRecord {
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
    });

    store.save(&analytics)?;
    Ok(analytics.total_visits)
}
