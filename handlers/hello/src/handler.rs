use chrono::Local;
use edge_fn_sdk::prelude::*;

use crate::datefmt::short_date;

/// Date greeting handler.
///
/// Ignores the invocation event and context entirely and returns the current
/// date formatted as e.g. "Jan 1st 24" under the "message" key. The clock is
/// read on every invocation, so the message tracks the calendar day.
pub async fn handle(_event: Event, _ctx: Context) -> Response {
    let today = Local::now().date_naive();
    Response::ok(json!({
        "message": short_date(today)
    }))
}
