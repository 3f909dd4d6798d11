//! Message timestamps.
//!
//! Timestamps are stored as RFC 3339 strings. Display formatting uses the
//! browser's local time zone under `csr` and UTC elsewhere.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Current time as an RFC 3339 string.
pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// `HH:MM` label shown inside each message bubble. Empty for unparsable input.
pub fn time_of_day(timestamp: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
        if date.get_time().is_nan() {
            return String::new();
        }
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        parse(timestamp)
            .map(|dt| format!("{:02}:{:02}", dt.hour(), dt.minute()))
            .unwrap_or_default()
    }
}

/// Full date and time shown under the welcome header.
pub fn date_time(timestamp: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
        if date.get_time().is_nan() {
            return String::new();
        }
        date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
    }
    #[cfg(not(feature = "csr"))]
    {
        parse(timestamp)
            .map(|dt| {
                format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}",
                    dt.year(),
                    u8::from(dt.month()),
                    dt.day(),
                    dt.hour(),
                    dt.minute()
                )
            })
            .unwrap_or_default()
    }
}

#[cfg(not(feature = "csr"))]
fn parse(timestamp: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(timestamp, &Rfc3339)
        .ok()
        .map(|dt| dt.to_offset(time::UtcOffset::UTC))
}
