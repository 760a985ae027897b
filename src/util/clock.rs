//! Timestamps for stored records and the home page clock label.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Time zones offered by the settings panel, besides `auto`.
pub const KNOWN_TIMEZONES: &[(&str, &str)] = &[
    ("Europe/Kaliningrad", "Калининград (UTC+2)"),
    ("Europe/Moscow", "Москва (UTC+3)"),
    ("Europe/Samara", "Самара (UTC+4)"),
    ("Asia/Yekaterinburg", "Екатеринбург (UTC+5)"),
    ("Asia/Novosibirsk", "Новосибирск (UTC+7)"),
    ("Asia/Vladivostok", "Владивосток (UTC+10)"),
    ("UTC", "UTC"),
];

/// Current instant as an RFC 3339 (ISO-8601) string.
#[must_use]
pub fn now_iso() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

/// `dd.MM.yyyy, HH:mm`, the layout of the `ru-RU` numeric locale.
#[must_use]
pub fn format_clock(at: OffsetDateTime) -> String {
    at.format(format_description!("[day].[month].[year], [hour]:[minute]"))
        .unwrap_or_default()
}

/// Zone to pass to the browser formatter; `None` means local time.
///
/// Stored values are not validated on write, and the browser throws on an
/// unknown zone, so only the offered zones are honoured.
#[must_use]
pub fn effective_timezone(timezone: &str) -> Option<&'static str> {
    KNOWN_TIMEZONES
        .iter()
        .map(|(zone, _)| *zone)
        .find(|zone| *zone == timezone)
}

/// Label for the `#currentTime` element in the given stored timezone.
#[must_use]
pub fn current_time_label(timezone: &str) -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        let options = js_sys::Object::new();
        let set = |key: &str, value: JsValue| {
            let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &value);
        };
        set("year", JsValue::from_str("numeric"));
        set("month", JsValue::from_str("2-digit"));
        set("day", JsValue::from_str("2-digit"));
        set("hour", JsValue::from_str("2-digit"));
        set("minute", JsValue::from_str("2-digit"));
        set("hour12", JsValue::FALSE);
        if let Some(zone) = effective_timezone(timezone) {
            set("timeZone", JsValue::from_str(zone));
        }
        String::from(js_sys::Date::new_0().to_locale_string("ru-RU", &options))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = timezone;
        format_clock(OffsetDateTime::now_utc())
    }
}
