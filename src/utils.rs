//! Utility helpers for the audiobook app

use chrono::{DateTime, Local};

/// Formats a timestamp the way the uploads table shows it, e.g. `3/7/2026, 4:05:09 PM`.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delay_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn delay_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_like_a_locale_string() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 16, 5, 9).unwrap();
        assert_eq!(format_timestamp(&at), "3/7/2026, 4:05:09 PM");

        let morning = Local.with_ymd_and_hms(2026, 11, 21, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(&morning), "11/21/2026, 12:30:00 AM");
    }
}
