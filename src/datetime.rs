use chrono::{DateTime, FixedOffset, Local, Utc};

/// Time zone a timestamp is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The zone configured on this machine
    Local,
    Utc,
}

/// Formats a Unix timestamp (seconds) as `HH:MM <zone>`, 24-hour clock.
///
/// Local times are labelled with their offset (`UTC+02:00`), or plain `UTC`
/// when the machine runs on UTC. Timestamps chrono cannot represent render as
/// `--:--`.
pub fn format_clock(timestamp: i64, zone: Zone) -> String {
    let Some(moment) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return "--:--".to_string();
    };

    match zone {
        Zone::Utc => format_with_offset(moment.fixed_offset()),
        Zone::Local => format_with_offset(moment.with_timezone(&Local).fixed_offset()),
    }
}

fn format_with_offset(moment: DateTime<FixedOffset>) -> String {
    if moment.offset().local_minus_utc() == 0 {
        moment.format("%H:%M UTC").to_string()
    } else {
        moment.format("%H:%M UTC%:z").to_string()
    }
}
