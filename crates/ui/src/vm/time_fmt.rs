use chrono::Duration;

/// "0:30" style countdown label.
#[must_use]
pub fn format_countdown(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

/// "3 min 05 s" style label for the time a session took.
#[must_use]
pub fn format_elapsed(value: Duration) -> String {
    let total = value.num_seconds().max(0);
    let minutes = total / 60;
    let seconds = total % 60;
    if minutes == 0 {
        format!("{seconds} s")
    } else {
        format!("{minutes} min {seconds:02} s")
    }
}
