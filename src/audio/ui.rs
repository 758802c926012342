// file: src/audio/ui.rs
// version: 1.0.0
// guid: 4e8d20a7-6c5b-4913-af28-d170b3e94c62

//! Formatting helpers for the player display

/// Format a position in seconds as `h:mm:ss`, or `m:ss` under an hour
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let (minutes, secs) = (total / 60, total % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Render a `[=====     ]` progress bar with `max_bars` fill positions
pub fn render_progress_bar(progress: f64, max_bars: usize) -> String {
    let progress = progress.clamp(0.0, 1.0);
    let filled = (progress * max_bars as f64).round() as usize;
    format!("[{}{}]", "=".repeat(filled), " ".repeat(max_bars - filled))
}

/// Column at which `text_len` characters are centered in a `width` terminal
pub fn centered_column(width: u16, text_len: usize) -> u16 {
    ((width as usize).saturating_sub(text_len) / 2) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_under_an_hour() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(9.9), "0:09");
        assert_eq!(format_timestamp(65.0), "1:05");
        assert_eq!(format_timestamp(3599.0), "59:59");
    }

    #[test]
    fn test_format_timestamp_with_hours() {
        assert_eq!(format_timestamp(3600.0), "1:00:00");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
    }

    #[test]
    fn test_format_timestamp_clamps_negative() {
        assert_eq!(format_timestamp(-5.0), "0:00");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(render_progress_bar(0.0, 4), "[    ]");
        assert_eq!(render_progress_bar(0.5, 4), "[==  ]");
        assert_eq!(render_progress_bar(1.0, 4), "[====]");
    }

    #[test]
    fn test_progress_bar_clamps_out_of_range() {
        assert_eq!(render_progress_bar(1.5, 4), "[====]");
        assert_eq!(render_progress_bar(-0.1, 4), "[    ]");
    }

    #[test]
    fn test_centered_column() {
        assert_eq!(centered_column(80, 60), 10);
        assert_eq!(centered_column(80, 80), 0);
        // text wider than the terminal saturates to column zero
        assert_eq!(centered_column(10, 60), 0);
    }
}
