//! Shared formatting helpers for table columns and banners.
//!
//! All functions are pure. Counter columns are right-aligned to a fixed
//! width and blank for zero so idle rows read as empty space.

use chrono::{DateTime, Local, Utc};

// ---------------------------------------------------------------------------
// Table column formatting (fixed-width, right-aligned, blank for zero)
// ---------------------------------------------------------------------------

/// Format a counter with K/M/G suffix.
pub fn format_count(v: u64, width: usize) -> String {
    if v == 0 {
        return format!("{:>width$}", "", width = width);
    }
    if v >= 1_000_000_000 {
        format!("{:>width$.1}G", v as f64 / 1e9, width = width - 1)
    } else if v >= 1_000_000 {
        format!("{:>width$.1}M", v as f64 / 1e6, width = width - 1)
    } else if v >= 10_000 {
        format!("{:>width$.1}K", v as f64 / 1e3, width = width - 1)
    } else {
        format!("{:>width$}", v, width = width)
    }
}

/// Format a PostgreSQL block count (8 KiB pages) as a byte size.
pub fn format_blocks(blks: u64, width: usize) -> String {
    if blks == 0 {
        return format!("{:>width$}", "", width = width);
    }
    let b = blks as f64 * 8192.0;
    if b >= 1_099_511_627_776.0 {
        format!("{:>width$.1}T", b / 1_099_511_627_776.0, width = width - 1)
    } else if b >= 1_073_741_824.0 {
        format!("{:>width$.1}G", b / 1_073_741_824.0, width = width - 1)
    } else if b >= 1_048_576.0 {
        format!("{:>width$.1}M", b / 1_048_576.0, width = width - 1)
    } else {
        format!("{:>width$.1}K", b / 1024.0, width = width - 1)
    }
}

/// Format microseconds as `"850us"`, `"12.3ms"`, `"4.56s"`, `"3m5s"`, `"2h10m"`.
pub fn format_time_us(us: u64, width: usize) -> String {
    if us == 0 {
        return format!("{:>width$}", "", width = width);
    }
    let text = if us < 1_000 {
        format!("{}us", us)
    } else if us < 1_000_000 {
        format!("{:.1}ms", us as f64 / 1_000.0)
    } else if us < 60_000_000 {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    } else {
        format_duration((us / 1_000_000) as i64)
    };
    format!("{:>width$}", text, width = width)
}

/// Format `part` as a percentage of `whole`, blank when either is zero.
pub fn format_pct(part: u64, whole: u64, width: usize) -> String {
    if part == 0 || whole == 0 {
        return format!("{:>width$}", "", width = width);
    }
    let pct = part as f64 * 100.0 / whole as f64;
    format!("{:>width$.1}%", pct, width = width - 1)
}

/// Format a hit ratio `hit / (hit + read)`, blank when there was no access.
pub fn format_hit_ratio(hit: u64, read: u64, width: usize) -> String {
    format_pct(hit, hit.saturating_add(read), width)
}

// ---------------------------------------------------------------------------
// Banners
// ---------------------------------------------------------------------------

/// Format duration in seconds: `"5s"`, `"3m5s"`, `"2h10m"`, `"1d4h"`; `"-"` for negative.
pub fn format_duration(secs: i64) -> String {
    if secs < 0 {
        return "-".to_string();
    }
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d{}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Format a capture time as local wall-clock `HH:MM:SS`, or `"--:--:--"`.
pub fn format_clock(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Text normalization
// ---------------------------------------------------------------------------

/// Truncate string to `max_len` characters with unicode ellipsis (`…`).
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_len.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Normalize text for single-line display with space collapsing.
pub fn normalize_for_display(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        let ch = if ch.is_whitespace() { ' ' } else { ch };
        if ch == ' ' {
            if !prev_space {
                result.push(ch);
            }
            prev_space = true;
        } else {
            result.push(ch);
            prev_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_blank_for_zero_and_suffixed_when_large() {
        assert_eq!(format_count(0, 6), "      ");
        assert_eq!(format_count(42, 6), "    42");
        assert_eq!(format_count(12_345, 6), " 12.3K");
        assert_eq!(format_count(2_500_000, 6), "  2.5M");
        assert_eq!(format_count(3_000_000_000, 6), "  3.0G");
    }

    #[test]
    fn blocks_are_shown_as_bytes() {
        assert_eq!(format_blocks(1, 7), "   8.0K");
        assert_eq!(format_blocks(128, 7), "   1.0M");
        assert_eq!(format_blocks(0, 3), "   ");
    }

    #[test]
    fn time_us_scales_units() {
        assert_eq!(format_time_us(850, 8), "   850us");
        assert_eq!(format_time_us(12_300, 8), "  12.3ms");
        assert_eq!(format_time_us(4_560_000, 8), "   4.56s");
        assert_eq!(format_time_us(185_000_000, 8), "    3m5s");
        assert_eq!(format_time_us(0, 4), "    ");
    }

    #[test]
    fn pct_handles_zero_whole() {
        assert_eq!(format_pct(1, 0, 6), "      ");
        assert_eq!(format_pct(0, 10, 6), "      ");
        assert_eq!(format_pct(1, 4, 6), " 25.0%");
        assert_eq!(format_pct(4, 4, 6), "100.0%");
    }

    #[test]
    fn hit_ratio_of_reads_and_hits() {
        assert_eq!(format_hit_ratio(99, 1, 6), " 99.0%");
        assert_eq!(format_hit_ratio(0, 0, 6), "      ");
    }

    #[test]
    fn duration_compact() {
        assert_eq!(format_duration(5), "5s");
        assert_eq!(format_duration(185), "3m5s");
        assert_eq!(format_duration(7800), "2h10m");
        assert_eq!(format_duration(100_800), "1d4h");
        assert_eq!(format_duration(-1), "-");
    }

    #[test]
    fn clock_placeholder_without_time() {
        assert_eq!(format_clock(None), "--:--:--");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("ééééé", 3), "éé…");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(
            normalize_for_display("SELECT *\n  FROM\tt"),
            "SELECT * FROM t"
        );
    }
}
