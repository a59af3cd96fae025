//! Terminal renderers for the compiled timeline and the raw event table.
//!
//! The chart renderer consumes the segment sequence and relies on its
//! ordering and exact full-day coverage; the table renderer consumes the raw
//! event list and bypasses the compiler entirely.

use std::fmt::Write;

use dayplan_core::{Event, MINUTES_PER_DAY, Segment, SegmentLabel};

use crate::timefmt::format_minute;

/// Glyph used for unscheduled cells in the day strip.
const UNSCHEDULED_GLYPH: char = '·';

/// Formats minutes as a duration string.
/// Returns "Xh Ym" if >= 1 hour, "Xm" if < 1 hour.
#[must_use]
pub fn format_duration(minutes: u16) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    if hours >= 1 {
        format!("{hours}h {rest}m")
    } else {
        format!("{rest}m")
    }
}

/// Generates a 10-character progress bar.
/// Values <5% of max get a single block for visibility.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn progress_bar(value: u16, max: u16) -> String {
    if max == 0 {
        return "░".repeat(10);
    }

    let ratio = f64::from(value) / f64::from(max);
    let filled = if ratio < 0.05 && value > 0 {
        1
    } else {
        (ratio * 10.0).round().min(10.0) as usize
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

/// Whole percent of the day the given minutes cover.
fn percent_of_day(minutes: u16) -> u32 {
    u32::from(minutes) * 100 / u32::from(MINUTES_PER_DAY)
}

/// Assigns a strip glyph to each activity by first appearance: `a`, `b`, ...
fn assign_glyphs(segments: &[Segment]) -> Vec<(&str, char)> {
    const GLYPHS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

    let mut glyphs: Vec<(&str, char)> = Vec::new();
    for segment in segments {
        if let SegmentLabel::Activity(label) = &segment.label {
            if !glyphs.iter().any(|(name, _)| *name == label.as_str()) {
                let glyph = char::from(GLYPHS[glyphs.len() % GLYPHS.len()]);
                glyphs.push((label.as_str(), glyph));
            }
        }
    }
    glyphs
}

fn glyph_for_label(glyphs: &[(&str, char)], label: &SegmentLabel) -> char {
    match label {
        SegmentLabel::Unscheduled => UNSCHEDULED_GLYPH,
        SegmentLabel::Activity(name) => glyphs
            .iter()
            .find(|(candidate, _)| *candidate == name.as_str())
            .map_or(UNSCHEDULED_GLYPH, |(_, glyph)| *glyph),
    }
}

/// Renders the day as a strip of `width` cells, one glyph per cell.
///
/// Each cell shows the label occupying its starting minute.
fn day_strip(segments: &[Segment], width: usize, glyphs: &[(&str, char)]) -> String {
    (0..width)
        .map(|cell| {
            let minute = cell * usize::from(MINUTES_PER_DAY) / width;
            segments
                .iter()
                .find(|segment| {
                    let start = usize::from(segment.start_minute);
                    minute >= start && minute < start + usize::from(segment.length_minutes)
                })
                .map_or(UNSCHEDULED_GLYPH, |segment| {
                    glyph_for_label(glyphs, &segment.label)
                })
        })
        .collect()
}

/// Formats the compiled timeline: a day strip plus one row per segment in
/// order, and a scheduled/unscheduled total.
#[must_use]
pub fn format_chart(segments: &[Segment], width: usize) -> String {
    let width = width.clamp(1, usize::from(MINUTES_PER_DAY));
    let glyphs = assign_glyphs(segments);

    let mut output = String::new();
    writeln!(output, "DAY TIMELINE").unwrap();
    writeln!(output, "────────────").unwrap();
    writeln!(output, "00:00 {} 24:00", day_strip(segments, width, &glyphs)).unwrap();
    writeln!(output).unwrap();

    let label_width = segments
        .iter()
        .map(|segment| segment.label.as_str().chars().count())
        .max()
        .unwrap_or(0);

    for segment in segments {
        writeln!(
            output,
            "  {}  {}-{}  {:<label_width$}  {:>7}  {:>3}%  {}",
            glyph_for_label(&glyphs, &segment.label),
            format_minute(segment.start_minute),
            format_minute(segment.end_minute()),
            segment.label.as_str(),
            format_duration(segment.length_minutes),
            percent_of_day(segment.length_minutes),
            progress_bar(segment.length_minutes, MINUTES_PER_DAY),
        )
        .unwrap();
    }

    let scheduled: u16 = segments
        .iter()
        .filter(|segment| !segment.label.is_unscheduled())
        .map(|segment| segment.length_minutes)
        .sum();
    let unscheduled = MINUTES_PER_DAY - scheduled;

    writeln!(output).unwrap();
    writeln!(
        output,
        "Scheduled: {} ({}%)   Unscheduled: {} ({}%)",
        format_duration(scheduled),
        percent_of_day(scheduled),
        format_duration(unscheduled),
        percent_of_day(unscheduled),
    )
    .unwrap();

    output
}

/// Formats the raw event list as an aligned table.
#[must_use]
pub fn format_table(events: &[Event]) -> String {
    let label_width = events
        .iter()
        .map(|event| event.label().as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("ACTIVITY".len());

    let mut output = String::new();
    writeln!(
        output,
        "{:<label_width$}  {:<5}  {:<5}  DURATION",
        "ACTIVITY", "START", "END"
    )
    .unwrap();

    for event in events {
        writeln!(
            output,
            "{:<label_width$}  {}  {}  {}",
            event.label().as_str(),
            format_minute(event.start_minute()),
            format_minute(event.end_minute()),
            format_duration(event.duration_minutes()),
        )
        .unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use dayplan_core::{EventStore, compile};
    use insta::assert_snapshot;

    fn sample_store() -> EventStore {
        let mut store = EventStore::new();
        store.add("sleep", 0, 360).unwrap();
        store.add("work", 540, 690).unwrap();
        store
    }

    #[test]
    fn duration_formats_like_the_report() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(59), "59m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(150), "2h 30m");
        assert_eq!(format_duration(1440), "24h 0m");
    }

    #[test]
    fn progress_bar_scales_to_ten_cells() {
        assert_eq!(progress_bar(0, 1440), "░░░░░░░░░░");
        assert_eq!(progress_bar(1440, 1440), "██████████");
        assert_eq!(progress_bar(720, 1440), "█████░░░░░");
    }

    #[test]
    fn progress_bar_shows_minimum_block_for_tiny_values() {
        // 10 minutes is under 5% of the day but still visible
        assert_eq!(progress_bar(10, 1440), "█░░░░░░░░░");
    }

    #[test]
    fn strip_assigns_glyphs_by_first_appearance() {
        let store = sample_store();
        let segments = compile(store.list());
        let glyphs = assign_glyphs(&segments);

        assert_eq!(glyphs, [("sleep", 'a'), ("work", 'b')]);
        assert_eq!(
            day_strip(&segments, 48, &glyphs),
            "aaaaaaaaaaaa······bbbbb·························"
        );
    }

    #[test]
    fn chart_lists_segments_in_order_with_totals() {
        let store = sample_store();
        let segments = compile(store.list());

        assert_snapshot!(format_chart(&segments, 48), @r"
DAY TIMELINE
────────────
00:00 aaaaaaaaaaaa······bbbbb························· 24:00

  a  00:00-06:00  sleep          6h 0m   25%  ███░░░░░░░
  ·  06:00-09:00  unscheduled    3h 0m   12%  █░░░░░░░░░
  b  09:00-11:30  work          2h 30m   10%  █░░░░░░░░░
  ·  11:30-24:00  unscheduled  12h 30m   52%  █████░░░░░

Scheduled: 8h 30m (35%)   Unscheduled: 15h 30m (64%)
");
    }

    #[test]
    fn chart_with_no_events_is_one_unscheduled_day() {
        let chart = format_chart(&compile(&[]), 48);
        assert!(chart.contains("00:00-24:00"));
        assert!(chart.contains("unscheduled   24h 0m  100%"));
        assert!(chart.contains("Scheduled: 0m (0%)"));
    }

    #[test]
    fn table_aligns_columns_to_longest_label() {
        let mut store = EventStore::new();
        store.add("lunch", 720, 780).unwrap();
        store.add("deep work", 540, 690).unwrap();

        assert_snapshot!(format_table(store.list()), @r"
ACTIVITY   START  END    DURATION
lunch      12:00  13:00  1h 0m
deep work  09:00  11:30  2h 30m
");
    }

    #[test]
    fn chart_rows_have_no_trailing_whitespace() {
        let store = sample_store();
        let chart = format_chart(&compile(store.list()), 48);
        for line in chart.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
