//! Interactive planning session.
//!
//! One session owns one `EventStore` for its whole lifetime; nothing is
//! persisted. The loop is generic over reader and writer so tests can drive
//! it with a script and capture the output.

use std::io::{BufRead, Write};

use anyhow::Result;
use dayplan_core::{EventStore, compile};

use crate::Config;
use crate::render::{format_chart, format_duration, format_table};
use crate::timefmt::{format_minute, parse_minute};

const PROMPT: &str = "dayplan> ";
const ADD_USAGE: &str = "usage: add <label> <start> <end> (e.g., add lunch 12:00 13:00)";
const EMPTY_HINT: &str = "no events yet; add one first (e.g., add lunch 12:00 13:00)";

enum Flow {
    Continue,
    Quit,
}

/// Runs one interactive planning session to completion.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, config: &Config) -> Result<()> {
    let mut store = EventStore::new();

    writeln!(
        output,
        "dayplan: 24-hour schedule planner (type help for commands)"
    )?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match dispatch(&line, &mut store, output, config)? {
            Flow::Continue => {}
            Flow::Quit => return Ok(()),
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    Ok(())
}

fn dispatch<W: Write>(
    line: &str,
    store: &mut EventStore,
    output: &mut W,
    config: &Config,
) -> Result<Flow> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Flow::Continue);
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "add" => cmd_add(&args, store, output)?,
        "table" | "list" => cmd_table(store, output)?,
        "chart" => cmd_chart(store, output, config)?,
        "segments" => cmd_segments(store, output)?,
        "clear" => cmd_clear(store, output)?,
        "help" => cmd_help(output)?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => writeln!(output, "unknown command: {other} (type help)")?,
    }

    Ok(Flow::Continue)
}

/// `add <label...> <start> <end>`: the last two tokens are times, everything
/// before them is the label, so multi-word labels need no quoting.
fn cmd_add<W: Write>(args: &[&str], store: &mut EventStore, output: &mut W) -> Result<()> {
    let Some((end_raw, rest)) = args.split_last() else {
        writeln!(output, "{ADD_USAGE}")?;
        return Ok(());
    };
    let Some((start_raw, label_parts)) = rest.split_last() else {
        writeln!(output, "{ADD_USAGE}")?;
        return Ok(());
    };
    if label_parts.is_empty() {
        writeln!(output, "{ADD_USAGE}")?;
        return Ok(());
    }

    let start_minute = match parse_minute(start_raw) {
        Ok(minute) => minute,
        Err(err) => {
            writeln!(output, "error: {err:#}")?;
            return Ok(());
        }
    };
    let end_minute = match parse_minute(end_raw) {
        Ok(minute) => minute,
        Err(err) => {
            writeln!(output, "error: {err:#}")?;
            return Ok(());
        }
    };

    match store.add(label_parts.join(" "), start_minute, end_minute) {
        Ok(event) => writeln!(
            output,
            "added {:?} {}-{} ({})",
            event.label().as_str(),
            format_minute(event.start_minute()),
            format_minute(event.end_minute()),
            format_duration(event.duration_minutes()),
        )?,
        Err(err) => writeln!(output, "error: {err}")?,
    }

    Ok(())
}

fn cmd_table<W: Write>(store: &EventStore, output: &mut W) -> Result<()> {
    if store.is_empty() {
        writeln!(output, "{EMPTY_HINT}")?;
        return Ok(());
    }
    write!(output, "{}", format_table(store.list()))?;
    Ok(())
}

fn cmd_chart<W: Write>(store: &EventStore, output: &mut W, config: &Config) -> Result<()> {
    if store.is_empty() {
        writeln!(output, "{EMPTY_HINT}")?;
        return Ok(());
    }
    let segments = compile(store.list());
    write!(output, "{}", format_chart(&segments, config.chart_width))?;
    Ok(())
}

/// Prints the compiled segments as JSONL for external renderers.
fn cmd_segments<W: Write>(store: &EventStore, output: &mut W) -> Result<()> {
    for segment in compile(store.list()) {
        let json = serde_json::to_string(&segment)?;
        writeln!(output, "{json}")?;
    }
    Ok(())
}

fn cmd_clear<W: Write>(store: &mut EventStore, output: &mut W) -> Result<()> {
    let count = store.len();
    store.clear();
    writeln!(output, "cleared {count} event(s)")?;
    Ok(())
}

fn cmd_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "commands:")?;
    writeln!(output, "  add <label> <start> <end>  record an activity (times as HH:MM)")?;
    writeln!(output, "  chart                      show how the day's minutes are allocated")?;
    writeln!(output, "  table                      show the raw event list")?;
    writeln!(output, "  segments                   print compiled segments as JSONL")?;
    writeln!(output, "  clear                      drop all events")?;
    writeln!(output, "  quit                       end the session")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let config = Config::default();
        let mut output = Vec::new();
        run(Cursor::new(script), &mut output, &config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn session_records_and_charts_events() {
        let output = run_script("add sleep 00:00 06:00\nadd deep work 09:00 11:30\nchart\nquit\n");

        assert!(output.contains("added \"sleep\" 00:00-06:00 (6h 0m)"));
        assert!(output.contains("added \"deep work\" 09:00-11:30 (2h 30m)"));
        assert!(output.contains("DAY TIMELINE"));
        assert!(output.contains("deep work"));
        assert!(output.contains("Scheduled: 8h 30m"));
    }

    #[test]
    fn rejected_add_leaves_session_empty() {
        let output = run_script("add lunch 13:00 12:00\ntable\nquit\n");

        assert!(output.contains("error: end minute 720 must be after start minute 780"));
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn malformed_time_is_reported_not_fatal() {
        let output = run_script("add lunch noon 13:00\ntable\nquit\n");

        assert!(output.contains("error: invalid time \"noon\""));
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn add_requires_label_and_two_times() {
        let output = run_script("add 09:00 10:00\nquit\n");
        assert!(output.contains(ADD_USAGE));
    }

    #[test]
    fn segments_emits_full_day_jsonl() {
        let output = run_script("add sleep 00:00 06:00\nsegments\nquit\n");

        assert!(output.contains(r#"{"label":"sleep","start_minute":0,"length_minutes":360}"#));
        assert!(
            output.contains(r#"{"label":"unscheduled","start_minute":360,"length_minutes":1080}"#)
        );
    }

    #[test]
    fn clear_resets_the_session() {
        let output = run_script("add sleep 00:00 06:00\nclear\ntable\nquit\n");

        assert!(output.contains("cleared 1 event(s)"));
        assert!(output.contains(EMPTY_HINT));
    }

    #[test]
    fn unknown_command_points_at_help() {
        let output = run_script("frobnicate\nquit\n");
        assert!(output.contains("unknown command: frobnicate (type help)"));
    }

    #[test]
    fn session_ends_cleanly_at_eof() {
        let output = run_script("add sleep 00:00 06:00\n");
        assert!(output.contains("added \"sleep\""));
    }
}
