//! Non-interactive subcommands: `list` and `select`.
//!
//! Both write to caller-supplied sinks so the binary passes stdout/stderr
//! and tests pass buffers.

use crate::acekey::{self, InputState, MatchOutcome};
use crate::albums::{Album, entities};
use crate::error::AppError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ListedAlbum<'a> {
    id: &'a str,
    name: &'a str,
    key: Option<&'a str>,
}

/// Prints every album with its keybinding, in input order.
///
/// Albums without a binding show `--` in the table and `"key": null` in JSON.
pub fn list(albums: &[Album], json: bool, out: &mut impl Write) -> Result<(), AppError> {
    let assignment = acekey::assign_keybindings(&entities(albums));
    let rows: Vec<ListedAlbum> = albums
        .iter()
        .map(|a| ListedAlbum {
            id: &a.id,
            name: &a.album_name,
            key: assignment.get(&a.id),
        })
        .collect();
    if json {
        let encoded = serde_json::to_string_pretty(&rows)
            .map_err(|e| AppError::Encode(e.to_string()))?;
        writeln!(out, "{encoded}")?;
        return Ok(());
    }
    let width = rows
        .iter()
        .filter_map(|r| r.key.map(str::len))
        .max()
        .unwrap_or(0)
        .max(2);
    for r in &rows {
        writeln!(out, "{:<width$}  {}", r.key.unwrap_or("--"), r.name)?;
    }
    Ok(())
}

/// Feeds `keys` through the matcher and returns the exit status.
///
/// A match prints the album id to `out` and yields 0. Anything else explains
/// the final matcher state on `err` and yields 1.
pub fn select(
    albums: &[Album],
    keys: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, AppError> {
    let assignment = acekey::assign_keybindings(&entities(albums));
    let mut state = InputState::new();
    match acekey::step_all(&assignment, &mut state, keys) {
        MatchOutcome::Matched(id) => {
            writeln!(out, "{id}")?;
            Ok(0)
        }
        MatchOutcome::Partial(buffer) => {
            let pending: Vec<&str> = assignment.completions(&buffer).map(|(_, k)| k).collect();
            writeln!(err, "{buffer:?} is incomplete; continues as {}", pending.join(", "))?;
            Ok(1)
        }
        MatchOutcome::Rejected { ch, buffer } => {
            writeln!(err, "no shortcut continues {buffer:?} with {ch:?}")?;
            Ok(1)
        }
        MatchOutcome::Empty => {
            writeln!(err, "no keys given")?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod commands_tests {
    use super::*;

    fn albums() -> Vec<Album> {
        vec![
            Album::new("1", "Apple"),
            Album::new("2", "Comics"),
            Album::new("3", "Communism"),
            Album::new("4", "!!!"),
        ]
    }

    fn run_select(keys: &str) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = select(&albums(), keys, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn select_prints_the_matched_id() {
        assert_eq!(run_select("comm"), (0, "3\n".to_string(), String::new()));
        assert_eq!(run_select("a").1, "1\n");
    }

    #[test]
    fn select_stops_at_the_first_match() {
        let (code, out, _) = run_select("axyz");
        assert_eq!(code, 0);
        assert_eq!(out, "1\n");
    }

    #[test]
    fn select_reports_an_incomplete_prefix() {
        let (code, out, err) = run_select("co");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "\"co\" is incomplete; continues as comi, comm\n");
    }

    #[test]
    fn select_reports_a_rejected_character() {
        let (code, out, err) = run_select("cox");
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "no shortcut continues \"co\" with 'x'\n");
    }

    #[test]
    fn select_without_keys_fails() {
        assert_eq!(run_select(""), (1, String::new(), "no keys given\n".to_string()));
    }

    #[test]
    fn list_table_marks_unbound_albums() {
        let mut out = Vec::new();
        list(&albums(), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["a     Apple", "comi  Comics", "comm  Communism", "--    !!!"]
        );
    }

    #[test]
    fn list_json_has_null_for_unbound_albums() {
        let mut out = Vec::new();
        list(&albums(), true, &mut out).unwrap();
        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            rows,
            serde_json::json!([
                {"id": "1", "name": "Apple", "key": "a"},
                {"id": "2", "name": "Comics", "key": "comi"},
                {"id": "3", "name": "Communism", "key": "comm"},
                {"id": "4", "name": "!!!", "key": null}
            ])
        );
    }
}
