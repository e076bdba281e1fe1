//! CLI command implementations
//!
//! `replay` hosts a [`Session`] over stdin/stdout: every input line is one
//! action, every rejected line yields an error envelope, and the final view
//! is written once at the end (or after every action with `--trace`).

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::compare::{FactClassifier, FetchPayload};
use crate::config::Config;
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope};
use crate::view::{CompareAction, Session};

use super::args::{Command, DEFAULT_CONFIG_PATH};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{read_document, read_lines, write_error_to, write_response, write_response_to};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Replay { config, trace } => replay(&config, trace),
        Command::Classify => classify(),
        Command::InitConfig { config } => init_config(&config),
    }
}

/// Loads configuration. A missing file at the default path means defaults;
/// a missing file anywhere else is an error.
pub fn load_config(path: &Path) -> CliResult<Config> {
    if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
        return Ok(Config::default());
    }

    let config = Config::load(path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", path.display().to_string().as_str())],
    );
    Ok(config)
}

/// Replay actions from stdin
pub fn replay(config_path: &Path, trace: bool) -> CliResult<()> {
    let config = load_config(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    replay_from(&config, trace, stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Replays JSON-line actions from `input` into a new session, writing
/// envelopes to `out`. Returns the session for inspection.
///
/// A rejected line yields an error envelope and replay continues. A failure
/// to read input or write output ends the replay with an error.
pub fn replay_from<R: BufRead, W: Write>(
    config: &Config,
    trace: bool,
    input: R,
    out: &mut W,
) -> CliResult<Session> {
    let mut session = Session::new(config);
    let session_id = session.id().to_string();
    let scope = ObservationScope::with_fields("REPLAY", &[("session", session_id.as_str())]);

    match replay_into(&mut session, trace, input, out) {
        Ok((applied, rejected)) => {
            let applied = applied.to_string();
            let rejected = rejected.to_string();
            scope.complete_with_fields(&[
                ("applied", applied.as_str()),
                ("rejected", rejected.as_str()),
            ]);
            Ok(session)
        }
        Err(err) => {
            scope.fail(err.message());
            Err(err)
        }
    }
}

/// Applies every input line to `session`; returns (applied, rejected).
fn replay_into<R: BufRead, W: Write>(
    session: &mut Session,
    trace: bool,
    input: R,
    out: &mut W,
) -> CliResult<(usize, usize)> {
    let mut applied = 0usize;
    let mut rejected = 0usize;

    for item in read_lines(input) {
        let (line, value) = match item {
            Ok(entry) => entry,
            Err(err) if err.code() == &CliErrorCode::IoError => return Err(err),
            Err(err) => {
                rejected += 1;
                write_error_to(out, err.code_str(), err.message())?;
                continue;
            }
        };

        let action: CompareAction = match serde_json::from_value(value) {
            Ok(action) => action,
            Err(e) => {
                rejected += 1;
                let err = CliError::action_error(format!("line {}: {}", line, e));
                write_error_to(out, err.code_str(), err.message())?;
                continue;
            }
        };

        match session.dispatch(&action) {
            Ok(state) => {
                applied += 1;
                if trace {
                    write_response_to(out, state)?;
                }
            }
            Err(err) => {
                rejected += 1;
                write_error_to(out, err.code().code(), err.message())?;
            }
        }
    }

    write_response_to(
        out,
        &json!({
            "state": session.state(),
            "phase": session.state().phase(),
            "metrics": session.metrics(),
        }),
    )?;

    Ok((applied, rejected))
}

/// Classify a fetch payload read from stdin
pub fn classify() -> CliResult<()> {
    let scope = ObservationScope::new("CLASSIFY");
    let facts = match read_document().and_then(classify_value) {
        Ok(facts) => facts,
        Err(err) => {
            scope.fail(err.message());
            return Err(err);
        }
    };
    write_response(&facts)?;
    scope.complete();
    Ok(())
}

/// Classifies a JSON fetch payload
pub fn classify_value(value: Value) -> CliResult<Value> {
    let payload: FetchPayload = serde_json::from_value(value)
        .map_err(|e| CliError::action_error(format!("Invalid fetch payload: {}", e)))?;
    let facts = FactClassifier::classify(&payload.facts, &payload.systems);
    Ok(json!({ "facts": facts, "systems": payload.systems }))
}

/// Write the default configuration to `path`, refusing to overwrite
pub fn init_config(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::config_error(format!(
            "Config file already exists: {}",
            path.display()
        )));
    }

    let content = serde_json::to_string_pretty(&Config::default())?;
    fs::write(path, content + "\n")?;
    write_response(&json!({ "config": path.display().to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn envelopes(out: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_replay_final_envelope() {
        let input = Cursor::new(
            r#"{"type":"FETCH_COMPARE_PENDING"}
{"type":"FETCH_COMPARE_FULFILLED","payload":{"facts":[{"name":"arch","systems":[{"id":"a","value":"x86_64"}]}],"systems":[{"id":"a"}]}}
"#,
        );
        let mut out = Vec::new();
        let session = replay_from(&Config::default(), false, input, &mut out).unwrap();

        let lines = envelopes(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["data"]["state"]["totalFacts"], 1);
        assert_eq!(lines[0]["data"]["phase"], "ready");
        assert_eq!(session.metrics().actions_dispatched, 2);
    }

    #[test]
    fn test_replay_reports_bad_lines_and_continues() {
        let input = Cursor::new(
            r#"{"type":"NOT_AN_ACTION"}
{"type":"UPDATE_DRIFT_PAGINATION","payload":{"page":0,"perPage":5}}
{"type":"EXPORT_TO_CSV"}
"#,
        );
        let mut out = Vec::new();
        replay_from(&Config::default(), true, input, &mut out).unwrap();

        let lines = envelopes(&out);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["code"], "DRIFT_CLI_ACTION_ERROR");
        assert_eq!(lines[1]["code"], "DRIFT_INVALID_PAGINATION");
        assert_eq!(lines[2]["status"], "ok");
        assert_eq!(lines[3]["data"]["metrics"]["actions_dispatched"], 1);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_replay_fails_when_output_closed() {
        let input = Cursor::new("{\"type\":\"EXPORT_TO_CSV\"}\n");
        let err = replay_from(&Config::default(), true, input, &mut BrokenPipe).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
    }

    #[test]
    fn test_classify_value() {
        let result = classify_value(json!({
            "facts": [{"name": "kernel", "systems": [{"id": "a", "value": "4.18"}]}],
            "systems": [{"id": "a"}, {"id": "b"}]
        }))
        .unwrap();
        assert_eq!(result["facts"][0]["state"], "INCOMPLETE_DATA");
    }

    #[test]
    fn test_classify_rejects_bad_payload() {
        let err = classify_value(json!({"facts": "nope"})).unwrap_err();
        assert_eq!(err.code_str(), "DRIFT_CLI_ACTION_ERROR");
    }
}
