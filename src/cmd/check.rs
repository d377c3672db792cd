use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};

use crate::adapters::StorageError;
use crate::adapters::sqlite;
use crate::domain::error::ERRORS_ARRAY_KEY;
use crate::domain::row::ExpectedContent;
use crate::engine::check::{self, CheckReport};
use crate::io::{self, Format, IoError};

/// Input arguments for check command execution API.
#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub db: PathBuf,
    pub table: String,
    pub expected: Option<PathBuf>,
    pub from: Option<Format>,
    pub separator: String,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run_with_stdin<R: Read>(args: &CheckCommandArgs, stdin: R) -> CheckCommandResponse {
    match execute(args, stdin) {
        Ok((report, row_count)) => report_response(args, report, row_count),
        Err(CommandError::InputUsage(message)) => CheckCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": message,
            }),
        },
        Err(CommandError::Storage(error)) => CheckCommandResponse {
            exit_code: 4,
            payload: json!({
                "error": "storage_access_error",
                "message": error.to_string(),
                "table": args.table,
            }),
        },
    }
}

fn report_response(
    args: &CheckCommandArgs,
    report: CheckReport,
    expected_rows: usize,
) -> CheckCommandResponse {
    match report.error {
        None => CheckCommandResponse {
            exit_code: 0,
            payload: json!({
                "matched": true,
                "table": args.table,
                "expected_rows": expected_rows,
            }),
        },
        Some(error) => CheckCommandResponse {
            exit_code: 2,
            payload: json!({
                "matched": false,
                "table": args.table,
                "domain": error.domain(),
                "code": error.code(),
                ERRORS_ARRAY_KEY: error.messages(),
                "formatted": check::format_errors_with(&error, &args.separator),
            }),
        },
    }
}

fn execute<R: Read>(
    args: &CheckCommandArgs,
    stdin: R,
) -> Result<(CheckReport, usize), CommandError> {
    let expected = load_expected(args, stdin)?;
    let conn = sqlite::open_read_only(&args.db).map_err(CommandError::Storage)?;
    let report =
        check::check_table(&conn, &args.table, &expected).map_err(CommandError::Storage)?;
    Ok((report, expected.len()))
}

fn load_expected<R: Read>(
    args: &CheckCommandArgs,
    stdin: R,
) -> Result<ExpectedContent, CommandError> {
    let format = io::resolve_input_format(args.from, args.expected.as_deref())
        .map_err(map_io_as_input_usage)?;
    if let Some(path) = &args.expected {
        let file = File::open(path).map_err(|err| {
            CommandError::InputUsage(format!(
                "failed to open expected rows file `{}`: {err}",
                path.display()
            ))
        })?;
        io::reader::read_expected_rows(file, format).map_err(map_io_as_input_usage)
    } else {
        io::reader::read_expected_rows(stdin, format).map_err(map_io_as_input_usage)
    }
}

fn map_io_as_input_usage(error: IoError) -> CommandError {
    CommandError::InputUsage(error.to_string())
}

enum CommandError {
    InputUsage(String),
    Storage(StorageError),
}
