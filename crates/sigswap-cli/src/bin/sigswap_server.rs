//! sigswap-server: persistent refactoring queries over a stdio JSON protocol.
//!
//! One request per line on stdin, one response line each on stdout, in
//! order. Opened files stay parsed in memory, so repeated queries against
//! the same project touch no disk.
//!
//! Request types:
//! ```json
//! {"command": "open", "seq": 1, "file": "main.ts", "text": "function f(a, b) {}"}
//! {"command": "close", "seq": 2, "file": "main.ts"}
//! {"command": "getSignatureParameters", "seq": 3, "file": "main.ts", "position": 9}
//! {"command": "sortSignatureParameters", "seq": 4, "file": "main.ts", "position": 9, "orders": [1, 0]}
//! {"command": "swapSignatureParameters", "seq": 5, "file": "main.ts", "position": 9, "from": 0, "to": -1}
//! {"command": "shutdown", "seq": 6}
//! ```
//!
//! Responses are `{"seq": n, "body": ...}` on success and
//! `{"seq": n, "error": "..."}` for lines that do not parse as a request.
//! Service misses are not errors; they come back as empty bodies.
//!
//! Usage:
//! ```bash
//! echo '{"command":"open","seq":1,"file":"main.ts","text":"function f(a, b) {}"}' | sigswap-server
//! ```

use std::io::{BufRead, BufReader, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use sigswap_service::{
    FileTextChanges, ParameterInfo, ParameterUpdate, Project, get_signature_parameters,
    sort_signature_parameters, swap_signature_parameters,
};
use sigswap_syntax::ParseDiagnostic;

/// Request from client
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
enum Request {
    /// Parse a file and keep it in the project, replacing any old version.
    Open { seq: u64, file: String, text: String },
    /// Drop a file from the project.
    Close { seq: u64, file: String },
    /// List the parameters of the signature at a position.
    GetSignatureParameters { seq: u64, file: String, position: u32 },
    /// Compute the edits for an explicit order list.
    SortSignatureParameters { seq: u64, file: String, position: u32, orders: Vec<Option<u32>> },
    /// Compute the edits that move one parameter. A negative `to` deletes it.
    SwapSignatureParameters { seq: u64, file: String, position: u32, from: u32, to: i64 },
    /// Graceful shutdown.
    Shutdown { seq: u64 },
}

/// Response to client
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Open(OpenResponse),
    Parameters(ParametersResponse),
    Changes(ChangesResponse),
    Ok(OkResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize)]
struct OpenResponse {
    seq: u64,
    body: OpenBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpenBody {
    file_name: String,
    diagnostics: Vec<ParseDiagnostic>,
}

#[derive(Debug, Serialize)]
struct ParametersResponse {
    seq: u64,
    body: Vec<ParameterInfo>,
}

#[derive(Debug, Serialize)]
struct ChangesResponse {
    seq: u64,
    body: Vec<FileTextChanges>,
}

#[derive(Debug, Serialize)]
struct OkResponse {
    seq: u64,
    body: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    seq: u64,
    error: String,
}

/// Server state: the project of currently opened files.
struct Server {
    project: Project,
}

impl Server {
    fn new() -> Server {
        Server { project: Project::new() }
    }

    fn handle_request(&mut self, request: Request) -> Response {
        match request {
            Request::Open { seq, file, text } => self.handle_open(seq, file, text),
            Request::Close { seq, file } => {
                let removed = self.project.remove_file(&file);
                Response::Ok(OkResponse { seq, body: removed })
            }
            Request::GetSignatureParameters { seq, file, position } => {
                let body = get_signature_parameters(&self.project, &file, position);
                Response::Parameters(ParametersResponse { seq, body })
            }
            Request::SortSignatureParameters { seq, file, position, orders } => {
                let update = ParameterUpdate::Reorder { orders };
                let body = sort_signature_parameters(&self.project, &file, position, &update);
                Response::Changes(ChangesResponse { seq, body })
            }
            Request::SwapSignatureParameters { seq, file, position, from, to } => {
                let body = swap_signature_parameters(&self.project, &file, position, from, to);
                Response::Changes(ChangesResponse { seq, body })
            }
            Request::Shutdown { seq } => Response::Ok(OkResponse { seq, body: true }),
        }
    }

    fn handle_open(&mut self, seq: u64, file: String, text: String) -> Response {
        let source = self.project.add_file(file, text);
        Response::Open(OpenResponse {
            seq,
            body: OpenBody {
                file_name: source.file_name().to_string(),
                diagnostics: source.diagnostics().to_vec(),
            },
        })
    }
}

/// Answers requests line by line until shutdown or end of input.
fn run(reader: impl BufRead, mut writer: impl Write) -> Result<()> {
    let mut server = Server::new();

    for line in reader.lines() {
        let line = line.context("failed to read from stdin")?;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        let request: Request = match serde_json::from_str(&line) {
            Ok(request) => request,
            Err(e) => {
                let response = Response::Error(ErrorResponse {
                    seq: salvage_seq(&line),
                    error: format!("invalid request: {e}"),
                });
                writeln!(writer, "{}", serde_json::to_string(&response)?)?;
                writer.flush()?;
                continue;
            }
        };

        let is_shutdown = matches!(request, Request::Shutdown { .. });
        let response = server.handle_request(request);

        writeln!(writer, "{}", serde_json::to_string(&response)?)?;
        writer.flush()?;

        if is_shutdown {
            break;
        }
    }

    Ok(())
}

/// Digs the sequence number out of a line that failed to parse, so the
/// error response still correlates with the request.
fn salvage_seq(line: &str) -> u64 {
    serde_json::from_str::<serde_json::Value>(line)
        .ok()
        .and_then(|value| value.get("seq")?.as_u64())
        .unwrap_or(0)
}

fn main() -> Result<()> {
    // Logs go to stderr so they cannot interfere with the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    eprintln!("sigswap-server ready");

    let stdin = BufReader::new(std::io::stdin());
    let stdout = std::io::stdout();
    run(stdin, stdout)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn open(server: &mut Server, seq: u64, file: &str, text: &str) -> Response {
        server.handle_request(Request::Open {
            seq,
            file: file.to_string(),
            text: text.to_string(),
        })
    }

    fn to_value(response: &Response) -> serde_json::Value {
        serde_json::to_value(response).expect("responses serialize")
    }

    #[test]
    fn protocol_lines_parse_as_requests() {
        let lines = [
            r#"{"command": "open", "seq": 1, "file": "main.ts", "text": "function f(a, b) {}"}"#,
            r#"{"command": "close", "seq": 2, "file": "main.ts"}"#,
            r#"{"command": "getSignatureParameters", "seq": 3, "file": "main.ts", "position": 9}"#,
            r#"{"command": "sortSignatureParameters", "seq": 4, "file": "main.ts", "position": 9, "orders": [1, null]}"#,
            r#"{"command": "swapSignatureParameters", "seq": 5, "file": "main.ts", "position": 9, "from": 0, "to": -1}"#,
            r#"{"command": "shutdown", "seq": 6}"#,
        ];
        for line in lines {
            let parsed: Result<Request, _> = serde_json::from_str(line);
            assert!(parsed.is_ok(), "{line}: {parsed:?}");
        }
    }

    #[test]
    fn open_reports_parse_diagnostics() {
        let mut server = Server::new();

        let clean = to_value(&open(&mut server, 1, "ok.ts", "function f(a, b) {}"));
        assert_eq!(clean["seq"], 1);
        assert_eq!(clean["body"]["fileName"], "ok.ts");
        assert_eq!(clean["body"]["diagnostics"].as_array().map(Vec::len), Some(0));

        let broken = to_value(&open(&mut server, 2, "bad.ts", "const 5;\nfunction ok(a) {}"));
        assert!(broken["body"]["diagnostics"].as_array().is_some_and(|d| !d.is_empty()));
    }

    #[test]
    fn queries_answer_against_opened_files() {
        let mut server = Server::new();
        open(&mut server, 1, "main.ts", "function f(a, b) {}\nf(1, 2);");

        let params = to_value(&server.handle_request(Request::GetSignatureParameters {
            seq: 2,
            file: "main.ts".to_string(),
            position: 9,
        }));
        assert_eq!(params["body"][0]["name"], "a");
        assert_eq!(params["body"][1]["name"], "b");

        let changes = to_value(&server.handle_request(Request::SortSignatureParameters {
            seq: 3,
            file: "main.ts".to_string(),
            position: 9,
            orders: vec![Some(1), Some(0)],
        }));
        assert_eq!(changes["seq"], 3);
        assert_eq!(changes["body"][0]["fileName"], "main.ts");
        assert_eq!(changes["body"][0]["textChanges"][0]["newText"], "b, a");
        assert_eq!(changes["body"][0]["textChanges"][1]["newText"], "2, 1");
    }

    #[test]
    fn close_drops_the_file_from_the_project() {
        let mut server = Server::new();
        open(&mut server, 1, "main.ts", "function f(a, b) {}");

        let closed = to_value(&server.handle_request(Request::Close {
            seq: 2,
            file: "main.ts".to_string(),
        }));
        assert_eq!(closed["body"], true);

        let again = to_value(&server.handle_request(Request::Close {
            seq: 3,
            file: "main.ts".to_string(),
        }));
        assert_eq!(again["body"], false);

        let params = to_value(&server.handle_request(Request::GetSignatureParameters {
            seq: 4,
            file: "main.ts".to_string(),
            position: 9,
        }));
        assert_eq!(params["body"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn run_answers_in_order_and_stops_at_shutdown() {
        let input = r#"{"command": "open", "seq": 1, "file": "main.ts", "text": "function f(a, b) {}"}

{"command": "shutdown", "seq": 2}
{"command": "getSignatureParameters", "seq": 3, "file": "main.ts", "position": 9}
"#;
        let mut output = Vec::new();
        run(Cursor::new(input.as_bytes()), &mut output).expect("run succeeds");

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .expect("output is utf-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("each response is JSON"))
            .collect();

        // The empty line is skipped and nothing after shutdown is answered.
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["seq"], 1);
        assert_eq!(lines[1]["seq"], 2);
        assert_eq!(lines[1]["body"], true);
    }

    #[test]
    fn malformed_lines_get_error_responses() {
        let input = "{\"command\": \"nope\", \"seq\": 9}\nnot json at all\n";
        let mut output = Vec::new();
        run(Cursor::new(input.as_bytes()), &mut output).expect("run succeeds");

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .expect("output is utf-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("each response is JSON"))
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["seq"], 9);
        assert!(lines[0]["error"].as_str().is_some_and(|e| e.contains("invalid request")));
        assert_eq!(lines[1]["seq"], 0);
        assert!(lines[1]["error"].as_str().is_some());
    }
}
