use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::methods;
use crate::protocol::{JsonRpcError, JsonRpcMessage, JsonRpcResponse, JSONRPC_VERSION};

pub const DEFAULT_SERVER_NAME: &str = "calc";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROTOCOL_VERSION: &str = "2.0";

/// Run the server on stdio. Blocks until stdin is closed.
pub fn run_stdio(name: &str) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_server(stdin.lock(), stdout.lock(), name)
}

/// Serve line-delimited JSON-RPC requests from `input` until EOF.
pub fn run_server<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    name: &str,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("input read error: {e}");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(response) = handle_line(line, name) {
            write_response(&mut output, &response)?;
        }
    }

    Ok(())
}

/// Handle one raw message. Returns `None` for notifications.
pub fn handle_line(line: &str, name: &str) -> Option<JsonRpcResponse> {
    let msg: JsonRpcMessage = match serde_json::from_str(line) {
        Ok(m) => m,
        Err(e) => {
            error!("invalid JSON-RPC: {e}");
            return Some(JsonRpcResponse::fail(
                Value::Null,
                JsonRpcError::parse_error(e),
            ));
        }
    };

    debug!("request: {}", msg.method());
    if msg.is_notification() {
        return None;
    }
    let id = msg.id.clone().unwrap_or(Value::Null);

    if msg.jsonrpc != JSONRPC_VERSION {
        return Some(JsonRpcResponse::fail(
            id,
            JsonRpcError::unsupported_version(&msg.jsonrpc),
        ));
    }

    let response = match msg.method() {
        "initialize" => handle_initialize(id, name),
        "ping" => JsonRpcResponse::ok(id, json!({})),
        "operations/list" => JsonRpcResponse::ok(id, methods::operation_definitions()),
        "calculate" => methods::handle_calculate(id, &msg.params),
        other => JsonRpcResponse::fail(id, JsonRpcError::method_not_found(other)),
    };
    Some(response)
}

fn write_response<W: Write>(output: &mut W, resp: &JsonRpcResponse) -> anyhow::Result<()> {
    let json = serde_json::to_string(resp)?;
    writeln!(output, "{json}")?;
    output.flush()?;
    Ok(())
}

fn handle_initialize(id: Value, name: &str) -> JsonRpcResponse {
    JsonRpcResponse::ok(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "operations": {}
            },
            "serverInfo": {
                "name": name,
                "version": SERVER_VERSION
            }
        }),
    )
}
