/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads JSON-RPC requests from stdin
/// 2. Routes tool calls to the wellness store
/// 3. Sends JSON-RPC responses to stdout

use std::collections::HashMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::analytics::InsightsParams;
use crate::domain::SettingsPatch;
use crate::mcp::protocol::*;
use crate::storage::StorageError;
use crate::tools;
use crate::{ServerError, WellnessTrackerServer};

/// MCP server that handles communication with the client
pub struct McpServer {
    wellness: WellnessTrackerServer,
    initialized: bool,
}

impl McpServer {
    pub fn new(wellness: WellnessTrackerServer) -> Self {
        Self {
            wellness,
            initialized: false,
        }
    }

    /// Whether the client has completed the initialize handshake
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (stdin closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line).await {
                        let response_str = serde_json::to_string(&response)?;

                        stdout.write_all(response_str.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications.
    pub async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    json!(null),
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version '{}'", request.jsonrpc),
                None,
            ));
        }

        if request.is_notification() {
            if request.method == "notifications/initialized" {
                self.initialized = true;
            }
            debug!("Received notification {}", request.method);
            return None;
        }

        Some(self.handle_request(request).await)
    }

    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request).await,
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, json!(null))
            }
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request).await,
            "tools/call" => self.handle_tools_call(request).await,
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    async fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let client = request
            .params
            .clone()
            .and_then(|p| serde_json::from_value::<InitializeParams>(p).ok());
        match client {
            Some(InitializeParams { client_info: Some(info), protocol_version }) => info!(
                "MCP client connected: {} {} (protocol {})",
                info.name,
                info.version.unwrap_or_default(),
                protocol_version.unwrap_or_default()
            ),
            _ => info!("MCP client connected"),
        }

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Wellness Tracker MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => internal_error(request.id, e),
        }
    }

    async fn handle_tools_list(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(request.id, json!({ "tools": tool_definitions() }))
    }

    async fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        if !self.initialized {
            debug!("Tool {} called before initialization", tool_params.name);
        }

        let result = self.call_tool(&tool_params.name, tool_params.arguments);

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => internal_error(request.id, e),
        }
    }

    /// Route a tool call by name
    fn call_tool(&self, name: &str, args: HashMap<String, Value>) -> ToolCallResult {
        let store = self.wellness.store();
        debug!("Calling tool {}", name);

        match name {
            "mood_log" => invoke(args, |p| tools::log_mood(store, p)),
            "mood_list" => invoke(args, |p| tools::list_moods(store, p)),
            "mood_delete" => invoke(args, |p| tools::delete_mood(store, p)),
            "journal_save" => invoke(args, |p| tools::save_journal(store, p)),
            "journal_list" => invoke(args, |p| tools::list_journals(store, p)),
            "journal_delete" => invoke(args, |p| tools::delete_journal(store, p)),
            "journal_restore" => invoke(args, |p| tools::restore_journal(store, p)),
            "prompt_today" => invoke(args, |p| tools::prompt_today(store, p)),
            "prompt_save" => invoke(args, |p| tools::save_prompt(store, p)),
            "prompt_list" => invoke(args, |p| tools::list_prompts(store, p)),
            "favorite_toggle" => invoke(args, |p| tools::toggle_favorite(store, p)),
            "favorite_list" => invoke(args, |p| tools::list_favorites(store, p)),
            "track_list" => invoke(args, |p| tools::list_tracks(store, p)),
            "settings_get" => invoke(args, |p| tools::get_settings(store, p)),
            "settings_update" => invoke(args, |p| tools::update_settings(store, p)),
            "wellness_stats" => {
                invoke(args, |p| tools::get_wellness_stats(self.wellness.analytics(), store, p))
            }
            "mood_trend" => invoke(args, |p| tools::get_mood_trend(store, p)),
            "breathing_plan" => invoke(args, |p| tools::breathing_plan(store, p)),
            "data_export" => invoke(args, |p| tools::export_data(store, p)),
            "data_import" => invoke(args, |p| tools::import_data(store, p)),
            "data_clear" => invoke(args, |p| tools::clear_data(store, p)),
            _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
        }
    }
}

/// Parse the arguments into `P`, run the tool and wrap its response
///
/// The response's `message` field becomes the text content; the full
/// response is attached as structured content.
fn invoke<P, R, F>(args: HashMap<String, Value>, tool: F) -> ToolCallResult
where
    P: DeserializeOwned,
    R: Serialize,
    F: FnOnce(P) -> Result<R, StorageError>,
{
    let params: P = match serde_json::from_value(Value::Object(args.into_iter().collect())) {
        Ok(params) => params,
        Err(e) => return ToolCallResult::error(format!("Invalid arguments: {}", e)),
    };

    match tool(params) {
        Ok(response) => match serde_json::to_value(&response) {
            Ok(value) => {
                let text = value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string());
                ToolCallResult::success(text).with_structured(value)
            }
            Err(e) => ToolCallResult::error(format!("Failed to encode response: {}", e)),
        },
        Err(e) => {
            warn!("Tool call failed: {}", e);
            ToolCallResult::from_storage_error(&e)
        }
    }
}

fn internal_error(id: Value, e: serde_json::Error) -> JsonRpcResponse {
    error!("Failed to encode result: {}", e);
    JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string(), None)
}

fn definition<P: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    let schema = schemars::schema_for!(P);
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: serde_json::to_value(schema).unwrap_or_else(|_| json!({ "type": "object" })),
    }
}

/// Every tool the server exposes, with schemas derived from the parameter types
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        definition::<tools::LogMoodParams>(
            "mood_log",
            "Log how you feel right now: Amazing, Good, Okay, Not Great or Difficult, with an optional note",
        ),
        definition::<tools::ListMoodsParams>("mood_list", "List logged moods, most recent first"),
        definition::<tools::EntryIdParams>("mood_delete", "Delete a mood entry by id"),
        definition::<tools::SaveJournalParams>(
            "journal_save",
            "Write a new journal entry, or edit one by passing its id",
        ),
        definition::<tools::ListJournalsParams>(
            "journal_list",
            "List journal entries, most recent first, optionally filtered by a search term",
        ),
        definition::<tools::EntryIdParams>(
            "journal_delete",
            "Delete a journal entry by id; the deleted entry is returned so it can be restored",
        ),
        definition::<tools::RestoreJournalParams>(
            "journal_restore",
            "Undo a journal delete by putting the entry back under its original id",
        ),
        definition::<tools::PromptTodayParams>(
            "prompt_today",
            "Get today's uplifting prompt, optionally from one category",
        ),
        definition::<tools::SavePromptParams>("prompt_save", "Save a prompt to your collection"),
        definition::<tools::NoParams>("prompt_list", "List your saved prompts"),
        definition::<tools::ToggleFavoriteParams>(
            "favorite_toggle",
            "Add a catalog track to favorites, or remove it if it is already there",
        ),
        definition::<tools::NoParams>("favorite_list", "List favorite tracks"),
        definition::<tools::ListTracksParams>(
            "track_list",
            "Browse the ambient, chill, sleep and study track catalog, with favorites marked",
        ),
        definition::<tools::NoParams>("settings_get", "Show current settings"),
        definition::<SettingsPatch>(
            "settings_update",
            "Change settings; only the fields given are updated",
        ),
        definition::<InsightsParams>(
            "wellness_stats",
            "Mood streak, average mood, totals and insights about recent trends",
        ),
        definition::<tools::MoodTrendParams>(
            "mood_trend",
            "Average mood per day over the last week or month, with the overall trend",
        ),
        definition::<tools::BreathingPlanParams>(
            "breathing_plan",
            "Plan a guided breathing exercise (box or 4-7-8) and see its phases and cycles",
        ),
        definition::<tools::NoParams>("data_export", "Export all wellness data as a JSON backup"),
        definition::<tools::ImportParams>(
            "data_import",
            "Restore collections from a JSON backup; nothing changes if the backup is invalid",
        ),
        definition::<tools::ClearParams>("data_clear", "Permanently delete all wellness data"),
    ]
}
