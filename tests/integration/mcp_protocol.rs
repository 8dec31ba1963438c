/// JSON-RPC round trips through the MCP server
use wellness_tracker_mcp::*;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn server(dir: &TempDir) -> McpServer {
    let wellness = WellnessTrackerServer::new(dir.path().join("wellness.db"))
        .await
        .expect("Failed to create server");
    McpServer::new(wellness)
}

async fn call(server: &mut McpServer, id: u64, name: &str, arguments: Value) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    });
    let response = server
        .process_line(&request.to_string())
        .await
        .expect("tools/call must be answered");
    assert!(response.error.is_none());
    response.result.expect("result present")
}

#[tokio::test]
async fn test_initialize_handshake() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let response = server
        .process_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1"}}}"#)
        .await
        .unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["serverInfo"]["name"], "Wellness Tracker MCP");
    assert_eq!(result["protocolVersion"], "2024-11-05");

    let notification = server
        .process_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await;
    assert!(notification.is_none());
    assert!(server.is_initialized());
}

#[tokio::test]
async fn test_tools_list_advertises_schemas() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let response = server
        .process_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    let tools = response.result.unwrap()["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 21);

    let mood_log = tools.iter().find(|t| t["name"] == "mood_log").unwrap();
    assert_eq!(mood_log["inputSchema"]["required"], json!(["mood"]));
}

#[tokio::test]
async fn test_mood_log_and_stats_via_tools() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let logged = call(&mut server, 3, "mood_log", json!({"mood": "Amazing", "note": "sunny"})).await;
    assert_eq!(logged["isError"], false);
    assert_eq!(logged["structuredContent"]["entry"]["value"], 5);

    let stats = call(&mut server, 4, "wellness_stats", json!({})).await;
    assert_eq!(stats["structuredContent"]["stats"]["totalMoodEntries"], 1);
    assert_eq!(stats["structuredContent"]["stats"]["currentStreak"], 1);
}

#[tokio::test]
async fn test_tool_failures_are_error_results() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let invalid = call(&mut server, 5, "mood_log", json!({"mood": "meh"})).await;
    assert_eq!(invalid["isError"], true);

    let missing = call(&mut server, 6, "journal_save", json!({"title": "No content"})).await;
    assert_eq!(missing["isError"], true);

    let unknown = call(&mut server, 7, "habit_create", json!({})).await;
    assert_eq!(unknown["isError"], true);
}

#[tokio::test]
async fn test_settings_and_breathing_plan() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let updated = call(&mut server, 8, "settings_update", json!({"breathingDuration": 1, "theme": "dark"})).await;
    assert_eq!(updated["structuredContent"]["settings"]["theme"], "dark");

    let plan = call(&mut server, 9, "breathing_plan", json!({"pattern": "box"})).await;
    assert_eq!(plan["structuredContent"]["full_cycles"], 3);
}

#[tokio::test]
async fn test_unknown_method_and_bad_json() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let response = server
        .process_line(r#"{"jsonrpc":"2.0","id":10,"method":"resources/list"}"#)
        .await
        .unwrap();
    assert_eq!(response.error.unwrap().code, -32601);

    let response = server.process_line("{not json").await.unwrap();
    assert_eq!(response.error.unwrap().code, -32700);
}

#[tokio::test]
async fn test_track_catalog_and_favorites() {
    let dir = TempDir::new().unwrap();
    let mut server = server(&dir).await;

    let toggled = call(&mut server, 11, "favorite_toggle", json!({"track_id": "sleep-3"})).await;
    assert_eq!(toggled["isError"], false);
    assert_eq!(toggled["structuredContent"]["is_favorite"], true);

    let unknown = call(&mut server, 12, "favorite_toggle", json!({"track_id": "sleep-99"})).await;
    assert_eq!(unknown["isError"], true);

    let sleep = call(&mut server, 13, "track_list", json!({"genre": "sleep"})).await;
    let tracks = sleep["structuredContent"]["tracks"].as_array().unwrap().clone();
    assert_eq!(tracks.len(), 15);
    let favorites: Vec<&Value> = tracks.iter().filter(|t| t["is_favorite"] == true).collect();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["id"], "sleep-3");

    let listed = call(&mut server, 14, "favorite_list", json!({})).await;
    assert_eq!(listed["structuredContent"]["favorites"].as_array().unwrap().len(), 1);
}
