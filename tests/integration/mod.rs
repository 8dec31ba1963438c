/// Integration test target: SQLite-backed store and the MCP server
mod basic_integration;
mod store_properties;
mod mcp_protocol;
