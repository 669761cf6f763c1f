//! Sizzle MCP server library: exposes the pipeline stages as in-process
//! tool calls rather than shelling out to the CLI, since every stage is
//! already a pure, cheap Rust function (no subprocess needed).

pub mod tools;
