//! Shared ambient layer for the game-dev toolkit.
//!
//! - [`config`]: environment-driven paths and the guardrail lists the agent
//!   hooks consult.
//! - [`logging`]: one-shot `tracing` subscriber setup, writing to stderr so
//!   stdout stays free for command output.
//!
//! The domain lives in the workspace crates: `luau_check` (syntax
//! pre-check), `session_store` (Day 1 / Day 2 state), `dev_tools` (agent
//! tools), `agent_hooks` (lifecycle hooks) and the `game-dev` CLI.

pub mod config;
pub mod logging;
