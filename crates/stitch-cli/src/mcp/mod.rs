//! MCP server implementation for Stitch
//!
//! This module implements the Model Context Protocol server for Stitch,
//! providing a standardized interface for AI models to plan plush toy
//! delivery schedules. One editing session lives for the whole server
//! process; every mutating tool answers with the refreshed schedule
//! overview so the model never works against stale state.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use stitch_core::Session;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{
    EventDate, McpResult, OrderDate, RevisionId, RevisionMethod, SampleMethod, ScenarioQuery,
    SelectScenario, Speed,
};

/// MCP server for Stitch
#[derive(Clone)]
pub struct StitchMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StitchMcpServer {
    /// Create a new Stitch MCP server with a fresh editing session
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "set_order_date",
        description = "Set or clear the date production can begin (YYYY-MM-DD, omit to clear). Setting it enumerates all 28 delivery scenarios and applies the recommended one on the first set of a planning round. Clearing it wipes the scenario list and stage choices for a fresh round."
    )]
    async fn set_order_date(&self, params: Parameters<OrderDate>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.set_order_date(params).await
    }

    #[tool(
        name = "set_event_date",
        description = "Set or clear the delivery deadline (YYYY-MM-DD, omit to clear). The schedule overview compares it against the projected completion date and reports whether the delivery is on track or at risk."
    )]
    async fn set_event_date(&self, params: Parameters<EventDate>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.set_event_date(params).await
    }

    #[tool(
        name = "list_scenarios",
        description = "List delivery scenarios grouped by production speed, fastest first with the recommended scenario pinned to the top. Reads the session's scenarios by default; pass order_date for a one-shot preview that leaves the session untouched. Optional speed filter: 'normal' or 'express'."
    )]
    async fn list_scenarios(&self, params: Parameters<ScenarioQuery>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.list_scenarios(params).await
    }

    #[tool(
        name = "select_scenario",
        description = "Apply a scenario by id (e.g. 'photo-1-physical-normal'), overwriting all stage choices at once. Omit the id to clear the selection while keeping the current stage values as a manual configuration. Unknown ids are an error; listing first avoids typos."
    )]
    async fn select_scenario(&self, params: Parameters<SelectScenario>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.select_scenario(params).await
    }

    #[tool(
        name = "set_initial_sample",
        description = "Choose how the initial sample is confirmed: 'photo' (2 weeks) or 'physical' (3 weeks, sample is shipped for approval). Editing a stage directly drops any applied scenario and marks the schedule manually configured."
    )]
    async fn set_initial_sample(&self, params: Parameters<SampleMethod>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.set_initial_sample(params).await
    }

    #[tool(
        name = "set_production_speed",
        description = "Choose the production run speed: 'normal' (5 weeks) or 'express' (2 weeks at a premium). Editing a stage directly drops any applied scenario and marks the schedule manually configured."
    )]
    async fn set_production_speed(&self, params: Parameters<Speed>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.set_production_speed(params).await
    }

    #[tool(
        name = "add_revision",
        description = "Append a revision round to the schedule, up to the cap of 2. New rounds default to photo confirmation; use set_revision_method to change one. Adding beyond the cap reports no change."
    )]
    async fn add_revision(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.add_revision().await
    }

    #[tool(
        name = "remove_revision",
        description = "Remove one revision round by the id shown in the schedule overview and timeline. Unknown ids leave the schedule unchanged and report no change."
    )]
    async fn remove_revision(&self, params: Parameters<RevisionId>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.remove_revision(params).await
    }

    #[tool(
        name = "set_revision_method",
        description = "Change the confirmation method of one revision round by id: 'photo' (1 week) or 'physical' (2 weeks, sample is shipped). Unknown ids leave the schedule unchanged and report no change."
    )]
    async fn set_revision_method(&self, params: Parameters<RevisionMethod>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.set_revision_method(params).await
    }

    #[tool(
        name = "show_schedule",
        description = "Display the current schedule: order and event dates, selection state, the projected stage-by-stage timeline with week offsets and start dates, total weeks, completion date, and the risk verdict."
    )]
    async fn show_schedule(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.show_schedule().await
    }

    #[tool(
        name = "reset_session",
        description = "Discard all dates, stage choices, and the scenario list, returning to a fresh session. Use when starting to plan a different order."
    )]
    async fn reset_session(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.reset_session().await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.session.clone());
        handlers.get_prompt(request, context).await
    }
}

impl Default for StitchMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StitchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "stitch".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Stitch plans delivery schedules for made-to-order plush toy runs. An order moves through sample confirmation, optional revision rounds, and production; Stitch projects when each stage starts and whether the finished order beats an event deadline.

## Core Concepts
- **Schedule**: the working state - order date, optional event date, and the stage choices (initial sample method, up to 2 revision rounds, production speed)
- **Scenario**: one complete stage combination with its total weeks and completion date; every order date yields 28 of them
- **Risk verdict**: a delivery is at risk when the event date falls before the projected completion date

## Stage Durations
- Initial sample: photo confirmation 2 weeks, physical sample 3 weeks
- Revision round: photo 1 week, physical 2 weeks
- Production: normal 5 weeks, express 2 weeks

## Workflow
1. `set_order_date` - enumerates the scenarios and applies the recommended one (photo sample, one physical revision, normal production)
2. `set_event_date` - enables the risk verdict in the schedule overview
3. `list_scenarios` - review the options, fastest first, grouped by production speed
4. `select_scenario` for a listed combination, or the stage tools for a custom mix
5. `show_schedule` - read the timeline, total weeks, completion date, and verdict

Every mutating tool echoes the refreshed schedule overview, so a separate show_schedule call is only needed after a stretch of read-only work.

## Tool Categories
- **Dates**: set_order_date, set_event_date
- **Scenario Selection**: list_scenarios, select_scenario
- **Manual Stages**: set_initial_sample, set_production_speed, add_revision, remove_revision, set_revision_method
- **Session**: show_schedule, reset_session

## Trade-offs to Surface
Physical samples and extra revision rounds catch defects before a full run; photo confirmation and express production save weeks. Present the trade-off to the customer instead of silently optimizing for speed."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StitchMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stitch MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
