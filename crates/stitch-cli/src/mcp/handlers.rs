//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stitch_core::{
    params as core, ActionOutcome, CalendarDate, ScenarioList, Schedule, ScheduleError, Session,
};
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// The core's param structs only opt into `JsonSchema` behind the `schema`
// feature; the Deserialize + JsonSchema pairing the rmcp tool macros expect
// lives here instead. `#[serde(transparent)]` makes the wrapper invisible on
// the wire, so tool arguments deserialize straight into the core types.

/// Transparent MCP wrapper giving a core param type the derives the tool
/// router needs, without a hand-written wrapper struct per tool.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type OrderDate = McpParams<core::OrderDate>;
pub type EventDate = McpParams<core::EventDate>;
pub type SelectScenario = McpParams<core::SelectScenario>;
pub type SampleMethod = McpParams<core::SampleMethod>;
pub type Speed = McpParams<core::Speed>;
pub type RevisionId = McpParams<core::RevisionId>;
pub type RevisionMethod = McpParams<core::RevisionMethod>;
pub type ScenarioQuery = McpParams<core::ScenarioQuery>;

pub type McpResult = Result<CallToolResult, McpError>;

/// Render a mutation outcome followed by the refreshed schedule overview,
/// so the model always sees the state it is now working with.
fn state_result(outcome: &ActionOutcome, session: &Session) -> CallToolResult {
    let text = format!("{}\n{}", outcome, session.schedule());
    CallToolResult::success(vec![Content::text(text)])
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    /// Set or clear the order date, re-enumerating scenarios.
    pub async fn set_order_date(&self, Parameters(params): Parameters<OrderDate>) -> McpResult {
        debug!("set_order_date: {:?}", params);

        let date = params
            .as_ref()
            .validate()
            .map_err(|e| to_mcp_error("Failed to set order date", &e))?;

        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.set_order_date(date);

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change("Order date unchanged")
        } else {
            match date {
                Some(date) => {
                    ActionOutcome::applied(format!("Order date set to {}", CalendarDate(&date)))
                }
                None => ActionOutcome::applied("Order date cleared"),
            }
        };

        Ok(state_result(&outcome, &session))
    }

    /// Set or clear the event date used for the risk verdict.
    pub async fn set_event_date(&self, Parameters(params): Parameters<EventDate>) -> McpResult {
        debug!("set_event_date: {:?}", params);

        let date = params
            .as_ref()
            .validate()
            .map_err(|e| to_mcp_error("Failed to set event date", &e))?;

        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.set_event_date(date);

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change("Event date unchanged")
        } else {
            match date {
                Some(date) => {
                    ActionOutcome::applied(format!("Event date set to {}", CalendarDate(&date)))
                }
                None => ActionOutcome::applied("Event date cleared"),
            }
        };

        Ok(state_result(&outcome, &session))
    }

    /// List scenarios, either for the session or as a one-shot preview.
    pub async fn list_scenarios(&self, Parameters(params): Parameters<ScenarioQuery>) -> McpResult {
        debug!("list_scenarios: {:?}", params);

        let (order_date, speed) = params
            .as_ref()
            .validate()
            .map_err(|e| to_mcp_error("Failed to list scenarios", &e))?;

        // With an explicit order date this is a what-if preview that leaves
        // the server session untouched; without one it reads the session.
        let list = if let Some(date) = order_date {
            let mut preview = Session::new();
            preview.set_order_date(Some(date));
            ScenarioList::new(
                preview.scenarios().to_vec(),
                preview.policy().recommended_id(),
                None,
            )
        } else {
            let session = self.session.lock().await;
            ScenarioList::new(
                session.scenarios().to_vec(),
                session.policy().recommended_id(),
                session.schedule().selected_scenario_id.clone(),
            )
        };
        let list = list.with_speed(speed);

        Ok(CallToolResult::success(vec![Content::text(
            list.to_string(),
        )]))
    }

    /// Apply a scenario by id, or clear the selection with a null id.
    pub async fn select_scenario(
        &self,
        Parameters(params): Parameters<SelectScenario>,
    ) -> McpResult {
        debug!("select_scenario: {:?}", params);

        let target = params.as_ref().scenario_id.clone();
        let mut session = self.session.lock().await;

        if let Some(id) = &target {
            if session.scenarios().is_empty() {
                return Err(to_mcp_error(
                    "Failed to select scenario",
                    &ScheduleError::NoScenarios,
                ));
            }
            if session.find_scenario(id).is_none() {
                return Err(to_mcp_error(
                    "Failed to select scenario",
                    &ScheduleError::scenario_not_found(id.clone()),
                ));
            }
        }

        let before = session.schedule().clone();
        session.select_scenario(target.clone());

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change("Selection unchanged")
        } else {
            match target {
                Some(id) => ActionOutcome::applied(format!("Selected scenario {id}")),
                None => ActionOutcome::applied("Selection cleared"),
            }
        };

        Ok(state_result(&outcome, &session))
    }

    /// Choose how the initial sample is confirmed.
    pub async fn set_initial_sample(
        &self,
        Parameters(params): Parameters<SampleMethod>,
    ) -> McpResult {
        debug!("set_initial_sample: {:?}", params);

        let method = params
            .as_ref()
            .validate()
            .map_err(|e| to_mcp_error("Failed to set initial sample method", &e))?;

        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.set_initial_sample_method(method);

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change(format!("Initial sample method already {method}"))
        } else {
            ActionOutcome::applied(format!("Initial sample method set to {method}"))
        };

        Ok(state_result(&outcome, &session))
    }

    /// Choose the production speed.
    pub async fn set_production_speed(&self, Parameters(params): Parameters<Speed>) -> McpResult {
        debug!("set_production_speed: {:?}", params);

        let speed = params
            .as_ref()
            .validate()
            .map_err(|e| to_mcp_error("Failed to set production speed", &e))?;

        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.set_production_speed(speed);

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change(format!("Production speed already {speed}"))
        } else {
            ActionOutcome::applied(format!("Production speed set to {speed}"))
        };

        Ok(state_result(&outcome, &session))
    }

    /// Append a revision round, up to the cap.
    pub async fn add_revision(&self) -> McpResult {
        debug!("add_revision");

        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.add_revision();

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change(format!(
                "Revision limit of {} reached, schedule unchanged",
                Schedule::MAX_REVISIONS
            ))
        } else {
            match session.schedule().revisions.last() {
                Some(revision) => {
                    ActionOutcome::applied(format!("Added revision {}", revision.id))
                }
                None => ActionOutcome::applied("Added revision"),
            }
        };

        Ok(state_result(&outcome, &session))
    }

    /// Remove a revision round by its id.
    pub async fn remove_revision(&self, Parameters(params): Parameters<RevisionId>) -> McpResult {
        debug!("remove_revision: {:?}", params);

        let id = params.as_ref().revision_id;
        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.remove_revision(id);

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change(format!("No revision {id} to remove"))
        } else {
            ActionOutcome::applied(format!("Removed revision {id}"))
        };

        Ok(state_result(&outcome, &session))
    }

    /// Change the confirmation method of one revision round.
    pub async fn set_revision_method(
        &self,
        Parameters(params): Parameters<RevisionMethod>,
    ) -> McpResult {
        debug!("set_revision_method: {:?}", params);

        let inner = params.as_ref();
        let method = inner
            .validate()
            .map_err(|e| to_mcp_error("Failed to set revision method", &e))?;
        let id = inner.revision_id;

        let mut session = self.session.lock().await;
        let before = session.schedule().clone();
        session.set_revision_method(id, method);

        let outcome = if *session.schedule() == before {
            ActionOutcome::no_change(format!("Revision {id} unchanged"))
        } else {
            ActionOutcome::applied(format!("Revision {id} method set to {method}"))
        };

        Ok(state_result(&outcome, &session))
    }

    /// Render the current schedule overview.
    pub async fn show_schedule(&self) -> McpResult {
        debug!("show_schedule");

        let session = self.session.lock().await;
        Ok(CallToolResult::success(vec![Content::text(
            session.schedule().to_string(),
        )]))
    }

    /// Discard all state and start a fresh planning session.
    pub async fn reset_session(&self) -> McpResult {
        debug!("reset_session");

        let mut session = self.session.lock().await;
        *session = Session::new();

        let outcome = ActionOutcome::applied("Session reset");
        Ok(state_result(&outcome, &session))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .into_iter()
            .map(|template| {
                let arguments = template
                    .arguments
                    .into_iter()
                    .map(|arg| PromptArgument {
                        name: arg.name,
                        title: None,
                        description: Some(arg.description),
                        required: Some(arg.required),
                    })
                    .collect();
                Prompt::new(&template.name, Some(&template.description), Some(arguments))
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let template = get_prompt_templates()
            .into_iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let args = request.arguments.unwrap_or_default();
        let mut prompt_text = template.template;
        for arg_def in &template.arguments {
            match args.get(&arg_def.name) {
                Some(value) => {
                    let Some(text) = value.as_str() else {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    };
                    let placeholder = format!("{{{}}}", arg_def.name);
                    prompt_text = prompt_text.replace(&placeholder, text);
                }
                None if arg_def.required => {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
                // Optional arguments keep their placeholder; the template
                // tells the model how to read an unfilled one.
                None => {}
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
