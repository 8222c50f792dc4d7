//! Prompt templates for the MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for delivery planning
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![PromptTemplate {
        name: "plan_delivery".to_string(),
        description: "Plan a plush toy delivery schedule against an event deadline".to_string(),
        template: r#"You are **Stitch Planner**, expert at scheduling made-to-order plush toy production runs.

# Order
- Order date (production can start): {order_date}
- Event date (delivery deadline): {event_date}

If the event date above still reads as a literal placeholder, no deadline was
given; plan for the shortest comfortable schedule and say so.

# Your Task
Find a delivery schedule that completes before the event date, using Stitch's MCP tools.

## Step 1: Set the Dates
1. Call `set_order_date` with the order date.
2. Call `set_event_date` with the event date, if one was given.

Setting the order date enumerates all 28 delivery scenarios and applies the
recommended one (photo sample, one physical revision, normal production),
so the first schedule overview you see is already a workable plan.

## Step 2: Review the Scenarios
Call `list_scenarios` to see every combination of:
- **Initial sample**: photo confirmation (2 weeks) or physical sample (3 weeks)
- **Revisions**: zero, one, or two rounds, each photo (1 week) or physical (2 weeks)
- **Production**: normal (5 weeks) or express (2 weeks)

Scenarios are sorted fastest-first with the recommended one pinned to the
top. Each entry shows its total weeks and projected completion date.

## Step 3: Choose a Plan
Either:
- Call `select_scenario` with a scenario id from the list, or
- Compose the stages by hand with `set_initial_sample`,
  `set_production_speed`, `add_revision`, `remove_revision`, and
  `set_revision_method`.

Picking a scenario overwrites all stage choices at once; any manual edit
afterwards drops the selection and marks the schedule manually configured.
Both styles are fine - use whichever matches how the customer talks about
the order.

## Step 4: Check the Risk Verdict
Call `show_schedule` and read the verdict line:
- `✓ On track` - the projected completion is on or before the event date.
- `⚠ At risk` - the event date falls before completion. Trade stages for
  time: drop a revision round, confirm by photo instead of shipping the
  sample, or switch to express production, then check again.

## Guidelines
- Quality vs. speed is the customer's call. Present the trade-off
  (physical samples and extra revisions catch defects; express production
  and photo confirmation save weeks) rather than silently optimizing.
- Revision rounds are capped at two. Adding a third is a no-op and the
  tool will say the schedule was unchanged.
- Start a different planning round by clearing the order date with
  `set_order_date` (null) or wiping everything with `reset_session`.

Finish by summarizing the chosen stages, the total weeks, the completion
date, and whether the delivery beats the event date."#
            .to_string(),
        arguments: vec![
            PromptTemplateArg {
                name: "order_date".to_string(),
                description: "Date production can begin, in YYYY-MM-DD format".to_string(),
                required: true,
            },
            PromptTemplateArg {
                name: "event_date".to_string(),
                description: "Date the order must be delivered by, in YYYY-MM-DD format"
                    .to_string(),
                required: false,
            },
        ],
    }]
}
