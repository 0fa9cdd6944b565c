//! Step dispatch: pick the generator for a thought number and assemble the
//! response envelope.

use chrono::Utc;
use tracing::info;

use super::steps;
use super::types::{ThinkingRequest, ThinkingResponse};
use crate::error::Result;

/// Fixed labels for the named protocol steps.
fn step_description(step: i64) -> String {
    match step {
        1 => "Safety Assessment & Crisis Screening".to_string(),
        2 => "Therapeutic Framework Selection".to_string(),
        3 => "Personalized Response Planning".to_string(),
        4 => "Additional Analysis & Refinement".to_string(),
        n => format!("Analysis Step {n}"),
    }
}

/// Process a single thinking request.
///
/// Dispatch is a pure function of `thought_number`: steps 1-3 select the
/// named generators, and every other value (zero, negative, or past the
/// named steps) falls through to the general analysis. No state is carried
/// between calls; the continuation flag is derived from the step counters
/// alone.
pub fn process_thought(request: &ThinkingRequest) -> Result<ThinkingResponse> {
    info!(
        thought_number = request.thought_number,
        total_thoughts = request.total_thoughts,
        thought = %request.thought,
        "Processing thought"
    );

    let analysis = match request.thought_number {
        1 => steps::safety_assessment(&request.thought, &request.user_message),
        2 => steps::framework_selection(&request.thought, &request.context),
        3 => steps::response_planning(&request.thought, &request.context),
        n => steps::general_analysis(&request.thought, n),
    };

    Ok(ThinkingResponse {
        success: true,
        thought_number: request.thought_number,
        total_thoughts: request.total_thoughts,
        next_thought_needed: request.thought_number < request.total_thoughts,
        analysis,
        reasoning_step: format!(
            "Step {}: {}",
            request.thought_number,
            step_description(request.thought_number)
        ),
        timestamp: Utc::now(),
    })
}
