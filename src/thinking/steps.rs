//! Step analysis generators.
//!
//! Each step of the thinking protocol has its own generator. All of them
//! are pure text producers; only the safety assessment inspects the input,
//! and only the general analysis echoes it back.

use serde_json::Map;

use crate::screening;

/// Step 1: crisis screening plus emotional state analysis.
///
/// Screens `user_message`, falling back to `thought` when the message is
/// empty. The crisis branch swaps the entire screening block and flips the
/// trailing recommendation line.
pub fn safety_assessment(thought: &str, user_message: &str) -> String {
    let text = if user_message.is_empty() {
        thought
    } else {
        user_message
    };
    let screening = screening::screen(text);

    let mut out = String::from("STEP 1: SAFETY ASSESSMENT\n");
    out.push_str("========================================\n\n");

    out.push_str("Crisis Screening:\n");
    if screening.has_crisis_indicators {
        out.push_str("🚨 CRISIS INDICATORS DETECTED\n");
        out.push_str("- Immediate safety assessment required\n");
        out.push_str("- Crisis intervention protocols activated\n");
        out.push_str("- Professional support may be needed\n\n");

        out.push_str("Immediate Actions:\n");
        out.push_str("- Provide crisis resources (988 Suicide Lifeline)\n");
        out.push_str("- Validate feelings while ensuring safety\n");
        out.push_str("- Encourage professional help\n");
        out.push_str("- Follow up within 24 hours\n\n");
    } else {
        out.push_str("✅ No immediate crisis indicators detected\n");
        out.push_str("- Safe to proceed with standard grief coaching\n");
        out.push_str("- Continue with empathetic support\n");
        out.push_str("- Monitor for changes in risk level\n\n");
    }

    out.push_str("Emotional State Analysis:\n");
    for tag in &screening.emotions {
        out.push_str(tag.analysis_line());
    }

    out.push_str("\nRecommendation: ");
    out.push_str(if screening.has_crisis_indicators {
        "CRISIS PROTOCOL"
    } else {
        "STANDARD GRIEF SUPPORT"
    });

    out
}

/// Step 2 catalog text. Fixed: framework selection does not yet depend on
/// the presenting situation.
const FRAMEWORK_SELECTION: &str = "\
STEP 2: THERAPEUTIC FRAMEWORK SELECTION
========================================

Available Evidence-Based Frameworks:

1. TRAUMA-INFORMED GRIEF THERAPY
   - Best for: Sudden, unexpected loss
   - Techniques: Grounding, safety, gradual exposure
   - Focus: Stabilization before processing

2. CONTINUING BONDS MODEL
   - Best for: Maintaining connection with deceased
   - Techniques: Memory work, rituals, meaning-making
   - Focus: Healthy ongoing relationship

3. COGNITIVE BEHAVIORAL THERAPY (CBT)
   - Best for: Complicated grief, negative thought patterns
   - Techniques: Thought challenging, behavioral activation
   - Focus: Changing unhelpful thinking patterns

4. ACCEPTANCE AND COMMITMENT THERAPY (ACT)
   - Best for: Values-based living despite loss
   - Techniques: Mindfulness, values clarification
   - Focus: Psychological flexibility

RECOMMENDED APPROACH:
Primary: Trauma-Informed Grief Therapy
Secondary: Continuing Bonds Model
Rationale: Provides safety foundation while honoring connection

Cultural Considerations:
- Respect cultural grief expressions
- Consider spiritual/religious beliefs
- Adapt techniques to cultural context
";

/// Step 2: therapeutic framework selection.
///
/// `thought` and `context` are placeholders for future personalization;
/// the output is currently the fixed catalog.
pub fn framework_selection(
    _thought: &str,
    _context: &Map<String, serde_json::Value>,
) -> String {
    FRAMEWORK_SELECTION.to_string()
}

/// Step 3 plan text. Fixed, like the framework catalog.
const RESPONSE_PLANNING: &str = "\
STEP 3: PERSONALIZED RESPONSE PLANNING
========================================

Response Strategy:

1. EMPATHETIC VALIDATION
   - Acknowledge the depth of their pain
   - Normalize grief responses
   - Validate their unique experience

2. PSYCHOEDUCATION
   - Explain grief as natural process
   - Describe common grief reactions
   - Provide hope for healing

3. PRACTICAL COPING STRATEGIES
   - Grounding techniques for overwhelming emotions
   - Self-care recommendations
   - Gradual re-engagement activities

4. MEANING-MAKING OPPORTUNITIES
   - Honor the relationship with deceased
   - Explore legacy and memories
   - Consider ways to maintain connection

5. RESOURCE PROVISION
   - Grief support groups
   - Professional counseling options
   - Crisis resources if needed

Tone and Approach:
- Warm, compassionate, non-judgmental
- Patient and allowing for their pace
- Hopeful while acknowledging pain
- Professional yet personal

Follow-up Plan:
- Check in within 24-48 hours
- Monitor progress and adjust approach
- Provide ongoing support and resources
";

/// Step 3: response planning.
///
/// Same placeholder signature as [`framework_selection`].
pub fn response_planning(
    _thought: &str,
    _context: &Map<String, serde_json::Value>,
) -> String {
    RESPONSE_PLANNING.to_string()
}

/// Any step past the named ones: echo the thought back with a generic
/// continuation block.
pub fn general_analysis(thought: &str, thought_number: i64) -> String {
    format!(
        "STEP {thought_number}: ADDITIONAL ANALYSIS\n\
         ========================================\n\n\
         Continuing analysis: {thought}\n\n\
         This step provides additional depth to the grief coaching analysis,\n\
         ensuring comprehensive understanding and appropriate response."
    )
}
