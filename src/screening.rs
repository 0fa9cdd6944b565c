//! Crisis and emotion screening over free text.
//!
//! Matching is case-insensitive substring containment — no tokenization or
//! stemming. "hopelessness" matches "hopeless"; that looseness is part of
//! the screening contract and must not be tightened without a product
//! decision.

/// Phrases that trigger the crisis branch of the safety assessment.
const CRISIS_KEYWORDS: [&str; 10] = [
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "not worth living",
    "better off dead",
    "want to die",
    "no point",
    "give up",
    "hopeless",
];

/// Emotion categories screened for during the safety assessment.
///
/// Categories are independent: any subset may match a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionTag {
    Anger,
    Sadness,
    Numbness,
    Guilt,
}

impl EmotionTag {
    /// All categories, in the order they appear in the analysis output.
    pub const ALL: [EmotionTag; 4] = [
        EmotionTag::Anger,
        EmotionTag::Sadness,
        EmotionTag::Numbness,
        EmotionTag::Guilt,
    ];

    /// Substrings whose presence marks this category.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            EmotionTag::Anger => &["angry", "mad"],
            EmotionTag::Sadness => &["sad", "depressed"],
            EmotionTag::Numbness => &["numb", "empty"],
            EmotionTag::Guilt => &["guilt", "blame"],
        }
    }

    /// The line emitted for this category in the emotional state analysis.
    pub fn analysis_line(self) -> &'static str {
        match self {
            EmotionTag::Anger => "- Anger phase of grief identified\n",
            EmotionTag::Sadness => "- Sadness/depression indicators present\n",
            EmotionTag::Numbness => "- Emotional numbness detected\n",
            EmotionTag::Guilt => "- Guilt/self-blame patterns identified\n",
        }
    }
}

/// Outcome of screening a single message.
#[derive(Debug, Clone)]
pub struct Screening {
    /// Whether any crisis phrase was found.
    pub has_crisis_indicators: bool,
    /// Matched emotion categories, in [`EmotionTag::ALL`] order.
    pub emotions: Vec<EmotionTag>,
}

/// Screen free text for crisis indicators and emotion categories.
pub fn screen(text: &str) -> Screening {
    let lowered = text.to_lowercase();
    let has_crisis_indicators = CRISIS_KEYWORDS.iter().any(|k| lowered.contains(k));
    let emotions = EmotionTag::ALL
        .into_iter()
        .filter(|tag| tag.keywords().iter().any(|k| lowered.contains(k)))
        .collect();
    Screening {
        has_crisis_indicators,
        emotions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_crisis_phrase() {
        for phrase in CRISIS_KEYWORDS {
            let result = screen(&format!("I just feel like {phrase} lately"));
            assert!(
                result.has_crisis_indicators,
                "expected crisis match for {phrase:?}"
            );
        }
    }

    #[test]
    fn crisis_match_is_case_insensitive() {
        let result = screen("I WANT TO DIE");
        assert!(result.has_crisis_indicators);
    }

    #[test]
    fn substring_match_fires_inside_longer_words() {
        // "hopelessness" contains "hopeless"; intentional looseness.
        let result = screen("a deep sense of hopelessness");
        assert!(result.has_crisis_indicators);
    }

    #[test]
    fn clean_text_has_no_indicators() {
        let result = screen("I miss her but I'm getting through the days");
        assert!(!result.has_crisis_indicators);
        assert!(result.emotions.is_empty());
    }

    #[test]
    fn single_emotion_matches() {
        let result = screen("I'm so angry at everyone");
        assert_eq!(result.emotions, vec![EmotionTag::Anger]);
    }

    #[test]
    fn multiple_emotions_match_in_stable_order() {
        let result = screen("I feel guilt and I'm so sad and numb");
        assert_eq!(
            result.emotions,
            vec![EmotionTag::Sadness, EmotionTag::Numbness, EmotionTag::Guilt]
        );
    }

    #[test]
    fn emotions_and_crisis_are_independent() {
        let result = screen("I feel hopeless and want to die");
        assert!(result.has_crisis_indicators);
        // "sad" is not present as a substring here; no emotion should fire.
        assert!(result.emotions.is_empty());
    }
}
