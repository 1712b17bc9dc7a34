//! Static recommendation catalogs.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::ScoreCategory;
use crate::domain::assessment::Aspect;

/// Recommendation bundle for each overall score bracket.
static BRACKET_RECOMMENDATIONS: Lazy<HashMap<ScoreCategory, [&'static str; 4]>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert(
            ScoreCategory::Low,
            [
                "Develop a detailed trading plan with clear entry and exit criteria",
                "Practice risk management by never risking more than 1-2% per trade",
                "Keep a trading journal to record trades and emotional state",
                "Consider paper trading to build confidence without financial risk",
            ],
        );
        map.insert(
            ScoreCategory::Medium,
            [
                "Refine your trading plan to address any recurring issues",
                "Review your trading journal regularly to identify patterns",
                "Implement mindfulness practices to improve emotional control",
                "Set specific goals for both profitability and psychological improvement",
            ],
        );
        map.insert(
            ScoreCategory::High,
            [
                "Continue following your proven trading plan and processes",
                "Consider mentoring other traders to reinforce your knowledge",
                "Explore advanced strategies that align with your psychological strengths",
                "Maintain your trading journal to continue tracking performance",
            ],
        );
        map
    });

/// Bundle appended for every aspect scoring below the weak-aspect threshold.
static ASPECT_RECOMMENDATIONS: Lazy<HashMap<Aspect, [&'static str; 3]>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        Aspect::RiskManagement,
        [
            "Implement strict position sizing rules",
            "Always use stop-loss orders",
            "Diversify your trading positions",
        ],
    );
    map.insert(
        Aspect::EmotionalControl,
        [
            "Practice meditation or breathing exercises",
            "Take breaks during trading sessions",
            "Avoid trading when emotionally compromised",
        ],
    );
    map.insert(
        Aspect::Discipline,
        [
            "Create and stick to a trading checklist",
            "Avoid deviating from your trading plan",
            "Set specific criteria for trade entries and exits",
        ],
    );
    map.insert(
        Aspect::Preparation,
        [
            "Develop a pre-market routine",
            "Review economic calendars regularly",
            "Keep up with market news and analysis",
        ],
    );
    map.insert(
        Aspect::Mindset,
        [
            "Focus on process over outcomes",
            "Accept losses as part of trading",
            "Celebrate good decisions regardless of outcome",
        ],
    );
    map
});

pub(crate) fn bracket_recommendations(category: ScoreCategory) -> &'static [&'static str] {
    BRACKET_RECOMMENDATIONS
        .get(&category)
        .map(|bundle| bundle.as_slice())
        .unwrap_or(&[])
}

pub(crate) fn aspect_recommendations(aspect: Aspect) -> &'static [&'static str] {
    ASPECT_RECOMMENDATIONS
        .get(&aspect)
        .map(|bundle| bundle.as_slice())
        .unwrap_or(&[])
}
