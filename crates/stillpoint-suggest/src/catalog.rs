//! The fixed suggestion catalog.
//!
//! Every mood has the same shape: a list of candidates plus optional
//! theme-specific variants.

use std::fmt;

use serde::Serialize;
use stillpoint_core::{MindfulSuggestion, MoodType, SuggestionType};

/// A life area detected in recent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Work,
    Relationship,
    Family,
    Achievement,
    Loss,
    Opportunity,
    Nature,
    Health,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Work,
        Theme::Relationship,
        Theme::Family,
        Theme::Achievement,
        Theme::Loss,
        Theme::Opportunity,
        Theme::Nature,
        Theme::Health,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Work => "work",
            Theme::Relationship => "relationship",
            Theme::Family => "family",
            Theme::Achievement => "achievement",
            Theme::Loss => "loss",
            Theme::Opportunity => "opportunity",
            Theme::Nature => "nature",
            Theme::Health => "health",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry before it is scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub kind: SuggestionType,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub reason: &'static str,
    pub keywords: &'static [&'static str],
}

impl Candidate {
    pub fn with_relevance(&self, relevance: f64) -> MindfulSuggestion {
        MindfulSuggestion {
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
            duration: self.duration.to_string(),
            reason: self.reason.to_string(),
            relevance_score: relevance,
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// A candidate that carries its own fixed relevance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub candidate: Candidate,
    pub relevance: f64,
}

impl Scored {
    pub fn to_suggestion(&self) -> MindfulSuggestion {
        self.candidate.with_relevance(self.relevance)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoodCatalog {
    pub candidates: &'static [Candidate],
    pub contextual: &'static [(Theme, Candidate)],
}

impl MoodCatalog {
    pub fn contextual_for(&self, theme: Theme) -> Option<&'static Candidate> {
        self.contextual
            .iter()
            .find(|(t, _)| *t == theme)
            .map(|(_, c)| c)
    }
}

const fn candidate(
    kind: SuggestionType,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    reason: &'static str,
    keywords: &'static [&'static str],
) -> Candidate {
    Candidate {
        kind,
        title,
        description,
        duration,
        reason,
        keywords,
    }
}

use SuggestionType::{Growth, MoodBoost, Reflection, StressRelief};

const JOYFUL: &[Candidate] = &[
    candidate(
        Growth,
        "Amplify Your Joy",
        "Write about what brought you joy today and how you can create more of these moments.",
        "10-15 minutes",
        "Channel positive energy into intentional joy creation",
        &["celebration", "success", "achievement", "love", "happiness"],
    ),
    candidate(
        Reflection,
        "Gratitude Expansion",
        "List 10 things you're grateful for, from the tiniest details to life's biggest gifts.",
        "10 minutes",
        "Deepen appreciation and extend positive feelings",
        &["grateful", "thankful", "blessed", "appreciate"],
    ),
    candidate(
        Growth,
        "Share Your Light",
        "Think of someone who could use encouragement and send them a kind message.",
        "5-10 minutes",
        "Spread joy and strengthen connections",
        &["friend", "family", "connection", "love", "support"],
    ),
];

const JOYFUL_CONTEXTUAL: &[(Theme, Candidate)] = &[
    (
        Theme::Work,
        candidate(
            Growth,
            "Career Momentum Building",
            "Use this positive work energy to plan your next professional goal or skill development.",
            "15-20 minutes",
            "Leverage work satisfaction for career growth",
            &[],
        ),
    ),
    (
        Theme::Relationship,
        candidate(
            Reflection,
            "Love Appreciation Ritual",
            "Write a heartfelt note about what you love about your relationships and share it.",
            "10-15 minutes",
            "Strengthen bonds during positive emotional states",
            &[],
        ),
    ),
    (
        Theme::Achievement,
        candidate(
            Growth,
            "Success Pattern Analysis",
            "Analyze what led to this achievement and create a blueprint for future success.",
            "20 minutes",
            "Learn from success to replicate positive outcomes",
            &[],
        ),
    ),
];

const EXCITED: &[Candidate] = &[
    candidate(
        Growth,
        "Channel Your Energy",
        "Use this excitement to plan or work on something meaningful to you.",
        "15-30 minutes",
        "Transform excitement into productive action",
        &["energy", "motivation", "goal", "plan", "action"],
    ),
    candidate(
        Reflection,
        "Future Visioning",
        "Visualize your goals and dreams with this positive energy as fuel.",
        "10-15 minutes",
        "Harness enthusiasm for goal setting",
        &["future", "dream", "vision", "goal", "possibility"],
    ),
    candidate(
        MoodBoost,
        "Celebration Dance",
        "Put on your favorite music and move your body to celebrate this feeling.",
        "5-10 minutes",
        "Express and embody your excitement",
        &["music", "movement", "celebration", "energy", "dance"],
    ),
];

const CONTENT: &[Candidate] = &[
    candidate(
        Reflection,
        "Peaceful Presence",
        "Sit quietly and simply appreciate this moment of contentment.",
        "10-15 minutes",
        "Savor and deepen feelings of peace",
        &["peace", "calm", "content", "satisfied", "balanced"],
    ),
    candidate(
        Growth,
        "Gentle Goal Setting",
        "From this calm space, consider what small steps you'd like to take forward.",
        "15 minutes",
        "Use contentment as foundation for growth",
        &["goal", "progress", "growth", "improvement"],
    ),
    candidate(
        Reflection,
        "Life Appreciation",
        "Reflect on the journey that brought you to this peaceful moment.",
        "10 minutes",
        "Acknowledge your path and progress",
        &["journey", "path", "progress", "appreciation"],
    ),
];

const PEACEFUL: &[Candidate] = &[
    candidate(
        Reflection,
        "Mindful Meditation",
        "Extend this peace with 15 minutes of silent meditation or gentle breathing.",
        "15-20 minutes",
        "Deepen and sustain peaceful feelings",
        &["meditation", "breath", "stillness", "quiet", "calm"],
    ),
    candidate(
        Growth,
        "Wisdom Reflection",
        "Consider what this peace is teaching you about yourself and life.",
        "10-15 minutes",
        "Extract insights from peaceful states",
        &["wisdom", "insight", "understanding", "clarity"],
    ),
    candidate(
        StressRelief,
        "Body Blessing",
        "Do a loving body scan, sending gratitude to each part of yourself.",
        "15 minutes",
        "Extend peace throughout your being",
        &["body", "gratitude", "self-love", "appreciation"],
    ),
];

const NEUTRAL: &[Candidate] = &[
    candidate(
        Reflection,
        "Gentle Check-In",
        "Explore what \"neutral\" feels like in your body and what it might need.",
        "10 minutes",
        "Understand and honor neutral states",
        &["feeling", "body", "need", "awareness"],
    ),
    candidate(
        MoodBoost,
        "Curiosity Practice",
        "Find one thing around you to observe with fresh eyes and wonder.",
        "5-10 minutes",
        "Spark interest and engagement",
        &["curiosity", "wonder", "explore", "discover"],
    ),
    candidate(
        Growth,
        "Small Step Forward",
        "Choose one tiny action that would make you feel slightly more alive.",
        "5-15 minutes",
        "Gently move from neutral toward positive",
        &["action", "step", "movement", "progress"],
    ),
];

const MELANCHOLY: &[Candidate] = &[
    candidate(
        StressRelief,
        "Gentle Self-Compassion",
        "Place your hand on your heart and speak to yourself as you would a dear friend.",
        "10 minutes",
        "Offer yourself comfort during difficult feelings",
        &["sad", "down", "heavy", "lonely", "empty"],
    ),
    candidate(
        Reflection,
        "Honoring Sadness",
        "Allow yourself to feel this emotion fully without trying to fix or change it.",
        "15 minutes",
        "Validate and process difficult emotions",
        &["sadness", "grief", "loss", "missing", "hurt"],
    ),
    candidate(
        MoodBoost,
        "Tiny Comfort Ritual",
        "Make yourself a warm drink, wrap in a soft blanket, or do something nurturing.",
        "10-20 minutes",
        "Provide gentle comfort and care",
        &["comfort", "care", "nurture", "warmth", "gentle"],
    ),
];

const ANXIOUS: &[Candidate] = &[
    candidate(
        StressRelief,
        "4-7-8 Breathing",
        "Breathe in for 4, hold for 7, exhale for 8. Repeat 4-8 times to calm your nervous system.",
        "5-10 minutes",
        "Activate parasympathetic nervous system",
        &["anxious", "worried", "stressed", "overwhelmed", "panic"],
    ),
    candidate(
        StressRelief,
        "Grounding Technique",
        "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
        "5 minutes",
        "Bring awareness back to the present moment",
        &["anxiety", "worry", "fear", "nervous", "tense"],
    ),
    candidate(
        StressRelief,
        "Progressive Muscle Relaxation",
        "Tense and release each muscle group, starting from your toes up to your head.",
        "15-20 minutes",
        "Release physical tension and anxiety",
        &["tension", "muscle", "relaxation", "body", "release"],
    ),
];

const FRUSTRATED: &[Candidate] = &[
    candidate(
        StressRelief,
        "Physical Release",
        "Do jumping jacks, punch a pillow, or take a brisk walk to move the energy.",
        "5-15 minutes",
        "Channel frustration into healthy physical expression",
        &["frustrated", "angry", "annoyed", "mad", "irritated"],
    ),
    candidate(
        Reflection,
        "Frustration Dialogue",
        "Write an uncensored letter expressing your frustration, then burn or tear it up.",
        "15-20 minutes",
        "Release pent-up emotions safely",
        &["anger", "rage", "fury", "upset", "fed up"],
    ),
    candidate(
        Growth,
        "Problem-Solving Mode",
        "Once calmer, brainstorm three possible solutions or ways to improve the situation.",
        "15 minutes",
        "Channel frustration into constructive action",
        &["solution", "problem", "action", "improvement", "change"],
    ),
];

pub fn mood_catalog(mood: MoodType) -> MoodCatalog {
    let (candidates, contextual): (&'static [Candidate], &'static [(Theme, Candidate)]) =
        match mood {
            MoodType::Joyful => (JOYFUL, JOYFUL_CONTEXTUAL),
            MoodType::Excited => (EXCITED, &[]),
            MoodType::Content => (CONTENT, &[]),
            MoodType::Peaceful => (PEACEFUL, &[]),
            MoodType::Neutral => (NEUTRAL, &[]),
            MoodType::Melancholy => (MELANCHOLY, &[]),
            MoodType::Anxious => (ANXIOUS, &[]),
            MoodType::Frustrated => (FRUSTRATED, &[]),
        };
    MoodCatalog {
        candidates,
        contextual,
    }
}

// ── Fixed fall-backs ──

pub const DEFAULTS: [Scored; 3] = [
    Scored {
        candidate: candidate(
            Reflection,
            "Mindful Check-In",
            "Take a moment to notice how you're feeling in your body and mind right now.",
            "5-10 minutes",
            "Build self-awareness and presence",
            &[],
        ),
        relevance: 0.7,
    },
    Scored {
        candidate: candidate(
            StressRelief,
            "Three Deep Breaths",
            "Take three slow, deep breaths, focusing on the sensation of breathing.",
            "2-3 minutes",
            "Simple way to center and calm yourself",
            &[],
        ),
        relevance: 0.8,
    },
    Scored {
        candidate: candidate(
            MoodBoost,
            "Gratitude Moment",
            "Think of one thing you're grateful for right now, however small.",
            "2-5 minutes",
            "Shift focus to positive aspects of life",
            &[],
        ),
        relevance: 0.6,
    },
];

pub const GENERIC: [Scored; 3] = [
    Scored {
        candidate: candidate(
            Reflection,
            "Present Moment Awareness",
            "Simply sit and notice what you're experiencing right now without judgment.",
            "5-10 minutes",
            "Cultivate mindful presence",
            &[],
        ),
        relevance: 0.6,
    },
    Scored {
        candidate: candidate(
            MoodBoost,
            "Gratitude Moment",
            "Think of three things you're grateful for right now, however small.",
            "5 minutes",
            "Shift focus to positive aspects of life",
            &[],
        ),
        relevance: 0.7,
    },
    Scored {
        candidate: candidate(
            StressRelief,
            "Gentle Movement",
            "Do some light stretching or take a short walk to connect with your body.",
            "10-15 minutes",
            "Physical movement supports emotional well-being",
            &[],
        ),
        relevance: 0.6,
    },
];

// ── Pattern-based ──

pub const WEEKLY_STRESS_RESET: Scored = Scored {
    candidate: candidate(
        StressRelief,
        "Weekly Stress Reset",
        "Plan 3 stress-relief activities for this week: one physical, one mental, one social.",
        "20 minutes planning",
        "Recent pattern of stress detected in your entries",
        &[],
    ),
    relevance: 0.8,
};

pub const POSITIVE_MOMENTUM: Scored = Scored {
    candidate: candidate(
        Growth,
        "Positive Momentum Amplification",
        "Identify the key factors contributing to your positive streak and create a plan to maintain them.",
        "15-20 minutes",
        "Strong positive pattern detected in recent entries",
        &[],
    ),
    relevance: 0.9,
};

pub const RELATIONSHIP_APPRECIATION: Scored = Scored {
    candidate: candidate(
        Reflection,
        "Relationship Appreciation Practice",
        "Write about the people who matter most to you and plan a meaningful way to show appreciation.",
        "15 minutes",
        "Relationship themes prominent in your recent reflections",
        &[],
    ),
    relevance: 0.7,
};

// ── Date-based ──

pub const SUNDAY_SOUL_RESET: Scored = Scored {
    candidate: candidate(
        StressRelief,
        "Sunday Soul Reset",
        "Create a nurturing routine: warm bath, gentle music, and self-compassion practice.",
        "45-60 minutes",
        "Sunday renewal after challenging times",
        &[],
    ),
    relevance: 0.8,
};

pub const WEEKLY_WISDOM: Scored = Scored {
    candidate: candidate(
        Reflection,
        "Weekly Wisdom Gathering",
        "Reflect on the week's lessons and set 3 intentions for the coming week.",
        "20-30 minutes",
        "Sunday is perfect for weekly reflection and planning",
        &[],
    ),
    relevance: 0.7,
};

pub const MORNING_ANXIETY_EASE: Scored = Scored {
    candidate: candidate(
        StressRelief,
        "Morning Anxiety Ease",
        "Start with 5 minutes of box breathing, followed by gentle affirmations.",
        "10 minutes",
        "Address morning anxiety with calming practices",
        &[],
    ),
    relevance: 0.9,
};

pub const MORNING_POWER_HOUR: Scored = Scored {
    candidate: candidate(
        Growth,
        "Morning Power Hour",
        "Set your top 3 priorities for the day and visualize accomplishing them with ease.",
        "10 minutes",
        "Morning intention setting for productive days",
        &[],
    ),
    relevance: 0.6,
};

pub const WORK_LIFE_BALANCE: Scored = Scored {
    candidate: candidate(
        StressRelief,
        "Work-Life Balance Check",
        "Assess your work boundaries and plan one non-work activity that brings you joy.",
        "15 minutes",
        "Work themes detected in recent entries",
        &[],
    ),
    relevance: 0.8,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_three_candidates() {
        for mood in MoodType::ALL {
            let catalog = mood_catalog(mood);
            assert_eq!(catalog.candidates.len(), 3, "{mood}");
            assert!(catalog.candidates.iter().all(|c| !c.keywords.is_empty()));
        }
    }

    #[test]
    fn only_joyful_has_theme_variants() {
        let joyful = mood_catalog(MoodType::Joyful);
        assert!(joyful.contextual_for(Theme::Work).is_some());
        assert!(joyful.contextual_for(Theme::Health).is_none());
        for mood in MoodType::ALL.into_iter().filter(|m| *m != MoodType::Joyful) {
            assert!(mood_catalog(mood).contextual.is_empty());
        }
    }

    #[test]
    fn theme_names() {
        let names: Vec<&str> = Theme::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            ["work", "relationship", "family", "achievement", "loss", "opportunity", "nature", "health"]
        );
    }
}
