//! Built-in English tables.

use stillpoint_core::MoodType;

use crate::schema::{
    EmotionCue, Lexicon, Modifiers, MoodLexicon, SentimentLexicon, SentimentTier, Tuning, Valence,
    Vocabulary, WeightedTerms,
};

struct MoodTable {
    mood: MoodType,
    keywords: &'static [&'static str],
    phrases: &'static [&'static str],
    contextual_boosts: &'static [&'static str],
    intensifiers: &'static [&'static str],
    weight: f64,
    sentiment_multiplier: f64,
    confidence: f64,
}

const MOODS: &[MoodTable] = &[
    MoodTable {
        mood: MoodType::Joyful,
        keywords: &[
            "happy", "joy", "joyful", "elated", "ecstatic", "blissful", "euphoric", "delighted",
            "cheerful", "upbeat", "radiant", "glowing", "beaming", "bright", "sunny", "gleeful",
            "thrilled", "overjoyed", "exhilarated", "jubilant", "exuberant", "buoyant",
            "amazing", "wonderful", "fantastic", "incredible", "awesome", "brilliant", "perfect",
            "excellent", "outstanding", "marvelous", "spectacular", "magnificent", "superb",
            "triumphant", "victorious", "accomplished", "successful", "proud", "fulfilled",
            "love", "adore", "cherish", "treasure", "blessed", "grateful", "thankful", "appreciate",
            "connected", "bonded", "united", "harmonious", "intimate", "affectionate",
            "energetic", "vibrant", "alive", "thriving", "flourishing", "glorious",
            "invigorated", "revitalized", "refreshed", "renewed", "spirited", "dynamic",
        ],
        phrases: &[
            "feeling great", "so happy", "best day", "love this", "amazing time",
            "couldn't be happier", "over the moon", "on cloud nine", "heart is full",
            "bursting with joy", "life is good", "feeling blessed", "so grateful",
            "pure happiness", "absolutely wonderful", "perfect moment", "incredible feeling",
            "beyond happy", "filled with joy", "walking on air", "living my best life",
            "dreams come true", "everything clicked", "magical moment", "pure bliss",
            "heart singing",
        ],
        contextual_boosts: &[
            "celebration", "achievement", "success", "milestone", "victory", "accomplishment",
            "breakthrough", "progress", "growth", "improvement", "wedding", "graduation",
            "promotion", "reunion", "surprise", "gift", "vacation", "adventure", "discovery",
            "recognition",
        ],
        intensifiers: &["absolutely", "completely", "totally", "incredibly", "amazingly"],
        weight: 0.98,
        sentiment_multiplier: 1.5,
        confidence: 0.95,
    },
    MoodTable {
        mood: MoodType::Excited,
        keywords: &[
            "excited", "thrilled", "pumped", "energetic", "enthusiastic", "eager", "anticipating",
            "exhilarated", "animated", "spirited", "dynamic", "charged", "electrified",
            "stimulated", "passionate", "fired up", "motivated", "inspired", "invigorated",
            "revved up", "buzzing", "hyped", "stoked", "amped", "psyched", "keyed up", "wound up",
        ],
        phrases: &[
            "so excited", "can't wait", "really looking forward", "pumped up", "fired up",
            "bursting with energy", "raring to go", "full of anticipation",
            "buzzing with excitement", "absolutely thrilled", "beyond excited",
            "can hardly contain", "chomping at the bit", "on the edge of my seat", "heart racing",
            "adrenaline pumping", "electric feeling",
        ],
        contextual_boosts: &[
            "opportunity", "adventure", "new", "beginning", "start", "launch", "debut", "journey",
            "exploration", "discovery", "travel", "vacation", "project", "challenge",
            "competition", "event", "performance", "presentation", "interview",
        ],
        intensifiers: &["super", "really", "extremely", "incredibly", "wildly"],
        weight: 0.92,
        sentiment_multiplier: 1.3,
        confidence: 0.88,
    },
    MoodTable {
        mood: MoodType::Content,
        keywords: &[
            "content", "satisfied", "peaceful", "calm", "serene", "tranquil", "relaxed",
            "comfortable", "settled", "balanced", "stable", "steady", "grounded", "centered",
            "good", "fine", "okay", "pleasant", "nice", "decent", "solid", "fulfilled",
            "harmonious", "composed", "collected", "poised", "secure", "confident",
        ],
        phrases: &[
            "feeling good", "pretty good", "going well", "not bad", "quite content", "at peace",
            "feeling settled", "in a good place", "things are good", "life is stable",
            "feeling balanced", "sense of peace", "comfortable with", "satisfied with",
            "everything in place", "smooth sailing", "steady progress", "quiet confidence",
        ],
        contextual_boosts: &[
            "balance", "harmony", "stability", "routine", "consistency", "comfort", "home",
            "family", "relationship", "work-life balance", "meditation", "mindfulness",
            "acceptance", "gratitude", "simplicity", "order", "structure",
        ],
        intensifiers: &["quite", "fairly", "reasonably", "genuinely", "truly"],
        weight: 0.75,
        sentiment_multiplier: 0.8,
        confidence: 0.82,
    },
    MoodTable {
        mood: MoodType::Peaceful,
        keywords: &[
            "peaceful", "serene", "tranquil", "calm", "quiet", "still", "meditative", "zen",
            "centered", "balanced", "harmonious", "gentle", "soft", "soothing", "mindful",
            "restful", "placid", "undisturbed", "composed", "collected", "contemplative",
            "reflective", "introspective", "thoughtful", "wise", "enlightened", "spiritual",
        ],
        phrases: &[
            "feeling peaceful", "so calm", "inner peace", "at peace", "deeply relaxed",
            "perfectly still", "sense of calm", "peaceful moment", "quiet mind",
            "centered feeling", "harmonious state", "tranquil space", "serene atmosphere",
            "mindful presence", "spiritual connection", "deep breathing", "meditation state",
            "flow state",
        ],
        contextual_boosts: &[
            "meditation", "nature", "silence", "solitude", "reflection", "mindfulness",
            "breathing", "stillness", "garden", "beach", "mountains", "yoga", "prayer",
            "contemplation", "wisdom", "enlightenment", "spirituality", "zen",
        ],
        intensifiers: &["deeply", "profoundly", "completely", "utterly", "perfectly"],
        weight: 0.85,
        sentiment_multiplier: 0.9,
        confidence: 0.90,
    },
    MoodTable {
        mood: MoodType::Neutral,
        keywords: &[
            "okay", "fine", "normal", "usual", "regular", "average", "typical", "ordinary",
            "standard", "routine", "everyday", "common", "unremarkable", "plain", "simple",
            "moderate", "middle", "balanced", "even", "steady", "consistent", "stable",
        ],
        phrases: &[
            "nothing special", "same as usual", "pretty normal", "just okay", "status quo",
            "neither good nor bad", "middle ground", "business as usual", "typical day",
            "going through motions", "same old", "routine stuff", "nothing new",
        ],
        contextual_boosts: &["routine", "ordinary", "regular", "typical", "standard", "normal"],
        intensifiers: &["just", "simply", "merely", "only", "basically"],
        weight: 0.5,
        sentiment_multiplier: 0.0,
        confidence: 0.70,
    },
    MoodTable {
        mood: MoodType::Melancholy,
        keywords: &[
            "sad", "down", "blue", "melancholy", "gloomy", "somber", "wistful", "pensive",
            "reflective", "quiet", "subdued", "low", "heavy", "weary", "tired", "drained",
            "empty", "hollow", "lonely", "isolated", "disconnected", "distant", "withdrawn",
            "nostalgic", "longing", "yearning", "missing", "grieving", "mourning", "sorrowful",
            "melancholic", "dejected", "despondent", "forlorn", "heartbroken", "tearful",
        ],
        phrases: &[
            "feeling down", "bit sad", "not great", "feeling blue", "heavy heart", "feeling low",
            "down in the dumps", "not myself", "feeling empty", "missing something",
            "sense of loss", "feeling distant", "emotionally drained", "heart aches",
            "deep sadness", "tears in my eyes", "weight on my chest", "soul feels heavy",
            "aching inside",
        ],
        contextual_boosts: &[
            "loss", "goodbye", "ending", "change", "transition", "memory", "past", "death",
            "nostalgia", "separation", "distance", "breakup", "disappointment", "failure",
            "rejection", "abandonment", "betrayal", "regret", "remorse", "guilt",
        ],
        intensifiers: &["deeply", "profoundly", "overwhelmingly", "utterly", "completely"],
        weight: 0.25,
        sentiment_multiplier: -1.2,
        confidence: 0.85,
    },
    MoodTable {
        mood: MoodType::Anxious,
        keywords: &[
            "anxious", "worried", "nervous", "stressed", "overwhelmed", "tense", "uneasy",
            "concerned", "restless", "panic", "fear", "afraid", "scared", "terrified",
            "frightened", "apprehensive", "jittery", "on edge", "frantic", "frazzled", "agitated",
            "unsettled", "disturbed", "troubled", "bothered", "pressured", "paranoid",
            "hypervigilant", "catastrophizing", "spiraling", "racing thoughts", "sleepless",
            "insomnia",
        ],
        phrases: &[
            "feeling anxious", "so worried", "stressed out", "can't relax", "on edge",
            "losing sleep", "freaking out", "losing it", "can't cope", "too much", "overwhelming",
            "spiraling", "panic mode", "worst case scenario", "can't stop thinking",
            "mind racing", "heart pounding", "sweating bullets", "stomach in knots",
            "shaking with fear", "paralyzed by fear", "drowning in worry",
            "consumed by anxiety", "terror gripping me",
        ],
        contextual_boosts: &[
            "deadline", "pressure", "uncertainty", "unknown", "change", "decision", "exam",
            "future", "what if", "problem", "crisis", "emergency", "health", "money", "job",
            "performance", "judgment", "criticism", "failure", "rejection", "confrontation",
        ],
        intensifiers: &["extremely", "incredibly", "overwhelmingly", "paralyzing", "crippling"],
        weight: 0.15,
        sentiment_multiplier: -1.4,
        confidence: 0.92,
    },
    MoodTable {
        mood: MoodType::Frustrated,
        keywords: &[
            "frustrated", "angry", "annoyed", "irritated", "mad", "upset", "furious", "livid",
            "aggravated", "bothered", "infuriated", "enraged", "outraged", "incensed",
            "exasperated", "fed up", "sick of", "done with", "had enough", "pissed off",
            "impatient", "agitated", "riled up", "steamed", "ticked off", "irate", "seething",
            "boiling", "explosive", "volcanic", "burning with rage",
        ],
        phrases: &[
            "so frustrated", "really angry", "fed up", "had enough", "losing patience",
            "at my limit", "driving me crazy", "can't stand", "makes me mad", "so annoying",
            "absolutely furious", "beyond frustrated", "ready to explode", "last straw",
            "boiling point", "seeing red", "blood boiling", "steam coming out",
            "about to lose it", "rage building up", "fury consuming me", "anger overwhelming",
            "explosive rage",
        ],
        contextual_boosts: &[
            "obstacle", "barrier", "block", "stuck", "delay", "setback", "problem", "traffic",
            "issue", "conflict", "disagreement", "unfair", "injustice", "bureaucracy",
            "politics", "incompetence", "stupidity", "ignorance", "disrespect", "betrayal",
            "lies",
        ],
        intensifiers: &["absolutely", "completely", "totally", "utterly", "beyond"],
        weight: 0.08,
        sentiment_multiplier: -1.3,
        confidence: 0.88,
    },
];

const POSITIVE_TIERS: &[(&str, f64, &[&str])] = &[
    (
        "extreme",
        3.0,
        &[
            "ecstatic", "euphoric", "blissful", "magnificent", "spectacular", "phenomenal",
            "extraordinary", "miraculous", "divine", "heavenly",
        ],
    ),
    (
        "strong",
        2.0,
        &[
            "love", "amazing", "incredible", "fantastic", "wonderful", "brilliant", "perfect",
            "excellent", "outstanding", "marvelous", "superb", "thrilled", "elated", "overjoyed",
            "delighted", "blessed", "grateful",
        ],
    ),
    (
        "moderate",
        1.0,
        &[
            "good", "nice", "great", "happy", "pleased", "satisfied", "content", "glad",
            "thankful", "appreciate", "enjoy", "like", "positive", "hopeful", "optimistic",
            "confident",
        ],
    ),
    (
        "mild",
        0.5,
        &[
            "okay", "fine", "decent", "alright", "not bad", "pretty good", "fair", "pleasant",
            "comfortable", "acceptable",
        ],
    ),
];

const NEGATIVE_TIERS: &[(&str, f64, &[&str])] = &[
    (
        "extreme",
        -3.0,
        &[
            "devastating", "catastrophic", "horrific", "nightmarish", "hellish", "unbearable",
            "excruciating", "agonizing", "torturous", "suicidal",
        ],
    ),
    (
        "strong",
        -2.0,
        &[
            "hate", "terrible", "awful", "horrible", "worst", "crushing", "tragic",
            "heartbreaking", "furious", "enraged", "livid", "terrified", "panicked",
            "overwhelmed", "hopeless", "devastated",
        ],
    ),
    (
        "moderate",
        -1.0,
        &[
            "bad", "sad", "upset", "angry", "worried", "stressed", "frustrated", "disappointed",
            "concerned", "troubled", "bothered", "annoyed", "difficult", "challenging",
            "unpleasant",
        ],
    ),
    (
        "mild",
        -0.5,
        &[
            "not great", "not good", "bit down", "somewhat sad", "little worried",
            "mildly frustrated", "not ideal", "could be better", "disappointing", "concerning",
        ],
    ),
];

const NEGATION: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "don't", "doesn't",
    "didn't", "won't", "wouldn't", "can't", "couldn't", "shouldn't", "isn't", "aren't", "wasn't",
    "weren't", "haven't", "hasn't",
];

const INTENSIFIERS: &[(&str, f64, &[&str])] = &[
    (
        "extreme",
        2.0,
        &[
            "absolutely", "completely", "totally", "utterly", "entirely", "thoroughly",
            "perfectly", "incredibly", "amazingly", "extraordinarily",
        ],
    ),
    (
        "strong",
        1.5,
        &[
            "very", "extremely", "immensely", "tremendously", "exceptionally", "remarkably",
            "profoundly", "deeply",
        ],
    ),
    (
        "moderate",
        1.2,
        &["quite", "rather", "fairly", "pretty", "really", "truly", "genuinely"],
    ),
    (
        "mild",
        0.8,
        &["somewhat", "a bit", "a little", "kind of", "sort of", "slightly"],
    ),
];

const DIMINISHERS: &[&str] = &[
    "barely", "hardly", "scarcely", "rarely", "seldom", "occasionally", "sometimes", "maybe",
    "perhaps",
];

const TEMPORAL: &[(&str, f64, &[&str])] = &[
    ("persistent", 1.3, &["always", "constantly", "continuously", "forever", "eternally"]),
    ("frequent", 1.1, &["often", "frequently", "usually", "regularly", "commonly"]),
    ("occasional", 0.8, &["sometimes", "occasionally", "rarely", "seldom"]),
    ("recent", 1.2, &["lately", "recently", "now", "currently", "today"]),
];

const CONDITIONAL: &[&str] = &[
    "if", "when", "unless", "although", "though", "despite", "however", "but", "yet", "still",
    "nevertheless", "nonetheless",
];

struct CueTable {
    emotion: &'static str,
    valence: Valence,
    physiological: &'static [&'static str],
    cognitive: &'static [&'static str],
    behavioral: &'static [&'static str],
}

const CUES: &[CueTable] = &[
    CueTable {
        emotion: "anxiety",
        valence: Valence::Negative,
        physiological: &[
            "heart racing", "sweating", "shaking", "trembling", "nausea", "dizzy", "breathless",
            "chest tight",
        ],
        cognitive: &[
            "racing thoughts", "can't focus", "mind blank", "catastrophizing", "what if",
            "worst case",
        ],
        behavioral: &["avoiding", "procrastinating", "restless", "pacing", "fidgeting", "checking"],
    },
    CueTable {
        emotion: "depression",
        valence: Valence::Negative,
        physiological: &[
            "tired", "exhausted", "heavy", "sluggish", "no energy", "sleeping too much",
            "can't sleep",
        ],
        cognitive: &[
            "hopeless", "worthless", "guilty", "can't think", "memory problems", "indecisive",
        ],
        behavioral: &[
            "isolating", "withdrawing", "not eating", "overeating", "no motivation", "giving up",
        ],
    },
    CueTable {
        emotion: "anger",
        valence: Valence::Negative,
        physiological: &["hot", "burning", "tense", "clenched", "explosive", "pressure building"],
        cognitive: &["unfair", "injustice", "betrayed", "disrespected", "violated", "revenge"],
        behavioral: &["yelling", "slamming", "breaking", "confronting", "arguing", "fighting"],
    },
    CueTable {
        emotion: "joy",
        valence: Valence::Positive,
        physiological: &["light", "energetic", "warm", "glowing", "floating", "buzzing"],
        cognitive: &["grateful", "blessed", "lucky", "optimistic", "hopeful", "confident"],
        behavioral: &["laughing", "smiling", "dancing", "singing", "celebrating", "sharing"],
    },
];

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "was", "are", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "shall", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "this", "that", "these", "those", "who", "what", "where", "when", "why", "how",
    "which", "whose", "whom", "if", "then", "else", "while", "until", "since", "because",
    "although", "though", "just", "only", "also", "even", "still", "yet", "already", "again",
    "once", "more", "some", "any", "all", "each", "every", "both", "either", "neither", "other",
    "another",
];

const EMOTIONAL_WORDS: &[&str] = &[
    "love", "hate", "fear", "hope", "joy", "sadness", "anger", "peace", "anxiety", "excitement",
    "disappointment", "gratitude", "pride", "shame", "guilt", "relief", "surprise", "trust",
    "jealousy", "compassion", "empathy", "loneliness", "belonging", "vulnerability", "intimacy",
    "passion", "desire", "yearning", "contentment", "serenity", "bliss", "euphoria", "melancholy",
    "despair", "rage", "fury",
];

const CONTEXTUAL_WORDS: &[&str] = &[
    "work", "job", "career", "school", "education", "health", "fitness", "exercise",
    "relationship", "marriage", "friendship", "family", "children", "parents", "money", "finance",
    "home", "travel", "vacation", "hobby", "creativity", "nature", "weather", "season", "holiday",
    "celebration", "achievement", "challenge", "problem", "solution", "decision", "choice",
    "opportunity", "responsibility", "commitment", "obligation", "freedom", "independence",
];

const PSYCHOLOGICAL_WORDS: &[&str] = &[
    "therapy", "counseling", "meditation", "mindfulness", "awareness", "consciousness",
    "subconscious", "memory", "trauma", "healing", "recovery", "growth", "development",
    "personality", "character", "identity", "self-esteem", "confidence", "insecurity",
    "motivation", "inspiration", "determination", "willpower", "resilience", "strength",
    "weakness", "vulnerability", "courage", "bravery", "fear", "phobia", "anxiety",
];

const RELATIONSHIP_WORDS: &[&str] = &[
    "partner", "spouse", "boyfriend", "girlfriend", "husband", "wife", "lover", "friend",
    "friendship", "companion", "colleague", "teammate", "neighbor", "family", "mother", "father",
    "parent", "child", "sibling", "brother", "sister", "connection", "bond", "relationship",
    "intimacy", "closeness", "distance", "communication", "conversation", "dialogue", "conflict",
    "argument", "disagreement", "support", "help", "care", "nurture", "protection", "loyalty",
    "trust", "betrayal",
];

const TEMPORAL_SIGNIFICANCE_WORDS: &[&str] = &[
    "milestone", "anniversary", "birthday", "graduation", "wedding", "funeral", "beginning",
    "ending", "start", "finish", "transition", "change", "transformation", "breakthrough",
    "crossroads", "deadline", "appointment", "meeting", "event", "occasion", "moment", "instant",
    "period", "phase", "stage",
];

/// Growth, healing and connection vocabulary seeded alongside the
/// sentiment words.
const HIGH_VALUE_WORDS: &[&str] = &[
    "breakthrough", "transformation", "realization", "epiphany", "insight", "wisdom",
    "connection", "relationship", "family", "friend", "love", "support", "community",
    "achievement", "success", "failure", "challenge", "opportunity", "growth", "healing",
    "recovery", "progress", "setback", "milestone", "journey", "purpose", "meaning", "identity",
    "values", "beliefs", "spirituality", "creativity", "passion", "inspiration", "motivation",
    "determination",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn weighted(tiers: &[(&str, f64, &[&str])]) -> Vec<WeightedTerms> {
    tiers
        .iter()
        .map(|(name, multiplier, words)| WeightedTerms {
            name: name.to_string(),
            multiplier: *multiplier,
            words: owned(words),
        })
        .collect()
}

fn sentiment_tiers(tiers: &[(&str, f64, &[&str])]) -> Vec<SentimentTier> {
    tiers
        .iter()
        .map(|(name, weight, words)| SentimentTier {
            name: name.to_string(),
            weight: *weight,
            words: owned(words),
        })
        .collect()
}

pub(crate) fn moods() -> Vec<MoodLexicon> {
    MOODS
        .iter()
        .map(|t| MoodLexicon {
            mood: t.mood,
            keywords: owned(t.keywords),
            phrases: owned(t.phrases),
            contextual_boosts: owned(t.contextual_boosts),
            intensifiers: owned(t.intensifiers),
            weight: t.weight,
            sentiment_multiplier: t.sentiment_multiplier,
            confidence: t.confidence,
        })
        .collect()
}

pub(crate) fn sentiment() -> SentimentLexicon {
    SentimentLexicon {
        positive: sentiment_tiers(POSITIVE_TIERS),
        negative: sentiment_tiers(NEGATIVE_TIERS),
    }
}

pub(crate) fn modifiers() -> Modifiers {
    Modifiers {
        negation: owned(NEGATION),
        negation_scope: 3,
        intensifiers: weighted(INTENSIFIERS),
        diminishers: WeightedTerms {
            name: "diminisher".to_string(),
            multiplier: 0.5,
            words: owned(DIMINISHERS),
        },
        temporal: weighted(TEMPORAL),
        conditional: owned(CONDITIONAL),
    }
}

pub(crate) fn emotion_cues() -> Vec<EmotionCue> {
    CUES.iter()
        .map(|c| EmotionCue {
            emotion: c.emotion.to_string(),
            valence: c.valence,
            physiological: owned(c.physiological),
            cognitive: owned(c.cognitive),
            behavioral: owned(c.behavioral),
        })
        .collect()
}

pub(crate) fn vocabulary() -> Vocabulary {
    Vocabulary {
        stop_words: owned(STOP_WORDS),
        emotional: owned(EMOTIONAL_WORDS),
        contextual: owned(CONTEXTUAL_WORDS),
        psychological: owned(PSYCHOLOGICAL_WORDS),
        relationship: owned(RELATIONSHIP_WORDS),
        temporal_significance: owned(TEMPORAL_SIGNIFICANCE_WORDS),
        high_value: owned(HIGH_VALUE_WORDS),
    }
}

pub(crate) fn lexicon() -> Lexicon {
    Lexicon {
        moods: moods(),
        sentiment: sentiment(),
        modifiers: modifiers(),
        emotion_cues: emotion_cues(),
        vocabulary: vocabulary(),
        tuning: Tuning::default(),
    }
}
