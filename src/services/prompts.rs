//! Optional prompt-template store and the reply families keyed by it.
//!
//! Templates live as plain text files, one per category. When a template
//! for the matched category exists, the responder answers from that
//! family's wording pools; when the store has nothing (missing directory,
//! unreadable file, empty template) the responder silently falls back to
//! its built-in rule table. Store failures are never surfaced to callers.

use crate::domain::models::ChatTurn;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;
use std::path::PathBuf;

pub const BREATHING_RELAXATION: &str = "breathing_relaxation";
pub const EMOTIONAL_CHECKIN: &str = "emotional_checkin";
pub const EMOTIONAL_SUPPORT: &str = "emotional_support";
pub const POSITIVE_REDIRECT: &str = "positive_redirect";
pub const WELLBEING_LESSONS: &str = "wellbeing_lessons";

pub trait PromptStore: Send + Sync {
    /// Returns the template for a category, or None when unavailable.
    fn lookup(&self, category: &str) -> Option<String>;
}

/// Reads `<base>/<category>.txt`. Any I/O failure is treated as "not
/// configured" and logged at debug only.
pub struct FsPromptStore {
    base: PathBuf,
}

impl FsPromptStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl PromptStore for FsPromptStore {
    fn lookup(&self, category: &str) -> Option<String> {
        let path = self.base.join(format!("{category}.txt"));
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Err(err) => {
                tracing::debug!("prompt template {} unavailable: {}", path.display(), err);
                None
            }
        }
    }
}

/// Always-absent store; forces the built-in rule table.
pub struct NullPromptStore;

impl PromptStore for NullPromptStore {
    fn lookup(&self, _category: &str) -> Option<String> {
        None
    }
}

static BREATHING_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(breathing|breathe|breathing exercise|help me breathe|panic attack|can't breathe|hyperventilating|panic)\b").unwrap()
});
static DISTRESS_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(sad|depressed|upset|hurt|lonely|scared)\b").unwrap());
static LEARN_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(learn|teach|explain|what is|how to)\b").unwrap());
static HOPELESS_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(hopeless|worthless|can't|impossible|give up)\b").unwrap());

static PANIC_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(panic|can't breathe|hyperventilating|panic attack|overwhelmed)\b").unwrap()
});
static FEELING_GOOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(good|great|happy|fine|okay)\b").unwrap());
static FEELING_BAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(bad|sad|anxious|stressed|worried|tired)\b").unwrap());

/// Routes a message to the template category whose reply family applies.
pub(crate) fn template_category(message_lower: &str, history: &[ChatTurn]) -> &'static str {
    if BREATHING_WORDS.is_match(message_lower) {
        return BREATHING_RELAXATION;
    }
    if DISTRESS_WORDS.is_match(message_lower) {
        return EMOTIONAL_SUPPORT;
    }
    if LEARN_WORDS.is_match(message_lower) {
        return WELLBEING_LESSONS;
    }
    if HOPELESS_WORDS.is_match(message_lower) {
        return POSITIVE_REDIRECT;
    }
    if history.is_empty() {
        return EMOTIONAL_CHECKIN;
    }
    EMOTIONAL_SUPPORT
}

/// Template-driven reply, or None when the store has no template for the
/// matched category.
pub fn prompted_response(
    message: &str,
    history: &[ChatTurn],
    store: &dyn PromptStore,
) -> Option<String> {
    let lower = message.to_lowercase();
    let category = template_category(&lower, history);
    store.lookup(category)?;
    Some(family_reply(category, &lower))
}

fn family_reply(category: &'static str, message_lower: &str) -> String {
    match category {
        BREATHING_RELAXATION => {
            if PANIC_WORDS.is_match(message_lower) {
                return "I hear that you're feeling really overwhelmed right now. Let's focus on your breathing together. Try breathing in for 4 counts, hold for 4, and breathe out for 6. You're safe, and this feeling will pass. 💙".to_string();
            }
            pick(&[
                "Let's try the 4-7-8 breathing technique together. Inhale through your nose for 4 seconds, hold for 7, and exhale slowly for 8. Ready? 🌸",
                "Close your eyes for a moment. Imagine a gentle wave washing over your body. Inhale deeply... and release. How does that feel?",
                "I'm here with you. Let's take three slow, deep breaths together. Breathe in... hold... and slowly breathe out. You're doing great. 💙",
            ])
        }
        EMOTIONAL_CHECKIN => {
            if FEELING_GOOD.is_match(message_lower) {
                "I'm glad to hear that ✨ It's wonderful when we can appreciate these positive moments. Would you like to explore something relaxing today, or is there anything specific on your mind?".to_string()
            } else if FEELING_BAD.is_match(message_lower) {
                "Thank you for sharing that with me 💛 It takes courage to acknowledge how we're feeling. It's completely okay to feel this way. Would you like to take a breathing break together, or would you prefer to talk about what's on your mind?".to_string()
            } else {
                "🌼 Hi there! How are you feeling today? I'm here for you, and there's no pressure to be anything other than exactly where you are right now.".to_string()
            }
        }
        EMOTIONAL_SUPPORT => pick(&[
            "I'm here with you. Would you like to share what's been on your mind lately? Sometimes just putting feelings into words can help. 🤗",
            "What emotion feels strongest for you right now? There's no right or wrong answer - I'm just here to listen and support you.",
            "Is there something you wish someone would say to you right now? Sometimes we know exactly what we need to hear. 💝",
        ]),
        POSITIVE_REDIRECT => pick(&[
            "You're doing your best, and that's enough today. Let's take one step at a time together. What feels most manageable for you right now? 🌟",
            "Even in the darkest moments, there's light ahead. I believe in you, and I'm here to walk alongside you. What's one small thing that might bring you a tiny bit of comfort today?",
            "Your feelings are valid, and you don't have to carry them alone. What would it look like to be gentle with yourself right now? 🌸",
        ]),
        WELLBEING_LESSONS => {
            if message_lower.contains("mindfulness") {
                "Mindfulness is about paying attention to the present moment without judgment. You can practice by focusing on your breath for just one minute. Would you like to try a quick mindfulness exercise together?".to_string()
            } else if message_lower.contains("stress") {
                "Stress is a natural response to life's demands. The key is learning when to pause and reset. One simple technique is the 'STOP' method: Stop, Take a breath, Observe your feelings, and Proceed mindfully. How does that sound?".to_string()
            } else if message_lower.contains("gratitude") {
                "Gratitude is like a muscle - the more we practice it, the stronger it gets. Even naming one small thing you're grateful for can shift your perspective. What's something tiny that brought you a moment of appreciation today?".to_string()
            } else {
                fallback_line()
            }
        }
        _ => fallback_line(),
    }
}

fn fallback_line() -> String {
    "I hear you, and I'm here to support you. Every feeling you have is valid, and you don't have to go through this alone. What would feel most helpful for you right now? 💙".to_string()
}

fn pick(pool: &[&str]) -> String {
    pool.choose(&mut rand::thread_rng())
        .map(|s| s.to_string())
        .unwrap_or_else(fallback_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubStore;

    impl PromptStore for StubStore {
        fn lookup(&self, _category: &str) -> Option<String> {
            Some("stub template".to_string())
        }
    }

    #[test]
    fn test_category_routing() {
        assert_eq!(template_category("help me breathe", &[]), BREATHING_RELAXATION);
        assert_eq!(
            template_category("i feel so lonely tonight", &[]),
            EMOTIONAL_SUPPORT
        );
        assert_eq!(template_category("what is mindfulness", &[]), WELLBEING_LESSONS);
        assert_eq!(
            template_category("everything feels impossible", &[]),
            POSITIVE_REDIRECT
        );
        // No keyword, empty history -> first-contact check-in
        assert_eq!(template_category("well then", &[]), EMOTIONAL_CHECKIN);
    }

    #[test]
    fn test_null_store_yields_no_reply() {
        let reply = prompted_response("help me breathe", &[], &NullPromptStore);
        assert!(reply.is_none());
    }

    #[test]
    fn test_panic_branch_is_deterministic() {
        let reply = prompted_response("I'm having a panic attack", &[], &StubStore).unwrap();
        assert!(reply.contains("breathing in for 4 counts"));
    }

    #[test]
    fn test_lessons_branch_mentions_topic() {
        let reply = prompted_response("can you explain gratitude to me", &[], &StubStore).unwrap();
        assert!(reply.contains("Gratitude"));
    }

    #[test]
    fn test_fs_store_missing_file_is_none() {
        let store = FsPromptStore::new("/definitely/not/here");
        assert!(store.lookup(BREATHING_RELAXATION).is_none());
    }

    #[test]
    fn test_fs_store_reads_and_trims() {
        let dir = std::env::temp_dir().join(format!("breeza_prompts_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("emotional_checkin.txt"), "  check in warmly \n").unwrap();

        let store = FsPromptStore::new(&dir);
        assert_eq!(
            store.lookup(EMOTIONAL_CHECKIN).as_deref(),
            Some("check in warmly")
        );

        std::fs::remove_dir_all(&dir).ok();
    }
}
