//! Response Selector: ordered keyword-rule evaluation over the current
//! message plus a short rolling history. First match wins; within a
//! matched pool the wording is chosen uniformly at random. Total over
//! non-empty input - no rule path can fail, the default pool always
//! applies.

use crate::domain::models::{ChatTurn, Mood, Topic};
use crate::services::prompts::{self, PromptStore};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;

static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(hi|hello|hey|good morning|good afternoon|good evening)").unwrap()
});
static CALM_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(calm|relaxed|fine|okay|good|peaceful|content)\b").unwrap());
static SEEKING_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(help|need|want|breathing|exercise)\b").unwrap());
static ANXIETY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(anxious|anxiety|stressed|stress|overwhelmed|worried|panic)\b").unwrap()
});
static ANXIETY_HELP_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(help|need|what should|guide|breathing|exercise)\b").unwrap());
static SADNESS_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(sad|depressed|down|low|blue|upset|crying|cry)\b").unwrap());
static ANGER_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(angry|mad|frustrated|irritated|annoyed|furious)\b").unwrap());
static HAPPY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(happy|excited|great|amazing|wonderful|fantastic|good news|celebration)\b")
        .unwrap()
});
static PLAN_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(weekly plan|week plan|plan|schedule|routine)\b").unwrap());
static BREATHING_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(breathing|breathe|breath|relaxation|calm down)\b").unwrap());
static TECHNIQUE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(exercise|technique|help|guide|need)\b").unwrap());

// Mood inference over the last few turns
static MOOD_ANXIOUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(anxious|anxiety|worried|panic|nervous)\b").unwrap());
static MOOD_SAD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(sad|depressed|down|blue|upset|crying)\b").unwrap());
static MOOD_STRESSED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(stressed|overwhelmed|pressure|busy|tired)\b").unwrap());
static MOOD_HAPPY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(happy|excited|great|wonderful|amazing|good)\b").unwrap());
static MOOD_ANGRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(angry|mad|frustrated|irritated|annoyed)\b").unwrap());

// Topic detection over the prior user turn
static TOPIC_WORK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(work|job|career|boss|colleague)\b").unwrap());
static TOPIC_SCHOOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(school|college|university|exam|study|student)\b").unwrap());
static TOPIC_FAMILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(family|parent|mom|dad|sibling|relative)\b").unwrap());
static TOPIC_RELATIONSHIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(relationship|partner|boyfriend|girlfriend|spouse)\b").unwrap());
static TOPIC_HEALTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(health|sick|illness|doctor|medical)\b").unwrap());
static TOPIC_FINANCIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(money|financial|debt|bills|budget)\b").unwrap());

// Topic-specific trigger words in the current message
static WORK_TRIGGERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(deadline|pressure|boss|meeting)\b").unwrap());
static SCHOOL_TRIGGERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(exam|test|grade|assignment|workload)\b").unwrap());
static FAMILY_TRIGGERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(difficult|hard|problem|issue)\b").unwrap());

const BREATHING_OFFER: &str = "I hear that you're feeling anxious and looking for some support. Would a quick breathing exercise help right now? [Start Breathing Exercise]";

const GENERIC_GREETINGS: [&str; 4] = [
    "🌼 Hello! I'm BreezaAI, and I'm here to support your mental wellness journey. How are you feeling right now?",
    "💙 Hi there! I'm glad you're here. What's on your mind today?",
    "✨ Welcome! I'm here to listen and support you. How can I help you feel a bit better today?",
    "🌸 Hello! It's wonderful that you're taking time for your mental health. What's going on for you right now?",
];

const CALM_RESPONSES: [&str; 4] = [
    "That's wonderful that you're feeling calm. It's great when we can find those peaceful moments. How has your day been treating you?",
    "I'm so glad to hear you're feeling relaxed. Those moments of peace are precious. What's been helping you feel this way?",
    "It sounds like you're in a good space right now. That's really nice to hear. Is there anything specific that's contributing to this feeling?",
    "That's lovely that you're feeling content. Sometimes it's nice just to acknowledge when we're doing well. What's been going well for you lately?",
];

const ANXIETY_RESPONSES: [&str; 4] = [
    "I can hear that you're feeling anxious right now. That's really tough. What's been weighing on your mind the most?",
    "Anxiety can feel so overwhelming. I'm here with you. Can you tell me a bit more about what's making you feel this way?",
    "It sounds like you're going through a stressful time. That's really hard. What's been the most challenging part of your day?",
    "I understand you're feeling stressed. Those feelings are valid. Would you like to talk about what's been causing this stress?",
];

const SADNESS_RESPONSES: [&str; 3] = [
    "I'm sorry you're feeling sad right now. Those feelings are completely valid. Sometimes when we're feeling low, even small things like drinking some water or stepping outside for a moment can help a little. What feels manageable for you right now?",
    "It sounds like you're having a tough time. I'm here with you. When we're feeling down, connecting with someone we care about or doing something gentle for ourselves can sometimes provide a tiny bit of comfort. What usually helps you feel a little better?",
    "I hear that you're feeling really low. That's so hard. Sometimes when everything feels heavy, taking one small step like texting a friend or making a warm drink can be a gentle way to care for ourselves. What feels possible for you today?",
];

const ANGER_RESPONSES: [&str; 3] = [
    "It sounds like you're feeling really frustrated right now. That's completely understandable. When we're feeling this way, sometimes taking a brief pause can help us think more clearly. Would you like to try counting to 10 slowly, or would you prefer to talk about what's making you feel this way?",
    "I can hear the frustration in your message. Those feelings make complete sense. Sometimes when we're angry, a quick pause - like taking three deep breaths - can help us feel a bit more grounded before we figure out next steps. What feels right for you?",
    "Anger can be such an intense emotion. It sounds like something really got to you. Would it help to take a moment to breathe, or would you rather talk through what happened?",
];

const HAPPY_RESPONSES: [&str; 3] = [
    "That's wonderful to hear! I love that you're feeling happy. When we have these positive moments, it can be really nice to savor them. What's been the best part of your day?",
    "How exciting! It's so great when things go well. These happy moments are worth celebrating. Would you like to share what's been making you feel so good?",
    "I'm so glad you're feeling excited! Positive emotions like this are such a gift. Sometimes writing down what we're grateful for in these moments can help us remember them later. What's been bringing you joy?",
];

const PLAN_POINTER: &str = "I'd love to help you create a personalized weekly wellness plan! You can access this feature by clicking the 'Weekly Plan' button below our chat. It will create a customized plan based on how you're feeling. Would you like to try that?";

const BREATHING_POINTER: &str = "I'd be happy to guide you through a breathing exercise. You can start one by clicking the 'Breathing Exercise' button below our chat. It will walk you through a calming technique step by step. Would you like to try that now?";

const DEFAULT_RESPONSES: [&str; 4] = [
    "Thank you for sharing that with me. I'm here to listen and support you. Can you tell me a bit more about how you're feeling?",
    "I appreciate you opening up. Everyone's experience is unique and valid. What's been on your mind lately?",
    "It sounds like you have something important to share. I'm here to support you. How can I help you feel a bit better today?",
    "I'm glad you're here and taking time to check in with yourself. That's really important. What would be most helpful for you right now?",
];

const WORK_CONTEXT_REPLY: &str = "Work pressure can definitely amplify anxiety - there's so much we can't control in those environments. What specific aspect of work has been weighing on you the most? Sometimes breaking it down into smaller pieces can help.";

const SCHOOL_CONTEXT_REPLY: &str = "School can definitely be a source of anxiety - there's so much pressure and uncertainty. What specifically about your studies has been weighing on you the most? Sometimes it helps to focus on just the next small step.";

const FAMILY_CONTEXT_REPLY: &str = "Family relationships can be really complex and emotionally challenging. It sounds like you're dealing with something difficult. Would you like to talk about what's been happening, or would you prefer some strategies for managing the stress this is causing?";

/// Picks one supportive reply for the message. Template-driven families
/// take precedence when the store has the matched category, then topic
/// context, then the mood/intent rules in fixed priority.
pub fn select_response(
    message: &str,
    history: &[ChatTurn],
    user_name: Option<&str>,
    store: &dyn PromptStore,
) -> String {
    let lower = message.to_lowercase();
    let mood = infer_mood(history);

    if let Some(reply) = prompts::prompted_response(message, history, store) {
        return reply;
    }

    if let Some(reply) = contextual_reply(&lower, history, mood) {
        return reply.to_string();
    }

    if GREETING.is_match(&lower) {
        return match user_name {
            Some(name) => personalized_greeting(name),
            None => pick(&GENERIC_GREETINGS),
        };
    }

    if CALM_WORDS.is_match(&lower) && !SEEKING_WORDS.is_match(&lower) {
        return pick(&CALM_RESPONSES);
    }

    if ANXIETY_WORDS.is_match(&lower) {
        if ANXIETY_HELP_WORDS.is_match(&lower) {
            return BREATHING_OFFER.to_string();
        }
        return pick(&ANXIETY_RESPONSES);
    }

    if SADNESS_WORDS.is_match(&lower) {
        return pick(&SADNESS_RESPONSES);
    }

    if ANGER_WORDS.is_match(&lower) {
        return pick(&ANGER_RESPONSES);
    }

    if HAPPY_WORDS.is_match(&lower) {
        return pick(&HAPPY_RESPONSES);
    }

    if PLAN_WORDS.is_match(&lower) {
        return PLAN_POINTER.to_string();
    }

    if BREATHING_WORDS.is_match(&lower) && TECHNIQUE_WORDS.is_match(&lower) {
        return BREATHING_POINTER.to_string();
    }

    pick(&DEFAULT_RESPONSES)
}

fn personalized_greeting(name: &str) -> String {
    let variants = [
        format!("🌼 Hello {name}! I'm BreezaAI, and I'm here to support your mental wellness journey. How are you feeling right now?"),
        format!("💙 Hi {name}! I'm glad you're here. What's on your mind today?"),
        format!("✨ Welcome back {name}! I'm here to listen and support you. How can I help you feel a bit better today?"),
        format!("🌸 Hello {name}! It's wonderful that you're taking time for your mental health. What's going on for you right now?"),
    ];
    variants
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| variants[0].clone())
}

/// Mood over the last 3 turns' concatenated lowercase text; first
/// matching keyword set wins, Neutral when nothing matches.
pub(crate) fn infer_mood(history: &[ChatTurn]) -> Mood {
    let start = history.len().saturating_sub(3);
    let text = history[start..]
        .iter()
        .map(|turn| turn.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if MOOD_ANXIOUS.is_match(&text) {
        Mood::Anxious
    } else if MOOD_SAD.is_match(&text) {
        Mood::Sad
    } else if MOOD_STRESSED.is_match(&text) {
        Mood::Stressed
    } else if MOOD_HAPPY.is_match(&text) {
        Mood::Happy
    } else if MOOD_ANGRY.is_match(&text) {
        Mood::Angry
    } else {
        Mood::Neutral
    }
}

pub(crate) fn extract_topic(text: &str) -> Option<Topic> {
    if TOPIC_WORK.is_match(text) {
        Some(Topic::Work)
    } else if TOPIC_SCHOOL.is_match(text) {
        Some(Topic::School)
    } else if TOPIC_FAMILY.is_match(text) {
        Some(Topic::Family)
    } else if TOPIC_RELATIONSHIP.is_match(text) {
        Some(Topic::Relationship)
    } else if TOPIC_HEALTH.is_match(text) {
        Some(Topic::Health)
    } else if TOPIC_FINANCIAL.is_match(text) {
        Some(Topic::Financial)
    } else {
        None
    }
}

/// Topic-aware contextual reply. The topic comes from the prior user
/// turn; the current message must carry topic-specific trigger words.
/// Work and school additionally require an anxious or stressed mood.
fn contextual_reply(
    message_lower: &str,
    history: &[ChatTurn],
    mood: Mood,
) -> Option<&'static str> {
    if history.len() < 2 {
        return None;
    }
    let prior = history[history.len() - 2].content.to_lowercase();
    let topic = extract_topic(&prior)?;
    let distressed = matches!(mood, Mood::Anxious | Mood::Stressed);

    match topic {
        Topic::Work if distressed && WORK_TRIGGERS.is_match(message_lower) => {
            Some(WORK_CONTEXT_REPLY)
        }
        Topic::School if distressed && SCHOOL_TRIGGERS.is_match(message_lower) => {
            Some(SCHOOL_CONTEXT_REPLY)
        }
        Topic::Family if FAMILY_TRIGGERS.is_match(message_lower) => Some(FAMILY_CONTEXT_REPLY),
        _ => None,
    }
}

fn pick(pool: &[&'static str]) -> String {
    pool.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(DEFAULT_RESPONSES[0])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;
    use crate::services::prompts::NullPromptStore;

    fn turn(role: Role, content: &str) -> ChatTurn {
        ChatTurn {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_always_returns_something() {
        let messages = [
            "hi",
            "I feel anxious",
            "zxqw 123 !!",
            "my cat ignores me",
            "I am calm and peaceful",
        ];
        for msg in messages {
            let reply = select_response(msg, &[], None, &NullPromptStore);
            assert!(!reply.is_empty(), "empty reply for {msg:?}");
        }
    }

    #[test]
    fn test_greeting_uses_name() {
        let reply = select_response("hello", &[], Some("Maya"), &NullPromptStore);
        assert!(reply.contains("Maya"), "got: {reply}");
    }

    #[test]
    fn test_generic_greeting_stays_in_pool() {
        for _ in 0..20 {
            let reply = select_response("hi", &[], None, &NullPromptStore);
            assert!(GENERIC_GREETINGS.contains(&reply.as_str()), "got: {reply}");
        }
    }

    #[test]
    fn test_anxious_plus_help_is_fixed_offer() {
        let reply = select_response(
            "I'm anxious and I need help",
            &[],
            None,
            &NullPromptStore,
        );
        assert_eq!(reply, BREATHING_OFFER);
    }

    #[test]
    fn test_calm_without_seeking_words() {
        for _ in 0..10 {
            let reply = select_response("feeling calm and peaceful", &[], None, &NullPromptStore);
            assert!(CALM_RESPONSES.contains(&reply.as_str()), "got: {reply}");
        }
    }

    #[test]
    fn test_plan_keyword_points_at_feature() {
        let reply = select_response(
            "can you build me a weekly plan",
            &[],
            None,
            &NullPromptStore,
        );
        assert_eq!(reply, PLAN_POINTER);
    }

    #[test]
    fn test_mood_inference() {
        assert_eq!(infer_mood(&[]), Mood::Neutral);
        assert_eq!(
            infer_mood(&[turn(Role::User, "I'm so worried about tomorrow")]),
            Mood::Anxious
        );
        assert_eq!(
            infer_mood(&[turn(Role::User, "been crying all evening")]),
            Mood::Sad
        );
        // Only the last 3 turns count
        let old_then_new = [
            turn(Role::User, "I'm furious about everything"),
            turn(Role::Assistant, "tell me more"),
            turn(Role::User, "ok"),
            turn(Role::Assistant, "take your time"),
            turn(Role::User, "actually things went wonderful today"),
        ];
        assert_eq!(infer_mood(&old_then_new), Mood::Happy);
    }

    #[test]
    fn test_topic_extraction() {
        assert_eq!(extract_topic("my boss keeps calling"), Some(Topic::Work));
        assert_eq!(extract_topic("the exam is on friday"), Some(Topic::School));
        assert_eq!(extract_topic("my mom and dad argue"), Some(Topic::Family));
        assert_eq!(extract_topic("nothing in particular"), None);
    }

    #[test]
    fn test_work_context_takes_precedence() {
        let history = [
            turn(Role::User, "I'm anxious about work lately"),
            turn(Role::Assistant, "That sounds heavy. What part of it?"),
        ];
        let reply = select_response(
            "the deadline is next week",
            &history,
            None,
            &NullPromptStore,
        );
        assert_eq!(reply, WORK_CONTEXT_REPLY);
    }

    #[test]
    fn test_family_context_without_distress() {
        let history = [
            turn(Role::User, "my family is visiting"),
            turn(Role::Assistant, "How do you feel about that?"),
        ];
        let reply = select_response(
            "it's been really difficult",
            &history,
            None,
            &NullPromptStore,
        );
        assert_eq!(reply, FAMILY_CONTEXT_REPLY);
    }

    #[test]
    fn test_unmatched_falls_to_default_pool() {
        for _ in 0..10 {
            let reply = select_response("qwerty asdf zxcv", &[], None, &NullPromptStore);
            assert!(DEFAULT_RESPONSES.contains(&reply.as_str()), "got: {reply}");
        }
    }
}
