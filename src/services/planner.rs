//! Weekly Plan Composer: assembles a mood-weighted activity pool from
//! fixed catalogs, then samples 2-4 tasks per day for Monday..Sunday with
//! a best-effort rule against repeating the previous day's activities.
//! The adjacency check only looks one day back; that weak guarantee is
//! deliberate.

use crate::domain::models::{Activity, Category, DayPlan, Difficulty, WeeklyPlan};
use chrono::Utc;
use rand::seq::SliceRandom;

const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

macro_rules! activity {
    ($name:literal, $minutes:literal, $category:ident, $difficulty:ident) => {
        Activity {
            name: $name,
            duration_minutes: $minutes,
            category: Category::$category,
            difficulty: Difficulty::$difficulty,
        }
    };
}

pub const MINDFULNESS_ACTIVITIES: [Activity; 7] = [
    activity!("5-minute morning meditation", 5, Mindfulness, Easy),
    activity!("Gratitude journaling", 10, Mindfulness, Easy),
    activity!("Deep breathing exercise", 3, Mindfulness, Easy),
    activity!("Body scan meditation", 15, Mindfulness, Medium),
    activity!("Mindful walking", 20, Mindfulness, Easy),
    activity!("Progressive muscle relaxation", 12, Mindfulness, Medium),
    activity!("Loving-kindness meditation", 10, Mindfulness, Medium),
];

pub const EXERCISE_ACTIVITIES: [Activity; 7] = [
    activity!("Light stretching routine", 10, Exercise, Easy),
    activity!("15-minute walk", 15, Exercise, Easy),
    activity!("Yoga flow", 20, Exercise, Medium),
    activity!("Dance to favorite music", 10, Exercise, Easy),
    activity!("Bodyweight exercises", 15, Exercise, Medium),
    activity!("Nature hike", 30, Exercise, Medium),
    activity!("Swimming", 25, Exercise, Medium),
];

pub const SOCIAL_ACTIVITIES: [Activity; 6] = [
    activity!("Call a friend or family member", 15, Social, Easy),
    activity!("Write a thank you message", 5, Social, Easy),
    activity!("Join a community activity", 60, Social, Medium),
    activity!("Have coffee with a colleague", 30, Social, Easy),
    activity!("Volunteer for a cause", 120, Social, Medium),
    activity!("Attend a social event", 90, Social, Medium),
];

pub const CREATIVE_ACTIVITIES: [Activity; 7] = [
    activity!("Draw or sketch", 20, Creative, Easy),
    activity!("Write in a journal", 15, Creative, Easy),
    activity!("Listen to music mindfully", 10, Creative, Easy),
    activity!("Try a new recipe", 45, Creative, Medium),
    activity!("Photography walk", 30, Creative, Easy),
    activity!("Craft or DIY project", 60, Creative, Medium),
    activity!("Learn a musical instrument", 25, Creative, Hard),
];

pub const LEARNING_ACTIVITIES: [Activity; 6] = [
    activity!("Read for pleasure", 20, Learning, Easy),
    activity!("Watch an educational video", 15, Learning, Easy),
    activity!("Practice a new language", 10, Learning, Medium),
    activity!("Take an online course", 30, Learning, Medium),
    activity!("Listen to a podcast", 25, Learning, Easy),
    activity!("Research a topic of interest", 20, Learning, Easy),
];

pub const REST_ACTIVITIES: [Activity; 6] = [
    activity!("Take a warm bath", 20, Rest, Easy),
    activity!("Practice good sleep hygiene", 30, Rest, Easy),
    activity!("Gentle evening routine", 15, Rest, Easy),
    activity!("Afternoon power nap", 20, Rest, Easy),
    activity!("Digital detox hour", 60, Rest, Medium),
    activity!("Relaxing tea ceremony", 10, Rest, Easy),
];

const ANXIOUS_TIPS: [&str; 4] = [
    "Focus on breathing exercises when feeling overwhelmed",
    "Break large tasks into smaller, manageable steps",
    "Practice grounding techniques using your five senses",
    "Remember that anxiety is temporary and will pass",
];

const SAD_TIPS: [&str; 4] = [
    "Be gentle with yourself during difficult times",
    "Reach out to supportive friends or family",
    "Engage in activities that usually bring you joy",
    "Consider professional support if sadness persists",
];

const STRESSED_TIPS: [&str; 4] = [
    "Prioritize tasks and let go of perfectionism",
    "Take regular breaks throughout your day",
    "Practice saying 'no' to additional commitments",
    "Use time management techniques like the Pomodoro method",
];

const HAPPY_TIPS: [&str; 4] = [
    "Share your positive energy with others",
    "Use this momentum to tackle challenging goals",
    "Practice gratitude to maintain your positive state",
    "Celebrate your achievements, both big and small",
];

const NEUTRAL_TIPS: [&str; 4] = [
    "Use this stable time to build healthy habits",
    "Explore new activities or hobbies",
    "Focus on personal growth and self-improvement",
    "Prepare coping strategies for future challenges",
];

fn sample<T: Copy>(pool: &[T], count: usize) -> Vec<T> {
    pool.choose_multiple(&mut rand::thread_rng(), count)
        .copied()
        .collect()
}

fn full_catalog() -> Vec<Activity> {
    let mut all = Vec::new();
    all.extend_from_slice(&MINDFULNESS_ACTIVITIES);
    all.extend_from_slice(&EXERCISE_ACTIVITIES);
    all.extend_from_slice(&SOCIAL_ACTIVITIES);
    all.extend_from_slice(&CREATIVE_ACTIVITIES);
    all.extend_from_slice(&LEARNING_ACTIVITIES);
    all.extend_from_slice(&REST_ACTIVITIES);
    all
}

pub(crate) fn tips_for_mood(mood: &str) -> &'static [&'static str] {
    match mood.to_lowercase().as_str() {
        "anxious" => &ANXIOUS_TIPS,
        "sad" => &SAD_TIPS,
        "stressed" => &STRESSED_TIPS,
        "happy" => &HAPPY_TIPS,
        _ => &NEUTRAL_TIPS,
    }
}

/// Assembles the working activity pool for one generation call: always
/// 2 mindfulness picks, then a mood-specific mixture, then one extra
/// pick per recognized preference. Unrecognized moods get a random
/// mixture from the full catalog; unrecognized preferences are ignored.
pub fn build_activity_pool(mood: &str, preferences: &[String]) -> Vec<Activity> {
    let mut pool = sample(&MINDFULNESS_ACTIVITIES, 2);

    match mood.to_lowercase().as_str() {
        "anxious" => {
            pool.extend(sample(&REST_ACTIVITIES, 2));
            let easy: Vec<Activity> = EXERCISE_ACTIVITIES
                .iter()
                .copied()
                .filter(|a| a.difficulty == Difficulty::Easy)
                .collect();
            pool.extend(sample(&easy, 1));
        }
        "sad" => {
            pool.extend(sample(&SOCIAL_ACTIVITIES, 2));
            pool.extend(sample(&CREATIVE_ACTIVITIES, 1));
        }
        "stressed" => {
            pool.extend(sample(&REST_ACTIVITIES, 2));
            pool.extend(sample(&EXERCISE_ACTIVITIES, 1));
        }
        "happy" => {
            pool.extend(sample(&SOCIAL_ACTIVITIES, 1));
            pool.extend(sample(&CREATIVE_ACTIVITIES, 1));
            pool.extend(sample(&EXERCISE_ACTIVITIES, 1));
        }
        _ => pool.extend(sample(&full_catalog(), 3)),
    }

    for preference in preferences {
        match preference.to_lowercase().as_str() {
            "exercise" => pool.extend(sample(&EXERCISE_ACTIVITIES, 1)),
            "social" => pool.extend(sample(&SOCIAL_ACTIVITIES, 1)),
            "creative" => pool.extend(sample(&CREATIVE_ACTIVITIES, 1)),
            "learning" => pool.extend(sample(&LEARNING_ACTIVITIES, 1)),
            _ => {}
        }
    }

    pool
}

/// Drops sampled activities already used the previous day, but only
/// commits the filtered list when at least 2 survive; otherwise the raw
/// sample stands, repeats and all.
fn dedup_against_previous(day_sample: Vec<Activity>, previous: &[Activity]) -> Vec<Activity> {
    let previous_names: Vec<&str> = previous.iter().map(|task| task.name).collect();
    let filtered: Vec<Activity> = day_sample
        .iter()
        .copied()
        .filter(|task| !previous_names.contains(&task.name))
        .collect();
    if filtered.len() >= 2 {
        filtered.into_iter().take(3).collect()
    } else {
        day_sample
    }
}

pub fn generate_weekly_plan(mood: &str, preferences: &[String]) -> WeeklyPlan {
    let pool = build_activity_pool(mood, preferences);

    let mut days: Vec<DayPlan> = Vec::with_capacity(DAYS_OF_WEEK.len());
    for (index, day_name) in DAYS_OF_WEEK.iter().enumerate() {
        let mut tasks = sample(&pool, pool.len().min(3));
        if index > 0 {
            tasks = dedup_against_previous(tasks, &days[index - 1].tasks);
        }
        let focus_category = tasks
            .first()
            .map(|task| task.category.label())
            .unwrap_or("wellness");
        days.push(DayPlan {
            tasks,
            focus: format!("{day_name} focus: {focus_category}"),
        });
    }

    WeeklyPlan {
        days,
        theme: format!("Weekly {mood} mood support plan"),
        tips: sample(tips_for_mood(mood), 3),
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_shape() {
        let plan = generate_weekly_plan("anxious", &[]);
        assert_eq!(plan.days.len(), 7);
        for day in &plan.days {
            assert!((1..=3).contains(&day.tasks.len()), "day: {day:?}");
        }
        assert_eq!(plan.tips.len(), 3);
        assert_eq!(plan.theme, "Weekly anxious mood support plan");
        assert!(plan.days[0].focus.starts_with("Monday focus: "));
        assert!(plan.days[6].focus.starts_with("Sunday focus: "));
    }

    #[test]
    fn test_anxious_pool_composition() {
        let pool = build_activity_pool("anxious", &[]);
        assert_eq!(pool.len(), 5);
        let count = |category: Category| {
            pool.iter().filter(|a| a.category == category).count()
        };
        assert_eq!(count(Category::Mindfulness), 2);
        assert_eq!(count(Category::Rest), 2);
        assert_eq!(count(Category::Exercise), 1);
        let exercise = pool
            .iter()
            .find(|a| a.category == Category::Exercise)
            .unwrap();
        assert_eq!(exercise.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_preferences_extend_pool() {
        let pool =
            build_activity_pool("happy", &["learning".to_string(), "juggling".to_string()]);
        // 2 mindfulness + 1 social + 1 creative + 1 exercise + 1 learning;
        // the unknown preference is ignored
        assert_eq!(pool.len(), 6);
        assert!(pool.iter().any(|a| a.category == Category::Learning));
    }

    #[test]
    fn test_unrecognized_mood_uses_default_mix() {
        let pool = build_activity_pool("Bewildered", &[]);
        assert_eq!(pool.len(), 5);
        assert!(
            pool.iter()
                .filter(|a| a.category == Category::Mindfulness)
                .count()
                >= 2
        );
    }

    #[test]
    fn test_mood_lookup_is_case_insensitive() {
        let pool = build_activity_pool("ANXIOUS", &[]);
        assert_eq!(
            pool.iter().filter(|a| a.category == Category::Rest).count(),
            2
        );
    }

    #[test]
    fn test_dedup_commits_when_two_survive() {
        let prev = vec![MINDFULNESS_ACTIVITIES[0], REST_ACTIVITIES[0]];
        let sample = vec![
            MINDFULNESS_ACTIVITIES[0],
            EXERCISE_ACTIVITIES[0],
            SOCIAL_ACTIVITIES[0],
        ];
        let deduped = dedup_against_previous(sample, &prev);
        assert_eq!(deduped.len(), 2);
        assert!(deduped.iter().all(|a| a.name != MINDFULNESS_ACTIVITIES[0].name));
    }

    #[test]
    fn test_dedup_keeps_sample_when_too_few_survive() {
        let prev = vec![MINDFULNESS_ACTIVITIES[0], REST_ACTIVITIES[0]];
        let sample = vec![MINDFULNESS_ACTIVITIES[0], REST_ACTIVITIES[0], EXERCISE_ACTIVITIES[0]];
        let deduped = dedup_against_previous(sample.clone(), &prev);
        assert_eq!(deduped, sample);
    }

    #[test]
    fn test_tips_come_from_mood_pool() {
        let plan = generate_weekly_plan("sad", &[]);
        for tip in &plan.tips {
            assert!(SAD_TIPS.contains(tip), "unexpected tip: {tip}");
        }
        // tips are sampled without replacement
        let mut unique = plan.tips.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_unknown_mood_falls_back_to_neutral_tips() {
        assert_eq!(tips_for_mood("perplexed"), &NEUTRAL_TIPS);
        assert_eq!(tips_for_mood("Stressed"), &STRESSED_TIPS);
    }
}
