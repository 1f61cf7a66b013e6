// src/models/archetype.rs

use serde::Serialize;

use crate::models::category::Category;

/// Display metadata for a courage category.
///
/// This table is the only place category titles and copy live; the web
/// results, shared results and emails all read from it.
#[derive(Debug, Serialize)]
pub struct Archetype {
    pub category: Category,
    pub slug: &'static str,
    /// Animal title, e.g. "The Lion".
    pub title: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
    pub quote: &'static str,
    pub description: &'static str,
    /// Overplay warning shown under the description.
    pub watch_for: &'static str,
    /// Short blurb for categories outside the top two.
    pub one_liner: &'static str,
}

impl Archetype {
    /// "🦁 The Lion"
    pub fn heading(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }
}

/// Indexed by `Category::index()`.
pub static ARCHETYPES: [Archetype; Category::COUNT] = [
    Archetype {
        category: Category::Physical,
        slug: Category::Physical.slug(),
        title: "The Lion",
        emoji: "🦁",
        tagline: "Move first. Adjust later.",
        quote: "Physical courage isn't always about running into danger. It's about staying in your body when everyone else is trying to escape theirs.",
        description: "You possess remarkable resilience when facing physical challenges. Like the lion, you confront threats head-on, using your strength and protective instincts to defend yourself and those around you. You take the mic with wobbly knees, push through discomfort, and keep showing up. Others feel tangible groundedness from you: calm under pressure, quiet reliability when things go sideways.",
        watch_for: "You may normalize pain, disappear into doing, or over-identify with being the one who can handle it.",
        one_liner: "Confront threats head-on with strength and resilience.",
    },
    Archetype {
        category: Category::Emotional,
        slug: Category::Emotional.slug(),
        title: "The Octopus",
        emoji: "🐙",
        tagline: "Feel it before you fix it.",
        quote: "Emotional courage doesn't mean having no fear of vulnerability. It means choosing honesty anyway.",
        description: "You are open and honest with your emotions, willing to be vulnerable and face difficult feelings in order to grow. Like the octopus, you navigate emotional depths and reveal your true self. You can name your own emotions with clarity, you're willing to pause or admit hurt even in front of others, and you help people feel like they don't need to hide what they feel. Others experience emotional safety and real trust around you.",
        watch_for: "You may overexpose without grounding, hold emotional weight that isn't yours, or confuse expression with resolution.",
        one_liner: "Navigate emotional depths with vulnerability and honesty.",
    },
    Archetype {
        category: Category::Moral,
        slug: Category::Moral.slug(),
        title: "The Wolf",
        emoji: "🐺",
        tagline: "Hold the line, even alone.",
        quote: "Moral courage isn't always about being bold. Often, it's a quiet refusal. A steady no. A choice no one sees but you.",
        description: "You have a strong sense of right and wrong and are unafraid to defend your principles, even when it comes at a personal cost. Like the wolf, you live by an inner code, standing up for what's right within your community even when faced with adversity. You feel an inner boundary when something crosses a line and you act on your values even when no one's watching. Others trust that you won't trade values for convenience.",
        watch_for: "You may become inflexible, isolate instead of engaging disagreement, or carry moral weight alone and silently.",
        one_liner: "Defend your principles with unwavering conviction.",
    },
    Archetype {
        category: Category::Social,
        slug: Category::Social.slug(),
        title: "The Dolphin",
        emoji: "🐬",
        tagline: "Go toward people, not away.",
        quote: "Social courage isn't about being loud or charming. It's about choosing connection over safety and authenticity over silence.",
        description: "Your confidence in social settings allows you to stand up for yourself and others, even when it means going against the crowd. Like the dolphin, you navigate social dynamics with relational intelligence and bold belonging. You're willing to introduce yourself when it's awkward, speak up when it might ruffle someone, and be visible even when it makes you vulnerable. Others feel openness and permission to show up as themselves.",
        watch_for: "You may take on social risks others aren't ready for, over-share for connection, or speak before sensing the space.",
        one_liner: "Navigate social dynamics with authenticity and bold belonging.",
    },
    Archetype {
        category: Category::Intellectual,
        slug: Category::Intellectual.slug(),
        title: "The Owl",
        emoji: "🦉",
        tagline: "Question everything, including yourself.",
        quote: "Intellectual courage isn't about being the smartest person in the room. It's about making space for what you don't yet know.",
        description: "You are eager to challenge your beliefs and explore new ideas, embracing uncertainty as an opportunity to grow. Like the owl, you seek understanding even in the dark, using keen insight to navigate complex terrain. You're willing to say \"I don't know\" in front of others, challenge ideas including your own, and learn rather than be seen as always right. Others experience a culture where questions matter more than certainty.",
        watch_for: "You may stay in the abstract to avoid emotional risk, stall action for more information, or appear overly contrarian.",
        one_liner: "Embrace uncertainty and challenge beliefs to grow.",
    },
    Archetype {
        category: Category::Spiritual,
        slug: Category::Spiritual.slug(),
        title: "The Butterfly",
        emoji: "🦋",
        tagline: "Trust the vision before the evidence arrives.",
        quote: "Spiritual courage is what allows vision to survive volatility. You don't need certainty to lead; you need alignment.",
        description: "You remain grounded in purpose, values, or long-range vision especially when the path forward is unclear. Like the butterfly emerging from its cocoon, you transform through life's challenges. You hold steady during ambiguity, choose perspective when pressure calls for reaction, and move through change by staying connected to meaning. Others feel calm during complex transitions and conviction that transcends short-term outcomes.",
        watch_for: "You may default to abstract optimism when clarity is needed, under-communicate in crisis, or bypass hard conversations in favor of higher purpose.",
        one_liner: "Stay grounded in purpose through life's transformations.",
    },
];
