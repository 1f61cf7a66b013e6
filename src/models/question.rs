// src/models/question.rs

use serde::Serialize;

use crate::{
    config::{QUESTIONS_PER_PAGE, RESPONSE_MAX, RESPONSE_MIN, TOTAL_PAGES},
    models::category::Category,
};

/// A fixed quiz prompt. Its position in `QUESTION_BANK` is its only identifier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub category: Category,
}

impl Question {
    const fn new(text: &'static str, category: Category) -> Self {
        Self { text, category }
    }
}

pub const QUESTION_COUNT: usize = QUESTIONS_PER_PAGE * TOTAL_PAGES;

/// The question bank, in presentation order. Every page asks one question
/// per category.
pub static QUESTION_BANK: [Question; QUESTION_COUNT] = [
    // Page 1
    Question::new("I am willing to physically intervene in a dangerous situation to help someone in need.", Category::Physical),
    Question::new("I am comfortable expressing my opinions in group settings, even when my views are unpopular.", Category::Social),
    Question::new("I speak out against injustice, even when it's unpopular or difficult to do so.", Category::Moral),
    Question::new("I am open about my feelings, even when they make me vulnerable.", Category::Emotional),
    Question::new("I am willing to explore ideas or viewpoints that challenge my current beliefs.", Category::Intellectual),
    Question::new("I stay true to my core beliefs, even when they are tested by difficult circumstances.", Category::Spiritual),

    // Page 2
    Question::new("I enjoy participating in activities that involve physical risk (e.g., extreme sports, hiking in challenging environments).", Category::Physical),
    Question::new("I often take on leadership roles in social situations, even when I might face criticism.", Category::Social),
    Question::new("I am comfortable taking a stand on ethical issues, regardless of the consequences.", Category::Moral),
    Question::new("I find it easy to express deep emotions to others, even in difficult situations.", Category::Emotional),
    Question::new("I feel comfortable engaging in debates where my opinions may be criticized.", Category::Intellectual),
    Question::new("I find strength in my spiritual or philosophical practices when facing challenges.", Category::Spiritual),

    // Page 3
    Question::new("When faced with a physical challenge, I trust my body to handle it.", Category::Physical),
    Question::new("I am willing to speak up when I witness something unfair, regardless of who is present.", Category::Social),
    Question::new("I prioritize doing what I believe is right, even if it comes at a personal cost.", Category::Moral),
    Question::new("I am not afraid to confront my own emotional pain or discomfort.", Category::Emotional),
    Question::new("I am open to learning from people who have radically different worldviews.", Category::Intellectual),
    Question::new("I reflect on my sense of purpose or meaning during tough times.", Category::Spiritual),

    // Page 4
    Question::new("I am not easily discouraged by the risk of injury or harm when pursuing my goals.", Category::Physical),
    Question::new("I often step out of my comfort zone to engage in new social situations, even if I risk rejection.", Category::Social),
    Question::new("I will not compromise my moral values, even if it leads to conflict with people close to me.", Category::Moral),
    Question::new("I can talk about my personal challenges with people I trust, even if it's emotionally difficult.", Category::Emotional),
    Question::new("I seek out opportunities to learn, even if it makes me realize how little I know.", Category::Intellectual),
    Question::new("I am open to exploring different spiritual or philosophical perspectives.", Category::Spiritual),

    // Page 5
    Question::new("I feel confident stepping into potentially dangerous environments if the situation calls for it.", Category::Physical),
    Question::new("I have no problem initiating difficult conversations with friends or colleagues.", Category::Social),
    Question::new("I can admit when I've made a mistake and take responsibility for my actions.", Category::Moral),
    Question::new("I am able to stay emotionally present during tough conversations.", Category::Emotional),
    Question::new("I embrace complexity and uncertainty when learning something new.", Category::Intellectual),
    Question::new("I am comfortable making decisions based on my internal moral compass, even if they defy external expectations.", Category::Spiritual),

    // Page 6
    Question::new("I find that confronting physical dangers helps me feel alive and empowered.", Category::Physical),
    Question::new("I can navigate social situations where I might not fit in without feeling intimidated.", Category::Social),
    Question::new("I challenge unethical behaviors in my workplace or community, even if it could negatively affect me.", Category::Moral),
    Question::new("I can ask for help or support when I'm feeling overwhelmed or emotionally drained.", Category::Emotional),
    Question::new("I enjoy questioning established norms or widely accepted ideas.", Category::Intellectual),
    Question::new("I find that leaning into my spiritual beliefs helps me handle uncertainty and fear.", Category::Spiritual),

    // Page 7
    Question::new("I often take the lead in situations where physical action is necessary, even when others hesitate.", Category::Physical),
    Question::new("I am able to stand by my beliefs even when I face social pressure to conform.", Category::Social),
    Question::new("I consistently live by my moral compass, even when it's inconvenient.", Category::Moral),
    Question::new("I find strength in being vulnerable, even when it's hard for others to understand.", Category::Emotional),
    Question::new("I am not afraid to admit when I don't know something and use it as a chance to grow.", Category::Intellectual),
    Question::new("I seek meaning in life's difficult experiences and trust they contribute to my growth.", Category::Spiritual),
];

/// Looks up a question by its answer-map index. Negative and past-the-end
/// indices have no question.
pub fn question(index: i64) -> Option<&'static Question> {
    usize::try_from(index).ok().and_then(|i| QUESTION_BANK.get(i))
}

/// Questions shown on a 0-based page.
pub fn page(page: usize) -> Option<&'static [Question]> {
    if page >= TOTAL_PAGES {
        return None;
    }
    let start = page * QUESTIONS_PER_PAGE;
    QUESTION_BANK.get(start..start + QUESTIONS_PER_PAGE)
}

/// Bank indices of every question measuring `category`.
pub fn questions_in(category: Category) -> impl Iterator<Item = usize> {
    QUESTION_BANK
        .iter()
        .enumerate()
        .filter(move |(_, q)| q.category == category)
        .map(|(index, _)| index)
}

/// One point of the Likert scale.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikertOption {
    pub value: i64,
    pub label: &'static str,
}

pub const LIKERT_SCALE: [LikertOption; 5] = [
    LikertOption { value: 1, label: "Rarely" },
    LikertOption { value: 2, label: "Seldom" },
    LikertOption { value: 3, label: "Sometimes" },
    LikertOption { value: 4, label: "Often" },
    LikertOption { value: 5, label: "Almost Always" },
];

/// Whether `value` sits on the Likert scale.
pub fn is_on_scale(value: i64) -> bool {
    (RESPONSE_MIN..=RESPONSE_MAX).contains(&value)
}

/// DTO for sending a question to the client.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    /// Key to use in the answer map.
    pub index: usize,
    pub page: usize,
    pub text: &'static str,
    pub category: Category,
}

impl PublicQuestion {
    pub fn from_bank(index: usize, question: &'static Question) -> Self {
        Self {
            index,
            page: index / QUESTIONS_PER_PAGE,
            text: question.text,
            category: question.category,
        }
    }
}
