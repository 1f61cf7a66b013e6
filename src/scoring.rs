// src/scoring.rs

//! Aggregates Likert answers into per-category totals and ranks the six
//! courage categories.
//!
//! `score` is pure and total: it never fails, performs no I/O and gives the
//! same result for the same answers every time. Malformed input is tolerated
//! and only logged.

use std::{cmp::Ordering, collections::BTreeMap};

use serde::Serialize;

use crate::models::{
    category::{Category, CategoryMap},
    question::{QUESTION_BANK, is_on_scale, question},
};

/// Question index → response value. Unanswered questions are absent.
pub type AnswerMap = BTreeMap<i64, i64>;

/// Immutable outcome of scoring one answer snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Sum of responses per category.
    pub category_totals: CategoryMap<i64>,
    /// Highest single response per category. Tie-break signal only.
    pub category_max_response: CategoryMap<i64>,
    /// Every category, strongest first.
    pub ranked: [Category; Category::COUNT],
    pub top_two: [Category; 2],
    pub total_score: i64,
    /// Share of `total_score` per category, rounded half up.
    pub percentages: CategoryMap<i64>,
}

impl ScoreResult {
    pub fn is_top_two(&self, category: Category) -> bool {
        self.top_two.contains(&category)
    }

    /// `(category, total, percentage)` in ranking order.
    pub fn ranked_entries(&self) -> impl Iterator<Item = (Category, i64, i64)> + '_ {
        self.ranked
            .iter()
            .map(|&c| (c, self.category_totals[c], self.percentages[c]))
    }
}

/// Scores an answer snapshot against the question bank.
pub fn score(answers: &AnswerMap) -> ScoreResult {
    report_anomalies(answers);

    let mut category_totals = CategoryMap::<i64>::default();
    let mut category_max_response = CategoryMap::<i64>::default();
    let mut saturated = false;

    for (index, question) in QUESTION_BANK.iter().enumerate() {
        let Some(&response) = answers.get(&(index as i64)) else {
            continue;
        };
        let category = question.category;
        category_totals[category] = add_clamped(category_totals[category], response, &mut saturated);
        if response > category_max_response[question.category] {
            category_max_response[question.category] = response;
        }
    }

    let ranked = rank(&category_totals, &category_max_response);
    let top_two = [ranked[0], ranked[1]];

    let total_score = category_totals
        .values()
        .fold(0, |acc, &total| add_clamped(acc, total, &mut saturated));
    if saturated {
        tracing::warn!(total_score, "Answer sums overflowed and were clamped to the i64 range");
    }
    let percentages = category_totals.map(|_, &total| {
        if total_score > 0 {
            round_half_up(total as f64 / total_score as f64 * 100.0)
        } else {
            0
        }
    });

    tracing::debug!(
        answered = answers.len(),
        total_score,
        top = %top_two[0],
        runner_up = %top_two[1],
        "Scored quiz answers"
    );

    ScoreResult {
        category_totals,
        category_max_response,
        ranked,
        top_two,
        total_score,
        percentages,
    }
}

/// Per-category signals the ranking stages compare.
pub struct Tally<'a> {
    pub totals: &'a CategoryMap<i64>,
    pub peaks: &'a CategoryMap<i64>,
}

/// One level of the ranking comparator. `Less` puts `a` first.
pub type RankingStage = fn(&Tally<'_>, Category, Category) -> Ordering;

/// Applied in order; each stage only matters when every earlier stage
/// returned `Equal`. The last stage never ties for distinct categories.
pub const RANKING_STAGES: [RankingStage; 3] = [by_total, by_peak_response, by_label];

fn by_total(tally: &Tally<'_>, a: Category, b: Category) -> Ordering {
    tally.totals[b].cmp(&tally.totals[a])
}

fn by_peak_response(tally: &Tally<'_>, a: Category, b: Category) -> Ordering {
    tally.peaks[b].cmp(&tally.peaks[a])
}

fn by_label(_: &Tally<'_>, a: Category, b: Category) -> Ordering {
    a.label().cmp(b.label())
}

/// Orders all categories strongest first through `RANKING_STAGES`.
pub fn rank(totals: &CategoryMap<i64>, peaks: &CategoryMap<i64>) -> [Category; Category::COUNT] {
    let tally = Tally { totals, peaks };
    let mut ranked = Category::ALL;
    ranked.sort_by(|&a, &b| {
        RANKING_STAGES
            .iter()
            .map(|stage| stage(&tally, a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// Rounds to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Adds without wrapping; an overflow clamps to the bound and sets `saturated`.
fn add_clamped(acc: i64, value: i64, saturated: &mut bool) -> i64 {
    acc.checked_add(value).unwrap_or_else(|| {
        *saturated = true;
        acc.saturating_add(value)
    })
}

fn report_anomalies(answers: &AnswerMap) {
    for (&index, &response) in answers {
        if question(index).is_none() {
            tracing::warn!(index, response, "Ignoring answer for unknown question index");
        } else if !is_on_scale(response) {
            tracing::warn!(index, response, "Response outside the Likert scale, counting it as given");
        }
    }
}
