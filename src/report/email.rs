// src/report/email.rs

use crate::{
    models::{archetype::Archetype, category::Category},
    report::bars::bar_widths,
    scoring::ScoreResult,
    utils::html::escape_text,
};

const INK: &str = "#1e2a4a";
const GOLD: &str = "#C9963B";
const TEAL: &str = "#1A6B5C";

/// A rendered results email.
#[derive(Debug, Clone)]
pub struct ResultsEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders the results email for one respondent.
///
/// The profile lists categories in `result.ranked` order; bar widths come
/// from `bar_widths` and the top two are highlighted.
pub fn render_results_email(
    first_name: &str,
    result_url: &str,
    home_url: &str,
    result: &ScoreResult,
) -> ResultsEmail {
    let [first, second] = result.top_two.map(Category::archetype);

    ResultsEmail {
        subject: format!("{first_name}, your Courage Archetypes are ready"),
        html: render_html(first_name, result_url, home_url, result, first, second),
        text: render_text(first_name, result_url, result, first, second),
    }
}

fn render_html(
    first_name: &str,
    result_url: &str,
    home_url: &str,
    result: &ScoreResult,
    first: &Archetype,
    second: &Archetype,
) -> String {
    let name = escape_text(first_name);
    let bars = score_bars_html(result);
    let card_one = archetype_card_html(first);
    let card_two = archetype_card_html(second);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
</head>
<body style="margin:0;padding:0;background-color:#faf9f6;font-family:'Helvetica Neue',Helvetica,Arial,sans-serif;">
  <table width="100%" cellpadding="0" cellspacing="0" style="background-color:#faf9f6;">
    <tr>
      <td align="center" style="padding:40px 20px;">
        <table width="600" cellpadding="0" cellspacing="0" style="max-width:600px;width:100%;">
          <tr>
            <td align="center" style="padding-bottom:32px;">
              <h1 style="color:{INK};font-size:28px;font-weight:700;margin:0;">Your Courage Archetypes</h1>
            </td>
          </tr>
          <tr>
            <td align="center" style="padding-bottom:32px;">
              <p style="color:#3a3a3a;font-size:18px;margin:0;">{name}, here's what we found.</p>
            </td>
          </tr>
          <tr><td style="padding-bottom:16px;">{card_one}</td></tr>
          <tr>
            <td align="center" style="padding-bottom:16px;">
              <span style="color:{GOLD};font-size:24px;font-weight:300;">+</span>
            </td>
          </tr>
          <tr><td style="padding-bottom:32px;">{card_two}</td></tr>
          <tr>
            <td style="padding-bottom:32px;">
              <table width="100%" cellpadding="0" cellspacing="0" style="background-color:#ffffff;border-radius:12px;border:1px solid #e0dbd3;">
                <tr>
                  <td style="padding:28px;">
                    <h3 style="color:{INK};font-size:18px;font-weight:600;margin:0 0 16px 0;">Full Courage Profile</h3>
                    <table width="100%" cellpadding="0" cellspacing="0">{bars}
                    </table>
                  </td>
                </tr>
              </table>
            </td>
          </tr>
          <tr>
            <td align="center" style="padding-bottom:24px;">
              <a href="{result_url}" style="color:{GOLD};font-size:15px;">View your results online</a>
            </td>
          </tr>
          <tr>
            <td align="center" style="padding-bottom:40px;">
              <h3 style="color:{INK};font-size:20px;font-weight:600;margin:0 0 8px 0;">Courage is better together.</h3>
              <p style="color:#555;font-size:15px;margin:0 0 20px 0;">Share the quiz with someone you lead with, work with, or live with.</p>
              <a href="{home_url}" style="display:inline-block;background-color:{INK};color:#ffffff;font-size:16px;font-weight:600;text-decoration:none;padding:14px 32px;border-radius:8px;">Share the Quiz</a>
            </td>
          </tr>
          <tr>
            <td align="center" style="border-top:1px solid #e0dbd3;padding-top:24px;">
              <p style="color:#999;font-size:13px;margin:0 0 8px 0;">Courage Profile. All rights reserved.</p>
              <a href="{home_url}" style="color:{GOLD};font-size:13px;text-decoration:none;">{home_url}</a>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>"#
    )
}

fn archetype_card_html(archetype: &Archetype) -> String {
    format!(
        r#"
      <table width="100%" cellpadding="0" cellspacing="0" style="background-color:#ffffff;border-radius:12px;border:1px solid #e0dbd3;">
        <tr>
          <td style="padding:28px;">
            <h2 style="color:{INK};font-size:22px;font-weight:600;margin:0 0 6px 0;">{heading}</h2>
            <p style="color:{GOLD};font-size:14px;font-style:italic;margin:0 0 12px 0;">{tagline}</p>
            <p style="color:#3a3a3a;font-size:15px;line-height:1.6;margin:0 0 14px 0;">{description}</p>
            <p style="color:#666;font-size:13px;line-height:1.5;margin:0;"><strong style="color:{INK};">Watch for:</strong> {watch_for}</p>
          </td>
        </tr>
      </table>"#,
        heading = archetype.heading(),
        tagline = archetype.tagline,
        description = archetype.description,
        watch_for = archetype.watch_for,
    )
}

fn score_bars_html(result: &ScoreResult) -> String {
    let widths = bar_widths(&result.category_totals);

    result
        .ranked
        .iter()
        .map(|&category| {
            let highlighted = result.is_top_two(category);
            let color = if highlighted { GOLD } else { TEAL };
            let weight = if highlighted { 600 } else { 400 };
            format!(
                r#"
                      <tr>
                        <td style="padding:6px 0;">
                          <p style="color:{INK};font-size:13px;margin:0 0 4px 0;font-weight:{weight};">{heading}</p>
                          <table width="100%" cellpadding="0" cellspacing="0">
                            <tr>
                              <td style="background-color:#e8e4de;border-radius:4px;">
                                <div style="background-color:{color};height:12px;border-radius:4px;width:{width}%;"></div>
                              </td>
                            </tr>
                          </table>
                        </td>
                      </tr>"#,
                heading = category.archetype().heading(),
                width = widths[category],
            )
        })
        .collect()
}

fn render_text(
    first_name: &str,
    result_url: &str,
    result: &ScoreResult,
    first: &Archetype,
    second: &Archetype,
) -> String {
    let mut text = format!("{first_name}, here's what we found.\n\n");

    for archetype in [first, second] {
        text.push_str(&format!(
            "{}\n{}\n\n{}\n\nWatch for: {}\n\n",
            archetype.heading(),
            archetype.tagline,
            archetype.description,
            archetype.watch_for
        ));
    }

    text.push_str("Full Courage Profile\n");
    for (category, _, percentage) in result.ranked_entries() {
        text.push_str(&format!(
            "  {} ({}): {}%\n",
            category.archetype().heading(),
            category.label(),
            percentage
        ));
    }

    text.push_str(&format!("\nView your results online: {result_url}\n"));
    text
}
