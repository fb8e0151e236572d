//! # Vibe Report
//!
//! A read-only projection of a [`ModerationResponse`] into something a person can
//! read: a headline naming the dominant trait and a list of notable traits.

use crate::constants::VIBE_LIST_THRESHOLD;
use crate::types::{AttributeName, ModerationResponse, ModerationStatus};
use std::cmp::Ordering;
use std::fmt;

/// A display name and emoji for a trait or state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vibe {
    pub name: &'static str,
    pub emoji: &'static str,
}

pub const SAFE_VIBE: Vibe = Vibe {
    name: "Friendly & Safe",
    emoji: "✅",
};
pub const ERROR_VIBE: Vibe = Vibe {
    name: "Analysis Failed",
    emoji: "🤔",
};
pub const UNKNOWN_VIBE: Vibe = Vibe {
    name: "Unable to Analyze Language",
    emoji: "❓",
};

const TRUNCATION_WARNING: &str = "Your text was too long. Only the first part was analyzed.";

/// The vibe for an attribute.
pub fn vibe_for(attr: AttributeName) -> Vibe {
    match attr {
        AttributeName::Threat => Vibe {
            name: "Threatening",
            emoji: "😱",
        },
        AttributeName::IdentityAttack => Vibe {
            name: "Hateful (Attack)",
            emoji: "😡",
        },
        AttributeName::Insult => Vibe {
            name: "Rude / Insulting",
            emoji: "😠",
        },
        AttributeName::Profanity => Vibe {
            name: "Harsh Language",
            emoji: "🤬",
        },
        AttributeName::Toxicity => Vibe {
            name: "Aggressive",
            emoji: "🤢",
        },
    }
}

/// How the report headline should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Safe,
    Toxic,
    Neutral,
}

/// One line of the vibe list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibeItem {
    pub emoji: &'static str,
    pub name: &'static str,
    pub percentage: u32,
}

impl VibeItem {
    fn all_clear() -> Self {
        Self {
            emoji: SAFE_VIBE.emoji,
            name: SAFE_VIBE.name,
            percentage: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VibeReport {
    pub tone: Tone,
    pub emoji: String,
    pub headline: String,
    /// Shown instead of the vibe list when the text could not be analyzed.
    pub note: Option<&'static str>,
    pub items: Vec<VibeItem>,
    pub truncation_warning: Option<&'static str>,
}

/// Position of `name` in [`AttributeName::ALL`]; unrecognized names sort last.
fn request_order(name: &str) -> usize {
    name.parse::<AttributeName>()
        .ok()
        .and_then(|attr| AttributeName::ALL.iter().position(|a| *a == attr))
        .unwrap_or(usize::MAX)
}

impl VibeReport {
    pub fn from_response(response: &ModerationResponse) -> Self {
        let truncation_warning = response.was_truncated.then_some(TRUNCATION_WARNING);

        match response.status {
            ModerationStatus::Error => {
                return Self {
                    tone: Tone::Toxic,
                    emoji: ERROR_VIBE.emoji.to_string(),
                    headline: response
                        .api_error
                        .clone()
                        .unwrap_or_else(|| ERROR_VIBE.name.to_string()),
                    note: Some("The AI reported an issue processing this text."),
                    items: Vec::new(),
                    truncation_warning,
                }
            }
            ModerationStatus::Unknown => {
                return Self {
                    tone: Tone::Neutral,
                    emoji: UNKNOWN_VIBE.emoji.to_string(),
                    headline: response
                        .api_error
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_VIBE.name.to_string()),
                    note: Some("Please use more text or a supported language."),
                    items: Vec::new(),
                    truncation_warning,
                }
            }
            ModerationStatus::Safe | ModerationStatus::Toxic => {}
        }

        let mut ranked: Vec<(&str, f64)> = response
            .scores
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        // Ties go to the attribute requested first.
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| request_order(a.0).cmp(&request_order(b.0)))
        });

        let (tone, emoji, headline) = match (response.status, ranked.first()) {
            (ModerationStatus::Toxic, Some((name, _))) => {
                let vibe = name.parse::<AttributeName>().map(vibe_for).ok();
                let emoji = vibe.map_or("🤔", |v| v.emoji);
                let label = vibe.map_or(*name, |v| v.name);
                (Tone::Toxic, emoji, format!("This sounds {label}!"))
            }
            _ => (Tone::Safe, SAFE_VIBE.emoji, SAFE_VIBE.name.to_string()),
        };

        let mut items: Vec<VibeItem> = ranked
            .iter()
            .filter(|(_, score)| *score > VIBE_LIST_THRESHOLD)
            .filter_map(|(name, score)| {
                let vibe = vibe_for(name.parse().ok()?);
                Some(VibeItem {
                    emoji: vibe.emoji,
                    name: vibe.name,
                    percentage: (score * 100.0).round() as u32,
                })
            })
            .collect();
        if items.is_empty() {
            items.push(VibeItem::all_clear());
        }

        Self {
            tone,
            emoji: emoji.to_string(),
            headline,
            note: None,
            items,
            truncation_warning,
        }
    }
}

impl fmt::Display for VibeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(warning) = self.truncation_warning {
            writeln!(f, "⚠️ {warning}")?;
        }
        writeln!(f, "{} {}", self.emoji, self.headline)?;
        if let Some(note) = self.note {
            writeln!(f, "{note}")?;
        }
        for item in &self.items {
            writeln!(f, "  {} {:<20} {:>3}%", item.emoji, item.name, item.percentage)?;
        }
        Ok(())
    }
}
