//! The built-in personalities and the user-defined custom one.
//!
//! A personality is a role plus a style. The four presets are a closed set
//! of immutable records; [`Personality::Custom`] carries the two free-text
//! fields a user typed in.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::prompt::compose_system_prompt;

/// Identifier of the custom personality.
pub const CUSTOM_ID: &str = "custom";

const CUSTOM_NAME: &str = "Custom";
const CUSTOM_EMOJI: &str = "🎭";
const CUSTOM_DESCRIPTION: &str = "Create your own unique personality";

/// A built-in personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    CheshireCat,
    SassyFairy,
    BritishPubChimp,
    EnvironmentalLawyer,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 4] = [
        Preset::CheshireCat,
        Preset::SassyFairy,
        Preset::BritishPubChimp,
        Preset::EnvironmentalLawyer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Preset::CheshireCat => "cheshire_cat",
            Preset::SassyFairy => "sassy_fairy",
            Preset::BritishPubChimp => "british_pub_chimp",
            Preset::EnvironmentalLawyer => "environmental_lawyer",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::CheshireCat => "Cheshire Cat",
            Preset::SassyFairy => "Sassy Fairy",
            Preset::BritishPubChimp => "British Pub Chimp",
            Preset::EnvironmentalLawyer => "Environmental Lawyer",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Preset::CheshireCat => "😼",
            Preset::SassyFairy => "🧚",
            Preset::BritishPubChimp => "🐵",
            Preset::EnvironmentalLawyer => "⚖️",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            Preset::CheshireCat => "You are the Cheshire Cat from Alice in Wonderland",
            Preset::SassyFairy => "You are a sarcastic fairy with major attitude",
            Preset::BritishPubChimp => "You are a drunk British chimpanzee at a pub",
            Preset::EnvironmentalLawyer => "You are a condescending environmental lawyer",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Preset::CheshireCat => {
                "Respond with riddles and mysterious wordplay. Be playful and mischievous. \
                 Give actual answers but wrap them in whimsy."
            }
            Preset::SassyFairy => {
                "Respond with heavy sarcasm and eye-rolling energy. You're tired of granting \
                 wishes and dealing with mortals. Be snarky but helpful."
            }
            Preset::BritishPubChimp => {
                "Argue confidently but give hilariously incorrect information. Use British \
                 slang like 'mate', 'innit', 'blimey'. Be loud and passionate about being wrong."
            }
            Preset::EnvironmentalLawyer => {
                "Give patronizing legal-style advice. Talk down to people while being \
                 technically correct. Act superior and mention your expensive hourly rate."
            }
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Preset::CheshireCat => "Mysterious and philosophical, speaks in riddles",
            Preset::SassyFairy => "Sarcastic and eye-rolling, tired of mortals",
            Preset::BritishPubChimp => "Drunk pub philosopher, confidently incorrect",
            Preset::EnvironmentalLawyer => "Condescending legal expert, $500/hour energy",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| format!("unknown personality '{id}'"))
    }
}

/// The personality a request speaks as: a preset or a custom role/style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Personality {
    Preset(Preset),
    Custom { role: String, style: String },
}

impl Personality {
    pub fn custom(role: impl Into<String>, style: impl Into<String>) -> Self {
        Personality::Custom {
            role: role.into(),
            style: style.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Personality::Preset(p) => p.id(),
            Personality::Custom { .. } => CUSTOM_ID,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Personality::Preset(p) => p.name(),
            Personality::Custom { .. } => CUSTOM_NAME,
        }
    }

    pub fn emoji(&self) -> &str {
        match self {
            Personality::Preset(p) => p.emoji(),
            Personality::Custom { .. } => CUSTOM_EMOJI,
        }
    }

    pub fn role(&self) -> &str {
        match self {
            Personality::Preset(p) => p.role(),
            Personality::Custom { role, .. } => role,
        }
    }

    pub fn style(&self) -> &str {
        match self {
            Personality::Preset(p) => p.style(),
            Personality::Custom { style, .. } => style,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Personality::Preset(p) => p.description(),
            Personality::Custom { .. } => CUSTOM_DESCRIPTION,
        }
    }

    /// The system prompt this personality sends.
    pub fn system_prompt(&self) -> String {
        compose_system_prompt(self.role(), self.style())
    }
}

impl From<Preset> for Personality {
    fn from(preset: Preset) -> Self {
        Personality::Preset(preset)
    }
}

/// Public listing entry for a selector: id, label, and blurb.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PersonalityInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Every selectable personality: the presets, then custom.
pub fn catalog() -> Vec<PersonalityInfo> {
    Preset::ALL
        .into_iter()
        .map(|p| PersonalityInfo {
            id: p.id(),
            name: p.name(),
            emoji: p.emoji(),
            description: p.description(),
        })
        .chain(std::iter::once(PersonalityInfo {
            id: CUSTOM_ID,
            name: CUSTOM_NAME,
            emoji: CUSTOM_EMOJI,
            description: CUSTOM_DESCRIPTION,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::RESPONSE_GUIDELINES;

    #[test]
    fn preset_ids_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.id().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn custom_is_not_a_preset() {
        assert!(CUSTOM_ID.parse::<Preset>().is_err());
        assert!("grumpy_wizard".parse::<Preset>().is_err());
    }

    #[test]
    fn preset_system_prompts_embed_role_and_style() {
        for preset in Preset::ALL {
            let prompt = Personality::from(preset).system_prompt();
            assert!(prompt.contains(preset.role()));
            assert!(prompt.contains(preset.style()));
            assert!(prompt.ends_with(RESPONSE_GUIDELINES));
        }
    }

    #[test]
    fn cheshire_cat_system_prompt_exact() {
        assert_eq!(
            Personality::from(Preset::CheshireCat).system_prompt(),
            "You are the Cheshire Cat from Alice in Wonderland. Respond with riddles and \
             mysterious wordplay. Be playful and mischievous. Give actual answers but wrap them \
             in whimsy. Keep your response to 2-3 sentences maximum. Stay fully in character \
             and be entertaining."
        );
    }

    #[test]
    fn custom_personality_fields() {
        let p = Personality::custom("You are a sarcastic historian", "Be dry.");
        assert_eq!(p.id(), CUSTOM_ID);
        assert_eq!(p.name(), "Custom");
        assert_eq!(p.emoji(), "🎭");
        assert_eq!(p.role(), "You are a sarcastic historian");
        assert_eq!(p.style(), "Be dry.");
    }

    #[test]
    fn catalog_lists_presets_then_custom() {
        let entries = catalog();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].id, "cheshire_cat");
        assert_eq!(entries[4].id, CUSTOM_ID);
    }

    #[test]
    fn display_shows_emoji_and_name() {
        assert_eq!(Preset::SassyFairy.to_string(), "🧚 Sassy Fairy");
    }
}
