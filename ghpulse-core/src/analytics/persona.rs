//! Developer persona display metadata
//!
//! The backend assigns a persona archetype from the user's activity; the
//! dashboard maps the archetype tag to a name, tagline, emoji and color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Developer persona archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Persona {
    /// Commits nearly every day
    ConsistentCoder,
    /// Long quiet stretches broken by intense bursts
    WeekendWarrior,
    /// Many small repositories across many languages
    Polyglot,
    /// Most contributions land in a single long-lived project
    DeepDiver,
    /// Starts lots of new repositories
    Builder,
    /// Opens issues and reviews more than commits
    Collaborator,
    /// Repositories with many stars and forks
    Influencer,
    /// Recently joined, still ramping up
    Newcomer,
}

impl Persona {
    pub const ALL: [Persona; 8] = [
        Persona::ConsistentCoder,
        Persona::WeekendWarrior,
        Persona::Polyglot,
        Persona::DeepDiver,
        Persona::Builder,
        Persona::Collaborator,
        Persona::Influencer,
        Persona::Newcomer,
    ];

    /// Wire tag (e.g., "CONSISTENT_CODER").
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::ConsistentCoder => "CONSISTENT_CODER",
            Persona::WeekendWarrior => "WEEKEND_WARRIOR",
            Persona::Polyglot => "POLYGLOT",
            Persona::DeepDiver => "DEEP_DIVER",
            Persona::Builder => "BUILDER",
            Persona::Collaborator => "COLLABORATOR",
            Persona::Influencer => "INFLUENCER",
            Persona::Newcomer => "NEWCOMER",
        }
    }

    /// Get the display name for this persona.
    pub fn name(&self) -> &'static str {
        match self {
            Persona::ConsistentCoder => "The Consistent Coder",
            Persona::WeekendWarrior => "The Weekend Warrior",
            Persona::Polyglot => "The Polyglot",
            Persona::DeepDiver => "The Deep Diver",
            Persona::Builder => "The Builder",
            Persona::Collaborator => "The Collaborator",
            Persona::Influencer => "The Influencer",
            Persona::Newcomer => "The Newcomer",
        }
    }

    /// Get the tagline for this persona.
    pub fn tagline(&self) -> &'static str {
        match self {
            Persona::ConsistentCoder => "Every day is a commit day",
            Persona::WeekendWarrior => "Quiet weeks, legendary weekends",
            Persona::Polyglot => "Fluent in every syntax",
            Persona::DeepDiver => "One project, total dedication",
            Persona::Builder => "Always starting something new",
            Persona::Collaborator => "Code is a team sport",
            Persona::Influencer => "Your repos draw a crowd",
            Persona::Newcomer => "Every expert was once a beginner",
        }
    }

    /// Get an emoji for this persona.
    pub fn emoji(&self) -> &'static str {
        match self {
            Persona::ConsistentCoder => "📆",
            Persona::WeekendWarrior => "⚔️",
            Persona::Polyglot => "🗣️",
            Persona::DeepDiver => "🤿",
            Persona::Builder => "🏗️",
            Persona::Collaborator => "🤝",
            Persona::Influencer => "🌟",
            Persona::Newcomer => "🌱",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Persona::ConsistentCoder => "green",
            Persona::WeekendWarrior => "red",
            Persona::Polyglot => "purple",
            Persona::DeepDiver => "blue",
            Persona::Builder => "orange",
            Persona::Collaborator => "teal",
            Persona::Influencer => "yellow",
            Persona::Newcomer => "gray",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Persona {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| Error::UnknownTag {
                kind: "persona",
                value: s.to_string(),
            })
    }
}

/// One scored trait behind the persona (e.g., "consistency": 0.82).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonaTrait {
    pub name: String,
    pub score: f64,
}

/// Persona assignment served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonaResponse {
    pub persona: Persona,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub traits: Vec<PersonaTrait>,
}

impl PersonaResponse {
    /// Traits ordered by score, strongest first.
    pub fn top_traits(&self, n: usize) -> Vec<&PersonaTrait> {
        let mut traits: Vec<&PersonaTrait> = self.traits.iter().collect();
        traits.sort_by(|a, b| b.score.total_cmp(&a.score));
        traits.truncate(n);
        traits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_display() {
        assert_eq!(Persona::Polyglot.name(), "The Polyglot");
        assert_eq!(Persona::Polyglot.emoji(), "🗣️");
        assert_eq!(Persona::Newcomer.to_string(), "The Newcomer");
    }

    #[test]
    fn test_parse_persona_tags() {
        assert_eq!(
            "consistent coder".parse::<Persona>().unwrap(),
            Persona::ConsistentCoder
        );
        assert_eq!("DEEP_DIVER".parse::<Persona>().unwrap(), Persona::DeepDiver);

        let err = "NIGHT_OWL".parse::<Persona>().unwrap_err();
        assert!(matches!(err, Error::UnknownTag { kind: "persona", .. }));
    }

    #[test]
    fn test_all_tags_round_trip() {
        for persona in Persona::ALL {
            assert_eq!(persona.as_str().parse::<Persona>().unwrap(), persona);
        }
    }

    #[test]
    fn test_persona_response() {
        let response: PersonaResponse = serde_json::from_str(
            r#"{"persona":"BUILDER","score":0.7,"traits":[
                {"name":"newRepos","score":0.4},
                {"name":"consistency","score":0.9},
                {"name":"stars","score":0.1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.persona, Persona::Builder);
        let top: Vec<&str> = response.top_traits(2).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(top, vec!["consistency", "newRepos"]);

        assert!(serde_json::from_str::<PersonaResponse>(r#"{"persona":"WIZARD"}"#).is_err());
    }
}
