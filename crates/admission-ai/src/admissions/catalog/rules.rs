use serde::{Deserialize, Serialize};

/// Entrance-exam requirement attached to a course.
///
/// Catalog files spell literal subjects as plain strings and combinators as
/// `{ "choose": n, "from": [..] }`; the variant is fixed once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub enum SubjectRule {
    Literal(String),
    ChooseOne(Vec<String>),
    ChooseTwo(Vec<String>),
    ChooseThree(Vec<String>),
}

impl SubjectRule {
    /// Distinct candidates that must be present for a combinator to pass.
    pub fn required_matches(&self) -> usize {
        match self {
            SubjectRule::Literal(_) | SubjectRule::ChooseOne(_) => 1,
            SubjectRule::ChooseTwo(_) => 2,
            SubjectRule::ChooseThree(_) => 3,
        }
    }

    pub fn candidates(&self) -> &[String] {
        match self {
            SubjectRule::Literal(subject) => std::slice::from_ref(subject),
            SubjectRule::ChooseOne(candidates)
            | SubjectRule::ChooseTwo(candidates)
            | SubjectRule::ChooseThree(candidates) => candidates,
        }
    }

    pub fn is_combinator(&self) -> bool {
        !matches!(self, SubjectRule::Literal(_))
    }

    /// Text reported when the rule is not met.
    pub fn unmet_description(&self, matched: usize) -> String {
        match self {
            SubjectRule::Literal(subject) => subject.clone(),
            SubjectRule::ChooseOne(candidates) => {
                format!("Any one of: {}", candidates.join(", "))
            }
            SubjectRule::ChooseTwo(candidates) => format!(
                "Any two from: {} (you have {matched})",
                candidates.join(", ")
            ),
            SubjectRule::ChooseThree(candidates) => format!(
                "Any three from: {} (you have {matched})",
                candidates.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawRule {
    Subject(String),
    Choose { choose: u8, from: Vec<String> },
}

#[derive(Debug, thiserror::Error)]
pub enum RuleDefinitionError {
    #[error("combinator must choose 1, 2 or 3 subjects (found {0})")]
    UnsupportedChoice(u8),
    #[error("combinator choosing {choose} needs at least {choose} candidates (found {found})")]
    TooFewCandidates { choose: u8, found: usize },
    #[error("subject rule names an empty subject")]
    EmptySubject,
}

impl TryFrom<RawRule> for SubjectRule {
    type Error = RuleDefinitionError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        match raw {
            RawRule::Subject(subject) => {
                let subject = subject.trim().to_string();
                if subject.is_empty() {
                    return Err(RuleDefinitionError::EmptySubject);
                }
                Ok(SubjectRule::Literal(subject))
            }
            RawRule::Choose { choose, from } => {
                let candidates: Vec<String> = from
                    .into_iter()
                    .map(|candidate| candidate.trim().to_string())
                    .filter(|candidate| !candidate.is_empty())
                    .collect();
                if candidates.len() < choose as usize {
                    return Err(RuleDefinitionError::TooFewCandidates {
                        choose,
                        found: candidates.len(),
                    });
                }
                match choose {
                    1 => Ok(SubjectRule::ChooseOne(candidates)),
                    2 => Ok(SubjectRule::ChooseTwo(candidates)),
                    3 => Ok(SubjectRule::ChooseThree(candidates)),
                    other => Err(RuleDefinitionError::UnsupportedChoice(other)),
                }
            }
        }
    }
}

impl From<SubjectRule> for RawRule {
    fn from(rule: SubjectRule) -> Self {
        let choose = rule.required_matches() as u8;
        match rule {
            SubjectRule::Literal(subject) => RawRule::Subject(subject),
            SubjectRule::ChooseOne(from)
            | SubjectRule::ChooseTwo(from)
            | SubjectRule::ChooseThree(from) => RawRule::Choose { choose, from },
        }
    }
}
