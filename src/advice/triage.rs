//! Stateless, rule-based symptom triage.
//!
//! The engine keeps no memory between calls.  The caller accumulates the
//! conversation (complaint, earlier answers, latest answer) and hands all of it
//! back on every turn; the engine lowercases it into a single [`Context`] and
//! walks an ordered [`RuleSet`] top to bottom.  The first rule whose keyword
//! groups all match decides the next [`TriageStep`].

use tracing::{debug, instrument};

use crate::base::types::{TriageStep, Urgency};

// Keyword sets.

const ABDOMINAL_ONSET: &[&str] = &["buik", "buikpijn"];
const ABDOMINAL: &[&str] = &["buik", "buikpijn", "maag", "onderbuik"];
const RECENT: &[&str] = &["uren", "gister", "gisteren", "vandaag", "net"];
const SHARP: &[&str] = &["stekend"];
const FEVER_OR_VOMITING: &[&str] = &["koorts", "braak", "braken", "overgeven"];
const RED_FLAGS: &[&str] = &["flauwvallen", "borstpijn", "kortademig"];

// Types.

/// Where a conversation stands after a rule has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Still collecting a description of the complaint.
    Start,
    /// Asked when abdominal pain began.
    AbdominalOnset,
    /// Asked what the abdominal pain feels like.
    AbdominalCharacter,
    /// Asked about fever or vomiting.
    AbdominalFeverCheck,
    /// An outcome has been given; no further questions.
    Concluded,
}

/// The caller's accumulated text, joined and lowercased for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context(String);

impl Context {
    /// Builds a context from a single message.
    pub fn from_message(message: &str) -> Self {
        Self(message.to_lowercase())
    }

    /// Joins complaint, running context and last answer (in that order) into one context.
    pub fn combine(context: Option<&str>, complaint: Option<&str>, last_answer: Option<&str>) -> Self {
        let joined = format!("{} {} {}", complaint.unwrap_or_default(), context.unwrap_or_default(), last_answer.unwrap_or_default());

        Self(joined.to_lowercase())
    }

    /// Whether any of `keywords` occurs anywhere in the context.
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.0.contains(keyword))
    }

    /// The combined, lowercased text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What a rule does once it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ask {
        question: &'static str,
        tone: &'static str,
    },
    Conclude {
        outcome: &'static str,
        level: Urgency,
        tips: &'static [&'static str],
        tone: &'static str,
    },
}

impl Action {
    /// The response step this action produces.
    pub fn to_step(&self) -> TriageStep {
        match *self {
            Action::Ask { question, tone } => TriageStep::Ask {
                question: question.to_string(),
                tone: tone.to_string(),
            },
            Action::Conclude { outcome, level, tips, tone } => TriageStep::Conclude {
                outcome: outcome.to_string(),
                level,
                tips: tips.iter().map(|tip| tip.to_string()).collect(),
                tone: tone.to_string(),
            },
        }
    }
}

/// A single triage rule.
///
/// `when` is a conjunction of keyword groups: the rule fires only if the
/// context mentions at least one keyword from every group.  An empty `when`
/// always fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub when: &'static [&'static [&'static str]],
    pub stage: Stage,
    pub action: Action,
}

impl Rule {
    /// Whether every keyword group of the rule is mentioned in `context`.
    pub fn matches(&self, context: &Context) -> bool {
        self.when.iter().all(|group| context.mentions_any(group))
    }
}

/// An ordered list of rules, plus the rule used when none of them fire.
#[derive(Debug)]
pub struct RuleSet {
    rules: &'static [Rule],
    fallback: Rule,
}

impl RuleSet {
    /// Returns the first rule that fires for `context`, in priority order.
    pub fn evaluate(&self, context: &Context) -> &Rule {
        self.rules.iter().find(|rule| rule.matches(context)).unwrap_or(&self.fallback)
    }

    /// All rules in evaluation order, ending with the fallback.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }
}

// Rule tables.

/// Rules for the opening message of a conversation.
pub static START_RULES: RuleSet = RuleSet {
    rules: &[Rule {
        name: "abdominal-onset",
        when: &[ABDOMINAL_ONSET],
        stage: Stage::AbdominalOnset,
        action: Action::Ask {
            question: "Oef, vervelend! Wanneer begon het? 🤔 (uren/dagen)",
            tone: "Jong, vriendelijk, speels. Korte zinnen.",
        },
    }],
    fallback: Rule {
        name: "describe-complaint",
        when: &[],
        stage: Stage::Start,
        action: Action::Ask {
            question: "Vertel kort wat er speelt. Waar doet het pijn of wat valt op?",
            tone: "Empathisch en duidelijk.",
        },
    },
};

/// Rules for every follow-up turn.
///
/// The abdominal rules all come before the red-flag rule, so abdominal pain
/// takes precedence over chest pain or fainting mentioned in the same context.
/// Within the abdominal group the most specific answer wins: fever or vomiting,
/// then sharpness, then recency.  Since the context only ever grows, this lets
/// a conversation move forward one question at a time.
pub static NEXT_RULES: RuleSet = RuleSet {
    rules: &[
        Rule {
            name: "abdominal-fever",
            when: &[ABDOMINAL, FEVER_OR_VOMITING],
            stage: Stage::Concluded,
            action: Action::Conclude {
                outcome: "Dit klinkt serieus, maat. Kan appendicitis zijn. Bel je huisarts vandaag nog.",
                level: Urgency::Urgent,
                tips: &["Niet eten/drinken als je misselijk bent", "Regel vervoer als lopen pijn doet"],
                tone: "Eerlijk en direct.",
            },
        },
        Rule {
            name: "abdominal-sharp",
            when: &[ABDOMINAL, SHARP],
            stage: Stage::AbdominalFeverCheck,
            action: Action::Ask {
                question: "Heb je koorts of moet je braken? 🤒",
                tone: "Empathisch.",
            },
        },
        Rule {
            name: "abdominal-recent",
            when: &[ABDOMINAL, RECENT],
            stage: Stage::AbdominalCharacter,
            action: Action::Ask {
                question: "Is het stekend of dof?",
                tone: "Kort en duidelijk.",
            },
        },
        Rule {
            name: "abdominal-pattern",
            when: &[ABDOMINAL],
            stage: Stage::AbdominalCharacter,
            action: Action::Ask {
                question: "Is de pijn constant of komt het in golven?",
                tone: "Neutral",
            },
        },
        Rule {
            name: "red-flags",
            when: &[RED_FLAGS],
            stage: Stage::Concluded,
            action: Action::Conclude {
                outcome: "Klinkt als spoed. Bel 112 of ga naar de SEH.",
                level: Urgency::Emergency,
                tips: &["Blijf niet alleen"],
                tone: "Urgent",
            },
        },
    ],
    fallback: Rule {
        name: "locate-complaint",
        when: &[],
        stage: Stage::Start,
        action: Action::Ask {
            question: "Oké. Waar zit het precies en hoe lang al?",
            tone: "Vriendelijk",
        },
    },
};

// Operations.

/// Opens a conversation from the caller's chief complaint.
#[instrument(skip_all)]
pub fn start(message: &str) -> TriageStep {
    let context = Context::from_message(message);
    let rule = START_RULES.evaluate(&context);

    debug!(rule = rule.name, stage = ?rule.stage, "Triage start.");

    rule.action.to_step()
}

/// Decides the next step from everything the caller has said so far.
#[instrument(skip_all)]
pub fn next(context: Option<&str>, complaint: Option<&str>, last_answer: Option<&str>) -> TriageStep {
    let context = Context::combine(context, complaint, last_answer);
    let rule = NEXT_RULES.evaluate(&context);

    debug!(rule = rule.name, stage = ?rule.stage, "Triage next.");

    rule.action.to_step()
}
