//! Lexical patterns behind the stance, methodology and well-established-fact checks.
//!
//! All patterns are case-insensitive and compiled once.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

pub static NEGATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:not|no|false|hoax(?:es)?|myths?|refut(?:e|es|ed|ing)|debunk(?:s|ed|ing)?|den(?:y|ies|ied|ying)|disput(?:e|es|ed|ing)|contradict(?:s|ed|ing|ion)?|incorrect|wrong|untrue|misleading)\b",
    )
});

pub static AFFIRMATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:confirm(?:s|ed|ing)?|corroborat(?:e|es|ed|ing)|support(?:s|ed|ing)?|affirm(?:s|ed|ing)?|verif(?:y|ies|ied)|true|correct|accurate|established|proven|validates?|demonstrates?|shows that)\b",
    )
});

pub static DEFINITIONAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:definition|defined as|means|refers to|known as|consists of|composed of|is called|is a type of|is one of)\b",
    )
});

pub static EXPLANATORY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:because|due to|as a result|caused by|stud(?:y|ies) shows?|research shows|evidence suggests|according to|which is why|this is why|explains?)\b",
    )
});

pub static METHODOLOGY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:stud(?:y|ies)|datasets?|methodology|replicat(?:e|ed|ion|ions)|surveys?|randomi[sz]ed|placebo|meta-?analys[ie]s|peer-?review(?:ed)?|journals?|clinical trials?|cohort|sample size)\b",
    )
});

/// Kinds of claim treated as well-established facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactCategory {
    Geography,
    PhysicalConstant,
    Anatomy,
    Arithmetic,
    HistoricalDate,
}

static FACT_PATTERNS: LazyLock<Vec<(FactCategory, Regex)>> = LazyLock::new(|| {
    vec![
        (
            FactCategory::Geography,
            compile(
                r"(?i)\b(?:capital (?:city )?of|largest (?:ocean|continent|country|desert|planet)|longest river|(?:highest|tallest) mountain|mount everest|the equator|(?:north|south) pole|earth is round|orbits the sun)\b",
            ),
        ),
        (
            FactCategory::PhysicalConstant,
            compile(
                r"(?i)\b(?:boil(?:s|ed|ing)?|freez(?:e|es|ing)|melt(?:s|ed|ing)?|speed of light|gravity|absolute zero|degrees (?:celsius|fahrenheit)|h2o|sky is blue|sun rises)\b",
            ),
        ),
        (
            FactCategory::Anatomy,
            compile(
                r"(?i)\b(?:humans? (?:have|has)|human body|bones?|heart has|chambers|(?:two|2) (?:legs|arms|eyes|ears|lungs|kidneys)|(?:ten|10) fingers)\b",
            ),
        ),
        (
            FactCategory::Arithmetic,
            compile(
                r"(?i)\b\d+\s*(?:\+|-|\*|x|×|/|÷|plus|minus|times|divided by|multiplied by)\s*\d+\s*(?:=|equals|is|makes)\s*\d+\b",
            ),
        ),
        (
            FactCategory::HistoricalDate,
            compile(
                r"(?i)\b(?:moon landing|landed on the moon|world war (?:ii|i|one|two|1|2)|declaration of independence|berlin wall|titanic sank|french revolution|(?:ended|began|was signed|was founded) in (?:1[0-9]{3}|20[0-2][0-9]))\b",
            ),
        ),
    ]
});

/// First well-established-fact category the claim matches, if any.
pub fn fact_category(claim: &str) -> Option<FactCategory> {
    FACT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(claim))
        .map(|(category, _)| *category)
}

/// Returns `true` if the claim reads as a well-established fact.
pub fn is_well_established_fact(claim: &str) -> bool {
    fact_category(claim).is_some()
}
