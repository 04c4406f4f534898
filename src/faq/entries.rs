//! Built-in FAQ table, in priority order.

use std::sync::OnceLock;

use super::matcher::{FaqEntry, FaqMatcher};
use crate::corpus::SourceRef;

static DEFAULT_FAQ: OnceLock<FaqMatcher> = OnceLock::new();

/// Process-wide matcher over the built-in entries, built on first use.
pub fn default_faq() -> &'static FaqMatcher {
    DEFAULT_FAQ.get_or_init(|| FaqMatcher::new(default_entries()))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn default_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            patterns: strings(&[
                "can i use my phone",
                "use my phone at school",
                "mobile phone policy",
                "phone during school",
                "phones allowed in school",
                "bring my phone",
                "phone in class",
                "phone in lesson",
            ]),
            exclude_patterns: strings(&[
                "charge my phone",
                "broken phone",
                "lost my phone",
                "phone number",
            ]),
            min_query_length: None,
            answer: "\u{2022} Mobile phones must be switched off and kept in bags during lessons\n\
                     \u{2022} Phones cannot be used around school premises during school hours\n\
                     \u{2022} If you need to contact a parent/guardian, ask a member of staff for permission\n\
                     \u{2022} Sixth Form students may use phones in designated areas only\n\
                     \n\
                     Source: Mobile Phone Policy"
                .to_string(),
            sources: vec![SourceRef::new("Mobile Phone Policy", "Mobile Phone Rules")],
        },
        FaqEntry {
            patterns: strings(&[
                "use chatgpt",
                "use chat gpt",
                "chatgpt for homework",
                "chatgpt for essay",
                "chatgpt for coursework",
                "use ai for homework",
                "use ai for assignment",
                "ai to write",
                "ai to help with homework",
                "allowed to use ai",
                "can i use ai",
            ]),
            exclude_patterns: strings(&["what is chatgpt", "how does ai work"]),
            min_query_length: None,
            answer: "\u{2022} AI tools like ChatGPT may be used for research and understanding concepts\n\
                     \u{2022} You must not submit AI-generated text as your own work\n\
                     \u{2022} Any AI assistance must be declared and referenced appropriately\n\
                     \u{2022} Using AI to complete assignments without acknowledgement is academic misconduct\n\
                     \n\
                     Source: Academic Integrity Policy"
                .to_string(),
            sources: vec![SourceRef::new("Academic Integrity Policy", "AI and Technology")],
        },
        FaqEntry {
            patterns: strings(&[
                "what happens if i plagiarise",
                "what happens if i plagiarize",
                "plagiarism consequences",
                "caught plagiarising",
                "caught plagiarizing",
                "copy someone else",
                "copy another student",
                "copy from internet",
                "submit copied work",
                "copying homework",
                "copying coursework",
                "copying essay",
            ]),
            exclude_patterns: strings(&[
                "copy notes",
                "photocopy",
                "copying from the board",
                "copy down",
            ]),
            min_query_length: None,
            answer: "\u{2022} First offence: Written warning and resubmission required\n\
                     \u{2022} Second offence: Detention and parental notification\n\
                     \u{2022} Serious cases: May result in suspension or exam disqualification\n\
                     \u{2022} All cases are recorded on your academic record\n\
                     \n\
                     Source: Academic Integrity Policy"
                .to_string(),
            sources: vec![SourceRef::new("Academic Integrity Policy", "Consequences")],
        },
        FaqEntry {
            patterns: strings(&[
                "who can see my data",
                "who can access my data",
                "personal data access",
                "my personal information",
                "data protection policy",
                "privacy policy",
                "who sees my records",
                "who has access to my information",
                "school store my data",
            ]),
            exclude_patterns: strings(&["delete my data", "change my data"]),
            min_query_length: None,
            answer: "\u{2022} Only authorised school staff can access your personal data\n\
                     \u{2022} Parents/guardians can request access to their child's records\n\
                     \u{2022} Data is shared with exam boards and local authority when required by law\n\
                     \u{2022} Third parties cannot access your data without consent\n\
                     \n\
                     Source: Data Protection Policy"
                .to_string(),
            sources: vec![SourceRef::new("Data Protection Policy", "Data Access")],
        },
    ]
}
