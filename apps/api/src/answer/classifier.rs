//! Topic classifier over the static résumé record.
//!
//! An ordered list of (trigger substrings, formatter) rules evaluated
//! first-match-wins against the lower-cased question. Ordering is part of
//! the contract: a question hitting triggers from two rules resolves to
//! whichever rule is declared first (frameworks/tools before programming
//! languages, for example), and tests pin that order.

use crate::answer::record::ResumeRecord;

pub const FALLBACK_MESSAGE: &str = "I'm not sure how to answer that. Try asking about my skills, \
     education, projects, internship, certifications, or how to contact me.";

/// One classifier rule: a question matching ANY trigger is answered by
/// `format`. Formatters read the record and never fail.
pub struct TopicRule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub format: fn(&ResumeRecord) -> String,
}

/// The rules in evaluation order.
static RULES: [TopicRule; 8] = [
    TopicRule {
        name: "frameworks",
        triggers: &["framework", "tool", "stack", "librar"],
        format: format_frameworks,
    },
    TopicRule {
        name: "languages",
        triggers: &["programming language", "language", "skill", "coding"],
        format: format_languages,
    },
    TopicRule {
        name: "education",
        triggers: &["education", "degree", "university", "college", "study", "studied"],
        format: format_education,
    },
    TopicRule {
        name: "projects",
        triggers: &["project", "built", "portfolio", "developed"],
        format: format_projects,
    },
    TopicRule {
        name: "internship",
        triggers: &["internship", "intern", "experience", "work", "company", "job"],
        format: format_internship,
    },
    TopicRule {
        name: "certifications",
        triggers: &["certification", "certificate", "certified", "course"],
        format: format_certifications,
    },
    TopicRule {
        name: "contact",
        triggers: &["contact", "email", "phone", "reach", "linkedin", "github"],
        format: format_contact,
    },
    TopicRule {
        name: "summary",
        triggers: &["summary", "about you", "who are you", "yourself", "introduce", "profile"],
        format: format_summary,
    },
];

/// Answers a question with the first rule whose trigger appears in it, or
/// the fixed fallback. Pure: the same question always yields the same answer.
pub fn classify(question: &str, record: &ResumeRecord) -> String {
    let question_lower = question.to_lowercase();
    for rule in &RULES {
        if rule.triggers.iter().any(|t| question_lower.contains(t)) {
            tracing::debug!("question matched topic rule '{}'", rule.name);
            return (rule.format)(record);
        }
    }
    FALLBACK_MESSAGE.to_string()
}

fn format_frameworks(record: &ResumeRecord) -> String {
    format!(
        "I work with the following frameworks and tools: {}.",
        record.frameworks_tools.join(", ")
    )
}

fn format_languages(record: &ResumeRecord) -> String {
    format!(
        "My programming languages are {}.",
        record.languages.join(", ")
    )
}

fn format_education(record: &ResumeRecord) -> String {
    format!(
        "I hold a {} from {} (class of {}).",
        record.education.degree, record.education.institution, record.education.graduation_year
    )
}

fn format_projects(record: &ResumeRecord) -> String {
    let rendered: Vec<String> = record
        .projects
        .iter()
        .map(|p| match &p.link {
            Some(link) => format!("[{}]({}): {}", p.name, link, p.description),
            None => format!("{}: {}", p.name, p.description),
        })
        .collect();
    format!("Some projects I have built: {}.", rendered.join("; "))
}

fn format_internship(record: &ResumeRecord) -> String {
    let i = &record.internship;
    format!(
        "I interned at {} as a {} for {}, where I {}.",
        i.company, i.role, i.duration, i.description
    )
}

fn format_certifications(record: &ResumeRecord) -> String {
    format!("My certifications: {}.", record.certifications.join(", "))
}

fn format_contact(record: &ResumeRecord) -> String {
    let c = &record.contact;
    format!(
        "You can reach {} at {} or {}, on [LinkedIn]({}) or [GitHub]({}).",
        record.name, c.email, c.phone, c.linkedin, c.github
    )
}

fn format_summary(record: &ResumeRecord) -> String {
    format!("{} — {}", record.name, record.summary)
}
