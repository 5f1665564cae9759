//! The static résumé record used by the classifier backend.
//!
//! An immutable literal definition built once at startup. Every field the
//! topic rules read is populated here; the formatters rely on that.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Rendered as a literal Markdown-style link when present.
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeRecord {
    pub name: String,
    pub summary: String,
    pub languages: Vec<String>,
    pub frameworks_tools: Vec<String>,
    pub education: Education,
    pub projects: Vec<Project>,
    pub internship: Internship,
    pub certifications: Vec<String>,
    pub contact: Contact,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        let s = |v: &str| v.to_string();
        ResumeRecord {
            name: s("Lorens"),
            summary: s(
                "Software engineering graduate focused on backend services and \
                 applied chatbots, with internship experience shipping production code.",
            ),
            languages: vec![s("Java"), s("Python"), s("JavaScript"), s("SQL")],
            frameworks_tools: vec![
                s("Spring Boot"),
                s("Flask"),
                s("React"),
                s("Docker"),
                s("Git"),
            ],
            education: Education {
                degree: s("BSc in Computer Science"),
                institution: s("University of Antwerp"),
                graduation_year: 2024,
            },
            projects: vec![
                Project {
                    name: s("Resume Chatbot"),
                    description: s(
                        "an HTTP chatbot that answers questions about this resume",
                    ),
                    link: Some(s("https://github.com/lorens/resume-chatbot")),
                },
                Project {
                    name: s("Inventory Tracker"),
                    description: s("a Spring Boot inventory service with a React frontend"),
                    link: None,
                },
            ],
            internship: Internship {
                company: s("Acme Analytics"),
                role: s("Backend Engineering Intern"),
                duration: s("6 months"),
                description: s("built data ingestion endpoints and internal dashboards"),
            },
            certifications: vec![
                s("AWS Certified Cloud Practitioner"),
                s("Oracle Certified Associate, Java SE 8"),
            ],
            contact: Contact {
                email: s("lorens@example.com"),
                phone: s("+32 470 00 00 00"),
                linkedin: s("https://www.linkedin.com/in/lorens"),
                github: s("https://github.com/lorens"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_populates_every_rule_field() {
        // The summary and contact rules read these; they must never be empty.
        let record = ResumeRecord::default();
        assert!(!record.summary.is_empty());
        assert!(!record.contact.email.is_empty());
        assert!(!record.contact.phone.is_empty());
        assert!(!record.frameworks_tools.is_empty());
        assert!(!record.languages.is_empty());
        assert!(!record.certifications.is_empty());
        assert!(!record.projects.is_empty());
    }
}
