//! The résumé document rendered by the app.
//!
//! This is data, not behavior: the renderer walks sections and draws each
//! body kind with the active palette.

/// A complete résumé document.
#[derive(Debug, Clone)]
pub struct Resume {
    /// Display name shown in the page header.
    pub name: String,
    /// Decorative tagline under the name.
    pub tagline: String,
    /// Recipient of the contact form handoff.
    pub contact_email: String,
    /// Ordered page sections; navigation entries mirror this list.
    pub sections: Vec<Section>,
}

/// One navigable page section.
#[derive(Debug, Clone)]
pub struct Section {
    /// Stable identifier used for navigation and reveal marks.
    pub id: String,
    /// Heading shown above the body.
    pub title: String,
    pub body: SectionBody,
}

/// Body kinds the renderer understands.
#[derive(Debug, Clone)]
pub enum SectionBody {
    /// Free paragraphs.
    Paragraphs(Vec<String>),
    /// Expandable experience cards.
    Cards(Vec<Card>),
    /// Two-column table with a header band.
    Table {
        header: [String; 2],
        rows: Vec<[String; 2]>,
    },
    /// Collapsed-by-default accordion entries.
    Accordion(Vec<AccordionEntry>),
    /// The validated mail-to contact form.
    ContactForm,
}

/// An expandable card, e.g. one position in the experience section.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    /// Shown only while the card is expanded.
    pub details: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AccordionEntry {
    pub title: String,
    pub body: String,
}

impl Resume {
    /// Built-in sample document.
    pub fn sample() -> Self {
        Self {
            name: "Alex Moreau".to_string(),
            tagline: "Building quietly reliable software since 2014".to_string(),
            contact_email: "alex.moreau@example.com".to_string(),
            sections: vec![
                Section {
                    id: "about".to_string(),
                    title: "About".to_string(),
                    body: SectionBody::Paragraphs(vec![
                        "Systems engineer with a decade of experience shipping \
                         backend services, developer tooling, and the occasional \
                         user interface."
                            .to_string(),
                        "Currently focused on observability pipelines and making \
                         on-call quieter for everyone involved."
                            .to_string(),
                    ]),
                },
                Section {
                    id: "experience".to_string(),
                    title: "Experience".to_string(),
                    body: SectionBody::Cards(vec![
                        Card {
                            title: "Staff Engineer — Northwind Labs".to_string(),
                            subtitle: "2021 – present".to_string(),
                            summary: "Own the ingestion tier of the telemetry platform."
                                .to_string(),
                            details: vec![
                                "Cut p99 ingest latency from 900ms to 120ms.".to_string(),
                                "Led the migration off a bespoke wire format.".to_string(),
                                "Mentor four engineers across two teams.".to_string(),
                            ],
                        },
                        Card {
                            title: "Senior Engineer — Fathom Analytics".to_string(),
                            subtitle: "2017 – 2021".to_string(),
                            summary: "Built the query layer behind customer dashboards."
                                .to_string(),
                            details: vec![
                                "Designed the rollup store that served 40k QPS.".to_string(),
                                "Introduced structured logging across services.".to_string(),
                            ],
                        },
                        Card {
                            title: "Engineer — Brightly".to_string(),
                            subtitle: "2014 – 2017".to_string(),
                            summary: "Full-stack work on a scheduling product.".to_string(),
                            details: vec![
                                "First engineering hire; grew the team to nine.".to_string(),
                            ],
                        },
                    ]),
                },
                Section {
                    id: "skills".to_string(),
                    title: "Skills".to_string(),
                    body: SectionBody::Table {
                        header: ["Area".to_string(), "Tools".to_string()],
                        rows: vec![
                            [
                                "Languages".to_string(),
                                "Rust, Go, Python, SQL".to_string(),
                            ],
                            [
                                "Infrastructure".to_string(),
                                "Kubernetes, Terraform, Postgres, Kafka".to_string(),
                            ],
                            [
                                "Observability".to_string(),
                                "OpenTelemetry, Grafana, Prometheus".to_string(),
                            ],
                        ],
                    },
                },
                Section {
                    id: "education".to_string(),
                    title: "Education".to_string(),
                    body: SectionBody::Accordion(vec![
                        AccordionEntry {
                            title: "MSc Computer Science — University of Lyon".to_string(),
                            body: "Thesis on incremental dataflow computation, 2014."
                                .to_string(),
                        },
                        AccordionEntry {
                            title: "BSc Mathematics — University of Lyon".to_string(),
                            body: "Graduated with honours, 2012.".to_string(),
                        },
                    ]),
                },
                Section {
                    id: "contact".to_string(),
                    title: "Contact".to_string(),
                    body: SectionBody::ContactForm,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sections_have_unique_ids() {
        let resume = Resume::sample();
        let mut ids: Vec<_> = resume.sections.iter().map(|s| s.id.as_str()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn sample_includes_the_contact_form() {
        let resume = Resume::sample();
        assert!(
            resume
                .sections
                .iter()
                .any(|s| matches!(s.body, SectionBody::ContactForm))
        );
        assert!(crate::form::is_valid_email(&resume.contact_email));
    }
}
