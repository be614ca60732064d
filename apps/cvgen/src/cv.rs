//! CV content as plain section records, kept apart from styling and layout.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::document::RichText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    AdditionalInfo,
}

impl SectionKind {
    /// The order every CV renders its sections in.
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::AdditionalInfo,
    ];
}

/// One category of the skills table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
    pub category: String,
    pub items: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    /// Rendered one after another with a small gap in between.
    Paragraphs(Vec<RichText>),
    Table(Vec<SkillRow>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvContent {
    pub name: String,
    pub title: String,
    pub contact: Vec<String>,
    pub sections: Vec<Section>,
}

impl CvContent {
    /// The compiled-in CV.
    pub fn builtin() -> Self {
        CvContent {
            name: "Joseph Santur Mogollón".to_string(),
            title: "Full Stack Developer".to_string(),
            contact: vec![
                "joseph.santur@example.com | +34 600 000 000".to_string(),
                "linkedin.com/in/josephsantur | github.com/jsantur".to_string(),
                "Galicia, España".to_string(),
            ],
            sections: vec![
                Section {
                    kind: SectionKind::Summary,
                    title: "Resumen Profesional".to_string(),
                    body: SectionBody::Paragraphs(vec![RichText::plain(
                        "Desarrollador Full Stack apasionado con más de 2 años de experiencia \
                         en la creación de soluciones web y móviles escalables. Especializado \
                         en JavaScript, React.js, Node.js y Python. Experiencia en arquitectura \
                         de software, consultoría y desarrollo de aplicaciones empresariales.",
                    )]),
                },
                Section {
                    kind: SectionKind::Experience,
                    title: "Experiencia Profesional".to_string(),
                    body: SectionBody::Paragraphs(vec![
                        role(
                            "Senior Full Stack Developer",
                            "Tech Solutions Inc. | 2023 - Presente",
                            &[
                                "Lideré el desarrollo de aplicaciones web empresariales con React.js y Node.js",
                                "Diseñé arquitecturas escalables y optimicé rendimiento de aplicaciones",
                                "Implementé soluciones cloud con AWS y Docker",
                                "Trabajé con equipos ágiles usando Scrum y metodologías DevOps",
                            ],
                        ),
                        role(
                            "Full Stack Developer",
                            "Digital Innovations | 2022 - 2023",
                            &[
                                "Desarrollé aplicaciones móviles con React Native",
                                "Implementé servicios backend con Express.js y microservicios",
                                "Migré sistemas monolíticos a arquitecturas modernas",
                                "Integré sistemas de pago y servicios de terceros",
                            ],
                        ),
                        role(
                            "Junior Software Developer",
                            "StartUp Valley | 2021 - 2022",
                            &[
                                "Contribuí al desarrollo de aplicaciones web con JavaScript y Python",
                                "Participé en code reviews y mejora continua",
                                "Implementé nuevas funcionalidades y resolví bugs",
                                "Trabajé con bases de datos SQL y NoSQL",
                            ],
                        ),
                    ]),
                },
                Section {
                    kind: SectionKind::Education,
                    title: "Educación".to_string(),
                    body: SectionBody::Paragraphs(vec![RichText::new()
                        .bold("M.Sc. Masters Degree")
                        .text(" | Ingeniería de Software | Universidad Tecnológica")
                        .line_break()
                        .bold("B.Sc. Bachelors Degree")
                        .text(" | Ciencias de la Computación | Universidad Nacional")
                        .line_break()
                        .bold("Certificaciones:")
                        .text(" AWS Certified Developer, Google Cloud Professional, React Advanced")]),
                },
                Section {
                    kind: SectionKind::Skills,
                    title: "Habilidades Técnicas".to_string(),
                    body: SectionBody::Table(vec![
                        skill(
                            "Frontend:",
                            "HTML/CSS (95%), JavaScript (90%), React.js (85%), TypeScript (75%)",
                        ),
                        skill(
                            "Backend:",
                            "Node.js (88%), Python (92%), Express.js (85%), PostgreSQL (80%)",
                        ),
                        skill(
                            "Tools:",
                            "Git (90%), Docker (75%), AWS (70%), React Native (82%)",
                        ),
                        skill("Otros:", "Linux, CI/CD, Agile/Scrum, REST APIs, GraphQL"),
                    ]),
                },
                Section {
                    kind: SectionKind::Projects,
                    title: "Proyectos Destacados".to_string(),
                    body: SectionBody::Paragraphs(vec![RichText::new()
                        .bold("E-Commerce Platform")
                        .text(" | React.js, Node.js, MongoDB, Stripe")
                        .line_break()
                        .text(
                            "Plataforma completa de comercio electrónico con panel de \
                             administración y pasarela de pagos.",
                        )
                        .line_break()
                        .line_break()
                        .bold("Task Management App")
                        .text(" | React Native, Firebase, Redux")
                        .line_break()
                        .text(
                            "Aplicación móvil para gestión de proyectos con sincronización \
                             en tiempo real.",
                        )
                        .line_break()
                        .line_break()
                        .bold("Analytics Dashboard")
                        .text(" | Vue.js, Python, FastAPI, PostgreSQL")
                        .line_break()
                        .text(
                            "Dashboard empresarial para análisis de datos con \
                             visualizaciones interactivas.",
                        )]),
                },
                Section {
                    kind: SectionKind::AdditionalInfo,
                    title: "Información Adicional".to_string(),
                    body: SectionBody::Paragraphs(vec![RichText::new()
                        .bold("Idiomas:")
                        .text(" Español (nativo), Inglés (avanzado), Gallego (nativo)")
                        .line_break()
                        .bold("Disponibilidad:")
                        .text(" Inmediata | ")
                        .bold("Ubicación:")
                        .text(" Galicia, España (remoto/presencial)")
                        .line_break()
                        .bold("Intereses:")
                        .text(
                            " Tecnología, desarrollo de software, inteligencia artificial, deporte",
                        )]),
                },
            ],
        }
    }

    /// Kinds of the sections as stored, in order.
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    /// True when every section appears exactly once, in [`SectionKind::ORDER`].
    pub fn has_fixed_section_order(&self) -> bool {
        self.section_kinds() == SectionKind::ORDER
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// A job entry: bold role, company/period on the same line, then one bullet per line.
fn role(title: &str, company_and_period: &str, bullets: &[&str]) -> RichText {
    let mut text = RichText::new()
        .bold(title)
        .text(format!(" | {company_and_period}"));
    for bullet in bullets {
        text = text.line_break().text(format!("• {bullet}"));
    }
    text
}

fn skill(category: &str, items: &str) -> SkillRow {
    SkillRow {
        category: category.to_string(),
        items: items.to_string(),
    }
}
