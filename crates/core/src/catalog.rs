//! Built-in template catalog.
//!
//! Seeded verbatim into an empty store on first access. Catalog changes here
//! do not propagate to stores that were already seeded.

use crate::template::{FieldKind, Phase, Section, Template, TemplateContent};

/// Version written alongside the seeded catalog.
pub const CATALOG_VERSION: u32 = 1;

fn text(id: &str, label: &str, placeholder: Option<&str>) -> Section {
    Section {
        id: id.to_string(),
        label: label.to_string(),
        kind: FieldKind::Text,
        placeholder: placeholder.map(str::to_string),
    }
}

fn area(id: &str, label: &str, placeholder: Option<&str>) -> Section {
    Section {
        id: id.to_string(),
        label: label.to_string(),
        kind: FieldKind::Textarea,
        placeholder: placeholder.map(str::to_string),
    }
}

fn form(id: &str, title: &str, description: &str, phase: Phase, sections: Vec<Section>) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        phase,
        content: TemplateContent::Form { sections },
    }
}

fn editor(id: &str, title: &str, description: &str, phase: Phase, note: &str) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        phase,
        content: TemplateContent::Editor {
            description: note.to_string(),
        },
    }
}

fn user_type() -> Section {
    text(
        "userType",
        "User Type",
        Some("e.g. Student, Professional, Admin"),
    )
}

/// The fixed list of templates shipped with the platform, in catalog order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        // --- Empathize ---
        form(
            "empathy-map",
            "Empathy Map",
            "Visualize what users say, think, do, and feel.",
            Phase::Empathize,
            vec![
                user_type(),
                area("says", "Says", Some("What are some quotes and defining words?")),
                area("thinks", "Thinks", Some("What is occupying their thoughts?")),
                area("does", "Does", Some("What actions and behaviors have you noticed?")),
                area("feels", "Feels", Some("What emotions might they be feeling?")),
            ],
        ),
        form(
            "user-persona",
            "User Persona",
            "Create a fictional character that represents your user.",
            Phase::Empathize,
            vec![
                user_type(),
                text("name", "Name", Some("Persona Name")),
                area("bio", "Bio", Some("Short biography")),
                text("age", "Age", Some("e.g. 25")),
                text("gender", "Gender", Some("e.g. Female")),
                text("occupation", "Occupation", Some("e.g. Software Engineer")),
                text("location", "Location", Some("e.g. San Francisco, CA")),
                area("goals", "Goals", Some("What do they want to achieve?")),
                area("painPoints", "Pain Points", Some("What frustrates them?")),
            ],
        ),
        editor(
            "user-journey-map",
            "User Journey Map",
            "Map out the user's experience step-by-step.",
            Phase::Empathize,
            "The editor will initialize default stages and rows.",
        ),
        form(
            "user-interviews",
            "User Interviews",
            "Structure for conducting and recording user interviews.",
            Phase::Empathize,
            vec![
                user_type(),
                text("participant", "Participant Info", Some("Name/Role")),
                area("notes", "Interview Notes", Some("Key takeaways...")),
                area("quotes", "Key Quotes", Some("\"...\"")),
                area("observations", "Observations", Some("Non-verbal cues...")),
            ],
        ),
        form(
            "questionnaire",
            "Questionnaire",
            "List of questions to ask during user research.",
            Phase::Empathize,
            vec![
                user_type(),
                area(
                    "questions",
                    "Questions",
                    Some("1. What is your first question?\n2. What is your second question?\n..."),
                ),
            ],
        ),
        // --- Define ---
        form(
            "problem-statement",
            "Problem Statement (Customer-Centric)",
            "Define the core problem from the customer's perspective.",
            Phase::Define,
            vec![
                text("user", "User", Some("Who is the user?")),
                text("need", "Need", Some("What do they need?")),
                area("insight", "Insight", Some("Because (insight)...")),
                area(
                    "statement",
                    "Full Statement",
                    Some("[User] needs [Need] because [Insight]"),
                ),
            ],
        ),
        form(
            "user-needs",
            "User Needs Framework",
            "Categorize and prioritize user needs.",
            Phase::Define,
            vec![
                area("functional", "Functional Needs", Some("What practical things do they need?")),
                area("emotional", "Emotional Needs", Some("How do they want to feel?")),
                area("social", "Social Needs", Some("How do they want to be perceived?")),
            ],
        ),
        // --- Ideate ---
        form(
            "scamper",
            "SCAMPER",
            "Brainstorming technique: Substitute, Combine, Adapt, Modify, Put to other uses, Eliminate, Reverse.",
            Phase::Ideate,
            vec![
                area("s", "Substitute", None),
                area("c", "Combine", None),
                area("a", "Adapt", None),
                area("m", "Modify", None),
                area("p", "Put to another use", None),
                area("e", "Eliminate", None),
                area("r", "Reverse", None),
            ],
        ),
        form(
            "disrupt",
            "DISRUPT",
            "Lateral thinking technique to generate disruptive ideas.",
            Phase::Ideate,
            vec![
                area("d", "Derive pattern", None),
                area("i", "Improve", None),
                area("s", "Shift/Scale", None),
                area("r", "Reframe/Recycle", None),
                area("u", "Undo/Unbundle", None),
                area("p", "Provide/Pause", None),
                area("t", "Touch/Trash", None),
            ],
        ),
        editor(
            "idea-categorization",
            "Idea Categorization",
            "Sort ideas into categories.",
            Phase::Ideate,
            "The editor will initialize default categories.",
        ),
        form(
            "hmw-questions",
            "How Might We Questions",
            "Reframe problems as opportunities.\nFormula: How Might We + Intended Action (as an action verb) + For + Potential User (as the subject) + So That + Desired Outcome",
            Phase::Ideate,
            vec![
                text("problem", "Core Problem", None),
                area(
                    "questions",
                    "How Might We Questions",
                    Some("Enter multiple questions separated by Enter..."),
                ),
            ],
        ),
        // --- Prototype ---
        editor(
            "paper-prototypes",
            "Paper Prototypes",
            "Sketch out screens and flows. Upload images, annotate, and connect them.",
            Phase::Prototype,
            "The editor will initialize the canvas.",
        ),
        editor(
            "storyboarding",
            "Storyboarding",
            "Visualize the user's experience with the solution.",
            Phase::Prototype,
            "The editor will initialize default frames.",
        ),
        // --- Test ---
        form(
            "usability-testing",
            "Usability Testing Checklist",
            "Prepare for usability testing sessions.",
            Phase::Test,
            vec![
                area("logistics", "Logistics", Some("Room, Device, Recording setup...")),
                area("scenario", "Test Scenario", Some("Task to give the user...")),
                area("metrics", "Success Metrics", Some("Time to completion, errors...")),
            ],
        ),
        editor(
            "feedback-form",
            "Feedback Form",
            "Collect structured feedback.",
            Phase::Test,
            "The editor will initialize default questions.",
        ),
        form(
            "user-interviews-validation",
            "User Interviews (Validation)",
            "Validate assumptions with users.",
            Phase::Test,
            vec![
                text("hypothesis", "Hypothesis", Some("We believe that...")),
                area("questions", "Validation Questions", None),
                area("findings", "Findings", Some("Validated or Invalidated?")),
            ],
        ),
        // --- Other ---
        form(
            "mind-mapping",
            "Mind Mapping",
            "Visually organize information, starting from a central theme.",
            Phase::Other,
            vec![
                text("central-theme", "Central Theme", Some("Main idea...")),
                area("branch-1", "Key Branch 1", Some("Sub-topic...")),
                area("branch-2", "Key Branch 2", Some("Sub-topic...")),
                area("branch-3", "Key Branch 3", Some("Sub-topic...")),
                area("connections", "Connections & Insights", Some("Notes on relationships...")),
            ],
        ),
        form(
            "business-model-canvas",
            "Business Model Canvas",
            "Lean Canvas adaptation for quick business modeling.",
            Phase::Other,
            vec![
                area("problem", "Problem", Some("Top 3 problems...")),
                area("existing-alternatives", "Existing Alternatives", Some("How are these solved today?")),
                area("solution", "Solution", Some("Top 3 features...")),
                area("key-metrics", "Key Metrics", Some("Key activities you measure...")),
                area("uvp", "Unique Value Proposition", Some("Single, clear, compelling message...")),
                text("high-level-concept", "High-Level Concept", Some("X for Y analogy...")),
                area("unfair-advantage", "Unfair Advantage", Some("Can't be easily copied or bought...")),
                area("channels", "Channels", Some("Path to customers...")),
                area("customer-segments", "Customer Segments", Some("Target customers...")),
                area(
                    "early-adopters",
                    "Early Adopters",
                    Some("Characteristics of ideal early customer..."),
                ),
                area("cost-structure", "Cost Structure", Some("Fixed and variable costs...")),
                area(
                    "revenue-streams",
                    "Revenue Streams",
                    Some("Revenue model, life time value, etc..."),
                ),
            ],
        ),
        form(
            "service-blueprint",
            "Service Blueprint",
            "Visualize organizational processes in order to optimize how a service is delivered.",
            Phase::Other,
            vec![
                area(
                    "physical-evidence",
                    "Physical Evidence / Touch Points",
                    Some("Website, Store, Receipts, Emails..."),
                ),
                area("customer-actions", "Customer Actions", Some("Steps the customer takes...")),
                area("customer-emotions", "Customer Emotions", Some("How they feel at each step...")),
                area(
                    "frontstage",
                    "Frontstage Actions (Visible)",
                    Some("Employee actions visible to customer..."),
                ),
                area("backstage", "Backstage Actions (Invisible)", Some("Employee actions not visible...")),
                area(
                    "support-processes",
                    "Support Processes",
                    Some("Internal steps to support the service..."),
                ),
            ],
        ),
    ]
}
