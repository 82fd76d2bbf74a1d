//! Letters to government agencies and tenancy notices.

use super::model::{Category, DocumentDef, FieldDef, PromptDef};
use super::TONES;

pub const DOCUMENTS: &[DocumentDef] = &[GOV_ENQUIRY, GOV_FOLLOWUP, GOV_FOI_REQUEST, TENANCY_REMEDY];

pub const GOV_ENQUIRY: DocumentDef = DocumentDef {
    key: "gov_enquiry",
    category: Category::Government,
    name: "Government Enquiry Letter",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("yourAddress", "Your Address").required(),
        FieldDef::text("department", "Department/Agency").required(),
        FieldDef::text("topic", "Topic / Subject").required(),
        FieldDef::text("reference", "Reference / Case # (if any)"),
        FieldDef::textarea("details", "Details of your enquiry (facts only)").required(),
        FieldDef::textarea("desiredOutcome", "What response you want").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("formal"),
    ],
    system: "You are a professional correspondence writer for Australian government communications. Be clear, concise, and strictly factual. Do not provide legal advice.",
    prompt: PromptDef {
        instruction: "Draft a Government Enquiry Letter.",
        facts: &[
            "From: {yourName}, Address: {yourAddress}",
            "To department/agency: {department}",
            "Topic: {topic}",
            "Reference: {reference|(none)}",
            "Details: {details}",
            "Desired outcome: {desiredOutcome}",
            "Tone: {tone|formal}",
        ],
        constraints: &[
            "Structure: Opening → Background/Details → Questions/Requests → Contact & next steps → Sign-off.",
            "Use Australian business English. No invented facts; if missing, add [TODO: X].",
            "220–380 words.",
        ],
    },
};

pub const GOV_FOLLOWUP: DocumentDef = DocumentDef {
    key: "gov_followup",
    category: Category::Government,
    name: "Government Follow-Up Letter",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("department", "Department/Agency").required(),
        FieldDef::text("topic", "Topic / Subject").required(),
        FieldDef::date("priorDate", "Date of prior contact").required(),
        FieldDef::text("reference", "Reference / Case # (if any)"),
        FieldDef::textarea("summary", "Summary of what you asked previously").required(),
        FieldDef::textarea("desiredOutcome", "What you’re seeking now").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("neutral"),
    ],
    system: "You write clear government follow-ups. Be courteous, specific, and action-oriented.",
    prompt: PromptDef {
        instruction: "Draft a Follow-Up to a government department.",
        facts: &[
            "From: {yourName}",
            "Department/Agency: {department}",
            "Topic: {topic}",
            "Prior contact date: {priorDate}",
            "Reference: {reference|(none)}",
            "Summary of prior request: {summary}",
            "Desired outcome now: {desiredOutcome}",
            "Tone: {tone|neutral}",
        ],
        constraints: &[
            "Structure: Reference prior contact → Restate request → Polite deadline/next steps → Contact details.",
            "Australian business English; 180–320 words.",
        ],
    },
};

pub const GOV_FOI_REQUEST: DocumentDef = DocumentDef {
    key: "gov_foi_request",
    category: Category::Government,
    name: "Freedom of Information (FOI) Request (general)",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("department", "Department/Agency").required(),
        FieldDef::textarea("documentsSought", "Documents sought (be specific)").required(),
        FieldDef::text("dateRange", "Date range (e.g. 2024-01-01 to 2024-12-31)").required(),
        FieldDef::text("format", "Preferred format (PDF/email/etc.)"),
        FieldDef::text("feePosition", "Fee position").with_default("willing to pay reasonable fees"),
        FieldDef::select("tone", "Tone", TONES).with_default("formal"),
    ],
    system: "You write neutral FOI requests in Australian context. This is not legal advice.",
    prompt: PromptDef {
        instruction: "Draft a neutral FOI request.",
        facts: &[
            "Applicant: {yourName}",
            "Agency: {department}",
            "Documents sought: {documentsSought}",
            "Date range: {dateRange}",
            "Preferred format: {format|(no preference stated)}",
            "Fees: {feePosition}",
            "Tone: {tone|formal}",
        ],
        constraints: &[
            "Structure: Intro → Scope of documents → Date range → Format → Fees → Closing.",
            "Be precise and courteous. 180–300 words.",
        ],
    },
};

pub const TENANCY_REMEDY: DocumentDef = DocumentDef {
    key: "tenancy_remedy",
    category: Category::Government,
    name: "Tenancy Notice to Remedy Breach",
    fields: &[
        FieldDef::text("landlordName", "Landlord/Agent name").required(),
        FieldDef::text("tenantName", "Tenant name").required(),
        FieldDef::text("property", "Property address").required(),
        FieldDef::textarea("breach", "Breach (facts only)").required(),
        FieldDef::text("requestedRemedy", "Requested remedy").required(),
        FieldDef::date("remedyBy", "Remedy by (YYYY-MM-DD)").required(),
    ],
    system: "You are a neutral property correspondence writer (not legal advice).",
    prompt: PromptDef {
        instruction: "Draft a **Notice to Remedy Breach**.",
        facts: &[
            "Landlord/Agent: {landlordName}",
            "Tenant: {tenantName}",
            "Property: {property}",
            "Breach: {breach}",
            "Remedy required by: {remedyBy}",
            "Requested remedy: {requestedRemedy}",
        ],
        constraints: &[
            "Neutral, factual tone; no legal threats or advice.",
            "Sections: Purpose → Details → Remedy request → Next steps → Contact.",
            "200–350 words.",
        ],
    },
};
