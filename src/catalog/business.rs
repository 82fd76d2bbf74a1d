//! Business correspondence: quotations, expressions of interest, offers and
//! payment demands.

use super::model::{Category, DocumentDef, FieldDef, PromptDef};
use super::TONES;

pub const DOCUMENTS: &[DocumentDef] = &[
    BIZ_QUOTE_REQUEST,
    BIZ_FOLLOWUP_QUOTE,
    BIZ_EOI,
    EMPLOYMENT_OFFER,
    DEMAND_PAYMENT,
];

pub const BIZ_QUOTE_REQUEST: DocumentDef = DocumentDef {
    key: "biz_quote_request",
    category: Category::Business,
    name: "Request for Quotation (RFQ)",
    fields: &[
        FieldDef::text("yourName", "Your Name/Company").required(),
        FieldDef::text("recipient", "Supplier/Company").required(),
        FieldDef::textarea("requirements", "What you need (specs/quantity/etc.)").required(),
        FieldDef::date("deadline", "Quote deadline").required(),
        FieldDef::text("deliveryLocation", "Delivery/location (if relevant)"),
        FieldDef::text("selectionCriteria", "Selection criteria (price, quality, lead time…)"),
        FieldDef::select("tone", "Tone", TONES).with_default("neutral"),
    ],
    system: "You write concise, professional RFQs.",
    prompt: PromptDef {
        instruction: "Draft a Request for Quotation (RFQ).",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "Requirements: {requirements}",
            "Deadline for quote: {deadline}",
            "Delivery/location: {deliveryLocation|(not specified)}",
            "Selection criteria: {selectionCriteria|(not specified)}",
            "Tone: {tone|neutral}",
        ],
        constraints: &[
            "Structure: Context → Requirements → What to include in quote → Deadline → Contact.",
            "180–300 words.",
        ],
    },
};

pub const BIZ_FOLLOWUP_QUOTE: DocumentDef = DocumentDef {
    key: "biz_followup_quote",
    category: Category::Business,
    name: "Follow-Up on Quotation Request",
    fields: &[
        FieldDef::text("yourName", "Your Name/Company").required(),
        FieldDef::text("recipient", "Supplier/Company").required(),
        FieldDef::date("rfqDate", "Original RFQ date").required(),
        FieldDef::text("topic", "RFQ subject").required(),
        FieldDef::textarea("nudge", "Specific nudge or info needed").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("polite"),
    ],
    system: "You write polite, effective follow-ups.",
    prompt: PromptDef {
        instruction: "Draft a follow-up about a quotation.",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "RFQ date: {rfqDate}",
            "Subject: {topic}",
            "Nudge/Info needed: {nudge}",
            "Tone: {tone|polite}",
        ],
        constraints: &[
            "Be courteous; include gentle call-to-action and timeline.",
            "140–240 words.",
        ],
    },
};

pub const BIZ_EOI: DocumentDef = DocumentDef {
    key: "biz_eoi",
    category: Category::Business,
    name: "Expression of Interest (EOI) — General",
    fields: &[
        FieldDef::text("yourName", "Your Name/Company").required(),
        FieldDef::text("recipient", "Recipient/Organisation").required(),
        FieldDef::text("opportunity", "Opportunity / Tender / Role").required(),
        FieldDef::textarea("valueProp", "Topic of Discussion")
            .required()
            .with_example("e.g., Interest in supplying fresh produce to the school canteen"),
        FieldDef::textarea("relevantExperience", "Background or Story")
            .required()
            .with_example("e.g., We have been running a small garden project for 2 years supplying local markets"),
        FieldDef::text("cta", "What would you like them to do next?")
            .required()
            .with_example("e.g., Arrange a meeting to discuss further"),
        FieldDef::select("tone", "Tone", TONES).with_default("formal"),
    ],
    system: "You write confident yet concise EOIs.",
    prompt: PromptDef {
        instruction: "Draft an Expression of Interest (EOI).",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "Opportunity: {opportunity}",
            "Value proposition: {valueProp}",
            "Relevant experience: {relevantExperience}",
            "Call to action: {cta}",
            "Tone: {tone|formal}",
        ],
        constraints: &[
            "Structure: Intro → Fit & value → Experience highlights → CTA.",
            "220–360 words.",
        ],
    },
};

pub const EMPLOYMENT_OFFER: DocumentDef = DocumentDef {
    key: "employment_offer",
    category: Category::Business,
    name: "Employment Offer Letter",
    fields: &[
        FieldDef::text("employerName", "Employer name").required(),
        FieldDef::text("employerAddress", "Employer address").required(),
        FieldDef::text("candidateName", "Candidate name").required(),
        FieldDef::text("position", "Position title").required(),
        FieldDef::date("startDate", "Start date (YYYY-MM-DD)").required(),
        FieldDef::text("workType", "Work type (Full-time/Part-time/etc.)").required(),
        FieldDef::text("salary", "Salary (e.g. AUD 80,000 + super)").required(),
        FieldDef::text("paymentFreq", "Payment frequency (Weekly/Fortnightly/Monthly)").required(),
        FieldDef::text("probation", "Probation months").with_default("6"),
        FieldDef::text("benefits", "Key benefits (comma-separated)"),
        FieldDef::text("conditions", "Conditions (comma-separated)"),
    ],
    system: "You are a professional HR letter writer. Keep it warm and precise.",
    prompt: PromptDef {
        instruction: "Draft an **Employment Offer Letter**.",
        facts: &[
            "Employer: {employerName}, Address: {employerAddress}",
            "Candidate: {candidateName}",
            "Role: {position}",
            "Start date: {startDate}, Work type: {workType}",
            "Salary: {salary}, Frequency: {paymentFreq}",
            "Probation: {probation|6} months",
            "Benefits: {benefits|(none listed)}",
            "Conditions: {conditions|(none listed)}",
        ],
        constraints: &[
            "No legal advice. Neutral, professional tone.",
            "Sections: Offer summary → Compensation → Conditions → Acceptance instructions.",
            "250–450 words.",
        ],
    },
};

pub const DEMAND_PAYMENT: DocumentDef = DocumentDef {
    key: "demand_payment",
    category: Category::Business,
    name: "Demand for Payment",
    fields: &[
        FieldDef::text("senderName", "Your name/Company").required(),
        FieldDef::text("senderAddress", "Your address").required(),
        FieldDef::text("recipientName", "Recipient name").required(),
        FieldDef::text("recipientAddress", "Recipient address").required(),
        FieldDef::text("invoiceNumber", "Invoice #").required(),
        FieldDef::text("workDescription", "Work/Service description").required(),
        FieldDef::text("amount", "Amount (e.g. AUD 2,500)").required(),
        FieldDef::date("dueDate", "Original due date").required(),
        FieldDef::text("graceDays", "Grace days").with_default("7"),
        FieldDef::select("tone", "Tone", TONES).with_default("firm"),
    ],
    system: "You are a professional document drafter. Write only using the facts provided.",
    prompt: PromptDef {
        instruction: "Write a clear, specific **Demand for Payment** letter in Australian business English.",
        facts: &[
            "Sender: {senderName}, Address: {senderAddress}",
            "Recipient: {recipientName}, Address: {recipientAddress}",
            "Invoice: {invoiceNumber} for {workDescription}",
            "Amount due: {amount}",
            "Original due date: {dueDate}",
            "Grace period: {graceDays|7} days",
            "Tone: {tone|firm}",
        ],
        constraints: &[
            "No invented facts. If something is missing, write [TODO: add X].",
            "Structure: Opening → Background → Payment request + deadline → Next steps (neutral) → Sign-off.",
            "Length target: 250–450 words.",
        ],
    },
};
