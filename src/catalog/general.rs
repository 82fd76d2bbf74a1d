//! Everyday correspondence with companies and organisations.

use super::model::{Category, DocumentDef, FieldDef, PromptDef, SelectOption};
use super::TONES;

pub const DOCUMENTS: &[DocumentDef] = &[
    GENERAL_COMPLAINT,
    GENERAL_ENQUIRY,
    GENERAL_MEETING_REQUEST,
    GENERAL_EXTENSION_REQUEST,
    GENERAL_REFUND_REQUEST,
    GENERAL_CLARIFICATION,
];

const MEETING_FORMATS: &[SelectOption] = &[
    SelectOption {
        value: "in-person",
        label: "In-person",
    },
    SelectOption {
        value: "online",
        label: "Online",
    },
];

pub const GENERAL_COMPLAINT: DocumentDef = DocumentDef {
    key: "general_complaint",
    category: Category::General,
    name: "General Complaint Letter",
    fields: &[
        FieldDef::text("senderName", "Your name").required(),
        FieldDef::text("senderEmail", "Your email").required(),
        FieldDef::text("recipientName", "Recipient/Company").required(),
        FieldDef::text("subject", "Subject").required(),
        FieldDef::date("eventDate", "Event date").required(),
        FieldDef::textarea("description", "What happened (facts)").required(),
        FieldDef::textarea("impact", "Impact on you"),
        FieldDef::text("desiredOutcome", "Desired outcome").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("polite"),
    ],
    system: "You are a helpful but firm customer service writer.",
    prompt: PromptDef {
        instruction: "Write a **Complaint Letter**.",
        facts: &[
            "From: {senderName} ({senderEmail})",
            "To: {recipientName}",
            "Subject: {subject}",
            "Event date: {eventDate}",
            "Description: {description}",
            "Impact: {impact|(none provided)}",
            "Desired outcome: {desiredOutcome}",
            "Tone: {tone|polite}",
        ],
        constraints: &[
            "Stick strictly to provided facts; if missing, add [TODO: X].",
            "Sections: Issue summary → Details → Impact → Requested outcome.",
            "200–350 words.",
        ],
    },
};

pub const GENERAL_ENQUIRY: DocumentDef = DocumentDef {
    key: "general_enquiry",
    category: Category::General,
    name: "General Enquiry to a Company",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("recipient", "Company/Recipient").required(),
        FieldDef::text("subject", "Subject").required(),
        FieldDef::textarea("details", "Details of your enquiry").required(),
        FieldDef::textarea("desiredOutcome", "What you’d like them to do").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("polite"),
    ],
    system: "You write clear business enquiries.",
    prompt: PromptDef {
        instruction: "Draft a general enquiry letter/email.",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "Subject: {subject}",
            "Details: {details}",
            "Desired outcome: {desiredOutcome}",
            "Tone: {tone|polite}",
        ],
        constraints: &[
            "Friendly, succinct; clear ask and contact details.",
            "150–260 words.",
        ],
    },
};

pub const GENERAL_MEETING_REQUEST: DocumentDef = DocumentDef {
    key: "general_meeting_request",
    category: Category::General,
    name: "Meeting Request",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("recipient", "Recipient").required(),
        FieldDef::textarea("purpose", "Meeting purpose").required(),
        FieldDef::text("proposedDates", "Proposed dates/times").required(),
        FieldDef::select("format", "Format", MEETING_FORMATS).with_default("online"),
        FieldDef::select("tone", "Tone", TONES).with_default("neutral"),
    ],
    system: "You write crisp meeting requests.",
    prompt: PromptDef {
        instruction: "Draft a meeting request.",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "Purpose: {purpose}",
            "Proposed dates/times: {proposedDates}",
            "Format: {format}",
            "Tone: {tone|neutral}",
        ],
        constraints: &[
            "Clear purpose, availability, and next step.",
            "120–220 words.",
        ],
    },
};

pub const GENERAL_EXTENSION_REQUEST: DocumentDef = DocumentDef {
    key: "general_extension_request",
    category: Category::General,
    name: "Deadline Extension Request",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("recipient", "Recipient/Organisation").required(),
        FieldDef::text("task", "Task / Submission / Obligation").required(),
        FieldDef::date("dueDate", "Current due date").required(),
        FieldDef::textarea("reason", "Reason (facts only)").required(),
        FieldDef::date("newDate", "Requested new date").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("polite"),
    ],
    system: "You write courteous extension requests.",
    prompt: PromptDef {
        instruction: "Draft a deadline extension request.",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "Task/Submission: {task}",
            "Current due date: {dueDate}",
            "Reason: {reason}",
            "Requested new date: {newDate}",
            "Tone: {tone|polite}",
        ],
        constraints: &[
            "Be respectful; show accountability and a clear new timeline.",
            "150–240 words.",
        ],
    },
};

pub const GENERAL_REFUND_REQUEST: DocumentDef = DocumentDef {
    key: "general_refund_request",
    category: Category::General,
    name: "Refund Request",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("company", "Company").required(),
        FieldDef::text("orderNumber", "Order/Invoice #").required(),
        FieldDef::date("purchaseDate", "Purchase date").required(),
        FieldDef::textarea("issue", "Issue experienced (facts only)").required(),
        FieldDef::text("desiredOutcome", "Desired outcome (refund/replace/credit)").required(),
        FieldDef::select("tone", "Tone", TONES).with_default("firm"),
    ],
    system: "You write firm but fair refund requests.",
    prompt: PromptDef {
        instruction: "Draft a refund request.",
        facts: &[
            "From: {yourName}",
            "Company: {company}",
            "Order/Invoice: {orderNumber}",
            "Purchase date: {purchaseDate}",
            "Issue: {issue}",
            "Desired outcome: {desiredOutcome}",
            "Tone: {tone|firm}",
        ],
        constraints: &[
            "Clear facts; polite but assertive ask.",
            "150–240 words.",
        ],
    },
};

pub const GENERAL_CLARIFICATION: DocumentDef = DocumentDef {
    key: "general_clarification",
    category: Category::General,
    name: "Clarification Request",
    fields: &[
        FieldDef::text("yourName", "Your Name").required(),
        FieldDef::text("recipient", "Recipient/Organisation").required(),
        FieldDef::text("subject", "Subject needing clarification").required(),
        FieldDef::textarea("points", "Specific points/questions (bulleted or lines)").required(),
        FieldDef::date("deadline", "Preferred reply date"),
        FieldDef::select("tone", "Tone", TONES).with_default("neutral"),
    ],
    system: "You write structured clarification requests.",
    prompt: PromptDef {
        instruction: "Draft a clarification request.",
        facts: &[
            "From: {yourName}",
            "To: {recipient}",
            "Subject: {subject}",
            "Points/questions: {points}",
            "Preferred reply date: {deadline|(not specified)}",
            "Tone: {tone|neutral}",
        ],
        constraints: &[
            "Bullet the questions; be easy to answer.",
            "140–220 words.",
        ],
    },
};
