//! Fixed enumerations the generator draws free-text attributes from.

pub const REGIONS: &[&str] = &[
    "Mumbai", "Delhi", "Bengaluru", "Hyderabad", "Chennai", "Kolkata", "Pune",
    "Ahmedabad", "Jaipur", "Lucknow", "Kochi", "Chandigarh",
];

pub const HEALTH_CONDITIONS: &[&str] = &[
    "NONE", "DIABETES", "HYPERTENSION", "ASTHMA", "THYROID", "HEART_DISEASE",
];

pub const AGENT_SPECIALIZATIONS: &[&str] = &[
    "HEALTH", "LIFE", "MOTOR", "TRAVEL", "HOME", "RETIREMENT",
];

pub const REVIEW_COMMENTS: &[&str] = &[
    "Very helpful and explained every clause clearly.",
    "Quick response, sorted out my renewal.",
    "Good advice on choosing the right cover.",
    "Patient with all my questions.",
    "Helped me compare plans across insurers.",
];

pub const CLAIM_DESCRIPTIONS: &[&str] = &[
    "Hospitalization expenses",
    "Vehicle accident repair",
    "Lost baggage during travel",
    "Water damage to property",
    "Outpatient surgery",
];

pub const DISPUTE_CASE_TYPES: &[&str] = &[
    "CLAIM_REJECTION_DISPUTE",
    "SETTLEMENT_AMOUNT_DISPUTE",
    "DOCUMENTATION_DISPUTE",
];

pub const FEEDBACK_CATEGORIES: &[&str] = &[
    "SERVICE", "CLAIMS", "POLICY", "AGENT", "PLATFORM",
];

pub const FEEDBACK_MESSAGES: &[&str] = &[
    "The claim process took longer than expected.",
    "Would like more policy options for senior citizens.",
    "The booking page was confusing.",
    "My agent was excellent.",
    "Premium reminder arrived too late.",
];

pub const REMINDER_TYPES: &[&str] = &[
    "PREMIUM_DUE", "POLICY_RENEWAL", "DOCUMENT_UPLOAD", "APPOINTMENT_FOLLOW_UP",
];

pub const EMAIL_DOMAIN: &str = "example.com";
pub const AGENT_EMAIL_DOMAIN: &str = "agents.example.com";

/// Status every freshly opened dispute case starts in.
pub const DISPUTE_OPEN_STATUS: &str = "OPEN";

pub fn reminder_message(reminder_type: &str) -> &'static str {
    match reminder_type {
        "PREMIUM_DUE" => "Your premium payment is due soon.",
        "POLICY_RENEWAL" => "Your policy is up for renewal.",
        "DOCUMENT_UPLOAD" => "Please upload the pending KYC documents.",
        _ => "Follow up on your recent appointment.",
    }
}
