// src/catalog/builtin.rs
// Static community tables compiled into the binary

/// Communities returned when a category is not in the catalog
pub const DEFAULT_COMMUNITIES: [&str; 3] = ["Entrepreneur", "startups", "smallbusiness"];

pub(crate) struct StaticCategory {
    pub name: &'static str,
    /// Tiers 1..=4, best first
    pub tiers: [[&'static str; 3]; 4],
    pub backup: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

// ═══════════════════════════════════════
// BUSINESS TYPES
// ═══════════════════════════════════════

pub(crate) const BUSINESS: &[StaticCategory] = &[
    StaticCategory {
        name: "SaaS Companies",
        tiers: [
            ["SaaS", "startups", "Entrepreneur"],
            ["IndieHackers", "microSaaS", "EntrepreneurRideAlong"],
            ["sideproject", "smallbusiness", "growmybusiness"],
            ["marketing", "productivity", "webdev"],
        ],
        backup: &["IndieDev"],
        keywords: &[
            "saas", "software", "app", "platform", "subscription", "mrr", "arr", "users",
            "customers", "startup", "founder",
        ],
    },
    StaticCategory {
        name: "App Developers",
        tiers: [
            ["SaaS", "startups", "Entrepreneur"],
            ["IndieHackers", "EntrepreneurRideAlong", "sideproject"],
            ["androiddev", "iOSProgramming", "webdev"],
            ["programming", "learnprogramming", "cscareerquestions"],
        ],
        backup: &["IndieDev"],
        keywords: &[
            "app", "developer", "mobile app", "web app", "coding", "programming",
            "software development", "ios", "android", "frontend", "backend", "fullstack",
        ],
    },
    StaticCategory {
        name: "E-commerce Stores",
        tiers: [
            ["ecommerce", "Shopify", "EntrepreneurRideAlong"],
            ["FulfillmentByAmazon", "dropship", "AmazonSeller"],
            ["Etsy", "smallbusiness", "marketing"],
            ["Entrepreneur", "startups", "digital_marketing"],
        ],
        backup: &["juststart"],
        keywords: &[
            "ecommerce", "online store", "shopify", "amazon", "selling", "products",
            "inventory", "sales", "customers",
        ],
    },
    StaticCategory {
        name: "Jobs and Hiring",
        tiers: [
            ["jobs", "jobhunting", "layoffs"],
            ["resumes", "careerguidance", "recruitinghell"],
            ["cscareerquestions", "ITCareerQuestions", "AskHR"],
            ["careeradvice", "WorkOnline", "remotework"],
        ],
        backup: &["jobsearchhacks"],
        keywords: &[
            "job search", "resume help", "interview advice", "job leads", "career change",
            "unemployment", "job application", "hiring process", "job market",
            "career advice", "job openings", "job hunting tips",
        ],
    },
    StaticCategory {
        name: "Marketing Agencies",
        tiers: [
            ["marketing", "digital_marketing", "agency"],
            ["PPC", "SEO", "socialmedia"],
            ["content_marketing", "copywriting", "Emailmarketing"],
            ["smallbusiness", "Entrepreneur", "startups"],
        ],
        backup: &["advertising"],
        keywords: &[
            "agency", "clients", "marketing", "seo", "ads", "campaign", "leads", "retainer",
            "social media", "growth",
        ],
    },
    StaticCategory {
        name: "Freelancers",
        tiers: [
            ["freelance", "Upwork", "freelanceWriters"],
            ["WorkOnline", "digitalnomad", "forhire"],
            ["graphic_design", "web_design", "copywriting"],
            ["Entrepreneur", "sidehustle", "smallbusiness"],
        ],
        backup: &["remotework"],
        keywords: &[
            "freelance", "client", "contract", "rate", "upwork", "fiverr", "portfolio",
            "invoice", "gig", "hire",
        ],
    },
];

// ═══════════════════════════════════════
// INDUSTRY TYPES
// ═══════════════════════════════════════

pub(crate) const INDUSTRY: &[StaticCategory] = &[
    StaticCategory {
        name: "SaaS / Tech",
        tiers: [
            ["SaaS", "startups", "IndieHackers"],
            ["microSaaS", "EntrepreneurRideAlong", "sideproject"],
            ["technology", "webdev", "programming"],
            ["Entrepreneur", "smallbusiness", "productivity"],
        ],
        backup: &["IndieDev"],
        keywords: &[
            "saas", "software", "app", "platform", "subscription", "mrr", "arr", "users",
            "customers", "startup", "founder",
        ],
    },
    StaticCategory {
        name: "E-commerce",
        tiers: [
            ["ecommerce", "Shopify", "EntrepreneurRideAlong"],
            ["FulfillmentByAmazon", "dropship", "Etsy"],
            ["AmazonSeller", "smallbusiness", "marketing"],
            ["Entrepreneur", "startups", "digital_marketing"],
        ],
        backup: &["juststart"],
        keywords: &[
            "ecommerce", "online store", "shopify", "amazon", "selling", "products",
            "inventory", "sales", "customers",
        ],
    },
    StaticCategory {
        name: "Healthcare",
        tiers: [
            ["healthIT", "medicine", "nursing"],
            ["healthcare", "physicianassistant", "Residency"],
            ["publichealth", "MedicalCoding", "pharmacy"],
            ["HealthInsurance", "smallbusiness", "Entrepreneur"],
        ],
        backup: &["AskDocs"],
        keywords: &[
            "patient", "clinic", "ehr", "billing", "practice", "telehealth", "hipaa",
            "scheduling", "provider",
        ],
    },
    StaticCategory {
        name: "Finance",
        tiers: [
            ["fintech", "personalfinance", "FinancialPlanning"],
            ["Accounting", "tax", "smallbusiness"],
            ["investing", "financialindependence", "CFP"],
            ["Entrepreneur", "startups", "Bookkeeping"],
        ],
        backup: &["CreditCards"],
        keywords: &[
            "budget", "accounting", "bookkeeping", "invoice", "payments", "tax", "cash flow",
            "payroll", "banking",
        ],
    },
    StaticCategory {
        name: "Real Estate",
        tiers: [
            ["realestate", "RealEstateInvesting", "CommercialRealEstate"],
            ["realtors", "landlord", "PropertyManagement"],
            ["FirstTimeHomeBuyer", "HomeImprovement", "Mortgages"],
            ["smallbusiness", "Entrepreneur", "personalfinance"],
        ],
        backup: &["HouseFlipping"],
        keywords: &[
            "listing", "tenant", "landlord", "property", "mortgage", "realtor", "rental",
            "closing", "leads",
        ],
    },
    StaticCategory {
        name: "Education",
        tiers: [
            ["edtech", "Teachers", "education"],
            ["OnlineEducation", "instructionaldesign", "elearning"],
            ["GradSchool", "college", "teaching"],
            ["learnprogramming", "Entrepreneur", "smallbusiness"],
        ],
        backup: &["homeschool"],
        keywords: &[
            "students", "course", "tutoring", "lms", "curriculum", "classroom", "teacher",
            "lesson", "online learning",
        ],
    },
];
