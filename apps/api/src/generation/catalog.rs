//! Pillar catalogs: read-only lookup tables that map each selectable element
//! key to the canned instruction block injected into the prompt.
//!
//! Adding an element or a pillar is a data change here; the builder only ever
//! does a keyed lookup with a fallback.

use serde::{Deserialize, Serialize};

/// One of the six content-element categories of the writing framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Evidence,
    Practical,
    Analytical,
    Speculative,
    Contextual,
    Engagement,
}

impl Pillar {
    pub const ALL: [Pillar; 6] = [
        Pillar::Evidence,
        Pillar::Practical,
        Pillar::Analytical,
        Pillar::Speculative,
        Pillar::Contextual,
        Pillar::Engagement,
    ];

    /// Lowercase id, as used in request bodies and the "No … selected" line.
    pub fn name(self) -> &'static str {
        match self {
            Pillar::Evidence => "evidence",
            Pillar::Practical => "practical",
            Pillar::Analytical => "analytical",
            Pillar::Speculative => "speculative",
            Pillar::Contextual => "contextual",
            Pillar::Engagement => "engagement",
        }
    }

    pub fn catalog(self) -> &'static ElementCatalog {
        match self {
            Pillar::Evidence => &EVIDENCE,
            Pillar::Practical => &PRACTICAL,
            Pillar::Analytical => &ANALYTICAL,
            Pillar::Speculative => &SPECULATIVE,
            Pillar::Contextual => &CONTEXTUAL,
            Pillar::Engagement => &ENGAGEMENT,
        }
    }
}

/// Key → instruction block table for a single pillar.
#[derive(Debug)]
pub struct ElementCatalog {
    pub pillar: Pillar,
    /// Noun used in the generic line for keys with no canned block.
    pub fallback_noun: &'static str,
    elements: &'static [(&'static str, &'static str)],
}

impl ElementCatalog {
    pub fn describe(&self, key: &str) -> Option<&'static str> {
        self.elements
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, block)| *block)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.elements.iter().map(|(k, _)| *k)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Evidence
// ────────────────────────────────────────────────────────────────────────────

pub static EVIDENCE: ElementCatalog = ElementCatalog {
    pillar: Pillar::Evidence,
    fallback_noun: "evidence and research",
    elements: &[
        (
            "stats",
            r#"**[Current Statistics & Benchmarks SELECTED]**
- **What to Include:** Relevant data points, performance metrics, benchmarks, quantitative measurements
- **Content Requirements:**
  - Include specific numbers with context (e.g., "reduced latency by 34%", "improved throughput to 10,000 requests/second")
  - Source recent industry reports, performance studies, or your own measurements
  - Compare before/after metrics when discussing improvements
- **Example:** "Our migration reduced latency by 34% and improved throughput to 10,000 requests/second, based on 3 months of production data""#,
        ),
        (
            "research",
            r#"**[Recent Research & Studies SELECTED]**
- **What to Include:** Academic papers, industry research, recent findings from reputable sources
- **Content Requirements:**
  - Reference specific studies with publication dates and authors
  - Link to original research papers or authoritative sources
  - Explain research methodology and sample sizes when relevant
- **Example:** "According to a 2024 Stack Overflow Developer Survey of 90,000 developers, 67% reported that microservices increased system complexity""#,
        ),
        (
            "examples",
            r#"**[Real-world Examples SELECTED]**
- **What to Include:** Specific, concrete instances that transform abstract concepts into relatable scenarios
- **Content Requirements:**
  - Move beyond generic examples to specific, detailed cases
  - Include actual company names, technologies, or situations when possible
  - Show the transformation: abstract concept → concrete example
- **Example:** Instead of "Use proper error handling" → "When our payment processor timeout increased from 5s to 30s, we saw a 23% drop in successful transactions""#,
        ),
        (
            "expert-quotes",
            r#"**[Expert Opinions & Quotes SELECTED]**
- **What to Include:** Statements from industry authorities, respected practitioners, or domain experts
- **Content Requirements:**
  - Quote recognized experts in your field (CTOs, principal engineers, authors, speakers)
  - Include their credentials and why their opinion matters
  - Use direct quotes with proper attribution
- **Example:** "As Martin Fowler notes in his microservices article: 'The microservice approach to division is different, splitting up into services organized around business capability'""#,
        ),
        (
            "case-studies",
            r#"**[Industry Case Studies SELECTED]**
- **What to Include:** Real implementation experiences from companies, including failures and lessons learned
- **Content Requirements:**
  - Detail the complete journey: problem → approach → obstacles → solution → results
  - Include both successes and failures for credibility
  - Mention specific companies, technologies, and outcomes when possible
- **Example:** "Netflix's migration from monolith to microservices took 7 years, involved 500+ services, and required building an entirely new infrastructure stack including Eureka, Hystrix, and Ribbon""#,
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Practical
// ────────────────────────────────────────────────────────────────────────────

pub static PRACTICAL: ElementCatalog = ElementCatalog {
    pillar: Pillar::Practical,
    fallback_noun: "practical",
    elements: &[
        (
            "step-by-step",
            r#"**[Step-by-step Instructions SELECTED]**
- **What to Include:** Sequential, executable instructions that readers can follow
- **Content Requirements:**
  - Break complex procedures into numbered, digestible steps
  - Include prerequisites, expected outcomes, and troubleshooting steps
  - Provide commands, configurations, or specific actions
- **Example:** "1. Install Docker (requires v20.10+), 2. Create Dockerfile with multi-stage build, 3. Configure docker-compose.yml with health checks, 4. Run `docker-compose up --build` and verify endpoints""#,
        ),
        (
            "frameworks",
            r#"**[Frameworks & Mental Models SELECTED]**
- **What to Include:** Structured approaches readers can apply to similar problems
- **Content Requirements:**
  - Create memorable, reusable thinking frameworks
  - Provide clear criteria for when to use each approach
  - Make frameworks transferable across different contexts
- **Example:** "The 3-Layer Debugging Framework: Layer 1 - Symptoms (what's broken?), Layer 2 - Systems (which component?), Layer 3 - Sources (root cause in code/config)""#,
        ),
        (
            "code-examples",
            r#"**[Code Examples & Snippets SELECTED]**
- **What to Include:** Working code that demonstrates concepts in action
- **Content Requirements:**
  - Provide complete, runnable examples, not pseudo-code
  - Include error handling and edge cases
  - Comment complex sections and explain why, not just what
- **Example:** Complete function implementations with input/output examples, configuration files, or API integration code"#,
        ),
        (
            "checklists",
            r#"**[Actionable Checklists SELECTED]**
- **What to Include:** Concrete items readers can immediately implement or verify
- **Content Requirements:**
  - Create specific, measurable checklist items
  - Include verification criteria (how to know if it's done correctly)
  - Organize by priority or implementation order
- **Example:** "Pre-deployment checklist: ✓ All tests pass (>95% coverage), ✓ Performance benchmarks within 10% of baseline, ✓ Security scan shows 0 high/critical issues""#,
        ),
        (
            "tools",
            r#"**[Tools & Resources SELECTED]**
- **What to Include:** Specific tools, libraries, documentation, or further reading materials
- **Content Requirements:**
  - Provide direct links with brief descriptions
  - Include version numbers and compatibility information
  - Explain when and why to use each tool
- **Example:** "Essential tools: Prometheus (metrics collection), Grafana (visualization), kubectl (Kubernetes management), Helm (package management)""#,
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Analytical
// ────────────────────────────────────────────────────────────────────────────

pub static ANALYTICAL: ElementCatalog = ElementCatalog {
    pillar: Pillar::Analytical,
    fallback_noun: "analytical",
    elements: &[
        (
            "comparisons",
            r#"**[Technology/Approach Comparisons SELECTED]**
- **What to Include:** Side-by-side analysis of different solutions, technologies, or methodologies
- **Content Requirements:**
  - Create comparison matrices with specific criteria
  - Include performance, complexity, cost, and maintenance factors
  - Recommend when to use each approach
- **Example:** "GraphQL vs REST API comparison: GraphQL excels in mobile apps (reduces over-fetching by 40%), REST better for caching and CDN optimization (3x faster cache hits)""#,
        ),
        (
            "trade-offs",
            r#"**[Trade-off Analysis SELECTED]**
- **What to Include:** Honest examination of advantages against disadvantages
- **Content Requirements:**
  - Quantify trade-offs with specific metrics when possible
  - Include development time, maintenance costs, team learning curves
  - Address short-term vs long-term implications
- **Example:** "Microservices trade-offs: +40% development velocity after 6 months, but +200% infrastructure complexity and $50k additional monthly hosting costs""#,
        ),
        (
            "root-causes",
            r#"**[Root Cause Analysis SELECTED]**
- **What to Include:** Deep exploration of underlying factors, not just surface symptoms
- **Content Requirements:**
  - Use systematic approaches (5 Whys, Fishbone diagrams, etc.)
  - Distinguish between proximate and ultimate causes
  - Address systemic issues, not just technical ones
- **Example:** "Why microservices fail: Not due to technology complexity (symptom), but because teams lack DevOps maturity and service ownership clarity (root causes)""#,
        ),
        (
            "limitations",
            r#"**[Limitations & Constraints SELECTED]**
- **What to Include:** Honest discussion of boundaries, edge cases, and when solutions don't apply
- **Content Requirements:**
  - Define specific scenarios where your approach fails
  - Include technical, organizational, and resource constraints
  - Prevent misapplication by being explicit about boundaries
- **Example:** "This caching strategy works for read-heavy workloads (<10% writes), teams with strong Redis expertise, and budgets allowing 2x memory overhead""#,
        ),
        (
            "counterarguments",
            r#"**[Counterarguments & Alternative Views SELECTED]**
- **What to Include:** Address opposing viewpoints or alternative approaches respectfully
- **Content Requirements:**
  - Present strongest version of opposing arguments
  - Explain why you disagree with evidence, not dismissal
  - Acknowledge when alternatives might be better
- **Example:** "Some argue event sourcing is overengineering. They're right for simple CRUD applications, but wrong for audit-heavy systems where regulatory compliance requires complete change history""#,
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Speculative
// ────────────────────────────────────────────────────────────────────────────

pub static SPECULATIVE: ElementCatalog = ElementCatalog {
    pillar: Pillar::Speculative,
    fallback_noun: "speculative",
    elements: &[
        (
            "trends",
            r#"**[Future Trends & Predictions SELECTED]**
- **What to Include:** Thoughtful analysis of how current developments might evolve
- **Content Requirements:**
  - Base predictions on current evidence and logical extrapolation
  - Include timeline estimates and confidence levels
  - Connect trends to practical implications for readers
- **Example:** "WebAssembly will likely reshape frontend architecture within 3 years, enabling C++/Rust in browsers and reducing JavaScript bundle sizes by 60-80%""#,
        ),
        (
            "scenarios",
            r#"**[Best/Worst Case Scenarios SELECTED]**
- **What to Include:** Explore potential outcomes to test ideas and prepare for contingencies
- **Content Requirements:**
  - Define specific, measurable scenarios
  - Include probability estimates and early warning signs
  - Provide actionable responses for each scenario
- **Example:** "Best case: AI code generation increases developer productivity 3x. Worst case: It creates massive technical debt as junior developers can't debug generated code""#,
        ),
        (
            "thought-experiments",
            r#"**[Thought Experiments SELECTED]**
- **What to Include:** Hypothetical situations that illuminate complex concepts or challenge assumptions
- **Content Requirements:**
  - Create compelling "what if" scenarios that feel realistic
  - Use thought experiments to explore principles, not just possibilities
  - Connect back to practical insights for current work
- **Example:** "What if we designed databases like version control systems? Every record would have commit history, branches for concurrent edits, and merge conflicts for data consistency""#,
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Contextual
// ────────────────────────────────────────────────────────────────────────────

pub static CONTEXTUAL: ElementCatalog = ElementCatalog {
    pillar: Pillar::Contextual,
    fallback_noun: "contextual",
    elements: &[
        (
            "history",
            r#"**[Historical Context & Evolution SELECTED]**
- **What to Include:** How technologies, practices, or problems have evolved over time
- **Content Requirements:**
  - Trace the progression of ideas and solutions
  - Explain why changes happened and what drove adoption
  - Connect historical lessons to current decisions
- **Example:** "We moved from monoliths (1990s) to SOA (2000s) to microservices (2010s) to serverless (2020s), each solving the previous approach's scaling limitations while introducing new complexity""#,
        ),
        (
            "industry",
            r#"**[Industry Context & Trends SELECTED]**
- **What to Include:** Position your topic within broader business or technical ecosystems
- **Content Requirements:**
  - Show how your topic relates to current industry challenges
  - Include market forces, competitive pressures, and business drivers
  - Connect technical decisions to business outcomes
- **Example:** "The shift to event-driven architecture isn't just technical—it's driven by business needs for real-time personalization, which increases conversion rates by 20-30%""#,
        ),
        (
            "culture",
            r#"**[Cultural & Organizational Perspectives SELECTED]**
- **What to Include:** How different teams, companies, or regions approach similar problems
- **Content Requirements:**
  - Acknowledge that solutions vary based on organizational context
  - Include startup vs enterprise, geographic, and team culture factors
  - Avoid one-size-fits-all recommendations
- **Example:** "Silicon Valley startups favor 'move fast and break things', while financial institutions prioritize 'secure and compliant first'—both approaches are correct for their contexts""#,
        ),
        (
            "ethics",
            r#"**[Ethical Considerations SELECTED]**
- **What to Include:** Potential moral implications, especially for AI, data privacy, or user impact
- **Content Requirements:**
  - Address potential negative consequences of technical decisions
  - Consider impact on users, society, and marginalized groups
  - Suggest ethical frameworks for decision-making
- **Example:** "A/B testing can optimize conversion rates, but also manipulate user behavior. Consider implementing ethical guidelines: transparent disclosure, user control, and avoiding exploitation of cognitive biases""#,
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Engagement
// ────────────────────────────────────────────────────────────────────────────

pub static ENGAGEMENT: ElementCatalog = ElementCatalog {
    pillar: Pillar::Engagement,
    fallback_noun: "engagement",
    elements: &[
        (
            "metaphors",
            r#"**[Metaphors & Analogies SELECTED]**
- **What to Include:** Connect complex technical concepts to familiar experiences
- **Content Requirements:**
  - Choose metaphors that accurately represent the technical concept
  - Use experiences common to your target audience
  - Extend metaphors consistently throughout explanations
- **Example:** "Database indexing works like a library card catalog—instead of searching every book (table scan), you look up the topic in the catalog (index) to find the exact shelf location (row pointer)""#,
        ),
        (
            "questions",
            r#"**[Thought-provoking Questions SELECTED]**
- **What to Include:** Questions that prompt reflection and deeper consideration
- **Content Requirements:**
  - Ask questions that don't have obvious answers
  - Connect to readers' real-world challenges and decisions
  - Use questions to transition between sections or introduce new concepts
- **Example:** "Before optimizing for scale, ask yourself: What does 'success' actually look like? Is it handling 10x traffic, or serving users 10x better?""#,
        ),
        (
            "stories",
            r#"**[Personal Stories & Anecdotes SELECTED]**
- **What to Include:** Brief, relevant experiences that illustrate points or create connection
- **Content Requirements:**
  - Keep stories concise and directly relevant to the technical point
  - Include lessons learned or insights gained
  - Balance vulnerability with professionalism
- **Example:** "I once spent 3 days debugging a 'network issue' that turned out to be a single-character typo in a configuration file. That's when I learned the value of infrastructure as code—no more manual config changes""#,
        ),
        (
            "benefits",
            r#"**[Benefits-forward Language SELECTED]**
- **What to Include:** Lead with outcomes and value, not just technical features
- **Content Requirements:**
  - Start sections with the value proposition
  - Focus on what readers will gain, not just how things work
  - Use active voice and outcome-focused language
- **Example:** Instead of "Implement blue-green deployments" → "Eliminate deployment anxiety and enable fearless releases with blue-green deployments""#,
        ),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Audience and tone
// ────────────────────────────────────────────────────────────────────────────

const AUDIENCE_NAMES: &[(&str, &str)] = &[
    ("junior-developers", "Junior Developers"),
    ("senior-engineers", "Senior Engineers"),
    ("engineering-managers", "Engineering Managers"),
    ("technical-leads", "Technical Leads"),
    ("architects", "Solution Architects"),
    ("mixed-technical", "Mixed Technical Audience"),
];

/// Display name and guidance for a known tone tag.
#[derive(Debug)]
pub struct ToneProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub guidance: &'static str,
}

const TONES: &[ToneProfile] = &[
    ToneProfile {
        key: "professional",
        name: "Professional & Authoritative",
        guidance: "Use precise technical language, cite authoritative sources, maintain formal structure. Focus on expertise and credibility.",
    },
    ToneProfile {
        key: "conversational",
        name: "Conversational & Approachable",
        guidance: r#"Write as if explaining to a colleague, use "you" and "we", include casual observations. Make complex topics accessible."#,
    },
    ToneProfile {
        key: "provocative",
        name: "Provocative & Thought-provoking",
        guidance: "Challenge conventional wisdom, ask hard questions, present controversial viewpoints respectfully. Stimulate debate and reflection.",
    },
    ToneProfile {
        key: "educational",
        name: "Educational & Explanatory",
        guidance: "Structure as a teaching experience, build concepts progressively, check for understanding. Focus on learning outcomes.",
    },
];

const GENERIC_TONE_GUIDANCE: &str = "Use appropriate tone and style for the target audience.";

/// Display name for an audience tag; unknown values pass through verbatim.
pub fn audience_display_name(audience: &str) -> &str {
    AUDIENCE_NAMES
        .iter()
        .find(|(k, _)| *k == audience)
        .map(|(_, name)| *name)
        .unwrap_or(audience)
}

pub fn tone_profile(tone: &str) -> Option<&'static ToneProfile> {
    TONES.iter().find(|t| t.key == tone)
}

/// Display name for a tone tag; unknown values pass through verbatim.
pub fn tone_display_name(tone: &str) -> &str {
    tone_profile(tone).map(|t| t.name).unwrap_or(tone)
}

/// The bolded tone line injected under the engagement pillar.
pub fn tone_description(tone: &str) -> String {
    match tone_profile(tone) {
        Some(profile) => format!("**{}:** {}", profile.name, profile.guidance),
        None => format!("**{tone}:** {GENERIC_TONE_GUIDANCE}"),
    }
}
