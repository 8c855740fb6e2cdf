//! Keyword-driven replies for the water quality advisor.
//!
//! Questions are matched against a fixed list of topics, first match wins.
//! Matching is a case-insensitive substring test, so `ec` also fires inside
//! words such as "recommend" or "check".

/// Opening message shown before the user asks anything.
pub const GREETING: &str =
    "👋 Hello! I'm your Water Quality Advisor. How can I help you today?";

/// Canned quick questions offered to the user.
pub const SUGGESTIONS: [&str; 8] = [
    "What's the best irrigation schedule for my cotton fields?",
    "How can I improve water quality for my crops?",
    "What does the high EC level mean for my farm?",
    "Should I adjust fertilizer based on water quality?",
    "How to interpret my latest water analysis report?",
    "What crops are best suited for my current water conditions?",
    "Do I need water treatment for my irrigation system?",
    "How can I reduce water usage while maintaining crop yields?",
];

/// Topic a question was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Cotton,
    Salinity,
    Fertilizer,
    WaterImprovement,
    /// Nothing more specific matched.
    General,
}

impl Topic {
    /// Topics in match order. `General` is the fallback and never matched directly.
    const MATCH_ORDER: [Topic; 4] = [
        Self::Cotton,
        Self::Salinity,
        Self::Fertilizer,
        Self::WaterImprovement,
    ];

    fn matches(self, question: &str) -> bool {
        match self {
            Topic::Cotton => question.contains("cotton"),
            Topic::Salinity => {
                question.contains("ec") || question.contains("electrical conductivity")
            }
            Topic::Fertilizer => question.contains("fertilizer") || question.contains("nutrient"),
            Topic::WaterImprovement => {
                question.contains("improve") || question.contains("better")
            }
            Topic::General => false,
        }
    }

    /// The canned reply for this topic.
    pub fn reply(self) -> &'static str {
        match self {
            Topic::Cotton => {
                "Based on your current water quality parameters (EC: 1.1 dS/m, pH: 7.0), cotton is \
                 actually a good match. It's moderately salt-tolerant. I recommend maintaining \
                 irrigation at 70-80% field capacity during the growing season, with leaching \
                 irrigation every 3-4 weeks to prevent salt buildup."
            }
            Topic::Salinity => {
                "Your EC level of 1.1 dS/m indicates moderate salinity. This is suitable for \
                 salt-tolerant crops like cotton and barley, but may reduce yields for sensitive \
                 crops like strawberries or beans. Consider blending with lower-EC water sources \
                 or implementing additional leaching irrigation to manage salinity."
            }
            Topic::Fertilizer => {
                "Given your water's nitrate levels (5.5 mg/l), you should reduce nitrogen \
                 fertilizer application by approximately 12-15%. Your water already provides some \
                 nitrogen to the crops. For phosphorus and potassium, maintain your regular \
                 schedule. I recommend soil testing to fine-tune your fertilization strategy."
            }
            Topic::WaterImprovement => {
                "To improve your water quality, consider implementing sediment filters to reduce \
                 suspended solids, installing a reverse osmosis system for reducing salt content, \
                 and using a proper water aeration system to increase dissolved oxygen. Regular \
                 monitoring and maintenance of your irrigation system will also help maintain \
                 water quality."
            }
            Topic::General => {
                "Thank you for your question. Based on your farm's current water quality data, I \
                 would recommend monitoring your EC levels closely as they are approaching the \
                 upper threshold for some of your crops. Consider implementing a 15% leaching \
                 fraction in your irrigation schedule to prevent salt buildup in the root zone. \
                 Would you like me to provide more specific recommendations for any particular \
                 crop?"
            }
        }
    }
}

/// Routes a question to a topic. Returns `None` for blank input.
pub fn classify_question(question: &str) -> Option<Topic> {
    let question = question.trim();
    if question.is_empty() {
        return None;
    }
    let lower = question.to_lowercase();
    let topic = Topic::MATCH_ORDER
        .into_iter()
        .find(|t| t.matches(&lower))
        .unwrap_or(Topic::General);
    Some(topic)
}

/// The advisor's reply to `question`, or `None` for blank input.
pub fn respond(question: &str) -> Option<&'static str> {
    classify_question(question).map(Topic::reply)
}
