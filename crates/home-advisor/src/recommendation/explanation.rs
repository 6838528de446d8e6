use super::domain::{Preferences, Property};

/// Maximum number of reasons joined into one explanation.
pub const MAX_REASONS: usize = 3;

pub const FALLBACK_EXPLANATION: &str = "Meets basic requirements";

const REASON_SEPARATOR: &str = ". ";

/// Inputs visible to every explanation rule.
pub struct ExplanationContext<'a> {
    pub property: &'a Property,
    pub prefs: &'a Preferences,
    pub score: u8,
}

/// Guarded reason template. Rules fire in table order.
pub struct ExplanationRule {
    pub key: &'static str,
    applies: fn(&ExplanationContext<'_>) -> bool,
    render: fn(&ExplanationContext<'_>) -> String,
}

impl ExplanationRule {
    pub fn evaluate(&self, ctx: &ExplanationContext<'_>) -> Option<String> {
        if (self.applies)(ctx) {
            Some((self.render)(ctx))
        } else {
            None
        }
    }
}

pub static EXPLANATION_RULES: [ExplanationRule; 9] = [
    ExplanationRule {
        key: "value",
        applies: |ctx| ctx.property.price <= ctx.prefs.budget_max * 0.9,
        render: |ctx| {
            format!(
                "Great value at {}, well within your budget",
                format_currency(ctx.property.price)
            )
        },
    },
    ExplanationRule {
        key: "bedroom_surplus",
        applies: |ctx| ctx.property.bedrooms > ctx.prefs.min_bedrooms,
        render: |ctx| {
            let extra = ctx.property.bedrooms - ctx.prefs.min_bedrooms;
            format!(
                "{} bedrooms gives you {} more than you need",
                ctx.property.bedrooms, extra
            )
        },
    },
    ExplanationRule {
        key: "short_commute",
        applies: |ctx| ctx.property.commute_time_min <= ctx.prefs.max_commute_time * 0.8,
        render: |ctx| {
            format!(
                "Short {:.0}-minute commute",
                ctx.property.commute_time_min
            )
        },
    },
    ExplanationRule {
        key: "school_quality",
        applies: |ctx| ctx.property.school_rating >= 8.0,
        render: |ctx| {
            format!(
                "Highly rated schools ({}/10)",
                ctx.property.school_rating
            )
        },
    },
    ExplanationRule {
        key: "pool_match",
        applies: |ctx| ctx.property.has_pool && ctx.prefs.requires_pool(),
        render: |_| "Includes the pool you asked for".to_string(),
    },
    ExplanationRule {
        key: "modern_construction",
        applies: |ctx| ctx.property.year_built > 2010,
        render: |ctx| format!("Modern construction (built {})", ctx.property.year_built),
    },
    ExplanationRule {
        key: "luxury",
        applies: |ctx| description_mentions(ctx, &["luxury"]),
        render: |_| "Luxury finishes throughout".to_string(),
    },
    ExplanationRule {
        key: "outdoor_space",
        applies: |ctx| description_mentions(ctx, &["garden", "yard"]),
        render: |_| "Private garden or yard space".to_string(),
    },
    ExplanationRule {
        key: "smart_home",
        applies: |ctx| description_mentions(ctx, &["smart home"]),
        render: |_| "Smart home features built in".to_string(),
    },
];

/// Every satisfied reason, in rule order.
pub fn reasons(property: &Property, score: u8, prefs: &Preferences) -> Vec<String> {
    let ctx = ExplanationContext {
        property,
        prefs,
        score,
    };

    EXPLANATION_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(&ctx))
        .collect()
}

/// Joins the first few satisfied reasons, or the fallback when none apply.
pub fn explain(property: &Property, score: u8, prefs: &Preferences) -> String {
    let reasons = reasons(property, score, prefs);
    if reasons.is_empty() {
        return FALLBACK_EXPLANATION.to_string();
    }

    reasons
        .into_iter()
        .take(MAX_REASONS)
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR)
}

fn description_mentions(ctx: &ExplanationContext<'_>, tokens: &[&str]) -> bool {
    let description = ctx.property.description_text().to_lowercase();
    tokens.iter().any(|token| description.contains(token))
}

/// Whole-dollar amount with thousands separators, e.g. `$1,250,000`.
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0.0 && whole > 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
