//! Goal advisory: alignment scoring and monthly savings suggestions

mod alignment;
mod suggestions;

pub use alignment::{calculate_alignment, AlignmentCategory, AlignmentResult};
pub use suggestions::{
    generate_suggestions, monthly_impact, Suggestion, DEFAULT_SUGGESTION_MONTHS, NO_GOALS_MESSAGE,
};
