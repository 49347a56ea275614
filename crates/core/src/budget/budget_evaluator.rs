//! Budget Evaluator: percentage of the monthly limit and the tier it falls in.

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::budget_model::{BudgetNotice, BudgetStatus, NotificationTier};
use crate::utils::{format_grouped, round_half_up};

/// Evaluates a monthly budget after adding `incoming` to `spent`.
///
/// Returns `None` when `limit` is zero or negative: budgeting is opt-in. All
/// amounts must already be in the same currency.
///
/// Also returns `None` when the total or the percentage does not fit in a
/// `Decimal`, for example a limit of `1e-28` against any real spend.
pub fn evaluate(limit: Decimal, spent: Decimal, incoming: Decimal) -> Option<BudgetStatus> {
    if limit <= Decimal::ZERO {
        return None;
    }

    let Some(total) = spent.checked_add(incoming) else {
        warn!(
            "Monthly spending {} + {} overflows, skipping budget evaluation",
            spent, incoming
        );
        return None;
    };
    let Some(percentage) = total
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
    else {
        warn!(
            "Budget percentage for {} of limit {} overflows, skipping budget evaluation",
            total, limit
        );
        return None;
    };

    let notifications = NotificationTier::classify(percentage)
        .map(|tier| BudgetNotice {
            notification_type: tier,
            message: render_message(tier, percentage, total, limit),
            percentage,
        })
        .into_iter()
        .collect();

    Some(BudgetStatus {
        budget_limit: limit,
        current_spending: total,
        percentage,
        notifications,
    })
}

fn render_message(
    tier: NotificationTier,
    percentage: Decimal,
    total: Decimal,
    limit: Decimal,
) -> String {
    let usage = format!(
        "Spending is at {:.1}% of the monthly budget ({} / {})",
        round_half_up(percentage, 1),
        format_grouped(total, 0),
        format_grouped(limit, 0)
    );
    match tier {
        NotificationTier::Danger => format!("Budget exceeded! {}", usage),
        NotificationTier::Warning => format!("Budget almost used up! {}", usage),
        NotificationTier::Info => usage,
    }
}
