//! Easy tier — 3 points per correct answer.

use super::{answer, problem};
use crate::game_engine::models::{Difficulty, Problem};

pub(super) fn cards() -> Vec<Problem> {
    vec![
        problem(
            "Inventory Overstock Alert",
            "Your warehouse is overstocked with winter inventory, but it's now spring. What do you do?",
            Difficulty::Easy,
            "supply_chain",
            "Prevents dead stock and frees up warehouse space",
            vec![
                answer(
                    "A) Reduce orders and run a clearance sale",
                    true,
                    "Smart move! Clearing overstock prevents losses and frees capital.",
                    3,
                ),
                answer(
                    "B) Keep inventory and hope it sells next season",
                    false,
                    "Risky! Storage costs add up and items may become obsolete.",
                    0,
                ),
                answer(
                    "C) Send all inventory to discount stores",
                    false,
                    "Too aggressive and damages brand value.",
                    0,
                ),
                answer(
                    "D) Donate it all for tax write-off",
                    false,
                    "Not efficient. Selling at a discount gets revenue.",
                    0,
                ),
            ],
        ),
        problem(
            "Supplier Shortage",
            "Your main supplier just had a fire and can't deliver next month's order. What's your move?",
            Difficulty::Easy,
            "supply_chain",
            "Ensures business continuity and prevents stockouts",
            vec![
                answer(
                    "A) Immediately contact backup suppliers",
                    true,
                    "Correct! Always have backup suppliers for emergencies.",
                    3,
                ),
                answer(
                    "B) Hope they get back online quickly",
                    false,
                    "Too passive. You need a plan NOW.",
                    0,
                ),
                answer(
                    "C) Tell customers you're out of stock",
                    false,
                    "Loses customers to competitors.",
                    0,
                ),
                answer(
                    "D) Raise prices to reduce demand",
                    false,
                    "Damages customer relationships unnecessarily.",
                    0,
                ),
            ],
        ),
        problem(
            "Slow-Moving SKU",
            "A product is barely selling despite good shelf placement. What action do you take?",
            Difficulty::Easy,
            "merchant_strategy",
            "Improves inventory turnover and cash flow",
            vec![
                answer(
                    "A) Analyze customer feedback and adjust pricing/marketing",
                    true,
                    "Smart! Data-driven decisions beat guessing.",
                    3,
                ),
                answer(
                    "B) Just keep it on shelves longer",
                    false,
                    "Wastes shelf space that could sell better items.",
                    0,
                ),
                answer(
                    "C) Remove it immediately",
                    false,
                    "Too hasty. Might just need better marketing.",
                    0,
                ),
                answer(
                    "D) Double the price",
                    false,
                    "That'll make it even slower! Bad move.",
                    0,
                ),
            ],
        ),
        problem(
            "Demand Surge",
            "A viral TikTok just made your product blow up! Demand is 3x normal. What happens next?",
            Difficulty::Easy,
            "merchant_strategy",
            "Capitalizes on trending products and maximizes revenue",
            vec![
                answer(
                    "A) Quickly scale production and marketing",
                    true,
                    "Capitalize on the trend before it fades!",
                    3,
                ),
                answer(
                    "B) Do nothing and let it naturally cool off",
                    false,
                    "Missed opportunity for huge revenue!",
                    0,
                ),
                answer(
                    "C) Raise prices 50% to reduce demand",
                    false,
                    "Could work but might kill momentum and goodwill.",
                    0,
                ),
                answer(
                    "D) Only service existing customers",
                    false,
                    "Leaves money on the table.",
                    0,
                ),
            ],
        ),
    ]
}
