//! Intermediate tier — 6 points per correct answer.

use super::{answer, problem};
use crate::game_engine::models::{Difficulty, Problem};

pub(super) fn cards() -> Vec<Problem> {
    vec![
        problem(
            "Sourcing Complexity",
            "You can source from a cheap overseas supplier (15% cheaper) but shipping takes 6 weeks vs 2 weeks domestic. Your sales are unpredictable. Choose wisely.",
            Difficulty::Intermediate,
            "supply_chain",
            "Balances cost savings against demand responsiveness",
            vec![
                answer(
                    "A) Use blend: 60% domestic, 40% overseas based on demand forecasts",
                    true,
                    "Perfect balance! Cheap supply for predictable items, fast supply for volatile items.",
                    6,
                ),
                answer(
                    "B) Go 100% overseas (pure cost optimization)",
                    false,
                    "Risky. You'll stockout on trends and lose sales.",
                    0,
                ),
                answer(
                    "C) Stay 100% domestic for safety",
                    false,
                    "You're leaving 15% margin on the table long-term.",
                    2,
                ),
                answer(
                    "D) Switch suppliers based on gut feeling",
                    false,
                    "That's how companies go broke. Use data!",
                    0,
                ),
            ],
        ),
        problem(
            "Private Label Strategy",
            "You want to develop a private label competitor to a bestselling brand. High margin but high risk. How do you validate the market first?",
            Difficulty::Intermediate,
            "merchant_strategy",
            "De-risks product development and maximizes ROI on new products",
            vec![
                answer(
                    "A) Run small test in 5 stores, gather data before full launch",
                    true,
                    "Smart MVP approach! Test, learn, scale.",
                    6,
                ),
                answer(
                    "B) Launch nationally to capture market share fast",
                    false,
                    "Huge risk. Could waste millions if it flops.",
                    0,
                ),
                answer(
                    "C) Survey customers about what they'd pay",
                    false,
                    "Customer surveys are notoriously inaccurate. Actual behavior matters.",
                    1,
                ),
                answer(
                    "D) Copy the brand exactly but cheaper",
                    false,
                    "That's infringement. Plus quality matters, not just price.",
                    0,
                ),
            ],
        ),
        problem(
            "Last-Mile Delivery Crisis",
            "Your delivery costs jumped 40% due to fuel prices and labor shortage. Customer expectations are high. You have 3 options. Pick the best combo.",
            Difficulty::Intermediate,
            "supply_chain",
            "Optimizes logistics costs while maintaining service quality",
            vec![
                answer(
                    "A) Negotiate with carriers, optimize routes, offer slower shipping discount",
                    true,
                    "Multi-faceted approach. Address cost, efficiency, AND customer choice.",
                    6,
                ),
                answer(
                    "B) Just raise prices 40%",
                    false,
                    "Customers flee to competitors.",
                    0,
                ),
                answer(
                    "C) Cut delivery frequency and speed",
                    false,
                    "Customers hate slow delivery. They'll switch.",
                    1,
                ),
                answer(
                    "D) Build your own delivery fleet",
                    false,
                    "Huge capital cost and complexity. Not the short-term fix needed.",
                    0,
                ),
            ],
        ),
        problem(
            "Category Performance Divergence",
            "Food category is booming (+25% YoY) but Electronics is flat (+1% YoY). You have limited marketing budget. How do you allocate?",
            Difficulty::Intermediate,
            "merchant_strategy",
            "Maximizes marketing ROI and portfolio growth",
            vec![
                answer(
                    "A) 70% to Food to capture growth, 30% to Electronics to stabilize",
                    true,
                    "Smart capital allocation. Ride the winners, defend the rest.",
                    6,
                ),
                answer(
                    "B) Split 50-50 to be fair",
                    false,
                    "That's not how portfolio management works. Back winners!",
                    2,
                ),
                answer(
                    "C) Put everything in Electronics to turn it around",
                    false,
                    "Starving a growing category is silly.",
                    0,
                ),
                answer(
                    "D) Cut both categories and invest in new categories",
                    false,
                    "You're leaving money on the table where customers are.",
                    0,
                ),
            ],
        ),
    ]
}
