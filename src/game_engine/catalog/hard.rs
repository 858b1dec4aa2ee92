//! Hard tier — 10 points per correct answer.

use super::{answer, problem};
use crate::game_engine::models::{Difficulty, Problem};

pub(super) fn cards() -> Vec<Problem> {
    vec![
        problem(
            "Disruption: AI-Powered Competitive Entry",
            "A well-funded startup with AI-driven supply chain optimization just entered your market. They're underpricing you 20% and growing fast. Your current cost structure can't match them. What's your multi-year strategy?",
            Difficulty::Hard,
            "strategy",
            "Determines long-term competitiveness and market survival",
            vec![
                answer(
                    "A) Invest in own AI/automation, differentiate on service, build moats (loyalty programs)",
                    true,
                    "This is how incumbents survive disruption. Match tech, compete on non-price dimensions, build switching costs.",
                    10,
                ),
                answer(
                    "B) Cut prices 25% to match them",
                    false,
                    "Margin death spiral. You can't beat them on cost alone.",
                    0,
                ),
                answer(
                    "C) Acquire the startup",
                    false,
                    "Could work but integration is hard. Maybe premature.",
                    4,
                ),
                answer(
                    "D) Exit the market segment",
                    false,
                    "Conceding without fighting? That's a business school case study of failure.",
                    0,
                ),
            ],
        ),
        problem(
            "Geographic Expansion Risk",
            "You want to expand to 3 new countries. Market size potential is huge but regulatory risk, logistics complexity, and local competition vary widely. How do you prioritize and sequence the expansion?",
            Difficulty::Hard,
            "merchant_strategy",
            "Determines expansion success rate and capital efficiency",
            vec![
                answer(
                    "A) Score each by (market size × regulatory ease × competitive intensity), sequence by score",
                    true,
                    "Rigorous framework beats gut feel. Risk-adjusted market opportunity analysis.",
                    10,
                ),
                answer(
                    "B) Go to the biggest market first",
                    false,
                    "Size alone doesn't matter if regulatory/competitive barriers are brutal.",
                    2,
                ),
                answer(
                    "C) Start where competitors haven't gone yet",
                    false,
                    "Maybe those markets are small for a reason.",
                    3,
                ),
                answer(
                    "D) Simultaneous expansion to all 3",
                    false,
                    "Spreads your team and capital too thin. Sequential > simultaneous.",
                    0,
                ),
            ],
        ),
        problem(
            "Recession Playbook",
            "Recession is coming (economists are signaling -2% GDP). Your business is counter-cyclical but margins are tight. How do you prepare operationally and strategically over the next 6-12 months?",
            Difficulty::Hard,
            "supply_chain",
            "Determines survival and relative market share gains in downturns",
            vec![
                answer(
                    "A) Reduce fixed costs, build cash reserves, prepare to acquire distressed competitors",
                    true,
                    "Recession playbook 101: De-lever, preserve cash, be ready to pounce on opportunities.",
                    10,
                ),
                answer(
                    "B) Invest heavily to gain market share now",
                    false,
                    "Wrong timing. You need dry powder for recession, not spending now.",
                    0,
                ),
                answer(
                    "C) Maintain status quo and hope it passes quickly",
                    false,
                    "Passive = death in recessions. Competitors will out-maneuver you.",
                    1,
                ),
                answer(
                    "D) Cut marketing and innovation spending drastically",
                    false,
                    "Some cutting yes, but too much and you exit recession weakened.",
                    3,
                ),
            ],
        ),
        problem(
            "Supply Chain Resilience Paradox",
            "Having multiple suppliers = resilience but increases complexity and cost. Having one supplier = efficiency but fragile. You're a $5B company. How do you structure your supply base?",
            Difficulty::Hard,
            "supply_chain",
            "Balances efficiency gains against catastrophic risk mitigation",
            vec![
                answer(
                    "A) 70-30 split: primary supplier (economies of scale) + strategic backup (for critical items)",
                    true,
                    "Best of both worlds. Primary supplier keeps costs down, backup for critical risk mitigation.",
                    10,
                ),
                answer(
                    "B) Strict 50-50 to ensure zero single point of failure",
                    false,
                    "Loses economics of scale. Costs stay high.",
                    4,
                ),
                answer(
                    "C) One supplier for cost optimization",
                    false,
                    "One disruption (like COVID) destroys your business.",
                    0,
                ),
                answer(
                    "D) 5-6 suppliers to maximize optionality",
                    false,
                    "Unmanageable complexity and quality dilution.",
                    0,
                ),
            ],
        ),
    ]
}
