//! [`Outcome`] / [`Request`] → text.

use rr_core::MoveSymbol;
use rr_sim::Outcome;

use crate::Request;

/// Render a response: optional status line, then `x y H` per agent.
/// Lines are joined with `\n`; there is no trailing newline.
pub fn encode(outcome: &Outcome) -> String {
    let mut lines = Vec::with_capacity(outcome.agents.len() + 1);
    if outcome.policy.reports_status() {
        lines.push(outcome.status.to_string());
    }
    lines.extend(
        outcome
            .agents
            .iter()
            .map(|a| format!("{} {}", a.position, a.heading)),
    );
    lines.join("\n")
}

/// Render a request back to wire text using `move_symbol` for moves.
pub fn encode_request(request: &Request, move_symbol: MoveSymbol) -> String {
    let mut out = request.top_right.to_string();
    for agent in &request.agents {
        let program: String = agent
            .instructions
            .iter()
            .map(|i| i.symbol(move_symbol))
            .collect();
        out.push_str(&format!("\n{} {}\n{}", agent.position, agent.heading, program));
    }
    out
}
