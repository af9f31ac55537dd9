//! Text → [`Request`] or a ready-to-run [`Sim`].

use rr_agent::AgentSpec;
use rr_core::{Coordinate, Heading, Instruction, MoveSymbol, RunConfig};
use rr_sim::Sim;
use rr_surface::Surface;

use crate::{Request, RequestError, RequestResult};

/// Decode a whole request.
///
/// Structural checks (line count, field count) run before anything else and
/// report the raw input.  Symbol and number errors name the offending
/// value.  Bounds and placement are not checked here.
pub fn decode(text: &str, move_symbol: MoveSymbol) -> RequestResult<Request> {
    let lines = request_lines(text)?;
    let top_right = parse_top_right(lines[0], text)?;
    let agents = lines[1..]
        .chunks_exact(2)
        .map(|pair| parse_agent(pair, move_symbol, text))
        .collect::<RequestResult<Vec<_>>>()?;

    Ok(Request { top_right, agents })
}

/// Decode `text` straight onto a surface and wrap it in a [`Sim`].
///
/// Errors surface in input order: the surface is built as soon as the first
/// line is read, and each agent is placed before the next one is parsed.
/// An invalid surface therefore wins over a bad symbol further down, and an
/// earlier agent's placement error wins over a later agent's parse error.
pub fn load(text: &str, config: &RunConfig) -> RequestResult<Sim> {
    let lines = request_lines(text)?;
    let mut surface = Surface::new(parse_top_right(lines[0], text)?)?;
    for pair in lines[1..].chunks_exact(2) {
        surface.place_agent(parse_agent(pair, config.move_symbol, text)?)?;
    }
    Ok(Sim::from_surface(surface, config.policy))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Trimmed lines: the surface line plus whole agent pairs.
fn request_lines(text: &str) -> RequestResult<Vec<&str>> {
    let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
    if lines.len() < 3 || (lines.len() - 1) % 2 != 0 {
        return Err(RequestError::Malformed(text.to_owned()));
    }
    Ok(lines)
}

fn parse_top_right(line: &str, text: &str) -> RequestResult<Coordinate> {
    let [x, y] = fields::<2>(line).ok_or_else(|| RequestError::Malformed(text.to_owned()))?;
    Ok(Coordinate::new(parse_int(x)?, parse_int(y)?))
}

/// `pair` is `[pose line, program line]`.
fn parse_agent(pair: &[&str], move_symbol: MoveSymbol, text: &str) -> RequestResult<AgentSpec> {
    let [x, y, h] = fields::<3>(pair[0]).ok_or_else(|| RequestError::Malformed(text.to_owned()))?;
    let position = Coordinate::new(parse_int(x)?, parse_int(y)?);
    let heading = h.parse::<Heading>()?;
    let instructions = Instruction::parse_program(pair[1], move_symbol)?;
    Ok(AgentSpec::new(position, heading, instructions))
}

/// Split `line` on whitespace into exactly `N` fields.
fn fields<const N: usize>(line: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    parts.try_into().ok()
}

fn parse_int(s: &str) -> RequestResult<i64> {
    s.parse::<i64>().map_err(|_| RequestError::InvalidNumber(s.to_owned()))
}
