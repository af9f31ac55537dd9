//! `swarm` — a random fleet on a small surface, run under both policies.
//!
//! Generates a surface and `AGENT_COUNT` agents on distinct cells with random
//! programs, prints the request in wire format, then runs it round-robin and
//! sequentially and prints both responses.
//!
//! Run with:
//!   cargo run -p swarm --release [-- SEED]

use std::collections::HashSet;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use rr_agent::AgentSpec;
use rr_core::{AgentId, Coordinate, Heading, Instruction, MoveSymbol, Policy, PositionError};
use rr_request::{Request, encode, encode_request};
use rr_sim::SimObserver;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64   = 42;
const MAX_X:       i64   = 9;
const MAX_Y:       i64   = 9;
const AGENT_COUNT: usize = 12;
const MAX_PROGRAM: usize = 24;

const INSTRUCTIONS: [Instruction; 3] =
    [Instruction::TurnLeft, Instruction::TurnRight, Instruction::MoveForward];

// ── Fleet generation ──────────────────────────────────────────────────────────

fn random_request(rng: &mut SmallRng) -> Request {
    let mut taken = HashSet::new();
    let mut agents = Vec::with_capacity(AGENT_COUNT);

    while agents.len() < AGENT_COUNT {
        let position = Coordinate::new(rng.gen_range(0..=MAX_X), rng.gen_range(0..=MAX_Y));
        if !taken.insert(position) {
            continue;
        }
        let heading = *Heading::ALL.choose(rng).unwrap_or(&Heading::North);
        let len = rng.gen_range(0..=MAX_PROGRAM);
        let instructions = (0..len)
            .filter_map(|_| INSTRUCTIONS.choose(rng).copied())
            .collect();
        agents.push(AgentSpec::new(position, heading, instructions));
    }

    Request { top_right: Coordinate::new(MAX_X, MAX_Y), agents }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    steps:   u64,
    moves:   u64,
    blocked: u64,
}

impl SimObserver for Tally {
    fn on_step(&mut self, _round: u64, _agent: AgentId, instruction: Instruction) {
        self.steps += 1;
        if instruction.is_move() {
            self.moves += 1;
        }
    }

    fn on_blocked(&mut self, _round: u64, _agent: AgentId, _error: &PositionError) {
        self.blocked += 1;
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid seed {arg:?}"))?,
        None => SEED,
    };
    let mut rng = SmallRng::seed_from_u64(seed);
    let request = random_request(&mut rng);

    println!("=== swarm (seed {seed}) ===");
    println!("{}", encode_request(&request, MoveSymbol::F));

    for policy in [Policy::RoundRobin, Policy::Sequential] {
        let mut sim = request.clone().into_builder().policy(policy).build()?;
        let mut tally = Tally::default();

        println!();
        match sim.run(&mut tally) {
            Ok(outcome) => {
                println!(
                    "--- {policy}: {} rounds, {} steps ({} moves), {} blocked ---",
                    outcome.rounds, tally.steps, tally.moves, tally.blocked,
                );
                println!("{}", encode(&outcome));
            }
            Err(e) => println!("--- {policy}: aborted after {} steps: {e} ---", tally.steps),
        }
    }

    Ok(())
}
