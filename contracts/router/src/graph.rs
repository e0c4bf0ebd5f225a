//! Shortest-path search over the token graph
//!
//! Dense Dijkstra: each round scans every unvisited node for the smallest
//! distance, then relaxes the node's outgoing edges in insertion order.
//! Relaxation is strict, so among equal-cost paths the one discovered first
//! wins.

use conxian_math::mul_div;
use soroban_sdk::{Address, Env, Vec};

use crate::types::{PathHop, RouteEdge};

/// Fixed-point scale for edge costs
pub const COST_SCALE: u128 = 1_000_000;

const UNREACHED: u128 = u128::MAX;
const NO_EDGE: u32 = u32::MAX;

/// Cost of sending `amount_in` across an edge
///
/// Fee term plus a price impact estimate of `amount_in / liquidity`.
pub fn edge_cost(fee_bps: u32, liquidity: u128, amount_in: u128) -> u128 {
    let fee_cost = fee_bps as u128 * COST_SCALE / 10_000;
    let impact = if liquidity == 0 {
        UNREACHED
    } else {
        mul_div(amount_in, COST_SCALE, liquidity).unwrap_or(UNREACHED)
    };
    fee_cost.saturating_add(impact)
}

/// Cheapest hop sequence from `from` to `to`, empty when unreachable
pub fn shortest_path(
    env: &Env,
    tokens: &Vec<Address>,
    edges: &Vec<RouteEdge>,
    from: &Address,
    to: &Address,
    amount_in: u128,
) -> Vec<PathHop> {
    let empty = Vec::new(env);
    let (Some(source), Some(target)) = (
        tokens.first_index_of(from.clone()),
        tokens.first_index_of(to.clone()),
    ) else {
        return empty;
    };
    if source == target {
        return empty;
    }

    let n = tokens.len();
    let mut dist: Vec<u128> = Vec::new(env);
    let mut via: Vec<u32> = Vec::new(env);
    let mut done: Vec<bool> = Vec::new(env);
    for _ in 0..n {
        dist.push_back(UNREACHED);
        via.push_back(NO_EDGE);
        done.push_back(false);
    }
    dist.set(source, 0);

    loop {
        let mut current = None;
        let mut best = UNREACHED;
        for i in 0..n {
            let d = dist.get_unchecked(i);
            if !done.get_unchecked(i) && d < best {
                best = d;
                current = Some(i);
            }
        }
        let Some(node) = current else {
            break;
        };
        if node == target {
            break;
        }
        done.set(node, true);

        let node_token = tokens.get_unchecked(node);
        for (idx, edge) in edges.iter().enumerate() {
            if edge.token_a != node_token {
                continue;
            }
            let Some(next) = tokens.first_index_of(edge.token_b.clone()) else {
                continue;
            };
            if done.get_unchecked(next) {
                continue;
            }
            let candidate = best.saturating_add(edge_cost(edge.fee_bps, edge.liquidity, amount_in));
            if candidate < dist.get_unchecked(next) {
                dist.set(next, candidate);
                via.set(next, idx as u32);
            }
        }
    }

    if via.get_unchecked(target) == NO_EDGE {
        return empty;
    }

    let mut path = Vec::new(env);
    let mut node = target;
    while node != source {
        let edge = edges.get_unchecked(via.get_unchecked(node));
        node = match tokens.first_index_of(edge.token_a.clone()) {
            Some(prev) => prev,
            None => return empty,
        };
        path.push_front(PathHop {
            pool: edge.pool,
            token_in: edge.token_a,
            token_out: edge.token_b,
            fee_bps: edge.fee_bps,
        });
    }
    path
}
