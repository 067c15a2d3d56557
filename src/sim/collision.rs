//! Collision detection and response
//!
//! Broad-phase only: plain distance tests between every hostile and every
//! projectile, and between every hostile and the player. Distances exactly on
//! a threshold do not count as contact.

use glam::Vec3;

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What one collision pass did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// (hostile id, projectile id) pairs that connected
    pub hits: Vec<(u32, u32)>,
    /// Hostiles removed this pass
    pub defeated: Vec<u32>,
    /// Replacement hostiles spawned this pass
    pub respawned: Vec<u32>,
    /// Number of hostiles touching the player
    pub contacts: u32,
    /// Whether this pass ended the session
    pub terminated: bool,
}

/// Strict distance test
#[inline]
pub fn within(a: Vec3, b: Vec3, threshold: f32) -> bool {
    a.distance(b) < threshold
}

/// Run both collision checks for the current tick
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let mut report = CollisionReport::default();
    resolve_projectile_hits(state, &mut report);
    resolve_player_contact(state, &mut report);
    report
}

/// Projectiles against hostiles
///
/// A projectile is consumed by the first hostile it touches. A hostile stops
/// absorbing projectiles once defeated; defeated hostiles are removed and
/// replaced after the sweep so the pool is never iterated while shrinking.
pub fn resolve_projectile_hits(state: &mut GameState, report: &mut CollisionReport) {
    let GameState {
        hostiles,
        projectiles,
        events,
        ..
    } = state;

    for hostile in hostiles.iter_mut() {
        while let Some(projectile_id) =
            projectiles.find_within(hostile.pos, PROJECTILE_HIT_DISTANCE)
        {
            projectiles.remove(projectile_id);
            let defeated = hostile.take_hit();
            report.hits.push((hostile.id, projectile_id));
            events.push(GameEvent::HostileHit {
                hostile_id: hostile.id,
                projectile_id,
                health: hostile.health,
            });
            if defeated {
                report.defeated.push(hostile.id);
                break;
            }
        }
    }

    for &id in &report.defeated {
        if state.hostiles.remove(id).is_none() {
            continue;
        }
        state.score += HOSTILE_DEFEAT_SCORE;
        state.events.push(GameEvent::HostileDefeated {
            id,
            score: state.score,
        });
        log::debug!("Hostile {} defeated, score {}", id, state.score);
        let replacement = state.spawn_hostile();
        report.respawned.push(replacement);
    }
}

/// Hostiles against the player
///
/// Every touching hostile deals damage, so crowds stack. Reaching zero health
/// terminates the session and stops the sweep.
pub fn resolve_player_contact(state: &mut GameState, report: &mut CollisionReport) {
    if state.phase != GamePhase::Running {
        return;
    }
    let player_pos = state.player.pos;

    let touching: Vec<u32> = state
        .hostiles
        .iter()
        .filter(|h| within(h.pos, player_pos, PLAYER_CONTACT_DISTANCE))
        .map(|h| h.id)
        .collect();

    for hostile_id in touching {
        state.health -= CONTACT_DAMAGE;
        report.contacts += 1;
        state.events.push(GameEvent::PlayerDamaged {
            hostile_id,
            health: state.health,
        });

        if state.health <= 0.0 {
            state.phase = GamePhase::Terminated;
            report.terminated = true;
            state.events.push(GameEvent::SessionEnded {
                score: state.score,
                ticks: state.time_ticks,
            });
            log::info!(
                "Player defeated after {} ticks, final score {}",
                state.time_ticks,
                state.score
            );
            break;
        }
    }
}
