/// Wave direction — formation spawning, timed bosses, wave advancement.
///
/// Progression is fully deterministic (no RNG): randomness lives in the
/// per-hostile motion and fire rules, not in the spawn policy.

use crate::entities::{GameState, Hostile, HostileTier, WIDTH};

pub const FORMATION_COLS: i32 = 8;
pub const FORMATION_ROWS: i32 = 3;

/// A regular boss drops in every 15 seconds at 60 Hz, whatever else is alive.
pub const BOSS_SPAWN_INTERVAL: u64 = 900;

/// Every 3rd wave ends with a giant boss instead of advancing immediately.
pub const GIANT_BOSS_WAVE_PERIOD: u32 = 3;

/// Frames between the giant boss dying and the next wave spawning, so the
/// kill registers on screen before the field refills.
pub const GIANT_DEFEAT_COOLDOWN: u32 = 180;

pub fn spawn_hostile(tier: HostileTier, x: i32, y: i32) -> Hostile {
    let health = match tier {
        HostileTier::Standard => 1,
        HostileTier::Boss => 3,
        HostileTier::GiantBoss => 15,
    };
    Hostile {
        x,
        y,
        tier,
        alive: true,
        health,
        direction: 1,
        move_counter: 0,
        fire_cooldown: 0,
        volley_cooldown: 0,
        pattern_counter: 0,
        phase_frames: 0,
    }
}

/// The standard 8×3 opening formation. Rows alternate their initial sweep
/// direction so the block shears apart instead of marching in lockstep.
pub fn formation() -> Vec<Hostile> {
    let mut hostiles = Vec::with_capacity((FORMATION_COLS * FORMATION_ROWS) as usize);
    for col in 0..FORMATION_COLS {
        for row in 0..FORMATION_ROWS {
            let mut h = spawn_hostile(HostileTier::Standard, 10 + col * 8, 3 + row * 2);
            h.direction = if row % 2 == 0 { 1 } else { -1 };
            hostiles.push(h);
        }
    }
    hostiles
}

fn spawn_boss(state: &mut GameState) {
    state
        .hostiles
        .push(spawn_hostile(HostileTier::Boss, WIDTH / 2, 2));
}

fn spawn_giant_boss(state: &mut GameState) {
    state
        .hostiles
        .push(spawn_hostile(HostileTier::GiantBoss, WIDTH / 2, 2));
}

fn start_next_wave(state: &mut GameState) {
    state.wave.wave += 1;
    state.wave.giant_boss_spawned = false;
    state.wave.defeat_timer = 0;
    state.hostiles = formation();
}

/// Advance spawn/wave policy one frame. Runs after collision resolution, so
/// this frame's kills are already reflected in `alive` flags.
///
/// Calling this repeatedly with unchanged liveness never double-spawns a
/// giant boss or skips a wave: the spawn is guarded by the one-shot flag and
/// the advance by the defeat timer threshold.
pub fn progress(state: &mut GameState) {
    if state.frame_count != 0 && state.frame_count % BOSS_SPAWN_INTERVAL == 0 {
        spawn_boss(state);
    }

    if state.wave.giant_boss_spawned {
        let giant_alive = state
            .hostiles
            .iter()
            .any(|h| h.alive && h.tier == HostileTier::GiantBoss);
        if giant_alive {
            state.wave.defeat_timer = 0;
        } else {
            state.wave.defeat_timer += 1;
            if state.wave.defeat_timer > GIANT_DEFEAT_COOLDOWN {
                start_next_wave(state);
            }
        }
        return;
    }

    // The formation counts as cleared only with no regular boss left either;
    // the timed boss therefore blocks advancement until it is shot down.
    let formation_clear = !state
        .hostiles
        .iter()
        .any(|h| h.alive && h.tier != HostileTier::GiantBoss);
    if formation_clear {
        if state.wave.wave % GIANT_BOSS_WAVE_PERIOD == 0 {
            spawn_giant_boss(state);
            state.wave.giant_boss_spawned = true;
            state.wave.defeat_timer = 0;
        } else {
            start_next_wave(state);
        }
    }
}
