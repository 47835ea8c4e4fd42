use star_swarm::compute::{init_state, reset_session};
use star_swarm::entities::*;
use star_swarm::waves::{self, BOSS_SPAWN_INTERVAL, GIANT_DEFEAT_COOLDOWN};

fn playing_state() -> GameState {
    let mut s = init_state();
    reset_session(&mut s);
    s
}

fn kill_all(state: &mut GameState) {
    for h in &mut state.hostiles {
        h.alive = false;
        h.health = 0;
    }
}

fn count_tier(state: &GameState, tier: HostileTier) -> usize {
    state
        .hostiles
        .iter()
        .filter(|h| h.alive && h.tier == tier)
        .count()
}

// ── Spawning ──────────────────────────────────────────────────────────────────

#[test]
fn spawn_health_by_tier() {
    assert_eq!(waves::spawn_hostile(HostileTier::Standard, 1, 1).health, 1);
    assert_eq!(waves::spawn_hostile(HostileTier::Boss, 1, 1).health, 3);
    assert_eq!(waves::spawn_hostile(HostileTier::GiantBoss, 1, 1).health, 15);
}

#[test]
fn formation_is_eight_by_three() {
    let f = waves::formation();
    assert_eq!(f.len(), 24);
    assert!(f.iter().all(|h| h.tier == HostileTier::Standard && h.alive));
}

#[test]
fn no_timed_boss_at_frame_zero() {
    let mut s = playing_state();
    assert_eq!(s.frame_count, 0);
    waves::progress(&mut s);
    assert_eq!(count_tier(&s, HostileTier::Boss), 0);
}

#[test]
fn timed_boss_spawns_every_interval() {
    let mut s = playing_state();
    s.frame_count = BOSS_SPAWN_INTERVAL;
    waves::progress(&mut s);
    assert_eq!(count_tier(&s, HostileTier::Boss), 1);

    // Unconditional and additive: another interval, another boss, even with
    // the formation untouched.
    s.frame_count = 2 * BOSS_SPAWN_INTERVAL;
    waves::progress(&mut s);
    assert_eq!(count_tier(&s, HostileTier::Boss), 2);
}

// ── Wave advancement ──────────────────────────────────────────────────────────

#[test]
fn clearing_the_formation_advances_the_wave() {
    let mut s = playing_state();
    kill_all(&mut s);
    waves::progress(&mut s);
    assert_eq!(s.wave.wave, 2);
    assert_eq!(count_tier(&s, HostileTier::Standard), 24);
}

#[test]
fn live_boss_blocks_advancement() {
    let mut s = playing_state();
    kill_all(&mut s);
    s.hostiles.push(waves::spawn_hostile(HostileTier::Boss, 40, 2));
    waves::progress(&mut s);
    assert_eq!(s.wave.wave, 1);
}

#[test]
fn third_wave_spawns_giant_boss_instead_of_advancing() {
    let mut s = playing_state();
    s.wave.wave = 3;
    kill_all(&mut s);
    waves::progress(&mut s);
    assert_eq!(s.wave.wave, 3);
    assert!(s.wave.giant_boss_spawned);
    assert_eq!(count_tier(&s, HostileTier::GiantBoss), 1);
}

#[test]
fn giant_boss_spawn_is_one_shot() {
    let mut s = playing_state();
    s.wave.wave = 3;
    kill_all(&mut s);
    // Repeated progression calls with no other change must not stack
    // giant bosses or move the wave counter.
    for _ in 0..5 {
        waves::progress(&mut s);
    }
    assert_eq!(count_tier(&s, HostileTier::GiantBoss), 1);
    assert_eq!(s.wave.wave, 3);
}

#[test]
fn giant_boss_defeat_advances_after_cooldown() {
    let mut s = playing_state();
    s.wave.wave = 3;
    s.wave.giant_boss_spawned = true;
    kill_all(&mut s);

    for _ in 0..GIANT_DEFEAT_COOLDOWN {
        waves::progress(&mut s);
        assert_eq!(s.wave.wave, 3);
    }
    waves::progress(&mut s);
    assert_eq!(s.wave.wave, 4);
    assert!(!s.wave.giant_boss_spawned);
    assert_eq!(s.wave.defeat_timer, 0);
    assert_eq!(count_tier(&s, HostileTier::Standard), 24);
}

#[test]
fn defeat_timer_rearms_while_giant_alive() {
    let mut s = playing_state();
    s.wave.wave = 3;
    s.wave.giant_boss_spawned = true;
    s.wave.defeat_timer = 100;
    kill_all(&mut s);
    s.hostiles.push(waves::spawn_hostile(HostileTier::GiantBoss, 40, 2));

    waves::progress(&mut s);
    assert_eq!(s.wave.defeat_timer, 0);
    assert_eq!(s.wave.wave, 3);
}

#[test]
fn wave_advance_clears_corpses() {
    let mut s = playing_state();
    kill_all(&mut s);
    let corpses = s.hostiles.len();
    assert_eq!(corpses, 24);
    waves::progress(&mut s);
    // The dead formation is gone, replaced by a fresh one.
    assert_eq!(s.hostiles.len(), 24);
    assert!(s.hostiles.iter().all(|h| h.alive));
}
