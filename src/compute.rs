/// Pure game-logic functions.
///
/// Every public function takes the current `GameState` (plus the frame's
/// reduced `Intents` and, where randomness is involved, an RNG handle) and
/// returns a brand-new `GameState`. Side effects are limited to the injected
/// RNG, so tests drive everything with a seeded generator.

use rand::Rng;

use crate::entities::{
    Bullet, BulletOwner, BulletPattern, GameState, Hostile, HostileTier, Player, Screen,
    WaveState, HEIGHT, PLAYER_ROW, WIDTH,
};
use crate::input::Intents;
use crate::waves;

// ── Tuning constants (units are frames unless noted) ─────────────────────────

pub const STARTING_LIVES: i32 = 10;
pub const PLAYER_SPEED: i32 = 2;
pub const SHOOT_COOLDOWN: u32 = 8;

/// Set on Standard fire but mostly decorative — the 1% probability gate
/// dominates the effective fire rate.
const STANDARD_FIRE_COOLDOWN: u32 = 10;
const BOSS_FIRE_COOLDOWN: u32 = 25;

const SPREAD_VOLLEY_PERIOD: u32 = 30;
const SPREAD_VOLLEY_COOLDOWN: u32 = 45;
const STRAIGHT_VOLLEY_PERIOD: u32 = 60;
const STRAIGHT_VOLLEY_COOLDOWN: u32 = 30;

/// How long the help overlay stays up before auto-hiding (~10 s).
pub const HELP_OVERLAY_FRAMES: u32 = 600;

// ── Constructors ─────────────────────────────────────────────────────────────

fn bullet(x: i32, y: i32, owner: BulletOwner, pattern: BulletPattern) -> Bullet {
    Bullet { x, y, owner, pattern, active: true, age: 0 }
}

pub fn player_bullet(x: i32, y: i32) -> Bullet {
    bullet(x, y, BulletOwner::Player, BulletPattern::Straight)
}

pub fn enemy_straight(x: i32, y: i32) -> Bullet {
    bullet(x, y, BulletOwner::Enemy, BulletPattern::Straight)
}

pub fn enemy_spread(x: i32, y: i32) -> Bullet {
    bullet(x, y, BulletOwner::Enemy, BulletPattern::SpreadWave)
}

/// Fresh session parked on the title screen.
pub fn init_state() -> GameState {
    GameState {
        player: Player { x: WIDTH / 2, shoot_cooldown: 0 },
        hostiles: waves::formation(),
        bullets: Vec::new(),
        wave: WaveState { wave: 1, giant_boss_spawned: false, defeat_timer: 0 },
        score: 0,
        lives: STARTING_LIVES,
        screen: Screen::Title,
        selection: 0,
        help_visible: false,
        help_timer: 0,
        quit: false,
        frame_count: 0,
    }
}

/// Restart: everything back to wave-1 defaults, straight into play.
/// Nothing survives — the session is fully ephemeral.
pub fn reset_session(state: &mut GameState) {
    state.player = Player { x: WIDTH / 2, shoot_cooldown: 0 };
    state.hostiles = waves::formation();
    state.bullets.clear();
    state.wave = WaveState { wave: 1, giant_boss_spawned: false, defeat_timer: 0 };
    state.score = 0;
    state.lives = STARTING_LIVES;
    state.screen = Screen::Playing;
    state.help_visible = false;
    state.help_timer = 0;
    state.frame_count = 0;
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the whole session by one fixed step. Screen dispatch first, then
/// the play-mode simulation in its strict order.
pub fn advance(state: &GameState, intents: &Intents, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    match next.screen {
        Screen::Title => title_step(&mut next, intents),
        Screen::GameOver => {
            if intents.restart {
                reset_session(&mut next);
            } else if intents.quit {
                next.quit = true;
            }
        }
        Screen::Playing => play_step(&mut next, intents, rng),
    }
    next
}

fn title_step(state: &mut GameState, intents: &Intents) {
    if intents.up {
        state.selection = state.selection.saturating_sub(1);
    }
    if intents.down {
        state.selection = (state.selection + 1).min(1);
    }
    if intents.confirm {
        if state.selection == 0 {
            reset_session(state);
        } else {
            state.quit = true;
        }
    } else if intents.restart {
        // R works as a start shortcut from the title too.
        reset_session(state);
    } else if intents.quit {
        state.quit = true;
    }
}

fn play_step(state: &mut GameState, intents: &Intents, rng: &mut impl Rng) {
    if intents.restart {
        reset_session(state);
        return;
    }
    if intents.quit {
        // Quitting mid-game parks on the game-over screen; a second quit
        // from there leaves the program.
        state.screen = Screen::GameOver;
        return;
    }
    if intents.toggle_help {
        state.help_visible = !state.help_visible;
        state.help_timer = if state.help_visible { HELP_OVERLAY_FRAMES } else { 0 };
    }
    if state.help_visible {
        if state.help_timer > 0 {
            state.help_timer -= 1;
        } else {
            state.help_visible = false;
        }
    }

    state.frame_count += 1;

    // 1. Simultaneous left+right resolves to a single stable direction.
    let mut left = intents.left;
    let mut right = intents.right;
    if left && right {
        if state.player.x < WIDTH / 2 {
            left = false;
        } else {
            right = false;
        }
    }

    // 2. Horizontal movement, clamped inside the walls.
    if right {
        state.player.x = (state.player.x + PLAYER_SPEED).min(WIDTH - 2);
    } else if left {
        state.player.x = (state.player.x - PLAYER_SPEED).max(1);
    }

    // 3. Player fire.
    if intents.shoot && state.player.shoot_cooldown == 0 {
        state
            .bullets
            .push(player_bullet(state.player.x, PLAYER_ROW - 1));
        state.player.shoot_cooldown = SHOOT_COOLDOWN;
    }
    if state.player.shoot_cooldown > 0 {
        state.player.shoot_cooldown -= 1;
    }

    // 4. Bullet motion.
    for b in &mut state.bullets {
        step_bullet(b);
    }

    // 5. Sweep inactive bullets, preserving insertion order.
    state.bullets.retain(|b| b.active);

    // 6. Hostile motion, then fire.
    let mut fired: Vec<Bullet> = Vec::new();
    for h in &mut state.hostiles {
        if !h.alive {
            continue;
        }
        step_hostile(h, rng);
        fire_hostile(h, rng, &mut fired);
    }
    state.bullets.extend(fired);

    // 7. Collisions.
    resolve_collisions(state);

    // 8. Spawn/advance policy.
    waves::progress(state);

    // 9. Terminal condition.
    if state.lives <= 0 {
        state.screen = Screen::GameOver;
    }
}

// ── Motion rules ─────────────────────────────────────────────────────────────

fn step_bullet(b: &mut Bullet) {
    b.age += 1;
    match (b.owner, b.pattern) {
        (BulletOwner::Player, _) => b.y -= 2,
        (BulletOwner::Enemy, BulletPattern::Straight) => {
            if b.age % 5 == 0 {
                b.y += 1;
            }
        }
        (BulletOwner::Enemy, BulletPattern::SpreadWave) => {
            if b.age % 3 == 0 {
                b.y += 1;
                // Sway flips every 3 fall-steps of a 6-step cycle.
                let step = (b.age / 3) % 6;
                b.x += if step < 3 { 1 } else { -1 };
                b.x = b.x.clamp(0, WIDTH - 1);
            }
        }
    }
    if b.y < 0 || b.y >= HEIGHT {
        b.active = false;
    }
}

fn step_hostile(h: &mut Hostile, rng: &mut impl Rng) {
    h.move_counter += 1;
    match h.tier {
        HostileTier::Standard => {
            if h.move_counter % 3 == 0 {
                h.x += h.direction;
                if h.x <= 1 || h.x >= WIDTH - 2 {
                    h.direction = -h.direction;
                }
            }
        }
        HostileTier::Boss => {
            if h.move_counter % 3 == 0 {
                h.x += h.direction;
                if h.x <= 1 || h.x >= WIDTH - 2 {
                    h.direction = -h.direction;
                    if rng.gen_bool(0.5) {
                        h.y += 1;
                    }
                }
            }
        }
        HostileTier::GiantBoss => {
            // Sweeps a tighter corridor than the small tiers so its wide
            // sprite never clips the walls.
            if h.move_counter % 4 == 0 {
                h.x += h.direction;
                if h.x <= 5 || h.x >= WIDTH - 6 {
                    h.direction = -h.direction;
                }
            }
            h.phase_frames += 1;
            if h.phase_frames >= 120 {
                h.y += 1;
                h.phase_frames = 0;
            } else if h.phase_frames > 60 && rng.gen_ratio(1, 20) {
                h.direction = -h.direction;
                h.phase_frames = 0;
            }
        }
    }
    // Clamp-and-continue, never reject.
    h.x = h.x.clamp(1, WIDTH - 2);
    h.y = h.y.min(HEIGHT - 3);
}

// ── Fire rules ───────────────────────────────────────────────────────────────

fn fire_hostile(h: &mut Hostile, rng: &mut impl Rng, out: &mut Vec<Bullet>) {
    if h.fire_cooldown > 0 {
        h.fire_cooldown -= 1;
    }
    if h.volley_cooldown > 0 {
        h.volley_cooldown -= 1;
    }
    match h.tier {
        HostileTier::Standard => {
            if h.fire_cooldown == 0 && rng.gen_ratio(2, 200) {
                out.push(enemy_straight(h.x, h.y + 1));
                h.fire_cooldown = STANDARD_FIRE_COOLDOWN;
            }
        }
        HostileTier::Boss => {
            // The probability check runs every eligible frame; the cooldown
            // only gates repeats after a hit.
            if h.fire_cooldown == 0 && rng.gen_ratio(2, 150) {
                out.push(enemy_straight(h.x, h.y + 1));
                h.fire_cooldown = BOSS_FIRE_COOLDOWN;
            }
        }
        HostileTier::GiantBoss => {
            // Deterministic cadence off one monotonic counter; the two
            // volley timers run independently and may land the same frame.
            h.pattern_counter += 1;
            if h.pattern_counter % SPREAD_VOLLEY_PERIOD == 0 && h.fire_cooldown == 0 {
                for dx in -2..=2 {
                    out.push(enemy_spread(h.x + dx, h.y + 1));
                }
                h.fire_cooldown = SPREAD_VOLLEY_COOLDOWN;
            }
            if h.pattern_counter % STRAIGHT_VOLLEY_PERIOD == 0 && h.volley_cooldown == 0 {
                for dx in [-4, 0, 4] {
                    out.push(enemy_straight(h.x + dx, h.y + 1));
                }
                h.volley_cooldown = STRAIGHT_VOLLEY_COOLDOWN;
            }
        }
    }
}

// ── Collision resolution ─────────────────────────────────────────────────────

fn score_for(tier: HostileTier) -> u32 {
    match tier {
        HostileTier::Standard => 10,
        HostileTier::Boss => 100,
        HostileTier::GiantBoss => 300,
    }
}

/// Box half-extents for the bullet-vs-hostile test, matching sprite size.
fn hit_box(tier: HostileTier) -> (i32, i32) {
    match tier {
        HostileTier::GiantBoss => (4, 2),
        _ => (1, 1),
    }
}

/// Mutates bullets and hostiles in place. Each player bullet damages at
/// most one hostile per frame (first alive hostile in collection order);
/// each enemy bullet on the player row costs one life, with simultaneous
/// hits all counting.
pub fn resolve_collisions(state: &mut GameState) {
    for bi in 0..state.bullets.len() {
        let (bx, by, owner, active) = {
            let b = &state.bullets[bi];
            (b.x, b.y, b.owner, b.active)
        };
        if owner != BulletOwner::Player || !active {
            continue;
        }
        let mut consumed = false;
        for h in state.hostiles.iter_mut() {
            if !h.alive {
                continue;
            }
            let (rx, ry) = hit_box(h.tier);
            if (bx - h.x).abs() <= rx && (by - h.y).abs() <= ry {
                h.health -= 1;
                if h.health <= 0 {
                    h.alive = false;
                    state.score += score_for(h.tier);
                }
                consumed = true;
                break;
            }
        }
        if consumed {
            state.bullets[bi].active = false;
        }
    }

    for b in state.bullets.iter_mut() {
        if b.owner == BulletOwner::Enemy
            && b.active
            && b.y == PLAYER_ROW
            && (b.x - state.player.x).abs() <= 1
        {
            b.active = false;
            state.lives -= 1;
        }
    }
}
