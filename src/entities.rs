/// All game entity types — pure data, no logic.

/// Fixed play-field dimensions (one glyph per cell).
pub const WIDTH: i32 = 80;
pub const HEIGHT: i32 = 24;

/// The row the player ship occupies for the whole session.
pub const PLAYER_ROW: i32 = HEIGHT - 2;

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Title,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BulletPattern {
    /// Vertical motion only: player shots rise 2 rows/frame, enemy shots
    /// fall 1 row every 5th frame.
    Straight,
    /// Falls 1 row every 3rd frame while swaying sideways, the sway
    /// direction flipping every 3 steps of a 6-step cycle.
    SpreadWave,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub owner: BulletOwner,
    pub pattern: BulletPattern,
    pub active: bool,
    /// Frames since spawn; drives the slow-fall and sway cadences.
    pub age: u32,
}

// ── Hostiles ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostileTier {
    Standard,
    Boss,
    GiantBoss,
}

#[derive(Clone, Debug)]
pub struct Hostile {
    pub x: i32,
    pub y: i32,
    pub tier: HostileTier,
    pub alive: bool,
    pub health: i32,
    /// Horizontal travel direction, always -1 or +1.
    pub direction: i32,
    pub move_counter: u32,
    /// Gates repeat fire attempts (Standard/Boss straight shots).
    pub fire_cooldown: u32,
    /// Gates the giant boss's straight 3-shot volley independently.
    pub volley_cooldown: u32,
    /// Monotonic counter driving the giant boss's deterministic volleys.
    pub pattern_counter: u32,
    /// Frames spent in the giant boss's current sweep phase.
    pub phase_frames: u32,
}

// ── Player & progression ──────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    /// Frames until the next shot is allowed.
    pub shoot_cooldown: u32,
}

#[derive(Clone, Debug)]
pub struct WaveState {
    pub wave: u32,
    /// One-shot flag: a giant boss has been spawned for the current wave.
    pub giant_boss_spawned: bool,
    /// Counts up once the giant boss is dead; the wave advances only after
    /// it passes the defeat cooldown. Armed only while the flag is set.
    pub defeat_timer: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session state. Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub hostiles: Vec<Hostile>,
    pub bullets: Vec<Bullet>,
    pub wave: WaveState,
    pub score: u32,
    pub lives: i32,
    pub screen: Screen,
    /// Title-menu cursor (0 = start, 1 = quit).
    pub selection: usize,
    pub help_visible: bool,
    /// Frames remaining before the help overlay auto-hides.
    pub help_timer: u32,
    /// Set by a quit intent; the outer loop observes it and exits.
    pub quit: bool,
    pub frame_count: u64,
}
