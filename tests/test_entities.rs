use star_swarm::compute::{init_state, player_bullet};
use star_swarm::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(HostileTier::Standard, HostileTier::Standard);
    assert_ne!(HostileTier::Boss, HostileTier::GiantBoss);
    assert_eq!(BulletOwner::Player, BulletOwner::Player);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);
    assert_eq!(BulletPattern::Straight, BulletPattern::Straight);
    assert_ne!(BulletPattern::Straight, BulletPattern::SpreadWave);
    assert_eq!(Screen::Title, Screen::Title);
    assert_ne!(Screen::Playing, Screen::GameOver);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state();
    let mut cloned = original.clone();

    cloned.score = 123;
    cloned.bullets.push(player_bullet(5, 5));
    cloned.hostiles.clear();

    assert_eq!(original.score, 0);
    assert!(original.bullets.is_empty());
    assert_eq!(original.hostiles.len(), 24);
}

#[test]
fn field_constants_are_consistent() {
    assert_eq!(WIDTH, 80);
    assert_eq!(HEIGHT, 24);
    assert_eq!(PLAYER_ROW, HEIGHT - 2);
}
