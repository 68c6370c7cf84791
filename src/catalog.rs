//! Fixed lookup tables for characters, weapons and enemies.
//!
//! Table order matches the declaration order of the id enums, so lookup
//! is a plain index.

use crate::entities::{
    Character, CharacterId, Enemy, EnemyId, Weapon, WeaponId,
};

pub static CHARACTERS: [Character; 5] = [
    Character { id: CharacterId::Warrior, name: "Guerrero", icon: "🛡️", bonus: WeaponId::Sword },
    Character { id: CharacterId::Mage, name: "Mago", icon: "🧙", bonus: WeaponId::Wand },
    Character { id: CharacterId::Thief, name: "Ladrón", icon: "🥷", bonus: WeaponId::Dagger },
    Character { id: CharacterId::Archer, name: "Arquero", icon: "🏹", bonus: WeaponId::Bow },
    Character { id: CharacterId::Barbarian, name: "Bárbaro", icon: "🦁", bonus: WeaponId::Axe },
];

pub static WEAPONS: [Weapon; 5] = [
    Weapon { id: WeaponId::Sword, name: "Espada", icon: "⚔️", power: 10 },
    Weapon { id: WeaponId::Wand, name: "Varita", icon: "✨", power: 12 },
    Weapon { id: WeaponId::Bow, name: "Arco", icon: "🏹", power: 11 },
    Weapon { id: WeaponId::Dagger, name: "Daga", icon: "🗡️", power: 9 },
    Weapon { id: WeaponId::Axe, name: "Hacha", icon: "🪓", power: 13 },
];

pub static ENEMIES: [Enemy; 5] = [
    Enemy { id: EnemyId::Goblin, name: "Goblin", icon: "👺", hp: 15, weakness: WeaponId::Sword },
    Enemy { id: EnemyId::Dragon, name: "Dragón", icon: "🐉", hp: 22, weakness: WeaponId::Wand },
    Enemy { id: EnemyId::Skeleton, name: "Esqueleto", icon: "💀", hp: 18, weakness: WeaponId::Axe },
    Enemy { id: EnemyId::Orc, name: "Orco", icon: "👹", hp: 20, weakness: WeaponId::Dagger },
    Enemy { id: EnemyId::Wolf, name: "Lobo", icon: "🐺", hp: 12, weakness: WeaponId::Bow },
];

pub fn character(id: CharacterId) -> &'static Character {
    &CHARACTERS[id as usize]
}

pub fn weapon(id: WeaponId) -> &'static Weapon {
    &WEAPONS[id as usize]
}

pub fn enemy(id: EnemyId) -> &'static Enemy {
    &ENEMIES[id as usize]
}

/// Characters whose combo weapon is `weapon`.
pub fn characters_bonded_to(weapon: WeaponId) -> impl Iterator<Item = &'static Character> {
    CHARACTERS.iter().filter(move |c| c.bonus == weapon)
}

/// Enemies that take extra damage from `weapon`.
pub fn enemies_weak_to(weapon: WeaponId) -> impl Iterator<Item = &'static Enemy> {
    ENEMIES.iter().filter(move |e| e.weakness == weapon)
}
