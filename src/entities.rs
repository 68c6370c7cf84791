/// All game entity types — pure data, no logic.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownId;

// ── Identifiers ───────────────────────────────────────────────────────────────

/// Characters are the "abstraction" side of the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterId {
    Warrior,
    Mage,
    Thief,
    Archer,
    Barbarian,
}

/// Weapons are the "implementation" side of the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponId {
    Sword,
    Wand,
    Bow,
    Dagger,
    Axe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyId {
    Goblin,
    Dragon,
    Skeleton,
    Orc,
    Wolf,
}

impl CharacterId {
    pub const ALL: [CharacterId; 5] = [
        CharacterId::Warrior,
        CharacterId::Mage,
        CharacterId::Thief,
        CharacterId::Archer,
        CharacterId::Barbarian,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterId::Warrior => "warrior",
            CharacterId::Mage => "mage",
            CharacterId::Thief => "thief",
            CharacterId::Archer => "archer",
            CharacterId::Barbarian => "barbarian",
        }
    }
}

impl WeaponId {
    pub const ALL: [WeaponId; 5] = [
        WeaponId::Sword,
        WeaponId::Wand,
        WeaponId::Bow,
        WeaponId::Dagger,
        WeaponId::Axe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponId::Sword => "espada",
            WeaponId::Wand => "varita",
            WeaponId::Bow => "arco",
            WeaponId::Dagger => "daga",
            WeaponId::Axe => "hacha",
        }
    }
}

impl EnemyId {
    pub const ALL: [EnemyId; 5] = [
        EnemyId::Goblin,
        EnemyId::Dragon,
        EnemyId::Skeleton,
        EnemyId::Orc,
        EnemyId::Wolf,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyId::Goblin => "goblin",
            EnemyId::Dragon => "dragon",
            EnemyId::Skeleton => "skeleton",
            EnemyId::Orc => "orc",
            EnemyId::Wolf => "wolf",
        }
    }
}

macro_rules! string_id {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|id| id.as_str() == s)
                    .ok_or_else(|| UnknownId {
                        kind: $kind,
                        id: s.to_string(),
                    })
            }
        }
    };
}

string_id!(CharacterId, "character");
string_id!(WeaponId, "weapon");
string_id!(EnemyId, "enemy");

// ── Catalog entries ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub name: &'static str,
    pub icon: &'static str,
    /// The weapon this character gets a combo with.
    pub bonus: WeaponId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: &'static str,
    pub icon: &'static str,
    pub power: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: &'static str,
    pub icon: &'static str,
    pub hp: u32,
    pub weakness: WeaponId,
}

// ── Screens ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Rules,
    Playing,
    /// Rendered like `Lost`, but no play path leads here.
    Won,
    Lost,
}

// ── Turn results ──────────────────────────────────────────────────────────────

/// How a character + weapon pairing adds up against one enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageBreakdown {
    pub base: u32,
    pub combo: bool,
    pub weakness: bool,
    pub total: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Kill {
        damage: DamageBreakdown,
        points: u32,
        level_up: bool,
    },
    Miss {
        damage: DamageBreakdown,
        enemy_hp: u32,
    },
}

/// Text shown to the player after a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Kill {
        combo: bool,
        weakness: bool,
        points: u32,
        level_up: bool,
    },
    Miss {
        damage: u32,
        enemy_name: &'static str,
        enemy_hp: u32,
    },
}

impl Feedback {
    pub fn is_miss(&self) -> bool {
        matches!(self, Feedback::Miss { .. })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Kill {
                combo,
                weakness,
                points,
                level_up,
            } => {
                if *combo {
                    f.write_str("💥 COMBO! ")?;
                }
                if *weakness {
                    f.write_str("🎯 DEBILIDAD! ")?;
                }
                write!(f, "✅ +{} pts", points)?;
                if *level_up {
                    f.write_str(" 🎉 NIVEL UP!")?;
                }
                Ok(())
            }
            Feedback::Miss {
                damage,
                enemy_name,
                enemy_hp,
            } => write!(
                f,
                "❌ Fallaste ({} daño). El {} tiene {} HP.",
                damage, enemy_name, enemy_hp
            ),
        }
    }
}

// ── Master session state ──────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original, and so the
/// presentation layer can hold a snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub screen: Screen,
    pub score: u32,
    pub level: u32,
    /// Whole seconds left on the countdown.
    pub time_remaining: u32,
    /// Kills in a row without a miss.
    pub streak: u32,
    pub current_enemy: Option<EnemyId>,
    pub selected_character: Option<CharacterId>,
    pub selected_weapon: Option<WeaponId>,
    /// True between a kill and the next enemy; freezes clock and input.
    pub resolving: bool,
    pub feedback: Option<Feedback>,
}
