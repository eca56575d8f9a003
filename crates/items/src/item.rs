use serde::{Deserialize, Serialize};

use satchel_core::ItemId;

use crate::rarity::Rarity;

/// Kind-specific attributes of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon { damage: u32, damage_type: String },
    Armor { defense: u32, armor_type: String },
    Consumable { effect: String, quantity: u32 },
    Quest { quest_name: String, optional: bool },
    /// Anything that fits none of the categories above (crafting scraps, trinkets).
    Misc { note: String },
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Weapon { .. } => "weapon",
            ItemKind::Armor { .. } => "armor",
            ItemKind::Consumable { .. } => "consumable",
            ItemKind::Quest { .. } => "quest",
            ItemKind::Misc { .. } => "misc",
        }
    }
}

/// An item record.
///
/// Weight is clamped to be non-negative at construction. Equality includes the
/// id, so only clones of the same record compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    weight: f64,
    rarity: Rarity,
    value: u32,
    kind: ItemKind,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        rarity: Rarity,
        value: u32,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            // `f64::max` maps NaN to the other operand.
            weight: weight.max(0.0),
            rarity,
            value,
            kind,
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        weight: f64,
        rarity: Rarity,
        value: u32,
        damage: u32,
        damage_type: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            weight,
            rarity,
            value,
            ItemKind::Weapon {
                damage,
                damage_type: damage_type.into(),
            },
        )
    }

    pub fn armor(
        name: impl Into<String>,
        weight: f64,
        rarity: Rarity,
        value: u32,
        defense: u32,
        armor_type: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            weight,
            rarity,
            value,
            ItemKind::Armor {
                defense,
                armor_type: armor_type.into(),
            },
        )
    }

    pub fn consumable(
        name: impl Into<String>,
        weight: f64,
        rarity: Rarity,
        value: u32,
        effect: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self::new(
            name,
            weight,
            rarity,
            value,
            ItemKind::Consumable {
                effect: effect.into(),
                quantity,
            },
        )
    }

    pub fn quest(
        name: impl Into<String>,
        weight: f64,
        rarity: Rarity,
        value: u32,
        quest_name: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self::new(
            name,
            weight,
            rarity,
            value,
            ItemKind::Quest {
                quest_name: quest_name.into(),
                optional,
            },
        )
    }

    pub fn misc(
        name: impl Into<String>,
        weight: f64,
        rarity: Rarity,
        value: u32,
        note: impl Into<String>,
    ) -> Self {
        Self::new(name, weight, rarity, value, ItemKind::Misc { note: note.into() })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Weapon damage, if this is a weapon.
    pub fn damage(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Weapon { damage, .. } => Some(damage),
            _ => None,
        }
    }

    /// Armor defense, if this is armor.
    pub fn defense(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Armor { defense, .. } => Some(defense),
            _ => None,
        }
    }

    /// One-line human readable description, including kind-specific details.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} | Weight: {}kg | Value: {}",
            self.rarity, self.name, self.weight, self.value
        )?;
        match &self.kind {
            ItemKind::Weapon {
                damage,
                damage_type,
            } => write!(f, " | Damage: {damage} ({damage_type})"),
            ItemKind::Armor {
                defense,
                armor_type,
            } => write!(f, " | Defense: +{defense} ({armor_type})"),
            ItemKind::Consumable { effect, quantity } => {
                write!(f, " x{quantity} | Effect: {effect}")
            }
            ItemKind::Quest {
                quest_name,
                optional,
            } => {
                let requirement = if *optional { "Optional" } else { "Required" };
                write!(f, " | Quest: {quest_name} ({requirement})")
            }
            ItemKind::Misc { note } => write!(f, " | {note}"),
        }
    }
}
