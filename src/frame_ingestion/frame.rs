use crate::frame_ingestion::inventory_item::InventoryItem;
use serde::Deserialize;

/// Role of a player for the current round.
///
/// # Variants
///
/// * `T` - The attacking side.
/// * `Ct` - The defending side.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    T,
    #[serde(rename = "CT")]
    Ct,
}

/// One player's recorded state at one tick.
///
/// Structural fields are required by deserialization; a record missing one of
/// them is rejected at load time. `area_name` and `clock_time` are optional
/// because recordings contain frames outside any named area and frames with
/// no running clock, and `inventory` is optional because a player can carry
/// nothing at all.
///
/// # Fields
///
/// * `tick` - The recording tick this snapshot belongs to.
/// * `round_num` - The round the tick falls in.
/// * `player` - The player's name.
/// * `team` - The player's team name.
/// * `side` - Whether the player is attacking or defending this round.
/// * `x`, `y`, `z` - World-space position of the player.
/// * `area_name` - Named map area the player stands in, if any.
/// * `clock_time` - In-round countdown as `"MM:SS"`, if a clock is running.
/// * `inventory` - The items the player carries, in pickup order, if any.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Frame {
    pub tick: i64,
    pub round_num: u32,
    pub player: String,
    pub team: String,
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub clock_time: Option<String>,
    #[serde(default)]
    pub inventory: Option<Vec<InventoryItem>>,
}

impl Frame {
    /// Whether this frame lies in the given named map area.
    ///
    /// A frame recorded outside any named area matches no area.
    pub fn in_area(&self, area: &str) -> bool {
        self.area_name.as_deref() == Some(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_frame() {
        let json = r#"{
            "tick": 128, "round_num": 3, "player": "Player5", "team": "Team2",
            "side": "T", "x": -2000.0, "y": 500.0, "z": 300.0,
            "area_name": "BombsiteB", "clock_time": "1:45",
            "inventory": [{"weapon_class": "Rifle"}]
        }"#;
        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.side, Side::T);
        assert_eq!(frame.round_num, 3);
        assert!(frame.in_area("BombsiteB"));
        assert_eq!(frame.inventory.unwrap().len(), 1);
    }

    #[test]
    fn test_deserialize_sparse_frame() {
        let json = r#"{
            "tick": 1, "round_num": 1, "player": "Player1", "team": "Team1",
            "side": "CT", "x": 0.0, "y": 0.0, "z": 0.0
        }"#;
        let frame: Frame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.side, Side::Ct);
        assert!(frame.area_name.is_none());
        assert!(frame.clock_time.is_none());
        assert!(frame.inventory.is_none());
        assert!(!frame.in_area("BombsiteB"));
    }

    #[test]
    fn test_missing_structural_field_is_rejected() {
        let json = r#"{
            "tick": 1, "round_num": 1, "player": "Player1", "team": "Team1",
            "side": "T", "x": 0.0, "y": 0.0
        }"#;
        assert!(serde_json::from_str::<Frame>(json).is_err());
    }
}
