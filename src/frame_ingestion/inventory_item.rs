use serde::Deserialize;

/// One carried item in a frame's inventory.
///
/// The raw records carry more attributes per item (ammunition, slot, and so
/// on); only the weapon class is consumed by the analysis, so the rest is
/// ignored on deserialization.
///
/// # Fields
///
/// * `weapon_class` - The item's weapon-class label, e.g. `"Rifle"`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub weapon_class: String,
}
