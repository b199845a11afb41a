use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use pharmstock_inventory::Medicine;

/// Attribute a medicine collection can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    Name,
    GenericName,
    Strength,
    Manufacturer,
    Category,
    Quantity,
    ExpiryDate,
}

/// Sort direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The active sort criterion: key + direction, with the column-header toggle
/// rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    /// Name ascending, the initial table state.
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            order: SortOrder::Asc,
        }
    }
}

impl SortSpec {
    /// Apply a sort request for `key`: requesting the active key flips the
    /// direction, requesting a new key selects it ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.flipped();
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }
}

/// Return the records ordered by `spec`, leaving the input untouched.
///
/// Text attributes (including the id) compare lexicographically, `quantity`
/// numerically, `expiry_date` chronologically. The sort is stable: records
/// with equal keys keep their relative order from the input, in both
/// directions.
pub fn sort(records: &[Medicine], spec: SortSpec) -> Vec<Medicine> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| {
        let by_key = compare_by_key(a, b, spec.key);
        match spec.order {
            SortOrder::Asc => by_key,
            // Reversing the comparator (not the output) keeps ties stable.
            SortOrder::Desc => by_key.reverse(),
        }
    });
    ordered
}

fn compare_by_key(a: &Medicine, b: &Medicine, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::GenericName => a.generic_name.cmp(&b.generic_name),
        SortKey::Strength => a.strength.cmp(&b.strength),
        SortKey::Manufacturer => a.manufacturer.cmp(&b.manufacturer),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::ExpiryDate => a.expiry_date.cmp(&b.expiry_date),
    }
}
