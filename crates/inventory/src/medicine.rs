use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pharmstock_core::{DomainError, DomainResult, Entity, MedicineId};

/// A stored medicine record.
///
/// Stored records always carry a non-empty `id` and a non-negative quantity;
/// both are enforced at the store/draft boundary, so the entity itself stays
/// a plain data carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: MedicineId,
    pub name: String,
    pub generic_name: String,
    pub strength: String,
    pub manufacturer: String,
    pub category: String,
    pub quantity: u32,
    /// Expiry date. Serialized as ISO `YYYY-MM-DD`; `Ord` on `NaiveDate`
    /// matches chronological order, which is what the sort engine relies on.
    pub expiry_date: NaiveDate,
}

impl Medicine {
    /// Copy this record into an editable form payload.
    pub fn to_draft(&self) -> MedicineDraft {
        MedicineDraft {
            name: self.name.clone(),
            generic_name: self.generic_name.clone(),
            strength: self.strength.clone(),
            manufacturer: self.manufacturer.clone(),
            category: self.category.clone(),
            quantity: i64::from(self.quantity),
            expiry_date: Some(self.expiry_date),
        }
    }
}

impl Entity for Medicine {
    type Id = MedicineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Form payload for a medicine: every attribute except the identifier.
///
/// `quantity` is signed and `expiry_date` optional so that "non-negative
/// quantity" and "expiry date present" are explicit validation outcomes
/// rather than silent coercions of whatever the form submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineDraft {
    pub name: String,
    pub generic_name: String,
    pub strength: String,
    pub manufacturer: String,
    pub category: String,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
}

impl MedicineDraft {
    /// Check the required-field rules without consuming the draft.
    ///
    /// All free-text attributes must be non-empty after trimming, the
    /// quantity non-negative, the expiry date present.
    pub fn validate(&self) -> DomainResult<()> {
        let required = [
            ("name", &self.name),
            ("generic name", &self.generic_name),
            ("strength", &self.strength),
            ("manufacturer", &self.manufacturer),
            ("category", &self.category),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{label} cannot be empty")));
            }
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.expiry_date.is_none() {
            return Err(DomainError::validation("expiry date is required"));
        }
        Ok(())
    }

    /// Validate and convert into a stored record under the given identifier.
    pub fn finalize(self, id: MedicineId) -> DomainResult<Medicine> {
        self.validate()?;
        let expiry_date = self
            .expiry_date
            .ok_or_else(|| DomainError::validation("expiry date is required"))?;
        Ok(Medicine {
            id,
            name: self.name,
            generic_name: self.generic_name,
            strength: self.strength,
            manufacturer: self.manufacturer,
            category: self.category,
            // Checked non-negative by validate().
            quantity: self.quantity as u32,
            expiry_date,
        })
    }
}
