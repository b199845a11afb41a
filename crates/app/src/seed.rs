//! The reference starting catalog.
//!
//! Seeding is configuration, not core logic: the demo binary and the
//! integration tests load this fixed ten-record collection before first
//! render.

use chrono::NaiveDate;
use pharmstock_core::{DomainError, DomainResult, MedicineId};
use pharmstock_inventory::Medicine;

/// The fixed starting collection of the reference deployment.
pub fn catalog() -> DomainResult<Vec<Medicine>> {
    Ok(vec![
        med("NDC-12345-001", "Atorvastatin", "Atorvastatin", "20mg", "Pfizer", "Cholesterol", 150, (2025, 12, 31))?,
        med("NDC-54321-002", "Lisinopril", "Lisinopril", "10mg", "Merck", "Blood Pressure", 200, (2026, 6, 30))?,
        med("NDC-67890-003", "Metformin", "Metformin", "500mg", "Bristol Myers Squibb", "Diabetes", 80, (2024, 11, 30))?,
        med("NDC-09876-004", "Amoxicillin", "Amoxicillin", "250mg", "GSK", "Antibiotic", 120, (2025, 8, 15))?,
        med("NDC-11223-005", "Albuterol", "Albuterol", "90mcg", "Teva", "Asthma", 50, (2024, 9, 1))?,
        med("NDC-44556-006", "Ibuprofen", "Ibuprofen", "200mg", "Johnson & Johnson", "Pain Relief", 300, (2027, 1, 20))?,
        med("NDC-77889-007", "Omeprazole", "Omeprazole", "20mg", "AstraZeneca", "Acid Reflux", 95, (2025, 5, 10))?,
        med("NDC-33221-008", "Losartan", "Losartan", "50mg", "Organon", "Blood Pressure", 110, (2026, 2, 28))?,
        med("NDC-66554-009", "Gabapentin", "Gabapentin", "300mg", "Pfizer", "Neuropathic Pain", 70, (2024, 10, 31))?,
        med("NDC-99887-010", "Sertraline", "Sertraline", "50mg", "Viatris", "Antidepressant", 60, (2025, 7, 22))?,
    ])
}

#[allow(clippy::too_many_arguments)]
fn med(
    id: &str,
    name: &str,
    generic_name: &str,
    strength: &str,
    manufacturer: &str,
    category: &str,
    quantity: u32,
    expiry: (i32, u32, u32),
) -> DomainResult<Medicine> {
    let (year, month, day) = expiry;
    let expiry_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::validation(format!(
            "invalid expiry date {year:04}-{month:02}-{day:02} for seed record {id}"
        ))
    })?;
    Ok(Medicine {
        id: MedicineId::new(id),
        name: name.to_string(),
        generic_name: generic_name.to_string(),
        strength: strength.to_string(),
        manufacturer: manufacturer.to_string(),
        category: category.to_string(),
        quantity,
        expiry_date,
    })
}
