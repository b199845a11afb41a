use pharmstock_inventory::Medicine;

/// Keep the records whose searchable text contains `query`.
///
/// Matching is a case-insensitive substring test over `name`, `generic_name`,
/// `manufacturer` and `category` (a record matches if any of the four does).
/// The empty query matches every record. The query handed in is expected to
/// be the already-debounced value; debouncing is the app layer's concern.
pub fn filter(records: &[Medicine], query: &str) -> Vec<Medicine> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|m| matches(m, &needle))
        .cloned()
        .collect()
}

fn matches(record: &Medicine, needle: &str) -> bool {
    [
        &record.name,
        &record.generic_name,
        &record.manufacturer,
        &record.category,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pharmstock_core::MedicineId;

    fn record(id: &str, name: &str, manufacturer: &str, category: &str) -> Medicine {
        Medicine {
            id: MedicineId::new(id),
            name: name.to_string(),
            generic_name: name.to_string(),
            strength: "10mg".to_string(),
            manufacturer: manufacturer.to_string(),
            category: category.to_string(),
            quantity: 10,
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    fn catalog() -> Vec<Medicine> {
        vec![
            record("1", "Aspirin", "Bayer", "Pain Relief"),
            record("2", "Bisoprolol", "Merck", "Blood Pressure"),
            record("3", "Metformin", "Bristol Myers Squibb", "Diabetes"),
        ]
    }

    #[test]
    fn empty_query_matches_every_record() {
        let records = catalog();
        assert_eq!(filter(&records, ""), records);
    }

    #[test]
    fn match_is_case_insensitive() {
        let records = catalog();
        let hits = filter(&records, "ASP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Aspirin");
    }

    #[test]
    fn any_of_the_four_fields_can_match() {
        let records = catalog();
        // Manufacturer.
        assert_eq!(filter(&records, "merck").len(), 1);
        // Category.
        assert_eq!(filter(&records, "blood").len(), 1);
        // Generic name (same as name in the fixture, mid-word substring).
        assert_eq!(filter(&records, "formin").len(), 1);
    }

    #[test]
    fn strength_is_not_searched() {
        let records = catalog();
        assert!(filter(&records, "10mg").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let records = catalog();
        assert!(filter(&records, "zzz").is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a record is kept iff the query is a case-insensitive
            /// substring of at least one of the four searchable fields.
            #[test]
            fn filter_agrees_with_the_membership_rule(
                query in "[a-zA-Z]{0,6}",
                names in proptest::collection::vec("[a-zA-Z]{1,12}", 0..12),
            ) {
                let records: Vec<Medicine> = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| record(&i.to_string(), name, "Acme", "General"))
                    .collect();

                let kept = filter(&records, &query);
                let needle = query.to_lowercase();
                let expected: Vec<Medicine> = records
                    .iter()
                    .filter(|m| {
                        m.name.to_lowercase().contains(&needle)
                            || m.generic_name.to_lowercase().contains(&needle)
                            || m.manufacturer.to_lowercase().contains(&needle)
                            || m.category.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect();

                prop_assert_eq!(kept, expected);
            }
        }
    }
}
