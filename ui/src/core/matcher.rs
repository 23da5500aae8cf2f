//! Exact-key lookup of the record matching the current selection.

use std::collections::HashMap;

use super::dataset::Record;
use super::selection::SelectionState;

/// First record (in load order) whose key fields equal the selected codes for
/// every attribute. Comparison is numeric, so `3` and `3.0` match; text or
/// missing key fields never match.
pub fn find_match<'a>(
    records: &'a [Record],
    selection: &SelectionState,
    attributes: &[String],
) -> Option<&'a Record> {
    records
        .iter()
        .find(|record| key_matches(record, selection, attributes))
}

fn key_matches(record: &Record, selection: &SelectionState, attributes: &[String]) -> bool {
    attributes.iter().all(|attr| {
        match (record.number(attr), selection.code(attr)) {
            (Some(stored), Some(code)) => stored == f64::from(code),
            _ => false,
        }
    })
}

/// Key combinations shared by more than one record, with their row indices.
///
/// Only fully numeric keys are considered; a row with a text key can never be
/// matched and so never shadows another.
pub fn duplicate_keys(records: &[Record], attributes: &[String]) -> Vec<(Vec<f64>, Vec<usize>)> {
    let mut seen: HashMap<Vec<u64>, Vec<usize>> = HashMap::new();
    let mut order = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let Some(key) = attributes
            .iter()
            .map(|attr| record.number(attr).map(f64::to_bits))
            .collect::<Option<Vec<u64>>>()
        else {
            continue;
        };
        let rows = seen.entry(key.clone()).or_default();
        if rows.is_empty() {
            order.push(key);
        }
        rows.push(index);
    }

    order
        .into_iter()
        .filter_map(|key| {
            let rows = seen.remove(&key)?;
            (rows.len() > 1).then(|| (key.into_iter().map(f64::from_bits).collect(), rows))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;

    fn attrs() -> Vec<String> {
        vec!["a".to_string(), "b".to_string()]
    }

    fn selection(a: u32, b: u32) -> SelectionState {
        let mut state = SelectionState::default();
        state.set("a", a);
        state.set("b", b);
        state
    }

    #[test]
    fn matches_on_every_attribute() {
        let data = Dataset::parse("a,b,v\n1,1,x\n1,2,y\n2,2,z");
        let found = find_match(data.records(), &selection(1, 2), &attrs()).unwrap();
        assert_eq!(found.get("v").map(ToString::to_string).as_deref(), Some("y"));
    }

    #[test]
    fn partial_match_is_no_match() {
        let data = Dataset::parse("a,b\n1,1\n2,2");
        assert!(find_match(data.records(), &selection(1, 2), &attrs()).is_none());
    }

    #[test]
    fn empty_record_set_is_no_match() {
        assert!(find_match(&[], &selection(1, 1), &attrs()).is_none());
    }

    #[test]
    fn decimal_spelling_matches_integer_code() {
        let data = Dataset::parse("a,b\n1.0,2.00");
        assert!(find_match(data.records(), &selection(1, 2), &attrs()).is_some());
    }

    #[test]
    fn text_or_missing_key_never_matches() {
        let data = Dataset::parse("a,b\none,2\n1");
        assert!(find_match(data.records(), &selection(1, 2), &attrs()).is_none());
    }

    #[test]
    fn first_of_duplicates_wins() {
        let data = Dataset::parse("a,b,v\n3,3,first\n3,3,second");
        let found = find_match(data.records(), &selection(3, 3), &attrs()).unwrap();
        assert_eq!(found.get("v").map(ToString::to_string).as_deref(), Some("first"));
    }

    #[test]
    fn returned_record_keys_equal_selection() {
        let data = Dataset::parse("a,b\n1,1\n1,2\n2,1\n2,2\n3,4");
        for a in 1..=4 {
            for b in 1..=4 {
                let state = selection(a, b);
                if let Some(found) = find_match(data.records(), &state, &attrs()) {
                    assert_eq!(found.number("a"), Some(f64::from(a)));
                    assert_eq!(found.number("b"), Some(f64::from(b)));
                }
            }
        }
    }

    #[test]
    fn duplicate_keys_are_reported_once() {
        let data = Dataset::parse("a,b\n1,1\n2,2\n1,1\n2,x\n1,1.0");
        let dups = duplicate_keys(data.records(), &attrs());
        assert_eq!(dups, vec![(vec![1.0, 1.0], vec![0, 2, 4])]);
    }

    #[test]
    fn unique_keys_report_nothing() {
        let data = Dataset::parse("a,b\n1,1\n1,2");
        assert!(duplicate_keys(data.records(), &attrs()).is_empty());
    }
}
