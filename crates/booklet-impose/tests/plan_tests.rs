use booklet_impose::*;

/// Pull the source index out of a copy entry, panicking on blanks.
fn source_index(entry: &Placement) -> usize {
    match entry {
        Placement::CopySource { index } => *index,
        Placement::Blank { .. } => panic!("expected a page copy, got a blank"),
    }
}

#[test]
fn test_plan_length_is_padded_count() {
    for page_count in 1..=40 {
        let plan = impose_booklet(page_count, PageSize::LETTER).unwrap();
        let expected = ((page_count + 3) / 4) * 4;
        assert_eq!(plan.len(), expected, "wrong length for {} pages", page_count);
        assert_eq!(plan.sheet_count(), expected / 4);
    }
}

#[test]
fn test_every_source_page_placed_exactly_once() {
    for page_count in [1, 2, 3, 4, 5, 7, 8, 13, 16, 33] {
        let plan = impose_booklet(page_count, PageSize::LETTER).unwrap();

        let mut indices: Vec<usize> = plan
            .entries()
            .iter()
            .filter_map(|entry| match entry {
                Placement::CopySource { index } => Some(*index),
                Placement::Blank { .. } => None,
            })
            .collect();
        indices.sort_unstable();

        let expected: Vec<usize> = (0..page_count).collect();
        assert_eq!(indices, expected, "bad coverage for {} pages", page_count);
        assert_eq!(plan.blank_count(), plan.len() - page_count);
    }
}

#[test]
fn test_plans_are_deterministic() {
    let size = PageSize::new(300.0, 500.0);
    let first = impose_booklet(11, size).unwrap();
    let second = impose_booklet(11, size).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_document_is_rejected() {
    match impose_booklet(0, PageSize::LETTER) {
        Err(BookletError::InvalidDocument(_)) => {}
        other => panic!("Expected InvalidDocument, got {:?}", other),
    }
}

/// Simulate duplex printing and a center fold, then check that the
/// collated booklet reads in ascending order.
///
/// After folding, the reading order visits each sheet's front-right
/// then back-left from the outermost sheet inward, then back out
/// through back-right and front-left.
#[test]
fn test_folding_recovers_reading_order() {
    for page_count in [4, 8, 12, 20] {
        let plan = impose_booklet(page_count, PageSize::LETTER).unwrap();
        let entries = plan.entries();
        let sheets = plan.sheet_count();

        let mut reading_order = Vec::with_capacity(plan.len());
        for sheet in 0..sheets {
            reading_order.push(source_index(&entries[4 * sheet + 1])); // front right
            reading_order.push(source_index(&entries[4 * sheet + 2])); // back left
        }
        for sheet in (0..sheets).rev() {
            reading_order.push(source_index(&entries[4 * sheet + 3])); // back right
            reading_order.push(source_index(&entries[4 * sheet])); // front left
        }

        let expected: Vec<usize> = (0..page_count).collect();
        assert_eq!(
            reading_order, expected,
            "fold does not restore order for {} pages",
            page_count
        );
    }
}
