use booklet_impose::*;

#[test]
fn test_statistics_exact_multiple() {
    let stats = calculate_statistics(8).unwrap();
    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.padded_pages, 8);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.sheets, 2);
}

#[test]
fn test_statistics_with_padding() {
    let stats = calculate_statistics(5).unwrap();
    assert_eq!(stats.padded_pages, 8);
    assert_eq!(stats.blank_pages_added, 3);
    assert_eq!(stats.sheets, 2);
}

#[test]
fn test_statistics_single_page() {
    let stats = calculate_statistics(1).unwrap();
    assert_eq!(stats.padded_pages, 4);
    assert_eq!(stats.blank_pages_added, 3);
    assert_eq!(stats.sheets, 1);
}

#[test]
fn test_statistics_empty_document() {
    assert!(matches!(
        calculate_statistics(0),
        Err(BookletError::InvalidDocument(_))
    ));
}

#[test]
fn test_statistics_agree_with_plan() {
    for page_count in [1, 4, 5, 9, 16, 31] {
        let stats = calculate_statistics(page_count).unwrap();
        let plan = impose_booklet(page_count, PageSize::LETTER).unwrap();
        assert_eq!(stats.padded_pages, plan.len());
        assert_eq!(stats.blank_pages_added, plan.blank_count());
        assert_eq!(stats.sheets, plan.sheet_count());
    }
}
