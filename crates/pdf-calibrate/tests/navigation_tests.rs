use pdf_calibrate::*;

#[test]
fn test_navigation_is_noop_at_boundaries() {
    let mut nav = PageNavigator::new(3);
    assert!(!nav.previous());
    assert_eq!(nav.current(), 0);

    assert!(nav.next());
    assert!(nav.next());
    assert_eq!(nav.current(), 2);
    assert!(!nav.next());
    assert_eq!(nav.current(), 2);

    assert!(nav.previous());
    assert_eq!(nav.current(), 1);
}

#[test]
fn test_empty_document() {
    let mut nav = PageNavigator::new(0);
    assert!(!nav.can_go_back());
    assert!(!nav.can_go_forward());
    assert!(!nav.next());
    assert_eq!(nav.label(), "No pages");
}

#[test]
fn test_go_to() {
    let mut nav = PageNavigator::new(10);
    assert!(nav.go_to(7));
    assert_eq!(nav.current(), 7);
    assert!(!nav.go_to(10));
    assert!(!nav.go_to(7));
    assert_eq!(nav.current(), 7);
    assert_eq!(nav.label(), "Page 8 of 10");
}
