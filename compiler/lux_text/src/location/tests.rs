use super::*;

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Location::new(1, 1).to_string(), "1:1");
    assert_eq!(Location::new(12, 40).to_string(), "12:40");
}

#[test]
fn default_is_start() {
    assert_eq!(Location::default(), Location::START);
    assert_eq!(Location::START, Location::new(1, 1));
}

#[test]
fn advance_moves_column() {
    let mut loc = Location::START;
    loc.advance('a');
    loc.advance('\u{1F680}');
    assert_eq!(loc, Location::new(1, 3));
}

#[test]
fn advance_newline_resets_column() {
    let mut loc = Location::new(3, 9);
    loc.advance('\n');
    assert_eq!(loc, Location::new(4, 1));
}

#[test]
fn carriage_return_is_an_ordinary_column() {
    let mut loc = Location::START;
    loc.advance('\r');
    assert_eq!(loc, Location::new(1, 2));
}

#[test]
fn ordering_is_line_then_column() {
    assert!(Location::new(1, 9) < Location::new(2, 1));
    assert!(Location::new(2, 1) < Location::new(2, 2));
}
