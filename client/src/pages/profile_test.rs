use super::*;

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("ada lovelace byron"), "AL");
    assert_eq!(initials("Grace"), "G");
}

#[test]
fn blank_name_gets_placeholder() {
    assert_eq!(initials("   "), "?");
}
