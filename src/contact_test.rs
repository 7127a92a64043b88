use super::*;

#[test]
fn classifies_known_channels() {
    assert_eq!(LinkKind::classify("mailto:hello@example.com"), LinkKind::Email);
    assert_eq!(LinkKind::classify("https://github.com/someone"), LinkKind::Github);
    assert_eq!(LinkKind::classify("https://linkedin.com/in/someone"), LinkKind::Linkedin);
    assert_eq!(LinkKind::classify("https://twitter.com/someone"), LinkKind::Twitter);
    assert_eq!(LinkKind::classify("https://example.com"), LinkKind::Other);
}

#[test]
fn earlier_channels_take_precedence() {
    assert_eq!(LinkKind::classify("mailto:github@example.com"), LinkKind::Email);
    assert_eq!(LinkKind::classify("https://github.com/linkedin"), LinkKind::Github);
}

#[test]
fn path_segments_do_not_change_the_channel() {
    assert_eq!(LinkKind::classify("https://linkedin.com/in/github-fan"), LinkKind::Linkedin);
    assert_eq!(LinkKind::classify("https://example.com/twitter"), LinkKind::Other);
}

#[test]
fn display_matches_log_label() {
    assert_eq!(LinkKind::Linkedin.to_string(), "linkedin");
    assert_eq!(format!("contact link clicked: {}", LinkKind::Email), "contact link clicked: email");
}
