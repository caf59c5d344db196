use super::*;

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(PROFILE.initials(), "DT");
    let single = Profile { name: "  Ada  ", ..PROFILE };
    assert_eq!(single.initials(), "A");
    let empty = Profile { name: "", ..PROFILE };
    assert_eq!(empty.initials(), "");
}

#[test]
fn avatar_alt_names_the_person() {
    assert_eq!(PROFILE.avatar_alt(), "Dmytro Tatarynov profile picture");
}

#[test]
fn profile_links_are_ordered_and_https() {
    let labels: Vec<_> = PROFILE.links.iter().map(|link| link.label).collect();
    assert_eq!(labels, ["LinkedIn", "GitHub", "LeetCode", "Medium", "Telegram"]);
    assert!(PROFILE.links.iter().all(|link| link.url.starts_with("https://")));
}

#[test]
fn only_first_link_is_contained() {
    assert_eq!(PROFILE.links[0].variant, LinkVariant::Contained);
    assert!(PROFILE.links[1..].iter().all(|link| link.variant == LinkVariant::Outlined));
}

#[test]
fn variant_and_icon_classes_are_distinct() {
    assert_ne!(LinkVariant::Contained.css_class(), LinkVariant::Outlined.css_class());
    assert_eq!(LinkVariant::default(), LinkVariant::Outlined);
    let mut classes: Vec<_> = PROFILE.links.iter().map(|link| link.icon.css_class()).collect();
    classes.dedup();
    assert_eq!(classes.len(), PROFILE.links.len());
    assert!(PROFILE.links.iter().all(|link| !link.icon.glyph().is_empty()));
}
