//! Unit tests for the URL metadata extractor heuristic.

use linkhub::services::url_metadata::{extract, UrlMetadata};
use linkhub::types::errors::ExtractError;
use rstest::rstest;

/// The slug is the segment before `/p` or `/buy`, else the last segment;
/// hyphens become spaces and the first letter is uppercased.
#[rstest]
#[case(
    "https://shop.example.com/apple-iphone-15-pro/p",
    "apple-iphone-15-pro",
    "Apple iphone 15 pro"
)]
#[case(
    "https://shop.example.com/apple-iphone-15-pro/p/12345",
    "apple-iphone-15-pro",
    "Apple iphone 15 pro"
)]
#[case(
    "https://store.example.in/sony-wh-1000xm5/buy",
    "sony-wh-1000xm5",
    "Sony wh 1000xm5"
)]
#[case(
    "https://example.com/shoes/nike-air-max",
    "nike-air-max",
    "Nike air max"
)]
#[case("https://example.com/single", "single", "Single")]
#[case("https://example.com/deeply/nested/path/coffee-maker", "coffee-maker", "Coffee maker")]
fn extracts_expected_slug_and_description(
    #[case] url: &str,
    #[case] slug: &str,
    #[case] description: &str,
) {
    let meta = extract(url).unwrap();
    assert_eq!(
        meta,
        UrlMetadata {
            slug: slug.to_string(),
            description: description.to_string(),
        }
    );
}

#[rstest]
#[case("not a url")]
#[case("just-a-slug")]
#[case("")]
fn unparseable_input_is_invalid_url(#[case] input: &str) {
    assert!(matches!(extract(input), Err(ExtractError::InvalidUrl(_))));
}

#[test]
fn url_without_path_has_no_slug() {
    assert!(matches!(
        extract("https://example.com"),
        Err(ExtractError::NoSlug)
    ));
    assert!(matches!(
        extract("https://example.com/"),
        Err(ExtractError::NoSlug)
    ));
}

#[test]
fn terminator_as_first_segment_falls_back_to_last() {
    let meta = extract("https://example.com/p/usb-hub").unwrap();
    assert_eq!(meta.slug, "usb-hub");
    assert_eq!(meta.description, "Usb hub");
}

#[test]
fn query_and_fragment_are_ignored() {
    let meta = extract("https://example.com/gaming-mouse?ref=affiliate#reviews").unwrap();
    assert_eq!(meta.slug, "gaming-mouse");
}

#[test]
fn description_never_includes_the_host() {
    let meta = extract("https://brand-name.example.com/plain-mug").unwrap();
    assert_eq!(meta.description, "Plain mug");
}
