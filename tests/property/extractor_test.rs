//! Property-based tests for the URL metadata extractor.

use linkhub::services::url_metadata::extract;
use proptest::prelude::*;

/// Strategy for hyphen-separated lowercase product slugs.
fn arb_slug() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9]{1,8}", 1..5).prop_map(|words| words.join("-"))
}

fn arb_host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{2,12}".prop_map(|h| format!("{}.example.com", h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // The slug before a /p or /buy marker always wins, and the description
    // is its humanized form: hyphens to spaces, first letter uppercased.
    #[test]
    fn slug_before_terminator_is_extracted(
        host in arb_host(),
        slug in arb_slug(),
        terminator in prop_oneof![Just("p"), Just("buy")],
        trailing in proptest::option::of("[a-z0-9]{1,10}"),
    ) {
        let url = match &trailing {
            Some(t) => format!("https://{}/{}/{}/{}", host, slug, terminator, t),
            None => format!("https://{}/{}/{}", host, slug, terminator),
        };

        let meta = extract(&url).expect("extract should succeed");
        prop_assert_eq!(&meta.slug, &slug);

        let expected = {
            let phrase = slug.replace('-', " ");
            let mut chars = phrase.chars();
            let first = chars.next().unwrap();
            first.to_uppercase().collect::<String>() + chars.as_str()
        };
        prop_assert_eq!(&meta.description, &expected);
    }

    // Without a marker segment, the last segment is the slug.
    #[test]
    fn last_segment_is_the_fallback(
        host in arb_host(),
        prefix in proptest::collection::vec("[a-z]{2,8}", 0..3),
        slug in arb_slug(),
    ) {
        // Generated segments must not collide with the marker words
        prop_assume!(slug != "p" && slug != "buy");
        prop_assume!(!prefix.iter().any(|s| s == "buy"));

        let mut path = prefix.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&slug);

        let url = format!("https://{}/{}", host, path);
        let meta = extract(&url).expect("extract should succeed");
        prop_assert_eq!(&meta.slug, &slug);
    }

    // The description never contains hyphens and never starts lowercase.
    #[test]
    fn description_shape_invariants(host in arb_host(), slug in arb_slug()) {
        let url = format!("https://{}/{}", host, slug);
        let meta = extract(&url).expect("extract should succeed");

        prop_assert!(!meta.description.contains('-'));
        let first = meta.description.chars().next().unwrap();
        prop_assert!(!first.is_lowercase() || !first.is_alphabetic());
    }

    // Query strings and fragments never change the result.
    #[test]
    fn query_and_fragment_are_irrelevant(
        host in arb_host(),
        slug in arb_slug(),
        query in "[a-z]{1,6}=[a-z0-9]{1,6}",
    ) {
        let plain = extract(&format!("https://{}/{}", host, slug)).unwrap();
        let noisy = extract(&format!("https://{}/{}?{}#top", host, slug, query)).unwrap();
        prop_assert_eq!(plain, noisy);
    }
}
