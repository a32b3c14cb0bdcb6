use codec::{CodePageRegistry, SHIFT_SENTINEL};
use proptest::prelude::*;

const PAGE_ZERO: &str = "abcdefghijklmnopqrstuvwxyz ";
const PAGE_ONE: &str = "0123456789";

fn registry() -> CodePageRegistry {
    let mut registry = CodePageRegistry::new();
    registry.add_page(PAGE_ZERO).unwrap();
    registry.add_page(PAGE_ONE).unwrap();
    registry
}

fn mappable_text() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = PAGE_ZERO.chars().chain(PAGE_ONE.chars()).collect();
    proptest::collection::vec(proptest::sample::select(alphabet), 0..128)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_roundtrip_mappable_text(text in mappable_text()) {
        let registry = registry();
        let encoded = registry.encode(&text);
        prop_assert!(encoded.is_lossless());

        let decoded = registry.decode(&encoded.units);
        prop_assert!(decoded.is_lossless());
        prop_assert_eq!(decoded.text, text);
    }

    #[test]
    fn prop_shift_framing(text in mappable_text()) {
        let registry = registry();
        let units = registry.encode(&text).units;

        // Walk the frame structure: each payload is preceded by exactly the
        // sentinel count of the page that holds its character.
        let mut chars = text.chars();
        let mut run = 0usize;
        for &unit in &units {
            if unit == SHIFT_SENTINEL {
                run += 1;
                continue;
            }
            let c = chars.next().expect("one payload unit per character");
            let expected_page = usize::from(PAGE_ONE.contains(c));
            prop_assert_eq!(run, expected_page);
            run = 0;
        }
        prop_assert_eq!(chars.next(), None);
        prop_assert_eq!(run, 0, "no trailing sentinels for mappable text");
    }

    #[test]
    fn prop_unmappable_chars_are_dropped(text in mappable_text(), position in 0usize..128) {
        let registry = registry();
        let mut chars: Vec<char> = text.chars().collect();
        let position = position.min(chars.len());
        chars.insert(position, '€');
        let lossy: String = chars.iter().collect();

        let encoded = registry.encode(&lossy);
        prop_assert_eq!(encoded.skipped.len(), 1);
        prop_assert_eq!(encoded.skipped[0].ch, '€');
        prop_assert_eq!(encoded.skipped[0].position, position);
        prop_assert_eq!(registry.decode(&encoded.units).text, text);
    }

    #[test]
    fn prop_decode_never_panics(units in proptest::collection::vec(any::<u16>(), 0..256)) {
        let registry = registry();
        let decoded = registry.decode(&units);
        // Whatever comes out decodes only registered characters.
        for c in decoded.text.chars() {
            prop_assert!(PAGE_ZERO.contains(c) || PAGE_ONE.contains(c));
        }
    }
}
