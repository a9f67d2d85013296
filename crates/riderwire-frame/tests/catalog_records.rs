//! Size and round-trip contract for every record registered in the catalog.

use proptest::prelude::*;
use riderwire_frame::{catalog, decode_payload, Variant};
use riderwire_message::DataType;

fn registered() -> Vec<(DataType, Variant)> {
    catalog::entries()
        .iter()
        .flat_map(|entry| {
            entry
                .variants
                .iter()
                .map(move |variant| (entry.data_type, *variant))
        })
        .collect()
}

#[test]
fn every_variant_decodes_zeroed_bytes() {
    for (data_type, variant) in registered() {
        let bytes = vec![0u8; variant.size];
        let payload = (variant.decode)(&bytes)
            .unwrap_or_else(|err| panic!("{}: {err}", variant.name));
        assert_eq!(payload.name(), variant.name);
        assert_eq!(payload.data_type(), data_type);
        assert_eq!(payload.size(), variant.size, "{}", variant.name);
        assert_eq!(payload.encode().as_ref(), bytes.as_slice(), "{}", variant.name);
    }
}

#[test]
fn catalog_dispatch_picks_each_variant_by_length() {
    for (data_type, variant) in registered() {
        let bytes = vec![0u8; variant.size];
        let payload = decode_payload(data_type, &bytes).unwrap();
        assert_eq!(payload.name(), variant.name);
    }
}

fn variant_with_bytes() -> impl Strategy<Value = (DataType, Variant, Vec<u8>)> {
    prop::sample::select(registered()).prop_flat_map(|(data_type, variant)| {
        (
            Just(data_type),
            Just(variant),
            prop::collection::vec(any::<u8>(), variant.size),
        )
    })
}

proptest! {
    #[test]
    fn decoded_records_reencode_identically((data_type, variant, bytes) in variant_with_bytes()) {
        match (variant.decode)(&bytes) {
            Ok(payload) => {
                prop_assert_eq!(payload.data_type(), data_type);
                prop_assert_eq!(payload.size(), variant.size);
                let encoded = payload.encode();
                prop_assert_eq!(encoded.as_ref(), bytes.as_slice());
            }
            Err(err) => prop_assert!(err.is_unknown_tag(), "{}: {}", variant.name, err),
        }
    }

    #[test]
    fn wrong_length_never_decodes(
        (_, variant, mut bytes) in variant_with_bytes(),
        extra in any::<u8>(),
    ) {
        bytes.push(extra);
        let result = (variant.decode)(&bytes);
        prop_assert!(matches!(result, Err(ref err) if err.is_size_mismatch()));
    }
}
