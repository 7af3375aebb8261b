use probe_core::rules::{
    default_rule_registry, Rule, RuleError, DEFAULT_HEADER, DEFAULT_MASK,
};

/// Byte sequences covering the corners of the rules' valid domain: empty
/// input, single bytes, palindromes, and a buffer long enough to wrap the
/// positional offset.
fn sample_domains() -> Vec<Vec<u8>> {
    let mut long = Vec::with_capacity(300);
    for i in 0..300u32 {
        long.push((i % 251) as u8);
    }
    vec![
        vec![],
        vec![0x00],
        vec![0xff],
        vec![0xff, 0x00],
        vec![0xd8, 0xab, 0x19, 0xd5],
        vec![0xaa, 0xaa, 0xaa],
        long,
    ]
}

#[test]
fn every_registered_rule_round_trips_its_domain() {
    let registry = default_rule_registry();
    for rule in registry.iter() {
        for bytes in sample_domains() {
            let encoded = rule.encode(&bytes);
            let decoded = rule.decode(&encoded)
                .unwrap_or_else(|err| panic!("{} failed to decode own output: {err}", rule.name()));
            assert_eq!(decoded, bytes, "round-trip mismatch for rule {}", rule.name());
        }
    }
}

#[test]
fn byte_swap_encodes_reversed_order() {
    assert_eq!(Rule::ByteSwap.encode(&[0xff, 0x00]), "00ff");
}

#[test]
fn nibble_swap_exchanges_nibbles() {
    assert_eq!(Rule::NibbleSwap.encode(&[0xab, 0x1f]), "baf1");
}

#[test]
fn xor_mask_applies_constant() {
    let rule = Rule::XorMask { mask: 0xd8 };
    assert_eq!(rule.encode(&[0xff, 0x00]), "27d8");
}

#[test]
fn offset_cipher_matches_reference_transform() {
    // Position 0: ff ^ d8 = 27, + 0 = 27. Position 1: 00 ^ d8 = d8, + 1 = d9.
    let rule = Rule::OffsetCipher { header: DEFAULT_HEADER.to_string(), mask: DEFAULT_MASK };
    assert_eq!(rule.encode(&[0xff, 0x00]), format!("{DEFAULT_HEADER}27d9"));
}

#[test]
fn offset_cipher_rejects_missing_header() {
    let rule = Rule::OffsetCipher { header: DEFAULT_HEADER.to_string(), mask: DEFAULT_MASK };
    let err = rule.decode("27d9").expect_err("header check");
    assert_eq!(err, RuleError::MissingHeader { rule: "offset-cipher" });
}

#[test]
fn rules_reject_non_hex_payload() {
    let err = Rule::ByteSwap.decode("zz").expect_err("payload check");
    assert!(matches!(err, RuleError::BadPayload(_)));
}

#[test]
fn registry_preserves_declaration_order_and_resolves_names() {
    let registry = default_rule_registry();
    assert_eq!(
        registry.names(),
        vec!["identity", "byte-swap", "nibble-swap", "xor-mask", "offset-cipher"]
    );
    assert!(registry.get("byte-swap").is_some());
    assert!(registry.get("no-such-rule").is_none());
}

#[test]
fn rule_serialization_round_trips_through_tagged_form() {
    let rule = Rule::XorMask { mask: 0x5a };
    let json = serde_json::to_string(&rule).expect("serialize");
    assert!(json.contains("xor-mask"), "unexpected tag: {json}");
    let back: Rule = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, rule);
}
