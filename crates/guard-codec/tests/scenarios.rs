//! End-to-end scenarios through the public API.

use guard_codec::model::guards::{MintLimit, SolPayment, StartDate};
use guard_codec::{
    config_size, deserialize_config, deserialize_guard_set, serialize_config, serialize_guard_set,
    width_of, DecodeError, EncodeError, ErrorKind, Group, GuardConfiguration, GuardKind, GuardSet,
};

const P: [u8; 32] = [
    0x0c, 0x1a, 0x5e, 0x77, 0x91, 0x02, 0x33, 0xfe, 0x4b, 0x8d, 0x60, 0x21, 0xca, 0x19, 0x7f, 0x05,
    0xee, 0x42, 0x13, 0x9a, 0x5c, 0x71, 0x28, 0xd4, 0x0b, 0x66, 0xaf, 0x30, 0x87, 0x4e, 0xb2, 0x01,
];

fn vip_and_ogs() -> GuardConfiguration {
    GuardConfiguration {
        default: GuardSet::new().with(StartDate { date: 1662394820 }),
        groups: Some(vec![
            Group::new("VIP", GuardSet::new().with(SolPayment { lamports: 500, destination: P })),
            Group::new("OGs", GuardSet::new().with(SolPayment { lamports: 1000, destination: P })),
        ]),
    }
}

#[test]
fn two_groups_round_trip() {
    let config = vip_and_ogs();
    let bytes = serialize_config(&config).unwrap();

    assert_eq!(bytes.len(), 8 + 8 + 4 + 6 + 8 + 40 + 6 + 8 + 40);
    assert_eq!(bytes.len(), config_size(&config));
    assert_eq!(&bytes[..8], &[0x08, 0, 0, 0, 0, 0, 0, 0]);

    let decoded = deserialize_config(&bytes).unwrap();
    assert_eq!(decoded, config);
    assert_eq!(decoded.groups()[0].label, "VIP");
    assert_eq!(decoded.groups()[1].label, "OGs");
    assert_eq!(decoded.groups()[1].guards.sol_payment.map(|p| p.lamports), Some(1000));

    // re-encoding the decoded value gives the same bytes
    assert_eq!(serialize_config(&decoded).unwrap(), bytes);
}

#[test]
fn empty_guard_set_is_eight_zero_bytes() {
    assert_eq!(serialize_guard_set(&GuardSet::new()).unwrap(), vec![0u8; 8]);
}

#[test]
fn each_kind_alone() {
    for kind in GuardKind::ALL {
        // a zeroed payload of the right width decodes for every kind
        let mut bytes = kind.mask_bit().to_le_bytes().to_vec();
        bytes.resize(8 + width_of(kind) as usize, 0);

        let (set, consumed) = deserialize_guard_set(&bytes, 0).unwrap();
        assert_eq!(consumed, bytes.len(), "{kind}");
        assert_eq!(set.enabled_kinds().collect::<Vec<_>>(), vec![kind]);
        assert_eq!(serialize_guard_set(&set).unwrap(), bytes, "{kind}");
    }
}

#[test]
fn empty_groups_normalize_to_none() {
    let config = GuardConfiguration {
        default: GuardSet::new(),
        groups: Some(Vec::new()),
    };
    let decoded = deserialize_config(&serialize_config(&config).unwrap()).unwrap();
    assert_eq!(decoded.groups, None);
    assert_eq!(decoded, config.normalized());
}

#[test]
fn label_overflow_is_an_input_error() {
    let config = GuardConfiguration {
        default: GuardSet::new(),
        groups: Some(vec![Group::new("presale", GuardSet::new())]),
    };
    let err = serialize_config(&config).unwrap_err();
    assert!(matches!(err, EncodeError::LabelTooLong { len: 7, max: 6, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn truncation_is_a_data_error() {
    let bytes = serialize_config(&vip_and_ogs()).unwrap();
    let cut_points = [
        3,               // inside the default mask
        12,              // inside startDate
        18,              // inside the group count
        22,              // inside the first label
        30,              // inside the first group's mask
        60,              // inside the first solPayment
        bytes.len() - 1, // last byte of the second solPayment
    ];
    for cut in cut_points {
        let err = deserialize_config(&bytes[..cut]).unwrap_err();
        assert!(matches!(err, DecodeError::TruncatedInput { .. }), "cut at {cut}");
        assert_eq!(err.kind(), ErrorKind::CorruptData);
    }
}

#[test]
fn duplicate_mint_limit_ids_round_trip() {
    let config = GuardConfiguration {
        default: GuardSet::new(),
        groups: Some(vec![
            Group::new("early", GuardSet::new().with(MintLimit { id: 7, limit: 1 })),
            Group::new("late", GuardSet::new().with(MintLimit { id: 7, limit: 2 })),
        ]),
    };
    let bytes = serialize_config(&config).unwrap();
    assert_eq!(deserialize_config(&bytes).unwrap(), config);
}
