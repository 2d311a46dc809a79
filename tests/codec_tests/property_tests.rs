//! Property Tests
//!
//! Randomized checks of the codec's core guarantees:
//! - decode(encode(v)) == v at every nesting depth
//! - every strict prefix of a valid buffer fails as truncated
//! - hex dumps parse back to the exact buffer

use std::collections::{LinkedList, VecDeque};

use fieldcodec::samples::{Branch, Company, Department, Employee, Leaf, Nested, Twig};
use fieldcodec::{hex_dump, parse_hex_dump, Codec};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn employee() -> impl Strategy<Value = Employee> {
    (any::<u32>(), ".{0,12}", any::<u8>(), -1.0e6f32..1.0e6f32).prop_map(
        |(id, name, age, salary)| Employee {
            id,
            name,
            age,
            salary,
        },
    )
}

fn department() -> impl Strategy<Value = Department> {
    (any::<u32>(), ".{0,12}", vec(employee(), 0..4)).prop_map(|(id, name, employees)| {
        Department {
            id,
            name,
            employees,
        }
    })
}

fn company() -> impl Strategy<Value = Company> {
    // Empty company names are rejected on encode
    (".{1,16}", vec(department(), 0..4)).prop_map(|(name, departments)| Company {
        name,
        departments: VecDeque::from(departments),
    })
}

fn leaf() -> impl Strategy<Value = Leaf> {
    (any::<u64>(), ".{0,8}").prop_map(|(value, label)| Leaf { value, label })
}

fn twig() -> impl Strategy<Value = Twig> {
    (any::<u32>(), ".{0,8}", vec(leaf(), 0..3)).prop_map(|(value, label, leaves)| Twig {
        value,
        label,
        leaves,
    })
}

fn branch() -> impl Strategy<Value = Branch> {
    (any::<u16>(), ".{0,8}", vec(twig(), 0..3)).prop_map(|(value, label, twigs)| Branch {
        value,
        label,
        twigs,
    })
}

fn nested() -> impl Strategy<Value = Nested> {
    (
        (any::<u16>(), any::<u32>(), any::<u8>(), any::<u64>()),
        (-1.0e9f32..1.0e9f32, -1.0e300f64..1.0e300f64),
        ".{0,16}",
        vec(branch(), 0..3),
        vec(twig(), 0..3),
    )
        .prop_map(
            |((small, medium, tiny, large), (single, double), label, branches, twigs)| Nested {
                small,
                medium,
                tiny,
                single,
                double,
                large,
                label,
                branches,
                loose_twigs: twigs.into_iter().collect::<LinkedList<_>>(),
            },
        )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_company_round_trip(mut original in company()) {
        let codec = Codec::default();
        let bytes = codec.encode(&mut original).unwrap();
        let decoded: Company = codec.decode_new(&bytes).unwrap();
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn prop_nested_round_trip(mut original in nested()) {
        let codec = Codec::default();
        let bytes = codec.encode(&mut original).unwrap();
        let decoded: Nested = codec.decode_new(&bytes).unwrap();
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn prop_prefix_is_truncated(mut original in nested(), cut in any::<prop::sample::Index>()) {
        let codec = Codec::default();
        let bytes = codec.encode(&mut original).unwrap();
        let cut = cut.index(bytes.len());

        let err = codec.decode_new::<Nested>(&bytes[..cut]).unwrap_err();
        prop_assert!(err.is_truncated(), "cut at {}: {:?}", cut, err);
    }

    #[test]
    fn prop_hex_dump_reverses(mut original in company(), width in 0usize..33) {
        let bytes = Codec::default().encode(&mut original).unwrap();
        let parsed = parse_hex_dump(&hex_dump(&bytes, width)).unwrap();
        prop_assert_eq!(parsed.as_slice(), &bytes[..]);
    }
}
