//! Optional combinator laws over a spread of payloads.

use rustlike_types::{FaultKind, Optional, Outcome};

use crate::common::{CallCounter, init_tracing};

const SAMPLES: [i64; 5] = [i64::MIN, -1, 0, 1, i64::MAX];

#[test]
fn present_round_trips_its_value() {
    for v in SAMPLES {
        let present = Optional::present(v);
        assert!(present.is_present());
        assert!(!present.is_absent());
        assert_eq!(present.unwrap(), Ok(v));
        assert_eq!(present.unwrap_or(42), v);
    }
}

#[test]
fn absent_falls_back_to_default() {
    for d in SAMPLES {
        assert_eq!(Optional::ABSENT.unwrap_or(d), d);
    }
}

#[test]
fn absent_unwrap_and_map_fault() {
    init_tracing();
    let counter = CallCounter::default();

    let unwrap = Optional::<i64>::ABSENT.unwrap().unwrap_err();
    assert_eq!(unwrap.kind(), FaultKind::AbsentUnwrap);

    let map = Optional::<i64>::ABSENT
        .map(|v| {
            counter.hit();
            v.wrapping_add(1)
        })
        .unwrap_err();
    assert_eq!(map.kind(), FaultKind::AbsentMap);
    assert_eq!(counter.count(), 0);
}

#[test]
fn map_applies_function_once() {
    let counter = CallCounter::default();
    for v in SAMPLES {
        let mapped = Optional::present(v)
            .map(|x| {
                counter.hit();
                x.wrapping_mul(3)
            })
            .unwrap();
        assert_eq!(mapped.unwrap(), Ok(v.wrapping_mul(3)));
    }
    assert_eq!(counter.count(), SAMPLES.len());
}

#[test]
fn to_result_round_trips() {
    for v in SAMPLES {
        let success = Optional::present(v).to_result_or("missing");
        assert_eq!(success.to_optional_success().unwrap(), Ok(v));
    }

    let failure: Outcome<i64, &str> = Optional::ABSENT.to_result_or("missing");
    assert!(failure.to_optional_success().is_absent());
    assert_eq!(failure.to_optional_failure().unwrap(), Ok("missing"));
}

#[test]
fn and_then_short_circuits_on_absent() {
    let counter = CallCounter::default();
    let chained = Optional::<i64>::ABSENT.and_then(|v| {
        counter.hit();
        Optional::present(v)
    });
    assert!(chained.is_absent());
    assert_eq!(counter.count(), 0);
}

#[test]
fn absent_is_one_shared_value() {
    let a: Optional<String> = Optional::absent();
    let b: Optional<String> = Optional::default();
    let c: Optional<String> = Optional::present(1).and_then(|_| Optional::ABSENT);
    assert_eq!(a, Optional::ABSENT);
    assert_eq!(b, Optional::ABSENT);
    assert_eq!(c, Optional::ABSENT);
}

#[test]
fn optional_of_outcome_is_opaque() {
    let inner: Outcome<u8, &str> = Outcome::failure("inner");
    let wrapped = Optional::present(inner);
    assert!(wrapped.is_present());
    assert_eq!(wrapped.unwrap().unwrap().unwrap_failure().unwrap(), "inner");
}
