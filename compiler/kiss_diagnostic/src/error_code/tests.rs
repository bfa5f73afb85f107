use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2002.as_str(), "E2002");
}

#[test]
fn test_phase_ranges_are_disjoint() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_scanner_error(),
            code.is_syntax_error(),
            code.is_semantic_error(),
        ];
        assert_eq!(
            phases.iter().filter(|p| **p).count(),
            1,
            "{code} must belong to exactly one phase"
        );
    }
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e2004".parse::<ErrorCode>(), Ok(ErrorCode::E2004));
}

#[test]
fn test_from_str_rejects_unknown() {
    assert!("E9999".parse::<ErrorCode>().is_err());
    assert!("".parse::<ErrorCode>().is_err());
}
