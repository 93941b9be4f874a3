use cross_origin_protection::{CrossOriginRequestError, Verdict};

pub fn assert_allowed(verdict: Verdict) {
    match verdict {
        Verdict::Allowed => {}
        other => panic!("expected allowed verdict, got {:?}", other),
    }
}

pub fn assert_denied(verdict: Verdict) -> CrossOriginRequestError {
    match verdict {
        Verdict::Denied(reason) => reason,
        other => panic!("expected denied verdict, got {:?}", other),
    }
}
