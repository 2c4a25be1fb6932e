use proptest::prelude::*;
use stockscope::{EnrichPolicy, Enriched};
use stockscope_core::{ScopeError, SearchHit};
use stockscope_mock::MockBehavior;

use crate::helpers::{dynamic_scope, hit, profile, sym};

/// Enrich `SYM0..SYMn`, failing the profiles flagged in `fails`.
fn run(fails: &[bool], policy: EnrichPolicy) -> (Vec<SearchHit>, Vec<Enriched<SearchHit>>) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async {
        let (scope, ctrl) = dynamic_scope();
        let mut hits = Vec::with_capacity(fails.len());
        for (i, fail) in fails.iter().enumerate() {
            let s = format!("SYM{i}");
            let behavior = if *fail {
                MockBehavior::Fail(ScopeError::not_found(format!("profile for {s}")))
            } else {
                MockBehavior::Return(profile(&s, &s))
            };
            ctrl.set_profile_behavior(sym(&s), behavior).await;
            hits.push(hit(&s));
        }
        let report = scope.enrich(&hits, policy).await;
        (hits, report.items)
    })
}

fn symbols(items: &[Enriched<SearchHit>]) -> Vec<String> {
    items
        .iter()
        .map(|e| match e {
            Enriched::Full { profile, .. } => profile.symbol.to_string(),
            Enriched::Shallow(h) => h.symbol.to_string(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn keep_shallow_fills_every_slot_in_order(fails in proptest::collection::vec(any::<bool>(), 0..50)) {
        let (hits, items) = run(&fails, EnrichPolicy::KeepShallow);
        prop_assert_eq!(items.len(), hits.len());
        let expected: Vec<String> = hits.iter().map(|h| h.symbol.to_string()).collect();
        prop_assert_eq!(symbols(&items), expected);
        for (item, fail) in items.iter().zip(&fails) {
            prop_assert_eq!(item.is_full(), !fail);
        }
    }

    #[test]
    fn drop_failed_keeps_survivors_in_order(fails in proptest::collection::vec(any::<bool>(), 0..50)) {
        let (hits, items) = run(&fails, EnrichPolicy::DropFailed);
        prop_assert!(items.len() <= hits.len());
        prop_assert!(items.iter().all(Enriched::is_full));
        let expected: Vec<String> = hits
            .iter()
            .zip(&fails)
            .filter(|(_, fail)| !**fail)
            .map(|(h, _)| h.symbol.to_string())
            .collect();
        prop_assert_eq!(symbols(&items), expected);
    }
}
