use stockscope_core::ScopeError;

use crate::helpers::dynamic_scope;

#[tokio::test]
async fn blank_queries_never_reach_the_connector() {
    let (scope, ctrl) = dynamic_scope();
    for q in ["", "   ", "\t\n"] {
        assert!(matches!(
            scope.search(q).await,
            Err(ScopeError::InvalidArg(_))
        ));
        assert!(matches!(
            scope.search_companies(q).await,
            Err(ScopeError::InvalidArg(_))
        ));
    }
    assert!(ctrl.calls().await.is_empty());
}
