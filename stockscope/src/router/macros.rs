/// Generate a router async method that resolves the connector's provider for a
/// capability, applies the request timeout, and tags errors with the connector.
///
/// The generated method takes a `&Symbol` and returns whatever the provider
/// returns. Missing providers surface as `Unsupported(capability)`.
#[macro_export]
macro_rules! scope_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $sym:ident ) -> $ret:ty,
        accessor: $accessor:ident,
        capability: $capability:expr,
        call: $call_name:ident
    ) => {
        $(#[$meta])*
        #[tracing::instrument(
            target = "stockscope::router",
            skip(self),
            fields(symbol = %$sym),
        )]
        ///
        /// # Errors
        /// Returns `Unsupported` when the connector lacks the capability, the
        /// connector's error (tagged with its name) on failure, or
        /// `RequestTimeout` when a request timeout is configured and exceeded.
        pub async fn $name(
            &self,
            $sym: &stockscope_core::Symbol,
        ) -> Result<$ret, stockscope_core::ScopeError> {
            let connector = &self.connector;
            let provider = connector
                .$accessor()
                .ok_or_else(|| stockscope_core::ScopeError::unsupported($capability.as_str()))?;
            self.call_with_timeout($capability, provider.$call_name($sym))
                .await
                .map_err(|e| $crate::core::tag_err(connector.name(), e))
        }
    };
}
