// COMPILE-TIME LIMITS (not adjustable at runtime)

pub mod compile_time {
    pub mod dispatch {
        /// Hard cap on nested resource depth
        /// SECURITY: Prevents stack exhaustion on cyclic or hostile payloads
        pub const MAX_DISPATCH_DEPTH: usize = 32;

        /// Default nested resource depth
        /// The gateway nests at most transaction -> preauthorization -> transaction
        pub const DEFAULT_DISPATCH_DEPTH: usize = 8;
    }

    pub mod classification {
        /// Maximum levels walked while unwrapping nested error maps
        /// SECURITY: Bounds recursion on arbitrarily nested validation errors
        pub const MAX_ERROR_UNWRAP_DEPTH: usize = 64;

        /// Message used when no code or error body yields a description
        pub const UNDEFINED_ERROR_MESSAGE: &str = "Undefined Error. This should not happen!";
    }

    pub mod validation {
        /// Inclusive lower bound of a successful status
        pub const SUCCESS_STATUS_MIN: i64 = 200;

        /// Exclusive upper bound of a successful status
        pub const SUCCESS_STATUS_MAX: i64 = 300;
    }

    pub mod logging {
        /// Events retained by a memory logger before the oldest are dropped
        /// RESOURCE: Controls memory usage in long-running test harnesses
        pub const MEMORY_LOG_CAPACITY: usize = 10_000;
    }
}
