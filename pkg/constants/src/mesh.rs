//! Keys extracted from mesh routing/policy object specs.

// ─── Route rules ───────────────────────────────────────────────────────────

pub const ROUTE_RULE_DESTINATION: &str = "destination";
pub const ROUTE_RULE_PRECEDENCE: &str = "precedence";
pub const ROUTE_RULE_ROUTE: &str = "route";
pub const ROUTE_RULE_HTTP_FAULT: &str = "httpFault";

// ─── Destination policies ─────────────────────────────────────────────────

pub const POLICY_SOURCE: &str = "source";
pub const POLICY_DESTINATION: &str = "destination";
pub const POLICY_LOAD_BALANCING: &str = "loadBalancing";
pub const POLICY_CIRCUIT_BREAKER: &str = "circuitBreaker";
