//! Order-status eligibility rule

/// Order statuses for which a customer may be called.
pub const CALLABLE_ORDER_STATUSES: [&str; 2] = ["pending", "delayed"];

/// Whether a call may be placed for an order in `order_status`.
///
/// Exact, case-sensitive match against [`CALLABLE_ORDER_STATUSES`]; the value
/// is neither trimmed nor normalized.
pub fn is_call_allowed(order_status: &str) -> bool {
    CALLABLE_ORDER_STATUSES.contains(&order_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_statuses() {
        assert!(is_call_allowed("pending"));
        assert!(is_call_allowed("delayed"));
    }

    #[test]
    fn test_denied_statuses() {
        assert!(!is_call_allowed("shipped"));
        assert!(!is_call_allowed("delivered"));
        assert!(!is_call_allowed(""));
    }

    #[test]
    fn test_no_normalization() {
        assert!(!is_call_allowed("Pending"));
        assert!(!is_call_allowed("DELAYED"));
        assert!(!is_call_allowed(" pending"));
        assert!(!is_call_allowed("delayed\n"));
    }
}
