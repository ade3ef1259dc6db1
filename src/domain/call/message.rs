//! Voice message composition for outbound calls

/// Name used when the request does not carry one
pub const DEFAULT_GREETING_NAME: &str = "customer";

/// Build the TwiML document read to the customer.
///
/// Both values come straight from the request and are escaped before being
/// placed into markup.
pub fn voice_message(name: Option<&str>, order_status: &str) -> String {
    let name = name.unwrap_or(DEFAULT_GREETING_NAME);
    format!(
        "<Response><Say>Hello {}. Your order is currently {}. Our team will contact you soon.</Say></Response>",
        escape_xml(name),
        escape_xml(order_status)
    )
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
