//! HTML bodies for the transactional mails Mojo sends.

/// Subject for the registration confirmation mail.
pub const CONFIRM_SUBJECT: &str = "Confirm your Mojo ID registration";

/// Subject for the owner notification mail.
pub const NOTIFY_SUBJECT: &str = "Someone just thanked you!";

/// Escape a string for inclusion in an HTML body.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Body of the registration confirmation mail.
pub fn confirmation_body(confirm_url: &str) -> String {
    format!(
        "<p>Hello,</p>\n\
         <p>Click the link below to confirm your Mojo ID registration:</p>\n\
         <p><a href=\"{url}\">Confirm Registration</a></p>\n\
         <p>If you didn't request this, you can ignore this email.</p>",
        url = escape_html(confirm_url)
    )
}

/// Body of the mail notifying a tag owner about a new message.
pub fn notification_body(message: &str, sender_name: Option<&str>, location: Option<&str>) -> String {
    let from_line = match sender_name {
        Some(name) => format!("<p><b>From:</b> {}</p>", escape_html(name)),
        None => "<p><i>No name provided.</i></p>".to_string(),
    };
    let location_line = match location {
        Some(loc) => format!("<p><b>Location:</b> {}</p>", escape_html(loc)),
        None => String::new(),
    };

    format!(
        "<p>Hi there,</p>\n\
         <p>You just received a thank-you message via your Mojo tag:</p>\n\
         <blockquote>{message}</blockquote>\n\
         {from_line}{location_line}\
         <p><small>This message was sent through Mojo.spot. Replies are optional \
         and your privacy is always respected.</small></p>",
        message = escape_html(message),
    )
}

/// Subject for a contact form forward.
pub fn contact_subject(name: &str) -> String {
    format!("New contact from {name}")
}

/// Body of a contact form forward.
pub fn contact_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "<p><b>Name:</b> {name}</p>\n\
         <p><b>Email:</b> {email}</p>\n\
         <p><b>Message:</b></p>\n\
         <blockquote>{message}</blockquote>",
        name = escape_html(name),
        email = escape_html(email),
        message = escape_html(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_confirmation_body_contains_link() {
        let body = confirmation_body("https://mojo.spot/api/confirm?token=abc");
        assert!(body.contains("href=\"https://mojo.spot/api/confirm?token=abc\""));
        assert!(body.contains("Confirm Registration"));
    }

    #[test]
    fn test_notification_body_with_all_fields() {
        let body = notification_body("Thanks!", Some("Alice"), Some("Berlin"));
        assert!(body.contains("<blockquote>Thanks!</blockquote>"));
        assert!(body.contains("<b>From:</b> Alice"));
        assert!(body.contains("<b>Location:</b> Berlin"));
    }

    #[test]
    fn test_notification_body_anonymous() {
        let body = notification_body("Thanks!", None, None);
        assert!(body.contains("No name provided."));
        assert!(!body.contains("Location:"));
    }

    #[test]
    fn test_notification_body_escapes_message() {
        let body = notification_body("<b>bold</b>", None, None);
        assert!(body.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_contact_templates() {
        assert_eq!(contact_subject("Bob"), "New contact from Bob");
        let body = contact_body("Bob", "bob@example.com", "Hello there");
        assert!(body.contains("<b>Name:</b> Bob"));
        assert!(body.contains("<b>Email:</b> bob@example.com"));
        assert!(body.contains("<blockquote>Hello there</blockquote>"));
    }
}
