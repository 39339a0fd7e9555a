//! Embedded email templates and placeholder rendering

use std::collections::HashMap;

/// Template for account-activation codes ({{name}}, {{otp}})
const USER_ACTIVATION_MAIL: &str = r#"<html>
  <body style="font-family: sans-serif; color: #1f2933;">
    <h2>Hi {{name}},</h2>
    <p>Use the code below to verify your email address:</p>
    <p style="font-size: 28px; font-weight: bold; letter-spacing: 6px;">{{otp}}</p>
    <p>The code expires in 5 minutes. If you did not request it, you can ignore this email.</p>
    <p>— The Shoply team</p>
  </body>
</html>"#;

/// Look up the body for a template id
pub fn template_body(template_id: &str) -> Option<&'static str> {
    match template_id {
        "user-activation-mail" => Some(USER_ACTIVATION_MAIL),
        _ => None,
    }
}

/// Substitute `{{key}}` placeholders with the given variables
///
/// Unknown placeholders are left in place; unused variables are ignored.
pub fn render(template: &str, variables: &HashMap<String, String>) -> String {
    let mut body = template.to_string();
    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        body = body.replace(&placeholder, value);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_placeholders() {
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("otp".to_string(), "4821".to_string());

        let body = render(template_body("user-activation-mail").unwrap(), &vars);
        assert!(body.contains("Hi Alice,"));
        assert!(body.contains("4821"));
        assert!(!body.contains("{{name}}"));
        assert!(!body.contains("{{otp}}"));
    }

    #[test]
    fn test_unknown_template() {
        assert!(template_body("password-reset-mail").is_none());
    }

    #[test]
    fn test_render_keeps_unknown_placeholders() {
        let vars = HashMap::new();
        assert_eq!(render("hello {{who}}", &vars), "hello {{who}}");
    }
}
