//! HTML form rendering

use html_escape::encode_double_quoted_attribute as escape;

/// Renders parameters as a self-submitting POST form with hidden inputs
pub struct FormRenderer;

impl FormRenderer {
    /// Every interpolated value is escaped for a double-quoted attribute.
    pub fn render(
        endpoint: &str,
        params: &[(&'static str, String)],
        button_text: &str,
        button_class: &str,
    ) -> String {
        let mut html = format!("<form method=\"POST\" action=\"{}\">\n", escape(endpoint));
        for (name, value) in params {
            html.push_str(&format!(
                "    <input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                escape(name),
                escape(value)
            ));
        }
        html.push_str(&format!(
            "    <input type=\"submit\" class=\"{}\" value=\"{}\">\n",
            escape(button_class),
            escape(button_text)
        ));
        html.push_str("</form>");
        html
    }
}
