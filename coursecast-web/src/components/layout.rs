//! Layout components - headers, cards, buttons, form inputs

/// Escapes text for use in HTML content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a page header with title and optional subtitle.
///
/// Used at the top of main content areas to establish page context.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{}</p>"#, escape_html(s)))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-start justify-between mb-8">
            <div>
                <h1 class="text-3xl font-bold text-white">{}</h1>
                {subtitle_html}
            </div>
        </div>"#,
        escape_html(title)
    )
}

/// Renders a card container with optional header.
///
/// `content` is inserted as-is and must already be safe HTML.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| {
            format!(
                r#"<div class="flex items-center justify-between mb-6">
                <h3 class="text-lg font-semibold text-white">{}</h3>
            </div>"#,
                escape_html(t)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders a button with Tailwind styling.
///
/// `"primary"` uses the brand color, anything else a neutral gray.
/// Attributes are inserted verbatim.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-coursecast-500 hover:bg-coursecast-600 text-white focus:ring-coursecast-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(
        r#"<button class="{base_classes} {variant_classes}" {attrs}>{}</button>"#,
        escape_html(text)
    )
}

/// Renders a text input with Tailwind styling and an initial value.
///
/// `extra_classes` are appended to the base class list.
pub fn input(
    id: &str,
    name: &str,
    placeholder: &str,
    value: &str,
    extra_classes: Option<&str>,
) -> String {
    let base_classes = "w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-coursecast-500 focus:border-transparent";
    let classes = match extra_classes {
        Some(extra) => format!("{base_classes} {extra}"),
        None => base_classes.to_string(),
    };

    format!(
        r#"<input type="text" id="{id}" name="{name}" placeholder="{}" value="{}"
                  class="{classes}" />"#,
        escape_html(placeholder),
        escape_html(value)
    )
}

/// Renders a hidden form input carrying `value` unchanged.
pub fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}" />"#,
        escape_html(name),
        escape_html(value)
    )
}
