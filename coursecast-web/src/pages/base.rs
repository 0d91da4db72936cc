//! Base document shared by every page.

use axum::response::Html;

use crate::components::layout::escape_html;

/// Wraps page content in the HTML document with Tailwind and HTMX loaded.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Coursecast</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'coursecast': {{
                                    400: '#5fd4a8',
                                    500: '#34b98a',
                                    600: '#2a9670'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}
                .htmx-request.htmx-indicator {{ opacity: 1; }}
            </style>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            <main class="max-w-5xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#,
        escape_html(title)
    );

    Html(html)
}
