// SPDX-License-Identifier: MIT
// web/pages.rs — Server-rendered HTML for the task list UI.
//
// No template engine: two small pages, built as strings. Every piece of
// user-supplied text goes through `escape_html` before interpolation.

use std::fmt::Write as _;

use crate::tasks::model::{TaskRow, MAX_DESCRIPTION_CHARS};
use crate::web::flash::Flash;

/// Escape text for safe interpolation into HTML element content or
/// double-quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

const STYLE: &str = "\
:root { color-scheme: light dark; }
body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
h1 { font-size: 1.4rem; }
form { display: flex; gap: .5rem; margin: 1rem 0; }
input[type=text] { flex: 1; padding: .4rem .6rem; }
ul.flash { list-style: none; padding: 0; }
ul.flash li { padding: .5rem .8rem; border-radius: .3rem; margin-bottom: .3rem; }
ul.flash li.error { background: #fdd; color: #900; }
ul.flash li.info { background: #def; color: #036; }
table { width: 100%; border-collapse: collapse; }
td { padding: .4rem .2rem; border-bottom: 1px solid #ccc3; }
td.id { color: #888; width: 2.5rem; }
tr.done td.desc { text-decoration: line-through; color: #888; }
td.actions { text-align: right; white-space: nowrap; }
td.actions a { margin-left: .8rem; text-decoration: none; }
p.empty { color: #888; }
";

/// Wrap `body` in the shared document shell.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n{body}</body>\n\
         </html>\n"
    )
}

/// The task list page: flash messages, the create form, one row per task.
pub fn index(tasks: &[TaskRow], flashes: &[Flash]) -> String {
    let mut body = String::from("<h1>Tasks</h1>\n");

    if !flashes.is_empty() {
        body.push_str("<ul class=\"flash\">\n");
        for f in flashes {
            let _ = writeln!(
                body,
                "  <li class=\"{}\">{}</li>",
                f.level.as_str(),
                escape_html(&f.text)
            );
        }
        body.push_str("</ul>\n");
    }

    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"/\">\n\
         <input type=\"text\" name=\"description\" maxlength=\"{MAX_DESCRIPTION_CHARS}\" \
         placeholder=\"What needs doing?\" autofocus>\n\
         <button type=\"submit\">Add</button>\n\
         </form>"
    );

    if tasks.is_empty() {
        body.push_str("<p class=\"empty\">Nothing to do yet.</p>\n");
    } else {
        body.push_str("<table>\n");
        for task in tasks {
            let class = if task.completed { " class=\"done\"" } else { "" };
            let toggle_label = if task.completed { "undo" } else { "done" };
            let _ = writeln!(
                body,
                "<tr{class}><td class=\"id\">{id}</td><td class=\"desc\">{desc}</td>\
                 <td class=\"actions\"><a href=\"/complete/{id}\">{toggle_label}</a>\
                 <a href=\"/delete/{id}\">delete</a></td></tr>",
                id = task.id,
                desc = escape_html(&task.description),
            );
        }
        body.push_str("</table>\n");
    }

    page("Tasks", &body)
}

/// Minimal 404 document for unknown task ids.
pub fn not_found() -> String {
    page(
        "Not found",
        "<h1>404 — no such task</h1>\n<p><a href=\"/\">Back to the list</a></p>\n",
    )
}

/// Minimal 500 document for a failed page load.
pub fn server_error() -> String {
    page(
        "Server error",
        "<h1>Something went wrong</h1>\n\
         <p>The task list could not be loaded. <a href=\"/\">Try again</a></p>\n",
    )
}

// ─── Tests ────────────────────────────────────────────────────────────────────
