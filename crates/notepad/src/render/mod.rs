//! HTML rendering for the note editor page.
//!
//! The page is the same for every note apart from two insertion points: the
//! identifier (title and header) and the note text (text area). Both go
//! through [`components::escape_html`], which also covers single quotes.

pub mod components;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use self::components::{EDITOR_JS, PAGE_CSS, escaped};

/// Product name shown in the title and header.
pub const SITE_NAME: &str = "Notepad";

/// Render the editor page for a note.
pub fn render_note_page(id: &str, content: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (SITE_NAME) " - " (escaped(id)) }
                meta name="robots" content="noindex, nofollow";
                link rel="icon" href="/favicon.ico" sizes="any";
                link rel="icon" href="/favicon.svg" type="image/svg+xml";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                div class="app" {
                    header {
                        div class="header-content" {
                            div class="note-id" { (SITE_NAME) ": " (escaped(id)) }
                            div class="header-actions" {
                                button class="action-btn" id="new-note" type="button" { "New Note" }
                                button class="action-btn" id="copy-url" type="button" { "Copy URL" }
                            }
                        }
                    }
                    div class="content-area" {
                        // Parsers drop one newline right after <textarea>, so
                        // emit one to keep a leading newline in the note.
                        textarea id="content" placeholder="Start writing..." spellcheck="false" {
                            "\n" (escaped(content))
                        }
                    }
                    footer {
                        div class="status" {
                            div class="status-icon" {}
                            span id="save-status" { "Changes saved" }
                        }
                        div id="char-count" { "0 characters" }
                    }
                }
                pre id="printable" {}
                script { (PreEscaped(EDITOR_JS)) }
            }
        }
    }
}
