use crate::calendar::{CalendarCell, CalendarPage};
use crate::date_window::{format_long_date, parse_date_key};
use crate::editor::{DayEditor, Draft, EditorState};
use crate::models::ALCOHOL_LABELS;

pub fn render_page(page: &CalendarPage, editor: &DayEditor, notice: Option<&str>) -> String {
    let cells: String = page.cells.iter().map(render_cell).collect();
    let modal = match editor.state() {
        EditorState::Open { date, draft } => render_modal(date, draft, notice),
        EditorState::Closed => String::new(),
    };
    let notice = match (notice, editor.is_open()) {
        (Some(message), false) => format!(r#"<div class="status" data-type="error">{}</div>"#, html_escape(message)),
        _ => String::new(),
    };

    INDEX_HTML
        .replace("{{MONTH}}", &html_escape(&page.title))
        .replace("{{PREV_DISABLED}}", disabled_attr(page.can_go_prev))
        .replace("{{NEXT_DISABLED}}", disabled_attr(page.can_go_next))
        .replace("{{CELLS}}", &cells)
        .replace("{{NOTICE}}", &notice)
        .replace("{{MODAL}}", &modal)
}

fn disabled_attr(enabled: bool) -> &'static str {
    if enabled { "" } else { " disabled" }
}

fn render_cell(cell: &CalendarCell) -> String {
    let indicators: String = cell
        .indicators
        .iter()
        .map(|indicator| {
            format!(
                r#"<span class="{}">{}</span>"#,
                indicator.css_class(),
                html_escape(indicator.token())
            )
        })
        .collect();
    let body = format!(
        r#"<div class="day-number">{}</div><div class="day-indicators">{}</div>"#,
        cell.day_of_month, indicators
    );

    if cell.clickable {
        format!(
            r#"<form class="{classes}" data-date="{date}" method="post" action="/day/{date}/open"><button class="day-hit" type="submit">{body}</button></form>"#,
            classes = cell.css_classes(),
            date = cell.date_str,
        )
    } else {
        format!(
            r#"<div class="{}" data-date="{}">{}</div>"#,
            cell.css_classes(),
            cell.date_str,
            body
        )
    }
}

fn render_modal(date: &str, draft: &Draft, notice: Option<&str>) -> String {
    let heading = parse_date_key(date)
        .map(format_long_date)
        .unwrap_or_else(|| date.to_string());
    let options: String = ALCOHOL_LABELS
        .iter()
        .enumerate()
        .map(|(level, label)| {
            let selected = if draft.alcohol == level as i64 { " selected" } else { "" };
            format!(r#"<option value="{level}"{selected}>{label}</option>"#)
        })
        .collect();
    let error = notice
        .map(|message| format!(r#"<div class="status" data-type="error">{}</div>"#, html_escape(message)))
        .unwrap_or_default();

    MODAL_HTML
        .replace("{{DATE_LABEL}}", &html_escape(&heading))
        .replace("{{ALCOHOL_OPTIONS}}", &options)
        .replace("{{EXERCISE}}", &render_toggle("exercise", draft.exercise))
        .replace("{{DRUGS}}", &render_toggle("drugs", draft.drugs))
        .replace("{{ERROR}}", &error)
        .replace("{{NOTES}}", &html_escape(&draft.notes))
}

fn render_toggle(name: &str, value: bool) -> String {
    [(true, "Yes"), (false, "No")]
        .iter()
        .map(|(option, label)| {
            let checked = if *option == value { " checked" } else { "" };
            format!(
                r#"<label class="toggle-btn"><input type="radio" name="{name}" value="{option}"{checked} /><span>{label}</span></label>"#
            )
        })
        .collect()
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

const MODAL_HTML: &str = r#"<div class="modal" id="modal">
      <form class="backdrop" method="post" action="/editor/cancel">
        <button class="backdrop-hit" type="submit" aria-label="Close"></button>
      </form>
      <div class="dialog" role="dialog" aria-modal="true">
        <div class="dialog-header">
          <h2 id="modal-date">{{DATE_LABEL}}</h2>
          <form method="post" action="/editor/cancel">
            <button class="close" id="close-modal" type="submit" aria-label="Close">&times;</button>
          </form>
        </div>
        <form class="editor" method="post" action="/editor/save">
          <label class="field">
            <span class="label">Alcohol</span>
            <select id="alcohol-level" name="alcohol">{{ALCOHOL_OPTIONS}}</select>
          </label>
          <div class="field">
            <span class="label">Exercise</span>
            <div class="toggle">{{EXERCISE}}</div>
          </div>
          <div class="field">
            <span class="label">Drugs</span>
            <div class="toggle">{{DRUGS}}</div>
          </div>
          <label class="field">
            <span class="label">Notes</span>
            <textarea id="notes" name="notes" rows="4">{{NOTES}}</textarea>
          </label>
          {{ERROR}}
          <button class="btn-save" id="save-btn" type="submit">Save</button>
        </form>
      </div>
    </div>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --sober: #e3f4e8;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.35;
      cursor: default;
    }

    .nav {
      background: var(--accent-2);
      color: white;
    }

    .calendar {
      display: grid;
      gap: 8px;
    }

    .day-row {
      display: flex;
      align-items: center;
      gap: 16px;
      background: white;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      margin: 0;
    }

    .day-row > .day-number,
    .day-hit {
      padding: 12px 16px;
    }

    .day-hit {
      display: flex;
      align-items: center;
      gap: 16px;
      width: 100%;
      background: transparent;
      border-radius: 14px;
      text-align: left;
      color: inherit;
    }

    .day-number {
      font-weight: 600;
      min-width: 2ch;
    }

    .day-indicators {
      display: flex;
      gap: 8px;
      flex-wrap: wrap;
    }

    .alcohol-text {
      color: #6b645d;
      font-size: 0.9rem;
    }

    .day-row.sat,
    .day-row.sun {
      border-color: rgba(255, 107, 74, 0.25);
    }

    .day-row.no-drinks {
      background: var(--sober);
    }

    .day-row.today {
      box-shadow: 0 0 0 2px var(--accent);
    }

    .day-row.future {
      opacity: 0.4;
    }

    .modal {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
    }

    .backdrop,
    .backdrop-hit {
      position: absolute;
      inset: 0;
      margin: 0;
      width: 100%;
      height: 100%;
      border-radius: 0;
      background: rgba(43, 42, 40, 0.45);
    }

    .dialog {
      position: relative;
      width: min(420px, 92vw);
      background: white;
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    .dialog-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .dialog-header h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .close {
      background: transparent;
      font-size: 1.4rem;
      padding: 4px 10px;
    }

    .editor {
      display: grid;
      gap: 14px;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    select,
    textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .toggle {
      display: flex;
      gap: 8px;
    }

    .toggle-btn input {
      position: absolute;
      opacity: 0;
    }

    .toggle-btn span {
      display: inline-block;
      padding: 8px 16px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.08);
      cursor: pointer;
    }

    .toggle-btn input:checked + span {
      background: var(--accent-2);
      color: white;
    }

    .btn-save {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <form method="post" action="/month/prev">
        <button class="nav" id="prev-month" type="submit"{{PREV_DISABLED}}>&larr;</button>
      </form>
      <h1 id="current-month">{{MONTH}}</h1>
      <form method="post" action="/month/next">
        <button class="nav" id="next-month" type="submit"{{NEXT_DISABLED}}>&rarr;</button>
      </form>
    </header>
    {{NOTICE}}
    <section class="calendar" id="calendar">{{CELLS}}</section>
  </main>
  {{MODAL}}
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_calendar;
    use crate::date_window::MonthCursor;
    use crate::models::{DayRecord, EditorForm};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn november_page(records: &BTreeMap<String, DayRecord>) -> CalendarPage {
        build_calendar(
            MonthCursor::new(2025, 11),
            NaiveDate::from_ymd_opt(2025, 11, 15).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 9).unwrap(),
            records,
        )
    }

    #[test]
    fn closed_editor_renders_grid_only() {
        let html = render_page(&november_page(&BTreeMap::new()), &DayEditor::new(), None);
        assert!(html.contains("November 2025"));
        assert!(html.contains(r#"id="prev-month" type="submit" disabled"#));
        assert!(html.contains(r#"action="/day/2025-11-15/open""#));
        assert!(!html.contains(r#"action="/day/2025-11-16/open""#));
        assert!(!html.contains(r#"id="modal""#));
        assert_eq!(html.matches(r#"class="day-number""#).count(), 30);
    }

    #[test]
    fn open_editor_renders_escaped_draft() {
        let mut records = BTreeMap::new();
        records.insert(
            "2025-11-12".to_string(),
            DayRecord {
                alcohol: 2,
                exercise: true,
                drugs: false,
                notes: "<b>late</b>".to_string(),
            },
        );
        let mut editor = DayEditor::new();
        editor.open("2025-11-12", records.get("2025-11-12"));

        let html = render_page(&november_page(&records), &editor, Some("could not save"));
        assert!(html.contains("November 12, 2025"));
        assert!(html.contains(r#"<option value="2" selected>Tipsy</option>"#));
        assert!(html.contains(r#"name="exercise" value="true" checked"#));
        assert!(html.contains(r#"name="drugs" value="false" checked"#));
        assert!(html.contains("&lt;b&gt;late&lt;/b&gt;"));
        assert!(html.contains("could not save"));
        assert!(html.contains("📝"));
    }

    #[test]
    fn rejected_level_keeps_previous_choice_selected() {
        let mut editor = DayEditor::new();
        editor.open(
            "2025-11-12",
            Some(&DayRecord {
                alcohol: 2,
                ..DayRecord::default()
            }),
        );
        let form = EditorForm {
            alcohol: "7".to_string(),
            exercise: true,
            drugs: false,
            notes: "kept".to_string(),
        };
        assert!(editor.draft_mut().unwrap().bind(&form).is_err());

        let html = render_page(&november_page(&BTreeMap::new()), &editor, None);
        assert_eq!(html.matches(" selected>").count(), 1);
        assert!(html.contains(r#"<option value="2" selected>Tipsy</option>"#));
        assert!(html.contains(r#"name="exercise" value="true" checked"#));
        assert!(html.contains("kept"));
    }
}
