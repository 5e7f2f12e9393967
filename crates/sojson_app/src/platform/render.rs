use sojson_core::{AppViewModel, NoticeKind, OperationButtonView};

/// Status lines for the terminal; the buffer itself is only printed on request.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let operations = view
        .operations
        .iter()
        .map(format_operation)
        .collect::<Vec<_>>()
        .join(" ");

    let trigger = if view.trigger_enabled {
        format!("[{}]", view.trigger_label)
    } else {
        format!("({})", view.trigger_label)
    };

    let mut lines = vec![format!(
        "{operations} | indent {} | {} chars | {trigger}",
        view.indent,
        format_with_commas(view.char_count as u64),
    )];

    if let Some(notice) = &view.notice {
        let marker = match notice.kind {
            NoticeKind::Error => "error",
            NoticeKind::Success => "ok",
        };
        lines.push(format!("{marker}: {}", notice.message));
    }

    lines
}

fn format_operation(button: &OperationButtonView) -> String {
    if button.active {
        format!("*{}*", button.label.to_ascii_lowercase())
    } else {
        button.label.to_ascii_lowercase()
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
