use std::fmt::Write;

use picker_core::{AppViewModel, Category, CategoryFilter, Phase, SessionEvent};

use crate::i18n::Dictionary;

pub fn role_label(category: Category, dict: &Dictionary) -> String {
    dict.t(&format!("role.{}", category.as_str()))
}

/// Roster screen: counter, role tabs, one line per agent, actions.
pub fn render_view(view: &AppViewModel, dict: &Dictionary) -> String {
    let mut out = String::new();
    let enabled = view.enabled.to_string();
    let total = view.total.to_string();
    let _ = writeln!(
        out,
        "{}",
        dict.tf("agents.enabled", &[("n", &enabled), ("total", &total)])
    );
    let _ = writeln!(out, "{}", render_tabs(view.filter, dict));

    if view.total == 0 {
        let _ = writeln!(out, "  {}", dict.t("agents.empty"));
    }
    for row in &view.rows {
        let mark = if row.disabled { ' ' } else { 'x' };
        let selected = if row.selected { " *" } else { "" };
        let _ = writeln!(
            out,
            "  [{mark}] {} ({}){selected}",
            row.name,
            role_label(row.category, dict)
        );
    }
    if view.fetch_in_flight {
        let _ = writeln!(out, "  {}", dict.t("agents.loading"));
    }
    if view.total > 0 && view.phase == Phase::Idle && !view.can_draw {
        let _ = writeln!(out, "  {}", dict.t("agents.noPool"));
    }

    let _ = write!(
        out,
        "pick: {} | enable-all: {} | disable-all: {}",
        dict.t("agents.pick"),
        dict.t("agents.enableAll"),
        dict.t("agents.disableAll")
    );
    out
}

fn render_tabs(active: CategoryFilter, dict: &Dictionary) -> String {
    let mut tabs = vec![(CategoryFilter::All, dict.t("tab.all"))];
    tabs.extend(
        Category::ALL
            .into_iter()
            .map(|category| (CategoryFilter::Only(category), role_label(category, dict))),
    );
    tabs.into_iter()
        .map(|(filter, label)| {
            if filter == active {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Text for a session transition; `None` when there is nothing to show.
pub fn render_event(
    event: &SessionEvent,
    current_disabled: bool,
    dict: &Dictionary,
) -> Option<String> {
    match event.phase {
        Phase::Idle => None,
        Phase::Drawing => Some(dict.t("agents.picking")),
        Phase::Revealed => {
            let result = event.current.as_ref()?;
            let item = &result.item;
            let mut out = String::new();
            let _ = writeln!(
                out,
                "#{} >> {} << ({})",
                result.sequence,
                item.display_name.to_uppercase(),
                role_label(item.category, dict)
            );
            if !item.details.description.is_empty() {
                let _ = writeln!(out, "{}", item.details.description);
            }
            for ability in &item.details.abilities {
                let _ = writeln!(out, "  - {}: {}", ability.slot, ability.name);
            }
            let disable = if current_disabled {
                dict.t("reveal.disabled")
            } else {
                dict.t("reveal.disable")
            };
            let _ = write!(
                out,
                "repick: {} | disable: {} | close: {}",
                dict.t("reveal.repick"),
                disable,
                dict.t("reveal.close")
            );
            Some(out)
        }
    }
}
